//! Exploration state: a mutable, undo-capable mirror of the authoritative game.
//!
//! Engines never touch the real game. They synchronize a [`GameState`] from a
//! [`GameView`], then explore by nesting `place`/`unmake` pairs in strict LIFO
//! order. Misuse of the undo discipline is a programming error and panics.

use games_quarto::{Board, GameView, Piece, PieceSet, Player, Spot, SpotSet, NUM_CELLS, NUM_PIECES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    board: Board,
    selected_piece: Option<Piece>,
    usable_pieces: PieceSet,
    free_spots: SpotSet,
    current_player: Player,
}

impl Position {
    fn from_view<V: GameView + ?Sized>(view: &V, current_player: Player) -> Self {
        let board = view.board_status();
        // A selection that already sits on the board cannot be placed again.
        let selected_piece = view.selected_piece().filter(|piece| !board.contains(*piece));
        Self {
            board,
            selected_piece,
            usable_pieces: board.unplaced_pieces(),
            free_spots: board.free_spots(),
            current_player,
        }
    }
}

/// Search-local copy of the game.
///
/// `usable_pieces` holds every piece not on the board, including the selected
/// one until it is placed, so that
/// `usable_pieces.len() + pieces_on_board() == 16` and
/// `free_spots.len() + pieces_on_board() == 16` hold at all times.
#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    snapshot: Position,
    engine: Player,
}

impl GameState {
    /// Mirror `view` on behalf of `engine`, the seat the engine plays.
    pub fn new<V: GameView + ?Sized>(view: &V, engine: Player) -> Self {
        let position = Position::from_view(view, engine);
        Self {
            position,
            snapshot: position,
            engine,
        }
    }

    /// Re-derive everything from the authoritative game and snapshot it.
    ///
    /// The current player is reset to the engine's seat.
    pub fn synchronize<V: GameView + ?Sized>(&mut self, view: &V) {
        self.position = Position::from_view(view, self.engine);
        self.snapshot();
    }

    /// Mark the current position as the one [`reset_to_snapshot`] returns to.
    ///
    /// [`reset_to_snapshot`]: GameState::reset_to_snapshot
    pub fn snapshot(&mut self) {
        self.snapshot = self.position;
    }

    /// Restore the board, selection, pool, spots and current player saved by
    /// the last [`snapshot`](GameState::snapshot).
    pub fn reset_to_snapshot(&mut self) {
        self.position = self.snapshot;
    }

    /// Select the piece to be placed next. The piece stays usable until placed.
    pub fn select_piece(&mut self, piece: Piece) {
        assert!(
            self.position.usable_pieces.contains(piece),
            "piece {piece} is not usable"
        );
        self.position.selected_piece = Some(piece);
    }

    /// Put back a selection saved earlier in the same search branch.
    pub(crate) fn restore_selection(&mut self, selected: Option<Piece>) {
        self.position.selected_piece = selected;
    }

    /// Place the selected piece on `spot`. The selection is left in place.
    pub fn place(&mut self, spot: Spot) {
        let piece = self
            .position
            .selected_piece
            .unwrap_or_else(|| panic!("place({spot}) with no piece selected"));
        assert!(
            self.position.free_spots.contains(spot),
            "spot {spot} is not free"
        );
        assert!(
            self.position.usable_pieces.contains(piece),
            "piece {piece} is already on the board"
        );

        self.position.board.set(spot, Some(piece));
        self.position.free_spots.remove(spot);
        self.position.usable_pieces.remove(piece);
    }

    /// Exact inverse of [`place`](GameState::place): clears `spot` and makes
    /// its piece usable and selected again.
    pub fn unmake(&mut self, spot: Spot) {
        let piece = self
            .position
            .board
            .get(spot)
            .unwrap_or_else(|| panic!("unmake({spot}) on an empty spot"));

        self.position.board.set(spot, None);
        self.position.free_spots.insert(spot);
        self.position.usable_pieces.insert(piece);
        self.position.selected_piece = Some(piece);
    }

    /// The current player if some full line is unanimous on an attribute.
    pub fn check_winner(&self) -> Option<Player> {
        self.position
            .board
            .has_quarto()
            .then_some(self.position.current_player)
    }

    /// True once no free spot remains, whether or not someone won.
    pub fn check_finished(&self) -> bool {
        self.position.free_spots.is_empty()
    }

    pub fn switch_player(&mut self) {
        self.position.current_player = self.position.current_player.other();
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.position.current_player = player;
    }

    pub fn board(&self) -> &Board {
        &self.position.board
    }

    pub fn selected_piece(&self) -> Option<Piece> {
        self.position.selected_piece
    }

    pub fn usable_pieces(&self) -> PieceSet {
        self.position.usable_pieces
    }

    pub fn free_spots(&self) -> SpotSet {
        self.position.free_spots
    }

    pub fn current_player(&self) -> Player {
        self.position.current_player
    }

    /// The seat this state explores on behalf of.
    pub fn engine(&self) -> Player {
        self.engine
    }

    pub fn pieces_on_board(&self) -> usize {
        NUM_CELLS - self.position.free_spots.len()
    }

    /// Both conservation counts hold.
    pub fn is_consistent(&self) -> bool {
        let placed = self.position.board.occupied_count();
        self.position.usable_pieces.len() + placed == NUM_PIECES
            && self.position.free_spots.len() + placed == NUM_CELLS
    }
}

impl GameView for GameState {
    fn board_status(&self) -> Board {
        self.position.board
    }

    fn selected_piece(&self) -> Option<Piece> {
        self.position.selected_piece
    }
}
