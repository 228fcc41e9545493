//! The authoritative game: owns the real board and enforces legality.

use thiserror::Error;

use crate::board::{Board, Spot, SpotSet};
use crate::piece::{Piece, PieceSet};

/// Errors raised by illegal use of the authoritative game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid piece id: {0}")]
    InvalidPiece(u8),

    #[error("Invalid spot: ({x}, {y})")]
    InvalidSpot { x: u8, y: u8 },

    #[error("Piece {0} is already on the board")]
    PieceUnavailable(Piece),

    #[error("Spot {0} is already occupied")]
    SpotOccupied(Spot),

    #[error("A piece is already selected: {0}")]
    PieceAlreadySelected(Piece),

    #[error("No piece has been selected")]
    NoPieceSelected,

    #[error("The game is already over")]
    GameOver,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// 0 for the first seat, 1 for the second.
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Read-only view of a game, as consumed by search engines.
pub trait GameView {
    /// Current board contents.
    fn board_status(&self) -> Board;

    /// The piece handed over and awaiting placement, if any.
    fn selected_piece(&self) -> Option<Piece>;

    fn pieces_on_board(&self) -> usize {
        self.board_status().occupied_count()
    }
}

/// Authoritative Quarto game.
///
/// A turn is a hand-off followed by a placement: the current player selects
/// a piece for the opponent, the opponent becomes the current player and
/// places it, then selects the next piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quarto {
    board: Board,
    selected: Option<Piece>,
    current_player: Player,
    outcome: Option<Outcome>,
}

impl Default for Quarto {
    fn default() -> Self {
        Self::new()
    }
}

impl Quarto {
    /// Create a new game with an empty board; the first seat hands over first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            selected: None,
            current_player: Player::First,
            outcome: None,
        }
    }

    /// Build a mid-game position.
    ///
    /// `current_player` is the seat that acts next: it places `selected` if
    /// one is given, otherwise it selects.
    pub fn from_board(
        board: Board,
        selected: Option<Piece>,
        current_player: Player,
    ) -> Result<Self, GameError> {
        if let Some(piece) = selected {
            if board.contains(piece) {
                return Err(GameError::PieceUnavailable(piece));
            }
        }
        let outcome = if board.has_quarto() {
            // The placing seat stays current, so the line is credited to it.
            Some(Outcome::Winner(current_player))
        } else if board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        };
        Ok(Self {
            board,
            selected,
            current_player,
            outcome,
        })
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn available_pieces(&self) -> PieceSet {
        let mut pieces = self.board.unplaced_pieces();
        if let Some(piece) = self.selected {
            pieces.remove(piece);
        }
        pieces
    }

    pub fn free_spots(&self) -> SpotSet {
        self.board.free_spots()
    }

    /// Hand `piece` to the opponent, who becomes the current player.
    pub fn select(&mut self, piece: Piece) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if let Some(held) = self.selected {
            return Err(GameError::PieceAlreadySelected(held));
        }
        if self.board.contains(piece) {
            return Err(GameError::PieceUnavailable(piece));
        }
        self.selected = Some(piece);
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// Place the selected piece for the current player.
    ///
    /// Returns the outcome once the game is decided.
    pub fn place(&mut self, spot: Spot) -> Result<Option<Outcome>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self.selected.ok_or(GameError::NoPieceSelected)?;
        if self.board.get(spot).is_some() {
            return Err(GameError::SpotOccupied(spot));
        }

        self.board.set(spot, Some(piece));
        self.selected = None;

        if self.board.has_quarto() {
            self.outcome = Some(Outcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }
        Ok(self.outcome)
    }

    /// Place by raw coordinates, validating them first.
    pub fn place_at(&mut self, x: u8, y: u8) -> Result<Option<Outcome>, GameError> {
        let spot = Spot::new(x, y).ok_or(GameError::InvalidSpot { x, y })?;
        self.place(spot)
    }
}

impl GameView for Quarto {
    fn board_status(&self) -> Board {
        self.board
    }

    fn selected_piece(&self) -> Option<Piece> {
        self.selected
    }
}
