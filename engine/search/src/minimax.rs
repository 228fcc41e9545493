//! Depth-limited minimax with alpha-beta pruning.
//!
//! A Quarto turn has two decision points: handing over a piece and placing
//! the piece received. The search alternates between them as a two-state
//! machine ([`Phase`]), and only the hand-off into a placement consumes
//! depth, so `depth` bounds how many placements are explored.
//!
//! There is no static evaluation. Scores are `WIN` (+1) when the engine
//! completes a line, `LOSS` (-1) when the opponent does, and `DRAW` (0) for a
//! full board or for reaching the horizon.
//!
//! Root decisions refine move order iteratively: candidates are shuffled once,
//! then for each depth `0..config.depth` they are stably sorted by the
//! previous pass's score and re-evaluated, so the deepest pass meets the
//! strongest candidates first.

use games_quarto::{Piece, Spot};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::config::MinimaxConfig;
use crate::error::SearchError;
use crate::state::GameState;

/// A minimax score. Every evaluator returns one of `LOSS`, `DRAW`, `WIN`.
pub type Score = i32;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// Below any real score: unscored root candidates and the empty maximum.
const UNSCORED: Score = -100;
/// Above any real score: the empty minimum.
const UNBEATEN: Score = 100;

/// The decision a node is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPieceChoice,
    AwaitingPlacement,
}

/// Who makes the decision at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The engine.
    Max,
    /// The opponent.
    Min,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    fn worst(self) -> Score {
        match self {
            Side::Max => UNSCORED,
            Side::Min => UNBEATEN,
        }
    }

    /// Value of a placement by this side that completes a line.
    fn win_value(self) -> Score {
        match self {
            Side::Max => WIN,
            Side::Min => LOSS,
        }
    }
}

/// Diagnostic counters. They accumulate across searches until
/// [`Minimax::reset_stats`] is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Placements tried.
    pub nodes_visited: u64,
    /// Cutoffs taken by the maximizing side.
    pub alpha_cutoffs: u64,
    /// Cutoffs taken by the minimizing side.
    pub beta_cutoffs: u64,
}

/// Minimax decision engine.
#[derive(Debug, Clone)]
pub struct Minimax {
    config: MinimaxConfig,
    stats: SearchStats,
    rng: ChaCha20Rng,
}

impl Minimax {
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Create an engine whose candidate shuffles are reproducible.
    pub fn with_seed(config: MinimaxConfig, seed: u64) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.config.depth = depth;
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Choose the piece to hand to the opponent.
    ///
    /// The piece currently awaiting placement, if any, is not a candidate.
    /// The state is left exactly as it was found.
    pub fn choose_piece(&mut self, state: &mut GameState) -> Result<Piece, SearchError> {
        self.check_budget()?;
        let held = state.selected_piece();
        let candidates: Vec<Piece> = state
            .usable_pieces()
            .iter()
            .filter(|piece| Some(*piece) != held)
            .collect();
        if candidates.is_empty() {
            return Err(SearchError::NoUsablePieces);
        }

        let best = self.refine(candidates, |engine, piece, depth| {
            state.select_piece(piece);
            engine.min_move(state, LOSS, WIN, depth)
        });
        state.restore_selection(held);

        trace!(piece = ?best, nodes = self.stats.nodes_visited, "minimax chose piece");
        best.ok_or(SearchError::NoUsablePieces)
    }

    /// Choose where to place the selected piece.
    ///
    /// The state is left exactly as it was found.
    pub fn place_piece(&mut self, state: &mut GameState) -> Result<Spot, SearchError> {
        self.check_budget()?;
        if state.selected_piece().is_none() {
            return Err(SearchError::NoSelectedPiece);
        }
        let candidates: Vec<Spot> = state.free_spots().iter().collect();
        if candidates.is_empty() {
            return Err(SearchError::NoFreeSpots);
        }

        let best = self.refine(candidates, |engine, spot, depth| {
            engine.placement_value(state, spot, Side::Max, LOSS, WIN, depth)
        });

        trace!(spot = ?best, nodes = self.stats.nodes_visited, "minimax chose spot");
        best.ok_or(SearchError::NoFreeSpots)
    }

    /// The engine hands a piece to the opponent, maximizing.
    pub fn max_piece(&mut self, state: &mut GameState, alpha: Score, beta: Score, depth: u32) -> Score {
        self.search(state, Phase::AwaitingPieceChoice, Side::Max, alpha, beta, depth)
    }

    /// The opponent hands a piece to the engine, minimizing.
    pub fn min_piece(&mut self, state: &mut GameState, alpha: Score, beta: Score, depth: u32) -> Score {
        self.search(state, Phase::AwaitingPieceChoice, Side::Min, alpha, beta, depth)
    }

    /// The engine places the selected piece, maximizing.
    pub fn max_move(&mut self, state: &mut GameState, alpha: Score, beta: Score, depth: u32) -> Score {
        self.search(state, Phase::AwaitingPlacement, Side::Max, alpha, beta, depth)
    }

    /// The opponent places the selected piece, minimizing.
    pub fn min_move(&mut self, state: &mut GameState, alpha: Score, beta: Score, depth: u32) -> Score {
        self.search(state, Phase::AwaitingPlacement, Side::Min, alpha, beta, depth)
    }

    fn check_budget(&self) -> Result<(), SearchError> {
        if self.config.depth == 0 {
            return Err(SearchError::InvalidBudget(
                "minimax depth must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Shuffle, then re-score every candidate once per depth in order of the
    /// previous pass. Returns the best candidate, ties going to the earliest
    /// in shuffled order.
    fn refine<T: Copy>(
        &mut self,
        mut candidates: Vec<T>,
        mut evaluate: impl FnMut(&mut Self, T, u32) -> Score,
    ) -> Option<T> {
        candidates.shuffle(&mut self.rng);
        // (shuffled position, candidate, score)
        let mut scored: Vec<(usize, T, Score)> = candidates
            .into_iter()
            .enumerate()
            .map(|(order, candidate)| (order, candidate, UNSCORED))
            .collect();

        for current_depth in 0..self.config.depth {
            scored.sort_by(|a, b| b.2.cmp(&a.2));
            for entry in scored.iter_mut() {
                entry.2 = evaluate(self, entry.1, current_depth);
            }
        }

        scored
            .into_iter()
            .max_by(|a, b| a.2.cmp(&b.2).then(b.0.cmp(&a.0)))
            .map(|(_, candidate, _)| candidate)
    }

    fn search(
        &mut self,
        state: &mut GameState,
        phase: Phase,
        side: Side,
        mut alpha: Score,
        mut beta: Score,
        depth: u32,
    ) -> Score {
        let mut best = side.worst();
        match phase {
            Phase::AwaitingPieceChoice => {
                assert!(depth > 0, "piece choice searched at depth 0");
                let held = state.selected_piece();
                for piece in state.usable_pieces().iter() {
                    state.select_piece(piece);
                    // The receiver of the piece places it.
                    let score = self.search(
                        state,
                        Phase::AwaitingPlacement,
                        side.other(),
                        alpha,
                        beta,
                        depth - 1,
                    );
                    if self.fold(side, score, &mut best, &mut alpha, &mut beta) {
                        break;
                    }
                }
                state.restore_selection(held);
            }
            Phase::AwaitingPlacement => {
                for spot in state.free_spots().iter() {
                    let score = self.placement_value(state, spot, side, alpha, beta, depth);
                    if self.fold(side, score, &mut best, &mut alpha, &mut beta) {
                        break;
                    }
                }
            }
        }
        best
    }

    /// Score `side` placing the selected piece on `spot`, then undo it.
    fn placement_value(
        &mut self,
        state: &mut GameState,
        spot: Spot,
        side: Side,
        alpha: Score,
        beta: Score,
        depth: u32,
    ) -> Score {
        state.place(spot);
        self.stats.nodes_visited += 1;

        let score = if state.check_winner().is_some() {
            side.win_value()
        } else if depth == 0 || state.check_finished() {
            DRAW
        } else {
            // The placer chooses the next piece; hand-offs are free.
            self.search(state, Phase::AwaitingPieceChoice, side, alpha, beta, depth)
        };

        state.unmake(spot);
        score
    }

    /// Fold `score` into the running best, tighten this side's bound, and
    /// report whether the remaining siblings can be cut off.
    fn fold(
        &mut self,
        side: Side,
        score: Score,
        best: &mut Score,
        alpha: &mut Score,
        beta: &mut Score,
    ) -> bool {
        match side {
            Side::Max => {
                *best = (*best).max(score);
                if self.config.pruning {
                    *alpha = (*alpha).max(*best);
                    if *beta <= *alpha {
                        self.stats.alpha_cutoffs += 1;
                        return true;
                    }
                }
            }
            Side::Min => {
                *best = (*best).min(score);
                if self.config.pruning {
                    *beta = (*beta).min(*best);
                    if *beta <= *alpha {
                        self.stats.beta_cutoffs += 1;
                        return true;
                    }
                }
            }
        }
        false
    }
}
