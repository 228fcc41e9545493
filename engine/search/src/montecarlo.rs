//! Flat Monte Carlo evaluation.
//!
//! Each candidate decision is scored by the mean reward of `num_matches`
//! independent random playouts started right after it. No tree is built.
//!
//! Rewards are anchored to the engine's seat: every playout forces the
//! current player to the engine, so any completed line is credited as an
//! engine win. This is an approximation that ignores which seat actually
//! made the winning placement during the random walk.

use games_quarto::{Piece, PieceSet, Spot, SpotSet};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::config::MonteCarloConfig;
use crate::error::SearchError;
use crate::state::GameState;

const WIN_REWARD: f64 = 1.0;
const DRAW_REWARD: f64 = 0.5;
const LOSS_REWARD: f64 = 0.0;

/// Flat Monte Carlo decision engine.
#[derive(Debug, Clone)]
pub struct MonteCarlo {
    config: MonteCarloConfig,
    rng: ChaCha20Rng,
}

impl MonteCarlo {
    pub fn new(config: MonteCarloConfig) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    pub fn set_num_matches(&mut self, num_matches: u32) {
        self.config.num_matches = num_matches;
    }

    /// Choose the piece with the highest win ratio.
    pub fn choose_piece(&mut self, state: &mut GameState) -> Result<Piece, SearchError> {
        let ratios = self.piece_ratios(state)?;
        best_of(ratios).ok_or(SearchError::NoUsablePieces)
    }

    /// Choose the spot with the highest win ratio for the selected piece.
    pub fn place_piece(&mut self, state: &mut GameState) -> Result<Spot, SearchError> {
        let ratios = self.spot_ratios(state)?;
        best_of(ratios).ok_or(SearchError::NoFreeSpots)
    }

    /// Win ratio of handing over each usable piece, in shuffled order.
    ///
    /// Each trial gives the piece to the opponent, places it on a random free
    /// spot, and plays out the rest of the game at random.
    pub fn piece_ratios(&mut self, state: &mut GameState) -> Result<Vec<(Piece, f64)>, SearchError> {
        self.check_budget()?;
        let held = state.selected_piece();
        let mut pieces: Vec<Piece> = state
            .usable_pieces()
            .iter()
            .filter(|piece| Some(*piece) != held)
            .collect();
        if pieces.is_empty() {
            return Err(SearchError::NoUsablePieces);
        }
        if state.free_spots().is_empty() {
            return Err(SearchError::NoFreeSpots);
        }
        pieces.shuffle(&mut self.rng);

        state.snapshot();
        let mut ratios = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let mut score = 0.0;
            for _ in 0..self.config.num_matches {
                state.select_piece(piece);
                state.switch_player();
                if let Some(spot) = random_spot(&mut self.rng, state.free_spots()) {
                    state.place(spot);
                }
                score += self.run_simulation(state);
                state.reset_to_snapshot();
            }
            ratios.push((piece, score / f64::from(self.config.num_matches)));
        }

        trace!(candidates = ratios.len(), "monte carlo scored pieces");
        Ok(ratios)
    }

    /// Win ratio of placing the selected piece on each free spot, in shuffled order.
    pub fn spot_ratios(&mut self, state: &mut GameState) -> Result<Vec<(Spot, f64)>, SearchError> {
        self.check_budget()?;
        if state.selected_piece().is_none() {
            return Err(SearchError::NoSelectedPiece);
        }
        let mut spots: Vec<Spot> = state.free_spots().iter().collect();
        if spots.is_empty() {
            return Err(SearchError::NoFreeSpots);
        }
        spots.shuffle(&mut self.rng);

        state.snapshot();
        let mut ratios = Vec::with_capacity(spots.len());
        for spot in spots {
            let mut score = 0.0;
            for _ in 0..self.config.num_matches {
                state.place(spot);
                score += self.run_simulation(state);
                state.reset_to_snapshot();
            }
            ratios.push((spot, score / f64::from(self.config.num_matches)));
        }

        trace!(candidates = ratios.len(), "monte carlo scored spots");
        Ok(ratios)
    }

    fn check_budget(&self) -> Result<(), SearchError> {
        if self.config.num_matches == 0 {
            return Err(SearchError::InvalidBudget(
                "num_matches must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Play random hand-offs and placements until a line is completed or the
    /// board fills, and return the reward from the engine's seat.
    fn run_simulation(&mut self, state: &mut GameState) -> f64 {
        state.set_current_player(state.engine());

        let mut winner = state.check_winner();
        while winner.is_none() && !state.check_finished() {
            let (Some(piece), Some(spot)) = (
                random_piece(&mut self.rng, state.usable_pieces()),
                random_spot(&mut self.rng, state.free_spots()),
            ) else {
                break;
            };
            state.select_piece(piece);
            state.place(spot);
            winner = state.check_winner();
        }

        match winner {
            Some(player) if player == state.engine() => WIN_REWARD,
            Some(_) => LOSS_REWARD,
            None => DRAW_REWARD,
        }
    }
}

fn random_piece(rng: &mut ChaCha20Rng, pieces: PieceSet) -> Option<Piece> {
    if pieces.is_empty() {
        return None;
    }
    pieces.nth(rng.gen_range(0..pieces.len()))
}

fn random_spot(rng: &mut ChaCha20Rng, spots: SpotSet) -> Option<Spot> {
    if spots.is_empty() {
        return None;
    }
    spots.nth(rng.gen_range(0..spots.len()))
}

/// First candidate with the maximal ratio.
fn best_of<T: Copy>(ratios: Vec<(T, f64)>) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (candidate, ratio) in ratios {
        if best.map_or(true, |(_, top)| ratio > top) {
            best = Some((candidate, ratio));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{piece, spot, state_with};
    use games_quarto::{Player, Quarto};

    /// The first two rows of a drawn board: eight pieces, no line.
    const OPENING: [((u8, u8), u8); 8] = [
        ((0, 0), 0),
        ((1, 0), 15),
        ((2, 0), 3),
        ((3, 0), 12),
        ((0, 1), 14),
        ((1, 1), 5),
        ((2, 1), 8),
        ((3, 1), 7),
    ];

    #[test]
    fn test_choose_piece_leaves_no_residue() {
        let mut state = GameState::new(&Quarto::new(), Player::First);
        let before = state.clone();
        let mut engine = MonteCarlo::with_seed(MonteCarloConfig::for_testing(), 42);

        let chosen = engine.choose_piece(&mut state).unwrap();
        assert!(before.usable_pieces().contains(chosen));
        assert_eq!(state.board(), before.board());
        assert_eq!(state.usable_pieces(), before.usable_pieces());
        assert_eq!(state.free_spots(), before.free_spots());
        assert_eq!(state.selected_piece(), None);
        assert_eq!(state.current_player(), Player::First);
    }

    #[test]
    fn test_place_piece_leaves_no_residue() {
        let mut state = state_with(&OPENING, Some(1));
        let before = state.clone();
        let mut engine = MonteCarlo::with_seed(MonteCarloConfig::for_testing(), 42);

        let chosen = engine.place_piece(&mut state).unwrap();
        assert!(before.free_spots().contains(chosen));
        assert_eq!(state.board(), before.board());
        assert_eq!(state.usable_pieces(), before.usable_pieces());
        assert_eq!(state.free_spots(), before.free_spots());
        assert_eq!(state.selected_piece(), Some(piece(1)));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_ratios_cover_every_candidate() {
        let mut state = state_with(&OPENING, Some(1));
        let mut engine = MonteCarlo::with_seed(MonteCarloConfig::for_testing(), 5);

        let spots = engine.spot_ratios(&mut state).unwrap();
        assert_eq!(spots.len(), 8);
        assert!(spots.iter().all(|(_, r)| (0.0..=1.0).contains(r)));

        state.restore_selection(None);
        let pieces = engine.piece_ratios(&mut state).unwrap();
        assert_eq!(pieces.len(), 8);
        assert!(pieces.iter().all(|(_, r)| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn test_immediate_win_scores_full_reward() {
        let mut state = state_with(&[((0, 0), 8), ((1, 0), 9), ((2, 0), 10)], Some(11));
        let mut engine = MonteCarlo::with_seed(MonteCarloConfig::for_testing(), 11);

        let ratios = engine.spot_ratios(&mut state).unwrap();
        let (_, winning) = ratios
            .iter()
            .find(|(candidate, _)| *candidate == spot(3, 0))
            .unwrap();
        assert_eq!(*winning, WIN_REWARD);
    }

    fn ratio_variance(num_matches: u32, runs: u64) -> f64 {
        let samples: Vec<f64> = (0..runs)
            .map(|seed| {
                let mut state = state_with(&OPENING, Some(1));
                let mut engine = MonteCarlo::with_seed(
                    MonteCarloConfig::default().with_num_matches(num_matches),
                    seed,
                );
                let ratios = engine.spot_ratios(&mut state).unwrap();
                ratios
                    .into_iter()
                    .find(|(candidate, _)| *candidate == spot(0, 2))
                    .map(|(_, ratio)| ratio)
                    .unwrap()
            })
            .collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64
    }

    #[test]
    fn test_more_matches_reduce_ratio_variance() {
        let coarse = ratio_variance(2, 60);
        let fine = ratio_variance(64, 60);
        assert!(coarse > 0.0);
        assert!(fine < coarse, "fine {fine} >= coarse {coarse}");
    }

    #[test]
    fn test_best_of_prefers_first_maximum() {
        let ratios = vec![(1, 0.25), (2, 0.75), (3, 0.75), (4, 0.5)];
        assert_eq!(best_of(ratios), Some(2));
        assert_eq!(best_of::<u8>(Vec::new()), None);
    }

    #[test]
    fn test_root_preconditions() {
        let mut state = GameState::new(&Quarto::new(), Player::First);
        let mut engine = MonteCarlo::with_seed(MonteCarloConfig::for_testing(), 0);
        assert_eq!(
            engine.place_piece(&mut state),
            Err(SearchError::NoSelectedPiece)
        );

        engine.set_num_matches(0);
        assert!(matches!(
            engine.choose_piece(&mut state),
            Err(SearchError::InvalidBudget(_))
        ));
    }
}
