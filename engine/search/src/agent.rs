//! Per-turn players that wrap an engine.
//!
//! An agent owns its [`GameState`], re-synchronizes it from the authoritative
//! game on every call, and scales the engine's budget with the number of
//! pieces already on the board: late positions have fewer candidates, so
//! they can afford a deeper search or more playouts.

use games_quarto::{GameView, Piece, PieceSet, Player, Spot, SpotSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::{MinimaxConfig, MonteCarloConfig};
use crate::error::SearchError;
use crate::minimax::Minimax;
use crate::montecarlo::MonteCarlo;
use crate::state::GameState;

/// A player that answers the two per-turn questions.
pub trait Agent {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Pick the piece to hand to the opponent.
    fn choose_piece(&mut self, view: &dyn GameView) -> Result<Piece, SearchError>;

    /// Pick where to place the piece just received.
    fn place_piece(&mut self, view: &dyn GameView) -> Result<Spot, SearchError>;
}

/// A two-step budget keyed on pieces already placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSchedule {
    pub early: u32,
    pub late: u32,
    /// Pieces on the board from which `late` applies.
    pub late_game_pawns: usize,
}

impl BudgetSchedule {
    pub fn new(early: u32, late: u32, late_game_pawns: usize) -> Self {
        Self {
            early,
            late,
            late_game_pawns,
        }
    }

    /// Minimax depth: 1 up to nine pieces placed, 3 afterwards.
    pub fn minimax() -> Self {
        Self::new(1, 3, 10)
    }

    /// Monte Carlo playouts: 20 up to eleven pieces placed, 50 afterwards.
    pub fn montecarlo() -> Self {
        Self::new(20, 50, 12)
    }

    pub fn budget_for(&self, pawns: usize) -> u32 {
        if pawns < self.late_game_pawns {
            self.early
        } else {
            self.late
        }
    }
}

/// Agent driven by [`Minimax`].
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    state: GameState,
    engine: Minimax,
    schedule: BudgetSchedule,
}

impl MinimaxAgent {
    pub fn new<V: GameView + ?Sized>(
        view: &V,
        seat: Player,
        config: MinimaxConfig,
        schedule: BudgetSchedule,
        seed: Option<u64>,
    ) -> Self {
        let engine = match seed {
            Some(seed) => Minimax::with_seed(config, seed),
            None => Minimax::new(config),
        };
        Self {
            state: GameState::new(view, seat),
            engine,
            schedule,
        }
    }

    pub fn engine(&self) -> &Minimax {
        &self.engine
    }

    fn prepare(&mut self, view: &dyn GameView) {
        self.state.synchronize(view);
        let depth = self.schedule.budget_for(self.state.pieces_on_board());
        self.engine.set_depth(depth);
    }

    fn log_stats(&self, decision: &str) {
        let stats = self.engine.stats();
        debug!(
            decision,
            depth = self.engine.config().depth,
            pawns = self.state.pieces_on_board(),
            nodes_visited = stats.nodes_visited,
            alpha_cutoffs = stats.alpha_cutoffs,
            beta_cutoffs = stats.beta_cutoffs,
            "minimax decision"
        );
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_piece(&mut self, view: &dyn GameView) -> Result<Piece, SearchError> {
        self.prepare(view);
        let piece = self.engine.choose_piece(&mut self.state)?;
        self.log_stats("choose_piece");
        Ok(piece)
    }

    fn place_piece(&mut self, view: &dyn GameView) -> Result<Spot, SearchError> {
        self.prepare(view);
        let spot = self.engine.place_piece(&mut self.state)?;
        self.log_stats("place_piece");
        Ok(spot)
    }
}

/// Agent driven by [`MonteCarlo`].
#[derive(Debug, Clone)]
pub struct MonteCarloAgent {
    state: GameState,
    engine: MonteCarlo,
    schedule: BudgetSchedule,
}

impl MonteCarloAgent {
    pub fn new<V: GameView + ?Sized>(
        view: &V,
        seat: Player,
        config: MonteCarloConfig,
        schedule: BudgetSchedule,
        seed: Option<u64>,
    ) -> Self {
        let engine = match seed {
            Some(seed) => MonteCarlo::with_seed(config, seed),
            None => MonteCarlo::new(config),
        };
        Self {
            state: GameState::new(view, seat),
            engine,
            schedule,
        }
    }

    pub fn engine(&self) -> &MonteCarlo {
        &self.engine
    }

    fn prepare(&mut self, view: &dyn GameView) {
        self.state.synchronize(view);
        let matches = self.schedule.budget_for(self.state.pieces_on_board());
        self.engine.set_num_matches(matches);
        debug!(
            matches,
            pawns = self.state.pieces_on_board(),
            "monte carlo budget"
        );
    }
}

impl Agent for MonteCarloAgent {
    fn name(&self) -> &str {
        "montecarlo"
    }

    fn choose_piece(&mut self, view: &dyn GameView) -> Result<Piece, SearchError> {
        self.prepare(view);
        self.engine.choose_piece(&mut self.state)
    }

    fn place_piece(&mut self, view: &dyn GameView) -> Result<Spot, SearchError> {
        self.prepare(view);
        self.engine.place_piece(&mut self.state)
    }
}

/// Uniformly random agent.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_piece(&mut self, view: &dyn GameView) -> Result<Piece, SearchError> {
        let mut pieces: PieceSet = view.board_status().unplaced_pieces();
        if let Some(held) = view.selected_piece() {
            pieces.remove(held);
        }
        if pieces.is_empty() {
            return Err(SearchError::NoUsablePieces);
        }
        pieces
            .nth(self.rng.gen_range(0..pieces.len()))
            .ok_or(SearchError::NoUsablePieces)
    }

    fn place_piece(&mut self, view: &dyn GameView) -> Result<Spot, SearchError> {
        if view.selected_piece().is_none() {
            return Err(SearchError::NoSelectedPiece);
        }
        let spots: SpotSet = view.board_status().free_spots();
        if spots.is_empty() {
            return Err(SearchError::NoFreeSpots);
        }
        spots
            .nth(self.rng.gen_range(0..spots.len()))
            .ok_or(SearchError::NoFreeSpots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_quarto::{Outcome, Quarto};

    #[test]
    fn test_budget_schedules() {
        let depth = BudgetSchedule::minimax();
        assert_eq!(depth.budget_for(0), 1);
        assert_eq!(depth.budget_for(9), 1);
        assert_eq!(depth.budget_for(10), 3);

        let matches = BudgetSchedule::montecarlo();
        assert_eq!(matches.budget_for(11), 20);
        assert_eq!(matches.budget_for(12), 50);
        assert_eq!(matches.budget_for(16), 50);
    }

    fn play(game: &mut Quarto, agents: &mut [Box<dyn Agent>; 2]) -> Outcome {
        loop {
            let chooser = game.current_player().index();
            let piece = agents[chooser].choose_piece(&*game).unwrap();
            game.select(piece).unwrap();
            let placer = game.current_player().index();
            let spot = agents[placer].place_piece(&*game).unwrap();
            if let Some(outcome) = game.place(spot).unwrap() {
                return outcome;
            }
        }
    }

    #[test]
    fn test_agents_play_legal_games() {
        for seed in 0..3 {
            let mut game = Quarto::new();
            let mut agents: [Box<dyn Agent>; 2] = [
                Box::new(MinimaxAgent::new(
                    &game,
                    Player::First,
                    MinimaxConfig::default(),
                    BudgetSchedule::new(1, 2, 10),
                    Some(seed),
                )),
                Box::new(MonteCarloAgent::new(
                    &game,
                    Player::Second,
                    MonteCarloConfig::default(),
                    BudgetSchedule::new(2, 4, 12),
                    Some(seed),
                )),
            ];
            play(&mut game, &mut agents);
            assert!(game.is_over());
        }
    }

    #[test]
    fn test_minimax_agent_adjusts_depth() {
        let game = Quarto::new();
        let mut agent = MinimaxAgent::new(
            &game,
            Player::First,
            MinimaxConfig::default(),
            BudgetSchedule::minimax(),
            Some(1),
        );
        agent.choose_piece(&game).unwrap();
        assert_eq!(agent.engine().config().depth, 1);
    }

    #[test]
    fn test_minimax_beats_random_more_often_than_not() {
        let mut minimax_wins = 0;
        let mut random_wins = 0;
        for seed in 0..10 {
            let mut game = Quarto::new();
            let mut agents: [Box<dyn Agent>; 2] = [
                Box::new(MinimaxAgent::new(
                    &game,
                    Player::First,
                    MinimaxConfig::default(),
                    BudgetSchedule::new(1, 2, 10),
                    Some(seed),
                )),
                Box::new(RandomAgent::with_seed(seed)),
            ];
            match play(&mut game, &mut agents) {
                Outcome::Winner(Player::First) => minimax_wins += 1,
                Outcome::Winner(Player::Second) => random_wins += 1,
                Outcome::Draw => {}
            }
        }
        assert!(minimax_wins > random_wins, "{minimax_wins} vs {random_wins}");
    }

    #[test]
    fn test_random_agent_respects_preconditions() {
        let game = Quarto::new();
        let mut agent = RandomAgent::with_seed(0);
        assert_eq!(agent.place_piece(&game), Err(SearchError::NoSelectedPiece));
        let piece = agent.choose_piece(&game).unwrap();
        assert!(piece.id() < 16);
    }
}
