//! Game-tree search engines for Quarto.
//!
//! Two engines answer the same two questions, which piece to hand over and
//! where to place the piece received:
//!
//! - [`Minimax`]: depth-limited minimax with alpha-beta pruning and
//!   iterative move-order refinement at the root
//! - [`MonteCarlo`]: flat Monte Carlo, ranking each candidate by the mean
//!   reward of random playouts
//!
//! Both explore a [`GameState`], a mutable mirror of the authoritative game
//! that supports exact make/unmake and a snapshot reset. Engines leave the
//! state exactly as they found it.
//!
//! # Usage
//!
//! ```rust
//! use games_quarto::{Player, Quarto};
//! use search::{GameState, Minimax, MinimaxConfig};
//!
//! let game = Quarto::new();
//! let mut state = GameState::new(&game, Player::First);
//! let mut engine = Minimax::with_seed(MinimaxConfig::for_testing(), 42);
//!
//! let piece = engine.choose_piece(&mut state).unwrap();
//! println!("hand over {piece}, {:?}", engine.stats());
//! ```
//!
//! # Agents
//!
//! [`MinimaxAgent`], [`MonteCarloAgent`] and [`RandomAgent`] implement
//! [`Agent`]: they synchronize from a [`games_quarto::GameView`] on every
//! call and pick the engine budget from a [`BudgetSchedule`].

pub mod agent;
pub mod config;
mod error;
pub mod minimax;
pub mod montecarlo;
pub mod state;

pub use agent::{Agent, BudgetSchedule, MinimaxAgent, MonteCarloAgent, RandomAgent};
pub use config::{MinimaxConfig, MonteCarloConfig};
pub use error::SearchError;
pub use minimax::{Minimax, Phase, Score, SearchStats, Side, DRAW, LOSS, WIN};
pub use montecarlo::MonteCarlo;
pub use state::GameState;
