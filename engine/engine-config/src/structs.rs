//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_early_depth() -> u32 {
    defaults::minimax_early_depth()
}
fn d_late_depth() -> u32 {
    defaults::minimax_late_depth()
}
fn d_minimax_late_pawns() -> usize {
    defaults::minimax_late_game_pawns()
}
fn d_pruning() -> bool {
    defaults::minimax_pruning()
}
fn d_early_matches() -> u32 {
    defaults::montecarlo_early_matches()
}
fn d_late_matches() -> u32 {
    defaults::montecarlo_late_matches()
}
fn d_montecarlo_late_pawns() -> usize {
    defaults::montecarlo_late_game_pawns()
}
fn d_games() -> u32 {
    defaults::arena_games()
}
fn d_first() -> String {
    defaults::arena_first().into()
}
fn d_second() -> String {
    defaults::arena_second().into()
}
fn d_swap_seats() -> bool {
    defaults::arena_swap_seats()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub minimax: MinimaxConfig,
    #[serde(default)]
    pub montecarlo: MonteCarloConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Seed for every engine RNG; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: None,
        }
    }
}

/// Minimax agent budget: search depth before and after the late-game threshold
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MinimaxConfig {
    #[serde(default = "d_early_depth")]
    pub early_depth: u32,
    #[serde(default = "d_late_depth")]
    pub late_depth: u32,
    #[serde(default = "d_minimax_late_pawns")]
    pub late_game_pawns: usize,
    #[serde(default = "d_pruning")]
    pub pruning: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            early_depth: defaults::minimax_early_depth(),
            late_depth: defaults::minimax_late_depth(),
            late_game_pawns: defaults::minimax_late_game_pawns(),
            pruning: defaults::minimax_pruning(),
        }
    }
}

/// Monte Carlo agent budget: playouts per candidate before and after the
/// late-game threshold
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MonteCarloConfig {
    #[serde(default = "d_early_matches")]
    pub early_matches: u32,
    #[serde(default = "d_late_matches")]
    pub late_matches: u32,
    #[serde(default = "d_montecarlo_late_pawns")]
    pub late_game_pawns: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            early_matches: defaults::montecarlo_early_matches(),
            late_matches: defaults::montecarlo_late_matches(),
            late_game_pawns: defaults::montecarlo_late_game_pawns(),
        }
    }
}

/// Arena match settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    /// Agent kind in the first seat (minimax, montecarlo, random)
    #[serde(default = "d_first")]
    pub first: String,
    /// Agent kind in the second seat
    #[serde(default = "d_second")]
    pub second: String,
    /// Alternate which agent hands over the first piece
    #[serde(default = "d_swap_seats")]
    pub swap_seats: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::arena_games(),
            first: defaults::arena_first().into(),
            second: defaults::arena_second().into(),
            swap_seats: defaults::arena_swap_seats(),
        }
    }
}
