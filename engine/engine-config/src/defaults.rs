//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time, so the binary and the
//! documented defaults can never drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    minimax: MinimaxDefaults,
    montecarlo: MonteCarloDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MinimaxDefaults {
    early_depth: u32,
    late_depth: u32,
    late_game_pawns: usize,
    pruning: bool,
}

#[derive(Debug, Deserialize)]
struct MonteCarloDefaults {
    early_matches: u32,
    late_matches: u32,
    late_game_pawns: usize,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    first: String,
    second: String,
    swap_seats: bool,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Minimax
pub fn minimax_early_depth() -> u32 {
    DEFAULTS.minimax.early_depth
}
pub fn minimax_late_depth() -> u32 {
    DEFAULTS.minimax.late_depth
}
pub fn minimax_late_game_pawns() -> usize {
    DEFAULTS.minimax.late_game_pawns
}
pub fn minimax_pruning() -> bool {
    DEFAULTS.minimax.pruning
}

// Monte Carlo
pub fn montecarlo_early_matches() -> u32 {
    DEFAULTS.montecarlo.early_matches
}
pub fn montecarlo_late_matches() -> u32 {
    DEFAULTS.montecarlo.late_matches
}
pub fn montecarlo_late_game_pawns() -> usize {
    DEFAULTS.montecarlo.late_game_pawns
}

// Arena
pub fn arena_games() -> u32 {
    DEFAULTS.arena.games
}
pub fn arena_first() -> &'static str {
    &DEFAULTS.arena.first
}
pub fn arena_second() -> &'static str {
    &DEFAULTS.arena.second
}
pub fn arena_swap_seats() -> bool {
    DEFAULTS.arena.swap_seats
}
