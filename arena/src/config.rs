//! Configuration for the arena
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use engine_config::{load_config, CentralConfig};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

/// The engines an arena seat can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Minimax,
    Montecarlo,
    Random,
}

impl AgentKind {
    fn from_config(name: &str, fallback: AgentKind) -> AgentKind {
        AgentKind::from_str(name, true).unwrap_or(fallback)
    }
}

// Default value functions that read from central config
fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_first() -> AgentKind {
    AgentKind::from_config(&CENTRAL_CONFIG.arena.first, AgentKind::Minimax)
}

fn default_second() -> AgentKind {
    AgentKind::from_config(&CENTRAL_CONFIG.arena.second, AgentKind::Random)
}

fn default_swap_seats() -> bool {
    CENTRAL_CONFIG.arena.swap_seats
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_seed() -> Option<u64> {
    CENTRAL_CONFIG.common.seed
}

fn default_minimax_depths() -> (u32, u32, usize) {
    let minimax = &CENTRAL_CONFIG.minimax;
    (minimax.early_depth, minimax.late_depth, minimax.late_game_pawns)
}

fn default_montecarlo_matches() -> (u32, u32, usize) {
    let montecarlo = &CENTRAL_CONFIG.montecarlo;
    (
        montecarlo.early_matches,
        montecarlo.late_matches,
        montecarlo.late_game_pawns,
    )
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Quarzo arena - plays Quarto games between two agents")]
#[command(
    long_about = "Plays a series of Quarto games between two agents and reports the tally.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Agent in the first seat
    #[arg(long, value_enum, default_value_t = default_first())]
    pub first: AgentKind,

    /// Agent in the second seat
    #[arg(long, value_enum, default_value_t = default_second())]
    pub second: AgentKind,

    /// Alternate which agent hands over the first piece
    #[arg(long, default_value_t = default_swap_seats(), action = clap::ArgAction::Set)]
    pub swap_seats: bool,

    /// Base seed for every agent (omit to seed from entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimax depth up to the late game
    #[arg(long, default_value_t = default_minimax_depths().0)]
    pub minimax_early_depth: u32,

    /// Minimax depth in the late game
    #[arg(long, default_value_t = default_minimax_depths().1)]
    pub minimax_late_depth: u32,

    /// Pieces on the board from which the late minimax depth applies
    #[arg(long, default_value_t = default_minimax_depths().2)]
    pub minimax_late_game_pawns: usize,

    /// Disable alpha-beta pruning (same decisions, more nodes)
    #[arg(long)]
    pub no_pruning: bool,

    /// Monte Carlo playouts per candidate up to the late game
    #[arg(long, default_value_t = default_montecarlo_matches().0)]
    pub montecarlo_early_matches: u32,

    /// Monte Carlo playouts per candidate in the late game
    #[arg(long, default_value_t = default_montecarlo_matches().1)]
    pub montecarlo_late_matches: u32,

    /// Pieces on the board from which the late playout count applies
    #[arg(long, default_value_t = default_montecarlo_matches().2)]
    pub montecarlo_late_game_pawns: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.minimax_early_depth == 0 || self.minimax_late_depth == 0 {
            return Err(anyhow!("minimax depths must be greater than 0"));
        }

        if self.montecarlo_early_matches == 0 || self.montecarlo_late_matches == 0 {
            return Err(anyhow!("montecarlo matches must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// The seed the CLI gave, else the configured one.
    pub fn base_seed(&self) -> Option<u64> {
        self.seed.or_else(default_seed)
    }

    /// Minimax pruning is on unless disabled on the CLI or in config.
    pub fn pruning(&self) -> bool {
        !self.no_pruning && CENTRAL_CONFIG.minimax.pruning
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn base_config() -> Config {
        Config {
            games: 2,
            first: AgentKind::Minimax,
            second: AgentKind::Random,
            swap_seats: true,
            seed: Some(42),
            minimax_early_depth: 1,
            minimax_late_depth: 2,
            minimax_late_game_pawns: 10,
            no_pruning: false,
            montecarlo_early_matches: 2,
            montecarlo_late_matches: 4,
            montecarlo_late_game_pawns: 12,
            log_level: "info".into(),
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_games() {
        let mut config = base_config();
        config.games = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("games"));
    }

    #[test]
    fn test_validate_rejects_zero_budgets() {
        let mut config = base_config();
        config.minimax_late_depth = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.montecarlo_early_matches = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = base_config();
        config.log_level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let config = Config::parse_from([
            "arena",
            "--games",
            "5",
            "--first",
            "montecarlo",
            "--second",
            "minimax",
            "--swap-seats",
            "false",
            "--seed",
            "9",
        ]);
        assert_eq!(config.games, 5);
        assert_eq!(config.first, AgentKind::Montecarlo);
        assert_eq!(config.second, AgentKind::Minimax);
        assert!(!config.swap_seats);
        assert_eq!(config.base_seed(), Some(9));
    }

    #[test]
    fn test_agent_kind_from_config_falls_back() {
        assert_eq!(
            AgentKind::from_config("MonteCarlo", AgentKind::Random),
            AgentKind::Montecarlo
        );
        assert_eq!(
            AgentKind::from_config("alphazero", AgentKind::Random),
            AgentKind::Random
        );
    }
}
