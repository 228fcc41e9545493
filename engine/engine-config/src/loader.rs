//! Configuration loading logic.
//!
//! Resolves which config.toml to read, parses it, and layers environment
//! variable overrides on top.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
const CONFIG_PATH_VAR: &str = "QUARZO_CONFIG";

/// Standard locations to search for config.toml, in order
pub const CONFIG_SEARCH_PATHS: &[&str] = &["config.toml", "../config.toml"];

/// Load the central configuration.
///
/// Uses the file named by `QUARZO_CONFIG` if it exists, else the first of
/// [`CONFIG_SEARCH_PATHS`] that exists, else the built-in defaults.
/// Environment overrides are applied last in every case.
pub fn load_config() -> CentralConfig {
    match find_config_file() {
        Some(path) => load_from_path(&path),
        None => {
            debug!("No config.toml found, using built-in defaults");
            apply_env_overrides(CentralConfig::default())
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_VAR) {
        let path = PathBuf::from(explicit);
        if path.exists() {
            info!(path = %path.display(), "Loading config from {CONFIG_PATH_VAR}");
            return Some(path);
        }
        warn!(path = %path.display(), "{CONFIG_PATH_VAR} points nowhere, searching defaults");
    }

    let found = CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists());
    if let Some(path) = &found {
        info!(path = %path.display(), "Loading config");
    }
    found
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| toml::from_str::<CentralConfig>(&content).map_err(|e| e.to_string()));

    let config = parsed.unwrap_or_else(|reason| {
        warn!(path = %path.display(), %reason, "Unusable config file, using defaults");
        CentralConfig::default()
    });
    apply_env_overrides(config)
}

/// Overwrite a field when the variable is set and parses as the field's type.
/// Unparseable values are ignored.
macro_rules! env_override {
    ($config:expr, $section:ident . $field:ident, $key:literal) => {
        if let Some(v) = std::env::var($key).ok().and_then(|s| s.parse().ok()) {
            $config.$section.$field = v;
        }
    };
    ($config:expr, $section:ident . $field:ident, $key:literal, optional) => {
        if let Some(v) = std::env::var($key).ok().and_then(|s| s.parse().ok()) {
            $config.$section.$field = Some(v);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: QUARZO_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    env_override!(config, common.log_level, "QUARZO_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "QUARZO_COMMON_SEED", optional);

    env_override!(config, minimax.early_depth, "QUARZO_MINIMAX_EARLY_DEPTH");
    env_override!(config, minimax.late_depth, "QUARZO_MINIMAX_LATE_DEPTH");
    env_override!(config, minimax.late_game_pawns, "QUARZO_MINIMAX_LATE_GAME_PAWNS");
    env_override!(config, minimax.pruning, "QUARZO_MINIMAX_PRUNING");

    env_override!(config, montecarlo.early_matches, "QUARZO_MONTECARLO_EARLY_MATCHES");
    env_override!(config, montecarlo.late_matches, "QUARZO_MONTECARLO_LATE_MATCHES");
    env_override!(config, montecarlo.late_game_pawns, "QUARZO_MONTECARLO_LATE_GAME_PAWNS");

    env_override!(config, arena.games, "QUARZO_ARENA_GAMES");
    env_override!(config, arena.first, "QUARZO_ARENA_FIRST");
    env_override!(config, arena.second, "QUARZO_ARENA_SECOND");
    env_override!(config, arena.swap_seats, "QUARZO_ARENA_SWAP_SEATS");

    config
}
