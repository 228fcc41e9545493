//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! by the search agents and the arena binary.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`QUARZO_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! QUARZO_<SECTION>_<KEY>=value
//!
//! Examples:
//!     QUARZO_COMMON_LOG_LEVEL=debug
//!     QUARZO_COMMON_SEED=42
//!     QUARZO_MINIMAX_LATE_DEPTH=4
//!     QUARZO_MONTECARLO_EARLY_MATCHES=100
//!     QUARZO_ARENA_GAMES=50
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
