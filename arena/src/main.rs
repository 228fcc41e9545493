//! Arena - plays Quarto games between search agents
//!
//! Seats two agents (minimax, Monte Carlo or random) at an authoritative
//! game, plays the configured number of games, optionally alternating who
//! hands over the first piece, and logs the tally.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod arena;
mod config;
mod stats;

use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    info!(
        games = config.games,
        first = ?config.first,
        second = ?config.second,
        swap_seats = config.swap_seats,
        seed = ?config.base_seed(),
        pruning = config.pruning(),
        "Starting arena"
    );

    match arena::run(&config) {
        Ok(stats) => {
            stats.log_summary();
            Ok(())
        }
        Err(e) => {
            error!("Arena failed: {:#}", e);
            Err(e)
        }
    }
}
