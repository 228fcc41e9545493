//! Match runner: builds agents and drives authoritative games between them.

use anyhow::{Context, Result};
use games_quarto::{GameView, Outcome, Player, Quarto};
use indicatif::{ProgressBar, ProgressStyle};
use search::{
    Agent, BudgetSchedule, MinimaxAgent, MinimaxConfig, MonteCarloAgent, MonteCarloConfig,
    RandomAgent,
};
use tracing::{debug, info};

use crate::config::{AgentKind, Config};
use crate::stats::ArenaStats;

/// Build an agent of `kind` sitting in `seat` of `game`.
pub fn build_agent(
    kind: AgentKind,
    config: &Config,
    game: &Quarto,
    seat: Player,
    seed: Option<u64>,
) -> Box<dyn Agent> {
    match kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::new(
            game,
            seat,
            MinimaxConfig::default().with_pruning(config.pruning()),
            BudgetSchedule::new(
                config.minimax_early_depth,
                config.minimax_late_depth,
                config.minimax_late_game_pawns,
            ),
            seed,
        )),
        AgentKind::Montecarlo => Box::new(MonteCarloAgent::new(
            game,
            seat,
            MonteCarloConfig::default(),
            BudgetSchedule::new(
                config.montecarlo_early_matches,
                config.montecarlo_late_matches,
                config.montecarlo_late_game_pawns,
            ),
            seed,
        )),
        AgentKind::Random => Box::new(match seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        }),
    }
}

/// Play `game` to the end. `agents[i]` sits in seat `i`.
pub fn play_game(game: &mut Quarto, agents: &mut [Box<dyn Agent>; 2]) -> Result<Outcome> {
    loop {
        let chooser = game.current_player();
        let agent = &mut agents[chooser.index()];
        let piece = agent
            .choose_piece(&*game)
            .with_context(|| format!("{} failed to choose a piece", agent.name()))?;
        game.select(piece)
            .with_context(|| format!("{} handed over an illegal piece", agent.name()))?;

        let placer = game.current_player();
        let agent = &mut agents[placer.index()];
        let spot = agent
            .place_piece(&*game)
            .with_context(|| format!("{} failed to place {}", agent.name(), piece))?;
        let outcome = game
            .place(spot)
            .with_context(|| format!("{} made an illegal placement", agent.name()))?;
        debug!(
            chooser = ?chooser,
            placer = ?placer,
            piece = %piece,
            spot = %spot,
            pawns = game.pieces_on_board(),
            "Turn played"
        );

        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }
}

/// Play the configured series and return the tally.
pub fn run(config: &Config) -> Result<ArenaStats> {
    let names = [
        format!("{:?}", config.first).to_lowercase(),
        format!("{:?}", config.second).to_lowercase(),
    ];
    let mut stats = ArenaStats::new(&names[0], &names[1]);
    let base_seed = config.base_seed();

    let progress = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} games ({eta})")
                .context("invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for game_index in 0..config.games {
        // seats[i] = agent index sitting in seat i
        let seats = if config.swap_seats && game_index % 2 == 1 {
            [1, 0]
        } else {
            [0, 1]
        };
        let kinds = [config.first, config.second];

        let mut game = Quarto::new();
        let mut agents: [Box<dyn Agent>; 2] = [Player::First, Player::Second].map(|seat| {
            let agent = seats[seat.index()];
            // Distinct, reproducible streams per game and per agent.
            let seed = base_seed.map(|s| {
                s.wrapping_add(u64::from(game_index) * 2)
                    .wrapping_add(agent as u64)
            });
            build_agent(kinds[agent], config, &game, seat, seed)
        });

        let outcome = play_game(&mut game, &mut agents)
            .with_context(|| format!("game {} aborted", game_index + 1))?;
        stats.record_game(outcome, seats, game.pieces_on_board());

        info!(
            game = game_index + 1,
            first_seat = %names[seats[0]],
            second_seat = %names[seats[1]],
            outcome = ?outcome,
            "Game finished"
        );
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    Ok(stats)
}
