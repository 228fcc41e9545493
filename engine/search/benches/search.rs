//! Search engine benchmarks.
//!
//! Run with: `cargo bench -p search`
//!
//! Minimax is measured at several depths with and without pruning, Monte
//! Carlo at two playout budgets, both from the same midgame position.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use games_quarto::{Board, Piece, Player, Quarto, Spot};
use search::{GameState, Minimax, MinimaxConfig, MonteCarlo, MonteCarloConfig};

/// Eight pieces placed without a line, piece 1 in hand.
fn midgame() -> Quarto {
    let mut board = Board::new();
    for (idx, id) in [(0, 0), (1, 15), (2, 3), (3, 12), (4, 14), (5, 5), (6, 8), (7, 7)] {
        if let (Some(spot), Some(piece)) = (Spot::from_index(idx), Piece::new(id)) {
            board.set(spot, Some(piece));
        }
    }
    Quarto::from_board(board, Piece::new(1), Player::First).expect("valid midgame")
}

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    let game = midgame();

    for depth in [1u32, 2, 3] {
        for pruning in [true, false] {
            let label = if pruning { "pruned" } else { "full" };
            group.bench_with_input(
                BenchmarkId::new(format!("place_piece_{label}"), depth),
                &depth,
                |b, &depth| {
                    let mut state = GameState::new(&game, Player::First);
                    let config = MinimaxConfig::default()
                        .with_depth(depth)
                        .with_pruning(pruning);
                    let mut engine = Minimax::with_seed(config, 42);
                    b.iter(|| engine.place_piece(&mut state));
                },
            );
        }
    }

    group.bench_function("choose_piece_empty_depth_1", |b| {
        let empty = Quarto::new();
        let mut state = GameState::new(&empty, Player::First);
        let mut engine = Minimax::with_seed(MinimaxConfig::for_testing(), 42);
        b.iter(|| engine.choose_piece(&mut state));
    });

    group.finish();
}

fn bench_montecarlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("montecarlo");
    let game = midgame();

    for matches in [10u32, 50] {
        group.bench_with_input(
            BenchmarkId::new("place_piece", matches),
            &matches,
            |b, &matches| {
                let mut state = GameState::new(&game, Player::First);
                let config = MonteCarloConfig::default().with_num_matches(matches);
                let mut engine = MonteCarlo::with_seed(config, 42);
                b.iter(|| engine.place_piece(&mut state));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_minimax, bench_montecarlo);
criterion_main!(benches);
