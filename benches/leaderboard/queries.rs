use criterion::{BenchmarkId, Criterion};
use leaderboard_rs::Leaderboard;
use rust_decimal::Decimal;
use std::hint::black_box;

fn populated_board(size: i64) -> Leaderboard {
    let board = Leaderboard::new();
    for id in 1..=size {
        let _ = board.update_score(id, Decimal::from(id * 13 % 9973 + 1));
    }
    board
}

/// Register benchmarks for the rank window queries
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Leaderboard - Queries");

    let board = populated_board(10_000);

    group.bench_function("top_100_window", |b| {
        b.iter(|| {
            let _ = black_box(board.get_leaderboard(1, 100));
        })
    });

    group.bench_function("deep_window", |b| {
        b.iter(|| {
            let _ = black_box(board.get_leaderboard(9_000, 9_100));
        })
    });

    group.bench_function("neighbors_mid_board", |b| {
        let mut tick = 0i64;
        b.iter(|| {
            tick += 1;
            let id = tick % 10_000 + 1;
            let _ = black_box(board.get_customer_with_neighbors(id, 5, 5));
        })
    });

    // Window size scaling at a fixed board size
    for window in [10, 100, 1_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("window_size_scaling", window),
            window,
            |b, &window| {
                b.iter(|| {
                    let _ = black_box(board.get_leaderboard(500, 500 + window - 1));
                })
            },
        );
    }

    group.finish();
}
