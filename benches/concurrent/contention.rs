use criterion::{BenchmarkId, Criterion};
use leaderboard_rs::Leaderboard;
use rust_decimal::Decimal;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

/// Register benchmarks that test different reader/writer mixes
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Leaderboard - Contention Patterns");
    group.sample_size(10);

    // Test with different read/write ratios
    for read_ratio in [0, 50, 95].iter() {
        // Fixed at 8 threads which is a common server core count
        let thread_count = 8;

        group.bench_with_input(
            BenchmarkId::new("read_write_ratio", read_ratio),
            read_ratio,
            |b, &read_ratio| {
                b.iter_custom(|iters| measure_read_write_mix(thread_count, iters, read_ratio));
            },
        );
    }

    group.finish();
}

/// Measures wall time for a mixed workload where `read_ratio` percent of the
/// operations are rank window queries and the rest are score updates.
fn measure_read_write_mix(thread_count: usize, iterations: u64, read_ratio: usize) -> Duration {
    let board = Arc::new(Leaderboard::new());
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread

    // Pre-populate so queries have something to traverse
    for id in 1..=1_000i64 {
        let _ = board.update_score(id, Decimal::from(id % 499 + 1));
    }

    let per_thread = iterations.max(1);
    let handles: Vec<_> = (0..thread_count)
        .map(|thread_id| {
            let board = Arc::clone(&board);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    let slot = (i as usize + thread_id) % 100;
                    if slot < read_ratio {
                        let start = (i % 900) as i32 + 1;
                        let _ = board.get_leaderboard(start, start + 49);
                    } else {
                        let id = (i as i64 * 31 + thread_id as i64) % 1_000 + 1;
                        let delta = Decimal::from(i as i64 % 11 - 5);
                        let _ = board.update_score(id, delta);
                    }
                }
            })
        })
        .collect();

    barrier.wait();
    let start = Instant::now();
    for handle in handles {
        let _ = handle.join();
    }
    start.elapsed()
}
