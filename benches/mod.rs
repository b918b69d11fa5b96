use criterion::{criterion_group, criterion_main};

mod leaderboard;

use concurrent::register_benchmarks as register_concurrent_benchmarks;
use leaderboard::register_benchmarks as register_leaderboard_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_leaderboard_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
