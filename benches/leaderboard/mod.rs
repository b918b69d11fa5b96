mod queries;

use criterion::Criterion;

/// Register all single-threaded leaderboard benchmarks
pub fn register_benchmarks(c: &mut Criterion) {
    update_scores::register_benchmarks(c);
    queries::register_benchmarks(c);
}
