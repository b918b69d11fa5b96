//! # Concurrent Ranked Leaderboard Engine
//!
//! A high-performance, thread-safe leaderboard implementation written in Rust. This project
//! provides an in-memory ranking service designed for workloads that continuously mutate
//! scores while serving rank queries, with a focus on sub-linear positional lookups under
//! concurrent access.
//!
//! ## Key Features
//!
//! - **Span-Indexed Skip List**: The score-ordered index is a skip list whose forward
//!   pointers carry span counters, so the absolute rank of any element is computed during
//!   the ordinary O(log n) traversal instead of by counting predecessors.
//!
//! - **Rank Queries in Both Directions**: Dense rank windows (`get_leaderboard`) and
//!   neighborhood windows around a specific customer (`get_customer_with_neighbors`) are
//!   both served from the same index in O(log n + k).
//!
//! - **Reader/Writer Concurrency**: Queries take a shared lock and proceed in parallel;
//!   score updates serialize through an exclusive lock and a per-customer map guard, so
//!   the remove/re-insert pair behind a score change is never observable half-applied.
//!
//! - **Exact Decimal Scores**: Scores and deltas are fixed-precision decimals, so sums of
//!   deltas round-trip exactly and score equality is total.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Every operation maintains the ordering and membership invariants of
//!    the board, even under high concurrency.
//! 2. **Performance**: Expected O(log n) mutation and rank lookup, O(log n + k) windows.
//! 3. **Scalability**: Millions of participants without rebalancing pauses.
//!
//! ## Status
//!
//! This project is currently in active development.

pub mod leaderboard;

mod utils;

pub use leaderboard::{
    ErrorKind, IndexedSkipList, Leaderboard, LeaderboardError, Participant, RankIndex,
    RankedParticipant,
};
pub use utils::setup_logger;
