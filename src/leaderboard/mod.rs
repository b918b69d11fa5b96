//! Leaderboard implementation: the span-indexed rank structures and the service
//! that binds them to a concurrent customer map.

pub mod error;
pub mod index;
pub mod operations;
pub mod participant;
pub mod queries;
pub mod service;
pub mod skiplist;
mod tests;

pub use error::{ErrorKind, LeaderboardError};
pub use index::RankIndex;
pub use participant::{Participant, RankedParticipant};
pub use service::Leaderboard;
pub use skiplist::IndexedSkipList;
