//! Core Leaderboard service binding the customer map to the rank index

use super::index::RankIndex;
use super::participant::Participant;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::trace;

/// The Leaderboard owns every customer ever touched and a rank index over the subset
/// whose score is strictly positive.
///
/// Membership invariant: a customer appears in [`board`](Self::board) exactly when its
/// current score is greater than zero. The customer map keeps entries whose score has
/// dropped to zero or below, so a later delta resumes from the accumulated value.
pub struct Leaderboard {
    /// Every customer id ever updated, mapped to its running score. The concurrent map
    /// also provides the per-customer guard that serializes same-id updates.
    pub(super) participants: DashMap<i64, Decimal>,

    /// Score-ordered index of the customers with a positive score.
    pub(super) board: RankIndex<Participant>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self {
            participants: DashMap::new(),
            board: RankIndex::new(),
        }
    }

    /// Number of customers currently ranked (score > 0).
    pub fn ranked_count(&self) -> usize {
        self.board.len()
    }

    /// Number of customers ever touched, ranked or not.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Current score of a customer, if it was ever updated.
    pub fn score_of(&self, id: i64) -> Option<Decimal> {
        self.participants.get(&id).map(|score| *score)
    }

    /// Drop every customer and every ranking.
    ///
    /// The index empties before the map does; a concurrent reader may briefly observe
    /// customers without rankings, never rankings without customers.
    pub fn clear(&self) {
        trace!("Clearing leaderboard");
        self.board.clear();
        self.participants.clear();
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
