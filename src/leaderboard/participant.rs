//! Participant value types and the ranked query result element.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A leaderboard participant: a positive customer id and its current score.
///
/// Participants order by score descending, ties broken by the smaller id. Because live
/// ids are unique, two distinct participants never compare equal, which is what lets
/// the rank index treat the pair as its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    /// Customer id, strictly positive and immutable.
    pub id: i64,

    /// Running score at the moment this value was snapshotted.
    pub score: Decimal,
}

impl Participant {
    /// Create a participant snapshot for the given id and score.
    pub fn new(id: i64, score: Decimal) -> Self {
        Self { id, score }
    }
}

impl Ord for Participant {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Participant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer {} with score {}", self.id, self.score)
    }
}

/// One element of a rank window query, carrying its dense 1-based rank.
///
/// Serializes to the wire shape `{"customerId": .., "score": .., "rank": ..}`; scores
/// keep their exact decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedParticipant {
    /// Customer id of the ranked participant.
    pub customer_id: i64,

    /// Score at the time of the query snapshot.
    pub score: Decimal,

    /// Dense 1-based rank within the board at the time of the query snapshot.
    pub rank: i32,
}

impl RankedParticipant {
    /// Attach a rank to a participant snapshot.
    pub fn new(participant: &Participant, rank: i32) -> Self {
        Self {
            customer_id: participant.id,
            score: participant.score,
            rank,
        }
    }
}
