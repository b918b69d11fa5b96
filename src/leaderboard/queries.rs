//! Rank window queries

use super::error::LeaderboardError;
use super::participant::{Participant, RankedParticipant};
use super::service::Leaderboard;
use rust_decimal::Decimal;
use tracing::trace;

impl Leaderboard {
    /// The customers ranked `start` through `end` inclusive, best first, with their
    /// dense 1-based ranks attached.
    ///
    /// A `start` past the end of the board yields an empty list; an `end` past it
    /// yields whatever remains. Ranks reflect the snapshot taken during the single
    /// shared index acquisition.
    pub fn get_leaderboard(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<RankedParticipant>, LeaderboardError> {
        if start < 1 || end < start {
            return Err(LeaderboardError::InvalidRankWindow { start, end });
        }
        trace!("Fetching leaderboard ranks {} to {}", start, end);

        let window = self
            .board
            .range((start - 1) as usize, (end - start + 1) as usize);
        Ok(with_ranks(&window, start))
    }

    /// The customer `id` together with up to `high` better-ranked and `low`
    /// worse-ranked neighbors, clamped to the board edges.
    ///
    /// `high` expands the window towards rank 1; `low` expands it away from it. The
    /// customer must currently be ranked, meaning known to the leaderboard with a
    /// strictly positive score.
    pub fn get_customer_with_neighbors(
        &self,
        id: i64,
        high: i32,
        low: i32,
    ) -> Result<Vec<RankedParticipant>, LeaderboardError> {
        if id <= 0 {
            return Err(LeaderboardError::InvalidCustomerId(id));
        }
        if high < 0 || low < 0 {
            return Err(LeaderboardError::NegativeNeighborCount { high, low });
        }

        let score = self
            .participants
            .get(&id)
            .map(|score| *score)
            .ok_or(LeaderboardError::CustomerNotRanked(id))?;
        if score <= Decimal::ZERO {
            return Err(LeaderboardError::CustomerNotRanked(id));
        }

        // The score read and the rank walk are separate acquisitions; a concurrent
        // update between them surfaces as the customer being unranked, never as a
        // torn window.
        let rank = self
            .board
            .rank(&Participant::new(id, score))
            .ok_or(LeaderboardError::CustomerNotRanked(id))?;
        trace!("Customer {} holds rank {}", id, rank);

        let first = rank.saturating_sub(high as usize).max(1);
        let count = rank + low as usize - first + 1;
        let window = self.board.range(first - 1, count);
        Ok(with_ranks(&window, first as i32))
    }
}

fn with_ranks(window: &[Participant], first_rank: i32) -> Vec<RankedParticipant> {
    window
        .iter()
        .enumerate()
        .map(|(offset, participant)| RankedParticipant::new(participant, first_rank + offset as i32))
        .collect()
}
