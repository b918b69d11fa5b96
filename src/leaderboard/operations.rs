//! Score update path

use super::error::LeaderboardError;
use super::participant::Participant;
use super::service::Leaderboard;
use rust_decimal::Decimal;
use tracing::trace;

/// Largest magnitude accepted for a single score delta, inclusive.
pub const MAX_SCORE_DELTA: Decimal = Decimal::ONE_THOUSAND;

impl Leaderboard {
    /// Apply a signed `delta` to the score of customer `id`, creating the customer at
    /// zero on first contact, and return the new score.
    ///
    /// A customer is linked into the board exactly while its score is positive, so the
    /// update may remove the old snapshot, insert a new one, both, or neither. Both
    /// halves happen under one exclusive index acquisition, and the customer's map
    /// entry stays locked across the whole sequence, so concurrent updates of the same
    /// id cannot interleave and readers never see the pair half-applied. The entry
    /// guard is always taken before the index lock, which rules out lock cycles.
    pub fn update_score(&self, id: i64, delta: Decimal) -> Result<Decimal, LeaderboardError> {
        if id <= 0 {
            return Err(LeaderboardError::InvalidCustomerId(id));
        }
        if delta < -MAX_SCORE_DELTA || delta > MAX_SCORE_DELTA {
            return Err(LeaderboardError::DeltaOutOfRange(delta));
        }

        let mut entry = self.participants.entry(id).or_insert(Decimal::ZERO);
        let old = *entry;
        let new = old + delta;
        trace!("Updating customer {}: {} + {} = {}", id, old, delta, new);

        let old_key = (old > Decimal::ZERO).then(|| Participant::new(id, old));
        let new_key = (new > Decimal::ZERO).then(|| Participant::new(id, new));
        self.board.replace(old_key.as_ref(), new_key);

        *entry = new;
        Ok(new)
    }
}
