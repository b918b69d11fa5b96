//! Leaderboard error types

use rust_decimal::Decimal;
use std::fmt;

/// Coarse classification of a [`LeaderboardError`], for callers that map failures onto
/// a transport (HTTP shells map `InvalidArgument` to 400 and `NotFound` to 404).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request violated a stated input constraint.
    InvalidArgument,

    /// The requested customer is absent or not currently ranked.
    NotFound,
}

/// Errors that can occur within the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardError {
    /// Customer ids must be strictly positive
    InvalidCustomerId(i64),

    /// Score delta outside the accepted magnitude
    DeltaOutOfRange(Decimal),

    /// Rank window with a start below 1 or an end before the start
    InvalidRankWindow {
        /// First requested rank
        start: i32,
        /// Last requested rank
        end: i32,
    },

    /// Neighbor counts must be non-negative
    NegativeNeighborCount {
        /// Requested expansion towards better ranks
        high: i32,
        /// Requested expansion towards worse ranks
        low: i32,
    },

    /// Destination slice too short to receive the index contents
    DestinationTooSmall {
        /// Number of elements that had to fit
        required: usize,
        /// Length of the destination provided
        capacity: usize,
    },

    /// Customer unknown to the leaderboard, or known but without a positive score
    CustomerNotRanked(i64),
}

impl LeaderboardError {
    /// The transport-facing classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeaderboardError::CustomerNotRanked(_) => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::InvalidCustomerId(id) => {
                write!(f, "Invalid customer id: {} (must be positive)", id)
            }
            LeaderboardError::DeltaOutOfRange(delta) => {
                write!(f, "Score delta out of range: {} (must be in [-1000, 1000])", delta)
            }
            LeaderboardError::InvalidRankWindow { start, end } => {
                write!(f, "Invalid rank window: start {} to end {}", start, end)
            }
            LeaderboardError::NegativeNeighborCount { high, low } => {
                write!(f, "Negative neighbor count: high {}, low {}", high, low)
            }
            LeaderboardError::DestinationTooSmall { required, capacity } => {
                write!(
                    f,
                    "Destination too small: {} elements into capacity {}",
                    required, capacity
                )
            }
            LeaderboardError::CustomerNotRanked(id) => {
                write!(f, "Customer not ranked: {}", id)
            }
        }
    }
}

impl std::error::Error for LeaderboardError {}
