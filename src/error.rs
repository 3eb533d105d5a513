//! Error types.
//!
//! Engine commands never fail: a command issued in the wrong phase is ignored.
//! The errors here cover card construction and the score book collaborators.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}: must be 1..=13 (Ace..King)")]
    InvalidRank(u8),
}

/// Errors that can occur while loading or recording scores.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The backing store could not be read or written.
    #[cfg(feature = "std")]
    #[error("score file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A stored record could not be parsed.
    #[error("malformed score record on line {line}")]
    Malformed {
        /// One-based line number of the bad record.
        line: usize,
    },
}
