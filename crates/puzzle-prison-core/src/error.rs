//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A quest point outside the `0..=9` checkpoint range.
    #[error("quest point out of range: {0}")]
    QuestPointOutOfRange(i64),

    /// Session attributes that cannot describe a consistent game state.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
