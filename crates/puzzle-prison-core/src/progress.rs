//! Player identity and quest progress checkpoints.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque identifier of a player, as issued by the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps a platform user identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A progress checkpoint in `0..=9`.
///
/// The value gates which actions are available and which narration is
/// selected. It can only be constructed inside the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestPoint(u8);

impl QuestPoint {
    /// The checkpoint of a brand new (or replaying) player.
    pub const START: Self = Self(0);

    /// The last checkpoint before the ending letter.
    pub const FINAL: Self = Self(9);

    /// Creates a quest point.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::QuestPointOutOfRange` if `value` exceeds 9.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::FINAL.0 {
            return Err(DomainError::QuestPointOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Returns the raw checkpoint number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for QuestPoint {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| DomainError::QuestPointOutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<QuestPoint> for i64 {
    fn from(value: QuestPoint) -> Self {
        i64::from(value.0)
    }
}

impl fmt::Display for QuestPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Durable progress row as read from the store.
///
/// `quest_point` is kept raw so that corrupted values can be detected and
/// reset by the progress gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    /// The owning player.
    pub player_id: PlayerId,
    /// The stored checkpoint, possibly out of range.
    pub quest_point: i64,
    /// The date of the last write.
    pub last_update: NaiveDate,
}
