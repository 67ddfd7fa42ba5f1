//! Progress repository abstraction.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DomainError;
use crate::progress::{PlayerId, ProgressRecord, QuestPoint};

/// Durable key-value store of quest checkpoints, keyed by player.
///
/// Every operation may fail with `DomainError::Infrastructure`. Callers in
/// the turn path treat misses and failures alike.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Loads the stored progress for a player, or `None` if the player has
    /// never been seen.
    async fn get(&self, player_id: &PlayerId) -> Result<Option<ProgressRecord>, DomainError>;

    /// Creates (or overwrites) the player's row at checkpoint 0.
    async fn create(&self, player_id: &PlayerId, today: NaiveDate) -> Result<(), DomainError>;

    /// Writes a new checkpoint for the player.
    async fn update(
        &self,
        player_id: &PlayerId,
        quest_point: QuestPoint,
        today: NaiveDate,
    ) -> Result<(), DomainError>;
}
