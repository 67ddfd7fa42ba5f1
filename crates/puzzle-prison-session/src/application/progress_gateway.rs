//! Best-effort access to durable progress.
//!
//! The store is never allowed to fail a turn. Reads fall back to a fresh
//! player and failed writes are logged and dropped, accepting that the
//! durable checkpoint may lag behind the session.

use chrono::NaiveDate;
use puzzle_prison_core::progress::{PlayerId, QuestPoint};
use puzzle_prison_core::repository::ProgressRepository;
use tracing::{info, warn};

/// Loads the player's checkpoint.
///
/// An unknown player, or a failed read, is treated as a new player whose
/// row is created at checkpoint 0. A stored value outside `0..=9` is reset
/// to 0.
pub async fn load_quest_point(
    repo: &dyn ProgressRepository,
    player_id: &PlayerId,
    today: NaiveDate,
) -> QuestPoint {
    let record = match repo.get(player_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            info!(player_id = %player_id, "new player, creating progress");
            create_best_effort(repo, player_id, today).await;
            return QuestPoint::START;
        }
        Err(e) => {
            warn!(player_id = %player_id, error = %e, "progress read failed, starting fresh");
            create_best_effort(repo, player_id, today).await;
            return QuestPoint::START;
        }
    };

    match QuestPoint::try_from(record.quest_point) {
        Ok(quest_point) => quest_point,
        Err(e) => {
            warn!(player_id = %player_id, error = %e, "stored progress corrupt, resetting");
            save_quest_point(repo, player_id, QuestPoint::START, today).await;
            QuestPoint::START
        }
    }
}

/// Persists a checkpoint. Failures are logged and swallowed.
pub async fn save_quest_point(
    repo: &dyn ProgressRepository,
    player_id: &PlayerId,
    quest_point: QuestPoint,
    today: NaiveDate,
) {
    if let Err(e) = repo.update(player_id, quest_point, today).await {
        warn!(
            player_id = %player_id,
            quest_point = %quest_point,
            error = %e,
            "progress write failed, continuing without it"
        );
    }
}

async fn create_best_effort(repo: &dyn ProgressRepository, player_id: &PlayerId, today: NaiveDate) {
    if let Err(e) = repo.create(player_id, today).await {
        warn!(player_id = %player_id, error = %e, "progress create failed, continuing without it");
    }
}
