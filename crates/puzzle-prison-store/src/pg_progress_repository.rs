//! `PostgreSQL` implementation of the `ProgressRepository` trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;

use puzzle_prison_core::error::DomainError;
use puzzle_prison_core::progress::{PlayerId, ProgressRecord, QuestPoint};
use puzzle_prison_core::repository::ProgressRepository;

use crate::schema::CREATE_PLAYER_PROGRESS_TABLE;

#[derive(sqlx::FromRow)]
struct ProgressRow {
    player_id: String,
    quest_point: i32,
    last_update: NaiveDate,
}

impl From<ProgressRow> for ProgressRecord {
    fn from(row: ProgressRow) -> Self {
        Self {
            player_id: PlayerId::new(row.player_id),
            quest_point: i64::from(row.quest_point),
            last_update: row.last_update,
        }
    }
}

fn infrastructure(e: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(e.to_string())
}

/// PostgreSQL-backed progress repository, one row per player.
#[derive(Debug, Clone)]
pub struct PgProgressRepository {
    pool: PgPool,
}

impl PgProgressRepository {
    /// Creates a new `PgProgressRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the progress table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(CREATE_PLAYER_PROGRESS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn upsert(
        &self,
        player_id: &PlayerId,
        quest_point: QuestPoint,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r"
            INSERT INTO player_progress (player_id, quest_point, last_update)
            VALUES ($1, $2, $3)
            ON CONFLICT (player_id)
            DO UPDATE SET quest_point = EXCLUDED.quest_point, last_update = EXCLUDED.last_update
            ",
        )
        .bind(player_id.as_str())
        .bind(i32::from(quest_point.value()))
        .bind(today)
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for PgProgressRepository {
    async fn get(&self, player_id: &PlayerId) -> Result<Option<ProgressRecord>, DomainError> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r"
            SELECT player_id, quest_point, last_update
            FROM player_progress
            WHERE player_id = $1
            ",
        )
        .bind(player_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(ProgressRecord::from))
    }

    async fn create(&self, player_id: &PlayerId, today: NaiveDate) -> Result<(), DomainError> {
        debug!(player_id = %player_id, "creating progress row");
        self.upsert(player_id, QuestPoint::START, today).await
    }

    async fn update(
        &self,
        player_id: &PlayerId,
        quest_point: QuestPoint,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        debug!(player_id = %player_id, quest_point = %quest_point, "updating progress row");
        self.upsert(player_id, quest_point, today).await
    }
}
