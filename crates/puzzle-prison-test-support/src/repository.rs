//! Test repositories — mock `ProgressRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use puzzle_prison_core::error::DomainError;
use puzzle_prison_core::progress::{PlayerId, ProgressRecord, QuestPoint};
use puzzle_prison_core::repository::ProgressRepository;

/// A single call observed by [`InMemoryProgressRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    /// `get` was called for the player.
    Get(PlayerId),
    /// `create` was called for the player.
    Create(PlayerId),
    /// `update` was called with the given checkpoint.
    Update(PlayerId, QuestPoint),
}

/// An in-memory progress store that records every call made against it.
///
/// Rows can be seeded with raw (possibly out-of-range) checkpoints to
/// exercise corruption handling.
#[derive(Debug, Default)]
pub struct InMemoryProgressRepository {
    rows: Mutex<HashMap<PlayerId, ProgressRecord>>,
    calls: Mutex<Vec<RepositoryCall>>,
}

impl InMemoryProgressRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding a single row with a raw checkpoint value.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_row(player_id: &PlayerId, quest_point: i64, last_update: NaiveDate) -> Self {
        let repo = Self::new();
        repo.rows.lock().unwrap().insert(
            player_id.clone(),
            ProgressRecord {
                player_id: player_id.clone(),
                quest_point,
                last_update,
            },
        );
        repo
    }

    /// Returns the raw stored checkpoint for a player, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stored_quest_point(&self, player_id: &PlayerId) -> Option<i64> {
        self.rows
            .lock()
            .unwrap()
            .get(player_id)
            .map(|row| row.quest_point)
    }

    /// Returns a snapshot of all calls made so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns only the write calls (`create` and `update`).
    pub fn writes(&self) -> Vec<RepositoryCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, RepositoryCall::Get(_)))
            .collect()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn get(&self, player_id: &PlayerId) -> Result<Option<ProgressRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(RepositoryCall::Get(player_id.clone()));
        Ok(self.rows.lock().unwrap().get(player_id).cloned())
    }

    async fn create(&self, player_id: &PlayerId, today: NaiveDate) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(RepositoryCall::Create(player_id.clone()));
        self.rows.lock().unwrap().insert(
            player_id.clone(),
            ProgressRecord {
                player_id: player_id.clone(),
                quest_point: 0,
                last_update: today,
            },
        );
        Ok(())
    }

    async fn update(
        &self,
        player_id: &PlayerId,
        quest_point: QuestPoint,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(RepositoryCall::Update(player_id.clone(), quest_point));
        self.rows.lock().unwrap().insert(
            player_id.clone(),
            ProgressRecord {
                player_id: player_id.clone(),
                quest_point: i64::from(quest_point),
                last_update: today,
            },
        );
        Ok(())
    }
}

/// A progress repository that always returns an infrastructure error. Useful
/// for testing the catch-and-default paths.
#[derive(Debug)]
pub struct FailingProgressRepository;

#[async_trait]
impl ProgressRepository for FailingProgressRepository {
    async fn get(&self, _player_id: &PlayerId) -> Result<Option<ProgressRecord>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn create(&self, _player_id: &PlayerId, _today: NaiveDate) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn update(
        &self,
        _player_id: &PlayerId,
        _quest_point: QuestPoint,
        _today: NaiveDate,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
