//! Command handlers for the session context.
//!
//! A turn restores the snapshot (reading the store only when it has to),
//! dispatches the intent, and persists any checkpoint reached. Turns never
//! fail: bad session state yields the error narration with the incoming
//! attributes echoed back.

use puzzle_prison_core::clock::Clock;
use puzzle_prison_core::command::Command;
use puzzle_prison_core::error::DomainError;
use puzzle_prison_core::progress::QuestPoint;
use puzzle_prison_core::repository::ProgressRepository;
use puzzle_prison_narrative::domain::catalogue::narrate;
use puzzle_prison_narrative::domain::narration::{Narration, NarrationKey};
use tracing::{info, warn};

use crate::application::progress_gateway::{load_quest_point, save_quest_point};
use crate::domain::commands::TakeTurn;
use crate::domain::dispatcher::{TurnOutcome, dispatch, start};
use crate::domain::snapshot::{SessionAttributes, SessionSnapshot};

/// Result of a handled turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// Attributes to hand back to the platform.
    pub attributes: SessionAttributes,
    /// What to say.
    pub narration: Narration,
    /// Whether the session ends after this reply.
    pub end_session: bool,
}

impl TurnResult {
    fn from_outcome(outcome: TurnOutcome) -> Self {
        Self {
            attributes: outcome.snapshot.to_attributes(),
            narration: narrate(outcome.narration),
            end_session: outcome.end_session,
        }
    }
}

/// Handles the `TakeTurn` command.
///
/// When no game is running, any intent starts or resumes one at the stored
/// checkpoint. Otherwise the intent is dispatched against the snapshot; the
/// store is only read if the snapshot carries no checkpoint.
pub async fn handle_take_turn(
    command: &TakeTurn,
    clock: &dyn Clock,
    repo: &dyn ProgressRepository,
) -> TurnResult {
    let today = clock.today();
    let player_id = &command.player_id;

    let outcome = if command.attributes.playing() {
        let quest_point = match command.attributes.quest_point {
            Some(raw) => QuestPoint::try_from(raw),
            None => Ok(load_quest_point(repo, player_id, today).await),
        };
        match quest_point.and_then(|qp| SessionSnapshot::restore(&command.attributes, qp)) {
            Ok(snapshot) => dispatch(&snapshot, &command.intent),
            Err(e) => return rejected(command, &e),
        }
    } else {
        start(load_quest_point(repo, player_id, today).await)
    };

    if let Some(checkpoint) = outcome.checkpoint {
        save_quest_point(repo, player_id, checkpoint, today).await;
    }

    info!(
        correlation_id = %command.correlation_id(),
        player_id = %player_id,
        quest_point = %outcome.snapshot.quest_point,
        narration = ?outcome.narration,
        "turn handled"
    );

    TurnResult::from_outcome(outcome)
}

fn rejected(command: &TakeTurn, error: &DomainError) -> TurnResult {
    warn!(
        correlation_id = %command.correlation_id(),
        player_id = %command.player_id,
        error = %error,
        "session attributes rejected"
    );
    TurnResult {
        attributes: command.attributes.clone(),
        narration: narrate(NarrationKey::Error),
        end_session: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use puzzle_prison_core::progress::PlayerId;
    use puzzle_prison_narrative::domain::audio::AudioCue;
    use puzzle_prison_test_support::{
        FailingProgressRepository, FixedClock, InMemoryProgressRepository, RepositoryCall,
    };
    use uuid::Uuid;

    use crate::domain::intents::Intent;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn player() -> PlayerId {
        PlayerId::new("amzn1.ask.account.TEST")
    }

    fn playing(quest_point: i64) -> SessionAttributes {
        SessionAttributes {
            is_playing: Some(true),
            quest_point: Some(quest_point),
            ..SessionAttributes::default()
        }
    }

    fn turn(attributes: SessionAttributes, intent: Intent) -> TakeTurn {
        TakeTurn {
            correlation_id: Uuid::new_v4(),
            player_id: player(),
            attributes,
            intent,
        }
    }

    #[tokio::test]
    async fn test_fresh_player_launch_welcomes_at_start() {
        // Arrange
        let repo = InMemoryProgressRepository::new();
        let command = turn(SessionAttributes::default(), Intent::Play);

        // Act
        let result = handle_take_turn(&command, &clock(), &repo).await;

        // Assert
        assert_eq!(result.narration, narrate(NarrationKey::Start(QuestPoint::START)));
        assert_eq!(result.attributes.quest_point, Some(0));
        assert_eq!(result.attributes.is_playing, Some(true));
        assert_eq!(
            repo.calls(),
            vec![RepositoryCall::Get(player()), RepositoryCall::Create(player())]
        );
    }

    #[tokio::test]
    async fn test_any_intent_while_not_playing_resumes_stored_checkpoint() {
        let repo = InMemoryProgressRepository::with_row(&player(), 5, today());
        let command = turn(
            SessionAttributes {
                quest_point: Some(2),
                ..SessionAttributes::default()
            },
            Intent::Walk("north".to_owned()),
        );

        let result = handle_take_turn(&command, &clock(), &repo).await;

        assert_eq!(result.attributes.quest_point, Some(5));
        assert_eq!(
            result.narration,
            narrate(NarrationKey::Start(QuestPoint::new(5).unwrap()))
        );
    }

    #[tokio::test]
    async fn test_store_read_failure_still_plays_a_turn() {
        // Arrange
        let command = turn(SessionAttributes::default(), Intent::Play);

        // Act
        let result = handle_take_turn(&command, &clock(), &FailingProgressRepository).await;

        // Assert
        assert_eq!(result.attributes.quest_point, Some(0));
        assert!(!result.end_session);
    }

    #[tokio::test]
    async fn test_first_terminal_use_persists_checkpoint_one() {
        // Arrange
        let repo = InMemoryProgressRepository::with_row(&player(), 0, today());
        let command = turn(
            playing(0),
            Intent::InteractWith("computer terminal".to_owned()),
        );

        // Act
        let result = handle_take_turn(&command, &clock(), &repo).await;

        // Assert
        assert_eq!(result.attributes.quest_point, Some(1));
        assert_eq!(result.narration.audio_cues, vec![AudioCue::LetterBox]);
        assert_eq!(
            repo.calls(),
            vec![RepositoryCall::Update(
                player(),
                QuestPoint::new(1).unwrap()
            )]
        );
    }

    #[tokio::test]
    async fn test_playing_snapshot_without_checkpoint_reads_store() {
        let repo = InMemoryProgressRepository::with_row(&player(), 3, today());
        let command = turn(
            SessionAttributes {
                is_playing: Some(true),
                ..SessionAttributes::default()
            },
            Intent::Read,
        );

        let result = handle_take_turn(&command, &clock(), &repo).await;

        assert_eq!(result.attributes.quest_point, Some(4));
        assert_eq!(repo.stored_quest_point(&player()), Some(4));
    }

    #[tokio::test]
    async fn test_write_failure_still_returns_advanced_state() {
        let command = turn(playing(1), Intent::Read);

        let result = handle_take_turn(&command, &clock(), &FailingProgressRepository).await;

        assert_eq!(result.attributes.quest_point, Some(2));
    }

    #[tokio::test]
    async fn test_final_letter_ends_session_and_resets_store() {
        // Arrange
        let repo = InMemoryProgressRepository::with_row(&player(), 9, today());
        let command = turn(playing(9), Intent::Read);

        // Act
        let result = handle_take_turn(&command, &clock(), &repo).await;

        // Assert
        assert!(result.end_session);
        assert_eq!(result.attributes.quest_point, Some(0));
        assert_eq!(result.attributes.is_playing, Some(false));
        assert_eq!(repo.stored_quest_point(&player()), Some(0));
    }

    #[tokio::test]
    async fn test_out_of_range_snapshot_echoes_state_with_error() {
        // Arrange
        let repo = InMemoryProgressRepository::new();
        let attributes = playing(12);
        let command = turn(attributes.clone(), Intent::Read);

        // Act
        let result = handle_take_turn(&command, &clock(), &repo).await;

        // Assert
        assert_eq!(result.attributes, attributes);
        assert_eq!(result.narration, narrate(NarrationKey::Error));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_lap_progress_echoes_state_with_error() {
        let attributes = SessionAttributes {
            diag_progress: Some("AQ".to_owned()),
            ..playing(4)
        };
        let command = turn(attributes.clone(), Intent::Walk("southwest".to_owned()));

        let result =
            handle_take_turn(&command, &clock(), &InMemoryProgressRepository::new()).await;

        assert_eq!(result.attributes, attributes);
        assert_eq!(result.narration, narrate(NarrationKey::Error));
    }

    #[tokio::test]
    async fn test_stop_never_writes() {
        let repo = InMemoryProgressRepository::new();
        let command = turn(playing(5), Intent::Stop);

        let result = handle_take_turn(&command, &clock(), &repo).await;

        assert!(result.end_session);
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quiz_flags_round_trip_across_turns() {
        // Arrange
        let repo = InMemoryProgressRepository::new();
        let mut attributes = playing(6);
        let steps = [
            ("northeast", "2"),
            ("northwest", "1"),
            ("southeast", "2"),
            ("southwest", "1"),
        ];

        // Act
        for (i, (corner, mean)) in steps.into_iter().enumerate() {
            let entered = handle_take_turn(
                &turn(attributes.clone(), Intent::InteractWith(corner.to_owned())),
                &clock(),
                &repo,
            )
            .await;
            let wire = serde_json::to_value(&entered.attributes).unwrap();
            let restored: SessionAttributes = serde_json::from_value(wire).unwrap();
            let answered = handle_take_turn(
                &turn(restored, Intent::Option(mean.to_owned())),
                &clock(),
                &repo,
            )
            .await;
            attributes = answered.attributes;

            // Assert
            let expected = if i < 3 { 6 } else { 7 };
            assert_eq!(attributes.quest_point, Some(expected), "after {corner}");
        }
        assert_eq!(
            repo.writes(),
            vec![RepositoryCall::Update(
                player(),
                QuestPoint::new(7).unwrap()
            )]
        );
        assert_eq!(attributes.ne, None);
    }
}
