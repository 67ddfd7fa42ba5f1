//! The session snapshot round-tripped through the voice platform.
//!
//! [`SessionAttributes`] is the loose wire form the platform hands back each
//! turn. [`SessionSnapshot`] is the validated game state built from it.

use puzzle_prison_core::error::DomainError;
use puzzle_prison_core::progress::QuestPoint;
use puzzle_prison_puzzles::domain::lap::LapSequence;
use puzzle_prison_puzzles::domain::quiz::TerminalMood;
use puzzle_prison_world::domain::context::Context;
use serde::{Deserialize, Serialize};

/// Checkpoint at which the lap sequence is tracked.
const LAP_CHECKPOINT: u8 = 4;

/// Checkpoint at which the terminal quiz is tracked.
const QUIZ_CHECKPOINT: u8 = 6;

/// Session attributes as sent over the wire. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    /// Whether a game is running in this session.
    #[serde(alias = "IsPlaying", skip_serializing_if = "Option::is_none")]
    pub is_playing: Option<bool>,
    /// The raw checkpoint, possibly out of range.
    #[serde(alias = "QuestPoint", skip_serializing_if = "Option::is_none")]
    pub quest_point: Option<i64>,
    /// Corners visited in the current lap.
    #[serde(alias = "DiagProgress", skip_serializing_if = "Option::is_none")]
    pub diag_progress: Option<String>,
    /// North east terminal upset.
    #[serde(rename = "NE", skip_serializing_if = "Option::is_none")]
    pub ne: Option<bool>,
    /// North west terminal upset.
    #[serde(rename = "NW", skip_serializing_if = "Option::is_none")]
    pub nw: Option<bool>,
    /// South east terminal upset.
    #[serde(rename = "SE", skip_serializing_if = "Option::is_none")]
    pub se: Option<bool>,
    /// South west terminal upset.
    #[serde(rename = "SW", skip_serializing_if = "Option::is_none")]
    pub sw: Option<bool>,
    /// Remembered context tag.
    #[serde(alias = "Context", skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl SessionAttributes {
    /// Returns whether the attributes describe a running game.
    #[must_use]
    pub fn playing(&self) -> bool {
        self.is_playing.unwrap_or(false)
    }
}

/// Validated per-session game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current checkpoint.
    pub quest_point: QuestPoint,
    /// Lap progress; empty unless at checkpoint 4.
    pub lap: LapSequence,
    /// Terminal quiz flags; clear unless at checkpoint 6.
    pub mood: TerminalMood,
    /// What the player last dealt with.
    pub context: Context,
    /// Whether a game is running.
    pub is_playing: bool,
}

impl SessionSnapshot {
    /// A running game at `quest_point` with no substate.
    #[must_use]
    pub fn at(quest_point: QuestPoint, context: Context) -> Self {
        Self {
            quest_point,
            lap: LapSequence::new(),
            mood: TerminalMood::default(),
            context,
            is_playing: true,
        }
    }

    /// Rebuilds the snapshot from wire attributes at a known checkpoint.
    ///
    /// Substate that belongs to another checkpoint is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedSnapshot` if the lap progress or the
    /// context tag cannot be parsed, or if a terminal quiz is active outside
    /// checkpoint 6.
    pub fn restore(
        attributes: &SessionAttributes,
        quest_point: QuestPoint,
    ) -> Result<Self, DomainError> {
        let lap: LapSequence = attributes
            .diag_progress
            .as_deref()
            .unwrap_or_default()
            .parse()?;
        let context: Context = attributes
            .context
            .as_deref()
            .unwrap_or_default()
            .parse()?;

        if context.active_quiz().is_some() && quest_point.value() != QUIZ_CHECKPOINT {
            return Err(DomainError::MalformedSnapshot(format!(
                "terminal quiz active at checkpoint {quest_point}"
            )));
        }

        let mood = TerminalMood {
            ne: attributes.ne.unwrap_or(false),
            nw: attributes.nw.unwrap_or(false),
            se: attributes.se.unwrap_or(false),
            sw: attributes.sw.unwrap_or(false),
        };

        Ok(Self {
            quest_point,
            lap: if quest_point.value() == LAP_CHECKPOINT {
                lap
            } else {
                LapSequence::new()
            },
            mood: if quest_point.value() == QUIZ_CHECKPOINT {
                mood
            } else {
                TerminalMood::default()
            },
            context,
            is_playing: attributes.playing(),
        })
    }

    /// Converts back to wire attributes, emitting lap progress only at
    /// checkpoint 4 and quiz flags only at checkpoint 6.
    #[must_use]
    pub fn to_attributes(&self) -> SessionAttributes {
        let at_lap = self.quest_point.value() == LAP_CHECKPOINT;
        let at_quiz = self.quest_point.value() == QUIZ_CHECKPOINT;
        let flag = |value: bool| at_quiz.then_some(value);

        SessionAttributes {
            is_playing: Some(self.is_playing),
            quest_point: Some(i64::from(self.quest_point)),
            diag_progress: at_lap.then(|| self.lap.to_string()),
            ne: flag(self.mood.ne),
            nw: flag(self.mood.nw),
            se: flag(self.mood.se),
            sw: flag(self.mood.sw),
            context: Some(self.context.to_string()),
        }
    }
}
