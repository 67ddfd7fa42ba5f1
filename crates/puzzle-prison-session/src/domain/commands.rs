//! Commands for the session context.

use puzzle_prison_core::command::Command;
use puzzle_prison_core::progress::PlayerId;
use uuid::Uuid;

use super::intents::Intent;
use super::snapshot::SessionAttributes;

/// Command to play one turn of the game.
#[derive(Debug, Clone)]
pub struct TakeTurn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player taking the turn.
    pub player_id: PlayerId,
    /// Session attributes returned by the platform.
    pub attributes: SessionAttributes,
    /// What the player wants to do.
    pub intent: Intent,
}

impl Command for TakeTurn {
    fn command_type(&self) -> &'static str {
        "session.take_turn"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
