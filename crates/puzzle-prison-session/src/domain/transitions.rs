//! The quest progress state machine.
//!
//! Checkpoints only ever move along the edges of [`TRANSITIONS`]. Everything
//! else a player does leaves the checkpoint where it is.

use puzzle_prison_core::progress::QuestPoint;

/// An event that can move the quest to its next checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The central terminal is used for the first time.
    FirstTerminalUse,
    /// The letter on the floor is read.
    ReadLetter,
    /// The north wall is pushed.
    PushNorthWall,
    /// The lap around the corner statues is completed.
    LapCompleted,
    /// The last corner terminal is upset.
    QuizCompleted,
    /// A new game starts while waiting for the final letter.
    TimePassed,
}

/// `(from, trigger, to)` for every checkpoint transition.
pub const TRANSITIONS: [(u8, Trigger, u8); 10] = [
    (0, Trigger::FirstTerminalUse, 1),
    (1, Trigger::ReadLetter, 2),
    (2, Trigger::PushNorthWall, 3),
    (3, Trigger::ReadLetter, 4),
    (4, Trigger::LapCompleted, 5),
    (5, Trigger::ReadLetter, 6),
    (6, Trigger::QuizCompleted, 7),
    (7, Trigger::ReadLetter, 8),
    (8, Trigger::TimePassed, 9),
    (9, Trigger::ReadLetter, 0),
];

/// Returns the checkpoint reached by firing `trigger` at `from`, or `None`
/// if the trigger does not apply there.
#[must_use]
pub fn next_checkpoint(from: QuestPoint, trigger: Trigger) -> Option<QuestPoint> {
    TRANSITIONS
        .iter()
        .find(|(source, t, _)| *source == from.value() && *t == trigger)
        .and_then(|(_, _, to)| QuestPoint::new(*to).ok())
}
