//! The intent dispatcher.
//!
//! A pure function from the current snapshot and one intent to the next
//! snapshot, a narration, and the checkpoint to persist (if any). Global
//! rules are checked first, then the intent is routed through the object
//! resolver, the puzzles and the transition table.

use puzzle_prison_core::progress::QuestPoint;
use puzzle_prison_narrative::domain::narration::{Approach, Letter, NarrationKey, QuizReply};
use puzzle_prison_puzzles::domain::lap::{LapProgress, LapSymbol};
use puzzle_prison_puzzles::domain::quiz::{QuizOption, QuizOutcome};
use puzzle_prison_world::domain::context::Context;
use puzzle_prison_world::domain::entities::{Corner, Entity, Terminal, Wall};
use puzzle_prison_world::domain::resolver::{Resolution, resolve};
use tracing::{debug, info};

use super::intents::Intent;
use super::snapshot::SessionSnapshot;
use super::transitions::{Trigger, next_checkpoint};

/// Checkpoint at which the lap is walked.
const LAP_CHECKPOINT: u8 = 4;

/// Checkpoint at which the corner terminals take answers.
const QUIZ_CHECKPOINT: u8 = 6;

/// Checkpoint from which the corner terminals exist.
const TERMINALS_REVEALED: u8 = 6;

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The state to hand back to the platform.
    pub snapshot: SessionSnapshot,
    /// What to say.
    pub narration: NarrationKey,
    /// A checkpoint reached this turn, to be persisted.
    pub checkpoint: Option<QuestPoint>,
    /// Whether the session ends after this reply.
    pub end_session: bool,
}

impl TurnOutcome {
    fn stay(snapshot: SessionSnapshot, narration: NarrationKey) -> Self {
        Self {
            snapshot,
            narration,
            checkpoint: None,
            end_session: false,
        }
    }

    fn unchanged(snapshot: &SessionSnapshot, narration: NarrationKey) -> Self {
        Self::stay(snapshot.clone(), narration)
    }
}

/// Starts or resumes a game at the durable checkpoint.
///
/// Resuming at checkpoint 8 means time has passed since the last game, which
/// advances the quest to 9.
#[must_use]
pub fn start(quest_point: QuestPoint) -> TurnOutcome {
    if let Some(next) = next_checkpoint(quest_point, Trigger::TimePassed) {
        info!(from = %quest_point, to = %next, "time passed, final letter posted");
        return TurnOutcome {
            snapshot: SessionSnapshot::at(next, Context::Nothing),
            narration: NarrationKey::TimePassed,
            checkpoint: Some(next),
            end_session: false,
        };
    }
    TurnOutcome::stay(
        SessionSnapshot::at(quest_point, Context::Nothing),
        NarrationKey::Start(quest_point),
    )
}

/// Dispatches `intent` against a running game.
///
/// Callers route sessions that are not playing to [`start`] instead.
#[must_use]
pub fn dispatch(snapshot: &SessionSnapshot, intent: &Intent) -> TurnOutcome {
    match intent {
        Intent::StartOver => {
            info!(from = %snapshot.quest_point, "starting over");
            return TurnOutcome {
                snapshot: SessionSnapshot::at(QuestPoint::START, Context::Nothing),
                narration: NarrationKey::Start(QuestPoint::START),
                checkpoint: Some(QuestPoint::START),
                end_session: false,
            };
        }
        Intent::Stop | Intent::Cancel => {
            let mut stopped = snapshot.clone();
            stopped.is_playing = false;
            return TurnOutcome {
                snapshot: stopped,
                narration: NarrationKey::Farewell,
                checkpoint: None,
                end_session: true,
            };
        }
        Intent::Play => {
            let in_quiz = snapshot.context.active_quiz().is_some();
            return TurnOutcome::unchanged(snapshot, NarrationKey::AlreadyPlaying { in_quiz });
        }
        _ => {}
    }

    if let Some(corner) = snapshot.context.active_quiz() {
        return match intent {
            Intent::Option(phrase) => answer(snapshot, corner, phrase),
            Intent::Help => TurnOutcome::unchanged(snapshot, NarrationKey::TerminalOptions(corner)),
            Intent::Repeat => {
                TurnOutcome::unchanged(snapshot, NarrationKey::TerminalStatement(corner))
            }
            _ => TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood),
        };
    }

    match intent {
        Intent::Help => TurnOutcome::unchanged(snapshot, NarrationKey::Help(snapshot.quest_point)),
        Intent::Repeat => {
            TurnOutcome::unchanged(snapshot, NarrationKey::Repeat(snapshot.quest_point))
        }
        Intent::Walk(phrase) => walk(snapshot, phrase),
        Intent::Interact => interact(snapshot, &snapshot.context.to_string()),
        Intent::InteractWith(phrase) => interact(snapshot, phrase),
        Intent::Read => read(snapshot),
        Intent::Option(_) => TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood),
        Intent::StartOver | Intent::Stop | Intent::Cancel | Intent::Play => {
            TurnOutcome::unchanged(snapshot, NarrationKey::Error)
        }
    }
}

/// Moves to the checkpoint `trigger` leads to, clearing substate.
fn advance(
    snapshot: &SessionSnapshot,
    trigger: Trigger,
    context: Context,
    narration: NarrationKey,
) -> TurnOutcome {
    let Some(next) = next_checkpoint(snapshot.quest_point, trigger) else {
        return TurnOutcome::unchanged(snapshot, NarrationKey::Error);
    };
    info!(from = %snapshot.quest_point, to = %next, ?trigger, "checkpoint reached");
    TurnOutcome {
        snapshot: SessionSnapshot::at(next, context),
        narration,
        checkpoint: Some(next),
        end_session: false,
    }
}

/// Stays at the current checkpoint with a new context.
fn remember(snapshot: &SessionSnapshot, context: Context, narration: NarrationKey) -> TurnOutcome {
    let mut next = snapshot.clone();
    next.context = context;
    TurnOutcome::stay(next, narration)
}

fn walk(snapshot: &SessionSnapshot, phrase: &str) -> TurnOutcome {
    let entity = match resolve(phrase, snapshot.quest_point, snapshot.context) {
        Resolution::Resolved(entity) => entity,
        Resolution::Clarify(category) => {
            return TurnOutcome::unchanged(
                snapshot,
                NarrationKey::Clarify {
                    approach: Approach::Walk,
                    category,
                },
            );
        }
        Resolution::Misunderstood => {
            return TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood);
        }
    };
    let context = Context::At(entity);

    match entity {
        Entity::Statue(corner) if snapshot.quest_point.value() == LAP_CHECKPOINT => {
            match snapshot.lap.visit(LapSymbol::from(corner)) {
                LapProgress::Completed => advance(
                    snapshot,
                    Trigger::LapCompleted,
                    context,
                    NarrationKey::LapCompleted(corner),
                ),
                LapProgress::Partial(lap) => {
                    debug!(lap = %lap, "lap progress");
                    let mut next = snapshot.clone();
                    next.lap = lap;
                    next.context = context;
                    TurnOutcome::stay(next, NarrationKey::WalkTo(entity))
                }
            }
        }
        Entity::Terminal(_) if snapshot.quest_point.value() < TERMINALS_REVEALED => {
            remember(snapshot, context, NarrationKey::WalkToLoneTerminal)
        }
        _ => remember(snapshot, context, NarrationKey::WalkTo(entity)),
    }
}

fn interact(snapshot: &SessionSnapshot, phrase: &str) -> TurnOutcome {
    let entity = match resolve(phrase, snapshot.quest_point, snapshot.context) {
        Resolution::Resolved(entity) => entity,
        Resolution::Clarify(category) => {
            return TurnOutcome::unchanged(
                snapshot,
                NarrationKey::Clarify {
                    approach: Approach::Interact,
                    category,
                },
            );
        }
        Resolution::Misunderstood => {
            return TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood);
        }
    };
    let context = Context::At(entity);

    match entity {
        Entity::Wall(Wall::North)
            if next_checkpoint(snapshot.quest_point, Trigger::PushNorthWall).is_some() =>
        {
            advance(
                snapshot,
                Trigger::PushNorthWall,
                context,
                NarrationKey::PushNorthWall,
            )
        }
        Entity::Wall(wall) => remember(snapshot, context, NarrationKey::KnockWall(wall)),
        Entity::Statue(corner) => remember(snapshot, context, NarrationKey::ExamineStatue(corner)),
        Entity::Letter => read(snapshot),
        Entity::LetterBox => remember(snapshot, context, NarrationKey::PeerThroughLetterBox),
        Entity::MetalCabinet => remember(snapshot, context, NarrationKey::TryMetalCabinet),
        Entity::Terminal(terminal) => use_terminal(snapshot, terminal),
    }
}

fn use_terminal(snapshot: &SessionSnapshot, terminal: Terminal) -> TurnOutcome {
    let context = Context::At(Entity::Terminal(terminal));
    if snapshot.quest_point == QuestPoint::START {
        return advance(
            snapshot,
            Trigger::FirstTerminalUse,
            context,
            NarrationKey::TerminalFirstUse,
        );
    }
    if snapshot.quest_point.value() < TERMINALS_REVEALED {
        return remember(snapshot, context, NarrationKey::TerminalNotResponding(None));
    }

    match terminal {
        Terminal::Corner(corner)
            if snapshot.quest_point.value() == QUIZ_CHECKPOINT
                && !snapshot.mood.is_flagged(corner) =>
        {
            remember(
                snapshot,
                Context::Quiz(corner),
                NarrationKey::TerminalStatement(corner),
            )
        }
        _ => remember(
            snapshot,
            context,
            NarrationKey::TerminalNotResponding(Some(terminal)),
        ),
    }
}

fn read(snapshot: &SessionSnapshot) -> TurnOutcome {
    let quest_point = snapshot.quest_point;
    if quest_point == QuestPoint::START {
        return TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood);
    }

    if quest_point == QuestPoint::FINAL {
        let Some(next) = next_checkpoint(quest_point, Trigger::ReadLetter) else {
            return TurnOutcome::unchanged(snapshot, NarrationKey::Error);
        };
        info!(from = %quest_point, to = %next, "final letter read, game complete");
        let mut finished = SessionSnapshot::at(next, Context::Nothing);
        finished.is_playing = false;
        return TurnOutcome {
            snapshot: finished,
            narration: NarrationKey::Ending,
            checkpoint: Some(next),
            end_session: true,
        };
    }

    match next_checkpoint(quest_point, Trigger::ReadLetter) {
        Some(next) => match Letter::at(next) {
            Some(letter) => advance(
                snapshot,
                Trigger::ReadLetter,
                snapshot.context,
                NarrationKey::ReadLetter {
                    letter,
                    first_time: true,
                },
            ),
            None => TurnOutcome::unchanged(snapshot, NarrationKey::Error),
        },
        None => match Letter::at(quest_point) {
            Some(letter) => TurnOutcome::unchanged(
                snapshot,
                NarrationKey::ReadLetter {
                    letter,
                    first_time: false,
                },
            ),
            None => TurnOutcome::unchanged(snapshot, NarrationKey::Error),
        },
    }
}

fn answer(snapshot: &SessionSnapshot, corner: Corner, phrase: &str) -> TurnOutcome {
    let Ok(option) = phrase.parse::<QuizOption>() else {
        debug!(phrase, "unrecognized quiz option");
        return TurnOutcome::unchanged(snapshot, NarrationKey::Misunderstood);
    };
    let context = Context::At(Entity::Terminal(Terminal::Corner(corner)));

    match snapshot.mood.answer(corner, option) {
        QuizOutcome::Kind => remember(
            snapshot,
            context,
            NarrationKey::TerminalReply(corner, QuizReply::Kind),
        ),
        QuizOutcome::Flagged(mood) => {
            let mut next = snapshot.clone();
            next.mood = mood;
            next.context = context;
            TurnOutcome::stay(next, NarrationKey::TerminalReply(corner, QuizReply::Mean))
        }
        QuizOutcome::Completed => advance(
            snapshot,
            Trigger::QuizCompleted,
            context,
            NarrationKey::TerminalReply(corner, QuizReply::Final),
        ),
    }
}
