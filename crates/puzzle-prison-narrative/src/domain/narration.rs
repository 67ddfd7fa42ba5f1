//! Narration values and the keys that select them.

use puzzle_prison_core::progress::QuestPoint;
use puzzle_prison_world::domain::entities::{Category, Corner, Entity, Terminal, Wall};

use super::audio::AudioCue;

/// Marks where the next audio cue plays inside a narration body.
pub const AUDIO_PLACEHOLDER: &str = "{audio}";

/// One spoken reply: a card title, a body with audio placeholders, a
/// reprompt, and the cues that fill the placeholders in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Card title.
    pub title: String,
    /// Body text. Each [`AUDIO_PLACEHOLDER`] consumes the next cue.
    pub body: String,
    /// Spoken when the player stays silent. Empty when the session ends.
    pub reprompt: String,
    /// Cues in playback order.
    pub audio_cues: Vec<AudioCue>,
}

impl Narration {
    /// Returns how many audio placeholders the body contains.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.body.matches(AUDIO_PLACEHOLDER).count()
    }
}

/// How the player approached a generic object that needs clarifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// "walk to ..."
    Walk,
    /// "interact with ..."
    Interact,
}

/// The letters posted through the letter box, in order of arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    /// Read at checkpoint 2.
    PushBoundaries,
    /// Read at checkpoint 4.
    TakeALap,
    /// Read at checkpoint 6.
    ActUncharacteristically,
    /// Read at checkpoint 8.
    TakeABreak,
}

impl Letter {
    /// The letter lying on the floor once the player has reached `quest_point`
    /// by reading it, if any.
    #[must_use]
    pub fn at(quest_point: QuestPoint) -> Option<Self> {
        match quest_point.value() {
            2 => Some(Self::PushBoundaries),
            4 => Some(Self::TakeALap),
            6 => Some(Self::ActUncharacteristically),
            8 => Some(Self::TakeABreak),
            _ => None,
        }
    }
}

/// How a terminal reacts to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizReply {
    /// The kind answer cheers the terminal up.
    Kind,
    /// The mean answer upsets it.
    Mean,
    /// The mean answer upsets the last working terminal.
    Final,
}

/// Selects a narration from the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationKey {
    /// The command or object was not understood.
    Misunderstood,
    /// The session state could not be interpreted.
    Error,
    /// `Play` while a game is already running.
    AlreadyPlaying {
        /// Whether a terminal is waiting for an option.
        in_quiz: bool,
    },
    /// Start or resume at a checkpoint.
    Start(QuestPoint),
    /// Resuming at checkpoint 8 after a break; the final letter arrives.
    TimePassed,
    /// Instructions followed by the room overview.
    Help(QuestPoint),
    /// The room overview.
    Repeat(QuestPoint),
    /// Stop or cancel.
    Farewell,
    /// A generic object word that needs a qualifier.
    Clarify {
        /// What the player was doing.
        approach: Approach,
        /// The category named.
        category: Category,
    },
    /// Walked up to an entity.
    WalkTo(Entity),
    /// Walked up to the only terminal in the room.
    WalkToLoneTerminal,
    /// Walked up to a statue and completed the lap.
    LapCompleted(Corner),
    /// Knocked on a wall.
    KnockWall(Wall),
    /// Pushed the north wall and merged the room.
    PushNorthWall,
    /// Examined a statue.
    ExamineStatue(Corner),
    /// Peered through the letter box.
    PeerThroughLetterBox,
    /// Tried to open the metal cabinet.
    TryMetalCabinet,
    /// Used the terminal for the first time; the first letter arrives.
    TerminalFirstUse,
    /// A terminal that does not react. `None` is the only terminal in the room.
    TerminalNotResponding(Option<Terminal>),
    /// A corner terminal shows its statement and options.
    TerminalStatement(Corner),
    /// The options of the active terminal, with instructions.
    TerminalOptions(Corner),
    /// A terminal's reaction to an answer.
    TerminalReply(Corner, QuizReply),
    /// Read the letter on the floor.
    ReadLetter {
        /// Which letter.
        letter: Letter,
        /// Whether reading it triggers its event.
        first_time: bool,
    },
    /// Read the last letter and escaped.
    Ending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_lie_only_at_even_reading_checkpoints() {
        let letters: Vec<_> = (0..=9)
            .filter_map(|qp| Letter::at(QuestPoint::new(qp).unwrap()))
            .collect();
        assert_eq!(
            letters,
            vec![
                Letter::PushBoundaries,
                Letter::TakeALap,
                Letter::ActUncharacteristically,
                Letter::TakeABreak,
            ]
        );
    }

    #[test]
    fn test_placeholder_count_counts_every_marker() {
        let narration = Narration {
            title: String::new(),
            body: "a{audio}b {audio}".to_owned(),
            reprompt: String::new(),
            audio_cues: vec![AudioCue::LetterBox, AudioCue::SharpClick],
        };
        assert_eq!(narration.placeholder_count(), 2);
    }
}
