//! The terminal quiz.
//!
//! Each corner terminal makes a statement and offers two answers, one kind
//! and one mean. Being mean to all four terminals completes the quiz. The
//! position of the mean answer differs per terminal.

use std::str::FromStr;

use puzzle_prison_core::error::DomainError;
use puzzle_prison_world::domain::entities::Corner;
use tracing::debug;

/// One of the two answers a terminal offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizOption {
    /// The first answer.
    One,
    /// The second answer.
    Two,
}

impl FromStr for QuizOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "one" | "first" | "option one" | "option 1" => Ok(Self::One),
            "2" | "two" | "second" | "option two" | "option 2" => Ok(Self::Two),
            other => Err(DomainError::MalformedSnapshot(format!(
                "unknown quiz option: {other:?}"
            ))),
        }
    }
}

/// Which answer counts as mean at each terminal.
const MEAN_OPTIONS: [(Corner, QuizOption); 4] = [
    (Corner::NorthEast, QuizOption::Two),
    (Corner::NorthWest, QuizOption::One),
    (Corner::SouthEast, QuizOption::Two),
    (Corner::SouthWest, QuizOption::One),
];

/// Returns the mean answer of the terminal in `corner`.
#[must_use]
pub fn mean_option(corner: Corner) -> QuizOption {
    MEAN_OPTIONS
        .iter()
        .find(|(c, _)| *c == corner)
        .map_or(QuizOption::One, |(_, option)| *option)
}

/// Result of answering a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The kind answer was chosen; nothing changes.
    Kind,
    /// The mean answer was chosen and the terminal is now flagged.
    Flagged(TerminalMood),
    /// The mean answer was chosen at the last unflagged terminal.
    Completed,
}

/// Which terminals have been answered meanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalMood {
    /// North east terminal flagged.
    pub ne: bool,
    /// North west terminal flagged.
    pub nw: bool,
    /// South east terminal flagged.
    pub se: bool,
    /// South west terminal flagged.
    pub sw: bool,
}

impl TerminalMood {
    /// Returns whether the terminal in `corner` has been answered meanly.
    #[must_use]
    pub fn is_flagged(self, corner: Corner) -> bool {
        match corner {
            Corner::NorthEast => self.ne,
            Corner::NorthWest => self.nw,
            Corner::SouthEast => self.se,
            Corner::SouthWest => self.sw,
        }
    }

    /// Returns `true` if no terminal is flagged.
    #[must_use]
    pub fn is_clear(self) -> bool {
        Corner::ALL.into_iter().all(|corner| !self.is_flagged(corner))
    }

    fn with_flag(mut self, corner: Corner) -> Self {
        match corner {
            Corner::NorthEast => self.ne = true,
            Corner::NorthWest => self.nw = true,
            Corner::SouthEast => self.se = true,
            Corner::SouthWest => self.sw = true,
        }
        self
    }

    /// Answers the terminal in `corner` with `option`.
    ///
    /// The mean answer completes the quiz when the three other terminals are
    /// already flagged; the answering terminal's own flag is not set then.
    #[must_use]
    pub fn answer(self, corner: Corner, option: QuizOption) -> QuizOutcome {
        if option != mean_option(corner) {
            debug!(corner = corner.abbreviation(), "kind answer");
            return QuizOutcome::Kind;
        }

        let others_flagged = Corner::ALL
            .into_iter()
            .filter(|other| *other != corner)
            .all(|other| self.is_flagged(other));
        if others_flagged {
            QuizOutcome::Completed
        } else {
            QuizOutcome::Flagged(self.with_flag(corner))
        }
    }
}
