//! Remembered context carried between turns.

use std::fmt;
use std::str::FromStr;

use puzzle_prison_core::error::DomainError;

use super::entities::{Corner, Entity, Terminal, Wall};

/// Prefix of the context tag marking an active terminal quiz.
const QUIZ_TAG_PREFIX: &str = "qp6_";

/// What the player was last dealing with.
///
/// Serialized as a free-form tag in the session attributes; see the
/// [`fmt::Display`] and [`FromStr`] implementations for the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// No entity has been resolved yet this session.
    #[default]
    Nothing,
    /// The last resolved entity.
    At(Entity),
    /// A corner terminal is showing its two options and awaits a choice.
    Quiz(Corner),
}

impl Context {
    /// Returns the remembered entity, if the context names one.
    #[must_use]
    pub fn entity(self) -> Option<Entity> {
        match self {
            Self::At(entity) => Some(entity),
            Self::Nothing | Self::Quiz(_) => None,
        }
    }

    /// Returns the terminal awaiting an option choice, if any.
    #[must_use]
    pub fn active_quiz(self) -> Option<Corner> {
        match self {
            Self::Quiz(corner) => Some(corner),
            Self::Nothing | Self::At(_) => None,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::At(entity) => write!(f, "{entity}"),
            Self::Quiz(corner) => write!(f, "{QUIZ_TAG_PREFIX}{}", corner.abbreviation()),
        }
    }
}

impl FromStr for Context {
    type Err = DomainError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        if tag.is_empty() {
            return Ok(Self::Nothing);
        }
        if let Some(abbreviation) = tag.strip_prefix(QUIZ_TAG_PREFIX) {
            return Corner::ALL
                .into_iter()
                .find(|corner| corner.abbreviation() == abbreviation)
                .map(Self::Quiz)
                .ok_or_else(|| unknown_tag(tag));
        }
        known_entities()
            .find(|entity| entity.to_string() == tag)
            .map(Self::At)
            .ok_or_else(|| unknown_tag(tag))
    }
}

fn known_entities() -> impl Iterator<Item = Entity> {
    let walls = Wall::ALL.into_iter().map(Entity::Wall);
    let statues = Corner::ALL.into_iter().map(Entity::Statue);
    let terminals = Corner::ALL
        .into_iter()
        .map(|corner| Entity::Terminal(Terminal::Corner(corner)));
    walls.chain(statues).chain(terminals).chain([
        Entity::Terminal(Terminal::Central),
        Entity::Letter,
        Entity::LetterBox,
        Entity::MetalCabinet,
    ])
}

fn unknown_tag(tag: &str) -> DomainError {
    DomainError::MalformedSnapshot(format!("unknown context tag: {tag:?}"))
}
