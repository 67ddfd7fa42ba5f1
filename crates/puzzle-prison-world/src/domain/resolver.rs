//! Canonical object resolution.
//!
//! Maps a normalized object phrase to a room entity, taking the current
//! checkpoint and the remembered context into account. The same words can
//! mean different things at different checkpoints: "northeast corner" is a
//! statue until the statues unfurl into terminals at checkpoint 6.

use puzzle_prison_core::progress::QuestPoint;
use tracing::debug;

use super::context::Context;
use super::entities::{Category, Corner, Entity, Terminal, Wall};

/// The first checkpoint at which the corner statues have become terminals.
const TERMINALS_REVEALED: u8 = 6;

/// Outcome of resolving an object phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The phrase names a single canonical entity.
    Resolved(Entity),
    /// The phrase names a category only; the player must say which one.
    Clarify(Category),
    /// The phrase is not understood at this checkpoint.
    Misunderstood,
}

/// What the words of a phrase say, before checkpoint rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phrase {
    Wall(Wall),
    CornerOnly(Corner),
    Cornered(Corner, Category),
    CentralTerminal,
    Generic(Category),
    Letter,
    LetterBox,
    MetalCabinet,
}

/// Resolves `phrase` against the checkpoint and the remembered context.
///
/// Statues cannot be resolved once the terminals are revealed, and before
/// that every terminal reference means the single central terminal.
#[must_use]
pub fn resolve(phrase: &str, quest_point: QuestPoint, context: Context) -> Resolution {
    let normalized = normalize(phrase);
    let Some(parsed) = parse(&normalized) else {
        debug!(phrase = %normalized, "unrecognized object phrase");
        return Resolution::Misunderstood;
    };

    let revealed = quest_point.value() >= TERMINALS_REVEALED;
    let remembered = |category: Category| {
        context
            .entity()
            .filter(|entity| entity.category() == Some(category))
            .map_or(Resolution::Clarify(category), Resolution::Resolved)
    };

    match parsed {
        Phrase::Wall(wall) => Resolution::Resolved(Entity::Wall(wall)),
        Phrase::Letter => Resolution::Resolved(Entity::Letter),
        Phrase::LetterBox => Resolution::Resolved(Entity::LetterBox),
        Phrase::MetalCabinet => Resolution::Resolved(Entity::MetalCabinet),
        Phrase::Generic(Category::Wall) => remembered(Category::Wall),

        Phrase::CornerOnly(corner) if !revealed => Resolution::Resolved(Entity::Statue(corner)),
        Phrase::CornerOnly(corner) => {
            Resolution::Resolved(Entity::Terminal(Terminal::Corner(corner)))
        }

        Phrase::Cornered(_, Category::Statue) | Phrase::Generic(Category::Statue) if revealed => {
            Resolution::Misunderstood
        }
        Phrase::Cornered(corner, Category::Statue) => {
            Resolution::Resolved(Entity::Statue(corner))
        }
        Phrase::Generic(Category::Statue) => remembered(Category::Statue),

        Phrase::Cornered(_, Category::Terminal)
        | Phrase::CentralTerminal
        | Phrase::Generic(Category::Terminal)
            if !revealed =>
        {
            Resolution::Resolved(Entity::Terminal(Terminal::Central))
        }
        Phrase::Cornered(corner, Category::Terminal) => {
            Resolution::Resolved(Entity::Terminal(Terminal::Corner(corner)))
        }
        Phrase::CentralTerminal => Resolution::Resolved(Entity::Terminal(Terminal::Central)),
        Phrase::Generic(Category::Terminal) => remembered(Category::Terminal),

        // `parse` never produces a cornered wall.
        Phrase::Cornered(_, Category::Wall) => Resolution::Misunderstood,
    }
}

/// Lowercases, trims, and collapses runs of whitespace and hyphens.
fn normalize(phrase: &str) -> String {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse(phrase: &str) -> Option<Phrase> {
    if let Some(wall) = parse_wall(phrase) {
        return Some(Phrase::Wall(wall));
    }
    if let Some(phrase) = parse_cornered(phrase) {
        return Some(phrase);
    }
    if let Some(category) = parse_category(phrase) {
        return Some(Phrase::Generic(category));
    }
    match phrase {
        "central terminal" | "central computer" | "central computer terminal"
        | "centre terminal" | "center terminal" => Some(Phrase::CentralTerminal),
        "letter" => Some(Phrase::Letter),
        "letter box" | "letterbox" => Some(Phrase::LetterBox),
        "metal cabinet" | "cabinet" => Some(Phrase::MetalCabinet),
        _ => None,
    }
}

fn parse_wall(phrase: &str) -> Option<Wall> {
    let direction = phrase.strip_suffix(" wall").unwrap_or(phrase);
    Wall::ALL
        .into_iter()
        .find(|wall| wall.direction() == direction)
}

fn parse_cornered(phrase: &str) -> Option<Phrase> {
    Corner::ALL.into_iter().find_map(|corner| {
        let rest = phrase
            .strip_prefix(corner.word())
            .or_else(|| phrase.strip_prefix(corner.spoken()))?;
        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix("corner")
            .map_or(rest, str::trim_start);
        if rest.is_empty() {
            return Some(Phrase::CornerOnly(corner));
        }
        match parse_category(rest)? {
            Category::Wall => None,
            category => Some(Phrase::Cornered(corner, category)),
        }
    })
}

fn parse_category(word: &str) -> Option<Category> {
    match word {
        "wall" => Some(Category::Wall),
        "statue" | "raven" | "raven statue" => Some(Category::Statue),
        "terminal" | "computer" | "computer terminal" => Some(Category::Terminal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qp(value: u8) -> QuestPoint {
        QuestPoint::new(value).unwrap()
    }

    #[test]
    fn test_corner_phrase_means_statue_before_terminals_are_revealed() {
        assert_eq!(
            resolve("northeast corner", qp(3), Context::Nothing),
            Resolution::Resolved(Entity::Statue(Corner::NorthEast))
        );
    }

    #[test]
    fn test_corner_phrase_means_terminal_once_revealed() {
        assert_eq!(
            resolve("northeast corner", qp(6), Context::Nothing),
            Resolution::Resolved(Entity::Terminal(Terminal::Corner(Corner::NorthEast)))
        );
    }

    #[test]
    fn test_bare_directions_resolve_to_walls() {
        for wall in Wall::ALL {
            assert_eq!(
                resolve(wall.direction(), qp(0), Context::Nothing),
                Resolution::Resolved(Entity::Wall(wall))
            );
            assert_eq!(
                resolve(&format!("{} wall", wall.direction()), qp(7), Context::Nothing),
                Resolution::Resolved(Entity::Wall(wall))
            );
        }
    }

    #[test]
    fn test_corner_synonyms_are_accepted() {
        for phrase in [
            "southwest",
            "south west",
            "south-west corner",
            "southwest raven",
            "South West Statue",
            "southwest corner statue",
        ] {
            assert_eq!(
                resolve(phrase, qp(4), Context::Nothing),
                Resolution::Resolved(Entity::Statue(Corner::SouthWest)),
                "phrase {phrase:?}"
            );
        }
    }

    #[test]
    fn test_terminal_synonyms_resolve_to_corner_terminal_when_revealed() {
        for phrase in ["northwest terminal", "north west computer", "northwest computer terminal"] {
            assert_eq!(
                resolve(phrase, qp(6), Context::Nothing),
                Resolution::Resolved(Entity::Terminal(Terminal::Corner(Corner::NorthWest))),
                "phrase {phrase:?}"
            );
        }
    }

    #[test]
    fn test_any_terminal_collapses_to_central_before_reveal() {
        for phrase in ["terminal", "computer", "computer terminal", "northeast terminal", "central computer"] {
            assert_eq!(
                resolve(phrase, qp(2), Context::Nothing),
                Resolution::Resolved(Entity::Terminal(Terminal::Central)),
                "phrase {phrase:?}"
            );
        }
    }

    #[test]
    fn test_statues_are_rejected_once_revealed() {
        for phrase in ["statue", "raven", "northeast statue", "southwest raven"] {
            assert_eq!(
                resolve(phrase, qp(6), Context::Nothing),
                Resolution::Misunderstood,
                "phrase {phrase:?}"
            );
        }
    }

    #[test]
    fn test_generic_words_ask_for_clarification_without_context() {
        assert_eq!(
            resolve("wall", qp(1), Context::Nothing),
            Resolution::Clarify(Category::Wall)
        );
        assert_eq!(
            resolve("statue", qp(1), Context::Nothing),
            Resolution::Clarify(Category::Statue)
        );
        assert_eq!(
            resolve("computer", qp(6), Context::Nothing),
            Resolution::Clarify(Category::Terminal)
        );
    }

    #[test]
    fn test_generic_words_reuse_same_category_context() {
        let at_statue = Context::At(Entity::Statue(Corner::SouthEast));
        assert_eq!(
            resolve("raven", qp(4), at_statue),
            Resolution::Resolved(Entity::Statue(Corner::SouthEast))
        );

        let at_terminal = Context::At(Entity::Terminal(Terminal::Corner(Corner::NorthEast)));
        assert_eq!(
            resolve("terminal", qp(6), at_terminal),
            Resolution::Resolved(Entity::Terminal(Terminal::Corner(Corner::NorthEast)))
        );

        let at_wall = Context::At(Entity::Wall(Wall::East));
        assert_eq!(
            resolve("wall", qp(0), at_wall),
            Resolution::Resolved(Entity::Wall(Wall::East))
        );
    }

    #[test]
    fn test_generic_words_ignore_other_category_context() {
        let at_wall = Context::At(Entity::Wall(Wall::North));
        assert_eq!(
            resolve("statue", qp(3), at_wall),
            Resolution::Clarify(Category::Statue)
        );
    }

    #[test]
    fn test_fixed_objects_resolve_at_any_checkpoint() {
        for value in 0..=9 {
            assert_eq!(
                resolve("letter", qp(value), Context::Nothing),
                Resolution::Resolved(Entity::Letter)
            );
            assert_eq!(
                resolve("letterbox", qp(value), Context::Nothing),
                Resolution::Resolved(Entity::LetterBox)
            );
            assert_eq!(
                resolve("cabinet", qp(value), Context::Nothing),
                Resolution::Resolved(Entity::MetalCabinet)
            );
        }
    }

    #[test]
    fn test_unrecognized_phrases_are_misunderstood() {
        for phrase in ["", "door", "northeast wall", "window", "north northeast"] {
            assert_eq!(
                resolve(phrase, qp(5), Context::Nothing),
                Resolution::Misunderstood,
                "phrase {phrase:?}"
            );
        }
    }
}
