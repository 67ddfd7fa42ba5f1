//! Canonical room entities.

use std::fmt;

/// One of the four walls of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    /// The north wall; it slides to merge the room at checkpoint 2.
    North,
    /// The south wall, holding the letter box.
    South,
    /// The east wall.
    East,
    /// The west wall.
    West,
}

impl Wall {
    /// All walls, in compass order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The bare direction word for this wall.
    #[must_use]
    pub fn direction(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

/// One of the four corners of the room.
///
/// Corners hold raven statues until checkpoint 6 and computer terminals
/// from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// The north east corner.
    NorthEast,
    /// The north west corner.
    NorthWest,
    /// The south east corner.
    SouthEast,
    /// The south west corner.
    SouthWest,
}

impl Corner {
    /// All corners.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The joined corner word used in context tags (e.g. `northeast`).
    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            Self::NorthEast => "northeast",
            Self::NorthWest => "northwest",
            Self::SouthEast => "southeast",
            Self::SouthWest => "southwest",
        }
    }

    /// The corner as it is spoken in narration (e.g. `north east`).
    #[must_use]
    pub fn spoken(self) -> &'static str {
        match self {
            Self::NorthEast => "north east",
            Self::NorthWest => "north west",
            Self::SouthEast => "south east",
            Self::SouthWest => "south west",
        }
    }

    /// The two-letter abbreviation used by the quiz context (e.g. `ne`).
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

/// A computer terminal: the central one, or one of the corner terminals
/// revealed at checkpoint 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The terminal on top of the metal cabinet.
    Central,
    /// A corner terminal.
    Corner(Corner),
}

/// The category of generic, unqualified references ("wall", "statue",
/// "terminal").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Any wall.
    Wall,
    /// Any raven statue.
    Statue,
    /// Any computer terminal.
    Terminal,
}

impl Category {
    /// The noun used in clarification prompts.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Statue => "statue",
            Self::Terminal => "terminal",
        }
    }
}

/// A canonical room object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A wall.
    Wall(Wall),
    /// A raven statue in a corner.
    Statue(Corner),
    /// A computer terminal.
    Terminal(Terminal),
    /// The letter on the floor by the letter box.
    Letter,
    /// The letter box in the south wall.
    LetterBox,
    /// The locked cabinet beneath the central terminal.
    MetalCabinet,
}

impl Entity {
    /// Returns the generic category this entity belongs to, if any.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Wall(_) => Some(Category::Wall),
            Self::Statue(_) => Some(Category::Statue),
            Self::Terminal(_) => Some(Category::Terminal),
            Self::Letter | Self::LetterBox | Self::MetalCabinet => None,
        }
    }

    /// Returns the title-case display name used in narration titles.
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Self::Wall(wall) => format!("{} Wall", title_case(wall.direction())),
            Self::Statue(corner) => format!("{} Statue", title_case(corner.spoken())),
            Self::Terminal(Terminal::Central) => "Central Terminal".to_owned(),
            Self::Terminal(Terminal::Corner(corner)) => {
                format!("{} Terminal", title_case(corner.spoken()))
            }
            Self::Letter => "Letter".to_owned(),
            Self::LetterBox => "Letter Box".to_owned(),
            Self::MetalCabinet => "Metal Cabinet".to_owned(),
        }
    }
}

/// Formats the entity as its canonical context tag, e.g. `northeast statue`.
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall(wall) => write!(f, "{} wall", wall.direction()),
            Self::Statue(corner) => write!(f, "{} statue", corner.word()),
            Self::Terminal(Terminal::Central) => f.write_str("central terminal"),
            Self::Terminal(Terminal::Corner(corner)) => write!(f, "{} terminal", corner.word()),
            Self::Letter => f.write_str("letter"),
            Self::LetterBox => f.write_str("letter box"),
            Self::MetalCabinet => f.write_str("metal cabinet"),
        }
    }
}

fn title_case(words: &str) -> String {
    words
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
