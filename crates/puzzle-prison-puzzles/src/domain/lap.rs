//! The corner lap puzzle.
//!
//! The player must visit the four corner statues one after another, walking
//! around the room in either direction. Cutting across a diagonal or
//! returning to a statue already visited in this lap starts over.

use std::fmt;
use std::str::FromStr;

use puzzle_prison_core::error::DomainError;
use puzzle_prison_world::domain::entities::Corner;

/// Number of distinct visits that complete a lap.
pub const LAP_LENGTH: usize = 4;

/// Ring symbol of a corner: A=SW, B=NW, C=NE, D=SE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LapSymbol {
    /// South west.
    A,
    /// North west.
    B,
    /// North east.
    C,
    /// South east.
    D,
}

impl LapSymbol {
    /// The symbol diagonally across the room. Moving to it breaks the lap.
    #[must_use]
    pub fn diagonal(self) -> Self {
        match self {
            Self::A => Self::C,
            Self::B => Self::D,
            Self::C => Self::A,
            Self::D => Self::B,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

impl From<Corner> for LapSymbol {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::SouthWest => Self::A,
            Corner::NorthWest => Self::B,
            Corner::NorthEast => Self::C,
            Corner::SouthEast => Self::D,
        }
    }
}

/// Result of recording a visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LapProgress {
    /// The lap is still under way (possibly reset to empty).
    Partial(LapSequence),
    /// The fourth distinct corner was reached; the sequence starts over.
    Completed,
}

/// The visits of the current, unfinished lap (at most three symbols).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LapSequence(Vec<LapSymbol>);

impl LapSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no corner has been visited in this lap.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of corners visited in this lap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records a visit to the corner with ring symbol `symbol`.
    #[must_use]
    pub fn visit(&self, symbol: LapSymbol) -> LapProgress {
        let Some(&last) = self.0.last() else {
            return LapProgress::Partial(Self(vec![symbol]));
        };
        if last == symbol {
            return LapProgress::Partial(self.clone());
        }
        if self.0.contains(&symbol) || last.diagonal() == symbol {
            return LapProgress::Partial(Self::new());
        }

        let mut visits = self.0.clone();
        visits.push(symbol);
        if visits.len() >= LAP_LENGTH {
            LapProgress::Completed
        } else {
            LapProgress::Partial(Self(visits))
        }
    }
}

impl fmt::Display for LapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|symbol| write!(f, "{}", symbol.as_char()))
    }
}

impl FromStr for LapSequence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let visits = s
            .chars()
            .map(|c| {
                LapSymbol::from_char(c).ok_or_else(|| {
                    DomainError::MalformedSnapshot(format!("invalid lap symbol {c:?}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if visits.len() >= LAP_LENGTH {
            return Err(DomainError::MalformedSnapshot(format!(
                "lap sequence too long: {s:?}"
            )));
        }
        let has_repeat = visits
            .iter()
            .enumerate()
            .any(|(i, symbol)| visits[..i].contains(symbol));
        if has_repeat {
            return Err(DomainError::MalformedSnapshot(format!(
                "lap sequence repeats a corner: {s:?}"
            )));
        }
        Ok(Self(visits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: &LapSequence, symbols: &[LapSymbol]) -> LapProgress {
        let mut progress = LapProgress::Partial(start.clone());
        for &symbol in symbols {
            progress = match progress {
                LapProgress::Partial(seq) => seq.visit(symbol),
                LapProgress::Completed => LapSequence::new().visit(symbol),
            };
        }
        progress
    }

    fn partial(s: &str) -> LapProgress {
        LapProgress::Partial(s.parse().unwrap())
    }

    #[test]
    fn test_corners_map_to_ring_symbols() {
        assert_eq!(LapSymbol::from(Corner::SouthWest), LapSymbol::A);
        assert_eq!(LapSymbol::from(Corner::NorthWest), LapSymbol::B);
        assert_eq!(LapSymbol::from(Corner::NorthEast), LapSymbol::C);
        assert_eq!(LapSymbol::from(Corner::SouthEast), LapSymbol::D);
    }

    #[test]
    fn test_clockwise_lap_completes_on_fourth_visit() {
        // Arrange
        let seq = LapSequence::new();

        // Act
        let first = seq.visit(LapSymbol::A);
        let second = walk(&seq, &[LapSymbol::A, LapSymbol::B]);
        let third = walk(&seq, &[LapSymbol::A, LapSymbol::B, LapSymbol::C]);
        let fourth = walk(&seq, &[LapSymbol::A, LapSymbol::B, LapSymbol::C, LapSymbol::D]);

        // Assert
        assert_eq!(first, partial("A"));
        assert_eq!(second, partial("AB"));
        assert_eq!(third, partial("ABC"));
        assert_eq!(fourth, LapProgress::Completed);
    }

    #[test]
    fn test_every_valid_lap_completes_in_exactly_four_visits() {
        let laps = [
            [LapSymbol::A, LapSymbol::B, LapSymbol::C, LapSymbol::D],
            [LapSymbol::A, LapSymbol::D, LapSymbol::C, LapSymbol::B],
            [LapSymbol::B, LapSymbol::C, LapSymbol::D, LapSymbol::A],
            [LapSymbol::C, LapSymbol::B, LapSymbol::A, LapSymbol::D],
            [LapSymbol::D, LapSymbol::A, LapSymbol::B, LapSymbol::C],
        ];
        for lap in laps {
            let before_last = walk(&LapSequence::new(), &lap[..3]);
            assert!(matches!(before_last, LapProgress::Partial(ref s) if s.len() == 3));
            assert_eq!(walk(&LapSequence::new(), &lap), LapProgress::Completed);
        }
    }

    #[test]
    fn test_visit_after_completion_starts_fresh_sequence() {
        let lap = [LapSymbol::A, LapSymbol::B, LapSymbol::C, LapSymbol::D, LapSymbol::C];
        assert_eq!(walk(&LapSequence::new(), &lap), partial("C"));
    }

    #[test]
    fn test_revisiting_last_corner_is_a_no_op() {
        let seq: LapSequence = "AB".parse().unwrap();
        assert_eq!(seq.visit(LapSymbol::B), partial("AB"));
    }

    #[test]
    fn test_returning_to_earlier_corner_resets() {
        let seq: LapSequence = "ABC".parse().unwrap();
        assert_eq!(seq.visit(LapSymbol::A), partial(""));
        assert_eq!(seq.visit(LapSymbol::B), partial(""));
    }

    #[test]
    fn test_crossing_a_diagonal_resets() {
        for (start, diagonal) in [("A", LapSymbol::C), ("B", LapSymbol::D), ("C", LapSymbol::A), ("DA", LapSymbol::C)] {
            let seq: LapSequence = start.parse().unwrap();
            assert_eq!(seq.visit(diagonal), partial(""), "from {start:?}");
        }
    }

    #[test]
    fn test_first_visit_from_empty_never_resets() {
        for symbol in [LapSymbol::A, LapSymbol::B, LapSymbol::C, LapSymbol::D] {
            assert!(matches!(LapSequence::new().visit(symbol), LapProgress::Partial(s) if s.len() == 1));
        }
    }

    #[test]
    fn test_sequence_round_trips_through_wire_string() {
        let seq: LapSequence = "DAB".parse().unwrap();
        assert_eq!(seq.to_string(), "DAB");
        assert!(LapSequence::new().to_string().is_empty());
    }

    #[test]
    fn test_malformed_sequences_are_rejected() {
        for bad in ["X", "abc", "ABCD", "AA", "ABA"] {
            match bad.parse::<LapSequence>() {
                Err(DomainError::MalformedSnapshot(_)) => {}
                other => panic!("expected MalformedSnapshot for {bad:?}, got {other:?}"),
            }
        }
    }
}
