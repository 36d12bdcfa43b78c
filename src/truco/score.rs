//! Score units: what a hand is worth.

use serde::{Deserialize, Serialize};

/// The discrete values a hand can be worth.
///
/// Hands start at `One`; each accepted raise moves one step up the ladder
/// `One → Three → Six → Nine → Twelve`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreUnit {
    #[default]
    One,
    Three,
    Six,
    Nine,
    Twelve,
}

impl ScoreUnit {
    /// Points awarded for winning a hand at this unit.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            ScoreUnit::One => 1,
            ScoreUnit::Three => 3,
            ScoreUnit::Six => 6,
            ScoreUnit::Nine => 9,
            ScoreUnit::Twelve => 12,
        }
    }

    /// The next step of the ladder, `None` at the cap.
    #[must_use]
    pub const fn next(self) -> Option<ScoreUnit> {
        match self {
            ScoreUnit::One => Some(ScoreUnit::Three),
            ScoreUnit::Three => Some(ScoreUnit::Six),
            ScoreUnit::Six => Some(ScoreUnit::Nine),
            ScoreUnit::Nine => Some(ScoreUnit::Twelve),
            ScoreUnit::Twelve => None,
        }
    }

    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, ScoreUnit::Twelve)
    }

    #[must_use]
    pub fn from_points(points: u32) -> Option<ScoreUnit> {
        match points {
            1 => Some(ScoreUnit::One),
            3 => Some(ScoreUnit::Three),
            6 => Some(ScoreUnit::Six),
            9 => Some(ScoreUnit::Nine),
            12 => Some(ScoreUnit::Twelve),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder() {
        let mut unit = ScoreUnit::default();
        let mut seen = vec![unit.points()];
        while let Some(next) = unit.next() {
            unit = next;
            seen.push(unit.points());
        }
        assert_eq!(seen, vec![1, 3, 6, 9, 12]);
        assert!(unit.is_max());
    }

    #[test]
    fn test_from_points() {
        assert_eq!(ScoreUnit::from_points(9), Some(ScoreUnit::Nine));
        assert_eq!(ScoreUnit::from_points(2), None);
    }

    #[test]
    fn test_ordering_follows_points() {
        assert!(ScoreUnit::Twelve > ScoreUnit::Nine);
        assert!(ScoreUnit::Three > ScoreUnit::One);
    }
}
