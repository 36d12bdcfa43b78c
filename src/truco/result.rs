//! The outcome of a concluded hand.

use serde::{Deserialize, Serialize};

use super::score::ScoreUnit;
use crate::core::PlayerId;

/// Score, winner and last requester of a concluded hand.
///
/// Immutable once built. A missing winner is a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrucoResult {
    score: ScoreUnit,
    winner: Option<PlayerId>,
    last_requester: Option<PlayerId>,
}

impl TrucoResult {
    /// A result with no winner.
    #[must_use]
    pub const fn draw(score: ScoreUnit) -> Self {
        Self {
            score,
            winner: None,
            last_requester: None,
        }
    }

    #[must_use]
    pub const fn won_by(score: ScoreUnit, winner: PlayerId) -> Self {
        Self {
            score,
            winner: Some(winner),
            last_requester: None,
        }
    }

    #[must_use]
    pub const fn new(
        score: ScoreUnit,
        winner: Option<PlayerId>,
        last_requester: Option<PlayerId>,
    ) -> Self {
        Self {
            score,
            winner,
            last_requester,
        }
    }

    #[must_use]
    pub const fn score(&self) -> ScoreUnit {
        self.score
    }

    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub const fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The participant who raised last in this hand, if anyone raised.
    #[must_use]
    pub const fn last_requester(&self) -> Option<PlayerId> {
        self.last_requester
    }
}

impl std::fmt::Display for TrucoResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "Points={}, winner={}", self.score, winner),
            None => write!(f, "Points={}, winner=No winner", self.score),
        }
    }
}
