//! Card-comparison rounds and how their outcomes decide a hand.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRanking};
use crate::core::PlayerId;

/// Outcome of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won(PlayerId),
    Tied,
}

impl RoundOutcome {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            RoundOutcome::Won(player) => Some(player),
            RoundOutcome::Tied => None,
        }
    }
}

/// Outcome of a hand decided by its rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOutcome {
    Winner(PlayerId),
    Draw,
}

impl HandOutcome {
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            HandOutcome::Winner(player) => Some(player),
            HandOutcome::Draw => None,
        }
    }
}

/// A completed round: the lead card, the reply and the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub lead: (PlayerId, Card),
    pub reply: (PlayerId, Card),
    pub outcome: RoundOutcome,
}

impl Round {
    /// Compare both cards under `vira`.
    pub fn resolve(
        lead: (PlayerId, Card),
        reply: (PlayerId, Card),
        vira: &Card,
        ranking: &dyn CardRanking,
    ) -> Self {
        let outcome = match ranking.compare(&lead.1, &reply.1, vira) {
            Ordering::Greater => RoundOutcome::Won(lead.0),
            Ordering::Less => RoundOutcome::Won(reply.0),
            Ordering::Equal => RoundOutcome::Tied,
        };
        Self { lead, reply, outcome }
    }

    /// Who leads the following round: the winner, or the same leader after a tie.
    #[must_use]
    pub fn next_leader(&self) -> PlayerId {
        self.outcome.winner().unwrap_or(self.lead.0)
    }
}

/// Decide a hand from its round outcomes so far.
///
/// Returns `None` while the hand is still open.
///
/// | rounds              | result                 |
/// |---------------------|------------------------|
/// | W, W                | W                      |
/// | tie, W              | W                      |
/// | tie, tie, W         | W                      |
/// | tie, tie, tie       | draw                   |
/// | W, tie              | W (first round counts) |
/// | W, L, tie           | W (first round counts) |
/// | W, L, W / W, L, L   | whoever won two        |
#[must_use]
pub fn aggregate(outcomes: &[RoundOutcome]) -> Option<HandOutcome> {
    for seat in PlayerId::both() {
        let wins = outcomes.iter().filter(|o| o.winner() == Some(seat)).count();
        if wins >= 2 {
            return Some(HandOutcome::Winner(seat));
        }
    }

    let first = *outcomes.first()?;
    let rest = &outcomes[1..];
    match first {
        RoundOutcome::Tied => rest
            .iter()
            .find_map(|o| o.winner())
            .map(HandOutcome::Winner)
            .or_else(|| (outcomes.len() >= 3).then_some(HandOutcome::Draw)),
        RoundOutcome::Won(first_winner) => rest
            .contains(&RoundOutcome::Tied)
            .then_some(HandOutcome::Winner(first_winner)),
    }
}
