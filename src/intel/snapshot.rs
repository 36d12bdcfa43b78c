//! Intel: immutable snapshots of observable match state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::hand::{MoveKind, RoundOutcome};
use crate::truco::{Request, ScoreUnit, TrucoResult};

/// Logical timestamp of a ledger entry.
///
/// Strictly increasing across every hand of a match, so entries of
/// different hands are totally ordered. [`Tick::ORIGIN`] precedes all
/// entries; use it as the checkpoint to fetch a whole history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ORIGIN: Tick = Tick(0);

    #[must_use]
    pub const fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// The transition that produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntelEvent {
    HandStarted { first_to_act: PlayerId },
    ElevenRuleAccepted { player: PlayerId },
    ElevenRuleDeclined { player: PlayerId },
    CardPlayed { player: PlayerId, card: Card },
    RaiseRequested { player: PlayerId, level: ScoreUnit },
    RaiseAccepted { player: PlayerId, level: ScoreUnit },
    RaiseDeclined { player: PlayerId },
    HandConcluded { result: TrucoResult },
    ScoresUpdated,
    MatchConcluded { winner: PlayerId },
}

impl IntelEvent {
    /// Hand and match boundaries, as opposed to individual moves.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            IntelEvent::HandStarted { .. }
                | IntelEvent::HandConcluded { .. }
                | IntelEvent::MatchConcluded { .. }
        )
    }
}

/// A timestamped snapshot of everything a spectator may see.
///
/// Cards still held by participants are never part of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intel {
    pub timestamp: Tick,
    pub event: IntelEvent,
    pub match_id: Uuid,
    /// 1-based number of the hand this entry belongs to.
    pub hand_number: u32,
    pub vira: Card,
    /// Face-up cards: the vira followed by every card played so far.
    pub open_cards: Vec<Card>,
    /// Lead card of the round in progress.
    pub card_on_table: Option<(PlayerId, Card)>,
    pub rounds: Vec<RoundOutcome>,
    /// Score unit in effect (last accepted level).
    pub score_unit: ScoreUnit,
    pub pending_request: Option<Request>,
    pub scores: PlayerMap<u32>,
    /// Who must act next, `None` once the hand is over.
    pub to_act: Option<PlayerId>,
    /// Moves open to `to_act`.
    pub available_moves: Vec<MoveKind>,
    pub hand_result: Option<TrucoResult>,
    pub match_winner: Option<PlayerId>,
}

impl Intel {
    #[must_use]
    pub fn is_hand_concluded(&self) -> bool {
        self.hand_result.is_some()
    }

    #[must_use]
    pub fn is_match_concluded(&self) -> bool {
        self.match_winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_ordering() {
        assert!(Tick::ORIGIN < Tick(1));
        assert_eq!(Tick(4).next(), Tick(5));
        assert_eq!(Tick(3).to_string(), "t3");
    }

    #[test]
    fn test_boundary_events() {
        assert!(IntelEvent::HandStarted { first_to_act: PlayerId::FIRST }.is_boundary());
        assert!(IntelEvent::MatchConcluded { winner: PlayerId::SECOND }.is_boundary());
        assert!(!IntelEvent::RaiseDeclined { player: PlayerId::FIRST }.is_boundary());
        assert!(!IntelEvent::ScoresUpdated.is_boundary());
    }
}
