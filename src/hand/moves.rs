//! Moves a participant can submit during a hand.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A move, as submitted by a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    PlayCard(Card),
    /// Request the next score unit ("truco", "seis", ...).
    Raise,
    /// Accept a pending raise or play an eleven-rule hand.
    Accept,
    /// Decline a pending raise or run from an eleven-rule hand.
    Decline,
}

impl Move {
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::PlayCard(_) => MoveKind::PlayCard,
            Move::Raise => MoveKind::Raise,
            Move::Accept => MoveKind::Accept,
            Move::Decline => MoveKind::Decline,
        }
    }
}

/// A move without its payload, used to advertise what is available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    PlayCard,
    Raise,
    Accept,
    Decline,
}
