//! Match participants.
//!
//! The match never touches participant fields directly. It hands out cards
//! with [`Participant::set_cards`] and awards points with
//! [`Participant::apply_score`]; everything else about a participant
//! (identity, display name, connection) belongs to the embedding service.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::cards::Card;

/// Something that can sit at a truco table.
///
/// Equality is identity: a match refuses two participants that compare
/// equal.
pub trait Participant: PartialEq + Send {
    /// Receive the cards dealt for a new hand.
    fn set_cards(&mut self, cards: &[Card]);

    /// Add points won in a hand.
    fn apply_score(&mut self, delta: u32);

    /// Current match score.
    fn score(&self) -> u32;
}

/// Plain participant keyed by a UUID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: Uuid,
    name: String,
    cards: SmallVec<[Card; 3]>,
    score: u32,
}

impl Player {
    /// A new player with a random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: SmallVec::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards dealt for the current hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Participant for Player {
    fn set_cards(&mut self, cards: &[Card]) {
        self.cards = cards.iter().copied().collect();
    }

    fn apply_score(&mut self, delta: u32) {
        self.score += delta;
    }

    fn score(&self) -> u32 {
        self.score
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
