//! Card comparison for a single round.
//!
//! Strength depends on the vira, the card turned face up at the start of
//! the hand: cards of the rank right after the vira's rank are the
//! manilhas and beat everything else, ordered among themselves by suit.
//! Every other card is ordered by rank alone, so two non-manilha cards of
//! the same rank tie.

use std::cmp::Ordering;

use super::card::Card;

/// Round comparator.
///
/// Implementations must be pure: the same cards and vira always compare
/// the same way.
pub trait CardRanking: Send + Sync {
    /// Compare `a` against `b` under `vira`. `Equal` means the round ties.
    fn compare(&self, a: &Card, b: &Card, vira: &Card) -> Ordering;
}

/// Standard vira/manilha ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViraRanking;

impl ViraRanking {
    /// Numeric strength of `card` for this vira. Manilhas score above 10.
    #[must_use]
    pub fn value(card: &Card, vira: &Card) -> u8 {
        if card.rank == vira.rank.next() {
            10 + card.suit as u8
        } else {
            card.rank.strength()
        }
    }

    /// Is `card` a manilha under `vira`?
    #[must_use]
    pub fn is_manilha(card: &Card, vira: &Card) -> bool {
        card.rank == vira.rank.next()
    }
}

impl CardRanking for ViraRanking {
    fn compare(&self, a: &Card, b: &Card, vira: &Card) -> Ordering {
        Self::value(a, vira).cmp(&Self::value(b, vira))
    }
}
