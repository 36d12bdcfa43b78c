//! Card representation for the 40-card truco deck.
//!
//! Ranks 8, 9 and 10 are removed from the standard deck. Both enums are
//! declared in ascending strength so derived ordering matches the game:
//! `Four < Five < ... < Two < Three` and, for manilhas,
//! `Diamonds < Spades < Hearts < Clubs`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Card rank in ascending truco strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// All ranks in ascending strength.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// The rank after this one, wrapping from Three back to Four.
    ///
    /// The rank after the vira's rank is the manilha of the hand.
    #[must_use]
    pub fn next(self) -> Rank {
        let idx = Rank::ALL.iter().position(|&r| r == self).unwrap_or(0);
        Rank::ALL[(idx + 1) % Rank::ALL.len()]
    }

    /// Strength position, 0 for Four up to 9 for Three.
    #[must_use]
    pub fn strength(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
        }
    }

    fn from_symbol(c: char) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.symbol() == c.to_ascii_uppercase())
    }
}

/// Card suit in ascending manilha strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }

    fn from_symbol(c: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.symbol() == c.to_ascii_uppercase())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse card from {0:?}")]
pub struct ParseCardError(pub String);

/// Parse the two-character form used by `Display`, e.g. `"7H"` or `"qs"`.
///
/// ```
/// use truco_core::cards::{Card, Rank, Suit};
///
/// let card: Card = "3C".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Three, Suit::Clubs));
/// assert_eq!(card.to_string(), "3C");
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => Rank::from_symbol(r).zip(Suit::from_symbol(su)),
            _ => None,
        };
        parsed
            .map(|(rank, suit)| Card::new(rank, suit))
            .ok_or_else(|| ParseCardError(s.to_string()))
    }
}
