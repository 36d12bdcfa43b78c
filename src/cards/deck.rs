//! The 40-card deck and the sources that hand out a fresh one per hand.
//!
//! ## Deck sources
//!
//! A match never builds decks itself; it asks a [`DeckSource`] for a new
//! deck at the start of every hand.
//!
//! - [`ShuffledDecks`]: production source, shuffles with a fork of a
//!   [`GameRng`] per hand.
//! - [`StackedDecks`]: hands out preset decks in order, for replays and
//!   scripted tests.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// An ordered pile of cards. Cards are drawn from the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    /// Top of the deck is the end of the vec.
    cards: Vec<Card>,
}

impl Deck {
    /// A full, unshuffled 40-card deck.
    #[must_use]
    pub fn new() -> Self {
        let cards = Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A full deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// A deck that deals exactly `cards`, first element on top.
    ///
    /// ```
    /// use truco_core::cards::{Card, Deck};
    ///
    /// let mut deck = Deck::stacked(["4D", "3C"].map(|c| c.parse::<Card>().unwrap()));
    /// assert_eq!(deck.take_one().map(|c| c.to_string()), Some("4D".to_string()));
    /// ```
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card.
    pub fn take_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top, in draw order.
    ///
    /// Returns `None` and leaves the deck untouched if fewer than `n` remain.
    pub fn take(&mut self, n: usize) -> Option<SmallVec<[Card; 3]>> {
        if self.cards.len() < n {
            return None;
        }
        let split = self.cards.len() - n;
        Some(self.cards.drain(split..).rev().collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Supplies a fresh deck for every hand.
pub trait DeckSource: Send {
    fn next_deck(&mut self) -> Deck;
}

/// Shuffled decks from a forkable RNG, one fork per hand.
#[derive(Clone, Debug)]
pub struct ShuffledDecks {
    rng: GameRng,
}

impl ShuffledDecks {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Reproducible source for the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl DeckSource for ShuffledDecks {
    fn next_deck(&mut self) -> Deck {
        let mut hand_rng = self.rng.fork();
        Deck::shuffled(&mut hand_rng)
    }
}

/// Preset decks handed out in order.
///
/// Once the preset decks run out, unshuffled full decks are returned.
#[derive(Clone, Debug, Default)]
pub struct StackedDecks {
    decks: VecDeque<Deck>,
}

impl StackedDecks {
    #[must_use]
    pub fn new(decks: impl IntoIterator<Item = Deck>) -> Self {
        Self {
            decks: decks.into_iter().collect(),
        }
    }

    /// Queue another deck.
    pub fn push(&mut self, deck: Deck) {
        self.decks.push_back(deck);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.decks.len()
    }
}

impl DeckSource for StackedDecks {
    fn next_deck(&mut self) -> Deck {
        self.decks.pop_front().unwrap_or_default()
    }
}
