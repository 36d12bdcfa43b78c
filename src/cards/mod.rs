//! Card model: cards, the 40-card deck, deck sources and round ranking.
//!
//! These are the collaborators the rules engine consumes. The engine only
//! depends on [`DeckSource`] and [`CardRanking`]; the concrete types here
//! are the defaults.

mod card;
mod deck;
mod ranking;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, DeckSource, ShuffledDecks, StackedDecks};
pub use ranking::{CardRanking, ViraRanking};
