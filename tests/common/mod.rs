//! Shared helpers for integration tests: logging, stacked deals, a
//! preset-score participant and a random-play driver.

#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use truco_core::cards::{Card, Deck, StackedDecks};
use truco_core::core::{MatchConfig, PlayerId};
use truco_core::game::{Match, MatchBuilder, Participant, Player};
use truco_core::hand::{Move, MoveKind};
use truco_core::intel::MemorySink;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

/// Deck drawn in the listed order: vira, first seat's three, last seat's three.
pub fn deck(cards: &[&str]) -> Deck {
    Deck::stacked(cards.iter().map(|c| card(c)))
}

/// The seat acting first holds 3C 2S AH and wins both rounds against 4S 6H 7D.
pub fn first_wins() -> Deck {
    deck(&["4D", "3C", "2S", "AH", "4S", "6H", "7D"])
}

/// A match over the given decks, publishing to a memory sink.
pub fn stacked_match<P: Participant>(
    config: MatchConfig,
    decks: impl IntoIterator<Item = Deck>,
    first: P,
    second: P,
) -> (Match<P>, Arc<MemorySink>) {
    init_logging();
    let sink = Arc::new(MemorySink::new());
    let game = MatchBuilder::new()
        .config(config)
        .decks(StackedDecks::new(decks))
        .sink(Arc::clone(&sink))
        .build(first, second)
        .unwrap();
    (game, sink)
}

pub fn players() -> (Player, Player) {
    (Player::new("Ana"), Player::new("Bruno"))
}

/// Play out a `first_wins` deal: the seat acting first takes both rounds.
pub fn play_out<P: Participant>(game: &mut Match<P>) {
    let first = game.first_to_act();
    let last = game.last_to_act();
    game.play_card(first, card("3C")).unwrap();
    game.play_card(last, card("4S")).unwrap();
    game.play_card(first, card("2S")).unwrap();
    game.play_card(last, card("6H")).unwrap();
}

/// Participant that starts from a preset score.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub name: &'static str,
    pub cards: Vec<Card>,
    pub score: u32,
}

impl Seat {
    pub fn new(name: &'static str, score: u32) -> Self {
        Self {
            name,
            cards: Vec::new(),
            score,
        }
    }
}

impl Participant for Seat {
    fn set_cards(&mut self, cards: &[Card]) {
        self.cards = cards.to_vec();
    }

    fn apply_score(&mut self, delta: u32) {
        self.score += delta;
    }

    fn score(&self) -> u32 {
        self.score
    }
}

/// Advance the match one step per choice byte.
///
/// A concluded hand is scored, then the next hand is dealt. Otherwise the
/// seat to act submits one of its available moves. Stops once the match is
/// finished.
pub fn drive<P: Participant>(game: &mut Match<P>, choices: &[u8]) {
    for &choice in choices {
        if game.is_done() {
            return;
        }
        let hand = game.current_hand();
        let Some(seat) = hand.to_act() else {
            if game.scores_applied() {
                game.prepare_new_hand().unwrap();
            } else {
                game.update_scores().unwrap();
            }
            continue;
        };

        let mv = pick_move(hand.available_moves(seat), hand.cards(seat), choice);
        game.submit(seat, mv).unwrap();
    }
}

fn pick_move(moves: Vec<MoveKind>, cards: &[Card], choice: u8) -> Move {
    let choice = usize::from(choice);
    match moves[choice % moves.len()] {
        MoveKind::PlayCard => Move::PlayCard(cards[choice % cards.len()]),
        MoveKind::Raise => Move::Raise,
        MoveKind::Accept => Move::Accept,
        MoveKind::Decline => Move::Decline,
    }
}

pub const P0: PlayerId = PlayerId::FIRST;
pub const P1: PlayerId = PlayerId::SECOND;
