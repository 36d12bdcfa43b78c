//! A match shared between one writer and any number of spectators.

use parking_lot::{Mutex, RwLock};

use super::participant::Participant;
use super::state::Match;
use crate::core::{PlayerId, TrucoError};
use crate::hand::Move;
use crate::intel::{Intel, LedgerView, Tick};

/// Serializes mutations of a [`Match`] and publishes a consistent view for
/// readers.
///
/// Writers go through [`with`](Self::with), which holds the match lock for
/// the whole closure and then republishes the ledger view. Readers only
/// touch the published view, so they never see a half-applied move and
/// never wait on a running move.
pub struct SharedMatch<P> {
    game: Mutex<Match<P>>,
    view: RwLock<LedgerView>,
}

impl<P: Participant> SharedMatch<P> {
    pub fn new(game: Match<P>) -> Self {
        let view = game.ledger_view();
        Self {
            game: Mutex::new(game),
            view: RwLock::new(view),
        }
    }

    /// Run `f` with exclusive access to the match, then republish.
    pub fn with<T>(&self, f: impl FnOnce(&mut Match<P>) -> T) -> T {
        let mut game = self.game.lock();
        let out = f(&mut game);
        *self.view.write() = game.ledger_view();
        out
    }

    /// Read the match under its lock without republishing.
    pub fn read<T>(&self, f: impl FnOnce(&Match<P>) -> T) -> T {
        f(&self.game.lock())
    }

    /// Apply a move for `seat`.
    pub fn submit(&self, seat: PlayerId, mv: Move) -> Result<(), TrucoError> {
        self.with(|game| game.submit(seat, mv))
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn intel(&self) -> Option<Intel> {
        self.view.read().latest().cloned()
    }

    /// Published entries strictly after `checkpoint`.
    #[must_use]
    pub fn intel_since(&self, checkpoint: Tick) -> Vec<Intel> {
        self.view.read().since(checkpoint)
    }

    #[must_use]
    pub fn view(&self) -> LedgerView {
        self.view.read().clone()
    }

    pub fn into_inner(self) -> Match<P> {
        self.game.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::cards::{Card, Deck, StackedDecks};
    use crate::game::{MatchBuilder, Player};
    use crate::intel::NullSink;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn stacked_match() -> Match<Player> {
        let deck = Deck::stacked(
            ["4D", "3C", "2S", "AH", "4S", "6H", "7D"].iter().map(|c| card(c)),
        );
        MatchBuilder::new()
            .decks(StackedDecks::new([deck]))
            .sink(NullSink)
            .build(Player::new("Ana"), Player::new("Bruno"))
            .unwrap()
    }

    #[test]
    fn test_view_tracks_mutations() {
        let shared = SharedMatch::new(stacked_match());
        assert_eq!(shared.intel().map(|i| i.timestamp), Some(Tick(1)));

        shared.submit(PlayerId::FIRST, Move::PlayCard(card("3C"))).unwrap();
        assert_eq!(shared.intel().map(|i| i.timestamp), Some(Tick(2)));
        assert_eq!(shared.intel_since(Tick::ORIGIN).len(), 2);
    }

    #[test]
    fn test_rejected_move_publishes_nothing() {
        let shared = SharedMatch::new(stacked_match());
        let before = shared.view();

        assert!(shared.submit(PlayerId::SECOND, Move::Raise).is_err());
        assert_eq!(shared.view(), before);
    }

    #[test]
    fn test_spectators_read_while_writer_plays() {
        let shared = SharedMatch::new(stacked_match());
        let done = AtomicBool::new(false);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                let mut seen = Tick::ORIGIN;
                while !done.load(Ordering::Acquire) {
                    for intel in shared.intel_since(seen) {
                        assert!(intel.timestamp > seen);
                        seen = intel.timestamp;
                    }
                }
            });

            let moves = [
                (PlayerId::FIRST, Move::PlayCard(card("3C"))),
                (PlayerId::SECOND, Move::PlayCard(card("4S"))),
                (PlayerId::FIRST, Move::PlayCard(card("2S"))),
                (PlayerId::SECOND, Move::PlayCard(card("6H"))),
            ];
            for (seat, mv) in moves {
                shared.submit(seat, mv).unwrap();
            }
            shared.with(|game| game.update_scores()).unwrap();
            done.store(true, Ordering::Release);
        });

        let game = shared.into_inner();
        assert_eq!(game.score(PlayerId::FIRST), 1);
        assert!(game.intel().is_hand_concluded());
    }
}
