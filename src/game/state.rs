//! Match orchestration.
//!
//! A [`Match`] owns the two participants, the hands played so far and the
//! injected collaborators: a [`DeckSource`], a [`CardRanking`] and an
//! [`IntelSink`]. It deals hands, forwards moves to the current hand,
//! applies hand results to the participants and publishes every new
//! ledger entry to the sink.
//!
//! ## Lifecycle
//!
//! ```text
//! build ──► hand open ──moves──► hand concluded ──update_scores──┐
//!              ▲                                                  │
//!              └──────────────── prepare_new_hand ◄───────────────┤
//!                                                                 ▼
//!                                                       finished (read-only)
//! ```

use std::sync::Arc;

use im::Vector;
use uuid::Uuid;

use super::builder::MatchBuilder;
use super::participant::Participant;
use crate::cards::{Card, CardRanking, Deck, DeckSource};
use crate::core::{IllegalState, InvalidMove, MatchConfig, PlayerId, PlayerMap, TrucoError};
use crate::hand::{Deal, Hand, HandSetup, Move};
use crate::intel::{Intel, IntelSink, LedgerView, Tick};
use crate::truco::ScoreUnit;

/// A two-participant truco match.
pub struct Match<P> {
    id: Uuid,
    config: MatchConfig,
    players: PlayerMap<P>,
    /// Concluded hands, oldest first.
    played: Vec<Hand>,
    current: Hand,
    scores_applied: bool,
    decks: Box<dyn DeckSource>,
    ranking: Arc<dyn CardRanking>,
    sink: Arc<dyn IntelSink>,
}

impl<P: Participant> Match<P> {
    /// Start a match with default collaborators.
    ///
    /// Use [`MatchBuilder`] to inject a config, deck source, ranking or sink.
    pub fn new(first: P, second: P) -> Result<Self, TrucoError> {
        MatchBuilder::new().build(first, second)
    }

    /// Deal the first hand and publish its opening entry.
    pub(crate) fn start(
        id: Uuid,
        config: MatchConfig,
        mut players: PlayerMap<P>,
        mut decks: Box<dyn DeckSource>,
        ranking: Arc<dyn CardRanking>,
        sink: Arc<dyn IntelSink>,
    ) -> Result<Self, TrucoError> {
        let scores = players.map(|p| p.score());
        let setup = HandSetup {
            eleven_rule: eleven_rule_seat(&config, &scores),
            scores,
            ..HandSetup::first_hand(id)
        };
        let current = open_hand(setup, decks.as_mut(), &mut players, &ranking)?;

        let game = Self {
            id,
            config,
            players,
            played: Vec::new(),
            current,
            scores_applied: false,
            decks,
            ranking,
            sink,
        };
        game.publish_after(Tick::ORIGIN);
        Ok(game)
    }

    // === Hand lifecycle ===

    /// Deal the next hand, swapping who acts first.
    ///
    /// The current hand must be concluded and its result applied with
    /// [`update_scores`](Self::update_scores).
    ///
    /// A short deck fails with [`IllegalState::DeckExhausted`] and leaves
    /// the match untouched. The deck source has still handed out that deck,
    /// so a retry draws the source's next one.
    pub fn prepare_new_hand(&mut self) -> Result<&Hand, TrucoError> {
        if self.is_done() {
            return Err(IllegalState::MatchFinished.into());
        }
        if !self.current.is_done() {
            return Err(IllegalState::HandInProgress.into());
        }
        if !self.scores_applied {
            return Err(IllegalState::ScoresPending.into());
        }

        let checkpoint = self.current.clock();
        let scores = self.scores();
        let setup = HandSetup {
            match_id: self.id,
            number: self.current.number() + 1,
            first_to_act: self.current.first_to_act().opponent(),
            scores,
            eleven_rule: eleven_rule_seat(&self.config, &scores),
            clock: checkpoint,
        };
        let next = open_hand(setup, self.decks.as_mut(), &mut self.players, &self.ranking)?;

        self.played.push(std::mem::replace(&mut self.current, next));
        self.scores_applied = false;
        self.publish_after(checkpoint);
        Ok(&self.current)
    }

    /// Apply the current hand's result to the winning participant.
    ///
    /// Points are truncated so the winner lands exactly on `max_score`.
    /// A drawn hand awards nothing.
    pub fn update_scores(&mut self) -> Result<(), TrucoError> {
        if self.is_done() {
            return Err(IllegalState::MatchFinished.into());
        }
        let result = self.current.result().ok_or(IllegalState::HandNotConcluded)?;
        if self.scores_applied {
            return Err(IllegalState::ScoresAlreadyApplied.into());
        }

        if let Some(seat) = result.winner() {
            let participant = &mut self.players[seat];
            let room = self.config.max_score.saturating_sub(participant.score());
            participant.apply_score(result.score().points().min(room));
        }
        self.scores_applied = true;

        let checkpoint = self.current.clock();
        let scores = self.scores();
        let winner = self.winner();
        self.current.record_scores(scores, winner);
        self.publish_after(checkpoint);
        Ok(())
    }

    // === Moves ===

    /// Play a card for `seat`.
    pub fn play_card(&mut self, seat: PlayerId, card: Card) -> Result<(), TrucoError> {
        self.apply(|hand| hand.play_card(seat, card))
    }

    /// Request the next score unit for `seat`. Returns the requested level.
    pub fn raise(&mut self, seat: PlayerId) -> Result<ScoreUnit, TrucoError> {
        self.apply(|hand| hand.raise(seat))
    }

    pub fn accept(&mut self, seat: PlayerId) -> Result<(), TrucoError> {
        self.apply(|hand| hand.accept(seat))
    }

    pub fn decline(&mut self, seat: PlayerId) -> Result<(), TrucoError> {
        self.apply(|hand| hand.decline(seat))
    }

    /// Apply any move for `seat`.
    pub fn submit(&mut self, seat: PlayerId, mv: Move) -> Result<(), TrucoError> {
        self.apply(|hand| hand.submit(seat, mv))
    }

    fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut Hand) -> Result<T, InvalidMove>,
    ) -> Result<T, TrucoError> {
        if self.is_done() {
            return Err(IllegalState::MatchFinished.into());
        }
        let checkpoint = self.current.clock();
        let out = op(&mut self.current)?;
        self.publish_after(checkpoint);
        Ok(out)
    }

    // === Scores ===

    /// The seat that reached `max_score`, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::both()
            .into_iter()
            .find(|&seat| self.players[seat].score() >= self.config.max_score)
    }

    #[must_use]
    pub fn winning_participant(&self) -> Option<&P> {
        self.winner().map(|seat| &self.players[seat])
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.winner().is_some()
    }

    /// Exactly one participant sits on the eleven score.
    #[must_use]
    pub fn is_mao_de_onze(&self) -> bool {
        is_mao_de_onze(&self.config, &self.scores())
    }

    #[must_use]
    pub fn score(&self, seat: PlayerId) -> u32 {
        self.players[seat].score()
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(|p| p.score())
    }

    // === Intel ===

    /// Latest snapshot. Once the match is over this is the
    /// `MatchConcluded` entry.
    #[must_use]
    pub fn intel(&self) -> &Intel {
        self.current.intel()
    }

    /// Entries strictly after `checkpoint`, oldest first.
    ///
    /// Only the previous and current hands are searched. A checkpoint older
    /// than the previous hand is truncated to those two hands; use
    /// [`full_history`](Self::full_history) to replay the whole match.
    #[must_use]
    pub fn intel_since(&self, checkpoint: Tick) -> Vec<Intel> {
        self.ledger_view().since(checkpoint)
    }

    /// Immutable view of the previous and current hand histories.
    #[must_use]
    pub fn ledger_view(&self) -> LedgerView {
        LedgerView::new(
            self.played.last().map(|hand| hand.history().clone()),
            self.current.history().clone(),
        )
    }

    /// Every entry of every hand, oldest first.
    #[must_use]
    pub fn full_history(&self) -> Vector<Intel> {
        self.hands().fold(Vector::new(), |mut all, hand| {
            all.append(hand.history().clone());
            all
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &P {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<P> {
        &self.players
    }

    /// All hands, oldest first. The last one is the current hand.
    pub fn hands(&self) -> impl Iterator<Item = &Hand> {
        self.played.iter().chain(std::iter::once(&self.current))
    }

    #[must_use]
    pub fn hands_played(&self) -> usize {
        self.played.len() + 1
    }

    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        &self.current
    }

    #[must_use]
    pub fn first_to_act(&self) -> PlayerId {
        self.current.first_to_act()
    }

    #[must_use]
    pub fn last_to_act(&self) -> PlayerId {
        self.current.last_to_act()
    }

    /// Whether the current hand's result was already applied.
    #[must_use]
    pub fn scores_applied(&self) -> bool {
        self.scores_applied
    }

    #[must_use]
    pub fn ranking(&self) -> &Arc<dyn CardRanking> {
        &self.ranking
    }

    // === Internals ===

    fn publish_after(&self, checkpoint: Tick) {
        for intel in self.current.history().iter().filter(|i| i.timestamp > checkpoint) {
            self.sink.publish(intel);
        }
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for Match<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("players", &self.players)
            .field("hands_played", &(self.played.len() + 1))
            .field("current", &self.current)
            .field("scores_applied", &self.scores_applied)
            .finish_non_exhaustive()
    }
}

fn is_mao_de_onze(config: &MatchConfig, scores: &PlayerMap<u32>) -> bool {
    (scores[PlayerId::FIRST] == config.eleven_score) ^ (scores[PlayerId::SECOND] == config.eleven_score)
}

/// Seat that must take the eleven decision in the next hand.
fn eleven_rule_seat(config: &MatchConfig, scores: &PlayerMap<u32>) -> Option<PlayerId> {
    if !config.eleven_rule || !is_mao_de_onze(config, scores) {
        return None;
    }
    PlayerId::both()
        .into_iter()
        .find(|&seat| scores[seat] == config.eleven_score)
}

/// Vira first, then three cards for the first seat, then three for the last.
fn draw_deal(deck: &mut Deck) -> Option<Deal> {
    let vira = deck.take_one()?;
    let first = deck.take(3)?;
    let last = deck.take(3)?;
    Some(Deal { vira, first, last })
}

fn open_hand<P: Participant>(
    setup: HandSetup,
    decks: &mut dyn DeckSource,
    players: &mut PlayerMap<P>,
    ranking: &Arc<dyn CardRanking>,
) -> Result<Hand, TrucoError> {
    let mut deck = decks.next_deck();
    let deal = draw_deal(&mut deck).ok_or(IllegalState::DeckExhausted)?;

    players[setup.first_to_act].set_cards(&deal.first);
    players[setup.first_to_act.opponent()].set_cards(&deal.last);
    Ok(Hand::new(setup, deal, Arc::clone(ranking)))
}
