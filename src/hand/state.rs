//! One hand of a match: three rounds of cards plus the raise negotiation.
//!
//! ## Phases
//!
//! ```text
//! ElevenDecision ──accept──► Playing ◄──accept── AwaitingResponse
//!       │                     │   ▲                 ▲     │
//!       │                     │   └─────────────────┼─────┘ (re-raise stays)
//!       │                     └──────raise──────────┘
//!       └──decline──► Done ◄──decline / rounds decide──
//! ```
//!
//! Every accepted move appends one [`Intel`] to the hand history; a move
//! that ends the hand appends a second, `HandConcluded`, entry. Both carry
//! the result and no seat to act. Rejected moves change nothing.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;
use uuid::Uuid;

use super::moves::{Move, MoveKind};
use super::round::{aggregate, Round, RoundOutcome};
use crate::cards::{Card, CardRanking};
use crate::core::{InvalidMove, PlayerId, PlayerMap};
use crate::intel::{Intel, IntelEvent, Tick};
use crate::truco::{Escalation, ScoreUnit, TrucoResult};

/// Cards dealt for one hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub vira: Card,
    /// Cards of the participant acting first.
    pub first: SmallVec<[Card; 3]>,
    /// Cards of the participant acting last.
    pub last: SmallVec<[Card; 3]>,
}

/// Match context a hand starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandSetup {
    pub match_id: Uuid,
    /// 1-based hand number.
    pub number: u32,
    pub first_to_act: PlayerId,
    pub scores: PlayerMap<u32>,
    /// Participant who must decide whether to play an eleven-rule hand.
    pub eleven_rule: Option<PlayerId>,
    /// Last timestamp issued before this hand.
    pub clock: Tick,
}

impl HandSetup {
    /// A first hand with seat 0 acting first and no score yet.
    #[must_use]
    pub fn first_hand(match_id: Uuid) -> Self {
        Self {
            match_id,
            number: 1,
            first_to_act: PlayerId::FIRST,
            scores: PlayerMap::with_value(0),
            eleven_rule: None,
            clock: Tick::ORIGIN,
        }
    }
}

/// Where the hand currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandPhase {
    /// Participant on eleven points decides to play (for 3) or run.
    ElevenDecision { player: PlayerId },
    Playing { to_act: PlayerId },
    /// A raise waits for `responder`; play resumes with `resume` afterwards.
    AwaitingResponse { responder: PlayerId, resume: PlayerId },
    Done,
}

pub struct Hand {
    match_id: Uuid,
    number: u32,
    first_to_act: PlayerId,
    vira: Card,
    cards: PlayerMap<SmallVec<[Card; 3]>>,
    open_cards: Vec<Card>,
    card_on_table: Option<(PlayerId, Card)>,
    rounds: SmallVec<[Round; 3]>,
    escalation: Escalation,
    phase: HandPhase,
    result: Option<TrucoResult>,
    scores: PlayerMap<u32>,
    match_winner: Option<PlayerId>,
    clock: Tick,
    history: Vector<Intel>,
    latest: Intel,
    ranking: Arc<dyn CardRanking>,
}

impl Hand {
    /// Open a hand and record its `HandStarted` entry.
    pub fn new(setup: HandSetup, deal: Deal, ranking: Arc<dyn CardRanking>) -> Self {
        let first_to_act = setup.first_to_act;
        let cards = if first_to_act == PlayerId::FIRST {
            PlayerMap::from_pair(deal.first, deal.last)
        } else {
            PlayerMap::from_pair(deal.last, deal.first)
        };
        let (phase, escalation) = match setup.eleven_rule {
            Some(player) => (
                HandPhase::ElevenDecision { player },
                Escalation::locked_at(ScoreUnit::One),
            ),
            None => (HandPhase::Playing { to_act: first_to_act }, Escalation::new()),
        };

        let mut hand = Self {
            match_id: setup.match_id,
            number: setup.number,
            first_to_act,
            vira: deal.vira,
            cards,
            open_cards: vec![deal.vira],
            card_on_table: None,
            rounds: SmallVec::new(),
            escalation,
            phase,
            result: None,
            scores: setup.scores,
            match_winner: None,
            clock: setup.clock,
            history: Vector::new(),
            latest: placeholder(setup.match_id, deal.vira),
            ranking,
        };
        hand.record(IntelEvent::HandStarted { first_to_act });
        hand
    }

    // === Moves ===

    /// Apply any move.
    pub fn submit(&mut self, who: PlayerId, mv: Move) -> Result<(), InvalidMove> {
        match mv {
            Move::PlayCard(card) => self.play_card(who, card),
            Move::Raise => self.raise(who).map(|_| ()),
            Move::Accept => self.accept(who),
            Move::Decline => self.decline(who),
        }
    }

    /// Play a card from `who`'s hand.
    pub fn play_card(&mut self, who: PlayerId, card: Card) -> Result<(), InvalidMove> {
        self.require_turn(who)?;
        let pos = self.cards[who]
            .iter()
            .position(|&c| c == card)
            .ok_or(InvalidMove::CardNotInHand)?;

        self.cards[who].remove(pos);
        self.open_cards.push(card);

        let decided = match self.card_on_table.take() {
            None => {
                self.card_on_table = Some((who, card));
                self.phase = HandPhase::Playing { to_act: who.opponent() };
                None
            }
            Some(lead) => {
                let round = Round::resolve(lead, (who, card), &self.vira, self.ranking.as_ref());
                self.rounds.push(round);
                self.phase = HandPhase::Playing { to_act: round.next_leader() };
                aggregate(&self.round_outcomes())
            }
        };

        match decided {
            Some(outcome) => {
                let result = self.escalation.result_for(outcome.winner());
                self.settle(result);
                self.record(IntelEvent::CardPlayed { player: who, card });
                self.record(IntelEvent::HandConcluded { result });
            }
            None => self.record(IntelEvent::CardPlayed { player: who, card }),
        }
        Ok(())
    }

    /// Request the next score unit. Returns the requested level.
    ///
    /// Allowed for the participant to act, or for the responder of a
    /// pending request (which accepts it and raises again).
    pub fn raise(&mut self, who: PlayerId) -> Result<ScoreUnit, InvalidMove> {
        let resume = match self.phase {
            HandPhase::Done => return Err(InvalidMove::HandConcluded),
            HandPhase::ElevenDecision { .. } => return Err(InvalidMove::DecisionPending),
            HandPhase::Playing { to_act } if to_act != who => return Err(InvalidMove::OutOfTurn),
            HandPhase::Playing { to_act } => to_act,
            HandPhase::AwaitingResponse { resume, .. } => resume,
        };

        let level = self.escalation.raise(who)?;
        self.phase = HandPhase::AwaitingResponse {
            responder: who.opponent(),
            resume,
        };
        self.record(IntelEvent::RaiseRequested { player: who, level });
        Ok(level)
    }

    /// Accept a pending raise, or agree to play an eleven-rule hand.
    pub fn accept(&mut self, who: PlayerId) -> Result<(), InvalidMove> {
        match self.phase {
            HandPhase::Done => Err(InvalidMove::HandConcluded),
            HandPhase::Playing { .. } => Err(InvalidMove::NoPendingRequest),
            HandPhase::ElevenDecision { player } => {
                if player != who {
                    return Err(InvalidMove::OutOfTurn);
                }
                self.escalation = Escalation::locked_at(ScoreUnit::Three);
                self.phase = HandPhase::Playing { to_act: self.first_to_act };
                self.record(IntelEvent::ElevenRuleAccepted { player: who });
                Ok(())
            }
            HandPhase::AwaitingResponse { resume, .. } => {
                let level = self.escalation.accept(who)?;
                self.phase = HandPhase::Playing { to_act: resume };
                self.record(IntelEvent::RaiseAccepted { player: who, level });
                Ok(())
            }
        }
    }

    /// Decline a pending raise, or run from an eleven-rule hand.
    ///
    /// Either way the hand ends and the opponent wins it.
    pub fn decline(&mut self, who: PlayerId) -> Result<(), InvalidMove> {
        match self.phase {
            HandPhase::Done => Err(InvalidMove::HandConcluded),
            HandPhase::Playing { .. } => Err(InvalidMove::NoPendingRequest),
            HandPhase::ElevenDecision { player } => {
                if player != who {
                    return Err(InvalidMove::OutOfTurn);
                }
                let result = TrucoResult::won_by(ScoreUnit::One, who.opponent());
                self.settle(result);
                self.record(IntelEvent::ElevenRuleDeclined { player: who });
                self.record(IntelEvent::HandConcluded { result });
                Ok(())
            }
            HandPhase::AwaitingResponse { .. } => {
                let result = self.escalation.decline(who)?;
                self.settle(result);
                self.record(IntelEvent::RaiseDeclined { player: who });
                self.record(IntelEvent::HandConcluded { result });
                Ok(())
            }
        }
    }

    /// Moves open to `who` right now.
    #[must_use]
    pub fn available_moves(&self, who: PlayerId) -> Vec<MoveKind> {
        let mut moves = Vec::new();
        match self.phase {
            HandPhase::ElevenDecision { player } if player == who => {
                moves.extend([MoveKind::Accept, MoveKind::Decline]);
            }
            HandPhase::Playing { to_act } if to_act == who => {
                moves.push(MoveKind::PlayCard);
                if self.escalation.can_raise(who) {
                    moves.push(MoveKind::Raise);
                }
            }
            HandPhase::AwaitingResponse { responder, .. } if responder == who => {
                moves.extend([MoveKind::Accept, MoveKind::Decline]);
                if self.escalation.can_raise(who) {
                    moves.push(MoveKind::Raise);
                }
            }
            _ => {}
        }
        moves
    }

    // === Match bookkeeping ===

    /// Record the scores after the match applied this hand's result.
    pub(crate) fn record_scores(&mut self, scores: PlayerMap<u32>, match_winner: Option<PlayerId>) {
        self.scores = scores;
        self.match_winner = match_winner;
        match match_winner {
            Some(winner) => self.record(IntelEvent::MatchConcluded { winner }),
            None => self.record(IntelEvent::ScoresUpdated),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn first_to_act(&self) -> PlayerId {
        self.first_to_act
    }

    #[must_use]
    pub fn last_to_act(&self) -> PlayerId {
        self.first_to_act.opponent()
    }

    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }

    /// Cards `who` still holds.
    #[must_use]
    pub fn cards(&self, who: PlayerId) -> &[Card] {
        &self.cards[who]
    }

    #[must_use]
    pub fn open_cards(&self) -> &[Card] {
        &self.open_cards
    }

    #[must_use]
    pub fn card_on_table(&self) -> Option<(PlayerId, Card)> {
        self.card_on_table
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn round_outcomes(&self) -> Vec<RoundOutcome> {
        self.rounds.iter().map(|r| r.outcome).collect()
    }

    #[must_use]
    pub fn escalation(&self) -> &Escalation {
        &self.escalation
    }

    /// Score unit in effect.
    #[must_use]
    pub fn score(&self) -> ScoreUnit {
        self.escalation.score()
    }

    #[must_use]
    pub fn phase(&self) -> HandPhase {
        self.phase
    }

    /// Who must act next, `None` once the hand is over.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        match self.phase {
            HandPhase::ElevenDecision { player } => Some(player),
            HandPhase::Playing { to_act } => Some(to_act),
            HandPhase::AwaitingResponse { responder, .. } => Some(responder),
            HandPhase::Done => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<TrucoResult> {
        self.result
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }

    /// Full history of this hand, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Intel> {
        &self.history
    }

    /// Latest snapshot.
    #[must_use]
    pub fn intel(&self) -> &Intel {
        &self.latest
    }

    /// Last timestamp issued by this hand.
    #[must_use]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    // === Internals ===

    fn require_turn(&self, who: PlayerId) -> Result<(), InvalidMove> {
        match self.phase {
            HandPhase::Done => Err(InvalidMove::HandConcluded),
            HandPhase::ElevenDecision { .. } => Err(InvalidMove::DecisionPending),
            HandPhase::AwaitingResponse { .. } => Err(InvalidMove::ResponsePending),
            HandPhase::Playing { to_act } if to_act != who => Err(InvalidMove::OutOfTurn),
            HandPhase::Playing { .. } => Ok(()),
        }
    }

    /// Fix the result before the concluding move is recorded, so its
    /// snapshot already shows the hand as over.
    fn settle(&mut self, result: TrucoResult) {
        self.result = Some(result);
        self.phase = HandPhase::Done;
    }

    fn record(&mut self, event: IntelEvent) {
        self.clock = self.clock.next();
        let to_act = self.to_act();
        let intel = Intel {
            timestamp: self.clock,
            event,
            match_id: self.match_id,
            hand_number: self.number,
            vira: self.vira,
            open_cards: self.open_cards.clone(),
            card_on_table: self.card_on_table,
            rounds: self.round_outcomes(),
            score_unit: self.escalation.score(),
            pending_request: self.escalation.pending(),
            scores: self.scores,
            to_act,
            available_moves: to_act.map(|p| self.available_moves(p)).unwrap_or_default(),
            hand_result: self.result,
            match_winner: self.match_winner,
        };
        self.history.push_back(intel.clone());
        self.latest = intel;
    }
}

impl std::fmt::Debug for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hand")
            .field("number", &self.number)
            .field("first_to_act", &self.first_to_act)
            .field("vira", &self.vira)
            .field("phase", &self.phase)
            .field("score", &self.escalation.score())
            .field("rounds", &self.round_outcomes())
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

/// Stand-in for `latest` until the opening entry is recorded.
fn placeholder(match_id: Uuid, vira: Card) -> Intel {
    Intel {
        timestamp: Tick::ORIGIN,
        event: IntelEvent::ScoresUpdated,
        match_id,
        hand_number: 0,
        vira,
        open_cards: Vec::new(),
        card_on_table: None,
        rounds: Vec::new(),
        score_unit: ScoreUnit::One,
        pending_request: None,
        scores: PlayerMap::with_value(0),
        to_act: None,
        available_moves: Vec::new(),
        hand_result: None,
        match_winner: None,
    }
}
