//! Raise negotiation ("truco") for a single hand.
//!
//! ## Protocol
//!
//! ```text
//! NoneRequested ─raise→ ThreeRequested ─raise→ SixRequested ─raise→ NineRequested ─raise→ TwelveRequested
//!                        │                      │                    │                     │
//!                        ├─accept: play at 3    ├─accept: 6          ├─accept: 9           ├─accept: 12
//!                        └─decline: req. wins 1 └─decline: 3         └─decline: 6          └─decline: 9
//! ```
//!
//! - Only the participant who did not make the pending request may answer it.
//! - Answering with a raise accepts the pending level and requests the next one.
//! - Nobody raises twice in a row: after an accepted raise, only the
//!   opponent of the last requester may raise again.
//! - Nothing goes above twelve.
//!
//! Every operation validates before mutating, so a rejected move leaves the
//! negotiation exactly as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::result::TrucoResult;
use super::score::ScoreUnit;
use crate::core::{InvalidMove, PlayerId};

/// Highest level requested so far in the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EscalationStage {
    NoneRequested,
    ThreeRequested,
    SixRequested,
    NineRequested,
    TwelveRequested,
}

impl EscalationStage {
    fn of(level: ScoreUnit) -> Self {
        match level {
            ScoreUnit::One => EscalationStage::NoneRequested,
            ScoreUnit::Three => EscalationStage::ThreeRequested,
            ScoreUnit::Six => EscalationStage::SixRequested,
            ScoreUnit::Nine => EscalationStage::NineRequested,
            ScoreUnit::Twelve => EscalationStage::TwelveRequested,
        }
    }
}

/// A raise waiting for an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    pub level: ScoreUnit,
    pub requester: PlayerId,
}

impl Request {
    /// The participant who must answer.
    #[must_use]
    pub fn responder(&self) -> PlayerId {
        self.requester.opponent()
    }
}

/// How a request was answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Response {
    Accepted,
    Declined,
    Raised,
}

/// One entry of the raise history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaiseRecord {
    pub request: Request,
    /// `None` while the request is still pending.
    pub response: Option<Response>,
}

/// Negotiation state machine for one hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Escalation {
    accepted: ScoreUnit,
    pending: Option<Request>,
    last_requester: Option<PlayerId>,
    raising_allowed: bool,
    outcome: Option<TrucoResult>,
    history: SmallVec<[RaiseRecord; 4]>,
}

impl Default for Escalation {
    fn default() -> Self {
        Self::new()
    }
}

impl Escalation {
    /// A fresh negotiation at one point.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(ScoreUnit::One, true)
    }

    /// A negotiation fixed at `score` where raising is not allowed.
    ///
    /// Used for eleven-rule hands.
    #[must_use]
    pub fn locked_at(score: ScoreUnit) -> Self {
        Self::starting_at(score, false)
    }

    fn starting_at(score: ScoreUnit, raising_allowed: bool) -> Self {
        Self {
            accepted: score,
            pending: None,
            last_requester: None,
            raising_allowed,
            outcome: None,
            history: SmallVec::new(),
        }
    }

    /// Score unit currently in effect: the last accepted level.
    #[must_use]
    pub fn score(&self) -> ScoreUnit {
        self.accepted
    }

    #[must_use]
    pub fn pending(&self) -> Option<Request> {
        self.pending
    }

    #[must_use]
    pub fn is_awaiting_response(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn last_requester(&self) -> Option<PlayerId> {
        self.last_requester
    }

    #[must_use]
    pub fn raising_allowed(&self) -> bool {
        self.raising_allowed
    }

    /// Result fixed by a decline, if the negotiation ended the hand.
    #[must_use]
    pub fn outcome(&self) -> Option<TrucoResult> {
        self.outcome
    }

    #[must_use]
    pub fn history(&self) -> &[RaiseRecord] {
        &self.history
    }

    /// Highest level requested so far.
    #[must_use]
    pub fn stage(&self) -> EscalationStage {
        let requested = self.pending.map_or(self.accepted, |r| r.level);
        EscalationStage::of(requested)
    }

    /// Would `who` be allowed to raise right now?
    #[must_use]
    pub fn can_raise(&self, who: PlayerId) -> bool {
        self.check_raise(who).is_ok()
    }

    /// Request the next level, or re-raise a pending request.
    ///
    /// Returns the newly requested level.
    pub fn raise(&mut self, who: PlayerId) -> Result<ScoreUnit, InvalidMove> {
        let (accepted, level) = self.check_raise(who)?;

        if let Some(record) = self.history.last_mut() {
            if record.response.is_none() {
                record.response = Some(Response::Raised);
            }
        }
        let request = Request { level, requester: who };
        self.accepted = accepted;
        self.pending = Some(request);
        self.last_requester = Some(who);
        self.history.push(RaiseRecord { request, response: None });
        Ok(level)
    }

    /// Accept the pending request. Returns the new score unit.
    pub fn accept(&mut self, who: PlayerId) -> Result<ScoreUnit, InvalidMove> {
        let request = self.check_response(who)?;

        self.accepted = request.level;
        self.pending = None;
        self.answer(Response::Accepted);
        Ok(self.accepted)
    }

    /// Decline the pending request, conceding the hand at the pre-raise level.
    pub fn decline(&mut self, who: PlayerId) -> Result<TrucoResult, InvalidMove> {
        let request = self.check_response(who)?;

        let result = TrucoResult::new(self.accepted, Some(request.requester), Some(request.requester));
        self.pending = None;
        self.outcome = Some(result);
        self.answer(Response::Declined);
        Ok(result)
    }

    /// Result for a hand decided by its rounds (or drawn).
    #[must_use]
    pub fn result_for(&self, winner: Option<PlayerId>) -> TrucoResult {
        TrucoResult::new(self.accepted, winner, self.last_requester)
    }

    /// Validate a raise. Returns the level that becomes accepted and the
    /// level that becomes pending.
    fn check_raise(&self, who: PlayerId) -> Result<(ScoreUnit, ScoreUnit), InvalidMove> {
        if self.outcome.is_some() {
            return Err(InvalidMove::HandConcluded);
        }
        if !self.raising_allowed {
            return Err(InvalidMove::RaiseForbidden);
        }
        if self.last_requester == Some(who) {
            return Err(InvalidMove::ConsecutiveRaise);
        }

        let base = self.pending.map_or(self.accepted, |r| r.level);
        let next = base
            .next()
            .ok_or(InvalidMove::RaiseAtMaximum(base.points()))?;
        Ok((base, next))
    }

    fn check_response(&self, who: PlayerId) -> Result<Request, InvalidMove> {
        if self.outcome.is_some() {
            return Err(InvalidMove::HandConcluded);
        }
        let request = self.pending.ok_or(InvalidMove::NoPendingRequest)?;
        if request.requester == who {
            return Err(InvalidMove::OwnRequest);
        }
        Ok(request)
    }

    fn answer(&mut self, response: Response) {
        if let Some(record) = self.history.last_mut() {
            record.response = Some(response);
        }
    }
}
