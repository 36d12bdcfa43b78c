//! Error taxonomy for the rules engine.
//!
//! Three families, one enum each:
//! - [`ConstructionError`]: a match could not be created.
//! - [`IllegalState`]: the caller sequenced match operations wrongly.
//! - [`InvalidMove`]: a participant's move was rejected.
//!
//! A hand ending without a winner is a draw, never an error.

use thiserror::Error;

/// Top-level error returned by match operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrucoError {
    #[error("cannot create match: {0}")]
    Construction(#[from] ConstructionError),

    #[error("illegal state: {0}")]
    IllegalState(#[from] IllegalState),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("both seats hold the same participant")]
    SameParticipant,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Operation called at the wrong point of the match lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalState {
    #[error("current hand has not concluded")]
    HandNotConcluded,

    #[error("a hand is still in progress")]
    HandInProgress,

    #[error("scores of the concluded hand have not been applied")]
    ScoresPending,

    #[error("scores of the current hand were already applied")]
    ScoresAlreadyApplied,

    #[error("match is finished")]
    MatchFinished,

    #[error("deck ran out while dealing")]
    DeckExhausted,
}

/// Whether a rejected move broke a game rule or arrived in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The move is never legal for this participant here (wrong seat, cap reached).
    Rule,
    /// The move may become legal later, but not in the current phase.
    State,
}

/// A participant's move rejected by the hand or negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("it is not this participant's turn")]
    OutOfTurn,

    #[error("card is not in the participant's hand")]
    CardNotInHand,

    #[error("cannot raise twice without the opponent responding")]
    ConsecutiveRaise,

    #[error("score is already at the maximum of {0} points")]
    RaiseAtMaximum(u32),

    #[error("cannot respond to your own request")]
    OwnRequest,

    #[error("raising is not allowed in an eleven-rule hand")]
    RaiseForbidden,

    #[error("no request is waiting for a response")]
    NoPendingRequest,

    #[error("a raise is waiting for a response")]
    ResponsePending,

    #[error("the eleven-rule decision has not been made")]
    DecisionPending,

    #[error("hand is already concluded")]
    HandConcluded,
}

impl InvalidMove {
    /// Classify the rejection for precise caller feedback.
    #[must_use]
    pub fn violation(&self) -> Violation {
        match self {
            InvalidMove::OutOfTurn
            | InvalidMove::CardNotInHand
            | InvalidMove::ConsecutiveRaise
            | InvalidMove::RaiseAtMaximum(_)
            | InvalidMove::OwnRequest
            | InvalidMove::RaiseForbidden => Violation::Rule,
            InvalidMove::NoPendingRequest
            | InvalidMove::ResponsePending
            | InvalidMove::DecisionPending
            | InvalidMove::HandConcluded => Violation::State,
        }
    }
}
