//! Hand value and the raise negotiation that changes it.
//!
//! - [`ScoreUnit`]: the 1/3/6/9/12 ladder.
//! - [`Escalation`]: raise/accept/decline state machine for one hand.
//! - [`TrucoResult`]: score, winner and last requester of a concluded hand.

mod negotiation;
mod result;
mod score;

pub use negotiation::{EscalationStage, Escalation, RaiseRecord, Request, Response};
pub use result::TrucoResult;
pub use score::ScoreUnit;
