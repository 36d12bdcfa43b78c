//! A single hand: dealing context, moves, rounds and their aggregation.
//!
//! The hand owns its [`Escalation`](crate::truco::Escalation) and its slice
//! of the intel ledger. Card strength comes from an injected
//! [`CardRanking`](crate::cards::CardRanking).

mod moves;
mod round;
mod state;

pub use moves::{Move, MoveKind};
pub use round::{aggregate, HandOutcome, Round, RoundOutcome};
pub use state::{Deal, Hand, HandPhase, HandSetup};
