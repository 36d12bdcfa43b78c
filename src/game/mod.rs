//! Match orchestration: participants, the match itself, construction and
//! shared access.

mod builder;
mod participant;
mod shared;
mod state;

pub use builder::MatchBuilder;
pub use participant::{Participant, Player};
pub use shared::SharedMatch;
pub use state::Match;
