//! Core engine types: seats, RNG, configuration, errors.
//!
//! This module holds the building blocks shared by the card model, the
//! hand state machine and the match orchestration.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::MatchConfig;
pub use error::{ConstructionError, IllegalState, InvalidMove, TrucoError, Violation};
