//! # truco-core
//!
//! A rules engine for two-player truco paulista.
//!
//! ## Design Principles
//!
//! 1. **Embeddable**: No I/O, no global state, no logger setup. The
//!    embedding service injects a deck source, a card ranking and an intel
//!    sink, and drives the match through method calls.
//!
//! 2. **Explicit Errors**: Every rejected operation returns a typed error;
//!    nothing is mutated on failure. A drawn hand is a result, not an error.
//!
//! 3. **Observable**: Every transition appends an immutable [`Intel`]
//!    snapshot to an append-only ledger. Spectators resume from any
//!    timestamp with [`Match::intel_since`].
//!
//! ## Architecture
//!
//! - **Persistent Histories**: Hand histories are `im::Vector`s, so handing
//!   a consistent view to readers is O(1).
//!
//! - **Reproducible Dealing**: Decks are shuffled with a seeded ChaCha RNG,
//!   forked once per hand.
//!
//! ## Modules
//!
//! - `core`: Seats, per-seat storage, RNG, configuration, errors
//! - `cards`: Cards, decks, deck sources and card ranking
//! - `truco`: Score units, hand results and the raise negotiation
//! - `hand`: Rounds, round aggregation and the hand state machine
//! - `intel`: Snapshots, ledger queries and sinks
//! - `game`: Participants, match orchestration and shared access
//!
//! ## Example
//!
//! ```
//! use truco_core::{MatchBuilder, MatchConfig, Player, PlayerId};
//! use truco_core::intel::NullSink;
//!
//! let mut game = MatchBuilder::new()
//!     .config(MatchConfig::new().with_seed(1))
//!     .sink(NullSink)
//!     .build(Player::new("Ana"), Player::new("Bruno"))
//!     .unwrap();
//!
//! // Ana acts first and asks for truco; Bruno runs.
//! game.raise(PlayerId::FIRST).unwrap();
//! game.decline(PlayerId::SECOND).unwrap();
//! game.update_scores().unwrap();
//!
//! assert_eq!(game.score(PlayerId::FIRST), 1);
//! game.prepare_new_hand().unwrap();
//! assert_eq!(game.first_to_act(), PlayerId::SECOND);
//! ```

pub mod core;
pub mod cards;
pub mod truco;
pub mod hand;
pub mod intel;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig,
    ConstructionError, IllegalState, InvalidMove, TrucoError, Violation,
};

pub use crate::cards::{
    Card, Rank, Suit, Deck,
    DeckSource, ShuffledDecks, StackedDecks,
    CardRanking, ViraRanking,
};

pub use crate::truco::{Escalation, EscalationStage, Request, Response, ScoreUnit, TrucoResult};

pub use crate::hand::{aggregate, Hand, HandOutcome, HandPhase, Move, MoveKind, RoundOutcome};

pub use crate::intel::{Intel, IntelEvent, IntelSink, LedgerView, MemorySink, NullSink, Tick, TracingSink};

pub use crate::game::{Match, MatchBuilder, Participant, Player, SharedMatch};
