//! Match construction with injectable collaborators.

use std::sync::Arc;

use uuid::Uuid;

use super::participant::Participant;
use super::state::Match;
use crate::cards::{CardRanking, DeckSource, ShuffledDecks, ViraRanking};
use crate::core::{ConstructionError, MatchConfig, PlayerMap, TrucoError};
use crate::intel::{IntelSink, TracingSink};

/// Builder for a [`Match`].
///
/// Defaults: random id, [`MatchConfig::default`], decks shuffled from
/// `config.seed` (or OS entropy), [`ViraRanking`] and [`TracingSink`].
///
/// ```
/// use truco_core::core::MatchConfig;
/// use truco_core::game::{MatchBuilder, Player};
/// use truco_core::intel::NullSink;
///
/// let game = MatchBuilder::new()
///     .config(MatchConfig::new().with_seed(42))
///     .sink(NullSink)
///     .build(Player::new("Ana"), Player::new("Bruno"))
///     .unwrap();
/// assert_eq!(game.hands_played(), 1);
/// ```
pub struct MatchBuilder {
    id: Option<Uuid>,
    config: MatchConfig,
    decks: Option<Box<dyn DeckSource>>,
    ranking: Arc<dyn CardRanking>,
    sink: Arc<dyn IntelSink>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            id: None,
            config: MatchConfig::default(),
            decks: None,
            ranking: Arc::new(ViraRanking),
            sink: Arc::new(TracingSink),
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Where decks come from. Overrides `config.seed`.
    pub fn decks(mut self, decks: impl DeckSource + 'static) -> Self {
        self.decks = Some(Box::new(decks));
        self
    }

    pub fn ranking(mut self, ranking: impl CardRanking + 'static) -> Self {
        self.ranking = Arc::new(ranking);
        self
    }

    /// Observer for published intel. Pass an `Arc` to keep a handle on it.
    pub fn sink(mut self, sink: impl IntelSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Validate the configuration and deal the first hand.
    ///
    /// Participants may carry preset scores, but none above `max_score`
    /// and not both on it.
    pub fn build<P: Participant>(self, first: P, second: P) -> Result<Match<P>, TrucoError> {
        self.config.validate()?;
        if first == second {
            return Err(ConstructionError::SameParticipant.into());
        }
        let max = self.config.max_score;
        let (a, b) = (first.score(), second.score());
        if a > max || b > max || (a == max && b == max) {
            return Err(ConstructionError::InvalidConfig(format!(
                "preset scores {a} and {b} do not fit max_score {max}"
            ))
            .into());
        }

        let decks = match self.decks {
            Some(decks) => decks,
            None => Box::new(match self.config.seed {
                Some(seed) => ShuffledDecks::seeded(seed),
                None => ShuffledDecks::from_entropy(),
            }),
        };

        Match::start(
            self.id.unwrap_or_else(Uuid::new_v4),
            self.config,
            PlayerMap::from_pair(first, second),
            decks,
            self.ranking,
            self.sink,
        )
    }
}
