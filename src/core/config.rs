//! Match configuration.
//!
//! Matches are configured at creation time. Defaults follow the common
//! truco paulista rules: first to 12 points, the eleven rule at 11.

use serde::{Deserialize, Serialize};

use super::error::ConstructionError;

/// Configuration for a single match.
///
/// Deserializes with defaults for any missing field, so a partial
/// configuration document is valid:
///
/// ```
/// use truco_core::core::MatchConfig;
///
/// let config: MatchConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.max_score, 12);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Score that wins the match.
    pub max_score: u32,

    /// Score that puts a participant under the eleven rule.
    pub eleven_score: u32,

    /// Open hands in the eleven decision phase when exactly one
    /// participant sits on `eleven_score`.
    pub eleven_rule: bool,

    /// Seed for dealing. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_score: 12,
            eleven_score: 11,
            eleven_rule: true,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    /// Set the score that triggers the eleven rule.
    #[must_use]
    pub fn with_eleven_score(mut self, eleven_score: u32) -> Self {
        self.eleven_score = eleven_score;
        self
    }

    /// Enable or disable the eleven decision phase.
    #[must_use]
    pub fn with_eleven_rule(mut self, enabled: bool) -> Self {
        self.eleven_rule = enabled;
        self
    }

    /// Deal reproducibly from the given seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.max_score < 2 {
            return Err(ConstructionError::InvalidConfig(format!(
                "max_score must be at least 2, got {}",
                self.max_score
            )));
        }
        if self.eleven_score >= self.max_score {
            return Err(ConstructionError::InvalidConfig(format!(
                "eleven_score ({}) must be below max_score ({})",
                self.eleven_score, self.max_score
            )));
        }
        Ok(())
    }
}
