//! Match configuration.
//!
//! The round limit is fixed at [`MAX_ROUNDS`]. What a caller can choose is
//! how the bot picks its moves and whether its randomness is seeded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rounds in a match. Fixed for the life of every match.
pub const MAX_ROUNDS: u32 = 3;

/// Which bot strategy to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Uniform over every move still legal for the bot.
    Uniform,
    /// Mostly uniform over the standard throws, with situational bomb use.
    #[default]
    Referee,
}

impl StrategyKind {
    /// Canonical name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Uniform => "uniform",
            StrategyKind::Referee => "referee",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected \"uniform\" or \"referee\")")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(StrategyKind::Uniform),
            "referee" => Ok(StrategyKind::Referee),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Complete match configuration.
///
/// ```
/// use rps_plus::core::{MatchConfig, StrategyKind};
///
/// let config = MatchConfig::new()
///     .with_seed(42)
///     .with_strategy(StrategyKind::Uniform);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for the bot's RNG. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Bot strategy.
    pub strategy: StrategyKind,
}

impl MatchConfig {
    /// Default configuration: unseeded referee bot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the bot's RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pick the bot strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }
}
