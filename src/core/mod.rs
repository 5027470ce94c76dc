//! Core types: moves, match state, configuration, RNG.
//!
//! Nothing here decides whether a round may be played; that belongs to
//! the rules engine.

pub mod config;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{MatchConfig, StrategyKind, UnknownStrategy, MAX_ROUNDS};
pub use moves::{Move, Side, UnknownMove, Winner};
pub use rng::GameRng;
pub use state::{MatchState, RoundRecord};
