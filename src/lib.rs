//! # rps-plus
//!
//! Rules engine for Rock-Paper-Scissors-Plus: best of three rounds, where
//! each player also holds a single-use Bomb that beats every standard
//! throw and draws against the other Bomb.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: each `GameEngine` owns its `MatchState`. Separate
//!    matches are separate engines; nothing is global.
//!
//! 2. **Atomic Rounds**: a round either applies completely or is rejected
//!    with the state untouched.
//!
//! 3. **Canonical Input**: the engine only accepts the tokens `rock`,
//!    `paper`, `scissors` and `bomb`. Interpreting free text is the
//!    caller's job.
//!
//! 4. **Fair Bots**: bot strategies see the match state, never the user's
//!    move for the round being played.
//!
//! ## Modules
//!
//! - `core`: moves, match state, configuration, RNG
//! - `rules`: move validation and round resolution
//! - `bot`: bot strategies

pub mod bot;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, MatchConfig, MatchState, Move, RoundRecord, Side, StrategyKind, Winner,
    MAX_ROUNDS,
};

pub use crate::rules::{validate_move, EngineError, GameEngine, RoundOutcome, ValidationError};

pub use crate::bot::{strategy_for, BotStrategy, RefereeBot, UniformBot};

/// Owned copy of a match, as returned by [`GameEngine::snapshot`].
pub type MatchStateSnapshot = MatchState;

/// Build a fresh engine and the bot strategy named in `config`.
///
/// An unseeded config draws its seed from OS entropy; the seed actually
/// used is returned so the match can be replayed.
#[must_use]
pub fn new_match(config: &MatchConfig) -> (GameEngine, Box<dyn BotStrategy>, u64) {
    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();
    tracing::debug!(seed, strategy = %config.strategy, "new match");
    (GameEngine::new(), strategy_for(config.strategy, rng), seed)
}
