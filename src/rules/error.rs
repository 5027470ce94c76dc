//! Rejection reasons.
//!
//! Every error here is reported before the engine touches its state, so a
//! caller can always retry with a corrected move.

use thiserror::Error;

use crate::core::Side;

/// Why a move token was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Not one of `rock`, `paper`, `scissors`, `bomb`.
    #[error("invalid move {token:?} (expected rock, paper, scissors or bomb)")]
    InvalidMove { token: String },

    /// `bomb` after the player already spent it.
    #[error("bomb already used")]
    BombAlreadyUsed,
}

/// Why a round could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The match has already played all of its rounds.
    #[error("game already over")]
    GameAlreadyOver,

    /// `side` played Bomb after spending it.
    #[error("{side} already used their bomb")]
    BombAlreadyUsed { side: Side },

    /// The bot strategy produced no move while the match was running.
    #[error("bot strategy produced no move")]
    NoBotMove,

    /// The user's token was not a move.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
