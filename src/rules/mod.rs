//! Round resolution and match bookkeeping.
//!
//! - `validate_move`: canonical token to `Move`, with the bomb check
//! - `GameEngine::resolve_round`: atomic round resolution
//! - `GameEngine::state` / `snapshot`: read-only access

pub mod engine;
pub mod error;

pub use engine::{validate_move, GameEngine, RoundOutcome};
pub use error::{EngineError, ValidationError};
