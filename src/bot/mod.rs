//! Bot opponents.
//!
//! Strategies are trait-based so callers can plug in their own:
//! - `UniformBot`: uniform over legal moves
//! - `RefereeBot`: standard throws with situational bomb use

pub mod policy;

pub use policy::{strategy_for, BotStrategy, RefereeBot, UniformBot, SECOND_ROUND_BOMB_CHANCE};
