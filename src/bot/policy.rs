//! Bot move selection.
//!
//! A strategy sees the match state as it stood before the round and
//! nothing else. The user's move for the round is never passed in, so no
//! strategy can react to it.

use crate::core::{GameRng, MatchState, Move, Side, StrategyKind};

/// Chance the referee bot spends its bomb in the second round.
pub const SECOND_ROUND_BOMB_CHANCE: f64 = 0.2;

/// Picks the bot's move for the next round.
pub trait BotStrategy: Send {
    /// Choose a move from the current state.
    ///
    /// Returns `None` only if the match is over. Never returns Bomb once
    /// the bot's bomb is spent. A strategy that returns `None` while the
    /// match is still running makes `GameEngine::play_round` fail with
    /// `EngineError::NoBotMove`.
    fn choose_move(&mut self, state: &MatchState) -> Option<Move>;
}

impl<S: BotStrategy + ?Sized> BotStrategy for Box<S> {
    fn choose_move(&mut self, state: &MatchState) -> Option<Move> {
        (**self).choose_move(state)
    }
}

/// Build the strategy named by `kind`.
#[must_use]
pub fn strategy_for(kind: StrategyKind, rng: GameRng) -> Box<dyn BotStrategy> {
    match kind {
        StrategyKind::Uniform => Box::new(UniformBot::new(rng)),
        StrategyKind::Referee => Box::new(RefereeBot::new(rng)),
    }
}

// =============================================================================
// Uniform
// =============================================================================

/// Uniform over every move still legal for the bot.
#[derive(Clone, Debug)]
pub struct UniformBot {
    rng: GameRng,
}

impl UniformBot {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl BotStrategy for UniformBot {
    fn choose_move(&mut self, state: &MatchState) -> Option<Move> {
        let moves = state.legal_moves(Side::Bot);
        self.rng.choose(&moves).copied()
    }
}

// =============================================================================
// Referee
// =============================================================================

/// The house bot.
///
/// - Third round, bomb unused, bot trailing: Bomb.
/// - Second round, bomb unused: Bomb with probability `bomb_chance`.
/// - Otherwise uniform over Rock, Paper, Scissors.
#[derive(Clone, Debug)]
pub struct RefereeBot {
    rng: GameRng,
    bomb_chance: f64,
}

impl RefereeBot {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            bomb_chance: SECOND_ROUND_BOMB_CHANCE,
        }
    }

    /// Override the second-round bomb probability.
    ///
    /// Clamped to 0..=1; NaN counts as 0.
    #[must_use]
    pub fn with_bomb_chance(mut self, chance: f64) -> Self {
        self.bomb_chance = if chance.is_nan() {
            0.0
        } else {
            chance.clamp(0.0, 1.0)
        };
        self
    }
}

impl BotStrategy for RefereeBot {
    fn choose_move(&mut self, state: &MatchState) -> Option<Move> {
        if state.is_game_over() {
            return None;
        }

        let can_bomb = !state.bot_bomb_used();

        if can_bomb && state.round() == 2 && state.bot_score() < state.user_score() {
            tracing::debug!(round = state.round(), "bot spending bomb while behind");
            return Some(Move::Bomb);
        }

        if can_bomb && state.round() == 1 && self.rng.gen_bool(self.bomb_chance) {
            return Some(Move::Bomb);
        }

        self.rng.choose(&Move::STANDARD[..]).copied()
    }
}
