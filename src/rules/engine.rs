//! The match engine.
//!
//! `GameEngine` owns one `MatchState` and is the only thing that mutates
//! it. Every operation checks all of its preconditions first and only then
//! applies the round, so a rejected call leaves the state exactly as it
//! was.

use serde::{Deserialize, Serialize};

use crate::bot::BotStrategy;
use crate::core::{MatchState, Move, RoundRecord, Side, Winner};

use super::error::{EngineError, ValidationError};

/// Check a canonical move token for one player.
///
/// Accepts exactly `rock`, `paper`, `scissors` and `bomb`. A spent bomb is
/// reported as [`ValidationError::BombAlreadyUsed`], never as an invalid
/// move.
///
/// ```
/// use rps_plus::rules::{validate_move, ValidationError};
/// use rps_plus::core::Move;
///
/// assert_eq!(validate_move("paper", true), Ok(Move::Paper));
/// assert_eq!(validate_move("bomb", true), Err(ValidationError::BombAlreadyUsed));
/// ```
pub fn validate_move(raw: &str, player_bomb_used: bool) -> Result<Move, ValidationError> {
    let mv: Move = raw.parse().map_err(|_| ValidationError::InvalidMove {
        token: raw.to_string(),
    })?;

    if mv.is_bomb() && player_bomb_used {
        return Err(ValidationError::BombAlreadyUsed);
    }

    Ok(mv)
}

/// What a successful round produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number just played, 1-based.
    pub round: u32,
    pub user_move: Move,
    pub bot_move: Move,
    pub winner: Winner,
    pub user_score: u32,
    pub bot_score: u32,
    /// True if this round ended the match.
    pub game_over: bool,
}

impl RoundOutcome {
    fn from_record(record: &RoundRecord, game_over: bool) -> Self {
        Self {
            round: record.round,
            user_move: record.user_move,
            bot_move: record.bot_move,
            winner: record.winner,
            user_score: record.user_score,
            bot_score: record.bot_score,
            game_over,
        }
    }

    /// Did the round go to a lone bomb?
    #[must_use]
    pub fn decided_by_bomb(&self) -> bool {
        self.winner != Winner::Draw && (self.user_move.is_bomb() != self.bot_move.is_bomb())
    }
}

/// Rules engine for one match.
///
/// ```
/// use rps_plus::core::{Move, Winner};
/// use rps_plus::rules::GameEngine;
///
/// let mut engine = GameEngine::new();
/// let outcome = engine.resolve_round(Move::Rock, Move::Scissors).unwrap();
/// assert_eq!(outcome.winner, Winner::User);
/// assert_eq!(engine.state().user_score(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: MatchState,
}

impl GameEngine {
    /// Start a new match.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: MatchState::new(),
        }
    }

    /// Read-only view of the match.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the match, independent of later rounds.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Validate `raw` against the current bomb flag of `side`.
    pub fn validate_for(&self, side: Side, raw: &str) -> Result<Move, ValidationError> {
        validate_move(raw, self.state.bomb_used(side))
    }

    /// Resolve one round from two moves.
    ///
    /// Fails without touching the state if the match is over or either side
    /// plays a bomb it already spent (the user is checked first).
    pub fn resolve_round(
        &mut self,
        user_move: Move,
        bot_move: Move,
    ) -> Result<RoundOutcome, EngineError> {
        self.check_round(user_move, bot_move)?;

        let record = self.state.record_round(user_move, bot_move);
        let outcome = RoundOutcome::from_record(&record, self.state.is_game_over());

        tracing::debug!(
            round = outcome.round,
            user_move = %user_move,
            bot_move = %bot_move,
            winner = %outcome.winner,
            user_score = outcome.user_score,
            bot_score = outcome.bot_score,
            "round resolved"
        );

        if outcome.game_over {
            if let Some(result) = self.state.result() {
                tracing::info!(
                    result = %result,
                    user_score = outcome.user_score,
                    bot_score = outcome.bot_score,
                    "match over"
                );
            }
        }

        Ok(outcome)
    }

    /// Play a full round from a raw user token.
    ///
    /// The bot chooses from the state as it stands before the round; it
    /// never sees `user_token`. A spent user bomb is reported as
    /// [`EngineError::BombAlreadyUsed`], the same as from `resolve_round`.
    /// Nothing changes on failure.
    pub fn play_round<B>(
        &mut self,
        user_token: &str,
        bot: &mut B,
    ) -> Result<RoundOutcome, EngineError>
    where
        B: BotStrategy + ?Sized,
    {
        if self.state.is_game_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        let user_move = self
            .validate_for(Side::User, user_token)
            .map_err(|err| {
                tracing::warn!(token = user_token, error = %err, "user move rejected");
                match err {
                    ValidationError::BombAlreadyUsed => {
                        EngineError::BombAlreadyUsed { side: Side::User }
                    }
                    other => EngineError::Validation(other),
                }
            })?;

        let bot_move = bot.choose_move(&self.state).ok_or_else(|| {
            tracing::warn!(round = self.state.round(), "bot strategy returned no move");
            EngineError::NoBotMove
        })?;

        self.resolve_round(user_move, bot_move)
    }

    fn check_round(&self, user_move: Move, bot_move: Move) -> Result<(), EngineError> {
        if self.state.is_game_over() {
            tracing::warn!(round = self.state.round(), "round attempted after game over");
            return Err(EngineError::GameAlreadyOver);
        }

        for (side, mv) in [(Side::User, user_move), (Side::Bot, bot_move)] {
            if mv.is_bomb() && self.state.bomb_used(side) {
                tracing::warn!(side = %side, "repeated bomb rejected");
                return Err(EngineError::BombAlreadyUsed { side });
            }
        }

        Ok(())
    }
}
