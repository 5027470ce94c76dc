//! Match state: round counter, scores, bomb flags, history.
//!
//! ## MatchState
//!
//! Owned by exactly one [`GameEngine`](crate::rules::GameEngine). Fields are
//! private; callers read through accessors and only the engine mutates,
//! after every precondition has been checked.
//!
//! Invariants held after every mutation:
//! - `round <= max_rounds`
//! - `history.len() == round`
//! - `game_over == (round == max_rounds)`
//! - bomb flags and `game_over` only ever go from false to true
//!
//! History lives in an `im::Vector`, so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MAX_ROUNDS;
use super::moves::{Move, Side, Winner};

/// One resolved round. Never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, 1-based.
    pub round: u32,

    /// User's move as played.
    pub user_move: Move,

    /// Bot's move as played.
    pub bot_move: Move,

    /// Who took the round.
    pub winner: Winner,

    /// User's cumulative score after this round.
    pub user_score: u32,

    /// Bot's cumulative score after this round.
    pub bot_score: u32,
}

impl RoundRecord {
    /// Move played by `side`.
    #[must_use]
    pub fn move_of(&self, side: Side) -> Move {
        match side {
            Side::User => self.user_move,
            Side::Bot => self.bot_move,
        }
    }
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchState {
    round: u32,
    max_rounds: u32,
    user_score: u32,
    bot_score: u32,
    user_bomb_used: bool,
    bot_bomb_used: bool,
    game_over: bool,
    history: Vector<RoundRecord>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh match: counters zeroed, both bombs available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: 0,
            max_rounds: MAX_ROUNDS,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    /// Rounds completed so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds in the match.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Rounds left to play.
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.max_rounds - self.round
    }

    #[must_use]
    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    #[must_use]
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Score of `side`.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user_score,
            Side::Bot => self.bot_score,
        }
    }

    #[must_use]
    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    #[must_use]
    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    /// Has `side` spent its bomb?
    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Moves `side` may still play.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        if self.game_over {
            return vec![];
        }
        Move::ALL
            .into_iter()
            .filter(|m| !m.is_bomb() || !self.bomb_used(side))
            .collect()
    }

    /// Overall match result.
    ///
    /// Returns `Some` only once the match is over: the higher score wins,
    /// equal scores are a draw.
    #[must_use]
    pub fn result(&self) -> Option<Winner> {
        self.game_over
            .then(|| Winner::of_scores(self.user_score, self.bot_score))
    }

    /// Side currently ahead on points, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        Winner::of_scores(self.user_score, self.bot_score).side()
    }

    // === Mutation (engine only) ===

    /// Record a round. Callers must have already checked that the match is
    /// still running and that neither move is a spent bomb.
    pub(crate) fn record_round(&mut self, user_move: Move, bot_move: Move) -> RoundRecord {
        debug_assert!(!self.game_over, "round recorded after game over");

        if user_move.is_bomb() {
            self.user_bomb_used = true;
        }
        if bot_move.is_bomb() {
            self.bot_bomb_used = true;
        }

        let winner = Winner::of_round(user_move, bot_move);
        match winner {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::Draw => {}
        }

        self.round += 1;
        if self.round == self.max_rounds {
            self.game_over = true;
        }

        let record = RoundRecord {
            round: self.round,
            user_move,
            bot_move,
            winner,
            user_score: self.user_score,
            bot_score: self.bot_score,
        };
        self.history.push_back(record.clone());
        record
    }
}
