//! Moves, sides, and round winners.
//!
//! ## Move
//!
//! The closed set of throws: Rock, Paper, Scissors, and the single-use Bomb.
//! Tokens are the canonical lowercase names; anything else is rejected.
//!
//! ## Side
//!
//! Which participant a move or flag belongs to. A match always has exactly
//! two sides, the user and the bot.
//!
//! ## Winner
//!
//! Result of one round or of a whole match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every standard throw. Usable once per side per match.
    Bomb,
}

impl Move {
    /// Every move, in canonical order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three standard throws (everything except Bomb).
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical token for this move.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Is this the bomb?
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// Does `self` win against `other`?
    ///
    /// Precedence: equal moves never beat each other (Bomb vs Bomb included),
    /// a lone Bomb beats anything, otherwise the usual cycle
    /// Rock > Scissors > Paper > Rock.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Bomb, Move::Bomb) => false,
            (Move::Bomb, _) => true,
            (_, Move::Bomb) => false,
            (Move::Rock, Move::Scissors)
            | (Move::Scissors, Move::Paper)
            | (Move::Paper, Move::Rock) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a token that is not one of the four canonical moves.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized move token {0:?}")]
pub struct UnknownMove(pub String);

impl FromStr for Move {
    type Err = UnknownMove;

    /// Parse a canonical token. No trimming or case folding happens here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMove(s.to_string()))
    }
}

/// One of the two participants in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Bot,
}

impl Side {
    /// Both sides, user first.
    pub const BOTH: [Side; 2] = [Side::User, Side::Bot];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::User => Side::Bot,
            Side::Bot => Side::User,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => f.write_str("user"),
            Side::Bot => f.write_str("bot"),
        }
    }
}

/// Result of a round or a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl Winner {
    /// Decide a round from both throws.
    #[must_use]
    pub const fn of_round(user: Move, bot: Move) -> Winner {
        if user.beats(bot) {
            Winner::User
        } else if bot.beats(user) {
            Winner::Bot
        } else {
            Winner::Draw
        }
    }

    /// Decide a match from the final tally.
    #[must_use]
    pub fn of_scores(user_score: u32, bot_score: u32) -> Winner {
        match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => Winner::User,
            std::cmp::Ordering::Less => Winner::Bot,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::User => Some(Side::User),
            Winner::Bot => Some(Side::Bot),
            Winner::Draw => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::User => f.write_str("user"),
            Winner::Bot => f.write_str("bot"),
            Winner::Draw => f.write_str("draw"),
        }
    }
}
