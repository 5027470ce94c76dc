//! Match engine scenario tests.
//!
//! Each test plays a short script through `GameEngine` and checks the
//! resulting outcome and state.

use rps_plus::core::{MatchState, Move, Side, Winner, MAX_ROUNDS};
use rps_plus::rules::{validate_move, EngineError, GameEngine, ValidationError};

/// Assert two states agree on every counter, flag and the history.
fn assert_unchanged(before: &MatchState, after: &MatchState) {
    assert_eq!(before.round(), after.round());
    assert_eq!(before.user_score(), after.user_score());
    assert_eq!(before.bot_score(), after.bot_score());
    assert_eq!(before.user_bomb_used(), after.user_bomb_used());
    assert_eq!(before.bot_bomb_used(), after.bot_bomb_used());
    assert_eq!(before.is_game_over(), after.is_game_over());
    assert_eq!(before.history(), after.history());
}

// =============================================================================
// Single Rounds
// =============================================================================

#[test]
fn test_rock_beats_scissors() {
    let mut engine = GameEngine::new();

    let outcome = engine.resolve_round(Move::Rock, Move::Scissors).unwrap();

    assert_eq!(outcome.winner, Winner::User);
    assert_eq!((outcome.user_score, outcome.bot_score), (1, 0));
    assert_eq!(outcome.round, 1);
    assert!(!outcome.game_over);
}

#[test]
fn test_user_bomb_beats_paper() {
    let mut engine = GameEngine::new();

    let outcome = engine.resolve_round(Move::Bomb, Move::Paper).unwrap();

    assert_eq!(outcome.winner, Winner::User);
    assert_eq!((outcome.user_score, outcome.bot_score), (1, 0));
    assert!(engine.state().user_bomb_used());
    assert!(!engine.state().bot_bomb_used());
}

#[test]
fn test_bomb_vs_bomb_draws_and_spends_both() {
    let mut engine = GameEngine::new();

    let outcome = engine.resolve_round(Move::Bomb, Move::Bomb).unwrap();

    assert_eq!(outcome.winner, Winner::Draw);
    assert_eq!((outcome.user_score, outcome.bot_score), (0, 0));
    assert!(engine.state().user_bomb_used());
    assert!(engine.state().bot_bomb_used());
    assert_eq!(engine.state().round(), 1);
}

#[test]
fn test_draw_scores_nobody() {
    let mut engine = GameEngine::new();

    for m in Move::STANDARD {
        let outcome = engine.resolve_round(m, m).unwrap();
        assert_eq!(outcome.winner, Winner::Draw);
    }

    assert_eq!(engine.state().user_score(), 0);
    assert_eq!(engine.state().bot_score(), 0);
    assert_eq!(engine.state().result(), Some(Winner::Draw));
}

// =============================================================================
// Bomb Enforcement
// =============================================================================

#[test]
fn test_second_user_bomb_rejected() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Bomb, Move::Rock).unwrap();
    let before = engine.snapshot();

    let err = engine.resolve_round(Move::Bomb, Move::Paper).unwrap_err();

    assert_eq!(err, EngineError::BombAlreadyUsed { side: Side::User });
    assert_unchanged(&before, engine.state());
}

#[test]
fn test_spent_bomb_reported_before_invalid() {
    assert_eq!(validate_move("bomb", true), Err(ValidationError::BombAlreadyUsed));
    assert_eq!(
        validate_move("dynamite", true),
        Err(ValidationError::InvalidMove {
            token: "dynamite".to_string()
        })
    );
}

#[test]
fn test_bomb_stays_spent_for_rest_of_match() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Bomb, Move::Rock).unwrap();

    for bot in [Move::Rock, Move::Paper] {
        assert_eq!(
            engine.resolve_round(Move::Bomb, bot),
            Err(EngineError::BombAlreadyUsed { side: Side::User })
        );
        assert_eq!(
            engine.validate_for(Side::User, "bomb"),
            Err(ValidationError::BombAlreadyUsed)
        );
        engine.resolve_round(Move::Rock, bot).unwrap();
    }

    assert!(engine.state().is_game_over());
    assert!(engine.state().user_bomb_used());
}

#[test]
fn test_rejected_validation_leaves_state() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Paper, Move::Rock).unwrap();
    let before = engine.snapshot();

    assert!(engine.validate_for(Side::User, "spock").is_err());

    assert_unchanged(&before, engine.state());
}

// =============================================================================
// Match Lifecycle
// =============================================================================

#[test]
fn test_three_rounds_user_wins_two_one() {
    let mut engine = GameEngine::new();

    let r1 = engine.resolve_round(Move::Rock, Move::Scissors).unwrap();
    let r2 = engine.resolve_round(Move::Rock, Move::Paper).unwrap();
    let r3 = engine.resolve_round(Move::Scissors, Move::Paper).unwrap();

    assert!(!r1.game_over);
    assert!(!r2.game_over);
    assert!(r3.game_over);

    let state = engine.state();
    assert_eq!(state.round(), MAX_ROUNDS);
    assert!(state.is_game_over());
    assert_eq!((state.user_score(), state.bot_score()), (2, 1));
    assert_eq!(state.result(), Some(Winner::User));
}

#[test]
fn test_fourth_round_rejected() {
    let mut engine = GameEngine::new();
    for _ in 0..MAX_ROUNDS {
        engine.resolve_round(Move::Paper, Move::Rock).unwrap();
    }
    let before = engine.snapshot();

    let err = engine.resolve_round(Move::Rock, Move::Scissors).unwrap_err();

    assert_eq!(err, EngineError::GameAlreadyOver);
    assert_unchanged(&before, engine.state());
    assert_eq!(engine.state().result(), Some(Winner::User));
}

#[test]
fn test_game_over_checked_before_bombs() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Bomb, Move::Bomb).unwrap();
    engine.resolve_round(Move::Rock, Move::Rock).unwrap();
    engine.resolve_round(Move::Rock, Move::Rock).unwrap();

    assert_eq!(
        engine.resolve_round(Move::Bomb, Move::Bomb),
        Err(EngineError::GameAlreadyOver)
    );
}

#[test]
fn test_history_tracks_cumulative_scores() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Rock, Move::Paper).unwrap();
    engine.resolve_round(Move::Bomb, Move::Paper).unwrap();
    engine.resolve_round(Move::Scissors, Move::Scissors).unwrap();

    let history: Vec<_> = engine.state().history().iter().cloned().collect();
    assert_eq!(history.len(), 3);

    assert_eq!(history[0].round, 1);
    assert_eq!(history[0].winner, Winner::Bot);
    assert_eq!((history[0].user_score, history[0].bot_score), (0, 1));

    assert_eq!(history[1].round, 2);
    assert_eq!(history[1].user_move, Move::Bomb);
    assert_eq!((history[1].user_score, history[1].bot_score), (1, 1));

    assert_eq!(history[2].winner, Winner::Draw);
    assert_eq!((history[2].user_score, history[2].bot_score), (1, 1));

    assert_eq!(engine.state().result(), Some(Winner::Draw));
}

#[test]
fn test_snapshot_not_affected_by_later_rounds() {
    let mut engine = GameEngine::new();
    engine.resolve_round(Move::Rock, Move::Scissors).unwrap();

    let snapshot = engine.snapshot();
    engine.resolve_round(Move::Bomb, Move::Rock).unwrap();

    assert_eq!(snapshot.round(), 1);
    assert!(!snapshot.user_bomb_used());
    assert_eq!(engine.state().round(), 2);
}

#[test]
fn test_independent_engines() {
    let mut a = GameEngine::new();
    let mut b = GameEngine::new();

    a.resolve_round(Move::Bomb, Move::Rock).unwrap();

    assert!(a.state().user_bomb_used());
    assert!(!b.state().user_bomb_used());
    assert_eq!(b.resolve_round(Move::Bomb, Move::Rock).unwrap().winner, Winner::User);
}
