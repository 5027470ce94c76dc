//! Interactive referee for Rock-Paper-Scissors-Plus.
//!
//! Prompts for one move per round, plays it against the configured bot,
//! and narrates each round. Logs go to stderr (`RUST_LOG`, default
//! `warn`) so the game itself stays on the terminal.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use rps_plus::{
    new_match, validate_move, BotStrategy, EngineError, GameEngine, MatchConfig, MatchState,
    RoundOutcome, Side, StrategyKind, ValidationError, Winner,
};

#[derive(Parser, Debug)]
#[command(name = "rps-plus", version, about)]
struct Cli {
    /// Seed for the bot's random choices. Omit for a fresh random seed.
    #[arg(long, env = "RPS_SEED")]
    seed: Option<u64>,

    /// Bot strategy: "referee" or "uniform".
    #[arg(long, env = "RPS_STRATEGY", default_value_t = StrategyKind::Referee)]
    strategy: StrategyKind,

    /// Print the final match state as JSON after the summary.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn match_config(&self) -> MatchConfig {
        let config = MatchConfig::new().with_strategy(self.strategy);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

const RULES: &str = "\
Best of 3 rounds. Valid moves: rock, paper, scissors, bomb.
Standard rules apply. Bomb beats everything except bomb (bomb vs bomb is a draw).
Each player can use bomb once per game.
Invalid moves are rejected and you get to try again.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let (mut engine, mut bot, seed) = new_match(&cli.match_config());
    tracing::info!(seed, strategy = %cli.strategy, "starting match");

    let term = Term::stdout();
    let mut out = term.clone();

    writeln!(out, "{}", style("ROCK-PAPER-SCISSORS-PLUS").bold())?;
    writeln!(out, "{RULES}")?;

    while !engine.state().is_game_over() {
        let raw = prompt_move(&term, engine.state())?;
        handle_token(&mut engine, &mut bot, &raw, &mut out)?;
    }

    write_summary(&mut out, engine.state())?;

    if cli.json {
        serde_json::to_writer_pretty(&mut out, engine.state())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Ask for the next move until the user types one the engine would accept.
fn prompt_move(term: &Term, state: &MatchState) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!("Round {} - Your move", state.round() + 1)).bold()
        ))
        .validate_with(|input: &String| -> Result<(), String> { check_move(state, input) })
        .interact_text_on(term)?;

    Ok(input)
}

/// Trim and lowercase raw input before it reaches the engine.
fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Prompt-side check: the normalized input must be a move the user may still play.
fn check_move(state: &MatchState, input: &str) -> Result<(), String> {
    let token = normalize_token(input);
    if token.is_empty() {
        return Err("Please enter a move.".to_string());
    }

    validate_move(&token, state.user_bomb_used())
        .map(|_| ())
        .map_err(|err| rejection_message(&EngineError::from(err)))
}

/// Play one round from raw input and narrate it, or explain the rejection.
///
/// A rejected move is not an error here; the caller just prompts again.
fn handle_token<B, W>(engine: &mut GameEngine, bot: &mut B, raw: &str, out: &mut W) -> Result<()>
where
    B: BotStrategy + ?Sized,
    W: Write,
{
    match engine.play_round(&normalize_token(raw), bot) {
        Ok(outcome) => write_round(out, &outcome)?,
        Err(err) => writeln!(out, "{}", rejection_message(&err))?,
    }
    Ok(())
}

fn rejection_message(err: &EngineError) -> String {
    match err {
        EngineError::Validation(ValidationError::InvalidMove { token }) => {
            format!("'{token}' is not a move. Try rock, paper, scissors or bomb.")
        }
        EngineError::Validation(ValidationError::BombAlreadyUsed)
        | EngineError::BombAlreadyUsed { side: Side::User } => {
            "You already used your bomb. Pick rock, paper or scissors.".to_string()
        }
        EngineError::BombAlreadyUsed { side: Side::Bot } => {
            "I tried to reuse my bomb; that round did not count. Go again.".to_string()
        }
        EngineError::NoBotMove => "I couldn't pick a move; that round did not count.".to_string(),
        EngineError::GameAlreadyOver => "The game is already over.".to_string(),
    }
}

fn write_round<W: Write>(out: &mut W, outcome: &RoundOutcome) -> io::Result<()> {
    let verdict = match outcome.winner {
        Winner::User => "You win the round!",
        Winner::Bot => "I win the round!",
        Winner::Draw => "It's a draw!",
    };
    writeln!(
        out,
        "Round {}: You played {}, I played {}. {verdict}",
        outcome.round, outcome.user_move, outcome.bot_move
    )?;
    writeln!(out, "Score: You {} - Me {}", outcome.user_score, outcome.bot_score)
}

fn write_summary<W: Write>(out: &mut W, state: &MatchState) -> Result<()> {
    writeln!(out, "GAME OVER")?;
    writeln!(
        out,
        "Final Score: You {} - Bot {}",
        state.user_score(),
        state.bot_score()
    )?;

    match state.result() {
        Some(Winner::User) => writeln!(out, "YOU WIN! Congratulations!")?,
        Some(Winner::Bot) => writeln!(out, "BOT WINS! Better luck next time!")?,
        Some(Winner::Draw) => writeln!(out, "IT'S A DRAW! Well played!")?,
        None => {}
    }

    writeln!(out, "Game History:")?;
    for record in state.history().iter() {
        writeln!(
            out,
            "  Round {}: You {} vs Bot {} -> {}",
            record.round, record.user_move, record.bot_move, record.winner
        )?;
    }
    Ok(())
}
