//! Interactive play mode
//!
//! Text-based game loop: read a guess, score it, repeat until the game ends.

use crate::core::{Game, GameConfig, Outcome};
use crate::output::{print_board, print_guess, print_outcome};
use crate::source::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::info;

/// Play one game to completion
///
/// Input is upper-cased before it reaches the game. Rejected guesses are
/// reported and re-prompted. Returns `Outcome::InProgress` if the player
/// quits or input runs out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<S, R, W>(game: &mut Game<S>, input: &mut R, out: &mut W) -> Result<Outcome>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type 'quit' to give up.\n",
        game.word().chars().count(),
        game.max_guesses()
    )?;

    while !game.should_end_game() {
        let prompt = format!("Guess {}/{}", game.curr_guess() + 1, game.max_guesses());
        let Some(line) = read_line(&prompt, input, out)? else {
            break;
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        match game.append_guess(&line.to_uppercase()) {
            Ok(guess) => print_guess(out, guess)?,
            Err(e) => writeln!(out, "{} {e}", "❌".red())?,
        }
    }

    writeln!(out)?;
    print_board(out, game)?;
    print_outcome(out, game)?;
    Ok(game.outcome())
}

/// Play games until the player stops
///
/// Each game draws a fresh secret from `source`.
///
/// # Errors
///
/// Returns an error if `config` is invalid or on I/O failure.
pub fn run_play<S, R, W>(
    source: &S,
    config: GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: WordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        let mut game = Game::with_config(source, config)?;
        let outcome = play_game(&mut game, input, out)?;
        info!(?outcome, guesses = game.curr_guess(), "Game finished");

        if outcome == Outcome::InProgress {
            break;
        }

        let answer = read_line("Play again? (yes/no)", input, out)?.unwrap_or_default();
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            break;
        }
        writeln!(out)?;
    }

    writeln!(out, "👋 Thanks for playing!")?;
    Ok(())
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
