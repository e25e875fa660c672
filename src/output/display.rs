//! Display functions for game state

use super::formatters::{empty_row, share_text, tile};
use crate::core::{Game, Guess, Outcome};
use crate::source::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Print one scored guess as a row of tiles
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_guess<W: Write>(out: &mut W, guess: &Guess) -> io::Result<()> {
    for &letter in guess {
        write!(out, "{}", tile(letter))?;
    }
    writeln!(out)
}

/// Print every slot of the board, empty ones as placeholders
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_board<W: Write, S: WordSource>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    let width = game.word().chars().count();
    for slot in game.guesses() {
        match slot {
            Some(guess) => print_guess(out, guess)?,
            None => writeln!(out, "{}", empty_row(width).bright_black())?,
        }
    }
    Ok(())
}

/// Print the end-of-game banner
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write, S: WordSource>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    match game.outcome() {
        Outcome::Won { guesses } => {
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        Outcome::Lost => {
            writeln!(
                out,
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                game.word().bright_yellow().bold()
            )?;
        }
        Outcome::InProgress => {
            writeln!(
                out,
                "{} {}",
                "Game abandoned. The word was".bright_black(),
                game.word().bright_yellow()
            )?;
        }
    }
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "\n{}\n", share_text(game))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::WordSource;

    struct Apple;

    impl WordSource for Apple {
        fn get_word(&self) -> String {
            "APPLE".to_string()
        }

        fn is_word(&self, _candidate: &str) -> bool {
            true
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn guess_row_shows_letters() {
        let game = Game::new(Apple);
        let guess = game.build_guess_from_word("CRANE");
        let text = render(|out| print_guess(out, &guess));
        assert_eq!(text, " C  R  A  N  E \n");
    }

    #[test]
    fn board_has_one_line_per_slot() {
        let mut game = Game::with_max_guesses(Apple, 3).unwrap();
        game.append_guess("CRANE").unwrap();
        let text = render(|out| print_board(out, &game));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " C  R  A  N  E ");
        assert_eq!(lines[1], " _  _  _  _  _ ");
    }

    #[test]
    fn outcome_reveals_word_on_loss() {
        let mut game = Game::with_max_guesses(Apple, 1).unwrap();
        game.append_guess("CRANE").unwrap();
        let text = render(|out| print_outcome(out, &game));

        assert!(text.contains("Out of guesses"));
        assert!(text.contains("APPLE"));
        assert!(text.contains("Wordle X/1"));
    }

    #[test]
    fn outcome_on_win() {
        let mut game = Game::new(Apple);
        game.append_guess("APPLE").unwrap();
        let text = render(|out| print_outcome(out, &game));

        assert!(text.contains("Solved in 1 guess!"));
        assert!(text.contains("Wordle 1/6"));
    }
}
