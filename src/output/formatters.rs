//! Formatting utilities for terminal output

use crate::core::{Game, Letter, LetterStatus, Outcome};
use crate::source::WordSource;
use colored::{ColoredString, Colorize};

/// Render a letter as a colored tile
#[must_use]
pub fn tile(letter: Letter) -> ColoredString {
    let text = format!(" {} ", letter.letter());
    match letter.status() {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Placeholder tiles for an unused slot
#[must_use]
pub fn empty_row(width: usize) -> String {
    " _ ".repeat(width)
}

/// Spoiler-free summary of a game, one emoji row per guess
///
/// The header shows the guess count on a win and `X` otherwise.
#[must_use]
pub fn share_text<S: WordSource>(game: &Game<S>) -> String {
    let score = match game.outcome() {
        Outcome::Won { guesses } => guesses.to_string(),
        Outcome::Lost | Outcome::InProgress => "X".to_string(),
    };

    let mut text = format!("Wordle {score}/{}", game.max_guesses());
    for guess in game.completed_guesses() {
        text.push('\n');
        text.push_str(&guess.to_emoji());
    }
    text
}
