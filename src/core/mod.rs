//! Core rules of the game
//!
//! Letter classification, guess scoring and game state. Nothing here does
//! I/O: words come from an injected `WordSource`.

mod config;
mod error;
mod game;
mod guess;
mod letter;

pub use config::{DEFAULT_MAX_GUESSES, GameConfig};
pub use error::{ConfigError, GuessError};
pub use game::{Game, Outcome};
pub use guess::{Guess, ScoringRule};
pub use letter::{Letter, LetterStatus, build_letter};
