//! Wordle Game
//!
//! Rules engine for a Wordle-style word game: validates guesses, classifies
//! each letter against the secret word and tracks when the game ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Game, LetterStatus};
//! use wordle_game::source::{Dictionary, FixedWord};
//!
//! let mut game = Game::new(FixedWord::new("APPLE", Dictionary::embedded()));
//!
//! let guess = game.append_guess("PLACE").unwrap();
//! assert_eq!(guess[4].status(), LetterStatus::Correct);
//!
//! game.append_guess("APPLE").unwrap();
//! assert!(game.is_solved());
//! ```

// Core game rules
pub mod core;

// Word providers
pub mod source;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
