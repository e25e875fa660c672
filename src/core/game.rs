//! Game state
//!
//! A `Game` owns a secret word and a fixed number of guess slots. Guesses are
//! appended in order; the game never rewinds.
//!
//! # Examples
//! ```
//! use wordle_game::core::{Game, GuessError};
//! use wordle_game::source::WordSource;
//!
//! struct Apple;
//!
//! impl WordSource for Apple {
//!     fn get_word(&self) -> String {
//!         "APPLE".to_string()
//!     }
//!
//!     fn is_word(&self, candidate: &str) -> bool {
//!         candidate != "XXXXX"
//!     }
//! }
//!
//! let mut game = Game::new(Apple);
//! assert!(matches!(game.append_guess("XXXXX"), Err(GuessError::NotAWord(_))));
//!
//! game.append_guess("CRANE").unwrap();
//! assert!(!game.should_end_game());
//!
//! game.append_guess("APPLE").unwrap();
//! assert!(game.is_solved());
//! assert_eq!(game.curr_guess(), 2);
//! ```

use super::config::GameConfig;
use super::error::{ConfigError, GuessError};
use super::guess::{Guess, ScoringRule};
use crate::source::WordSource;
use tracing::{debug, trace};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Solved on guess number `guesses`
    Won { guesses: usize },
    Lost,
}

/// A single play session
///
/// Slots `[0, curr_guess)` hold completed guesses, the rest are empty.
#[derive(Debug, Clone)]
pub struct Game<S: WordSource> {
    source: S,
    word: String,
    word_len: usize,
    max_guesses: usize,
    scoring: ScoringRule,
    guesses: Vec<Option<Guess>>,
    curr_guess: usize,
}

impl<S: WordSource> Game<S> {
    /// Start a game with six guesses and first-pass scoring
    pub fn new(source: S) -> Self {
        Self::build(source, GameConfig::default())
    }

    /// Start a game with a custom guess limit
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroMaxGuesses` if `max_guesses` is 0.
    pub fn with_max_guesses(source: S, max_guesses: usize) -> Result<Self, ConfigError> {
        Self::with_config(source, GameConfig::default().with_max_guesses(max_guesses))
    }

    /// Start a game from explicit settings
    ///
    /// # Errors
    /// Returns `ConfigError` if the settings are invalid.
    pub fn with_config(source: S, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(source, config))
    }

    fn build(source: S, config: GameConfig) -> Self {
        let word = source.get_word();
        let word_len = word.chars().count();

        debug!(
            max_guesses = config.max_guesses,
            scoring = ?config.scoring,
            word_len,
            "Started new game"
        );
        trace!(word = %word, "Secret word");

        Self {
            source,
            word,
            word_len,
            max_guesses: config.max_guesses,
            scoring: config.scoring,
            guesses: vec![None; config.max_guesses],
            curr_guess: 0,
        }
    }

    /// Classify a guess against the secret word without recording it
    #[must_use]
    pub fn build_guess_from_word(&self, guess: &str) -> Guess {
        Guess::score(&self.word, guess, self.scoring)
    }

    /// Validate, score and record a guess
    ///
    /// Checks run in order: guesses remaining, length, dictionary. On any
    /// error the game is left unchanged.
    ///
    /// # Errors
    /// - `GuessError::OutOfGuesses` if every slot is already used
    /// - `GuessError::InvalidLength` if the guess length differs from the secret's
    /// - `GuessError::NotAWord` if the word source rejects the guess
    pub fn append_guess(&mut self, guess: &str) -> Result<&Guess, GuessError> {
        if self.curr_guess >= self.max_guesses {
            debug!(max_guesses = self.max_guesses, "Rejected guess: out of guesses");
            return Err(GuessError::OutOfGuesses {
                max_guesses: self.max_guesses,
            });
        }

        let actual = guess.chars().count();
        if actual != self.word_len {
            debug!(expected = self.word_len, actual, "Rejected guess: wrong length");
            return Err(GuessError::InvalidLength {
                expected: self.word_len,
                actual,
            });
        }

        if !self.source.is_word(guess) {
            debug!(guess, "Rejected guess: not a word");
            return Err(GuessError::NotAWord(guess.to_string()));
        }

        let scored = self.build_guess_from_word(guess);
        let slot = self.curr_guess;
        self.curr_guess += 1;

        trace!(slot, guess, feedback = %scored.to_emoji(), "Recorded guess");

        let recorded: &Guess = self.guesses[slot].insert(scored);
        Ok(recorded)
    }

    /// True once the latest guess matches the secret word
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_guess()
            .is_some_and(|guess| guess.word() == self.word)
    }

    /// True when the game is solved or out of guesses
    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.is_solved() || self.curr_guess >= self.max_guesses
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_solved() {
            Outcome::Won {
                guesses: self.curr_guess,
            }
        } else if self.curr_guess >= self.max_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// The secret word
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Index of the next slot to fill, equal to the number of guesses made
    #[must_use]
    pub const fn curr_guess(&self) -> usize {
        self.curr_guess
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.curr_guess
    }

    /// All slots, filled or not
    #[must_use]
    pub fn guesses(&self) -> &[Option<Guess>] {
        &self.guesses
    }

    /// Filled slots, oldest first
    pub fn completed_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.guesses[..self.curr_guess].iter().flatten()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.curr_guess
            .checked_sub(1)
            .and_then(|slot| self.guesses[slot].as_ref())
    }

    #[must_use]
    pub const fn scoring_rule(&self) -> ScoringRule {
        self.scoring
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}
