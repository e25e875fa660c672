//! Error types for game construction and guessing

use thiserror::Error;

/// Why a guess was rejected
///
/// A rejected guess leaves the game untouched, so the caller can re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("No more guesses allowed (limit is {max_guesses})")]
    OutOfGuesses { max_guesses: usize },

    #[error("Guess must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    NotAWord(String),
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("A game must allow at least one guess")]
    ZeroMaxGuesses,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_error_messages() {
        assert_eq!(
            GuessError::OutOfGuesses { max_guesses: 6 }.to_string(),
            "No more guesses allowed (limit is 6)"
        );
        assert_eq!(
            GuessError::InvalidLength {
                expected: 5,
                actual: 10
            }
            .to_string(),
            "Guess must be exactly 5 letters, got 10"
        );
        assert_eq!(
            GuessError::NotAWord("XYZZY".to_string()).to_string(),
            "'XYZZY' is not in the word list"
        );
    }
}
