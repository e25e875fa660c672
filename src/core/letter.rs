//! Classified letters
//!
//! A `Letter` pairs one character of a guess with the feedback it earned
//! against the secret word.

use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter sits at this exact position in the secret word
    Correct,
    /// Letter occurs in the secret word, but elsewhere
    Present,
    /// Letter does not occur in the secret word
    Absent,
}

impl LetterStatus {
    /// Upper-case name of the status (`CORRECT`, `PRESENT`, `ABSENT`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "CORRECT",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
        }
    }

    /// Colored square used when sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One character of a guess together with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    letter: char,
    status: LetterStatus,
}

impl Letter {
    /// Pair a character with a status. No validation is performed.
    #[inline]
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }
}

/// Build a letter from its parts
///
/// # Examples
/// ```
/// use wordle_game::core::{build_letter, LetterStatus};
///
/// let letter = build_letter('E', LetterStatus::Present);
/// assert_eq!(letter.letter(), 'E');
/// assert_eq!(letter.status(), LetterStatus::Present);
/// ```
#[inline]
#[must_use]
pub const fn build_letter(letter: char, status: LetterStatus) -> Letter {
    Letter::new(letter, status)
}
