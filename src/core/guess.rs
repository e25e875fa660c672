//! Scored guesses
//!
//! A `Guess` is the player's word after every letter has been classified
//! against the secret word.
//!
//! Two scoring rules are available:
//! - `FirstPass`: each letter is judged on its own. A letter that is not in
//!   place but occurs anywhere in the secret is `Present`, even if that
//!   occurrence was already matched by another guessed letter.
//! - `Canonical`: exact matches claim their letter first, then remaining
//!   letters are `Present` only while unclaimed copies are left.

use super::letter::{Letter, LetterStatus};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Index;

/// How repeated letters are classified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    /// Per-letter check with no shared letter pool
    #[default]
    FirstPass,
    /// Wordle's pool-based duplicate handling
    Canonical,
}

impl ScoringRule {
    /// Parse a rule from its command-line name
    ///
    /// Accepts "first-pass"/"simple" and "canonical"/"wordle".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "first-pass" | "firstpass" | "simple" => Some(Self::FirstPass),
            "canonical" | "wordle" => Some(Self::Canonical),
            _ => None,
        }
    }
}

/// A guess with every letter classified
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    /// Classify `guess` against `secret`
    ///
    /// The caller is responsible for making the lengths match; letters past
    /// the end of the secret can never be `Correct`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Guess, LetterStatus, ScoringRule};
    ///
    /// let guess = Guess::score("APPLE", "PAPER", ScoringRule::FirstPass);
    /// assert_eq!(guess[0].status(), LetterStatus::Present);
    /// assert_eq!(guess[2].status(), LetterStatus::Correct);
    /// assert_eq!(guess[4].status(), LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn score(secret: &str, guess: &str, rule: ScoringRule) -> Self {
        let secret: Vec<char> = secret.chars().collect();
        let guess: Vec<char> = guess.chars().collect();

        let statuses = match rule {
            ScoringRule::FirstPass => first_pass(&secret, &guess),
            ScoringRule::Canonical => canonical(&secret, &guess),
        };

        let letters = guess
            .iter()
            .zip(statuses)
            .map(|(&ch, status)| Letter::new(ch, status))
            .collect();

        Self { letters }
    }

    /// Build a guess from already classified letters
    #[must_use]
    pub const fn from_letters(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// The guessed word, reassembled from its letters
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.letter()).collect()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_correct(&self) -> bool {
        !self.letters.is_empty()
            && self
                .letters
                .iter()
                .all(|l| l.status() == LetterStatus::Correct)
    }

    /// Count letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status() == status).count()
    }

    /// Render the statuses as a row of colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.status().to_emoji()).collect()
    }
}

impl Index<usize> for Guess {
    type Output = Letter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.letters[index]
    }
}

impl<'a> IntoIterator for &'a Guess {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.letter())?;
        }
        Ok(())
    }
}

fn first_pass(secret: &[char], guess: &[char]) -> Vec<LetterStatus> {
    guess
        .iter()
        .enumerate()
        .map(|(i, ch)| {
            if secret.get(i) == Some(ch) {
                LetterStatus::Correct
            } else if secret.contains(ch) {
                LetterStatus::Present
            } else {
                LetterStatus::Absent
            }
        })
        .collect()
}

fn canonical(secret: &[char], guess: &[char]) -> Vec<LetterStatus> {
    let mut result = vec![LetterStatus::Absent; guess.len()];

    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in secret {
        *available.entry(ch).or_insert(0) += 1;
    }

    // Exact matches claim their letter before anything else
    for (i, ch) in guess.iter().enumerate() {
        if secret.get(i) == Some(ch) {
            result[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, ch) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(ch)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}
