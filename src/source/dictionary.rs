//! Dictionary-backed word source

use super::WordSource;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors building a dictionary
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Word list has no usable answers")]
    NoAnswers,

    #[error("Failed to read word list {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Secret words drawn at random from an answer list, guesses checked
/// against an allowed set
///
/// Answers are always accepted as guesses. The answer list is never empty.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<String>,
    allowed: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from explicit lists
    ///
    /// # Errors
    /// Returns `SourceError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: Vec<String>,
        allowed: impl IntoIterator<Item = String>,
    ) -> Result<Self, SourceError> {
        if answers.is_empty() {
            return Err(SourceError::NoAnswers);
        }

        let mut allowed: FxHashSet<String> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());

        debug!(
            answers = answers.len(),
            allowed = allowed.len(),
            "Built dictionary"
        );

        Ok(Self { answers, allowed })
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let answers = words_from_slice(ANSWERS);
        let mut allowed: FxHashSet<String> = words_from_slice(ALLOWED).into_iter().collect();
        allowed.extend(answers.iter().cloned());
        Self { answers, allowed }
    }

    /// Load a single word list used both for answers and for validation
    ///
    /// # Errors
    /// Returns `SourceError::Read` if the file cannot be read and
    /// `SourceError::NoAnswers` if it holds no valid 5-letter words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), words = words.len(), "Loaded word list");

        let allowed = words.clone();
        Self::new(words, allowed)
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Number of words accepted as guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Pick an answer with the given random number generator
    #[must_use]
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `answers` is non-empty by construction
        let index = rng.random_range(0..self.answers.len());
        &self.answers[index]
    }
}

impl WordSource for Dictionary {
    fn get_word(&self) -> String {
        let word = self.choose_answer(&mut rand::rng()).to_string();
        trace!(word = %word, "Drew secret word");
        word
    }

    fn is_word(&self, candidate: &str) -> bool {
        self.allowed.contains(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_rejects_empty_answers() {
        let result = Dictionary::new(Vec::new(), words(&["CRANE"]));
        assert!(matches!(result, Err(SourceError::NoAnswers)));
    }

    #[test]
    fn answers_are_always_allowed() {
        let dict = Dictionary::new(words(&["APPLE"]), words(&["CRANE"])).unwrap();
        assert!(dict.is_word("APPLE"));
        assert!(dict.is_word("CRANE"));
        assert!(!dict.is_word("SLATE"));
        assert_eq!(dict.allowed_count(), 2);
    }

    #[test]
    fn is_word_is_exact_match() {
        let dict = Dictionary::new(words(&["APPLE"]), Vec::new()).unwrap();
        assert!(!dict.is_word("apple"));
        assert!(!dict.is_word("APPLE "));
    }

    #[test]
    fn get_word_draws_from_answers() {
        let dict = Dictionary::new(words(&["APPLE", "CRANE"]), Vec::new()).unwrap();
        for _ in 0..20 {
            let word = dict.get_word();
            assert!(dict.answers().contains(&word));
        }
    }

    #[test]
    fn choose_answer_is_repeatable_with_seed() {
        let dict = Dictionary::embedded();
        let first = dict.choose_answer(&mut StdRng::seed_from_u64(7)).to_string();
        let second = dict.choose_answer(&mut StdRng::seed_from_u64(7)).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn embedded_dictionary() {
        let dict = Dictionary::embedded();
        assert_eq!(dict.answers().len(), ANSWERS.len());
        assert!(dict.allowed_count() >= dict.answers().len());
        assert!(dict.is_word("APPLE"));
        assert!(dict.is_word("SALET"));
        assert!(!dict.is_word("ZZZZZ"));
    }

    #[test]
    fn from_missing_file_reports_path() {
        let result = Dictionary::from_file("does/not/exist.txt");
        match result {
            Err(SourceError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("does/not/exist.txt"));
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn from_file_uses_list_for_both_roles() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "crane\nslate\n\ntoolong\n").unwrap();

        let dict = Dictionary::from_file(file.path()).unwrap();

        assert_eq!(dict.answers(), ["CRANE", "SLATE"]);
        assert!(dict.is_word("SLATE"));
        assert!(!dict.is_word("TOOLONG"));
    }
}
