//! Source with a predetermined secret word

use super::WordSource;

/// Always hands out the same secret word
///
/// The secret itself is always accepted as a guess; everything else is
/// validated by `inner`.
#[derive(Debug, Clone)]
pub struct FixedWord<S> {
    word: String,
    inner: S,
}

impl<S: WordSource> FixedWord<S> {
    pub fn new(word: impl Into<String>, inner: S) -> Self {
        Self {
            word: word.into(),
            inner,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl<S: WordSource> WordSource for FixedWord<S> {
    fn get_word(&self) -> String {
        self.word.clone()
    }

    fn is_word(&self, candidate: &str) -> bool {
        candidate == self.word || self.inner.is_word(candidate)
    }
}
