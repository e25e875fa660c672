//! Word sources
//!
//! A game never picks or validates words itself. It asks a `WordSource`,
//! which the host application supplies.

mod dictionary;
mod fixed;

pub use dictionary::{Dictionary, SourceError};
pub use fixed::FixedWord;

/// Supplies secret words and validates guesses
pub trait WordSource {
    /// Return a secret word for a new game
    fn get_word(&self) -> String;

    /// Whether `candidate` is an accepted dictionary word
    ///
    /// Any case or format normalization is up to the implementation.
    fn is_word(&self, candidate: &str) -> bool;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn get_word(&self) -> String {
        (**self).get_word()
    }

    fn is_word(&self, candidate: &str) -> bool {
        (**self).is_word(candidate)
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn get_word(&self) -> String {
        (**self).get_word()
    }

    fn is_word(&self, candidate: &str) -> bool {
        (**self).is_word(candidate)
    }
}
