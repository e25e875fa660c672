//! One-off scoring command
//!
//! Classifies a single guess against a given secret, no dictionary involved.

use crate::core::{Guess, ScoringRule};
use crate::wordlists::loader::normalize;
use anyhow::{Result, bail};

/// Score `guess` against `secret`
///
/// Both words are normalized to upper case and must be five letters.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(secret: &str, guess: &str, rule: ScoringRule) -> Result<Guess> {
    let Some(secret) = normalize(secret) else {
        bail!("Invalid secret word '{secret}': must be 5 letters");
    };
    let Some(guess) = normalize(guess) else {
        bail!("Invalid guess '{guess}': must be 5 letters");
    };

    Ok(Guess::score(&secret, &guess, rule))
}
