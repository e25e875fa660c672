//! Game configuration

use super::error::ConfigError;
use super::guess::ScoringRule;

/// Guess limit used when none is given
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Settings for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub scoring: ScoringRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            scoring: ScoringRule::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check the settings before a game is built from them
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroMaxGuesses` if no guesses would be allowed.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.scoring, ScoringRule::FirstPass);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = GameConfig::default()
            .with_max_guesses(10)
            .with_scoring(ScoringRule::Canonical);
        assert_eq!(config.max_guesses, 10);
        assert_eq!(config.scoring, ScoringRule::Canonical);
    }

    #[test]
    fn zero_guesses_rejected() {
        let config = GameConfig::default().with_max_guesses(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxGuesses));
    }
}
