//! Game configuration
//!
//! One machine covers every variant: shared vs per-player secrets, with or
//! without a turn countdown. Values come from defaults, an optional TOML file,
//! and command-line overrides, in that order.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Most guesses a player may submit in one turn
pub const MAX_GUESSES: usize = 6;

/// Rounds played when nothing else is configured
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("max_guesses must be between 1 and {max}, got {0}", max = MAX_GUESSES)]
    GuessLimit(usize),

    #[error("turn_time_limit must be at least one second")]
    ZeroTimeLimit,
}

/// Rules for a single game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Rounds before the game completes
    pub max_rounds: u32,

    /// Guesses per turn
    pub max_guesses: usize,

    /// Both players chase the same secret each round
    pub shared_secret: bool,

    /// Seconds per turn, `None` for untimed turns
    pub turn_time_limit: Option<u32>,

    /// Reject guesses that are not in the valid-guess list
    pub require_dictionary_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            max_guesses: MAX_GUESSES,
            shared_secret: false,
            turn_time_limit: None,
            require_dictionary_word: true,
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a TOML file
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, does not parse, or
    /// holds out-of-range values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError` on parse failure or out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    /// Checks value ranges, returning the config unchanged when valid
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if !(1..=MAX_GUESSES).contains(&self.max_guesses) {
            return Err(ConfigError::GuessLimit(self.max_guesses));
        }
        if self.turn_time_limit == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_max_rounds(self, max_rounds: u32) -> Self {
        Self { max_rounds, ..self }
    }

    #[must_use]
    pub fn with_shared_secret(self, shared_secret: bool) -> Self {
        Self {
            shared_secret,
            ..self
        }
    }

    #[must_use]
    pub fn with_turn_time_limit(self, turn_time_limit: Option<u32>) -> Self {
        Self {
            turn_time_limit,
            ..self
        }
    }

    #[must_use]
    pub fn with_dictionary_check(self, require_dictionary_word: bool) -> Self {
        Self {
            require_dictionary_word,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.max_guesses, 6);
        assert!(!config.shared_secret);
        assert_eq!(config.turn_time_limit, None);
        assert!(config.require_dictionary_word);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml("shared_secret = true\nturn_time_limit = 90\n").unwrap();
        assert!(config.shared_secret);
        assert_eq!(config.turn_time_limit, Some(90));
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            GameConfig::from_toml("max_round = 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert!(matches!(
            GameConfig::from_toml("max_rounds = 0"),
            Err(ConfigError::NoRounds)
        ));
        assert!(matches!(
            GameConfig::from_toml("max_guesses = 7"),
            Err(ConfigError::GuessLimit(7))
        ));
        assert!(matches!(
            GameConfig::from_toml("turn_time_limit = 0"),
            Err(ConfigError::ZeroTimeLimit)
        ));
    }

    #[test]
    fn builders_override() {
        let config = GameConfig::default()
            .with_max_rounds(1)
            .with_shared_secret(true)
            .with_turn_time_limit(Some(30))
            .with_dictionary_check(false);
        assert_eq!(config.max_rounds, 1);
        assert!(config.shared_secret);
        assert_eq!(config.turn_time_limit, Some(30));
        assert!(!config.require_dictionary_word);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            GameConfig::from_file("no/such/config.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
