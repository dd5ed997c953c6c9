//! Game configuration

use crate::error::ConfigError;

/// Shortest guess the game accepts
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Language tag handed to the dictionary when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Tunable rules of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses shorter than this are rejected as too short
    pub min_length: usize,
    /// Passed through to every dictionary lookup
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `min_length` is zero or the
    /// language tag is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Validation("min_length must be > 0".into()));
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "language must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.min_length, 3);
        assert_eq!(config.language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_min_length_rejected() {
        let config = GameConfig {
            min_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Validation("min_length must be > 0".into()))
        );
    }

    #[test]
    fn blank_language_rejected() {
        let config = GameConfig {
            language: "  ".to_string(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
