//! Error types
//!
//! Rejected guesses are not errors (see [`crate::rules::Outcome`]); these types
//! cover the conditions under which no game can be played at all.

use std::path::PathBuf;

/// Reasons a string cannot serve as a root word
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootWordError {
    #[error("root word must be at least {min} letters, got {len}")]
    TooShort { len: usize, min: usize },

    #[error("root word must contain only ASCII letters")]
    NonAlphabetic,
}

/// Errors raised while drawing a root word from a corpus
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    #[error("root word corpus is empty")]
    Empty,

    #[error("corpus entry '{word}' is not a usable root word: {source}")]
    InvalidEntry {
        word: String,
        source: RootWordError,
    },
}

/// Errors raised while loading a word list from disk
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {0} contains no words")]
    NoWords(PathBuf),
}

/// Errors raised when validating game configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_error_display() {
        assert_eq!(CorpusError::Empty.to_string(), "root word corpus is empty");

        let err = CorpusError::InvalidEntry {
            word: "ab".to_string(),
            source: RootWordError::TooShort { len: 2, min: 3 },
        };
        assert_eq!(
            err.to_string(),
            "corpus entry 'ab' is not a usable root word: root word must be at least 3 letters, got 2"
        );
    }

    #[test]
    fn word_list_error_display() {
        let err = WordListError::NoWords(PathBuf::from("data/empty.txt"));
        assert_eq!(err.to_string(), "word list data/empty.txt contains no words");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("min_length must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: min_length must be > 0"
        );
    }
}
