//! Root word representation
//!
//! A `RootWord` is the lowercase word a round is played against, validated once
//! when the round is created.

use super::LetterPool;
use crate::error::RootWordError;
use std::fmt;

/// The word whose letters the player draws from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Shortest word accepted as a root
    pub const MIN_LEN: usize = 3;

    /// Create a new root word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lower-cased.
    ///
    /// # Errors
    /// Returns `RootWordError` if:
    /// - Length is below [`RootWord::MIN_LEN`]
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new("Silkworm").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("ab").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, RootWordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(RootWordError::NonAlphabetic);
        }

        let len = text.len();
        if len < Self::MIN_LEN {
            return Err(RootWordError::TooShort {
                len,
                min: Self::MIN_LEN,
            });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A fresh pool holding one entry per letter of the word
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::from_word(&self.text)
    }

    /// Whether `candidate` can be spelled from this word's letters
    #[must_use]
    pub fn can_form(&self, candidate: &str) -> bool {
        self.letters().take_word(candidate)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_creation_valid() {
        let root = RootWord::new("alphabet").unwrap();
        assert_eq!(root.text(), "alphabet");
        assert_eq!(root.len(), 8);
    }

    #[test]
    fn root_word_normalized() {
        assert_eq!(RootWord::new("ALPHABET").unwrap().text(), "alphabet");
        assert_eq!(RootWord::new("  listen\n").unwrap().text(), "listen");
    }

    #[test]
    fn root_word_too_short() {
        assert_eq!(
            RootWord::new("at"),
            Err(RootWordError::TooShort { len: 2, min: 3 })
        );
        assert_eq!(
            RootWord::new(""),
            Err(RootWordError::TooShort { len: 0, min: 3 })
        );
    }

    #[test]
    fn root_word_non_alphabetic() {
        assert_eq!(RootWord::new("silk-worm"), Err(RootWordError::NonAlphabetic));
        assert_eq!(RootWord::new("r00t"), Err(RootWordError::NonAlphabetic));
        assert_eq!(RootWord::new("café"), Err(RootWordError::NonAlphabetic));
    }

    #[test]
    fn root_word_can_form() {
        let root = RootWord::new("listen").unwrap();
        assert!(root.can_form("sent"));
        assert!(root.can_form("tens"));
        assert!(root.can_form("listen"));
        assert!(!root.can_form("settle"));
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("silkworm").unwrap();
        assert_eq!(format!("{root}"), "silkworm");
    }
}
