//! Real-word lookup
//!
//! The game never decides on its own whether a string is a word; it asks a
//! `Dictionary`. The built-in implementation is a hash set loaded from a word
//! list, but any synchronous lookup (including a plain closure) will do.

use crate::config::DEFAULT_LANGUAGE;
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Capability to check whether a word exists in a language
pub trait Dictionary {
    /// Whether `word` is a real word in `language`
    ///
    /// `word` is already normalized (lowercase, trimmed).
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Closures act as language-agnostic dictionaries
impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_real_word(&self, word: &str, _language: &str) -> bool {
        self(word)
    }
}

/// Dictionary backed by an in-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from a list of words
    ///
    /// Words are trimmed and lower-cased; blank entries are dropped.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English word list compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::builtin();
    /// assert!(dictionary.is_real_word("silk", "en"));
    /// assert!(!dictionary.is_real_word("silk", "fr"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}
