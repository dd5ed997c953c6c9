//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::ROOTS;
use crate::core::RootWord;
use crate::dictionary::WordListDictionary;
use crate::error::WordListError;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lower-cased. Blank lines are skipped silently;
/// lines that are not a single word of ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be read, and
/// `WordListError::NoWords` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/roots.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(WordListError::NoWords(path.to_path_buf()));
    }

    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let word = line.trim().to_ascii_lowercase();
            if word.is_empty() {
                None
            } else if word.bytes().all(|b| b.is_ascii_lowercase()) {
                Some(word)
            } else {
                log::warn!("Skipping malformed word list line {}: {:?}", idx + 1, line.trim());
                None
            }
        })
        .collect()
}

/// Load a root word corpus from a file
///
/// Like [`load_from_file`], but entries that cannot be played as a root word
/// (too short, for one) are also skipped with a warning, so every entry left
/// can start a round.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be read, and
/// `WordListError::NoWords` if no usable root words remain.
pub fn load_roots_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let roots = retain_root_words(load_from_file(path)?);
    if roots.is_empty() {
        return Err(WordListError::NoWords(path.to_path_buf()));
    }
    Ok(roots)
}

/// Drop entries that are not valid root words, warning about each
#[must_use]
pub fn retain_root_words(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| match RootWord::new(word) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Skipping root word {word:?}: {e}");
                false
            }
        })
        .collect()
}

/// Source name that selects an embedded list instead of a file
pub const BUILTIN: &str = "builtin";

/// Root word corpus from `source`: [`BUILTIN`] or a file path
///
/// # Errors
///
/// Same as [`load_roots_from_file`].
pub fn load_roots(source: &str) -> Result<Vec<String>, WordListError> {
    if source == BUILTIN {
        Ok(words_from_slice(ROOTS))
    } else {
        load_roots_from_file(source)
    }
}

/// Dictionary from `source`: [`BUILTIN`] or a file path
///
/// The built-in list keeps its own English tag whatever `language` says;
/// only a file-loaded list is tagged with `language`.
///
/// # Errors
///
/// Same as [`load_from_file`].
///
/// # Examples
/// ```
/// use word_scramble::dictionary::Dictionary;
/// use word_scramble::wordlists::loader::{BUILTIN, load_dictionary};
///
/// let dictionary = load_dictionary(BUILTIN, "fr").unwrap();
/// assert_eq!(dictionary.language(), "en");
/// assert!(!dictionary.is_real_word("silk", "fr"));
/// ```
pub fn load_dictionary(
    source: &str,
    language: &str,
) -> Result<WordListDictionary, WordListError> {
    if source == BUILTIN {
        let dictionary = WordListDictionary::builtin();
        if !language.eq_ignore_ascii_case(dictionary.language()) {
            log::warn!(
                "Built-in dictionary is '{}', no words will be recognized for '{language}'",
                dictionary.language()
            );
        }
        Ok(dictionary)
    } else {
        Ok(WordListDictionary::new(language, load_from_file(source)?))
    }
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOTS;
///
/// let words = words_from_slice(ROOTS);
/// assert_eq!(words.len(), ROOTS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
