//! Single-guess check command
//!
//! Judges one candidate against a root word with no prior guesses.

use crate::core::{RootWord, Round};
use crate::dictionary::Dictionary;
use crate::error::RootWordError;
use crate::rules::{GuessValidator, Outcome};

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub root: RootWord,
    pub input: String,
    /// `None` when the input was blank
    pub outcome: Option<Outcome>,
}

/// Check `word` against a fresh round of `root`
///
/// # Errors
///
/// Returns an error if `root` is not a valid root word.
pub fn check_word<D: Dictionary + ?Sized>(
    root: &str,
    word: &str,
    dictionary: &D,
    validator: &GuessValidator,
) -> Result<CheckResult, RootWordError> {
    let root = RootWord::new(root)?;
    let round = Round::new(root.clone());
    let outcome = validator.evaluate(word, &round, dictionary);

    Ok(CheckResult {
        root,
        input: word.to_string(),
        outcome,
    })
}
