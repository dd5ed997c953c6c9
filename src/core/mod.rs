//! Core domain types for the word game
//!
//! Root words, letter pools and round state. Nothing in here knows about
//! dictionaries or user interfaces.

mod letters;
mod round;
mod selector;
mod word;

pub use letters::LetterPool;
pub use round::{Round, restart};
pub use selector::select;
pub use word::RootWord;

/// Normalize raw player input into a guess
///
/// Lower-cases and trims the input. Returns `None` for blank input, which
/// callers treat as "nothing submitted".
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_guess;
///
/// assert_eq!(normalize_guess("  Silk \n"), Some("silk".to_string()));
/// assert_eq!(normalize_guess("   "), None);
/// ```
#[must_use]
pub fn normalize_guess(input: &str) -> Option<String> {
    let guess = input.trim().to_lowercase();
    if guess.is_empty() { None } else { Some(guess) }
}
