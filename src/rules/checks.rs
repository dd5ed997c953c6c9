//! Individual validation rules
//!
//! Each rule looks at one property of a normalized guess and either passes or
//! names the rejection. Rules never consult each other; their precedence lives
//! in [`ordered`].

use super::Rejection;
use crate::core::Round;
use crate::dictionary::Dictionary;

/// Everything a rule may look at
pub struct Submission<'a, D: ?Sized> {
    /// Normalized guess
    pub candidate: &'a str,
    pub round: &'a Round,
    pub dictionary: &'a D,
    pub min_length: usize,
    pub language: &'a str,
}

/// A single validation rule
pub type Rule<D> = fn(&Submission<'_, D>) -> Result<(), Rejection>;

/// The rules in precedence order, with names for logging
///
/// When several rules would fail, the first one listed decides the rejection.
#[must_use]
pub fn ordered<D: Dictionary + ?Sized>() -> [(&'static str, Rule<D>); 5] {
    [
        ("already_used", already_used),
        ("derivable", derivable),
        ("real_word", real_word),
        ("long_enough", long_enough),
        ("not_root_word", not_root_word),
    ]
}

/// Reject guesses accepted earlier in the round
///
/// # Errors
/// `Rejection::AlreadyUsed`
pub fn already_used<D: Dictionary + ?Sized>(s: &Submission<'_, D>) -> Result<(), Rejection> {
    if s.round.is_used(s.candidate) {
        Err(Rejection::AlreadyUsed)
    } else {
        Ok(())
    }
}

/// Reject guesses that need letters the root word can't supply
///
/// # Errors
/// `Rejection::NotDerivable`
pub fn derivable<D: Dictionary + ?Sized>(s: &Submission<'_, D>) -> Result<(), Rejection> {
    if s.round.root_word().can_form(s.candidate) {
        Ok(())
    } else {
        Err(Rejection::NotDerivable)
    }
}

/// Reject guesses the dictionary doesn't recognize
///
/// # Errors
/// `Rejection::NotAWord`
pub fn real_word<D: Dictionary + ?Sized>(s: &Submission<'_, D>) -> Result<(), Rejection> {
    if s.dictionary.is_real_word(s.candidate, s.language) {
        Ok(())
    } else {
        Err(Rejection::NotAWord)
    }
}

/// Reject guesses below the minimum length
///
/// # Errors
/// `Rejection::TooShort`
pub fn long_enough<D: Dictionary + ?Sized>(s: &Submission<'_, D>) -> Result<(), Rejection> {
    if s.candidate.chars().count() < s.min_length {
        Err(Rejection::TooShort {
            min_length: s.min_length,
        })
    } else {
        Ok(())
    }
}

/// Reject the root word itself
///
/// # Errors
/// `Rejection::IsRootWord`
pub fn not_root_word<D: Dictionary + ?Sized>(s: &Submission<'_, D>) -> Result<(), Rejection> {
    if s.candidate == s.round.root_word().text() {
        Err(Rejection::IsRootWord)
    } else {
        Ok(())
    }
}
