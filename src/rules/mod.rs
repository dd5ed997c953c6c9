//! Guess validation
//!
//! A guess is normalized, then run through the rules in [`checks::ordered`].
//! The first failing rule decides the rejection; if every rule passes the
//! guess is recorded at the front of the round's accepted list.
//!
//! Precedence:
//! 1. Already used
//! 2. Not derivable from the root word's letters
//! 3. Not a real word
//! 4. Too short
//! 5. Is the root word

pub mod checks;
mod rejection;

pub use rejection::{Outcome, Rejection};

use crate::config::GameConfig;
use crate::core::{Round, normalize_guess};
use crate::dictionary::Dictionary;
use checks::Submission;

/// Applies the validation rules with a given configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessValidator {
    min_length: usize,
    language: String,
}

impl Default for GuessValidator {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GuessValidator {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            min_length: config.min_length,
            language: config.language.clone(),
        }
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Run the rules against an already-normalized guess
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first rule that fails.
    pub fn check<D>(&self, guess: &str, round: &Round, dictionary: &D) -> Result<(), Rejection>
    where
        D: Dictionary + ?Sized,
    {
        let submission = Submission {
            candidate: guess,
            round,
            dictionary,
            min_length: self.min_length,
            language: &self.language,
        };

        checks::ordered::<D>().iter().try_for_each(|(name, rule)| {
            rule(&submission).inspect_err(|rejection| {
                log::debug!("'{guess}' failed rule {name}: {}", rejection.id());
            })
        })
    }

    /// Judge raw input without touching the round
    ///
    /// Returns `None` for blank input. An `Accepted` outcome carries the score
    /// the round would have if the guess were submitted.
    #[must_use]
    pub fn evaluate<D>(&self, input: &str, round: &Round, dictionary: &D) -> Option<Outcome>
    where
        D: Dictionary + ?Sized,
    {
        let guess = normalize_guess(input)?;
        Some(match self.check(&guess, round, dictionary) {
            Ok(()) => Outcome::Accepted {
                score: round.score() + 1,
            },
            Err(rejection) => Outcome::Rejected(rejection),
        })
    }

    /// Judge raw input and record it in the round if accepted
    ///
    /// Blank input is ignored and returns `None`. A rejected guess leaves the
    /// round unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{RootWord, Round};
    /// use word_scramble::rules::{GuessValidator, Outcome, Rejection};
    ///
    /// let validator = GuessValidator::default();
    /// let mut round = Round::new(RootWord::new("silkworm").unwrap());
    /// let dictionary = |w: &str| w == "silk";
    ///
    /// assert_eq!(
    ///     validator.validate(" Silk ", &mut round, &dictionary),
    ///     Some(Outcome::Accepted { score: 1 })
    /// );
    /// assert_eq!(
    ///     validator.validate("silk", &mut round, &dictionary),
    ///     Some(Outcome::Rejected(Rejection::AlreadyUsed))
    /// );
    /// assert_eq!(validator.validate("   ", &mut round, &dictionary), None);
    /// ```
    pub fn validate<D>(&self, input: &str, round: &mut Round, dictionary: &D) -> Option<Outcome>
    where
        D: Dictionary + ?Sized,
    {
        let guess = normalize_guess(input)?;

        let outcome = match self.check(&guess, round, dictionary) {
            Ok(()) => {
                round.accept(guess.clone());
                Outcome::Accepted {
                    score: round.score(),
                }
            }
            Err(rejection) => Outcome::Rejected(rejection),
        };

        log::debug!("Guess '{guess}' against '{}': {outcome:?}", round.root_word());
        Some(outcome)
    }
}

/// Validate `input` against `round` with the default rules
///
/// Shorthand for [`GuessValidator::validate`] with a minimum length of 3 and
/// language `"en"`.
pub fn validate<D>(input: &str, round: &mut Round, dictionary: &D) -> Option<Outcome>
where
    D: Dictionary + ?Sized,
{
    GuessValidator::default().validate(input, round, dictionary)
}
