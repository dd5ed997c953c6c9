//! Round state
//!
//! A round pairs one root word with the guesses accepted against it so far.
//! Rounds are never reset in place: a restart builds a new `Round` and the old
//! one is dropped.

use super::{RootWord, selector};
use crate::error::CorpusError;
use rand::Rng;

/// State of a single round of play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: RootWord,
    /// Most recent first
    accepted_guesses: Vec<String>,
}

impl Round {
    /// Start a round against a known root word
    #[must_use]
    pub const fn new(root_word: RootWord) -> Self {
        Self {
            root_word,
            accepted_guesses: Vec::new(),
        }
    }

    /// Start a round against a root word drawn uniformly from `corpus`
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if the corpus is empty or the drawn entry is not
    /// a usable root word.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::core::Round;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let round = Round::start(&["silkworm"], &mut rng).unwrap();
    /// assert_eq!(round.root_word().text(), "silkworm");
    /// assert_eq!(round.score(), 0);
    /// ```
    pub fn start<S, R>(corpus: &[S], rng: &mut R) -> Result<Self, CorpusError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let root_word = selector::select(corpus, rng)?;
        log::info!("Starting round with root word '{root_word}'");
        Ok(Self::new(root_word))
    }

    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted guesses, most recent first
    #[inline]
    #[must_use]
    pub fn accepted_guesses(&self) -> &[String] {
        &self.accepted_guesses
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.accepted_guesses.len()
    }

    /// Whether `word` has already been accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.accepted_guesses.iter().any(|guess| guess == word)
    }

    /// Record an accepted guess at the front of the list
    ///
    /// Callers must have run the word through the validation rules first.
    pub(crate) fn accept(&mut self, word: String) {
        debug_assert!(!self.is_used(&word), "guess '{word}' accepted twice");
        debug_assert_ne!(word, self.root_word.text());
        self.accepted_guesses.insert(0, word);
    }
}

/// Replace `round` with a fresh round drawn from `corpus`
///
/// The previous round is discarded only when a new one could be built; on
/// error `round` is left as it was.
///
/// # Errors
///
/// Returns `CorpusError` if no root word can be drawn.
pub fn restart<S, R>(round: &mut Round, corpus: &[S], rng: &mut R) -> Result<(), CorpusError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    *round = Round::start(corpus, rng)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(root: &str) -> Round {
        Round::new(RootWord::new(root).unwrap())
    }

    #[test]
    fn new_round_is_empty() {
        let round = round("alphabet");
        assert_eq!(round.root_word().text(), "alphabet");
        assert!(round.accepted_guesses().is_empty());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn accept_inserts_most_recent_first() {
        let mut round = round("alphabet");
        round.accept("bat".to_string());
        round.accept("tab".to_string());
        round.accept("heal".to_string());

        assert_eq!(round.accepted_guesses(), ["heal", "tab", "bat"]);
        assert_eq!(round.score(), 3);
        assert!(round.is_used("tab"));
        assert!(!round.is_used("lap"));
    }

    #[test]
    fn start_with_empty_corpus_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let corpus: [&str; 0] = [];
        assert_eq!(Round::start(&corpus, &mut rng), Err(CorpusError::Empty));
    }

    #[test]
    fn restart_replaces_the_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut current = round("alphabet");
        current.accept("bat".to_string());

        restart(&mut current, &["silkworm"], &mut rng).unwrap();

        assert_eq!(current.root_word().text(), "silkworm");
        assert_eq!(current.score(), 0);
    }

    #[test]
    fn failed_restart_keeps_the_old_round() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut current = round("alphabet");
        current.accept("bat".to_string());

        let corpus: [&str; 0] = [];
        assert!(restart(&mut current, &corpus, &mut rng).is_err());

        assert_eq!(current.root_word().text(), "alphabet");
        assert_eq!(current.accepted_guesses(), ["bat"]);
    }

    #[test]
    fn repeated_restarts_always_yield_empty_rounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let corpus = ["alphabet", "silkworm", "triangle"];
        for _ in 0..20 {
            let round = Round::start(&corpus, &mut rng).unwrap();
            assert!(corpus.contains(&round.root_word().text()));
            assert_eq!(round.score(), 0);
        }
    }
}
