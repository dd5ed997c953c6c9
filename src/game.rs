//! Game session
//!
//! Owns everything one player needs: the rules, the root word corpus, the
//! dictionary, a random source and the current round.

use crate::config::GameConfig;
use crate::core::{RootWord, Round};
use crate::dictionary::Dictionary;
use crate::error::CorpusError;
use crate::rules::{GuessValidator, Outcome};
use rand::Rng;

/// A single-player game session
pub struct Game<D, R> {
    validator: GuessValidator,
    corpus: Vec<String>,
    dictionary: D,
    rng: R,
    round: Round,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Start a session with a root word drawn from `corpus`
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if no root word can be drawn.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::config::GameConfig;
    /// use word_scramble::game::Game;
    /// use word_scramble::rules::Outcome;
    ///
    /// let mut game = Game::new(
    ///     &GameConfig::default(),
    ///     vec!["silkworm".to_string()],
    ///     |w: &str| w == "silk",
    ///     StdRng::seed_from_u64(1),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(game.root_word().text(), "silkworm");
    /// assert_eq!(game.submit("silk"), Some(Outcome::Accepted { score: 1 }));
    /// ```
    pub fn new(
        config: &GameConfig,
        corpus: Vec<String>,
        dictionary: D,
        mut rng: R,
    ) -> Result<Self, CorpusError> {
        let round = Round::start(&corpus, &mut rng)?;
        Ok(Self {
            validator: GuessValidator::new(config),
            corpus,
            dictionary,
            rng,
            round,
        })
    }

    /// Submit raw player input to the current round
    ///
    /// Returns `None` for blank input.
    pub fn submit(&mut self, input: &str) -> Option<Outcome> {
        self.validator
            .validate(input, &mut self.round, &self.dictionary)
    }

    /// Throw the current round away and start a new one
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if no root word can be drawn; the current round
    /// is kept in that case.
    pub fn restart(&mut self) -> Result<&RootWord, CorpusError> {
        crate::core::restart(&mut self.round, &self.corpus, &mut self.rng)?;
        Ok(self.round.root_word())
    }
}

impl<D, R> Game<D, R> {
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        self.round.root_word()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.round.score()
    }

    /// Accepted guesses, most recent first
    #[must_use]
    pub fn accepted_guesses(&self) -> &[String] {
        self.round.accepted_guesses()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub const fn validator(&self) -> &GuessValidator {
        &self.validator
    }

    #[must_use]
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }
}
