//! Word finder
//!
//! Lists every dictionary word that a fresh round of a given root would accept.

use crate::core::{RootWord, Round};
use crate::dictionary::WordListDictionary;
use crate::rules::GuessValidator;
use rayon::prelude::*;

/// All words the validator would accept against a fresh round of `root`
///
/// Sorted longest first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::commands::find_words;
/// use word_scramble::core::RootWord;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::rules::GuessValidator;
///
/// let dictionary = WordListDictionary::new("en", ["silk", "worm", "milk", "ox"]);
/// let root = RootWord::new("silkworm").unwrap();
/// let words = find_words(&root, &dictionary, &GuessValidator::default());
/// assert_eq!(words, ["milk", "silk", "worm"]);
/// ```
#[must_use]
pub fn find_words(
    root: &RootWord,
    dictionary: &WordListDictionary,
    validator: &GuessValidator,
) -> Vec<String> {
    let round = Round::new(root.clone());
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut found: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| validator.check(word, &round, dictionary).is_ok())
        .map(|&word| word.to_string())
        .collect();

    found.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    found
}

/// Words from [`find_words`] that the round has not accepted yet
#[must_use]
pub fn remaining_words(
    round: &Round,
    dictionary: &WordListDictionary,
    validator: &GuessValidator,
) -> Vec<String> {
    find_words(round.root_word(), dictionary, validator)
        .into_iter()
        .filter(|word| !round.is_used(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::validate;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            ["sent", "tens", "nest", "net", "listen", "silent", "settle", "at", "lens"],
        )
    }

    #[test]
    fn finds_only_acceptable_words() {
        let root = RootWord::new("listen").unwrap();
        let words = find_words(&root, &dictionary(), &GuessValidator::default());

        // "listen" is the root, "settle" needs two t's, "at" lacks an 'a'
        assert_eq!(words, ["silent", "lens", "nest", "sent", "tens", "net"]);
    }

    #[test]
    fn every_found_word_is_accepted() {
        let dictionary = dictionary();
        let root = RootWord::new("listen").unwrap();
        let mut round = Round::new(root.clone());

        for word in find_words(&root, &dictionary, &GuessValidator::default()) {
            assert!(validate(&word, &mut round, &dictionary).unwrap().is_accepted());
        }
    }

    #[test]
    fn remaining_excludes_accepted() {
        let dictionary = dictionary();
        let mut round = Round::new(RootWord::new("listen").unwrap());
        validate("silent", &mut round, &dictionary);
        validate("net", &mut round, &dictionary);

        let remaining = remaining_words(&round, &dictionary, &GuessValidator::default());
        assert_eq!(remaining, ["lens", "nest", "sent", "tens"]);
    }

    #[test]
    fn no_words_for_unrelated_root() {
        let root = RootWord::new("xyz").unwrap();
        assert!(find_words(&root, &dictionary(), &GuessValidator::default()).is_empty());
    }
}
