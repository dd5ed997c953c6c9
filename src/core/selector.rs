//! Root word selection
//!
//! Draws one entry uniformly at random from a corpus. An empty corpus is an
//! error, never an excuse to fall back to a built-in word.

use super::RootWord;
use crate::error::CorpusError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a root word uniformly at random from `corpus`
///
/// The RNG is supplied by the caller so tests and `--seed` runs are
/// reproducible.
///
/// # Errors
///
/// - `CorpusError::Empty` if `corpus` has no entries
/// - `CorpusError::InvalidEntry` if the drawn entry is not a valid root word
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_scramble::core::select;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let root = select(&["silkworm"], &mut rng).unwrap();
/// assert_eq!(root.text(), "silkworm");
/// ```
pub fn select<S, R>(corpus: &[S], rng: &mut R) -> Result<RootWord, CorpusError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let entry: &str = corpus.choose(rng).ok_or(CorpusError::Empty)?.as_ref();

    RootWord::new(entry).map_err(|source| CorpusError::InvalidEntry {
        word: entry.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RootWordError;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_corpus_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let corpus: Vec<String> = Vec::new();
        assert_eq!(select(&corpus, &mut rng), Err(CorpusError::Empty));
    }

    #[test]
    fn single_entry_corpus_always_selects_it() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            assert_eq!(select(&["silkworm"], &mut rng).unwrap().text(), "silkworm");
        }
    }

    #[test]
    fn invalid_entry_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select(&["no"], &mut rng),
            Err(CorpusError::InvalidEntry {
                word: "no".to_string(),
                source: RootWordError::TooShort { len: 2, min: 3 },
            })
        );
    }

    #[test]
    fn same_seed_same_selection() {
        let corpus = ["alphabet", "silkworm", "triangle", "notebook", "umbrella"];
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                select(&corpus, &mut a).unwrap(),
                select(&corpus, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let corpus = ["alphabet", "silkworm", "triangle"];
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let root = select(&corpus, &mut rng).unwrap();
            let idx = corpus.iter().position(|w| *w == root.text()).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    proptest! {
        #[test]
        fn selection_is_a_corpus_member(
            corpus in prop::collection::vec("[a-z]{3,10}", 1..20),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let root = select(&corpus, &mut rng).unwrap();
            prop_assert!(corpus.iter().any(|w| w == root.text()));
        }
    }
}
