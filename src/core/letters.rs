//! Letter multiset used for derivability checks
//!
//! A word can be formed from a root only if every letter it uses is available
//! in the root at least as many times as the word needs it. Repeated letters in
//! the candidate consume repeated occurrences from the pool.

use rustc_hash::FxHashMap;

/// A bag of letters with remaining counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding one entry per character of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) if none remain.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remove the letters of `word` one at a time, in order
    ///
    /// Stops at the first letter with no remaining occurrence and returns
    /// `false`; letters taken before that point stay removed.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let mut pool = LetterPool::from_word("listen");
    /// assert!(pool.take_word("sent"));
    /// assert_eq!(pool.remaining(), 2);
    ///
    /// // Only one 't' in "listen"
    /// assert!(!LetterPool::from_word("listen").take_word("settle"));
    /// ```
    pub fn take_word(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }

    /// Remaining occurrences of `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::from_word("alphabet");
        assert_eq!(pool.count('a'), 2);
        assert_eq!(pool.count('l'), 1);
        assert_eq!(pool.count('z'), 0);
        assert_eq!(pool.remaining(), 8);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::from_word("aab");
        assert!(pool.take('a'));
        assert_eq!(pool.count('a'), 1);
        assert!(pool.take('a'));
        assert!(!pool.take('a'));
        assert_eq!(pool.count('a'), 0);
        assert_eq!(pool.remaining(), 1);
    }

    #[test]
    fn take_word_is_a_bag_check_not_a_set_check() {
        // Set containment would accept "settle": s, e, t, l are all in "listen"
        assert!(!LetterPool::from_word("listen").take_word("settle"));
        assert!(!LetterPool::from_word("listen").take_word("tent"));
        assert!(LetterPool::from_word("alphabet").take_word("bath"));
        assert!(LetterPool::from_word("alphabet").take_word("alpha"));
        assert!(!LetterPool::from_word("alphabet").take_word("alphaa"));
    }

    #[test]
    fn take_word_exhausts_pool() {
        let mut pool = LetterPool::from_word("tens");
        assert!(pool.take_word("nets"));
        assert!(pool.is_empty());
    }

    #[test]
    fn take_word_rejects_foreign_characters() {
        assert!(!LetterPool::from_word("listen").take_word("li sten"));
        assert!(!LetterPool::from_word("listen").take_word("lis7"));
    }

    #[test]
    fn empty_word_is_always_formable() {
        assert!(LetterPool::from_word("abc").take_word(""));
        assert!(LetterPool::default().take_word(""));
    }
}
