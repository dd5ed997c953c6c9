//! Validation outcomes and their presentation text

use std::fmt;

/// Why a guess was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Already accepted earlier this round
    AlreadyUsed,
    /// Needs letters the root word does not have (or not enough of them)
    NotDerivable,
    /// The dictionary does not know the word
    NotAWord,
    /// Shorter than the configured minimum
    TooShort { min_length: usize },
    /// Identical to the root word
    IsRootWord,
}

impl Rejection {
    /// Stable identifier for programmatic use
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "already_used",
            Self::NotDerivable => "not_derivable",
            Self::NotAWord => "not_a_word",
            Self::TooShort { .. } => "too_short",
            Self::IsRootWord => "is_root_word",
        }
    }

    /// Short headline for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotDerivable => "Word not possible",
            Self::NotAWord => "Word not recognized",
            Self::TooShort { .. } => "Word too short",
            Self::IsRootWord => "That's the root word",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotDerivable => format!("You can't spell that word from '{root_word}'!"),
            Self::NotAWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort { min_length } => {
                format!("Words need at least {min_length} letters.")
            }
            Self::IsRootWord => format!("Find words inside '{root_word}', not '{root_word}' itself!"),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of submitting a non-blank guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess recorded; `score` is the new number of accepted guesses
    Accepted { score: usize },
    /// Guess turned down; the round is unchanged
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Accepted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct() {
        let all = [
            Rejection::AlreadyUsed,
            Rejection::NotDerivable,
            Rejection::NotAWord,
            Rejection::TooShort { min_length: 3 },
            Rejection::IsRootWord,
        ];
        let ids: std::collections::HashSet<_> = all.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn messages_mention_root_word() {
        assert_eq!(
            Rejection::NotDerivable.message("silkworm"),
            "You can't spell that word from 'silkworm'!"
        );
        assert!(Rejection::IsRootWord.message("silkworm").contains("silkworm"));
    }

    #[test]
    fn too_short_message_uses_min_length() {
        assert_eq!(
            Rejection::TooShort { min_length: 4 }.message("alphabet"),
            "Words need at least 4 letters."
        );
    }

    #[test]
    fn display_is_title() {
        assert_eq!(Rejection::AlreadyUsed.to_string(), "Word used already");
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Accepted { score: 1 }.is_accepted());
        assert_eq!(Outcome::Accepted { score: 1 }.rejection(), None);

        let rejected = Outcome::Rejected(Rejection::NotAWord);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(Rejection::NotAWord));
    }
}
