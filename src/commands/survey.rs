//! Corpus survey
//!
//! Counts how many words can be found for every root word in the corpus.

use super::hints::find_words;
use crate::core::RootWord;
use crate::dictionary::WordListDictionary;
use crate::rules::GuessValidator;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Statistics from surveying a corpus
#[derive(Debug)]
pub struct SurveyStatistics {
    pub roots_surveyed: usize,
    /// Entries that are not valid root words
    pub skipped: Vec<String>,
    pub total_words: usize,
    pub average_words: f64,
    pub best_root: Option<(String, usize)>,
    pub worst_roots: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Count findable words for each root in `corpus` (or the first `limit`)
///
/// # Panics
///
/// Panics if the progress bar template fails to parse.
pub fn run_survey(
    corpus: &[String],
    dictionary: &WordListDictionary,
    validator: &GuessValidator,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = corpus
        .iter()
        .take(limit.unwrap_or(corpus.len()))
        .collect();

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut counts: Vec<(String, usize)> = Vec::with_capacity(roots.len());
    let mut skipped = Vec::new();

    for entry in roots {
        match RootWord::new(entry) {
            Ok(root) => {
                let found = find_words(&root, dictionary, validator).len();
                pb.set_message(format!("{root}: {found}"));
                counts.push((root.text().to_string(), found));
            }
            Err(e) => {
                log::warn!("Skipping corpus entry '{entry}': {e}");
                skipped.push(entry.clone());
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(counts, skipped, start.elapsed())
}

fn summarize(
    mut counts: Vec<(String, usize)>,
    skipped: Vec<String>,
    total_time: Duration,
) -> SurveyStatistics {
    let roots_surveyed = counts.len();
    let total_words: usize = counts.iter().map(|(_, n)| n).sum();
    let average_words = if roots_surveyed == 0 {
        0.0
    } else {
        total_words as f64 / roots_surveyed as f64
    };

    // Most words first, ties alphabetical
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let best_root = counts.first().cloned();
    let worst_roots = counts.iter().rev().take(5).cloned().collect();

    SurveyStatistics {
        roots_surveyed,
        skipped,
        total_words,
        average_words,
        best_root,
        worst_roots,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new("en", ["silk", "worm", "milk", "sent", "tens", "nest", "bat"])
    }

    #[test]
    fn survey_counts_per_root() {
        let corpus = vec!["silkworm".to_string(), "listen".to_string()];
        let stats = run_survey(&corpus, &dictionary(), &GuessValidator::default(), None);

        assert_eq!(stats.roots_surveyed, 2);
        // silk, worm, milk / sent, tens, nest
        assert_eq!(stats.total_words, 6);
        assert!((stats.average_words - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.best_root, Some(("listen".to_string(), 3)));
        assert_eq!(stats.worst_roots.first(), Some(&("silkworm".to_string(), 3)));
        assert!(stats.skipped.is_empty());
    }

    #[test]
    fn survey_respects_limit() {
        let corpus = vec!["silkworm".to_string(), "listen".to_string()];
        let stats = run_survey(&corpus, &dictionary(), &GuessValidator::default(), Some(1));
        assert_eq!(stats.roots_surveyed, 1);
        assert_eq!(stats.best_root, Some(("silkworm".to_string(), 3)));
    }

    #[test]
    fn survey_skips_invalid_entries() {
        let corpus = vec!["ox".to_string(), "listen".to_string()];
        let stats = run_survey(&corpus, &dictionary(), &GuessValidator::default(), None);
        assert_eq!(stats.roots_surveyed, 1);
        assert_eq!(stats.skipped, ["ox"]);
    }

    #[test]
    fn empty_survey() {
        let stats = run_survey(&[], &dictionary(), &GuessValidator::default(), None);
        assert_eq!(stats.roots_surveyed, 0);
        assert!(stats.average_words.abs() < f64::EPSILON);
        assert_eq!(stats.best_root, None);
        assert!(stats.worst_roots.is_empty());
    }
}
