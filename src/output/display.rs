//! Display functions for command results

use super::formatters::{create_progress_bar, letter_tiles, word_count};
use crate::commands::{CheckResult, SurveyStatistics};
use crate::core::RootWord;
use crate::rules::Outcome;
use colored::Colorize;

/// Print the verdict for a single checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        letter_tiles(result.root.text()).bright_yellow().bold()
    );
    println!("Guess:     {}", result.input.trim().bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    match result.outcome {
        None => println!("{}", "Nothing to check: the guess is blank".bright_black()),
        Some(Outcome::Accepted { .. }) => {
            println!("{}", "✅ Accepted".green().bold());
        }
        Some(Outcome::Rejected(reason)) => {
            println!(
                "{} {} [{}]",
                "❌".red(),
                reason.title().red().bold(),
                reason.id().bright_black()
            );
            println!("   {}", reason.message(result.root.text()));
        }
    }
}

/// Print every findable word for a root, grouped by length
pub fn print_hints(root: &RootWord, words: &[String]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        letter_tiles(root.text()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if words.is_empty() {
        println!("\nNo words found.");
        return;
    }

    // Words arrive sorted longest first
    let mut current_len = 0;
    for word in words {
        if word.len() != current_len {
            current_len = word.len();
            print!("\n{:>2} letters: ", current_len.to_string().bright_cyan());
        }
        print!("{word} ");
    }
    println!("\n\n📊 {}", word_count(words.len()).bright_yellow().bold());
}

/// Print the result of a corpus survey
pub fn print_survey_result(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Corpus:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.roots_surveyed);
    if !stats.skipped.is_empty() {
        println!(
            "   Skipped:          {} ({})",
            stats.skipped.len(),
            stats.skipped.join(", ").yellow()
        );
    }
    println!("   Words findable:   {}", stats.total_words);
    println!(
        "   Average per root: {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    let max = stats.best_root.as_ref().map_or(0, |(_, n)| *n) as f64;

    if let Some((root, count)) = &stats.best_root {
        println!("\n🏆 {}", "Richest root:".bright_cyan().bold());
        println!(
            "   {root:<10} {} {count}",
            create_progress_bar(*count as f64, max, 30).green()
        );
    }

    if !stats.worst_roots.is_empty() {
        println!("\n📉 {}", "Sparsest roots:".bright_cyan().bold());
        for (root, count) in &stats.worst_roots {
            println!(
                "   {root:<10} {} {count}",
                create_progress_bar(*count as f64, max, 30).yellow()
            );
        }
    }
}
