//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use hints::{find_words, remaining_words};
pub use simple::run_simple;
pub use survey::{SurveyStatistics, run_survey};
