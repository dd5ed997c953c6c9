//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access:
//! the root word corpus and the English dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOTS, ROOTS_COUNT};
