//! Word Scramble
//!
//! A word-derivation game: a root word is drawn at random and the player finds
//! real words that can be spelled from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, Round};
//! use word_scramble::rules::{Outcome, Rejection, validate};
//!
//! let mut round = Round::new(RootWord::new("listen").unwrap());
//! let dictionary = |w: &str| matches!(w, "sent" | "tens" | "settle");
//!
//! assert_eq!(validate("sent", &mut round, &dictionary), Some(Outcome::Accepted { score: 1 }));
//! assert_eq!(
//!     validate("settle", &mut round, &dictionary),
//!     Some(Outcome::Rejected(Rejection::NotDerivable))
//! );
//! ```

// Core domain types
pub mod core;

// Guess validation rules
pub mod rules;

// Real-word lookup
pub mod dictionary;

// Game session
pub mod game;

// Configuration and errors
pub mod config;
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
