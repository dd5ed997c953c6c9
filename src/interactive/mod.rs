//! Interactive terminal interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
