//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::hints::remaining_words;
use crate::dictionary::WordListDictionary;
use crate::game::Game;
use crate::output::formatters::letter_tiles;
use crate::rules::Outcome;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRound,
    Hint,
    Guess(String),
}

impl Command {
    /// Parse a line; anything not starting with ':' is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewRound,
            ":hint" | ":h" => Self::Hint,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if a new round cannot be started.
pub fn run_simple<R: Rng>(game: &mut Game<WordListDictionary, R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(game, &mut stdin.lock(), &mut stdout)
}

/// Game loop over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if a new round cannot be started.
pub fn play<R, I, O>(
    game: &mut Game<WordListDictionary, R>,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Commands: ':new' for a new word, ':hint' for a hint, ':quit' to exit\n")?;

    print_root(game, output)?;

    let mut line = String::new();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewRound => {
                writeln!(
                    output,
                    "\nYou found {} words in '{}'.",
                    game.score(),
                    game.root_word()
                )?;
                if let Err(e) = game.restart() {
                    log::error!("Could not start a new round: {e}");
                    writeln!(output, "{} {e}", "Can't restart:".red().bold())?;
                }
                print_root(game, output)?;
            }
            Command::Hint => {
                let remaining =
                    remaining_words(game.round(), game.dictionary(), game.validator());
                match remaining.first() {
                    Some(word) => writeln!(
                        output,
                        "💡 {} more to find. Try a {}-letter word starting with '{}'.",
                        remaining.len(),
                        word.len(),
                        word.chars().next().unwrap_or_default()
                    )?,
                    None => writeln!(output, "💡 You've found every word I know!")?,
                }
            }
            Command::Guess(guess) => match game.submit(&guess) {
                None => {}
                Some(Outcome::Accepted { score }) => {
                    writeln!(
                        output,
                        "{} {}",
                        "✓".green().bold(),
                        format!("Score: {score}").bright_cyan()
                    )?;
                }
                Some(Outcome::Rejected(reason)) => {
                    writeln!(
                        output,
                        "{} {}: {}",
                        "✗".red().bold(),
                        reason.title().red(),
                        reason.message(game.root_word().text())
                    )?;
                }
            },
        }
    }

    writeln!(
        output,
        "\n👋 Thanks for playing! Final score: {}\n",
        game.score()
    )?;
    Ok(())
}

fn print_root<D, R, O: Write>(game: &Game<D, R>, output: &mut O) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        letter_tiles(game.root_word().text()).bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}
