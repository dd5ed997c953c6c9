//! TUI application state and logic

use crate::commands::find_words;
use crate::dictionary::WordListDictionary;
use crate::game::Game;
use crate::output::formatters::word_count;
use crate::rules::Outcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the box will hold
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App {
    pub game: Game<WordListDictionary, StdRng>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Words the current root allows in total
    pub possible_words: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub title: String,
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: usize,
}

impl App {
    #[must_use]
    pub fn new(game: Game<WordListDictionary, StdRng>) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            possible_words: 0,
            should_quit: false,
        };
        app.refresh_possible_words();
        app.add_message(
            "Welcome!",
            "Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app
    }

    fn refresh_possible_words(&mut self) {
        self.possible_words = find_words(
            self.game.root_word(),
            self.game.dictionary(),
            self.game.validator(),
        )
        .len();
    }

    /// Submit whatever is in the input box
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            None => {}
            Some(Outcome::Accepted { score }) => {
                let word = self.game.accepted_guesses()[0].clone();
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.add_message(
                    "Nice!",
                    &format!("'{word}' accepted, {} found", word_count(score)),
                    MessageStyle::Success,
                );
            }
            Some(Outcome::Rejected(reason)) => {
                let text = reason.message(self.game.root_word().text());
                self.add_message(reason.title(), &text, MessageStyle::Error);
            }
        }
    }

    /// Start a new round with a fresh root word
    pub fn new_round(&mut self) {
        let finished = self.game.score();

        match self.game.restart() {
            Ok(root) => {
                let root = root.to_string();
                self.stats.rounds_played += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.refresh_possible_words();
                self.add_message(
                    "New round",
                    &format!("Last round: {}. Now try '{root}'.", word_count(finished)),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                log::error!("Could not start a new round: {e}");
                self.add_message("Can't restart", &e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, title: &str, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            title: title.to_string(),
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < MAX_INPUT_LEN {
            self.input_buffer.push(c);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('r' | 'n') if ctrl => app.new_round(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "Session over: {} rounds, {} words",
        app.stats.rounds_played + 1,
        app.stats.words_found
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;

    fn app() -> App {
        let game = Game::new(
            &GameConfig::default(),
            vec!["silkworm".to_string()],
            WordListDictionary::new("en", ["silk", "worm", "milk", "silkworm"]),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        App::new(game)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_input();
    }

    #[test]
    fn new_app_counts_possible_words() {
        let app = app();
        assert_eq!(app.possible_words, 3);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn accepted_word_updates_stats() {
        let mut app = app();
        type_word(&mut app, "silk");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.score(), 1);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejected_word_shows_reason() {
        let mut app = app();
        type_word(&mut app, "silk");
        type_word(&mut app, "silk");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.title, "Word used already");
        assert_eq!(app.game.score(), 1);
    }

    #[test]
    fn blank_submit_does_nothing() {
        let mut app = app();
        let before = app.messages.len();
        type_word(&mut app, "   ");
        assert_eq!(app.messages.len(), before);
        assert_eq!(app.game.score(), 0);
    }

    #[test]
    fn new_round_resets_game() {
        let mut app = app();
        type_word(&mut app, "worm");
        app.new_round();

        assert_eq!(app.game.score(), 0);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.best_score, 1);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn failed_restart_is_not_counted() {
        let game = (0..)
            .find_map(|seed| {
                Game::new(
                    &GameConfig::default(),
                    vec!["silkworm".to_string(), "ab".to_string()],
                    WordListDictionary::new("en", ["silk", "worm"]),
                    StdRng::seed_from_u64(seed),
                )
                .ok()
            })
            .unwrap();
        let mut app = App::new(game);

        let mut restarted = 0;
        let mut failed = 0;
        for _ in 0..30 {
            app.new_round();
            match app.messages.last().unwrap().style {
                MessageStyle::Info => restarted += 1,
                _ => failed += 1,
            }
        }

        assert!(failed > 0);
        assert_eq!(app.stats.rounds_played, restarted);
        assert_eq!(app.game.root_word().text(), "silkworm");
    }

    #[test]
    fn input_is_capped() {
        let mut app = app();
        for _ in 0..100 {
            app.push_char('a');
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for _ in 0..10 {
            type_word(&mut app, "xyz");
        }
        assert_eq!(app.messages.len(), 5);
    }
}
