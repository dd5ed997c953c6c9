//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::{check_word, find_words, run_simple, run_survey},
    config::{DEFAULT_LANGUAGE, DEFAULT_MIN_LENGTH, GameConfig},
    core::RootWord,
    game::Game,
    output::{print_check_result, print_hints, print_survey_result},
    rules::GuessValidator,
    wordlists::loader,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find as many words as you can hidden in a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word corpus: 'builtin' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "builtin")]
    roots: String,

    /// Dictionary: 'builtin' (default, English) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Language tag passed to the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Shortest word accepted
    #[arg(short, long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Seed for root word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// File to write logs to
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Check one word against a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every word that can be made from a root word
    Hints {
        /// The root word
        root: String,
    },

    /// Count findable words for every root in the corpus
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn setup_logging(level: LevelFilter, path: &Path) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(
        level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level, &cli.log_file)?;

    let config = GameConfig {
        min_length: cli.min_length,
        language: cli.language.clone(),
    };
    config.validate()?;

    let roots = loader::load_roots(&cli.roots)
        .with_context(|| format!("loading root words '{}'", cli.roots))?;
    let dictionary = loader::load_dictionary(&cli.dictionary, &config.language)
        .with_context(|| format!("loading dictionary '{}'", cli.dictionary))?;
    log::info!(
        "{} root words, {} dictionary words ({})",
        roots.len(),
        dictionary.len(),
        dictionary.language()
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use word_scramble::interactive::{App, run_tui};

            let game = Game::new(&config, roots, dictionary, rng)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = Game::new(&config, roots, dictionary, rng)?;
            run_simple(&mut game)
        }
        Commands::Check { root, word } => {
            let validator = GuessValidator::new(&config);
            let result = check_word(&root, &word, &dictionary, &validator)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Hints { root } => {
            let root = RootWord::new(&root)?;
            let validator = GuessValidator::new(&config);
            let words = find_words(&root, &dictionary, &validator);
            print_hints(&root, &words);
            Ok(())
        }
        Commands::Survey { limit } => {
            if roots.is_empty() {
                bail!("root word corpus is empty");
            }
            let validator = GuessValidator::new(&config);
            let count = limit.map_or(roots.len(), |n| n.min(roots.len()));
            println!("🎯 Surveying {count} root words...");
            let stats = run_survey(&roots, &dictionary, &validator, limit);
            print_survey_result(&stats);
            Ok(())
        }
    }
}
