//! Word Guess - CLI
//!
//! Wordle-style guessing game with TUI and line-based modes, plus dictionary lookups.

use std::fs::File;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_guess::{
    commands::{list_targets, lookup_word, run_simple},
    dictionary::{Dictionary, Lexicon, loader::load_from_file},
    game::{
        DEFAULT_MAX_CHANCES, DEFAULT_WORD_LENGTH, Game, GameConfig, MAX_CHANCES_RANGE,
        WORD_LENGTH_RANGE, WordSelector,
    },
    interactive::{App, run_tui},
    output::{print_lookup_result, print_targets_result},
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word; every answer comes with its meaning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters in the hidden word (3-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH, value_parser = parse_word_length)]
    length: usize,

    /// Guesses allowed per game (1-10)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_CHANCES, value_parser = parse_chances)]
    chances: usize,

    /// Dictionary file (word<TAB>definition per line) instead of the built-in one
    #[arg(short, long, global = true, env = "WORD_GUESS_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Seed for deterministic target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'word_guess=trace' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the meaning of a word
    Define {
        /// Word to look up
        word: String,
    },

    /// List the words that can be chosen as targets
    Words {
        /// Word length
        length: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let is_tui = matches!(command, Commands::Play);
    init_logging(cli.log_level.as_deref(), cli.log_file.as_deref(), is_tui)?;

    let dictionary = Dictionary::new(load_lexicon(cli.dictionary.as_deref())?);

    match command {
        Commands::Play => run_play_command(&cli, &dictionary),
        Commands::Simple => run_simple_command(&cli, &dictionary),
        Commands::Define { word } => {
            print_lookup_result(&lookup_word(&dictionary, &word));
            Ok(())
        }
        Commands::Words { length } => {
            print_targets_result(&list_targets(&dictionary, length));
            Ok(())
        }
    }
}

/// Install the global tracing subscriber
///
/// The TUI owns the terminal, so without a log file its logs are discarded.
fn init_logging(level: Option<&str>, log_file: Option<&Path>, is_tui: bool) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if is_tui => BoxMakeWriter::new(io::sink),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(log_file.is_none()),
        )
        .init();

    Ok(())
}

/// Load the dictionary file given with `-d`, or fall back to the embedded one
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            let lexicon = load_from_file(path)?;
            info!(path = %path.display(), entries = lexicon.len(), "loaded dictionary file");
            Ok(lexicon)
        }
        None => Ok(Lexicon::embedded()),
    }
}

fn selector(seed: Option<u64>) -> WordSelector {
    seed.map_or_else(WordSelector::from_os_rng, WordSelector::seeded)
}

fn run_play_command(cli: &Cli, dictionary: &Dictionary) -> Result<()> {
    let config = GameConfig::new(cli.length, cli.chances)?;
    let app = App::new(Game::new(dictionary, selector(cli.seed)), config);
    run_tui(app)
}

fn run_simple_command(cli: &Cli, dictionary: &Dictionary) -> Result<()> {
    let config = GameConfig::new(cli.length, cli.chances)?;
    let mut game = Game::new(dictionary, selector(cli.seed));
    run_simple(&mut game, config)
}

fn parse_word_length(value: &str) -> Result<usize, String> {
    parse_in_range(value, &WORD_LENGTH_RANGE)
}

fn parse_chances(value: &str) -> Result<usize, String> {
    parse_in_range(value, &MAX_CHANCES_RANGE)
}

fn parse_in_range(value: &str, range: &RangeInclusive<usize>) -> Result<usize, String> {
    let number: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    if range.contains(&number) {
        Ok(number)
    } else {
        Err(format!(
            "{number} is not in range {}-{}",
            range.start(),
            range.end()
        ))
    }
}
