//! Daily Wordle - CLI
//!
//! Play the daily word puzzle in a full-screen TUI or in plain line mode.

use anyhow::{Context, Result, ensure};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{run_simple, today_info},
    config::{DEFAULT_ROWS, GameConfig},
    core::{ScoringRule, Word},
    game::Session,
    output::print_today,
    wordlists::{ALLOWED, ANSWERS, Dictionary, embedded_dictionary, loader},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the five-letter word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play the puzzle of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Day zero of the answer list (YYYY-MM-DD)
    #[arg(long, global = true, default_value = "2022-01-01")]
    epoch: NaiveDate,

    /// Answer list file, one word per line, in daily order
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra guessable words file, one word per line
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Number of guesses
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Scoring rule: naive (default) or standard (repeated letters counted)
    #[arg(long, global = true, default_value = "naive")]
    scoring: ScoringRule,

    /// Duration of one tile flip in milliseconds
    #[arg(long, global = true, default_value_t = 500)]
    flip_ms: u64,

    /// Write logs to this file (play mode logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode: type a guess, press Enter
    Simple,

    /// Show which puzzle is up today, without giving the word away
    Today,
}

/// Load the answer sequence and the dictionary
///
/// Files override the embedded lists. Every answer is always guessable.
fn load_word_lists(
    answers_path: Option<&Path>,
    dictionary_path: Option<&Path>,
) -> Result<(Vec<Word>, Dictionary)> {
    let answers = match answers_path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read answer list {}", path.display()))?,
        None => loader::words_from_slice(ANSWERS),
    };

    let dictionary = match (dictionary_path, answers_path) {
        (None, None) => embedded_dictionary(),
        (Some(path), _) => {
            let extra = loader::load_from_file(path)
                .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
            answers.iter().chain(&extra).collect()
        }
        (None, Some(_)) => {
            let allowed = loader::words_from_slice(ALLOWED);
            answers.iter().chain(&allowed).collect()
        }
    };

    info!(answers = answers.len(), dictionary = dictionary.len(), "Word lists loaded");
    Ok((answers, dictionary))
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it only logs when given a file; line mode
/// logs warnings to stderr unless `RUST_LOG` says otherwise.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if tui => {}
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    ensure!(cli.rows > 0, "--rows must be at least 1");
    let (answers, dictionary) = load_word_lists(cli.answers.as_deref(), cli.dictionary.as_deref())?;

    let now = cli
        .date
        .map_or_else(|| Local::now().naive_local(), |d| d.and_time(NaiveTime::MIN));
    let config = GameConfig {
        rows: cli.rows,
        epoch: cli.epoch,
        scoring: cli.scoring,
        flip_duration: Duration::from_millis(cli.flip_ms),
        ..GameConfig::new()
    };

    match command {
        Commands::Play => run_play_command(config, now, &answers, dictionary),
        Commands::Simple => run_simple_command(config, now, &answers, dictionary),
        Commands::Today => {
            print_today(&today_info(now, config.epoch, answers.len()));
            Ok(())
        }
    }
}

fn run_simple_command(
    config: GameConfig,
    now: NaiveDateTime,
    answers: &[Word],
    dictionary: Dictionary,
) -> Result<()> {
    let session = Session::for_date(config, now, answers, dictionary);
    run_simple(session)
}

fn run_play_command(
    config: GameConfig,
    now: NaiveDateTime,
    answers: &[Word],
    dictionary: Dictionary,
) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};

    let session = Session::for_date(config, now, answers, dictionary);
    run_tui(App::new(session))
}
