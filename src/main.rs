//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, or score a single guess.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_play, score_guess},
    core::{DEFAULT_MAX_GUESSES, GameConfig, ScoringRule},
    output::print_guess,
    source::{Dictionary, FixedWord, WordSource},
    wordlists::loader::normalize,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Duplicate-letter scoring: first-pass (default) or canonical
    #[arg(short, long, global = true, default_value = "first-pass")]
    scoring: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Use this secret word instead of a random one
        #[arg(long)]
        word: Option<String>,
    },

    /// Score one guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => Dictionary::from_file(path).with_context(|| format!("Loading wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scoring = ScoringRule::from_name(&cli.scoring)
        .ok_or_else(|| anyhow!("Unknown scoring rule '{}'", cli.scoring))?;
    let config = GameConfig::default()
        .with_max_guesses(cli.max_guesses)
        .with_scoring(scoring);
    config.validate()?;

    debug!(?config, wordlist = %cli.wordlist, "Parsed command line");

    let command = cli.command.unwrap_or(Commands::Play { word: None });

    match command {
        Commands::Play { word } => run_play_command(&cli.wordlist, word.as_deref(), config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess, scoring),
    }
}

fn run_play_command(wordlist: &str, word: Option<&str>, config: GameConfig) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;

    let source: Box<dyn WordSource> = match word {
        Some(word) => {
            let secret = normalize(word)
                .ok_or_else(|| anyhow!("Invalid secret word '{word}': must be 5 letters"))?;
            Box::new(FixedWord::new(secret, dictionary))
        }
        None => Box::new(dictionary),
    };

    println!("\n{}\n", "W O R D L E".bright_green().bold());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    run_play(&source, config, &mut input, &mut stdout)
}

fn run_score_command(secret: &str, guess: &str, scoring: ScoringRule) -> Result<()> {
    let scored = score_guess(secret, guess, scoring)?;

    let mut stdout = io::stdout();
    print_guess(&mut stdout, &scored)?;
    println!("{}", scored.to_emoji());
    Ok(())
}
