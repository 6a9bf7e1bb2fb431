//! Codebreaker - CLI
//!
//! Code-breaking puzzle with TUI and CLI modes: crack a 4-digit number or a
//! 5-letter word.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use codebreaker::{
    commands::{GameOptions, create_share_link, run_simple},
    config::AppConfig,
    core::{AttemptLimit, Difficulty, Mode},
    game::{FileStore, GameStore, SessionManager, WordListSource},
    output::{print_share_link, print_stats},
    wordlists::{ALLOWED, ANSWERS, loader::WordSet},
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Code-breaking puzzle: crack a hidden number or word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the saved game and stats (overrides CODEBREAKER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Wordlist: 'builtin' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Puzzle variant: number or word
    #[arg(short, long)]
    mode: Option<Mode>,

    /// easy, medium, hard, expert or insane
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Share link (full URL or `code=...` query) to play a custom game
    #[arg(short, long, conflicts_with_all = ["mode", "difficulty"])]
    link: Option<String>,
}

impl From<PlayArgs> for GameOptions {
    fn from(args: PlayArgs) -> Self {
        Self {
            mode: args.mode,
            difficulty: args.difficulty,
            link: args.link,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(PlayArgs),

    /// Simple CLI mode (line-based, no TUI)
    Simple(PlayArgs),

    /// Create a link for a custom game
    Share {
        /// Puzzle variant: number or word
        #[arg(short, long)]
        mode: Mode,

        /// The code the other player must crack
        #[arg(short, long)]
        answer: String,

        /// Attempt budget
        #[arg(short = 'n', long, default_value = "10", conflicts_with = "unlimited")]
        max_attempts: u32,

        /// No attempt limit
        #[arg(short, long)]
        unlimited: bool,
    },

    /// Show statistics
    Stats,

    /// Discard the saved game (statistics are kept)
    Reset,
}

/// Load word sets based on the -w flag
///
/// Returns (`answers`, `allowed_guesses`)
/// - "builtin": embedded answers, embedded allowed guesses
/// - "answers": embedded answers for both (strict guessing)
/// - "<path>": custom file for both
fn load_wordlists(wordlist_mode: &str) -> Result<(WordSet, WordSet)> {
    match wordlist_mode {
        "builtin" => Ok((WordSet::from_slice(ANSWERS), WordSet::from_slice(ALLOWED))),
        "answers" => {
            let answers = WordSet::from_slice(ANSWERS);
            Ok((answers.clone(), answers))
        }
        path => {
            let words = WordSet::load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            Ok((words.clone(), words))
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!("{error}; using default configuration");
        AppConfig::default()
    });
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "Configuration loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(PlayArgs::default()));

    match command {
        Commands::Play(args) => {
            let manager = open_manager(&config, &cli.wordlist)?;
            run_play_command(manager, &args.into())
        }
        Commands::Simple(args) => {
            let mut manager = open_manager(&config, &cli.wordlist)?;
            run_simple(&mut manager, &args.into()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Share {
            mode,
            answer,
            max_attempts,
            unlimited,
        } => {
            let limit = if unlimited {
                AttemptLimit::Unlimited
            } else {
                AttemptLimit::Finite(max_attempts)
            };
            let link = create_share_link(mode, &answer, limit, &config.base_url)?;
            print_share_link(&link.descriptor, &link.token, &link.url);
            Ok(())
        }
        Commands::Stats => {
            let store = FileStore::new(&config.data_dir);
            let stats = store.load_stats().context("Failed to read statistics")?;
            print_stats(&stats);
            Ok(())
        }
        Commands::Reset => {
            let mut store = FileStore::new(&config.data_dir);
            store.save_game(None).context("Failed to remove saved game")?;
            println!("Saved game cleared.");
            Ok(())
        }
    }
}

fn open_manager(
    config: &AppConfig,
    wordlist: &str,
) -> Result<SessionManager<WordListSource, FileStore>> {
    let (answers, allowed) = load_wordlists(wordlist)?;
    let source = WordListSource::new(answers, allowed)?;
    let store = FileStore::new(&config.data_dir);
    Ok(SessionManager::new(source, store, config.show_misplaced))
}

fn run_play_command(
    manager: SessionManager<WordListSource, FileStore>,
    options: &GameOptions,
) -> Result<()> {
    use codebreaker::interactive::{App, run_tui};

    let app = App::new(manager, options)?;
    run_tui(app)
}
