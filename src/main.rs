//! Wordle Duel - CLI
//!
//! Two-player Wordle with TUI and CLI modes, plus a guess checker and a
//! bot-versus-bot simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_duel::{
    commands::{SimulationConfig, check_guess, run_simple, run_simulation},
    game::{GameConfig, GameMachine},
    output::{print_check_result, print_simulation_result},
    wordlists::{
        ALLOWED, WordBank, WordLists,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Two-player Wordle: take turns, score letters, win rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with game settings; flags below override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of rounds to play
    #[arg(short, long, global = true)]
    rounds: Option<u32>,

    /// Both players chase the same secret word each round
    #[arg(long, global = true)]
    shared_secret: bool,

    /// Seconds per turn (untimed when omitted)
    #[arg(short, long, global = true)]
    time_limit: Option<u32>,

    /// Answer list: 'embedded' (default) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Write logs to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        answer: String,
    },

    /// Play bot-versus-bot games and report score balance
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for the first game; game i uses seed + i
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so without a log file its output is dropped.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.with_writer(Arc::new(file)).with_ansi(false).init();
    } else if tui {
        builder.with_writer(std::io::sink).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

/// Defaults, then the config file, then command-line flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(rounds) = cli.rounds {
        config = config.with_max_rounds(rounds);
    }
    if cli.shared_secret {
        config = config.with_shared_secret(true);
    }
    if let Some(seconds) = cli.time_limit {
        config = config.with_turn_time_limit(Some(seconds));
    }

    Ok(config.validate()?)
}

/// Load word lists based on the -w flag
///
/// A custom file replaces the answer list; its words are also accepted as
/// guesses alongside the embedded valid-guess list.
fn load_wordlists(wordlist_mode: &str) -> Result<WordLists> {
    match wordlist_mode {
        "embedded" => Ok(WordLists::embedded()),
        path => {
            let answers = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            let lists = WordLists::new(answers, words_from_slice(ALLOWED))
                .with_context(|| format!("word list {path} has no usable words"))?;
            info!(path, answers = lists.answers().len(), "Custom word list loaded");
            Ok(lists)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = load_config(&cli)?;
    let lists = Arc::new(load_wordlists(&cli.wordlist)?);

    match command {
        Commands::Play => run_play_command(config, lists),
        Commands::Simple => run_simple_command(config, lists),
        Commands::Check { guess, answer } => run_check_command(guess, answer),
        Commands::Simulate { count, seed } => run_simulate_command(config, &lists, *count, *seed),
    }
}

fn run_play_command(config: GameConfig, lists: Arc<WordLists>) -> Result<()> {
    use wordle_duel::interactive::{App, run_tui};

    let game = GameMachine::try_new(config, WordBank::new(lists))?;
    run_tui(App::new(game))
}

fn run_simple_command(config: GameConfig, lists: Arc<WordLists>) -> Result<()> {
    let mut game = GameMachine::try_new(config, WordBank::new(lists))?;
    run_simple(&mut game)?;
    Ok(())
}

fn run_check_command(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer)?;
    print_check_result(&result);
    Ok(())
}

fn run_simulate_command(
    config: GameConfig,
    lists: &Arc<WordLists>,
    count: usize,
    seed: u64,
) -> Result<()> {
    println!("Simulating {count} bot games...");

    let config = SimulationConfig {
        games: count,
        seed,
        game: config,
    };
    let result = run_simulation(lists, &config)?;
    print_simulation_result(&result);
    Ok(())
}
