//! Wordpool - CLI
//!
//! Spell words from a shared pool of letters. TUI play mode plus commands that
//! drive saved games from the shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;
use wordpool::{
    commands::{
        StartConfig, finish_game, leaderboard, run_benchmark, solve_letters, start_game,
        submit_word,
    },
    core::SessionId,
    engine::{Dictionary, MAX_WORD_LEN, MIN_WORD_LEN, Rules},
    game::{GameService, LEADERBOARD_SIZE},
    output::{
        print_benchmark_result, print_finish_summary, print_leaderboard, print_session_started,
        print_solve_result, print_submit_result,
    },
    puzzle::PUZZLE_LENGTH,
    store::{JsonFileStore, MemoryStore},
};

#[derive(Parser)]
#[command(
    name = "wordpool",
    about = "Word game: spell dictionary words from a pool of letters, each used once",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list, one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// JSON file holding saved games
    #[arg(short, long, global = true, default_value = "wordpool.json")]
    store: PathBuf,

    /// Shortest word accepted
    #[arg(long, global = true, default_value_t = MIN_WORD_LEN)]
    min_length: usize,

    /// Longest word accepted
    #[arg(long, global = true, default_value_t = MAX_WORD_LEN)]
    max_length: usize,

    /// Reject a word already accepted in the same game
    #[arg(long, global = true)]
    no_repeats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Player name
        #[arg(short, long, default_value = "player")]
        player: String,

        /// Number of letters per puzzle
        #[arg(short, long, default_value_t = PUZZLE_LENGTH)]
        length: usize,
    },

    /// Start a saved game and print its id
    Start {
        /// Player name
        #[arg(short, long)]
        player: String,

        /// Use these letters instead of a random puzzle
        #[arg(long)]
        puzzle: Option<String>,

        /// Number of letters in a random puzzle
        #[arg(short, long, default_value_t = PUZZLE_LENGTH)]
        length: usize,
    },

    /// Submit a word to a saved game
    Submit {
        /// Game id printed by `start`
        id: SessionId,

        /// The word to play
        word: String,
    },

    /// Finish a saved game and list the words that were still possible
    Finish {
        /// Game id printed by `start`
        id: SessionId,
    },

    /// Show the best words (or players) across all saved games
    Leaderboard {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = LEADERBOARD_SIZE)]
        limit: usize,

        /// Rank games by score instead of words
        #[arg(long)]
        players: bool,
    },

    /// List every dictionary word formable from the given letters
    Solve {
        /// Letter pool
        letters: String,
    },

    /// Measure word enumeration over random puzzles
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Letters per puzzle
        #[arg(short, long, default_value_t = PUZZLE_LENGTH)]
        length: usize,
    },
}

/// Install the logger
///
/// `RUST_LOG` wins when set. Otherwise `-v` raises the level from `warn`;
/// the TUI stays quiet so log lines do not tear the alternate screen.
fn init_logging(verbose: u8, tui: bool) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(if tui { LevelFilter::Off } else { level });
    builder.parse_default_env();
    builder.init();
}

/// Load the dictionary based on the -d flag
///
/// A missing or unreadable file leaves the dictionary unavailable: the game
/// still runs, but every word is rejected.
fn load_dictionary(source: &str) -> Dictionary {
    match source {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::load(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        player: "player".to_string(),
        length: PUZZLE_LENGTH,
    });
    init_logging(cli.verbose, matches!(command, Commands::Play { .. }));

    let dictionary = Arc::new(load_dictionary(&cli.dictionary));
    let rules = Rules {
        allow_repeat_words: !cli.no_repeats,
        ..Rules::with_lengths(cli.min_length, cli.max_length)
    };

    match command {
        Commands::Play { player, length } => run_play_command(dictionary, rules, &player, length),
        Commands::Start {
            player,
            puzzle,
            length,
        } => {
            let service = GameService::new(dictionary, JsonFileStore::new(&cli.store), rules);
            let config = StartConfig {
                player,
                puzzle,
                length,
            };
            let session = start_game(&service, config, &mut rand::rng())
                .context("Failed to start game")?;
            print_session_started(&session);
            Ok(())
        }
        Commands::Submit { id, word } => {
            let service = GameService::new(dictionary, JsonFileStore::new(&cli.store), rules);
            let result = submit_word(&service, id, &word)
                .with_context(|| format!("Failed to submit to game {id}"))?;
            print_submit_result(&result);
            Ok(())
        }
        Commands::Finish { id } => {
            let service = GameService::new(dictionary, JsonFileStore::new(&cli.store), rules);
            let summary =
                finish_game(&service, id).with_context(|| format!("Failed to finish game {id}"))?;
            print_finish_summary(&summary);
            Ok(())
        }
        Commands::Leaderboard { limit, players } => {
            let service = GameService::new(dictionary, JsonFileStore::new(&cli.store), rules);
            let board =
                leaderboard(&service, limit, players).context("Failed to read leaderboard")?;
            print_leaderboard(&board);
            Ok(())
        }
        Commands::Solve { letters } => {
            let result = solve_letters(&dictionary, &letters);
            print_solve_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, length } => {
            println!("Running benchmark on {count} random {length}-letter puzzles...");
            let result = run_benchmark(&dictionary, count, length, &mut rand::rng(), true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: Arc<Dictionary>,
    rules: Rules,
    player: &str,
    length: usize,
) -> Result<()> {
    use wordpool::interactive::{App, run_tui};

    let service = GameService::new(dictionary, MemoryStore::new(), rules);
    let app = App::new(service, player, length).context("Failed to start game")?;
    run_tui(app)
}
