//! Word Chains - CLI
//!
//! Daily word ladder puzzle with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use env_logger::Env;
use word_chains::{
    commands::{describe_puzzle, measure_distance, run_calendar, run_simple},
    config::{DEFAULT_MAX_GUESSES, GameConfig},
    core::WordGraph,
    game::{DailyGame, JsonFileStore, MemoryStore, SAVE_FILE_NAME, SessionStore},
    output::{print_calendar_report, print_distance_report, print_puzzle_report},
    puzzle::{DifficultyBand, SelectorConfig},
    wordlists::{embedded_graph, load_graph},
};

#[derive(Parser)]
#[command(
    name = "word_chains",
    about = "Daily word ladder: change one letter at a time to reach the target word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word graph: 'embedded' (default), a JSON adjacency file, or a word list file
    #[arg(short, long, global = true, default_value = "embedded")]
    graph: String,

    /// File the day's progress is saved to
    #[arg(short, long, global = true, default_value = SAVE_FILE_NAME)]
    save_file: String,

    /// Play without saving progress
    #[arg(long, global = true)]
    no_save: bool,

    /// Day to play or inspect (YYYY-MM-DD, default: today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Shortest chain length a puzzle may have
    #[arg(long, global = true, default_value = "5")]
    min_moves: usize,

    /// Longest shortest-chain length a puzzle may have
    #[arg(long, global = true, default_value = "5")]
    max_moves: usize,

    /// Guesses allowed before the day is lost
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Selection attempts before giving up on a day
    #[arg(long, global = true, default_value = "10000")]
    max_attempts: u64,

    /// Show debug logs
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Show the puzzle of the day
    Puzzle {
        /// Also show an ideal path and the walk that picked the target
        #[arg(short, long)]
        reveal: bool,
    },

    /// Distance and a shortest chain between two words
    Distance {
        from: String,
        to: String,
    },

    /// Select the puzzles of consecutive days and report statistics
    Calendar {
        /// Number of days, starting at --date
        #[arg(short = 'n', long, default_value = "30")]
        days: usize,
    },
}

impl Cli {
    fn config(&self) -> Result<GameConfig> {
        if self.max_moves < self.min_moves {
            bail!(
                "--max-moves ({}) must not be below --min-moves ({})",
                self.max_moves,
                self.min_moves
            );
        }
        if self.max_guesses == 0 {
            bail!("--max-guesses must be at least 1");
        }
        let Some(high) = self.max_moves.checked_add(1) else {
            bail!("--max-moves ({}) is too large", self.max_moves);
        };
        let selector = SelectorConfig {
            band: DifficultyBand::new(self.min_moves, high),
            max_attempts: self.max_attempts,
            ..SelectorConfig::default()
        };
        Ok(GameConfig::new(selector, self.max_guesses))
    }
}

/// Load the word graph based on the --graph flag
fn load_word_graph(source: &str) -> Result<WordGraph> {
    match source {
        "embedded" => Ok(embedded_graph()),
        path => load_graph(path).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.debug);

    let config = cli.config()?;
    let graph = load_word_graph(&cli.graph)?;
    let pinned = cli.date;
    let today = move || pinned.unwrap_or_else(|| Local::now().date_naive());

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &graph, config, today, true),
        Commands::Simple => run_play_command(&cli, &graph, config, today, false),
        Commands::Puzzle { reveal } => {
            let report = describe_puzzle(&graph, today(), &config.selector)?;
            print_puzzle_report(&report, reveal);
            Ok(())
        }
        Commands::Distance { from, to } => {
            let report = measure_distance(&graph, &from, &to).map_err(|e| anyhow::anyhow!(e))?;
            print_distance_report(&report);
            Ok(())
        }
        Commands::Calendar { days } => {
            let report = run_calendar(&graph, today(), days, &config.selector, true);
            print_calendar_report(&report);
            if report.failures() > 0 {
                bail!("{} of {days} days have no puzzle", report.failures());
            }
            Ok(())
        }
    }
}

fn run_play_command<F>(
    cli: &Cli,
    graph: &WordGraph,
    config: GameConfig,
    today: F,
    tui: bool,
) -> Result<()>
where
    F: Fn() -> NaiveDate + Copy + 'static,
{
    if cli.no_save {
        run_game(graph, MemoryStore::new(), config, today, tui)
    } else {
        run_game(graph, JsonFileStore::new(&cli.save_file), config, today, tui)
    }
}

fn run_game<S, F>(
    graph: &WordGraph,
    store: S,
    config: GameConfig,
    today: F,
    tui: bool,
) -> Result<()>
where
    S: SessionStore,
    F: Fn() -> NaiveDate + Copy + 'static,
{
    let mut game = DailyGame::open(graph, store, today(), config)
        .context("Cannot start today's game")?;

    if tui {
        use word_chains::interactive::{App, run_tui};

        run_tui(App::new(game, today))
    } else {
        run_simple(&mut game, today).map_err(|e| anyhow::anyhow!(e))
    }
}
