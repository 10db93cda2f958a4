//! Wordle Engine - CLI
//!
//! Plays, solves, hides from and benchmarks Wordle games of four to nine
//! letters, on one board or several at once.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_engine::{
    commands::{Benchmark, run_hide, run_solve},
    core::{Dictionary, Word, WordId},
    output::{print_benchmark_result, print_game, print_tree},
    solver::{
        DEFAULT_MAX_ROUNDS, GuessScope, Scorer, Solver, SolverConfig, StrategyKind, TreeSearch,
        TreeSearchConfig,
    },
    wordlists::{
        SAMPLE_ANSWERS, SAMPLE_GUESSES,
        loader::{load_from_file, words_from_slice},
    },
};

/// Seed for the random answer sets of multi-board benchmarks
const SIMUL_SEED: u64 = 13;

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Minimax and entropy solver for Wordle and its multi-board variants",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word length, 4 to 9
    #[arg(long, global = true, default_value_t = 5)]
    size: usize,

    /// Answer list, one word per line (default: embedded five-letter sample)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra allowed guesses, one word per line
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Ranking criterion: minimax or entropy
    #[arg(short, long, global = true, default_value = "minimax")]
    solver: StrategyKind,

    /// Rounds to look ahead when ranking
    #[arg(short, long, global = true, default_value_t = 1)]
    depth: usize,

    /// Guesses explored per lookahead level
    #[arg(long, global = true)]
    beam: Option<usize>,

    /// Score patterns on demand instead of precomputing them
    #[arg(long, global = true)]
    lazy: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Auto-play against known answers, one board per answer
    Run {
        /// Answers, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        answer: Vec<String>,

        /// Opening guesses, comma separated
        #[arg(short, long, value_delimiter = ',')]
        guess: Vec<String>,
    },

    /// Get guess suggestions while playing a real game
    Solve {
        /// Opening guesses, comma separated
        #[arg(short, long, value_delimiter = ',')]
        guess: Vec<String>,
    },

    /// Guess against the evader
    Hide {
        /// Opening guesses, comma separated
        #[arg(short, long, value_delimiter = ',')]
        guess: Vec<String>,
    },

    /// Play every answer, or random multi-board games
    Benchmark {
        /// Opening guesses, comma separated
        #[arg(short, long, value_delimiter = ',')]
        guess: Vec<String>,

        /// Boards per game for random multi-board runs
        #[arg(long)]
        simul: Option<usize>,

        /// Number of multi-board games
        #[arg(long, default_value_t = 100)]
        runs: usize,
    },

    /// Build the decision tree minimizing total guesses
    Tree {
        /// Forced first guess
        #[arg(short, long)]
        guess: String,

        /// Cap on guesses tried per sub-pool
        #[arg(long)]
        limit: Option<usize>,

        /// Allow any dictionary word below the root
        #[arg(long)]
        universe: bool,

        /// Print every root-to-answer path
        #[arg(long)]
        paths: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_list(path: &Path, size: usize) -> Result<Vec<Word>> {
    load_from_file(path, size).with_context(|| format!("failed to read {}", path.display()))
}

/// Build the dictionary from the list flags
///
/// Without `--answers` the embedded sample lists are used, which only exist
/// for five letters.
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let answers = match &cli.answers {
        Some(path) => read_list(path, cli.size)?,
        None if cli.size == 5 => words_from_slice(SAMPLE_ANSWERS, 5),
        None => bail!("no embedded {}-letter word list, pass --answers", cli.size),
    };
    let guesses = match &cli.guesses {
        Some(path) => read_list(path, cli.size)?,
        None if cli.answers.is_none() => words_from_slice(SAMPLE_GUESSES, 5),
        None => Vec::new(),
    };
    Ok(Dictionary::new(cli.size, guesses, answers)?)
}

fn lookup_word(dictionary: &Dictionary, text: &str) -> Result<WordId> {
    let word = Word::new(text)?;
    dictionary
        .id_of(&word)
        .with_context(|| format!("{word} is not in the word list"))
}

fn lookup_words(dictionary: &Dictionary, words: &[String]) -> Result<Vec<WordId>> {
    words.iter().map(|text| lookup_word(dictionary, text)).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli)?;
    let scorer = if cli.lazy {
        Scorer::new(dictionary)
    } else {
        Scorer::precomputed(dictionary)
    };
    let config = SolverConfig {
        kind: cli.solver,
        depth: cli.depth,
        beam_width: cli.beam,
        max_rounds: DEFAULT_MAX_ROUNDS,
    };
    let solver = Solver::from_config(&scorer, &config);

    match &cli.command {
        Commands::Run { answer, guess } => run_run_command(&solver, answer, guess),
        Commands::Solve { guess } => run_solve_command(&solver, guess),
        Commands::Hide { guess } => run_hide_command(&scorer, guess),
        Commands::Benchmark { guess, simul, runs } => {
            run_benchmark_command(&solver, guess, *simul, *runs)
        }
        Commands::Tree {
            guess,
            limit,
            universe,
            paths,
        } => run_tree_command(&scorer, guess, *limit, *universe, *paths),
    }
}

fn run_run_command(solver: &Solver<'_>, answers: &[String], opening: &[String]) -> Result<()> {
    let dictionary = solver.scorer().dictionary();
    let answers = lookup_words(dictionary, answers)?;
    let opening = lookup_words(dictionary, opening)?;

    let game = match answers.as_slice() {
        [answer] => solver.run(*answer, &opening)?,
        _ => solver.run_simul(&answers, &opening)?,
    };
    print_game(dictionary, &game);
    Ok(())
}

fn run_solve_command(solver: &Solver<'_>, opening: &[String]) -> Result<()> {
    let opening = lookup_words(solver.scorer().dictionary(), opening)?;
    let outcome = run_solve(solver, &opening, io::stdin().lock(), &mut io::stdout())?;
    log::info!("solve finished: {outcome:?}");
    Ok(())
}

fn run_hide_command(scorer: &Scorer, opening: &[String]) -> Result<()> {
    let dictionary = scorer.dictionary();
    let opening = lookup_words(dictionary, opening)?;
    let outcome = run_hide(
        scorer,
        dictionary.answers(),
        &opening,
        io::stdin().lock(),
        &mut io::stdout(),
    )?;
    log::info!("hide finished: {outcome:?}");
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    opening: &[String],
    simul: Option<usize>,
    runs: usize,
) -> Result<()> {
    let dictionary = solver.scorer().dictionary();
    let benchmark = Benchmark::new()
        .with_opening(lookup_words(dictionary, opening)?)
        .with_progress(true);

    let result = match simul {
        Some(boards) => {
            println!("Running {runs} random {boards}-board games...");
            benchmark.run_simul(solver, boards, runs, SIMUL_SEED)?
        }
        None => {
            println!("Running benchmark on {} answers...", dictionary.answers().len());
            benchmark.run(solver, dictionary.answers())
        }
    };
    print_benchmark_result(dictionary, &result);
    Ok(())
}

fn run_tree_command(
    scorer: &Scorer,
    seed: &str,
    limit: Option<usize>,
    universe: bool,
    paths: bool,
) -> Result<()> {
    let dictionary = scorer.dictionary();
    let seed = lookup_word(dictionary, seed)?;
    let config = TreeSearchConfig {
        scope: if universe {
            GuessScope::Universe
        } else {
            GuessScope::Pool
        },
        candidate_limit: limit,
    };

    let search = TreeSearch::new(scorer, config);
    let tree = search.optimal_tree(seed, dictionary.answers())?;
    print_tree(dictionary, &tree, paths);
    Ok(())
}
