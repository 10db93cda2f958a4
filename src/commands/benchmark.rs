//! Benchmark command
//!
//! Plays the solver against many answers and aggregates the guess counts.

use crate::core::WordId;
use crate::error::SolverError;
use crate::solver::{Game, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// A game the solver did not finish
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkFailure {
    pub answers: Vec<WordId>,
    pub error: SolverError,
}

/// Result of a benchmark run
///
/// Everything except `failures` is computed over the solved games only.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Solved games
    pub games: usize,
    pub total_guesses: usize,
    /// Rounds needed -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<BenchmarkFailure>,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub opening: Vec<WordId>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Aggregate finished games
    ///
    /// Each game is its answer set plus either the rounds it took or the
    /// error that stopped it.
    pub fn from_games(
        games: impl IntoIterator<Item = (Vec<WordId>, Result<usize, SolverError>)>,
        opening: Vec<WordId>,
        duration: Duration,
    ) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failures = Vec::new();
        for (answers, outcome) in games {
            match outcome {
                Ok(rounds) => *distribution.entry(rounds).or_insert(0) += 1,
                Err(error) => failures.push(BenchmarkFailure { answers, error }),
            }
        }

        let games: usize = distribution.values().sum();
        let total_guesses: usize = distribution
            .iter()
            .map(|(rounds, count)| rounds * count)
            .sum();
        let (mean, std_dev) = if games == 0 {
            (0.0, 0.0)
        } else {
            let mean = total_guesses as f64 / games as f64;
            let variance = distribution
                .iter()
                .map(|(&rounds, &count)| count as f64 * (rounds as f64 - mean).powi(2))
                .sum::<f64>()
                / games as f64;
            (mean, variance.sqrt())
        };

        Self {
            games,
            total_guesses,
            min_guesses: distribution.keys().next().copied().unwrap_or(0),
            max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            failures,
            mean,
            std_dev,
            opening,
            duration,
        }
    }

    /// Games attempted, solved or not
    #[must_use]
    pub fn played(&self) -> usize {
        self.games + self.failures.len()
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.played() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Benchmark settings
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    opening: Vec<WordId>,
    progress: bool,
}

impl Benchmark {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Guesses forced at the start of every game
    #[must_use]
    pub fn with_opening(mut self, opening: Vec<WordId>) -> Self {
        self.opening = opening;
        self
    }

    /// Show a progress bar on stderr
    #[must_use]
    pub const fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Play one game per answer
    pub fn run<S: Strategy>(&self, solver: &Solver<'_, S>, answers: &[WordId]) -> BenchmarkResult {
        let mut answers = answers.to_vec();
        answers.sort_unstable();
        let sets: Vec<Vec<WordId>> = answers.into_iter().map(|answer| vec![answer]).collect();
        self.play(solver, sets)
    }

    /// Play `runs` games on `boards` boards each
    ///
    /// Answer sets are drawn without replacement from the solver's pool with
    /// a generator seeded by `seed`, so the same seed plays the same games.
    /// Asking for more boards than the pool holds plays one board per answer.
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if `boards` is zero
    /// - `SolverError::EmptyPool` if the solver has no answers to draw from
    pub fn run_simul<S: Strategy>(
        &self,
        solver: &Solver<'_, S>,
        boards: usize,
        runs: usize,
        seed: u64,
    ) -> Result<BenchmarkResult, SolverError> {
        let pool = solver.pool();
        if boards == 0 {
            return Err(SolverError::InvalidInput(
                "a game needs at least one board".to_string(),
            ));
        }
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        let boards = if boards > pool.len() {
            log::warn!(
                "only {} answers to draw from, playing {} boards instead of {boards}",
                pool.len(),
                pool.len()
            );
            pool.len()
        } else {
            boards
        };

        let mut rng = StdRng::seed_from_u64(seed);
        let sets: Vec<Vec<WordId>> = (0..runs)
            .map(|_| pool.choose_multiple(&mut rng, boards).copied().collect())
            .collect();
        Ok(self.play(solver, sets))
    }

    fn play<S: Strategy>(&self, solver: &Solver<'_, S>, sets: Vec<Vec<WordId>>) -> BenchmarkResult {
        let bar = self.progress_bar(sets.len());
        let start = Instant::now();

        let games: Vec<(Vec<WordId>, Result<usize, SolverError>)> = sets
            .into_par_iter()
            .map(|answers| {
                let outcome = match answers.as_slice() {
                    [answer] => solver.run(*answer, &self.opening),
                    _ => solver.run_simul(&answers, &self.opening),
                }
                .map(|game| Game::rounds(&game));
                bar.inc(1);
                (answers, outcome)
            })
            .collect();

        bar.finish_and_clear();
        let result = BenchmarkResult::from_games(games, self.opening.clone(), start.elapsed());
        log::info!(
            "benchmark: {} solved, {} failed, mean {:.4}",
            result.games,
            result.failures.len(),
            result.mean
        );
        result
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar
    }
}
