//! Guess ranking across several boards that share one guess stream
//!
//! Every candidate guess is scored against each active board's pool and the
//! per-board scores are combined: the maximum of the worst cases for minimax,
//! the sum of the bits for entropy.

use super::entropy::{self, EntropyGuess};
use super::partition::Histogram;
use super::scorer::Scorer;
use super::strategy::{GuessScore, RankedGuess, StrategyKind};
use crate::core::WordId;
use crate::error::SolverError;
use rayon::prelude::*;
use std::cmp::{Ordering, Reverse};

/// Combined minimax score of one guess over every active board
#[derive(Debug, Clone, Copy)]
struct SimulMinimax {
    word: WordId,
    largest: usize,
    total: usize,
    /// Product over boards of the fraction of the pool left in the worst case
    fraction: f64,
    is_candidate: bool,
    buckets: usize,
}

impl SimulMinimax {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        (self.largest, self.total)
            .cmp(&(other.largest, other.total))
            .then_with(|| self.fraction.total_cmp(&other.fraction))
            .then_with(|| {
                (!self.is_candidate, Reverse(self.buckets), self.word).cmp(&(
                    !other.is_candidate,
                    Reverse(other.buckets),
                    other.word,
                ))
            })
    }
}

fn score_minimax(
    scorer: &Scorer,
    histogram: &mut Histogram,
    pools: &[&[WordId]],
    guess: WordId,
) -> SimulMinimax {
    let mut score = SimulMinimax {
        word: guess,
        largest: 0,
        total: 0,
        fraction: 1.0,
        is_candidate: false,
        buckets: 0,
    };
    for pool in pools {
        histogram.fill(scorer, guess, pool);
        let largest = histogram.largest();
        score.largest = score.largest.max(largest);
        score.total += largest;
        score.fraction *= largest as f64 / pool.len() as f64;
        score.is_candidate |= histogram.contains_perfect();
        score.buckets += histogram.num_buckets();
    }
    score
}

fn score_entropy(
    scorer: &Scorer,
    histogram: &mut Histogram,
    pools: &[&[WordId]],
    guess: WordId,
) -> EntropyGuess {
    let mut score = EntropyGuess {
        word: guess,
        is_candidate: false,
        bits: 0.0,
    };
    for pool in pools {
        histogram.fill(scorer, guess, pool);
        score.bits += histogram.entropy();
        score.is_candidate |= histogram.contains_perfect();
    }
    score
}

/// Choose one guess for all active boards
///
/// `pools` holds the candidate pool of every active board. If a board is down
/// to a single candidate, that word is played.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if there are no pools or any pool is
/// empty, and `SolverError::EmptyGuessUniverse` if `universe` is empty.
pub fn rank(
    scorer: &Scorer,
    pools: &[&[WordId]],
    universe: &[WordId],
    kind: StrategyKind,
) -> Result<RankedGuess, SolverError> {
    if pools.is_empty() || pools.iter().any(|pool| pool.is_empty()) {
        return Err(SolverError::EmptyPool);
    }
    if universe.is_empty() {
        return Err(SolverError::EmptyGuessUniverse);
    }

    let forced = pools
        .iter()
        .filter_map(|pool| match pool {
            [only] if universe.contains(only) => Some(*only),
            _ => None,
        })
        .next();
    if let Some(word) = forced {
        return Ok(RankedGuess {
            word,
            is_candidate: true,
            score: GuessScore::Forced,
        });
    }

    let size = scorer.word_size();
    let best = match kind {
        StrategyKind::Minimax => universe
            .par_iter()
            .map_init(
                || Histogram::new(size),
                |histogram, &guess| score_minimax(scorer, histogram, pools, guess),
            )
            .min_by(SimulMinimax::rank_cmp)
            .map(|best| RankedGuess {
                word: best.word,
                is_candidate: best.is_candidate,
                score: GuessScore::SimulMinimax {
                    largest_bucket: best.largest,
                    total: best.total,
                },
            }),
        StrategyKind::Entropy => entropy::best_of(
            universe
                .par_iter()
                .map_init(
                    || Histogram::new(size),
                    |histogram, &guess| score_entropy(scorer, histogram, pools, guess),
                )
                .collect::<Vec<_>>(),
        )
        .map(RankedGuess::from),
    };

    let best = best.ok_or(SolverError::EmptyGuessUniverse)?;
    log::debug!(
        "simul {kind} over {} boards: {} ({})",
        pools.len(),
        scorer.dictionary().word(best.word),
        best.score
    );
    Ok(best)
}
