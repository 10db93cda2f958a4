//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::{ENTROPY_TOLERANCE, EntropyGuess};
use crate::core::WordId;
use crate::solver::partition::Histogram;
use crate::solver::scorer::Scorer;
use rayon::prelude::*;

fn score_all(scorer: &Scorer, pool: &[WordId], universe: &[WordId]) -> Vec<EntropyGuess> {
    universe
        .par_iter()
        .map_init(
            || Histogram::new(scorer.word_size()),
            |histogram, &guess| {
                histogram.fill(scorer, guess, pool);
                EntropyGuess::from_histogram(guess, histogram)
            },
        )
        .collect()
}

/// Pick the best guess from already-scored guesses
///
/// The highest entropy is found first; every guess within
/// [`ENTROPY_TOLERANCE`] of it is then tied and broken by candidacy and word
/// order. The result does not depend on the input order.
pub fn best_of(guesses: impl IntoIterator<Item = EntropyGuess>) -> Option<EntropyGuess> {
    let guesses: Vec<EntropyGuess> = guesses.into_iter().collect();
    let top = guesses
        .iter()
        .map(|guess| guess.bits)
        .fold(f64::NEG_INFINITY, f64::max);

    guesses
        .into_iter()
        .filter(|guess| top - guess.bits <= ENTROPY_TOLERANCE)
        .min_by_key(|guess| (!guess.is_candidate, guess.word))
}

/// Select best guess by maximizing entropy
///
/// Returns `None` if `universe` is empty.
#[must_use]
pub fn select_best_guess(
    scorer: &Scorer,
    pool: &[WordId],
    universe: &[WordId],
) -> Option<EntropyGuess> {
    best_of(score_all(scorer, pool, universe))
}

/// Score every guess in `universe`, best first
#[must_use]
pub fn rank_guesses(scorer: &Scorer, pool: &[WordId], universe: &[WordId]) -> Vec<EntropyGuess> {
    let mut guesses = score_all(scorer, pool, universe);
    guesses.sort_by(EntropyGuess::rank_cmp);
    guesses
}
