//! Shannon entropy calculation for pattern distributions
//!
//! Given a guess and a candidate pool, computes the expected information gain.

use crate::core::WordId;
use crate::solver::partition::Histogram;
use crate::solver::scorer::Scorer;
use std::cmp::Ordering;

/// Entropies closer than this are treated as equal before tie-breaking
pub const ENTROPY_TOLERANCE: f64 = 1e-9;

/// A guess scored by expected information gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyGuess {
    pub word: WordId,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
    /// Expected information gain in bits
    pub bits: f64,
}

impl EntropyGuess {
    /// Score `word` from its filled histogram
    #[must_use]
    pub fn from_histogram(word: WordId, histogram: &Histogram) -> Self {
        Self {
            word,
            is_candidate: histogram.contains_perfect(),
            bits: histogram.entropy(),
        }
    }

    /// Whether this guess should be preferred over `other`
    ///
    /// Higher entropy wins; within [`ENTROPY_TOLERANCE`] a candidate wins, then
    /// the word that sorts first.
    #[must_use]
    pub fn improves_upon(&self, other: &Self) -> bool {
        if (self.bits - other.bits).abs() > ENTROPY_TOLERANCE {
            return self.bits > other.bits;
        }
        if self.is_candidate != other.is_candidate {
            return self.is_candidate;
        }
        self.word < other.word
    }

    /// Total order used to sort guesses best-first
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .bits
            .total_cmp(&self.bits)
            .then_with(|| other.is_candidate.cmp(&self.is_candidate))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Calculate Shannon entropy for a guess against a pool
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
#[must_use]
pub fn calculate_entropy(scorer: &Scorer, guess: WordId, pool: &[WordId]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }
    scorer.histogram(guess, pool).entropy()
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket with p=1)
/// - Empty buckets contribute nothing
/// - Always in range [0, log₂(n)] for n candidates
///
/// # Examples
/// ```
/// use wordle_engine::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25], 100);
/// assert!((entropy - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(sizes: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    sizes
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
