//! Minimax worst-case calculation for Wordle patterns
//!
//! Given a guess and a candidate pool, computes the largest number of
//! candidates that could survive the guess.

use crate::core::WordId;
use crate::solver::partition::Histogram;
use crate::solver::scorer::Scorer;
use std::cmp::Ordering;

/// A guess scored by its worst-case bucket
///
/// Orders best first: smaller worst case, then candidates, then word order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxGuess {
    pub word: WordId,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
    /// Size of the largest bucket
    pub largest_bucket: usize,
    /// Number of non-empty buckets
    pub buckets: usize,
}

impl MinimaxGuess {
    /// Score `word` from its filled histogram
    #[must_use]
    pub fn from_histogram(word: WordId, histogram: &Histogram) -> Self {
        Self {
            word,
            is_candidate: histogram.contains_perfect(),
            largest_bucket: histogram.largest(),
            buckets: histogram.num_buckets(),
        }
    }

    const fn key(&self) -> (usize, bool, WordId) {
        (self.largest_bucket, !self.is_candidate, self.word)
    }
}

impl Ord for MinimaxGuess {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for MinimaxGuess {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible pattern that could result from this guess:
/// - Count how many candidates would produce that pattern
/// - Return the maximum count (worst case)
#[must_use]
pub fn calculate_max_remaining(scorer: &Scorer, guess: WordId, pool: &[WordId]) -> usize {
    if pool.is_empty() {
        return 0;
    }
    scorer.histogram(guess, pool).largest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow", "zzzzz"],
            &["skill", "spill", "still", "swill"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    #[test]
    fn max_remaining_pool_member_leaves_three() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();

        for &guess in &pool {
            assert_eq!(calculate_max_remaining(&scorer, guess, &pool), 3);
        }
    }

    #[test]
    fn max_remaining_probe_isolates_all() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let kapow = scorer.dictionary().lookup("kapow").unwrap();

        assert_eq!(calculate_max_remaining(&scorer, kapow, &pool), 1);
    }

    #[test]
    fn max_remaining_all_same_pattern() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let zzzzz = scorer.dictionary().lookup("zzzzz").unwrap();

        assert_eq!(calculate_max_remaining(&scorer, zzzzz, &pool), pool.len());
    }

    #[test]
    fn max_remaining_empty_pool() {
        let scorer = setup();
        let kapow = scorer.dictionary().lookup("kapow").unwrap();
        assert_eq!(calculate_max_remaining(&scorer, kapow, &[]), 0);
    }

    #[test]
    fn ordering_prefers_candidates_on_equal_worst_case() {
        let probe = MinimaxGuess {
            word: WordId(0),
            is_candidate: false,
            largest_bucket: 2,
            buckets: 3,
        };
        let member = MinimaxGuess {
            word: WordId(7),
            is_candidate: true,
            largest_bucket: 2,
            buckets: 2,
        };
        let better = MinimaxGuess {
            largest_bucket: 1,
            ..probe
        };

        assert!(member < probe);
        assert!(better < member);
    }
}
