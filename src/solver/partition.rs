//! Partitioning a candidate pool by the pattern a guess would produce
//!
//! [`Partition`] keeps the members of every bucket; [`Histogram`] keeps only
//! the bucket sizes and is what the rankers evaluate for each candidate guess.

use super::entropy::shannon_entropy;
use super::scorer::Scorer;
use crate::core::{Pattern, PatternError, Word, WordId};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Candidates grouped by the pattern they produce against one guess
///
/// Buckets iterate in pattern order. Members keep their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    buckets: BTreeMap<Pattern, Vec<T>>,
}

impl<T> Partition<T> {
    /// Build a partition from `(pattern, candidate)` pairs
    pub fn from_scored(scored: impl IntoIterator<Item = (Pattern, T)>) -> Self {
        let mut buckets: BTreeMap<Pattern, Vec<T>> = BTreeMap::new();
        for (pattern, candidate) in scored {
            buckets.entry(pattern).or_default().push(candidate);
        }
        Self { buckets }
    }

    /// Members that produce `pattern`, empty if none do
    #[must_use]
    pub fn bucket(&self, pattern: Pattern) -> &[T] {
        self.buckets.get(&pattern).map_or(&[], Vec::as_slice)
    }

    /// Remove and return the bucket for `pattern`
    pub fn take(&mut self, pattern: Pattern) -> Vec<T> {
        self.buckets.remove(&pattern).unwrap_or_default()
    }

    /// Iterate over `(pattern, members)` in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &[T])> {
        self.buckets
            .iter()
            .map(|(&pattern, members)| (pattern, members.as_slice()))
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when the partitioned pool was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of members across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Size of the largest bucket
    #[must_use]
    pub fn largest(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl<T> IntoIterator for Partition<T> {
    type Item = (Pattern, Vec<T>);
    type IntoIter = btree_map::IntoIter<Pattern, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl Partition<Word> {
    /// Partition raw words without a dictionary
    ///
    /// # Errors
    /// Returns `PatternError::LengthMismatch` if any member's length differs
    /// from the guess.
    pub fn of_words(guess: &Word, pool: &[Word]) -> Result<Self, PatternError> {
        let scored = pool
            .iter()
            .map(|answer| Pattern::score(guess, answer).map(|pattern| (pattern, *answer)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_scored(scored))
    }
}

/// Bucket sizes for one guess against one pool
///
/// Counts live in a dense vector indexed by pattern value. Only the touched
/// slots are reset between guesses, so one histogram can be reused across a
/// whole scan of the guess universe.
#[derive(Debug, Clone)]
pub struct Histogram {
    size: usize,
    counts: Vec<u32>,
    touched: Vec<u16>,
    total: usize,
}

impl Histogram {
    /// Empty histogram for words of `size` letters
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; Pattern::perfect(size).value() as usize + 1],
            touched: Vec::new(),
            total: 0,
        }
    }

    /// Reset all counts
    pub fn clear(&mut self) {
        for &value in &self.touched {
            self.counts[value as usize] = 0;
        }
        self.touched.clear();
        self.total = 0;
    }

    /// Record one candidate with the given pattern
    #[inline]
    pub fn add(&mut self, pattern: Pattern) {
        let slot = &mut self.counts[pattern.value() as usize];
        if *slot == 0 {
            self.touched.push(pattern.value());
        }
        *slot += 1;
        self.total += 1;
    }

    /// Replace the contents with the buckets of `guess` against `pool`
    pub fn fill(&mut self, scorer: &Scorer, guess: WordId, pool: &[WordId]) {
        self.clear();
        for &answer in pool {
            self.add(Pattern::new(scorer.pattern_value(guess, answer), self.size));
        }
    }

    /// Number of candidates counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of non-empty buckets
    #[inline]
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.touched.len()
    }

    /// Size of the bucket for `pattern`
    #[inline]
    #[must_use]
    pub fn count(&self, pattern: Pattern) -> usize {
        self.counts[pattern.value() as usize] as usize
    }

    /// Size of the largest bucket
    #[must_use]
    pub fn largest(&self) -> usize {
        self.sizes().max().unwrap_or(0)
    }

    /// Whether the guess itself is one of the candidates
    #[inline]
    #[must_use]
    pub fn contains_perfect(&self) -> bool {
        self.count(Pattern::perfect(self.size)) > 0
    }

    /// Non-empty bucket sizes, in first-seen order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.touched
            .iter()
            .map(|&value| self.counts[value as usize] as usize)
    }

    /// Shannon entropy of the bucket distribution, in bits
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(self.sizes(), self.total)
    }
}
