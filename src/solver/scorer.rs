//! Cached guess × answer scoring
//!
//! The [`Scorer`] owns a dictionary and a score matrix with one column per
//! answer. Columns are filled on first use, or up front with
//! [`Scorer::precompute`], and hold the pattern of every guess against that
//! answer. A scorer is the context object threaded through every solve,
//! benchmark and tree search, so separate scorers never share state.

use super::partition::{Histogram, Partition};
use crate::core::{Dictionary, Pattern, WordId};
use rayon::prelude::*;
use std::sync::OnceLock;

/// Dictionary plus lazily computed score matrix
#[derive(Debug)]
pub struct Scorer {
    dictionary: Dictionary,
    columns: Vec<OnceLock<Box<[u16]>>>,
}

impl Scorer {
    /// Create a scorer that fills the score matrix lazily
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let columns = std::iter::repeat_with(OnceLock::new)
            .take(dictionary.len())
            .collect();
        Self {
            dictionary,
            columns,
        }
    }

    /// Create a scorer with every answer column computed up front
    #[must_use]
    pub fn precomputed(dictionary: Dictionary) -> Self {
        let scorer = Self::new(dictionary);
        scorer.precompute(scorer.dictionary.answers());
        scorer
    }

    /// Fill the score matrix columns for `pool` in parallel
    pub fn precompute(&self, pool: &[WordId]) {
        pool.par_iter().for_each(|&answer| {
            self.column(answer);
        });
        log::debug!("score matrix: {} columns precomputed", pool.len());
    }

    /// The dictionary being scored
    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Word length of the dictionary
    #[inline]
    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.dictionary.word_size()
    }

    /// The perfect pattern for this word length
    #[inline]
    #[must_use]
    pub const fn perfect(&self) -> Pattern {
        Pattern::perfect(self.word_size())
    }

    fn column(&self, answer: WordId) -> &[u16] {
        self.columns[answer.index()].get_or_init(|| {
            let target = self.dictionary.word(answer);
            self.dictionary
                .words()
                .iter()
                .map(|guess| Pattern::calculate(guess, target).value())
                .collect()
        })
    }

    /// Raw pattern value of `guess` against `answer`
    #[inline]
    pub(crate) fn pattern_value(&self, guess: WordId, answer: WordId) -> u16 {
        self.column(answer)[guess.index()]
    }

    /// Pattern produced by `guess` when `answer` is the hidden word
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess: WordId, answer: WordId) -> Pattern {
        Pattern::new(self.pattern_value(guess, answer), self.word_size())
    }

    /// Group `pool` by the pattern each member produces against `guess`
    #[must_use]
    pub fn partition(&self, guess: WordId, pool: &[WordId]) -> Partition<WordId> {
        Partition::from_scored(
            pool.iter()
                .map(|&answer| (self.pattern(guess, answer), answer)),
        )
    }

    /// Bucket sizes of `guess` against `pool`
    #[must_use]
    pub fn histogram(&self, guess: WordId, pool: &[WordId]) -> Histogram {
        let mut histogram = Histogram::new(self.word_size());
        histogram.fill(self, guess, pool);
        histogram
    }
}
