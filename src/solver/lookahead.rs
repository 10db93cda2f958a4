//! Depth-limited lookahead over the base rankers
//!
//! Each first guess in a beam taken from the base ranking is re-scored by
//! simulating the best follow-up for every bucket it leaves. Both criteria
//! use branch-and-bound so deeper searches stay tractable.

use super::entropy::{self, ENTROPY_TOLERANCE, EntropyGuess};
use super::minimax::{self, MinimaxGuess};
use super::scorer::Scorer;
use super::strategy::{
    EntropyStrategy, GuessScore, MinimaxStrategy, RankedGuess, Strategy, StrategyKind,
    forced_pick, validate,
};
use crate::core::WordId;
use crate::error::SolverError;
use std::cmp::Reverse;

/// First guesses re-scored per level by deep minimax
pub const DEFAULT_MINIMAX_BEAM: usize = 50;

/// First guesses re-scored per level by deep entropy
pub const DEFAULT_ENTROPY_BEAM: usize = 10;

/// A base ranker wrapped with `depth` rounds of lookahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadStrategy {
    kind: StrategyKind,
    depth: usize,
    beam_width: usize,
}

impl LookaheadStrategy {
    #[must_use]
    pub const fn new(kind: StrategyKind, depth: usize) -> Self {
        let beam_width = match kind {
            StrategyKind::Minimax => DEFAULT_MINIMAX_BEAM,
            StrategyKind::Entropy => DEFAULT_ENTROPY_BEAM,
        };
        Self {
            kind,
            depth: if depth == 0 { 1 } else { depth },
            beam_width,
        }
    }

    /// Re-score at most `width` first guesses per level
    #[must_use]
    pub const fn with_beam_width(mut self, width: usize) -> Self {
        self.beam_width = if width == 0 { 1 } else { width };
        self
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn beam_width(&self) -> usize {
        self.beam_width
    }

    /// Best achievable worst case for `pool` within `depth` guesses
    ///
    /// Returns as soon as some guess reaches `good_enough`, since the caller
    /// only needs to know the value cannot raise its running maximum.
    fn minimax_value(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
        depth: usize,
        good_enough: usize,
    ) -> usize {
        if pool.len() == 1 {
            return usize::from(depth <= 1);
        }
        if depth <= 1 {
            return minimax::select_best_guess(scorer, pool, universe)
                .map_or(0, |best| best.largest_bucket);
        }

        let mut best = usize::MAX;
        for first in minimax::rank_guesses(scorer, pool, universe)
            .iter()
            .take(self.beam_width)
        {
            if let Some(worst) = self.nested_worst(scorer, pool, universe, first.word, depth, best)
            {
                best = worst;
            }
            if best <= good_enough {
                break;
            }
        }
        best
    }

    /// Worst value over the unsolved buckets of `guess`, or `None` once it
    /// reaches `bound`
    fn nested_worst(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
        guess: WordId,
        depth: usize,
        bound: usize,
    ) -> Option<usize> {
        let mut buckets: Vec<Vec<WordId>> = scorer
            .partition(guess, pool)
            .into_iter()
            .filter(|(pattern, _)| !pattern.is_perfect())
            .map(|(_, bucket)| bucket)
            .collect();
        buckets.sort_by_key(|bucket| Reverse(bucket.len()));

        let mut worst = 0;
        for bucket in &buckets {
            if worst >= bound {
                return None;
            }
            let value = self.minimax_value(scorer, bucket, universe, depth - 1, worst);
            worst = worst.max(value);
        }
        (worst < bound).then_some(worst)
    }

    fn deep_minimax(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        let ranked = minimax::rank_guesses(scorer, pool, universe);
        let &top = ranked.first().ok_or(SolverError::EmptyGuessUniverse)?;
        let mut best: Option<(usize, MinimaxGuess)> = None;

        for first in ranked.iter().take(self.beam_width) {
            let bound = best.map_or(usize::MAX, |(worst, _)| worst);
            // Candidates arrive in base order, so only a strictly smaller
            // nested worst can win
            if let Some(worst) =
                self.nested_worst(scorer, pool, universe, first.word, self.depth, bound)
            {
                log::trace!("lookahead: {} nested worst {worst}", first.word);
                best = Some((worst, *first));
            }
            if first.largest_bucket == 1 || best.is_some_and(|(worst, _)| worst == 0) {
                break;
            }
        }

        let (nested_worst, guess) = best.unwrap_or((0, top));
        Ok(RankedGuess {
            word: guess.word,
            is_candidate: guess.is_candidate,
            score: GuessScore::DeepMinimax {
                nested_worst,
                largest_bucket: guess.largest_bucket,
            },
        })
    }

    /// Best achievable expected information for `pool` within `depth` guesses
    fn entropy_value(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
        depth: usize,
    ) -> f64 {
        if pool.len() <= 1 {
            return 0.0;
        }
        if depth <= 1 {
            return entropy::select_best_guess(scorer, pool, universe).map_or(0.0, |best| best.bits);
        }

        let ceiling = (pool.len() as f64).log2();
        let mut best = 0.0_f64;
        for first in entropy::rank_guesses(scorer, pool, universe)
            .iter()
            .take(self.beam_width)
        {
            if let Some(bits) = self.expected_bits(scorer, pool, universe, first, depth, best) {
                best = best.max(bits);
            }
            if best + ENTROPY_TOLERANCE >= ceiling {
                break;
            }
        }
        best
    }

    /// First-round bits plus the weighted best follow-up for every bucket,
    /// or `None` once the optimistic bound falls below `threshold`
    fn expected_bits(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
        first: &EntropyGuess,
        depth: usize,
        threshold: f64,
    ) -> Option<f64> {
        let total = pool.len() as f64;
        let mut pending: Vec<Vec<WordId>> = scorer
            .partition(first.word, pool)
            .into_iter()
            .filter(|(pattern, bucket)| !pattern.is_perfect() && bucket.len() > 1)
            .map(|(_, bucket)| bucket)
            .collect();
        pending.sort_by_key(|bucket| Reverse(bucket.len()));

        // A bucket of n candidates can yield at most log2(n) further bits
        let mut bound = first.bits
            + pending
                .iter()
                .map(|bucket| bucket.len() as f64 / total * (bucket.len() as f64).log2())
                .sum::<f64>();
        let mut bits = first.bits;

        for bucket in &pending {
            if bound + ENTROPY_TOLERANCE < threshold {
                return None;
            }
            let size = bucket.len() as f64;
            let value = self.entropy_value(scorer, bucket, universe, depth - 1);
            bits += size / total * value;
            bound -= size / total * (size.log2() - value);
        }
        (bits + ENTROPY_TOLERANCE >= threshold).then_some(bits)
    }

    fn deep_entropy(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        let ranked = entropy::rank_guesses(scorer, pool, universe);
        let &top = ranked.first().ok_or(SolverError::EmptyGuessUniverse)?;
        let ceiling = (pool.len() as f64).log2();
        let mut best: Option<EntropyGuess> = None;

        for first in ranked.iter().take(self.beam_width) {
            // Every candidate isolated: nothing is left to learn
            if first.bits + ENTROPY_TOLERANCE >= ceiling {
                best = Some(*first);
                break;
            }
            let threshold = best.map_or(f64::NEG_INFINITY, |b| b.bits);
            if let Some(bits) = self.expected_bits(scorer, pool, universe, first, self.depth, threshold)
            {
                let candidate = EntropyGuess { bits, ..*first };
                if best.is_none_or(|current| candidate.improves_upon(&current)) {
                    best = Some(candidate);
                }
            }
        }

        let guess = best.unwrap_or(top);
        Ok(RankedGuess {
            word: guess.word,
            is_candidate: guess.is_candidate,
            score: GuessScore::DeepEntropy { bits: guess.bits },
        })
    }
}

impl Strategy for LookaheadStrategy {
    fn select_guess(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        if self.depth <= 1 || forced_pick(pool, universe).is_some() {
            return match self.kind {
                StrategyKind::Minimax => MinimaxStrategy.select_guess(scorer, pool, universe),
                StrategyKind::Entropy => EntropyStrategy.select_guess(scorer, pool, universe),
            };
        }
        validate(pool, universe)?;

        let best = match self.kind {
            StrategyKind::Minimax => self.deep_minimax(scorer, pool, universe)?,
            StrategyKind::Entropy => self.deep_entropy(scorer, pool, universe)?,
        };
        log::debug!(
            "lookahead depth {}: {} ({})",
            self.depth,
            scorer.dictionary().word(best.word),
            best.score
        );
        Ok(best)
    }

    fn kind(&self) -> StrategyKind {
        self.kind
    }
}
