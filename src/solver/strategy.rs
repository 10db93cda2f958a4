//! Guess selection strategies
//!
//! Defines the Strategy trait, the two base rankers and the runtime
//! dispatch wrapper used by the engine.

use super::entropy::{self, EntropyGuess};
use super::lookahead::LookaheadStrategy;
use super::minimax::{self, MinimaxGuess};
use super::scorer::Scorer;
use crate::core::WordId;
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// A strategy for selecting the best guess for a candidate pool
pub trait Strategy: Sync {
    /// Select the best guess from `universe` for the candidates in `pool`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` if `pool` is empty and
    /// `SolverError::EmptyGuessUniverse` if `universe` is empty.
    fn select_guess(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError>;

    /// The ranking criterion this strategy optimizes
    fn kind(&self) -> StrategyKind;
}

/// Ranking criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Minimize the largest bucket
    #[default]
    Minimax,
    /// Maximize expected information
    Entropy,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "entropy" => Ok(Self::Entropy),
            other => Err(format!("unknown solver '{other}', expected minimax or entropy")),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimax => f.write_str("minimax"),
            Self::Entropy => f.write_str("entropy"),
        }
    }
}

/// How a guess was scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuessScore {
    /// Worst-case bucket and number of buckets
    Minimax { largest_bucket: usize, buckets: usize },
    /// Expected information in bits
    Entropy { bits: f64 },
    /// Worst case after the lookahead rounds
    DeepMinimax {
        nested_worst: usize,
        largest_bucket: usize,
    },
    /// Expected information over the lookahead rounds
    DeepEntropy { bits: f64 },
    /// Worst bucket across all active boards, and the sum over boards
    SimulMinimax { largest_bucket: usize, total: usize },
    /// Played without ranking: the only candidate left on a board
    Forced,
}

impl fmt::Display for GuessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimax {
                largest_bucket,
                buckets,
            } => write!(f, "worst {largest_bucket}, {buckets} buckets"),
            Self::Entropy { bits } => write!(f, "{bits:.3} bits"),
            Self::DeepMinimax {
                nested_worst,
                largest_bucket,
            } => write!(f, "nested worst {nested_worst}, worst {largest_bucket}"),
            Self::DeepEntropy { bits } => write!(f, "{bits:.3} bits over lookahead"),
            Self::SimulMinimax {
                largest_bucket,
                total,
            } => write!(f, "worst {largest_bucket}, total {total}"),
            Self::Forced => f.write_str("forced"),
        }
    }
}

/// The guess chosen by a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: WordId,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
    pub score: GuessScore,
}

impl From<MinimaxGuess> for RankedGuess {
    fn from(guess: MinimaxGuess) -> Self {
        Self {
            word: guess.word,
            is_candidate: guess.is_candidate,
            score: GuessScore::Minimax {
                largest_bucket: guess.largest_bucket,
                buckets: guess.buckets,
            },
        }
    }
}

impl From<EntropyGuess> for RankedGuess {
    fn from(guess: EntropyGuess) -> Self {
        Self {
            word: guess.word,
            is_candidate: guess.is_candidate,
            score: GuessScore::Entropy { bits: guess.bits },
        }
    }
}

/// Reject empty pools and universes before any ranking work
///
/// # Errors
/// `EmptyPool` takes precedence over `EmptyGuessUniverse`.
pub fn validate(pool: &[WordId], universe: &[WordId]) -> Result<(), SolverError> {
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }
    if universe.is_empty() {
        return Err(SolverError::EmptyGuessUniverse);
    }
    Ok(())
}

/// With at most two candidates the first one is always optimal
///
/// Guessing it splits the pool into singletons and it wins every tie-break,
/// provided it is allowed as a guess. Pools are sorted by id.
pub(crate) fn forced_pick(pool: &[WordId], universe: &[WordId]) -> Option<WordId> {
    if pool.len() > 2 {
        return None;
    }
    pool.first().copied().filter(|first| universe.contains(first))
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes the worst-case remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        validate(pool, universe)?;
        if let Some(word) = forced_pick(pool, universe) {
            let histogram = scorer.histogram(word, pool);
            return Ok(MinimaxGuess::from_histogram(word, &histogram).into());
        }
        minimax::select_best_guess(scorer, pool, universe)
            .map(RankedGuess::from)
            .ok_or(SolverError::EmptyGuessUniverse)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        validate(pool, universe)?;
        if let Some(word) = forced_pick(pool, universe) {
            let histogram = scorer.histogram(word, pool);
            return Ok(EntropyGuess::from_histogram(word, &histogram).into());
        }
        entropy::select_best_guess(scorer, pool, universe)
            .map(RankedGuess::from)
            .ok_or(SolverError::EmptyGuessUniverse)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Entropy
    }
}

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub kind: StrategyKind,
    /// Rounds to look ahead; 1 is the plain ranker
    pub depth: usize,
    /// Overrides the lookahead beam width
    pub beam_width: Option<usize>,
    /// Round budget for a single board
    pub max_rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::Minimax,
            depth: 1,
            beam_width: None,
            max_rounds: 20,
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Either criterion with lookahead
    Lookahead(LookaheadStrategy),
}

impl StrategyType {
    /// Build the strategy for a criterion and lookahead depth
    #[must_use]
    pub fn new(kind: StrategyKind, depth: usize) -> Self {
        match (kind, depth) {
            (StrategyKind::Minimax, 0 | 1) => Self::Minimax(MinimaxStrategy),
            (StrategyKind::Entropy, 0 | 1) => Self::Entropy(EntropyStrategy),
            _ => Self::Lookahead(LookaheadStrategy::new(kind, depth)),
        }
    }

    /// Build the strategy described by `config`
    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        match (Self::new(config.kind, config.depth), config.beam_width) {
            (Self::Lookahead(lookahead), Some(width)) => {
                Self::Lookahead(lookahead.with_beam_width(width))
            }
            (strategy, _) => strategy,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        scorer: &Scorer,
        pool: &[WordId],
        universe: &[WordId],
    ) -> Result<RankedGuess, SolverError> {
        match self {
            Self::Minimax(s) => s.select_guess(scorer, pool, universe),
            Self::Entropy(s) => s.select_guess(scorer, pool, universe),
            Self::Lookahead(s) => s.select_guess(scorer, pool, universe),
        }
    }

    fn kind(&self) -> StrategyKind {
        match self {
            Self::Minimax(s) => s.kind(),
            Self::Entropy(s) => s.kind(),
            Self::Lookahead(s) => s.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use rstest::rstest;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow"],
            &["skill", "spill", "still", "swill", "salty"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn ids(scorer: &Scorer, words: &[&str]) -> Vec<WordId> {
        words
            .iter()
            .filter_map(|w| scorer.dictionary().lookup(w))
            .collect()
    }

    #[rstest]
    #[case(StrategyKind::Minimax)]
    #[case(StrategyKind::Entropy)]
    fn empty_pool_is_rejected(#[case] kind: StrategyKind) {
        let scorer = setup();
        let strategy = StrategyType::new(kind, 1);
        let universe = scorer.dictionary().all_ids();

        assert_eq!(
            strategy.select_guess(&scorer, &[], &universe),
            Err(SolverError::EmptyPool)
        );
    }

    #[rstest]
    #[case(StrategyKind::Minimax)]
    #[case(StrategyKind::Entropy)]
    fn empty_universe_is_rejected(#[case] kind: StrategyKind) {
        let scorer = setup();
        let strategy = StrategyType::new(kind, 1);
        let pool = ids(&scorer, &["skill"]);

        assert_eq!(
            strategy.select_guess(&scorer, &pool, &[]),
            Err(SolverError::EmptyGuessUniverse)
        );
    }

    #[rstest]
    #[case(StrategyKind::Minimax)]
    #[case(StrategyKind::Entropy)]
    fn both_rankers_find_the_separating_probe(#[case] kind: StrategyKind) {
        let scorer = setup();
        let strategy = StrategyType::new(kind, 1);
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);

        let best = strategy
            .select_guess(&scorer, &pool, &scorer.dictionary().all_ids())
            .unwrap();
        assert_eq!(scorer.dictionary().word(best.word).text(), "KAPOW");
        assert!(!best.is_candidate);
        assert_eq!(strategy.kind(), kind);
    }

    #[test]
    fn small_pool_plays_first_candidate() {
        let scorer = setup();
        let pool = ids(&scorer, &["spill", "still"]);
        let universe = scorer.dictionary().all_ids();

        let best = MinimaxStrategy
            .select_guess(&scorer, &pool, &universe)
            .unwrap();
        assert_eq!(best.word, pool[0]);
        assert_eq!(
            best.score,
            GuessScore::Minimax {
                largest_bucket: 1,
                buckets: 2
            }
        );

        let best = EntropyStrategy
            .select_guess(&scorer, &pool, &universe)
            .unwrap();
        assert_eq!(best.word, pool[0]);
        assert!(best.is_candidate);
    }

    #[test]
    fn small_pool_shortcut_requires_guess_in_universe() {
        let scorer = setup();
        let pool = ids(&scorer, &["spill", "still"]);
        let universe = ids(&scorer, &["salty"]);

        let best = MinimaxStrategy
            .select_guess(&scorer, &pool, &universe)
            .unwrap();
        assert_eq!(scorer.dictionary().word(best.word).text(), "SALTY");
    }

    #[test]
    fn strategy_kind_parses() {
        assert_eq!("minimax".parse(), Ok(StrategyKind::Minimax));
        assert_eq!("Entropy".parse(), Ok(StrategyKind::Entropy));
        assert!("adaptive".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::Entropy.to_string(), "entropy");
    }

    #[test]
    fn from_config_picks_lookahead_for_depth() {
        let config = SolverConfig::default();
        assert!(matches!(
            StrategyType::from_config(&config),
            StrategyType::Minimax(_)
        ));

        let config = SolverConfig {
            kind: StrategyKind::Entropy,
            depth: 2,
            beam_width: Some(4),
            ..SolverConfig::default()
        };
        match StrategyType::from_config(&config) {
            StrategyType::Lookahead(lookahead) => {
                assert_eq!(lookahead.depth(), 2);
                assert_eq!(lookahead.beam_width(), 4);
                assert_eq!(lookahead.kind(), StrategyKind::Entropy);
            }
            other => panic!("expected lookahead, got {other:?}"),
        }
    }
}
