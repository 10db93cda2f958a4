//! Engine error taxonomy

use crate::core::{DictionaryError, Pattern, PatternError, Word, WordError};
use crate::game::Scoreboard;
use thiserror::Error;

/// Errors raised by the solving engine
///
/// All errors are local and synchronous; the engine never retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Malformed words or patterns, mismatched lengths, unsupported sizes
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A ranker was asked to choose from an empty candidate pool
    #[error("no candidate words remain")]
    EmptyPool,

    /// The reported patterns are inconsistent with every candidate
    #[error("{guess}={pattern} leaves no candidate words")]
    Contradiction { guess: Word, pattern: Pattern },

    /// No guesses are available to choose from
    #[error("no guesses are available")]
    EmptyGuessUniverse,

    /// The round budget ran out; carries the history played so far
    #[error("failed to converge after {rounds} rounds")]
    UnsolvedWithinBudget { rounds: usize, scoreboard: Scoreboard },
}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<PatternError> for SolverError {
    fn from(err: PatternError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<DictionaryError> for SolverError {
    fn from(err: DictionaryError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
