//! Single-board state machine

use super::evader::Responder;
use crate::core::{Pattern, WordId};
use crate::error::SolverError;
use crate::solver::Scorer;
use std::fmt;

/// Lifecycle of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// Still taking guesses
    Active,
    /// The answer was guessed
    Solved,
    /// The reported patterns ruled out every candidate
    Exhausted,
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Solved => f.write_str("solved"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// One scored guess and the pool size it left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: WordId,
    pub pattern: Pattern,
    pub remaining: usize,
}

/// One puzzle: a shrinking candidate pool and its guess history
///
/// A board without an answer is played against the evader.
#[derive(Debug, Clone)]
pub struct Board {
    pool: Vec<WordId>,
    answer: Option<WordId>,
    history: Vec<Turn>,
    state: BoardState,
}

impl Board {
    /// Create a board over `pool`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` for an empty pool and
    /// `SolverError::InvalidInput` if `answer` is not in the pool.
    pub fn new(mut pool: Vec<WordId>, answer: Option<WordId>) -> Result<Self, SolverError> {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }
        pool.sort_unstable();
        pool.dedup();
        if let Some(answer) = answer.filter(|answer| pool.binary_search(answer).is_err()) {
            return Err(SolverError::InvalidInput(format!(
                "answer {answer} is not in the candidate pool"
            )));
        }

        Ok(Self {
            pool,
            answer,
            history: Vec::new(),
            state: BoardState::Active,
        })
    }

    /// Candidates still consistent with every reported pattern
    #[must_use]
    pub fn pool(&self) -> &[WordId] {
        &self.pool
    }

    #[must_use]
    pub const fn answer(&self) -> Option<WordId> {
        self.answer
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> BoardState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == BoardState::Active
    }

    /// Number of guesses scored on this board
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Who reports patterns when none are supplied
    #[must_use]
    pub fn responder(&self) -> Responder {
        self.answer.map_or(Responder::Evader, Responder::Referee)
    }

    /// Score `guess` and narrow the pool
    ///
    /// A supplied `pattern` is used as reported; otherwise the board's
    /// responder produces it.
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if the board is no longer active
    /// - `SolverError::InvalidInput` if `pattern` has the wrong length
    /// - `SolverError::Contradiction` if no candidate matches the pattern;
    ///   the turn is recorded and the board becomes exhausted
    pub fn advance(
        &mut self,
        scorer: &Scorer,
        guess: WordId,
        pattern: Option<Pattern>,
    ) -> Result<&Turn, SolverError> {
        if !self.is_active() {
            return Err(SolverError::InvalidInput(format!(
                "board is already {}",
                self.state
            )));
        }
        if let Some(pattern) = pattern.filter(|pattern| pattern.size() != scorer.word_size()) {
            return Err(SolverError::InvalidInput(format!(
                "pattern {pattern} has {} marks, expected {}",
                pattern.size(),
                scorer.word_size()
            )));
        }

        let mut partition = scorer.partition(guess, &self.pool);
        let pattern = match pattern {
            Some(pattern) => pattern,
            None => self
                .responder()
                .respond(scorer, guess, &partition)
                .ok_or(SolverError::EmptyPool)?,
        };

        let remaining = partition.take(pattern);
        self.history.push(Turn {
            guess,
            pattern,
            remaining: remaining.len(),
        });

        if remaining.is_empty() {
            self.state = BoardState::Exhausted;
            self.pool.clear();
            return Err(SolverError::Contradiction {
                guess: *scorer.dictionary().word(guess),
                pattern,
            });
        }
        if pattern.is_perfect() {
            self.state = BoardState::Solved;
        }
        self.pool = remaining;

        let turn = &self.history[self.history.len() - 1];
        log::debug!(
            "{}={} leaves {} ({})",
            scorer.dictionary().word(guess),
            pattern,
            turn.remaining,
            self.state
        );
        Ok(turn)
    }
}
