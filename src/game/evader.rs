//! Choosing the reported pattern for a guess
//!
//! The referee knows the answer and reports its pattern. The evader has no
//! answer: it reports whichever truthful pattern keeps the most candidates
//! alive.

use crate::core::{Pattern, WordId};
use crate::solver::{Partition, Scorer};
use std::cmp::Reverse;

/// Who answers a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Responder {
    /// Scores against a fixed answer
    Referee(WordId),
    /// Picks the largest bucket
    Evader,
}

impl Responder {
    /// Pattern reported for `guess`, given the partition of the current pool
    ///
    /// Returns `None` only when the evader faces an empty partition.
    #[must_use]
    pub fn respond(
        &self,
        scorer: &Scorer,
        guess: WordId,
        partition: &Partition<WordId>,
    ) -> Option<Pattern> {
        match self {
            Self::Referee(answer) => Some(scorer.pattern(guess, *answer)),
            Self::Evader => evade(guess, partition),
        }
    }
}

/// The bucket the evader concedes
///
/// Preference, strongest first:
/// 1. any bucket without the guess in it, so a win is conceded only when
///    the guess is the last candidate
/// 2. more candidates
/// 3. fewer exact marks
/// 4. lower pattern value
#[must_use]
pub fn evade(guess: WordId, partition: &Partition<WordId>) -> Option<Pattern> {
    partition
        .iter()
        .max_by_key(|(pattern, bucket)| {
            (
                !bucket.contains(&guess),
                bucket.len(),
                Reverse(pattern.count_exact()),
                Reverse(*pattern),
            )
        })
        .map(|(pattern, _)| pattern)
}
