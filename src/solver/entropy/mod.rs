//! Entropy-based guess ranking
//!
//! Implements Shannon entropy calculation for pattern distributions.

mod calculator;
mod selector;

pub use calculator::{ENTROPY_TOLERANCE, EntropyGuess, calculate_entropy, shannon_entropy};
pub use selector::{best_of, rank_guesses, select_best_guess};
