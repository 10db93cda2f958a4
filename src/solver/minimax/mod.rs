//! Minimax guess ranking
//!
//! Minimizes the worst-case number of remaining candidates.

mod calculator;
mod selector;

pub use calculator::{MinimaxGuess, calculate_max_remaining};
pub use selector::{rank_guesses, select_best_guess};
