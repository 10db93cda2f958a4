//! Wordle Engine
//!
//! Minimax, entropy and exhaustive-search solving for Wordle and its
//! multi-board variants, for words of four to nine letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::Dictionary;
//! use wordle_engine::solver::{MinimaxStrategy, Scorer, Solver};
//!
//! let dictionary =
//!     Dictionary::from_strs(5, &["kapow"], &["skill", "spill", "still", "swill"]).unwrap();
//! let scorer = Scorer::new(dictionary);
//! let solver = Solver::new(MinimaxStrategy, &scorer);
//!
//! let answer = scorer.dictionary().lookup("still").unwrap();
//! let game = solver.run(answer, &[]).unwrap();
//! assert_eq!(game.rounds(), 2);
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Boards, sessions and the evader
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
