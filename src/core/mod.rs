//! Core domain types
//!
//! Words, feedback patterns and the dictionary that maps words to dense ids.
//! Everything here is pure and independent of any solving strategy.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::{Dictionary, DictionaryError, WordId};
pub use pattern::{Mark, Observation, Pattern, PatternError};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
