//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess as a big-endian base-3 number,
//! the first letter being the most significant digit:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! With at most 9 letters the value fits in a `u16` (3^9 - 1 = 19682).

use super::word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const POW3: [u16; MAX_WORD_LEN + 1] = [1, 3, 9, 27, 81, 243, 729, 2187, 6561, 19683];

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u16) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have 4-9 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid mark '{0}', expected one of 0, 1, 2")]
    InvalidMark(char),
    #[error("pattern has {found} marks but the guess has {expected} letters")]
    LengthMismatch { expected: usize, found: usize },
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// Feedback pattern for a guess
///
/// Patterns order by their numeric value, so `00000` sorts first and the
/// perfect pattern last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    value: u16,
    size: u8,
}

impl Pattern {
    /// Create a pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if `value >= 3^size`
    #[inline]
    #[must_use]
    pub const fn new(value: u16, size: usize) -> Self {
        debug_assert!(size >= MIN_WORD_LEN && size <= MAX_WORD_LEN);
        debug_assert!(value < POW3[size], "pattern value out of range");
        Self {
            value,
            size: size as u8,
        }
    }

    /// All exact marks for a word of `size` letters
    #[inline]
    #[must_use]
    pub const fn perfect(size: usize) -> Self {
        Self::new(POW3[size] - 1, size)
    }

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        let value = marks
            .iter()
            .fold(0u16, |acc, &mark| acc * 3 + mark as u16);
        Self::new(value, marks.len())
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.value
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        self.size as usize
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.value == POW3[self.size as usize] - 1
    }

    /// Mark at `position`, counted from the first letter
    #[must_use]
    pub const fn mark_at(self, position: usize) -> Mark {
        let shift = self.size as usize - 1 - position;
        Mark::from_digit(self.value / POW3[shift] % 3)
    }

    /// Iterate over the marks from first letter to last
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.size()).map(move |i| self.mark_at(i))
    }

    /// Count the number of exact marks
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().filter(|&m| m == Mark::Exact).count()
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Mark::Present).count()
    }

    /// Score `guess` against `answer`
    ///
    /// # Errors
    /// Returns `PatternError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Pattern, Word};
    ///
    /// let guess = Word::new("salad").unwrap();
    /// let answer = Word::new("salty").unwrap();
    /// assert_eq!(Pattern::score(&guess, &answer).unwrap().to_string(), "22200");
    /// ```
    pub fn score(guess: &Word, answer: &Word) -> Result<Self, PatternError> {
        if guess.size() != answer.size() {
            return Err(PatternError::LengthMismatch {
                expected: guess.size(),
                found: answer.size(),
            });
        }
        Ok(Self::calculate(guess, answer))
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Both words must have the same length; use [`Pattern::score`] for
    /// unvalidated input.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the answer's letter tally
    /// 2. Second pass, left to right: mark present letters while the tally allows
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.size(), answer.size());

        let size = guess.size();
        let guess_letters = guess.letters();
        let answer_letters = answer.letters();
        let mut marks = [Mark::Absent; MAX_WORD_LEN];
        let mut available = answer.char_counts();

        #[allow(clippy::needless_range_loop)]
        for i in 0..size {
            if guess_letters[i] == answer_letters[i] {
                marks[i] = Mark::Exact;
                available[usize::from(guess_letters[i] - b'A')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..size {
            if marks[i] == Mark::Absent {
                let count = &mut available[usize::from(guess_letters[i] - b'A')];
                if *count > 0 {
                    marks[i] = Mark::Present;
                    *count -= 1;
                }
            }
        }

        Self::from_marks(&marks[..size])
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse digits like "10202"
    ///
    /// `G`/`Y`/`-` letters and emoji squares are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '2' | 'G' | 'g' | '🟩' => Ok(Mark::Exact),
                '1' | 'Y' | 'y' | '🟨' => Ok(Mark::Present),
                '0' | '-' | '_' | '⬜' => Ok(Mark::Absent),
                other => Err(PatternError::InvalidMark(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&marks.len()) {
            return Err(PatternError::InvalidLength(marks.len()));
        }

        Ok(Self::from_marks(&marks))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark as u8)?;
        }
        Ok(())
    }
}

/// A reported pattern, optionally paired with the guess it belongs to
///
/// Parsed from either `PATTERN` or `WORD=PATTERN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub guess: Option<Word>,
    pub pattern: Pattern,
}

impl FromStr for Observation {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((word, pattern)) = s.split_once('=') else {
            return Ok(Self {
                guess: None,
                pattern: s.parse()?,
            });
        };

        let guess = Word::new(word)?;
        let pattern: Pattern = pattern.parse()?;
        if pattern.size() != guess.size() {
            return Err(PatternError::LengthMismatch {
                expected: guess.size(),
                found: pattern.size(),
            });
        }

        Ok(Self {
            guess: Some(guess),
            pattern,
        })
    }
}
