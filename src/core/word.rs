//! Word representation
//!
//! A Word stores between 4 and 9 uppercase ASCII letters inline, so it is `Copy`
//! and cheap to hash.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest supported word length
pub const MIN_WORD_LEN: usize = 4;

/// Longest supported word length
pub const MAX_WORD_LEN: usize = 9;

/// A game word of 4-9 uppercase letters
///
/// Ordering is lexicographic for words of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; MAX_WORD_LEN],
    len: u8,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be 4-9 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4-9
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; MAX_WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self {
            letters,
            len: text.len() as u8,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Letters are validated ASCII on construction
        std::str::from_utf8(self.letters()).unwrap_or_default()
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len as usize]
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.len as usize
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.size()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific (uppercase) letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Letter tally indexed by `letter - b'A'`
    #[inline]
    pub(crate) fn char_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in self.letters() {
            counts[usize::from(ch - b'A')] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.size(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
        assert_eq!(Word::new("  salty\n").unwrap().text(), "SALTY");
    }

    #[test]
    fn word_creation_supports_all_lengths() {
        for text in ["OLEA", "RAISE", "TAILER", "TENAILS", "CENTRALS", "SECRETION"] {
            let word = Word::new(text).unwrap();
            assert_eq!(word.size(), text.len());
            assert_eq!(word.text(), text);
        }
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("abc"), Err(WordError::InvalidLength(3))));
        assert!(matches!(
            Word::new("abcdefghij"),
            Err(WordError::InvalidLength(10))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at_and_has_letter() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
        assert!(word.has_letter(b'R'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_char_counts_duplicates() {
        let counts = Word::new("speed").unwrap().char_counts();
        assert_eq!(counts[usize::from(b'E' - b'A')], 2);
        assert_eq!(counts[usize::from(b'S' - b'A')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["SWILL", "SKILL", "STILL", "SPILL"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["SKILL", "SPILL", "STILL", "SWILL"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "salty".parse().unwrap();
        assert_eq!(format!("{word}"), "SALTY");
        assert_eq!(word, Word::new("SALTY").unwrap());
    }
}
