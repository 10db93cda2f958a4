//! Validated word universe for one word length
//!
//! Every word is addressed by a dense [`WordId`]. Ids follow lexicographic
//! order, so a sorted pool of ids is also a sorted pool of words.

use super::word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Index of a word within a [`Dictionary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) u32);

impl WordId {
    /// Position in the dictionary's word list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error raised while building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("unsupported word length {0}, expected 4-9")]
    UnsupportedSize(usize),
    #[error("'{word}' has {found} letters but the dictionary holds {expected}-letter words")]
    WrongLength {
        word: Word,
        expected: usize,
        found: usize,
    },
    #[error("dictionary has no answers")]
    NoAnswers,
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// All guessable words of one length, with the answer subset marked
#[derive(Debug, Clone)]
pub struct Dictionary {
    size: usize,
    words: Vec<Word>,
    answers: Vec<WordId>,
    is_answer: Vec<bool>,
    index: FxHashMap<Word, WordId>,
}

impl Dictionary {
    /// Build a dictionary from allowed guesses and possible answers
    ///
    /// Answers missing from `guesses` are added to the guess universe.
    ///
    /// # Errors
    /// Returns `DictionaryError` if `size` is unsupported, a word has a
    /// different length, or there are no answers.
    pub fn new(
        size: usize,
        guesses: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&size) {
            return Err(DictionaryError::UnsupportedSize(size));
        }

        let check = |word: Word| {
            if word.size() == size {
                Ok(word)
            } else {
                Err(DictionaryError::WrongLength {
                    word,
                    expected: size,
                    found: word.size(),
                })
            }
        };

        let mut answer_words = answers
            .into_iter()
            .map(check)
            .collect::<Result<Vec<_>, _>>()?;
        answer_words.sort_unstable();
        answer_words.dedup();

        if answer_words.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let mut words = guesses
            .into_iter()
            .map(check)
            .collect::<Result<Vec<_>, _>>()?;
        words.extend_from_slice(&answer_words);
        words.sort_unstable();
        words.dedup();

        let index: FxHashMap<Word, WordId> = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, WordId(i as u32)))
            .collect();

        let mut is_answer = vec![false; words.len()];
        let answers: Vec<WordId> = answer_words.iter().map(|word| index[word]).collect();
        for id in &answers {
            is_answer[id.index()] = true;
        }

        log::debug!(
            "dictionary: {} words, {} answers, size {size}",
            words.len(),
            answers.len()
        );

        Ok(Self {
            size,
            words,
            answers,
            is_answer,
            index,
        })
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// Returns `DictionaryError` if any word is invalid (see [`Dictionary::new`]).
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(5, &["kapow"], &["skill", "spill"]).unwrap();
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.answers().len(), 2);
    /// ```
    pub fn from_strs(size: usize, guesses: &[&str], answers: &[&str]) -> Result<Self, DictionaryError> {
        let parse = |list: &[&str]| list.iter().map(Word::new).collect::<Result<Vec<_>, _>>();
        Self::new(size, parse(guesses)?, parse(answers)?)
    }

    /// Word length shared by every entry
    #[inline]
    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.size
    }

    /// Number of guessable words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if `id` does not belong to this dictionary
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// Every guessable word, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Find the id of a word, if it is in the dictionary
    #[must_use]
    pub fn id_of(&self, word: &Word) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Find the id of a word given as text
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<WordId> {
        Word::new(text).ok().and_then(|word| self.id_of(&word))
    }

    /// Whether `id` is a possible answer
    #[inline]
    #[must_use]
    pub fn is_answer(&self, id: WordId) -> bool {
        self.is_answer[id.index()]
    }

    /// All possible answers, sorted
    #[must_use]
    pub fn answers(&self) -> &[WordId] {
        &self.answers
    }

    /// Every guessable word id, sorted
    #[must_use]
    pub fn all_ids(&self) -> Vec<WordId> {
        (0..self.words.len() as u32).map(WordId).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_merges_answers_into_guesses() {
        let dictionary =
            Dictionary::from_strs(5, &["kapow", "skill"], &["swill", "skill", "spill"]).unwrap();

        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.answers().len(), 3);

        let kapow = dictionary.lookup("KAPOW").unwrap();
        let skill = dictionary.lookup("skill").unwrap();
        assert!(!dictionary.is_answer(kapow));
        assert!(dictionary.is_answer(skill));
    }

    #[test]
    fn dictionary_ids_follow_lexicographic_order() {
        let dictionary = Dictionary::from_strs(5, &["zesty", "apple"], &["mango"]).unwrap();
        let texts: Vec<&str> = dictionary
            .all_ids()
            .into_iter()
            .map(|id| dictionary.word(id).text())
            .collect();
        assert_eq!(texts, ["APPLE", "MANGO", "ZESTY"]);
    }

    #[test]
    fn dictionary_rejects_mixed_lengths() {
        let result = Dictionary::from_strs(5, &["olea"], &["salty"]);
        assert!(matches!(
            result,
            Err(DictionaryError::WrongLength {
                expected: 5,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn dictionary_rejects_bad_size_and_empty_answers() {
        assert_eq!(
            Dictionary::new(3, Vec::new(), Vec::new()).unwrap_err(),
            DictionaryError::UnsupportedSize(3)
        );
        assert_eq!(
            Dictionary::from_strs(5, &["salty"], &[]).unwrap_err(),
            DictionaryError::NoAnswers
        );
    }

    #[test]
    fn dictionary_lookup_missing_word() {
        let dictionary = Dictionary::from_strs(5, &[], &["salty"]).unwrap();
        assert_eq!(dictionary.lookup("salad"), None);
        assert_eq!(dictionary.lookup("not a word"), None);
    }
}
