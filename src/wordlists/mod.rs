//! Word lists
//!
//! Embedded five-letter sample lists plus loaders for word list files.

pub mod loader;
mod sample;

pub use sample::{SAMPLE_ANSWERS, SAMPLE_GUESSES};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    #[test]
    fn samples_are_valid_words() {
        for &word in SAMPLE_ANSWERS.iter().chain(SAMPLE_GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn samples_are_sorted_and_disjoint() {
        assert!(SAMPLE_ANSWERS.windows(2).all(|w| w[0] < w[1]));
        assert!(SAMPLE_GUESSES.windows(2).all(|w| w[0] < w[1]));
        assert!(SAMPLE_GUESSES.iter().all(|g| !SAMPLE_ANSWERS.contains(g)));
    }

    #[test]
    fn samples_build_a_dictionary() {
        let dictionary = Dictionary::from_strs(5, SAMPLE_GUESSES, SAMPLE_ANSWERS).unwrap();
        assert_eq!(dictionary.answers().len(), SAMPLE_ANSWERS.len());
        assert_eq!(
            dictionary.len(),
            SAMPLE_ANSWERS.len() + SAMPLE_GUESSES.len()
        );
        assert!(dictionary.lookup("raise").is_some());
    }
}
