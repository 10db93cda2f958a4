//! Word list loading utilities
//!
//! Reads word lists from files or embedded constants, keeping only valid
//! words of the requested length.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of length `size` from a file
///
/// One word per line; blank lines, invalid entries and words of another
/// length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, size: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_list(content.lines(), size);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert an embedded string slice to words of length `size`
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::SAMPLE_ANSWERS;
///
/// let words = words_from_slice(SAMPLE_ANSWERS, 5);
/// assert_eq!(words.len(), SAMPLE_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], size: usize) -> Vec<Word> {
    parse_list(slice.iter().copied(), size)
}

fn parse_list<'a>(lines: impl Iterator<Item = &'a str>, size: usize) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) if word.size() == size => Some(word),
            Ok(_) => None,
            Err(err) => {
                log::debug!("skipping {line:?}: {err}");
                None
            }
        })
        .collect()
}
