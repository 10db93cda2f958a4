//! Formatting utilities for terminal output

use crate::core::{Dictionary, Mark, Pattern, Word, WordId};
use colored::Colorize;

/// Render a guess as coloured tiles, one letter per mark
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Mark::Exact => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Space-separated words of a pool, truncated after `limit`
#[must_use]
pub fn candidate_list(dictionary: &Dictionary, pool: &[WordId], limit: usize) -> String {
    let mut list = pool
        .iter()
        .take(limit)
        .map(|&id| dictionary.word(id).text())
        .collect::<Vec<_>>()
        .join(" ");
    if pool.len() > limit {
        list.push_str(&format!(" … (+{} more)", pool.len() - limit));
    }
    list
}

/// One decision-tree path as `GUESS,pattern value,...`
#[must_use]
pub fn tree_path(dictionary: &Dictionary, path: &[(WordId, Pattern)]) -> String {
    path.iter()
        .map(|&(guess, pattern)| format!("{},{}", dictionary.word(guess), pattern.value()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(5, &["vivid"], &["funky", "musky", "roomy"]).unwrap()
    }

    #[test]
    fn progress_bar_is_clamped() {
        assert_eq!(create_progress_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(create_progress_bar(20.0, 10.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }

    #[test]
    fn candidate_list_truncates() {
        let dictionary = dictionary();
        let pool = dictionary.answers().to_vec();
        assert_eq!(candidate_list(&dictionary, &pool, 5), "FUNKY MUSKY ROOMY");
        assert_eq!(candidate_list(&dictionary, &pool, 2), "FUNKY MUSKY … (+1 more)");
    }

    #[test]
    fn tree_path_uses_pattern_values() {
        let dictionary = dictionary();
        let vivid = dictionary.lookup("vivid").unwrap();
        let funky = dictionary.lookup("funky").unwrap();
        let path = [(vivid, Pattern::new(0, 5)), (funky, Pattern::perfect(5))];
        assert_eq!(tree_path(&dictionary, &path), "VIVID,0,FUNKY,242");
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        let word = Word::new("salty").unwrap();
        let rendered = colored_guess(&word, "22200".parse().unwrap());
        let letters: String = rendered.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "SALTY");
    }
}
