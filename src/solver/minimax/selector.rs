//! Minimax-based word selection
//!
//! Selects words that minimize the worst-case remaining candidates.

use super::calculator::MinimaxGuess;
use crate::core::WordId;
use crate::solver::partition::Histogram;
use crate::solver::scorer::Scorer;
use rayon::prelude::*;

fn scored(
    scorer: &Scorer,
    pool: &[WordId],
    universe: &[WordId],
) -> impl ParallelIterator<Item = MinimaxGuess> {
    universe.par_iter().map_init(
        || Histogram::new(scorer.word_size()),
        move |histogram, &guess| {
            histogram.fill(scorer, guess, pool);
            MinimaxGuess::from_histogram(guess, histogram)
        },
    )
}

/// Select the guess with the smallest worst case
///
/// Returns `None` if `universe` is empty.
#[must_use]
pub fn select_best_guess(
    scorer: &Scorer,
    pool: &[WordId],
    universe: &[WordId],
) -> Option<MinimaxGuess> {
    scored(scorer, pool, universe).min()
}

/// Score every guess in `universe`, best first
#[must_use]
pub fn rank_guesses(scorer: &Scorer, pool: &[WordId], universe: &[WordId]) -> Vec<MinimaxGuess> {
    let mut guesses: Vec<MinimaxGuess> = scored(scorer, pool, universe).collect();
    guesses.sort_unstable();
    guesses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow", "vivid", "zzzzz"],
            &["skill", "spill", "still", "swill", "funky", "musky", "roomy"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn ids(scorer: &Scorer, words: &[&str]) -> Vec<WordId> {
        words
            .iter()
            .filter_map(|w| scorer.dictionary().lookup(w))
            .collect()
    }

    #[test]
    fn pool_only_universe_cannot_beat_three() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);

        let best = select_best_guess(&scorer, &pool, &pool).unwrap();
        assert_eq!(best.largest_bucket, 3);
        assert!(best.is_candidate);
        assert_eq!(scorer.dictionary().word(best.word).text(), "SKILL");
    }

    #[test]
    fn probe_isolates_every_candidate() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);

        let best = select_best_guess(&scorer, &pool, &scorer.dictionary().all_ids()).unwrap();
        assert_eq!(scorer.dictionary().word(best.word).text(), "KAPOW");
        assert_eq!(best.largest_bucket, 1);
        assert_eq!(best.buckets, 4);
    }

    #[test]
    fn selection_ignores_universe_order() {
        let scorer = setup();
        let pool = ids(&scorer, &["funky", "musky", "roomy", "skill"]);
        let universe = scorer.dictionary().all_ids();
        let expected = select_best_guess(&scorer, &pool, &universe);

        let mut reversed = universe.clone();
        reversed.reverse();
        assert_eq!(select_best_guess(&scorer, &pool, &reversed), expected);

        let mut rotated = universe;
        rotated.rotate_left(3);
        assert_eq!(select_best_guess(&scorer, &pool, &rotated), expected);
    }

    #[test]
    fn empty_universe_returns_none() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill"]);
        assert!(select_best_guess(&scorer, &pool, &[]).is_none());
    }

    #[test]
    fn rank_guesses_sorted_best_first() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);

        let ranked = rank_guesses(&scorer, &pool, &scorer.dictionary().all_ids());
        assert_eq!(ranked.len(), scorer.dictionary().len());
        assert!(ranked.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ranked[0].largest_bucket, 1);
    }
}
