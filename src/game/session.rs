//! Several boards sharing one guess stream

use super::board::Board;
use super::scoreboard::{Scoreboard, ScoreboardRow};
use crate::core::{Pattern, WordId};
use crate::error::SolverError;
use crate::solver::Scorer;

/// Boards played in lockstep plus the history of every turn
///
/// Solved and exhausted boards stay in the session but stop taking guesses.
#[derive(Debug, Clone)]
pub struct Session {
    boards: Vec<Board>,
    scoreboard: Scoreboard,
    rounds: usize,
}

impl Session {
    #[must_use]
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            boards,
            scoreboard: Scoreboard::new(),
            rounds: 0,
        }
    }

    /// One board per answer, all starting from `pool`
    ///
    /// A `None` answer is played against the evader.
    ///
    /// # Errors
    /// Propagates `Board::new` errors.
    pub fn with_answers(pool: &[WordId], answers: &[Option<WordId>]) -> Result<Self, SolverError> {
        let boards = answers
            .iter()
            .map(|&answer| Board::new(pool.to_vec(), answer))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(boards))
    }

    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Guesses played so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// No board is still taking guesses
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.boards.iter().any(Board::is_active)
    }

    /// Every board ended solved
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.boards
            .iter()
            .all(|board| board.state() == super::BoardState::Solved)
    }

    /// Candidate pools of the boards still in play
    #[must_use]
    pub fn active_pools(&self) -> Vec<&[WordId]> {
        self.boards
            .iter()
            .filter(|board| board.is_active())
            .map(Board::pool)
            .collect()
    }

    /// Play `guess` on every active board
    ///
    /// `patterns`, when given, holds one optional reported pattern per board;
    /// missing entries fall back to each board's responder. Every active
    /// board is scored even if an earlier one contradicts.
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if the session is finished or `patterns`
    ///   has the wrong number of entries
    /// - the first `SolverError::Contradiction` raised by any board
    pub fn advance(
        &mut self,
        scorer: &Scorer,
        guess: WordId,
        patterns: Option<&[Option<Pattern>]>,
    ) -> Result<(), SolverError> {
        if self.is_finished() {
            return Err(SolverError::InvalidInput("every board is finished".into()));
        }
        if let Some(patterns) = patterns.filter(|p| p.len() != self.boards.len()) {
            return Err(SolverError::InvalidInput(format!(
                "expected {} patterns, got {}",
                self.boards.len(),
                patterns.len()
            )));
        }

        // Validate lengths up front so a bad pattern leaves no partial round
        if let Some(pattern) = patterns
            .into_iter()
            .flatten()
            .flatten()
            .find(|pattern| pattern.size() != scorer.word_size())
        {
            return Err(SolverError::InvalidInput(format!(
                "pattern {pattern} has {} marks, expected {}",
                pattern.size(),
                scorer.word_size()
            )));
        }

        self.rounds += 1;
        let mut contradiction = None;
        for (index, board) in self.boards.iter_mut().enumerate() {
            if !board.is_active() {
                continue;
            }
            let reported = patterns.and_then(|p| p[index]);
            let result = board.advance(scorer, guess, reported).map(|_| ());
            if let Some(turn) = board.history().last() {
                self.scoreboard.push(ScoreboardRow {
                    round: self.rounds,
                    board: index,
                    answer: board.answer(),
                    guess: turn.guess,
                    pattern: turn.pattern,
                    remaining: turn.remaining,
                });
            }
            match result {
                Ok(()) => {}
                Err(err @ SolverError::Contradiction { .. }) => {
                    contradiction.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }

        contradiction.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::game::BoardState;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow"],
            &["salad", "salty", "skill", "spill", "still", "swill"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn id(scorer: &Scorer, word: &str) -> WordId {
        scorer.dictionary().lookup(word).unwrap()
    }

    #[test]
    fn session_records_every_active_board() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let salty = id(&scorer, "salty");
        let spill = id(&scorer, "spill");
        let mut session = Session::with_answers(&pool, &[Some(salty), Some(spill)]).unwrap();

        session.advance(&scorer, salty, None).unwrap();
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.scoreboard().len(), 2);
        assert_eq!(session.boards()[0].state(), BoardState::Solved);
        assert_eq!(session.active_pools().len(), 1);

        session.advance(&scorer, id(&scorer, "kapow"), None).unwrap();
        session.advance(&scorer, spill, None).unwrap();
        assert!(session.is_finished());
        assert!(session.is_solved());
        // The solved board stops producing rows
        assert_eq!(session.scoreboard().len(), 4);
        assert_eq!(session.scoreboard().board(0).count(), 1);
        assert_eq!(session.scoreboard().rounds(), 3);
    }

    #[test]
    fn contradiction_on_one_board_still_scores_the_rest() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let skill = id(&scorer, "skill");
        let mut session = Session::with_answers(&pool, &[None, None]).unwrap();

        let patterns: [Option<Pattern>; 2] = [
            Some("00000".parse().unwrap()),
            Some("20222".parse().unwrap()),
        ];
        let err = session.advance(&scorer, skill, Some(&patterns)).unwrap_err();

        assert!(matches!(err, SolverError::Contradiction { .. }));
        assert_eq!(session.boards()[0].state(), BoardState::Exhausted);
        assert_eq!(session.boards()[1].pool().len(), 3);
        assert_eq!(session.scoreboard().len(), 2);
    }

    #[test]
    fn pattern_count_must_match_boards() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let skill = id(&scorer, "skill");
        let mut session = Session::with_answers(&pool, &[None, None]).unwrap();

        let patterns: [Option<Pattern>; 1] = [Some("20222".parse().unwrap())];
        assert!(matches!(
            session.advance(&scorer, skill, Some(&patterns)),
            Err(SolverError::InvalidInput(_))
        ));

        let patterns: [Option<Pattern>; 2] = [None, Some("2022".parse().unwrap())];
        assert!(matches!(
            session.advance(&scorer, skill, Some(&patterns)),
            Err(SolverError::InvalidInput(_))
        ));
        assert_eq!(session.rounds(), 0);
        assert!(session.scoreboard().is_empty());
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let scorer = setup();
        let salty = id(&scorer, "salty");
        let mut session = Session::with_answers(&[salty], &[Some(salty)]).unwrap();

        session.advance(&scorer, salty, None).unwrap();
        assert!(matches!(
            session.advance(&scorer, salty, None),
            Err(SolverError::InvalidInput(_))
        ));
    }
}
