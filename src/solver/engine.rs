//! Main solver interface
//!
//! Plays whole games: single board, several boards at once, or against the
//! evader.

use super::scorer::Scorer;
use super::simul;
use super::strategy::{RankedGuess, SolverConfig, Strategy, StrategyType};
use crate::core::{Dictionary, WordId};
use crate::error::SolverError;
use crate::game::{Scoreboard, Session};

/// Opening guess per word length, 4 through 9 letters
const SEEDS: [&str; 6] = ["OLEA", "RAISE", "TAILER", "TENAILS", "CENTRALS", "SECRETION"];

/// Default round budget for a single board
pub const DEFAULT_MAX_ROUNDS: usize = 20;

/// The standard opening for the dictionary's word length, if it is a word
#[must_use]
pub fn default_seed(dictionary: &Dictionary) -> Option<WordId> {
    let index = dictionary.word_size().checked_sub(4)?;
    SEEDS
        .get(index)
        .and_then(|seed| dictionary.lookup(seed))
}

/// A finished game
#[derive(Debug, Clone)]
pub struct Game {
    guesses: Vec<WordId>,
    session: Session,
}

impl Game {
    /// Guesses in play order
    #[must_use]
    pub fn guesses(&self) -> &[WordId] {
        &self.guesses
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        self.session.scoreboard()
    }
}

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
#[derive(Debug)]
pub struct Solver<'a, S: Strategy = StrategyType> {
    strategy: S,
    scorer: &'a Scorer,
    universe: Vec<WordId>,
    pool: Vec<WordId>,
    seed: Option<WordId>,
    max_rounds: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver from settings
    #[must_use]
    pub fn from_config(scorer: &'a Scorer, config: &SolverConfig) -> Self {
        Self::new(StrategyType::from_config(config), scorer).with_max_rounds(config.max_rounds)
    }
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy
    ///
    /// Guesses may be any dictionary word, candidates start as the answer
    /// list and the first guess is the length's standard opening when the
    /// dictionary has it.
    pub fn new(strategy: S, scorer: &'a Scorer) -> Self {
        let dictionary = scorer.dictionary();
        Self {
            strategy,
            scorer,
            universe: dictionary.all_ids(),
            pool: dictionary.answers().to_vec(),
            seed: default_seed(dictionary),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Restrict the allowed guesses
    #[must_use]
    pub fn with_universe(mut self, universe: Vec<WordId>) -> Self {
        self.universe = universe;
        self
    }

    /// Start from a custom candidate pool
    #[must_use]
    pub fn with_pool(mut self, mut pool: Vec<WordId>) -> Self {
        pool.sort_unstable();
        pool.dedup();
        self.pool = pool;
        self
    }

    /// Override the first guess; `None` lets the strategy choose
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<WordId>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn scorer(&self) -> &'a Scorer {
        self.scorer
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn pool(&self) -> &[WordId] {
        &self.pool
    }

    #[must_use]
    pub fn universe(&self) -> &[WordId] {
        &self.universe
    }

    #[must_use]
    pub const fn seed(&self) -> Option<WordId> {
        self.seed
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Rank guesses for one candidate pool
    ///
    /// # Errors
    /// Propagates the strategy's `EmptyPool` / `EmptyGuessUniverse`.
    pub fn rank(&self, pool: &[WordId]) -> Result<RankedGuess, SolverError> {
        self.strategy.select_guess(self.scorer, pool, &self.universe)
    }

    /// Next guess for a session in progress
    ///
    /// Opening guesses are played first, then the seed on the first round;
    /// after that the strategy decides.
    ///
    /// # Errors
    /// Propagates ranking errors.
    pub fn next_guess(&self, session: &Session, opening: &[WordId]) -> Result<WordId, SolverError> {
        let round = session.rounds();
        if let Some(&guess) = opening.get(round) {
            return Ok(guess);
        }
        if let Some(seed) = self.seed.filter(|_| round == 0) {
            return Ok(seed);
        }

        let pools = session.active_pools();
        let ranked = match pools.as_slice() {
            [pool] => self.rank(pool)?,
            _ => simul::rank(self.scorer, &pools, &self.universe, self.strategy.kind())?,
        };
        Ok(ranked.word)
    }

    /// Play one board against `answer`
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if `answer` is not a candidate
    /// - `SolverError::UnsolvedWithinBudget` after `max_rounds` guesses
    pub fn run(&self, answer: WordId, opening: &[WordId]) -> Result<Game, SolverError> {
        let session = Session::with_answers(&self.pool, &[Some(answer)])?;
        self.play(session, opening, self.max_rounds)
    }

    /// Play one board per answer with a shared guess stream
    ///
    /// The budget grows by one round per board.
    ///
    /// # Errors
    /// As [`Solver::run`].
    pub fn run_simul(&self, answers: &[WordId], opening: &[WordId]) -> Result<Game, SolverError> {
        let answers: Vec<Option<WordId>> = answers.iter().copied().map(Some).collect();
        let session = Session::with_answers(&self.pool, &answers)?;
        self.play(session, opening, self.max_rounds + answers.len())
    }

    /// Play one board against the evader
    ///
    /// # Errors
    /// As [`Solver::run`].
    pub fn run_hidden(&self, opening: &[WordId]) -> Result<Game, SolverError> {
        let session = Session::with_answers(&self.pool, &[None])?;
        self.play(session, opening, self.max_rounds)
    }

    fn play(
        &self,
        mut session: Session,
        opening: &[WordId],
        budget: usize,
    ) -> Result<Game, SolverError> {
        let mut guesses = Vec::new();

        while !session.is_finished() {
            if session.rounds() >= budget {
                log::debug!("budget of {budget} rounds exhausted");
                return Err(SolverError::UnsolvedWithinBudget {
                    rounds: session.rounds(),
                    scoreboard: session.scoreboard().clone(),
                });
            }
            let guess = self.next_guess(&session, opening)?;
            session.advance(self.scorer, guess, None)?;
            guesses.push(guess);
        }

        log::debug!(
            "solved {} boards in {} rounds",
            session.boards().len(),
            guesses.len()
        );
        Ok(Game { guesses, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardState;
    use crate::solver::strategy::{EntropyStrategy, MinimaxStrategy, StrategyKind};

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow"],
            &["salty", "skill", "spill", "still", "swill"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn id(scorer: &Scorer, word: &str) -> WordId {
        scorer.dictionary().lookup(word).unwrap()
    }

    #[test]
    fn run_solves_with_probe_then_answer() {
        let scorer = setup();
        let solver = Solver::new(MinimaxStrategy, &scorer);
        assert_eq!(solver.seed(), None);

        let game = solver.run(id(&scorer, "swill"), &[]).unwrap();
        assert_eq!(game.guesses(), [id(&scorer, "kapow"), id(&scorer, "swill")]);
        assert_eq!(game.rounds(), 2);
        assert_eq!(game.session().boards()[0].state(), BoardState::Solved);
    }

    #[test]
    fn opening_guesses_come_first() {
        let scorer = setup();
        let solver = Solver::new(EntropyStrategy, &scorer);
        let salty = id(&scorer, "salty");

        let game = solver.run(id(&scorer, "skill"), &[salty]).unwrap();
        assert_eq!(game.guesses()[0], salty);
        assert_eq!(game.guesses()[1], id(&scorer, "kapow"));
        assert_eq!(game.rounds(), 3);
        assert_eq!(game.scoreboard().rows()[0].pattern.to_string(), "20100");
    }

    #[test]
    fn length_seed_opens_when_present() {
        let dictionary =
            Dictionary::from_strs(5, &["raise", "kapow"], &["salty", "skill", "spill"]).unwrap();
        let scorer = Scorer::new(dictionary);
        let raise = id(&scorer, "raise");
        let solver = Solver::from_config(&scorer, &SolverConfig::default());
        assert_eq!(solver.seed(), Some(raise));

        let game = solver.run(id(&scorer, "spill"), &[]).unwrap();
        assert_eq!(game.guesses()[0], raise);

        let game = solver.with_seed(None).run(id(&scorer, "spill"), &[]).unwrap();
        assert_ne!(game.guesses()[0], raise);
    }

    #[test]
    fn budget_exhaustion_reports_history() {
        let scorer = setup();
        let solver = Solver::new(MinimaxStrategy, &scorer).with_max_rounds(1);

        let err = solver.run(id(&scorer, "still"), &[]).unwrap_err();
        let SolverError::UnsolvedWithinBudget { rounds, scoreboard } = err else {
            panic!("expected budget failure, got {err:?}");
        };
        assert_eq!(rounds, 1);
        assert_eq!(scoreboard.len(), 1);
        assert_eq!(scoreboard.rows()[0].guess, id(&scorer, "kapow"));
    }

    #[test]
    fn hidden_game_ends_when_evader_runs_out() {
        let scorer = setup();
        let solver = Solver::new(MinimaxStrategy, &scorer);

        let game = solver.run_hidden(&[]).unwrap();
        let rows = game.scoreboard().rows();
        assert_eq!(rows[0].pattern.to_string(), "00000");
        assert_eq!(game.guesses(), [id(&scorer, "kapow"), id(&scorer, "still")]);
        assert!(rows.last().unwrap().pattern.is_perfect());
    }

    #[test]
    fn simul_solves_every_board() {
        let scorer = setup();
        let solver = Solver::from_config(
            &scorer,
            &SolverConfig {
                kind: StrategyKind::Entropy,
                ..SolverConfig::default()
            },
        );
        let answers = [id(&scorer, "skill"), id(&scorer, "salty")];

        let game = solver.run_simul(&answers, &[]).unwrap();
        assert!(game.session().is_solved());
        assert!(game.rounds() <= solver.max_rounds() + answers.len());
        for (index, &answer) in answers.iter().enumerate() {
            let last = game.scoreboard().board(index).last().unwrap();
            assert_eq!(last.guess, answer);
            assert!(last.pattern.is_perfect());
        }
    }

    #[test]
    fn default_seed_per_length() {
        let dictionary = Dictionary::from_strs(4, &["olea"], &["able"]).unwrap();
        assert_eq!(default_seed(&dictionary), dictionary.lookup("olea"));

        let dictionary = Dictionary::from_strs(6, &["raised"], &["tailed"]).unwrap();
        assert_eq!(default_seed(&dictionary), None);
    }
}
