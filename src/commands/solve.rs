//! Interactive solve mode
//!
//! The engine suggests a guess, the user reports the pattern the game
//! showed, and the candidates narrow until one is confirmed.

use crate::core::{Observation, Pattern, WordId};
use crate::error::SolverError;
use crate::game::Session;
use crate::output::formatters::{candidate_list, colored_guess};
use crate::solver::{Scorer, Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates listed in full below this count
const SHOW_CANDIDATES: usize = 12;

/// How an interactive solve ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved { rounds: usize },
    /// The reported patterns rule out every candidate
    NoSolution { rounds: usize },
    /// Input ended or the user quit
    Quit,
}

/// Parse one input line into the guess played and its pattern
///
/// Accepts `PATTERN`, `WORD=PATTERN` or `win`; a bare pattern belongs to the
/// suggested guess.
fn parse_line(
    scorer: &Scorer,
    line: &str,
    suggestion: WordId,
) -> Result<(WordId, Pattern), String> {
    if line.eq_ignore_ascii_case("win") {
        return Ok((suggestion, scorer.perfect()));
    }

    let observation: Observation = line.parse().map_err(|e| format!("{e}"))?;
    let guess = match observation.guess {
        Some(word) => scorer
            .dictionary()
            .id_of(&word)
            .ok_or_else(|| format!("{word} is not in the word list"))?,
        None => suggestion,
    };
    Ok((guess, observation.pattern))
}

/// Run the interactive solver until the answer is found
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver cannot rank a guess.
pub fn run_solve<S: Strategy>(
    solver: &Solver<'_, S>,
    opening: &[WordId],
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<SolveOutcome> {
    let scorer = solver.scorer();
    let dictionary = scorer.dictionary();
    let mut session = Session::with_answers(solver.pool(), &[None])?;
    let mut lines = input.lines();

    writeln!(
        output,
        "Enter the pattern for each guess: 0/-/⬜ absent, 1/Y/🟨 present, 2/G/🟩 exact."
    )?;
    writeln!(
        output,
        "Type WORD=PATTERN if you played another word, 'win' when solved, 'quit' to exit.\n"
    )?;

    loop {
        let suggestion = solver.next_guess(&session, opening)?;
        let pool = session.boards()[0].pool();
        writeln!(
            output,
            "Round {}: {} candidates",
            session.rounds() + 1,
            pool.len()
        )?;
        if pool.len() <= SHOW_CANDIDATES {
            writeln!(output, "  {}", candidate_list(dictionary, pool, SHOW_CANDIDATES))?;
        }
        writeln!(
            output,
            "  Suggested: {}",
            dictionary.word(suggestion).text().bright_yellow().bold()
        )?;

        let (guess, pattern) = loop {
            write!(output, "Pattern> ")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(SolveOutcome::Quit);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Ok(SolveOutcome::Quit);
            }
            if line.is_empty() {
                continue;
            }
            match parse_line(scorer, line, suggestion) {
                Ok(parsed) => break parsed,
                Err(message) => writeln!(output, "{} {message}", "✗".red())?,
            }
        };

        log::debug!("reported {} = {pattern}", dictionary.word(guess));
        match session.advance(scorer, guess, Some(&[Some(pattern)][..])) {
            Ok(()) if session.is_solved() => {
                writeln!(
                    output,
                    "{} {}",
                    colored_guess(dictionary.word(guess), pattern),
                    format!("✅ Solved in {} guesses!", session.rounds()).green().bold()
                )?;
                return Ok(SolveOutcome::Solved {
                    rounds: session.rounds(),
                });
            }
            Ok(()) => {
                writeln!(output, "{}\n", colored_guess(dictionary.word(guess), pattern))?;
            }
            Err(err @ SolverError::Contradiction { .. }) => {
                writeln!(output, "{} no solution: {err}", "❌".red())?;
                return Ok(SolveOutcome::NoSolution {
                    rounds: session.rounds(),
                });
            }
            Err(err @ SolverError::InvalidInput(_)) => {
                writeln!(output, "{} {err}", "✗".red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::MinimaxStrategy;
    use std::io::Cursor;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow"],
            &["salty", "skill", "spill", "still", "swill"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn solve(scorer: &Scorer, input: &str) -> (SolveOutcome, String) {
        let solver = Solver::new(MinimaxStrategy, scorer);
        let mut output = Vec::new();
        let outcome = run_solve(&solver, &[], Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn follows_suggestions_to_the_answer() {
        let scorer = setup();
        let (outcome, output) = solve(&scorer, "00000\n22222\n");
        assert_eq!(outcome, SolveOutcome::Solved { rounds: 2 });
        assert!(output.contains("KAPOW"));
        assert!(output.contains("STILL"));
    }

    #[test]
    fn invalid_lines_reprompt() {
        let scorer = setup();
        let (outcome, output) = solve(&scorer, "xyz\n0000\n\n00000\nwin\n");
        assert_eq!(outcome, SolveOutcome::Solved { rounds: 2 });
        assert!(output.contains("expected 5 letters, got 4"));
    }

    #[test]
    fn word_and_pattern_overrides_the_suggestion() {
        let scorer = setup();
        // SALTY=20100 leaves SKILL, SPILL and SWILL
        let (outcome, output) = solve(&scorer, "salty=20100\nskill=22222\n");
        assert_eq!(outcome, SolveOutcome::Solved { rounds: 2 });
        assert!(output.contains("SKILL SPILL SWILL"));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let scorer = setup();
        let (outcome, output) = solve(&scorer, "crane=00000\nquit\n");
        assert_eq!(outcome, SolveOutcome::Quit);
        assert!(output.contains("CRANE is not in the word list"));
    }

    #[test]
    fn contradiction_reports_no_solution() {
        let scorer = setup();
        let (outcome, output) = solve(&scorer, "20000\n");
        assert_eq!(outcome, SolveOutcome::NoSolution { rounds: 1 });
        assert!(output.contains("no solution"));
    }

    #[test]
    fn end_of_input_quits() {
        let scorer = setup();
        let (outcome, _) = solve(&scorer, "");
        assert_eq!(outcome, SolveOutcome::Quit);
    }
}
