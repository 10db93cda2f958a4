//! Hide mode
//!
//! The user guesses and the evader answers, keeping as many words alive as
//! it can without ever contradicting itself.

use crate::core::{Word, WordId};
use crate::game::Session;
use crate::output::formatters::colored_guess;
use crate::solver::Scorer;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Rounds before the game is abandoned
pub const MAX_HIDE_ROUNDS: usize = 100;

/// How a hide game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOutcome {
    Found { rounds: usize },
    OutOfRounds,
    Quit,
}

/// Run a hide game over `pool`
///
/// `opening` guesses are played before any input is read.
///
/// # Errors
///
/// Returns an error on I/O failure or if `pool` is empty.
pub fn run_hide(
    scorer: &Scorer,
    pool: &[WordId],
    opening: &[WordId],
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<HideOutcome> {
    let dictionary = scorer.dictionary();
    let mut session = Session::with_answers(pool, &[None])?;
    let mut lines = input.lines();
    let mut opening = opening.iter().copied();

    writeln!(
        output,
        "I'm thinking of one of {} words. Type a guess, or 'quit' to give up.\n",
        pool.len()
    )?;

    while session.rounds() < MAX_HIDE_ROUNDS {
        let guess = if let Some(guess) = opening.next() {
            guess
        } else {
            write!(output, "Guess {}> ", session.rounds() + 1)?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(HideOutcome::Quit);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Ok(HideOutcome::Quit);
            }
            if line.is_empty() {
                continue;
            }
            match line.parse::<Word>().ok().and_then(|word| dictionary.id_of(&word)) {
                Some(guess) => guess,
                None => {
                    writeln!(output, "{} {line} is not in the word list", "✗".red())?;
                    continue;
                }
            }
        };

        session.advance(scorer, guess, None)?;
        let Some(row) = session.scoreboard().rows().last() else {
            continue;
        };
        writeln!(
            output,
            "{} {} ({} left)",
            colored_guess(dictionary.word(guess), row.pattern),
            row.pattern,
            row.remaining
        )?;

        if session.is_solved() {
            writeln!(
                output,
                "{}",
                format!("✅ Found it in {} guesses!", session.rounds()).green().bold()
            )?;
            return Ok(HideOutcome::Found {
                rounds: session.rounds(),
            });
        }
    }

    writeln!(
        output,
        "{}",
        format!("Giving up after {MAX_HIDE_ROUNDS} guesses").red()
    )?;
    Ok(HideOutcome::OutOfRounds)
}
