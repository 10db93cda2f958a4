//! Played-turn history across all boards of a game

use crate::core::{Pattern, WordId};

/// One scored guess on one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreboardRow {
    /// 1-based round number
    pub round: usize,
    /// Index of the board within its session
    pub board: usize,
    /// The hidden answer, if the board has one
    pub answer: Option<WordId>,
    pub guess: WordId,
    pub pattern: Pattern,
    /// Candidates left on the board after this turn
    pub remaining: usize,
}

/// Ordered record of every turn played
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    rows: Vec<ScoreboardRow>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ScoreboardRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[ScoreboardRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest round recorded
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rows.iter().map(|row| row.round).max().unwrap_or(0)
    }

    /// Rows of one board, in play order
    pub fn board(&self, board: usize) -> impl Iterator<Item = &ScoreboardRow> {
        self.rows.iter().filter(move |row| row.board == board)
    }

    /// Rows of one round, in board order
    pub fn round(&self, round: usize) -> impl Iterator<Item = &ScoreboardRow> {
        self.rows.iter().filter(move |row| row.round == round)
    }
}
