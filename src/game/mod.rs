//! Game state
//!
//! A [`Board`] narrows one candidate pool as guesses are scored, a
//! [`Session`] drives several boards with one guess stream, and the
//! [`Scoreboard`] records everything that was played.

mod board;
mod evader;
mod scoreboard;
mod session;

pub use board::{Board, BoardState, Turn};
pub use evader::{Responder, evade};
pub use scoreboard::{Scoreboard, ScoreboardRow};
pub use session::Session;
