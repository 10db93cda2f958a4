//! Command implementations

pub mod benchmark;
pub mod hide;
pub mod solve;

pub use benchmark::{Benchmark, BenchmarkFailure, BenchmarkResult};
pub use hide::{HideOutcome, MAX_HIDE_ROUNDS, run_hide};
pub use solve::{SolveOutcome, run_solve};
