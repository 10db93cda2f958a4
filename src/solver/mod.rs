//! Wordle solving algorithms
//!
//! Scoring and partitioning, the minimax and entropy rankers, lookahead,
//! multi-board ranking, exhaustive tree search and the game-playing engine.

mod engine;
pub mod entropy;
pub mod lookahead;
pub mod minimax;
mod partition;
mod scorer;
pub mod simul;
pub mod strategy;
pub mod tree;

pub use engine::{DEFAULT_MAX_ROUNDS, Game, Solver, default_seed};
pub use lookahead::LookaheadStrategy;
pub use partition::{Histogram, Partition};
pub use scorer::Scorer;
pub use strategy::{
    EntropyStrategy, GuessScore, MinimaxStrategy, RankedGuess, SolverConfig, Strategy,
    StrategyKind, StrategyType,
};
pub use tree::{
    Branch, DecisionNode, DecisionTree, GuessScope, NodeId, TreeSearch, TreeSearchConfig,
};
