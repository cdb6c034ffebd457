//! # rust-uct
//!
//! A generic UCT (Upper Confidence bounds applied to Trees) Monte Carlo Tree
//! Search engine for two-player, zero-sum, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees the `GameState` trait. Moves are
//!    opaque values that are cloned and compared, never interpreted.
//!
//! 2. **Arena Storage**: The search tree is a flat vector of nodes indexed by
//!    `NodeId`. Dropping the tree is a single deallocation.
//!
//! 3. **Reproducible**: All randomness comes from an injected, seeded
//!    `GameRng`. Same seed and budget, same tree.
//!
//! ## Modules
//!
//! - `core`: Player IDs, the `GameState` contract, RNG, errors
//! - `mcts`: Search tree, UCB1 selection, random rollouts, the UCT loop
//! - `games`: Reference games (Nim, noughts and crosses)

pub mod core;
pub mod games;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{GameRng, GameState, PlayerId, Result, UctError};

pub use crate::games::{NimState, OxoState};

pub use crate::mcts::{
    NodeId, RandomRollout, SearchStats, SelectionPolicy, SimulationPolicy, TreeStats, UctConfig,
    UctNode, UctSearch, UctTree, UCB1,
};
