//! UCT Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! Generic UCT for deterministic, perfect-information, two-player zero-sum
//! games. Key features:
//!
//! - **Arena Tree**: Nodes live in a flat `Vec` and refer to each other by
//!   `NodeId`; parents are non-owning handles
//! - **Self-Relative Statistics**: Each node's wins are counted for the
//!   player who moved into it, so UCB1 is meaningful at every depth
//! - **Robust Child**: The answer is the most visited root child
//! - **Deterministic**: The random source is injected and seeded
//!
//! ## Usage
//!
//! ```rust
//! use rust_uct::games::NimState;
//! use rust_uct::mcts::{UctConfig, UctSearch};
//!
//! let state = NimState::new(15);
//! let mut search = UctSearch::new(UctConfig::default().with_seed(7));
//!
//! if let Some(take) = search.search(&state, 1000) {
//!     println!("Take {} chips", take);
//! }
//! ```
//!
//! ## Inspecting the Tree
//!
//! ```rust
//! use rust_uct::games::NimState;
//! use rust_uct::mcts::{UctConfig, UctSearch};
//!
//! let mut search = UctSearch::new(UctConfig::default());
//! let tree = search.search_tree(&NimState::new(6), 500);
//!
//! assert_eq!(tree.root_node().visits, 500);
//! println!("{}", tree.children_to_string());
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::UctConfig;
pub use node::{NodeId, UctNode};
pub use policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::UctSearch;
pub use stats::SearchStats;
pub use tree::{TreeStats, UctTree};
