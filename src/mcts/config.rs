//! UCT configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Result, UctError};

/// UCT configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UctConfig {
    /// Scale applied to the UCB1 exploration term (default: 1.0).
    /// The term already carries the classic `sqrt(2 ln N / n)` form, so 1.0
    /// is plain UCB1. Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion picks and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Log the whole tree after a search instead of only the root children.
    pub verbose: bool,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.0,
            seed: 42,
            verbose: false,
        }
    }
}

impl UctConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config that dumps the full tree after each search.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check that the parameters describe a usable search.
    pub fn validate(&self) -> Result<()> {
        let c = self.exploration_constant;
        if !c.is_finite() || c < 0.0 {
            return Err(UctError::InvalidExploration(c));
        }
        Ok(())
    }
}
