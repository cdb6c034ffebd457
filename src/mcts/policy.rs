//! UCT policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: How to score children of a fully expanded node (UCB1)
//! - `SimulationPolicy`: How to play a position out to the end (uniform random)

use crate::core::{GameRng, GameState};

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for scoring children during the selection phase.
pub trait SelectionPolicy: Send + Sync {
    /// Score a child with `wins` over `visits`, under a parent visited
    /// `parent_visits` times. The highest score is followed.
    ///
    /// Only called with `visits > 0`.
    fn score(&self, wins: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (high win rate) with exploration (low visits).
/// Formula: w/n + c * sqrt(2 * ln(N) / n)
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    #[inline]
    fn score(&self, wins: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
        let n = visits as f64;
        let ln_parent = (parent_visits.max(1) as f64).ln();
        wins / n + exploration * (2.0 * ln_parent / n).sqrt()
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf position.
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Play `state` out until it is terminal.
    ///
    /// Returns the number of moves played.
    fn simulate(&self, state: &mut S, rng: &mut GameRng) -> u32;
}

/// Random simulation policy.
///
/// Plays uniformly random legal moves until no moves remain.
#[derive(Clone, Debug, Default)]
pub struct RandomRollout;

impl<S: GameState> SimulationPolicy<S> for RandomRollout {
    fn simulate(&self, state: &mut S, rng: &mut GameRng) -> u32 {
        let mut played = 0;

        loop {
            let moves = state.moves();
            let Some(mv) = rng.choose(&moves) else {
                return played;
            };
            state.do_move(mv);
            played += 1;
        }
    }
}
