//! Core UCT search algorithm.
//!
//! Each iteration clones the root position and runs the four classic
//! phases against it:
//!
//! 1. **Select**: descend through fully expanded nodes by UCB1.
//! 2. **Expand**: add one random untried move as a new child.
//! 3. **Simulate**: play random moves until the game ends.
//! 4. **Backpropagate**: credit the result to every node on the path, each
//!    from the viewpoint of the player who moved into it.
//!
//! The recommended move is the most visited root child.

use std::time::Instant;

use tracing::{debug, trace, Level};

use crate::core::{GameRng, GameState, Result, UctError};

use super::config::UctConfig;
use super::policy::{RandomRollout, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::UctTree;

/// UCT search context.
///
/// Generic over the game-state type. Owns the configuration, the random
/// source, and the policies. Trees are built per call and never kept.
pub struct UctSearch<S: GameState> {
    /// Search configuration.
    config: UctConfig,

    /// RNG for expansion picks and rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy<S>>,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl<S: GameState> UctSearch<S> {
    /// Create a new search context seeded from `config.seed`.
    pub fn new(config: UctConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomRollout),
            stats: SearchStats::default(),
        }
    }

    /// Replace the random source.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set a custom selection policy.
    pub fn with_selection<P: SelectionPolicy + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<P: SimulationPolicy<S> + 'static>(mut self, simulation: P) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run `iterations` UCT iterations from `root` and return the most
    /// visited move.
    ///
    /// Returns `None` when `root` is terminal (or `iterations` is zero):
    /// there is no move to recommend. Callers that want that reported as an
    /// error should use [`try_search`](Self::try_search).
    pub fn search(&mut self, root: &S, iterations: u32) -> Option<S::Move> {
        let tree = self.search_tree(root, iterations);
        tree.best_move()
    }

    /// Checked variant of [`search`](Self::search).
    pub fn try_search(&mut self, root: &S, iterations: u32) -> Result<S::Move> {
        self.config.validate()?;
        if iterations == 0 {
            return Err(UctError::ZeroIterations);
        }
        if root.is_terminal() {
            return Err(UctError::TerminalRoot);
        }
        self.search(root, iterations).ok_or(UctError::TerminalRoot)
    }

    /// Run `iterations` UCT iterations from `root` and hand back the tree.
    ///
    /// `root` itself is never modified; every iteration works on its own
    /// clone.
    pub fn search_tree(&mut self, root: &S, iterations: u32) -> UctTree<S::Move> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = UctTree::new(root);

        for _ in 0..iterations {
            let mut state = root.clone();
            self.iteration(&mut tree, &mut state);
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            iterations = self.stats.iterations,
            nodes = tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "UCT search complete"
        );
        if tracing::enabled!(Level::DEBUG) {
            if self.config.verbose {
                debug!("search tree:{}", tree.tree_to_string());
            } else {
                debug!("root children:\n{}", tree.children_to_string());
            }
        }

        tree
    }

    /// Single UCT iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, tree: &mut UctTree<S::Move>, state: &mut S) {
        let mut current = tree.root();

        // === SELECTION ===
        while tree.get(current).is_fully_expanded() {
            current =
                tree.select_child(current, self.selection.as_ref(), self.config.exploration_constant);
            if let Some(mv) = &tree.get(current).mv {
                state.do_move(mv);
            }
        }

        // === EXPANSION ===
        let picked = self.rng.choose(tree.get(current).untried_moves.as_slice()).cloned();
        if let Some(mv) = picked {
            state.do_move(&mv);
            current = tree.add_child(current, mv, &*state);

            self.stats.nodes_expanded += 1;
            self.stats.max_depth = self.stats.max_depth.max(tree.get(current).depth);
        }

        // === SIMULATION ===
        let played = self.simulation.simulate(state, &mut self.rng);
        self.stats.simulations += 1;
        self.stats.rollout_moves += u64::from(played);

        // === BACKPROPAGATION ===
        tree.backpropagate(current, &*state);

        trace!(
            leaf = current.raw(),
            depth = tree.get(current).depth,
            rollout_moves = played,
            "UCT iteration complete"
        );
    }

    /// Get statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &UctConfig {
        &self.config
    }
}
