//! UCT search node.
//!
//! Uses arena-based allocation with index references (NodeId). A node's
//! `parent` is a plain handle into the same arena, so there is no ownership
//! cycle between a node and its children.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, PlayerId};

/// Index into the UctTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the UCT tree.
///
/// `wins` is accumulated from the viewpoint of `player_just_moved`, the
/// player who chose `mv`.
#[derive(Clone, Debug)]
pub struct UctNode<M> {
    /// The move that produced this node (None for root).
    pub mv: Option<M>,

    /// Parent node (NONE for root). Non-owning.
    pub parent: NodeId,

    /// Player who made `mv`, captured when the node was built.
    pub player_just_moved: PlayerId,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Sum of backpropagated results.
    pub wins: f64,

    /// Number of backpropagations through this node.
    pub visits: u32,

    /// Legal moves not yet expanded into children.
    pub untried_moves: SmallVec<[M; 8]>,

    /// Expanded children, in insertion order.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<M: Clone + PartialEq> UctNode<M> {
    /// Create a node for `mv` from the position reached by playing it.
    ///
    /// Untried moves are always enumerated eagerly from `state`.
    pub fn new<S>(mv: Option<M>, parent: NodeId, depth: u32, state: &S) -> Self
    where
        S: GameState<Move = M>,
    {
        Self {
            mv,
            parent,
            player_just_moved: state.player_just_moved(),
            depth,
            wins: 0.0,
            visits: 0,
            untried_moves: state.moves().into_iter().collect(),
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root<S>(state: &S) -> Self
    where
        S: GameState<Move = M>,
    {
        Self::new(None, NodeId::NONE, 0, state)
    }

    /// Check if this is the root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if some moves are still waiting to be expanded.
    #[must_use]
    pub fn has_untried(&self) -> bool {
        !self.untried_moves.is_empty()
    }

    /// No untried moves and at least one child: ready for UCB1 selection.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty() && !self.children.is_empty()
    }

    /// No untried moves and no children: the position had no legal moves.
    #[must_use]
    pub fn is_terminal_leaf(&self) -> bool {
        self.untried_moves.is_empty() && self.children.is_empty()
    }

    /// Drop `mv` from the untried moves.
    pub(crate) fn remove_untried(&mut self, mv: &M) {
        self.untried_moves.retain(|m| m != mv);
    }

    /// Record one more visit with `result`, already expressed from
    /// `player_just_moved`'s viewpoint.
    #[inline]
    pub fn update(&mut self, result: f64) {
        self.visits += 1;
        self.wins += result;
    }

    /// Mean result over all visits.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f64
        }
    }
}

impl<M: fmt::Debug> UctNode<M> {
    /// One-line summary: win rate, move, win/visit counts, untried moves.
    pub fn describe(&self) -> String {
        let pct = if self.visits == 0 {
            0
        } else {
            (100.0 * self.wins / self.visits as f64) as u32
        };
        let untried: Vec<&M> = self.untried_moves.iter().collect();
        match &self.mv {
            Some(mv) => format!(
                "{}% {:?} W/V:{}/{} U:{:?}",
                pct, mv, self.wins, self.visits, untried
            ),
            None => format!("[root] W/V:{}/{} U:{:?}", self.wins, self.visits, untried),
        }
    }
}
