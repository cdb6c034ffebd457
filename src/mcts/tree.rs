//! Arena-based UCT tree.
//!
//! Uses a flat `Vec<UctNode>` with index-based references. Children are
//! handles owned by the arena and parents are plain back-handles, so tearing
//! the tree down is a single `Vec` drop with no recursion.

use std::fmt;

use super::node::{NodeId, UctNode};
use super::policy::SelectionPolicy;
use crate::core::GameState;

/// Arena-based UCT tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
#[derive(Clone, Debug)]
pub struct UctTree<M> {
    /// All nodes in the tree.
    nodes: Vec<UctNode<M>>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl<M: Clone + PartialEq> UctTree<M> {
    /// Create a new tree whose root is built from `state`.
    pub fn new<S>(state: &S) -> Self
    where
        S: GameState<Move = M>,
    {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity<S>(state: &S, capacity: usize) -> Self
    where
        S: GameState<Move = M>,
    {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(UctNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &UctNode<M> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut UctNode<M> {
        &mut self.nodes[id.0 as usize]
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &UctNode<M> {
        self.get(self.root)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (only after `clear`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &UctNode<M>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Expand `mv` under `parent`.
    ///
    /// `state` is the position after `mv` has been applied. The move is
    /// removed from the parent's untried moves and the new child is
    /// appended to its children.
    pub fn add_child<S>(&mut self, parent: NodeId, mv: M, state: &S) -> NodeId
    where
        S: GameState<Move = M>,
    {
        let depth = self.get(parent).depth + 1;
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(UctNode::new(Some(mv.clone()), parent, depth, state));

        let parent_node = self.get_mut(parent);
        parent_node.remove_untried(&mv);
        parent_node.children.push(id);
        id
    }

    /// Pick the child of `id` with the highest selection score.
    ///
    /// Ties resolve to the last maximal child in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the node has no children or any child is unvisited; the
    /// search loop only selects from fully expanded nodes.
    pub fn select_child<P>(&self, id: NodeId, policy: &P, exploration: f64) -> NodeId
    where
        P: SelectionPolicy + ?Sized,
    {
        let node = self.get(id);
        assert!(
            !node.children.is_empty(),
            "select_child called on {} which has no children",
            id
        );

        node.children
            .iter()
            .map(|&child_id| {
                let child = self.get(child_id);
                assert!(child.visits > 0, "select_child reached unvisited {}", child_id);
                let score = policy.score(child.wins, child.visits, node.visits, exploration);
                (child_id, score)
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(child_id, _)| child_id)
            .unwrap_or(NodeId::NONE)
    }

    /// Credit a finished game to every node from `leaf` up to the root.
    ///
    /// Each node is updated with the result seen by its own
    /// `player_just_moved`.
    pub fn backpropagate<S>(&mut self, leaf: NodeId, terminal: &S)
    where
        S: GameState<Move = M>,
    {
        let mut current = leaf;
        while !current.is_none() {
            let node = self.get_mut(current);
            node.update(terminal.result(node.player_just_moved));
            current = node.parent;
        }
    }

    /// The root child with the most visits.
    ///
    /// Ties resolve to the last such child in insertion order.
    #[must_use]
    pub fn best_child(&self) -> Option<NodeId> {
        self.root_node()
            .children
            .iter()
            .copied()
            .max_by_key(|&id| self.get(id).visits)
    }

    /// Move of the most visited root child.
    #[must_use]
    pub fn best_move(&self) -> Option<M> {
        self.best_child().and_then(|id| self.get(id).mv.clone())
    }

    /// Root children as (move, visits, win rate) triples.
    pub fn root_children(&self) -> Vec<(M, u32, f64)> {
        self.root_node()
            .children
            .iter()
            .filter_map(|&id| {
                let child = self.get(id);
                child.mv.clone().map(|mv| (mv, child.visits, child.win_rate()))
            })
            .collect()
    }

    /// Sum of the visit counts of `id`'s children.
    #[must_use]
    pub fn child_visits(&self, id: NodeId) -> u32 {
        self.get(id)
            .children
            .iter()
            .map(|&child| self.get(child).visits)
            .sum()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal_leaf()).count();
        let untried_moves = self.nodes.iter().map(|n| n.untried_moves.len()).sum();
        let total_children = self.nodes.iter().map(|n| n.children.len()).sum();
        let internal_count = self.nodes.iter().filter(|n| !n.children.is_empty()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            untried_moves,
            total_children,
            internal_count,
        }
    }

    /// Release every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NodeId::NONE;
    }
}

impl<M: fmt::Debug> UctTree<M> {
    /// Depth-indented dump of the whole tree, one node per line.
    pub fn tree_to_string(&self) -> String {
        let mut out = String::new();
        if self.nodes.is_empty() {
            return out;
        }

        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, indent)) = stack.pop() {
            let node = &self.nodes[id.0 as usize];
            out.push('\n');
            for _ in 0..indent {
                out.push_str("| ");
            }
            out.push_str(&node.describe());
            stack.extend(node.children.iter().rev().map(|&child| (child, indent + 1)));
        }
        out
    }

    /// One line per root child.
    pub fn children_to_string(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.nodes.get(self.root.0 as usize) {
            for &child in &root.children {
                out.push_str(&self.nodes[child.0 as usize].describe());
                out.push('\n');
            }
        }
        out
    }
}

/// Statistics about the UCT tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Number of nodes with neither untried moves nor children.
    pub terminal_count: usize,

    /// Moves still waiting to be expanded, summed over all nodes.
    pub untried_moves: usize,

    /// Parent to child links (node_count - 1 for a non-empty tree).
    pub total_children: usize,

    /// Nodes with at least one expanded child.
    pub internal_count: usize,
}

impl TreeStats {
    /// Average number of expanded children per non-leaf node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.internal_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.internal_count as f64
        }
    }
}
