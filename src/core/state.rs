//! The game-state contract consumed by the search engine.
//!
//! Games implement `GameState` to plug into UCT:
//! - What moves are legal
//! - How a move modifies the position
//! - Who made the last move
//! - Who won, once the game is over
//!
//! The engine calls into `GameState` but never interprets moves itself.

use std::fmt::Debug;

use super::player::PlayerId;

/// A fully specified position of a two-player, zero-sum, perfect-information
/// game.
///
/// ## Implementation Notes
///
/// - `Clone` must be a deep copy: rollouts mutate a clone destructively while
///   the original position has to stay replayable.
/// - `do_move` must switch `player_just_moved` to the mover.
/// - `moves` returns an empty vec exactly when the game is over, in an order
///   that is stable for a given position.
/// - `result` is only defined on terminal positions.
///
/// ## Viewpoint
///
/// Each search node records `player_just_moved` of the position it was built
/// from. That player made the move leading into the node and is the one
/// choosing among the node and its siblings, so a node's win total is always
/// credited from that player's side.
pub trait GameState: Clone {
    /// An opaque move. The engine only clones and compares moves.
    type Move: Clone + PartialEq + Debug;

    /// The player whose move produced this position.
    ///
    /// For the initial position this is the player who does *not* move first.
    fn player_just_moved(&self) -> PlayerId;

    /// Apply a legal move in place.
    ///
    /// Passing a move not returned by `moves` is a contract violation;
    /// implementations are expected to panic.
    fn do_move(&mut self, mv: &Self::Move);

    /// All legal moves from this position. Empty iff the game is over.
    fn moves(&self) -> Vec<Self::Move>;

    /// Outcome from `player`'s viewpoint: 1.0 win, 0.0 loss, 0.5 draw.
    ///
    /// Panics if the position is not terminal.
    fn result(&self, player: PlayerId) -> f64;

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.moves().is_empty()
    }
}
