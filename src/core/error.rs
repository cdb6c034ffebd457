//! Error types for the search engine and the reference games.
//!
//! Only recoverable conditions live here. Contract violations (selecting
//! from a childless node, asking a non-terminal state for its result,
//! applying an illegal move through the unchecked path) are panics.

use thiserror::Error;

/// Errors surfaced by the checked entry points of the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UctError {
    #[error("root position is terminal: there is no move to search for")]
    TerminalRoot,

    #[error("iteration budget must be positive")]
    ZeroIterations,

    #[error("exploration constant must be finite and non-negative, got {0}")]
    InvalidExploration(f64),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Convenience Result type for rust-uct operations.
pub type Result<T> = std::result::Result<T, UctError>;
