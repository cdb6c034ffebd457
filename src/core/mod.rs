//! Core engine types: players, the game-state contract, RNG, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.
//! Games implement `GameState` rather than modifying the engine.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{Result, UctError};
pub use player::PlayerId;
pub use rng::GameRng;
pub use state::GameState;
