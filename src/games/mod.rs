//! Reference games implementing `GameState`.
//!
//! Small, fully solved games used to exercise the engine:
//! - `NimState`: take 1-3 chips, whoever takes the last chip wins
//! - `OxoState`: noughts and crosses on a 3x3 board

mod nim;
mod oxo;

pub use nim::NimState;
pub use oxo::OxoState;
