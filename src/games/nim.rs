//! Nim with a single heap.
//!
//! Players alternately take 1, 2 or 3 chips; the player who takes the last
//! chip wins. A heap of `4n + k` chips (k = 1, 2, 3) is a win for the player
//! to move, who takes `k`. A heap of `4n` is a loss for the player to move.

use std::fmt;

use crate::core::{GameState, PlayerId, Result, UctError};

/// Largest number of chips a single move may take.
pub const MAX_TAKE: u8 = 3;

/// A Nim position: remaining chips and who moved last.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NimState {
    chips: u32,
    just_moved: PlayerId,
}

impl NimState {
    /// Create a heap of `chips`, with the first player to move.
    #[must_use]
    pub fn new(chips: u32) -> Self {
        Self {
            chips,
            just_moved: PlayerId::SECOND,
        }
    }

    /// Remaining chips.
    #[must_use]
    pub fn chips(&self) -> u32 {
        self.chips
    }

    /// Take `n` chips, rejecting illegal amounts instead of panicking.
    pub fn try_take(&mut self, n: u8) -> Result<()> {
        if !self.is_legal(n) {
            return Err(UctError::IllegalMove(format!(
                "cannot take {} from a heap of {}",
                n, self.chips
            )));
        }
        self.take(n);
        Ok(())
    }

    fn is_legal(&self, n: u8) -> bool {
        (1..=MAX_TAKE).contains(&n) && u32::from(n) <= self.chips
    }

    fn take(&mut self, n: u8) {
        self.chips -= u32::from(n);
        self.just_moved = self.just_moved.opponent();
    }
}

impl GameState for NimState {
    type Move = u8;

    fn player_just_moved(&self) -> PlayerId {
        self.just_moved
    }

    fn do_move(&mut self, mv: &u8) {
        assert!(self.is_legal(*mv), "illegal Nim move: take {} of {}", mv, self.chips);
        self.take(*mv);
    }

    fn moves(&self) -> Vec<u8> {
        let max = self.chips.min(u32::from(MAX_TAKE)) as u8;
        (1..=max).collect()
    }

    fn result(&self, player: PlayerId) -> f64 {
        assert_eq!(self.chips, 0, "result requested for a running Nim game");
        // Whoever moved last took the last chip.
        if player == self.just_moved {
            1.0
        } else {
            0.0
        }
    }

    fn is_terminal(&self) -> bool {
        self.chips == 0
    }
}

impl fmt::Display for NimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chips:{} JustPlayed:{}", self.chips, self.just_moved.0)
    }
}
