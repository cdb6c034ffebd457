//! Noughts and crosses (tic-tac-toe).
//!
//! Squares are numbered 0-8 row by row:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! `PlayerId::FIRST` plays X and moves first.

use std::fmt;
use std::str::FromStr;

use crate::core::{GameState, PlayerId, Result, UctError};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A noughts and crosses position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OxoState {
    board: [Option<PlayerId>; 9],
    just_moved: PlayerId,
}

impl Default for OxoState {
    fn default() -> Self {
        Self::new()
    }
}

impl OxoState {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            just_moved: PlayerId::SECOND,
        }
    }

    /// Owner of `square`, if any.
    #[must_use]
    pub fn square(&self, square: usize) -> Option<PlayerId> {
        self.board.get(square).copied().flatten()
    }

    /// The player holding a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| match self.board[a] {
            Some(p) if self.board[b] == Some(p) && self.board[c] == Some(p) => Some(p),
            _ => None,
        })
    }

    /// Place the next mark on `square`, rejecting illegal squares instead of
    /// panicking.
    pub fn try_place(&mut self, square: usize) -> Result<()> {
        if square >= 9 {
            return Err(UctError::IllegalMove(format!("square {} is off the board", square)));
        }
        if self.board[square].is_some() {
            return Err(UctError::IllegalMove(format!("square {} is occupied", square)));
        }
        if self.winner().is_some() {
            return Err(UctError::IllegalMove("game is already won".into()));
        }
        self.place(square);
        Ok(())
    }

    fn place(&mut self, square: usize) {
        let mover = self.just_moved.opponent();
        self.board[square] = Some(mover);
        self.just_moved = mover;
    }
}

impl GameState for OxoState {
    type Move = usize;

    fn player_just_moved(&self) -> PlayerId {
        self.just_moved
    }

    fn do_move(&mut self, mv: &usize) {
        assert!(
            *mv < 9 && self.board[*mv].is_none() && self.winner().is_none(),
            "illegal OXO move: square {}",
            mv
        );
        self.place(*mv);
    }

    fn moves(&self) -> Vec<usize> {
        if self.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&sq| self.board[sq].is_none()).collect()
    }

    fn result(&self, player: PlayerId) -> f64 {
        match self.winner() {
            Some(w) if w == player => 1.0,
            Some(_) => 0.0,
            None => {
                assert!(
                    self.board.iter().all(Option::is_some),
                    "result requested for a running OXO game"
                );
                0.5
            }
        }
    }
}

fn mark(cell: Option<PlayerId>) -> char {
    match cell {
        Some(PlayerId(0)) => 'X',
        Some(_) => 'O',
        None => '.',
    }
}

impl fmt::Display for OxoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(3) {
            let line: String = row.iter().map(|&c| mark(c)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for OxoState {
    type Err = UctError;

    /// Parse nine cells of `X`, `O` or `.`, row by row. Whitespace is
    /// ignored. The side to move follows from the mark counts.
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 9 {
            return Err(UctError::InvalidPosition(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut board = [None; 9];
        for (square, &c) in cells.iter().enumerate() {
            board[square] = match c.to_ascii_uppercase() {
                'X' => Some(PlayerId::FIRST),
                'O' => Some(PlayerId::SECOND),
                '.' | '-' => None,
                other => {
                    return Err(UctError::InvalidPosition(format!(
                        "unexpected cell '{}' at square {}",
                        other, square
                    )))
                }
            };
        }

        let xs = board.iter().filter(|&&c| c == Some(PlayerId::FIRST)).count();
        let os = board.iter().filter(|&&c| c == Some(PlayerId::SECOND)).count();
        let just_moved = match xs.checked_sub(os) {
            Some(0) => PlayerId::SECOND,
            Some(1) => PlayerId::FIRST,
            _ => {
                return Err(UctError::InvalidPosition(format!(
                    "{} crosses and {} noughts cannot occur",
                    xs, os
                )))
            }
        };

        let state = Self { board, just_moved };
        let both_won = [PlayerId::FIRST, PlayerId::SECOND].iter().all(|&p| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&sq| state.board[sq] == Some(p)))
        });
        if both_won {
            return Err(UctError::InvalidPosition("both players have a line".into()));
        }

        Ok(state)
    }
}
