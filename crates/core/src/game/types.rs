//! Values recorded and reported by the game controller

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move};

/// One timeline entry: the board plus what produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    /// `None` for the starting position.
    pub last_move: Option<Move>,
    pub notation: Option<String>,
    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u32,
}

impl Snapshot {
    pub fn start(board: Board, halfmove_clock: u32) -> Self {
        Self {
            board,
            last_move: None,
            notation: None,
            halfmove_clock,
        }
    }
}

/// Derived state of the position at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub turn: Color,
    pub in_check: bool,
    /// Set when `turn` is checkmated.
    pub winner: Option<Color>,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn describe(&self) -> String {
        match (self.winner, self.in_check) {
            (Some(winner), _) => format!("Checkmate, {} wins", winner),
            (None, true) => format!("{} to move, in check", self.turn),
            (None, false) => format!("{} to move", self.turn),
        }
    }
}
