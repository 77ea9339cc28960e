//! Threatened-square analysis

use serde::{Deserialize, Serialize};

use super::movegen::pseudo_legal_moves;
use crate::board::{Board, Color, SquareSet};

/// Squares holding a piece of the other color that `color` could capture
/// right now. A King's square in the result means that King is in check.
pub fn threatened_squares(board: &Board, color: Color) -> SquareSet {
    let mut threatened = SquareSet::EMPTY;
    for (square, _) in board.pieces_of(color) {
        for target in pseudo_legal_moves(square, board, None) {
            if board.piece_at(target).is_some_and(|p| p.color != color) {
                threatened.insert(target);
            }
        }
    }
    threatened
}

/// The two highlight layers shown to the player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatHighlights {
    /// The mover's own pieces that the opponent could capture.
    pub endangered: SquareSet,
    /// Opponent pieces the mover could capture.
    pub targets: SquareSet,
}

impl ThreatHighlights {
    pub fn compute(board: &Board, turn: Color) -> Self {
        Self {
            endangered: threatened_squares(board, !turn),
            targets: threatened_squares(board, turn),
        }
    }
}
