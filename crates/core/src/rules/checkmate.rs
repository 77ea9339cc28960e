//! Check and checkmate detection

use super::legality::legal_moves;
use super::threats::threatened_squares;
use crate::board::{Board, Color, Move};

/// True if `color`'s King is attacked. A board without that King counts as
/// check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    match board.find_king(color) {
        Some(king) => threatened_squares(board, !color).contains(king),
        None => true,
    }
}

/// True if `color` is in check and no legal move removes the threat.
///
/// A missing King is reported as checkmate. A side with no legal moves that
/// is not in check (stalemate) is not reported.
pub fn is_checkmate(color: Color, board: &Board, last_move: Option<&Move>) -> bool {
    if board.find_king(color).is_none() {
        return true;
    }
    if !is_in_check(color, board) {
        return false;
    }
    !has_escape(color, board, last_move)
}

/// Does `color` have any move that leaves its King unattacked?
pub fn has_escape(color: Color, board: &Board, last_move: Option<&Move>) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(from, board, color, last_move).is_empty())
}
