//! King-safety filtering of pseudo-legal moves

use super::movegen::pseudo_legal_moves;
use super::threats::threatened_squares;
use crate::board::{Board, Color, Move, Square, SquareSet};

/// Targets for the piece on `square` that do not leave `color`'s King
/// capturable.
///
/// Returns an empty set when `square` does not hold a piece of `color`.
pub fn legal_moves(square: Square, board: &Board, color: Color, last_move: Option<&Move>) -> SquareSet {
    if board.piece_at(square).map(|p| p.color) != Some(color) {
        return SquareSet::EMPTY;
    }

    pseudo_legal_moves(square, board, last_move)
        .iter()
        .filter(|&target| keeps_king_safe(board, square, target, color))
        .collect()
}

/// Simulates `from -> to` and reports whether `color`'s King survives it.
/// A board without that King never counts as safe.
fn keeps_king_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let Some(mv) = Move::new(board, from, to) else {
        return false;
    };
    let hypothetical = board.apply(&mv);
    match hypothetical.find_king(color) {
        Some(king) => !threatened_squares(&hypothetical, !color).contains(king),
        None => false,
    }
}

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(board: &Board, color: Color, last_move: Option<&Move>) -> Vec<(Square, Square)> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_moves(from, board, color, last_move)
                .iter()
                .map(move |to| (from, to))
        })
        .collect()
}
