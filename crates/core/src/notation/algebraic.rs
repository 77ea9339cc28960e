//! Algebraic move text

use crate::board::{Board, Color, Move, PieceKind};
use crate::rules::{is_checkmate, is_in_check};

/// Formats a completed move, e.g. `e4`, `exd4`, `Qd5`, `Nxf3+`, `Rd8#`.
///
/// `board_after` is the position after the move. Pieces are never
/// disambiguated: two knights reaching the same square both read `N..`.
pub fn format_move(mv: &Move, board_after: &Board, mover: Color) -> String {
    let mut text = String::new();

    match mv.piece.kind {
        PieceKind::Pawn => {
            if mv.is_capture() {
                text.push(mv.from.file_char());
                text.push('x');
            }
        }
        kind => {
            text.push(kind.letter());
            if mv.is_capture() {
                text.push('x');
            }
        }
    }
    text.push_str(&mv.to.to_string());

    let opponent = !mover;
    if is_in_check(opponent, board_after) {
        if is_checkmate(opponent, board_after, Some(mv)) {
            text.push('#');
        } else {
            text.push('+');
        }
    }

    text
}

/// Joins per-ply notations into a numbered record such as
/// `1. e4 e5 2. Nf3`, counting from `first_fullmove`. A record starting
/// with Black opens with `N...`.
pub fn numbered_record<S: AsRef<str>>(plies: &[S], first_to_move: Color, first_fullmove: u32) -> String {
    let mut parts = Vec::new();
    let offset = usize::from(first_to_move == Color::Black);

    for (i, ply) in plies.iter().enumerate() {
        let slot = i + offset;
        let move_number = first_fullmove as usize + slot / 2;
        if slot % 2 == 0 {
            parts.push(format!("{}. {}", move_number, ply.as_ref()));
        } else if i == 0 {
            parts.push(format!("{}... {}", move_number, ply.as_ref()));
        } else {
            parts.push(ply.as_ref().to_string());
        }
    }

    parts.join(" ")
}
