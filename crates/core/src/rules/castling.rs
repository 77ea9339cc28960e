//! Castling availability
//!
//! Rights are derived from the board alone and only feed FEN export; move
//! generation never produces castling moves.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    /// A side is available when King and Rook sit on their home squares with
    /// nothing between them.
    pub fn from_board(board: &Board) -> Self {
        Self {
            white_kingside: side_open(board, Color::White, 7, &[5, 6]),
            white_queenside: side_open(board, Color::White, 0, &[1, 2, 3]),
            black_kingside: side_open(board, Color::Black, 7, &[5, 6]),
            black_queenside: side_open(board, Color::Black, 0, &[1, 2, 3]),
        }
    }

    /// FEN castling field, `-` when nothing is available.
    pub fn fen_field(&self) -> String {
        let field: String = [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ]
        .iter()
        .filter(|(available, _)| *available)
        .map(|(_, c)| *c)
        .collect();

        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }
}

fn side_open(board: &Board, color: Color, rook_col: u8, between: &[u8]) -> bool {
    let row = color.back_row();
    let occupant = |col: u8| Square::new(row, col).and_then(|sq| board.piece_at(sq));

    occupant(4) == Some(Piece::new(PieceKind::King, color))
        && occupant(rook_col) == Some(Piece::new(PieceKind::Rook, color))
        && between.iter().all(|&col| occupant(col).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_is_blocked() {
        let rights = CastlingRights::from_board(&Board::standard());
        assert_eq!(rights, CastlingRights::default());
        assert_eq!(rights.fen_field(), "-");
    }

    #[test]
    fn test_cleared_kingside() {
        let board = Board::standard()
            .with_piece(sq("f1"), None)
            .with_piece(sq("g1"), None)
            .with_piece(sq("b8"), None)
            .with_piece(sq("c8"), None)
            .with_piece(sq("d8"), None);

        let rights = CastlingRights::from_board(&board);
        assert!(rights.white_kingside);
        assert!(!rights.white_queenside);
        assert!(rights.black_queenside);
        assert_eq!(rights.fen_field(), "Kq");
    }

    #[test]
    fn test_missing_rook_blocks_side() {
        let board = Board::standard()
            .with_piece(sq("f1"), None)
            .with_piece(sq("g1"), None)
            .with_piece(sq("h1"), None);
        assert!(!CastlingRights::from_board(&board).white_kingside);
    }
}
