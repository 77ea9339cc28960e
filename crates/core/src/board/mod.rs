//! Board model: an immutable 8x8 grid of optional pieces

mod types;

pub use types::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One board position.
///
/// `Board` is `Copy`: every transformation returns a new value, so snapshots
/// held in the timeline can never be changed through a later move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position. Black occupies rows 0-1, White rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.cells[color.back_row() as usize][col] = Some(Piece::new(*kind, color));
                board.cells[color.pawn_row() as usize][col] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns a copy of the board with `square` set to `piece`.
    pub fn with_piece(mut self, square: Square, piece: Option<Piece>) -> Self {
        self.cells[square.row() as usize][square.col() as usize] = piece;
        self
    }

    /// Occupied squares and their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Applies `mv` without checking its legality.
    ///
    /// An en-passant capture also removes the bypassed pawn beside `from`.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = *self;
        if mv.is_en_passant(self) {
            if let Some(bypassed) = Square::new(mv.from.row(), mv.to.col()) {
                next = next.with_piece(bypassed, None);
            }
        }
        next.with_piece(mv.from, None).with_piece(mv.to, Some(mv.piece))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map(|p| p.fen_char()).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Applies `mv` to `board`, returning the new position.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    board.apply(mv)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// Piece removed by this move, including a pawn taken en passant.
    pub captured: Option<Piece>,
}

impl Move {
    /// Describes moving whatever stands on `from` to `to`, as seen on `board`
    /// before the move. Returns `None` if `from` is empty.
    pub fn new(board: &Board, from: Square, to: Square) -> Option<Self> {
        let piece = board.piece_at(from)?;
        let mut mv = Self {
            from,
            to,
            piece,
            captured: board.piece_at(to),
        };
        if mv.is_en_passant(board) {
            mv.captured = Square::new(from.row(), to.col()).and_then(|sq| board.piece_at(sq));
        }
        Some(mv)
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// A pawn moving diagonally onto an empty square.
    pub fn is_en_passant(&self, board: &Board) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.from.col() != self.to.col()
            && board.piece_at(self.to).is_none()
    }

    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// The square skipped by a two-square pawn advance.
    pub fn en_passant_target(&self) -> Option<Square> {
        if !self.is_double_pawn_push() {
            return None;
        }
        Square::new((self.from.row() + self.to.row()) / 2, self.from.col())
    }
}
