//! Pseudo-legal move generation
//!
//! Targets obey piece movement and board occupancy only. Whose turn it is and
//! whether the mover's King ends up attacked are left to the legality filter.

use crate::board::{Board, Color, Move, PieceKind, Square, SquareSet};

type Offsets = [(i8, i8)];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// How a piece kind moves: along rays (optionally step-limited) or by jumps.
enum Movement {
    Slide {
        directions: &'static Offsets,
        max_steps: Option<u8>,
    },
    Jump(&'static Offsets),
    Pawn,
}

fn movement(kind: PieceKind) -> Movement {
    match kind {
        PieceKind::Pawn => Movement::Pawn,
        PieceKind::Knight => Movement::Jump(&KNIGHT_JUMPS),
        PieceKind::Bishop => Movement::Slide {
            directions: &DIAGONAL,
            max_steps: None,
        },
        PieceKind::Rook => Movement::Slide {
            directions: &ORTHOGONAL,
            max_steps: None,
        },
        PieceKind::Queen => Movement::Slide {
            directions: &ALL_DIRECTIONS,
            max_steps: None,
        },
        PieceKind::King => Movement::Slide {
            directions: &ALL_DIRECTIONS,
            max_steps: Some(1),
        },
    }
}

/// Every square the piece on `square` could move to, ignoring King safety.
///
/// `last_move` is only consulted for en passant. An empty `square` yields an
/// empty set.
pub fn pseudo_legal_moves(square: Square, board: &Board, last_move: Option<&Move>) -> SquareSet {
    let Some(piece) = board.piece_at(square) else {
        return SquareSet::EMPTY;
    };

    match movement(piece.kind) {
        Movement::Slide {
            directions,
            max_steps,
        } => slide_targets(square, piece.color, board, directions, max_steps),
        Movement::Jump(offsets) => jump_targets(square, piece.color, board, offsets),
        Movement::Pawn => pawn_targets(square, piece.color, board, last_move),
    }
}

fn slide_targets(
    from: Square,
    color: Color,
    board: &Board,
    directions: &Offsets,
    max_steps: Option<u8>,
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let limit = max_steps.unwrap_or(u8::MAX);

    for &(d_row, d_col) in directions {
        let mut current = from;
        let mut steps = 0;
        while steps < limit {
            let Some(next) = current.offset(d_row, d_col) else {
                break;
            };
            match board.piece_at(next) {
                Some(blocker) => {
                    if blocker.color != color {
                        targets.insert(next);
                    }
                    break;
                }
                None => targets.insert(next),
            }
            current = next;
            steps += 1;
        }
    }

    targets
}

fn jump_targets(from: Square, color: Color, board: &Board, offsets: &Offsets) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|to| board.piece_at(*to).map_or(true, |p| p.color != color))
        .collect()
}

fn pawn_targets(from: Square, color: Color, board: &Board, last_move: Option<&Move>) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.piece_at(one).is_none() {
            targets.insert(one);
            if from.row() == color.pawn_row() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.piece_at(two).is_none() {
                        targets.insert(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = from.offset(forward, d_col) else {
            continue;
        };
        if board.piece_at(diagonal).is_some_and(|p| p.color != color) {
            targets.insert(diagonal);
        }
    }

    if let Some(target) = en_passant_capture(from, color, last_move) {
        if board.piece_at(target).is_none() {
            targets.insert(target);
        }
    }

    targets
}

/// The en-passant landing square for a pawn of `color` on `from`, if the
/// opponent's last move was a two-square pawn advance ending beside it.
fn en_passant_capture(from: Square, color: Color, last_move: Option<&Move>) -> Option<Square> {
    let last = last_move?;
    let adjacent = last.to.row() == from.row() && last.to.col().abs_diff(from.col()) == 1;
    if last.piece.color == color || !last.is_double_pawn_push() || !adjacent {
        return None;
    }
    last.en_passant_target()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn at(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn names(set: SquareSet) -> Vec<String> {
        set.iter().map(|s| s.to_string()).collect()
    }

    fn white(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(kind, Color::White))
    }

    fn black(kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(kind, Color::Black))
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::standard();
        assert!(pseudo_legal_moves(sq("e4"), &board, None).is_empty());
    }

    #[test]
    fn test_rook_stops_before_friendly_piece() {
        let board = Board::empty()
            .with_piece(sq("a1"), white(PieceKind::Rook))
            .with_piece(sq("a3"), white(PieceKind::Pawn))
            .with_piece(sq("b1"), white(PieceKind::King));

        let moves = pseudo_legal_moves(sq("a1"), &board, None);
        assert_eq!(names(moves), vec!["a2"]);
    }

    #[test]
    fn test_rook_includes_enemy_blocker() {
        let board = Board::empty()
            .with_piece(sq("d4"), white(PieceKind::Rook))
            .with_piece(sq("d6"), black(PieceKind::Knight));

        let moves = pseudo_legal_moves(sq("d4"), &board, None);
        assert!(moves.contains(sq("d5")));
        assert!(moves.contains(sq("d6")));
        assert!(!moves.contains(sq("d7")));
        // 2 up, 3 down, 3 left, 4 right
        assert_eq!(moves.len(), 12);
    }

    #[test]
    fn test_bishop_and_queen_rays() {
        let board = Board::empty().with_piece(sq("d4"), white(PieceKind::Bishop));
        assert_eq!(pseudo_legal_moves(sq("d4"), &board, None).len(), 13);

        let board = Board::empty().with_piece(sq("d4"), white(PieceKind::Queen));
        assert_eq!(pseudo_legal_moves(sq("d4"), &board, None).len(), 27);
    }

    #[test]
    fn test_king_single_step() {
        let board = Board::empty().with_piece(sq("a1"), white(PieceKind::King));
        assert_eq!(names(pseudo_legal_moves(sq("a1"), &board, None)), vec!["a2", "b2", "b1"]);

        let board = Board::empty().with_piece(sq("e4"), black(PieceKind::King));
        assert_eq!(pseudo_legal_moves(sq("e4"), &board, None).len(), 8);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::standard();
        let moves = pseudo_legal_moves(sq("g1"), &board, None);
        assert_eq!(names(moves), vec!["f3", "h3"]);

        let corner = Board::empty().with_piece(sq("a8"), black(PieceKind::Knight));
        assert_eq!(names(pseudo_legal_moves(sq("a8"), &corner, None)), vec!["c7", "b6"]);
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let board = Board::standard();
        assert_eq!(names(pseudo_legal_moves(sq("e2"), &board, None)), vec!["e4", "e3"]);
        assert_eq!(names(pseudo_legal_moves(sq("d7"), &board, None)), vec!["d6", "d5"]);
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let blocked_near = Board::standard().with_piece(sq("e3"), black(PieceKind::Knight));
        assert!(pseudo_legal_moves(sq("e2"), &blocked_near, None).is_empty());

        let blocked_far = Board::standard().with_piece(sq("e4"), black(PieceKind::Knight));
        assert_eq!(names(pseudo_legal_moves(sq("e2"), &blocked_far, None)), vec!["e3"]);
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let board = Board::empty()
            .with_piece(sq("e4"), white(PieceKind::Pawn))
            .with_piece(sq("d5"), black(PieceKind::Pawn))
            .with_piece(sq("f5"), white(PieceKind::Knight));

        let moves = pseudo_legal_moves(sq("e4"), &board, None);
        assert_eq!(names(moves), vec!["d5", "e5"]);
    }

    #[test]
    fn test_en_passant_after_double_step() {
        let before = Board::empty()
            .with_piece(at(3, 4), white(PieceKind::Pawn))
            .with_piece(at(1, 3), black(PieceKind::Pawn));
        let last = Move::new(&before, at(1, 3), at(3, 3)).unwrap();
        let board = before.apply(&last);

        let moves = pseudo_legal_moves(at(3, 4), &board, Some(&last));
        assert!(moves.contains(at(2, 3)));

        // Without the double step there is nothing to take en passant.
        assert!(!pseudo_legal_moves(at(3, 4), &board, None).contains(at(2, 3)));
    }

    #[test]
    fn test_en_passant_requires_adjacent_pawn() {
        let before = Board::empty()
            .with_piece(sq("e5"), white(PieceKind::Pawn))
            .with_piece(sq("b7"), black(PieceKind::Pawn));
        let last = Move::new(&before, sq("b7"), sq("b5")).unwrap();
        let board = before.apply(&last);

        let moves = pseudo_legal_moves(sq("e5"), &board, Some(&last));
        assert_eq!(names(moves), vec!["e6"]);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_targets() {
        let board = Board::empty().with_piece(sq("c8"), white(PieceKind::Pawn));
        assert!(pseudo_legal_moves(sq("c8"), &board, None).is_empty());
    }
}
