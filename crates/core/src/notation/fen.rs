//! FEN import and export
//!
//! Row 0 of the board is rank 8, so placement rows are written top to bottom
//! in board order.

use crate::board::{Board, Color, Piece, Square};
use crate::error::{Error, Result};
use crate::rules::CastlingRights;

/// Standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Piece-placement field of a FEN string.
pub fn placement(board: &Board) -> String {
    let mut rows = Vec::with_capacity(8);
    for row in 0..8 {
        let mut text = String::new();
        let mut empty = 0;
        for col in 0..8 {
            let piece = Square::new(row, col).and_then(|sq| board.piece_at(sq));
            match piece {
                Some(p) => {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(p.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            text.push_str(&empty.to_string());
        }
        rows.push(text);
    }
    rows.join("/")
}

/// Full six-field FEN.
pub fn to_fen(
    board: &Board,
    turn: Color,
    castling: &CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
) -> String {
    let active = match turn {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = en_passant
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement(board),
        active,
        castling.fen_field(),
        en_passant,
        halfmove_clock,
        fullmove_number
    )
}

/// Fields of a FEN string that the engine consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Color,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Parses a FEN string. Only the placement field is required; missing
/// trailing fields default to White to move, clock 0, move 1. Castling and
/// en-passant fields are accepted but ignored.
pub fn parse_fen(fen: &str) -> Result<ParsedFen> {
    let mut fields = fen.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| Error::Fen("empty FEN".to_string()))?;
    let board = parse_placement(placement)?;

    let turn = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(Error::Fen(format!("bad active color '{}'", other))),
    };
    let _castling = fields.next();
    let _en_passant = fields.next();
    let halfmove_clock = parse_number(fields.next(), 0, "halfmove clock")?;
    let fullmove_number = parse_number(fields.next(), 1, "fullmove number")?;

    Ok(ParsedFen {
        board,
        turn,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_number(field: Option<&str>, default: u32, what: &str) -> Result<u32> {
    match field {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| Error::Fen(format!("bad {} '{}'", what, text))),
    }
}

fn parse_placement(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != 8 {
        return Err(Error::Fen(format!("expected 8 rows, found {}", rows.len())));
    }

    let mut board = Board::empty();
    for (row, row_text) in rows.iter().enumerate() {
        let mut col: u8 = 0;
        for c in row_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(Error::Fen(format!("bad empty count '{}'", c)));
                }
                col += skip as u8;
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or_else(|| Error::Fen(format!("unknown piece '{}'", c)))?;
                let square = Square::new(row as u8, col)
                    .ok_or_else(|| Error::Fen(format!("row {} is too long", row + 1)))?;
                board = board.with_piece(square, Some(piece));
                col += 1;
            }
            if col > 8 {
                return Err(Error::Fen(format!("row {} is too long", row + 1)));
            }
        }
        if col != 8 {
            return Err(Error::Fen(format!("row {} has {} columns", row + 1, col)));
        }
    }

    Ok(board)
}

impl Board {
    /// Reads the placement field of `fen`, ignoring the other fields.
    pub fn from_fen(fen: &str) -> Result<Board> {
        parse_fen(fen).map(|parsed| parsed.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_start_position_orientation() {
        let board = Board::standard();
        assert_eq!(
            placement(&board),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        let fen = to_fen(&board, Color::White, &CastlingRights::from_board(&board), None, 0, 1);
        assert_eq!(fen, START_FEN);
        assert_eq!(Board::from_fen(START_FEN).unwrap(), board);
    }

    #[test]
    fn test_export_fields() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K2R").unwrap();
        let castling = CastlingRights::from_board(&board);
        let ep: Square = "d6".parse().unwrap();
        assert_eq!(
            to_fen(&board, Color::White, &castling, Some(ep), 0, 3),
            "4k3/8/8/3pP3/8/8/8/4K2R w K d6 0 3"
        );
    }

    #[test]
    fn test_parse_side_and_counters() {
        let parsed = parse_fen("8/8/8/8/8/8/8/K6k b - - 12 40").unwrap();
        assert_eq!(parsed.turn, Color::Black);
        assert_eq!(parsed.halfmove_clock, 12);
        assert_eq!(parsed.fullmove_number, 40);
        assert_eq!(
            parsed.board.piece_at("h1".parse().unwrap()).map(|p| p.kind),
            Some(PieceKind::King)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_fen(""), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("8/8/8"), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("9/8/8/8/8/8/8/8"), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("ppppppppp/8/8/8/8/8/8/8"), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("7x/8/8/8/8/8/8/8"), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("8/8/8/8/8/8/8/8 x"), Err(Error::Fen(_))));
        assert!(matches!(parse_fen("7/8/8/8/8/8/8/8"), Err(Error::Fen(_))));
    }
}
