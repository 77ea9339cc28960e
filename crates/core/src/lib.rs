//! Chess Rules Core Library
//!
//! Move generation, legality, checkmate detection, algebraic notation and a
//! branching game timeline for two-player chess on an 8x8 board.

pub mod board;
pub mod error;
pub mod game;
pub mod notation;
pub mod rules;
pub mod timeline;

pub use board::{apply_move, Board, Color, Move, Piece, PieceKind, Square, SquareSet};
pub use error::{Error, Result};
pub use game::{GameState, GameStatus, Snapshot};
pub use notation::format_move;
pub use rules::{is_checkmate, is_in_check, legal_moves, pseudo_legal_moves, threatened_squares};
pub use timeline::Timeline;

/// Basic position information
#[derive(Debug)]
pub struct PositionInfo {
    pub piece_count: u32,
    pub legal_move_count: u32,
    pub side_to_move: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Summarizes the position at the game's cursor
pub fn analyze_position(game: &GameState) -> PositionInfo {
    let board = game.board();
    let side_to_move = game.turn();
    let legal_moves = rules::all_legal_moves(board, side_to_move, game.last_move());
    let status = game.status();

    PositionInfo {
        piece_count: board.piece_count() as u32,
        legal_move_count: legal_moves.len() as u32,
        side_to_move,
        is_check: status.in_check,
        is_checkmate: status.is_over(),
    }
}

/// Creates a game at the standard starting position
pub fn starting_position() -> GameState {
    GameState::new()
}
