//! Error types for chess-rules-core

use thiserror::Error;

use crate::board::{Color, Square};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("No piece on {0}")]
    EmptySquare(Square),

    #[error("Piece on {square} does not belong to {turn}, whose turn it is")]
    WrongTurn { square: Square, turn: Color },

    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("Game is over")]
    GameOver,

    #[error("FEN parsing error: {0}")]
    Fen(String),

    #[error("Saved game is inconsistent: {0}")]
    CorruptGame(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
