//! Human-readable move and position text

mod algebraic;
mod fen;

pub use algebraic::{format_move, numbered_record};
pub use fen::{parse_fen, placement, to_fen, ParsedFen, START_FEN};
