//! Move rules: generation, threats, legality and game termination

mod castling;
mod checkmate;
mod legality;
mod movegen;
mod threats;

pub use castling::CastlingRights;
pub use checkmate::{has_escape, is_checkmate, is_in_check};
pub use legality::{all_legal_moves, legal_moves};
pub use movegen::pseudo_legal_moves;
pub use threats::{threatened_squares, ThreatHighlights};
