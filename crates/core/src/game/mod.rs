//! Game controller: turn order, validation and history for one game

mod state;
mod types;

pub use state::GameState;
pub use types::{GameStatus, Snapshot};
