//! The game controller owned by a front end

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::types::{GameStatus, Snapshot};
use crate::board::{Board, Color, Move, PieceKind, Square, SquareSet};
use crate::error::{Error, Result};
use crate::notation::{format_move, numbered_record, parse_fen, to_fen};
use crate::rules::{is_checkmate, is_in_check, legal_moves, CastlingRights, ThreatHighlights};
use crate::timeline::Timeline;

/// Everything a front end needs to run one game.
///
/// The side to move follows from the cursor: `first_to_move` moves at even
/// history indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    timeline: Timeline<Snapshot>,
    first_to_move: Color,
    first_fullmove: u32,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// A game starting from `board`. A start where `to_move` is already
    /// mated is finished from the outset.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let mut game = Self {
            timeline: Timeline::new(Snapshot::start(board, 0)),
            first_to_move: to_move,
            first_fullmove: 1,
        };
        game.finish_if_mated_at_start();
        game
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let parsed = parse_fen(fen)?;
        let mut game = Self {
            timeline: Timeline::new(Snapshot::start(parsed.board, parsed.halfmove_clock)),
            first_to_move: parsed.turn,
            first_fullmove: parsed.fullmove_number,
        };
        game.finish_if_mated_at_start();
        Ok(game)
    }

    fn finish_if_mated_at_start(&mut self) {
        let start = self.timeline.initial();
        if is_checkmate(self.first_to_move, &start.board, start.last_move.as_ref()) {
            info!(loser = %self.first_to_move, "starting position is checkmate");
            self.timeline.finish();
        }
    }

    pub fn timeline(&self) -> &Timeline<Snapshot> {
        &self.timeline
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.timeline.current()
    }

    pub fn board(&self) -> &Board {
        &self.snapshot().board
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.snapshot().last_move.as_ref()
    }

    pub fn turn(&self) -> Color {
        if self.timeline.index() % 2 == 0 {
            self.first_to_move
        } else {
            !self.first_to_move
        }
    }

    /// Legal targets for the piece on `from`; empty unless it belongs to the
    /// side to move.
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        legal_moves(from, self.board(), self.turn(), self.last_move())
    }

    pub fn status(&self) -> GameStatus {
        let turn = self.turn();
        let board = self.board();
        let in_check = is_in_check(turn, board);
        let mated = in_check && is_checkmate(turn, board, self.last_move());
        GameStatus {
            turn,
            in_check,
            winner: mated.then_some(!turn),
        }
    }

    pub fn highlights(&self) -> ThreatHighlights {
        ThreatHighlights::compute(self.board(), self.turn())
    }

    /// Validates and plays `from -> to` for the side to move, returning the
    /// move's notation.
    ///
    /// Playing while the cursor is behind the tip saves the old line as a
    /// branch. A checkmating move finishes the game.
    pub fn play(&mut self, from: Square, to: Square) -> Result<String> {
        if self.timeline.is_finished() {
            warn!(%from, %to, "move rejected: game is over");
            return Err(Error::GameOver);
        }

        let turn = self.turn();
        let current = self.snapshot();
        let piece = current.board.piece_at(from).ok_or(Error::EmptySquare(from))?;
        if piece.color != turn {
            warn!(%from, %turn, "move rejected: wrong side");
            return Err(Error::WrongTurn { square: from, turn });
        }
        if !self.legal_moves(from).contains(to) {
            warn!(%from, %to, "move rejected: illegal");
            return Err(Error::IllegalMove { from, to });
        }

        let mv = Move::new(&current.board, from, to).ok_or(Error::EmptySquare(from))?;
        let after = current.board.apply(&mv);
        let notation = format_move(&mv, &after, turn);
        let halfmove_clock = if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            0
        } else {
            current.halfmove_clock + 1
        };
        let mated = is_checkmate(!turn, &after, Some(&mv));

        self.timeline.apply(Snapshot {
            board: after,
            last_move: Some(mv),
            notation: Some(notation.clone()),
            halfmove_clock,
        })?;
        debug!(%from, %to, %notation, ply = self.timeline.index(), "move applied");

        if mated {
            info!(winner = %turn, %notation, "checkmate");
            self.timeline.finish();
        }

        Ok(notation)
    }

    pub fn step_back(&mut self) -> bool {
        self.timeline.step_back()
    }

    pub fn step_forward(&mut self) -> Result<bool> {
        self.timeline.step_forward()
    }

    /// Back to the starting position, dropping history and branches.
    pub fn reset(&mut self) {
        self.timeline.reset();
        self.finish_if_mated_at_start();
    }

    pub fn is_finished(&self) -> bool {
        self.timeline.is_finished()
    }

    /// Notation of every move in the active history.
    pub fn notations(&self) -> Vec<&str> {
        self.timeline
            .history()
            .iter()
            .filter_map(|s| s.notation.as_deref())
            .collect()
    }

    /// Numbered record such as `1. e4 e5 2. Nf3`.
    pub fn move_list(&self) -> String {
        numbered_record(&self.notations(), self.first_to_move, self.first_fullmove)
    }

    /// FEN of the position at the cursor.
    pub fn fen(&self) -> String {
        let snapshot = self.snapshot();
        let offset = usize::from(self.first_to_move == Color::Black);
        let fullmove = self.first_fullmove + ((self.timeline.index() + offset) / 2) as u32;
        to_fen(
            &snapshot.board,
            self.turn(),
            &CastlingRights::from_board(&snapshot.board),
            snapshot.last_move.and_then(|mv| mv.en_passant_target()),
            snapshot.halfmove_clock,
            fullmove,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let state: GameState = serde_json::from_str(json)?;
        if !state.timeline.is_consistent() {
            return Err(Error::CorruptGame(
                "history is empty or cursor is out of range".to_string(),
            ));
        }
        Ok(state)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
