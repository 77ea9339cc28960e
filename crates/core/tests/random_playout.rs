//! Seeded random games checking that no legal move ever leaves the mover's
//! King capturable, and that the engine agrees with shakmaty along the way.

use std::collections::BTreeSet;

use chess_rules_core::notation::to_fen;
use chess_rules_core::rules::{all_legal_moves, CastlingRights};
use chess_rules_core::{
    apply_move, pseudo_legal_moves, threatened_squares, Board, Color, GameState, Move, PieceKind,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use shakmaty::{fen::Fen, CastlingMode, Chess, Position};

const GAMES: u64 = 24;
const MAX_PLIES: usize = 120;

/// A pawn one step from its last row could promote, which the engine does
/// not model.
fn promotion_pending(board: &Board) -> bool {
    board.pieces().any(|(sq, p)| {
        p.kind == PieceKind::Pawn
            && match p.color {
                Color::White => sq.row() <= 1,
                Color::Black => sq.row() >= 6,
            }
    })
}

fn reference_moves(game: &GameState) -> BTreeSet<String> {
    let fen = to_fen(
        game.board(),
        game.turn(),
        &CastlingRights::default(),
        game.last_move().and_then(|mv| mv.en_passant_target()),
        0,
        1,
    );
    let fen: Fen = fen.parse().unwrap();
    let pos: Chess = fen.into_position(CastlingMode::Standard).unwrap();
    pos.legal_moves()
        .iter()
        .filter_map(|m| m.from().map(|from| format!("{}{}", from, m.to())))
        .collect()
}

#[test]
fn test_random_games_keep_king_safe() {
    let mut plies_checked = 0;

    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new();

        for _ in 0..MAX_PLIES {
            if promotion_pending(game.board()) {
                break;
            }

            let turn = game.turn();
            let board = *game.board();
            let moves = all_legal_moves(&board, turn, game.last_move());

            for &(from, to) in &moves {
                assert!(pseudo_legal_moves(from, &board, game.last_move()).contains(to));

                let mv = Move::new(&board, from, to).unwrap();
                let after = apply_move(&board, &mv);
                let king = after.find_king(turn).unwrap();
                assert!(
                    !threatened_squares(&after, !turn).contains(king),
                    "{}{} leaves the king en prise (seed {})",
                    from,
                    to,
                    seed
                );
            }

            let engine: BTreeSet<String> = moves
                .iter()
                .map(|(from, to)| format!("{}{}", from, to))
                .collect();
            assert_eq!(engine, reference_moves(&game), "seed {}", seed);
            plies_checked += 1;

            let Some(&(from, to)) = moves.choose(&mut rng) else {
                break;
            };
            let before = game.timeline().history().len();
            game.play(from, to).unwrap();
            assert_eq!(game.timeline().history().len(), before + 1);
            assert_eq!(game.timeline().history()[before - 1].board, board);

            if game.is_finished() {
                assert!(game.status().winner.is_some());
                break;
            }
        }
    }

    assert!(plies_checked > GAMES as usize * 5);
}
