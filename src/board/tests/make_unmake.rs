//! Trial (simulate and revert) and commit tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, PieceKind, ShareMode};

fn assert_every_trial_reverts(board: &mut Board) {
    let before = board.clone();
    let origins: Vec<_> = board.pieces(board.side_to_move()).map(|(s, _)| s).collect();
    for from in origins {
        for mv in board.pseudo_legal_moves_for_piece(from) {
            {
                let _trial = board.trial(&mv);
            }
            assert_eq!(*board, before, "{mv:?} did not revert");
        }
    }
}

#[test]
fn test_trial_reverts_starting_position() {
    assert_every_trial_reverts(&mut Board::with_mode(ShareMode::Linear));
    assert_every_trial_reverts(&mut Board::with_mode(ShareMode::Quantum));
}

#[test]
fn test_trial_reverts_special_moves() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e5"), Color::White, PieceKind::Pawn)
        .piece(sq("d5"), Color::Black, PieceKind::Pawn)
        .piece(sq("b7"), Color::White, PieceKind::Pawn)
        .piece(sq("a7"), Color::White, PieceKind::Knight)
        .piece(sq("c8"), Color::Black, PieceKind::Rook)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .castle_kingside(Color::White)
        .castle_queenside(Color::White)
        .en_passant(sq("d6"))
        .build();
    let moves = board.generate_legal_moves();
    assert!(moves.iter().any(|m| m.is_castling));
    assert!(moves.iter().any(|m| m.is_en_passant));
    assert!(moves.iter().any(|m| m.is_promotion() && m.is_capture()));
    assert_every_trial_reverts(&mut board);
}

#[test]
fn test_trial_shows_the_moved_position() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .castle_kingside(Color::White)
        .build();
    let castle = board
        .generate_legal_moves_for_piece(sq("e1"))
        .into_iter()
        .find(|m| m.is_castling)
        .unwrap();
    let trial = board.trial(&castle);
    assert_eq!(trial.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(trial.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(trial.piece_at(sq("h1")).is_none());
    assert_eq!(trial.side_to_move(), Color::White);
}

#[test]
fn test_generation_leaves_board_untouched() {
    let mut board = Board::with_mode(ShareMode::Quantum);
    let before = board.clone();
    let _ = board.generate_legal_moves();
    let _ = board.has_legal_moves();
    assert_eq!(board, before);
}

#[test]
fn test_king_move_clears_both_rights() {
    let mut board = BoardBuilder::starting_position().clear(sq("e2")).build();
    let king_step = board
        .generate_legal_moves_for_piece(sq("e1"))
        .into_iter()
        .find(|m| m.to == sq("e2") && !m.is_teleported())
        .unwrap();
    board.make_move(&king_step);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));
}

#[test]
fn test_history_appends_in_order() {
    let mut board = Board::new();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
        let mv = board
            .generate_legal_moves_for_piece(sq(from))
            .into_iter()
            .find(|m| m.to == sq(to) && !m.is_teleported())
            .unwrap();
        board.make_move(&mv);
    }
    let played: Vec<String> = board.history().iter().map(ToString::to_string).collect();
    assert_eq!(played, ["e2e4", "e7e5", "g1f3"]);
    assert_eq!(board.ply_count(), 3);
    assert_eq!(board.side_to_move(), Color::Black);
}
