//! Rank-mate discovery and transporter generation.

use super::{moves_to, sq};
use crate::board::{Board, BoardBuilder, Color, PieceKind, ShareMode, Square};

fn scenario_a() -> Board {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("b1"), Color::White, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build()
}

#[test]
fn test_rank_mates_in_file_order() {
    let board = Board::new();
    let mates: Vec<Square> = board.rank_mates(sq("d1")).iter().map(|m| m.square).collect();
    assert_eq!(
        mates,
        ["a1", "b1", "c1", "e1", "f1", "g1", "h1"].map(sq).to_vec()
    );
    assert!(board.rank_mates(sq("d4")).is_empty());
}

#[test]
fn test_rank_mates_ignore_enemies() {
    let board = BoardBuilder::new()
        .piece(sq("a4"), Color::White, PieceKind::Rook)
        .piece(sq("c4"), Color::Black, PieceKind::Knight)
        .piece(sq("h4"), Color::White, PieceKind::Bishop)
        .build();
    let mates = board.rank_mates(sq("a4"));
    assert_eq!(mates.len(), 1);
    assert_eq!(mates[0].square, sq("h4"));
    assert_eq!(mates[0].piece.kind, PieceKind::Bishop);
}

#[test]
fn test_rank_mates_follow_the_piece() {
    let mut board = scenario_a();
    assert_eq!(board.rank_mates(sq("a1")).len(), 2);
    let rook = board.piece_at(sq("a1")).unwrap();
    board.make_move(&crate::board::Move::native(sq("a1"), sq("a4"), rook, None));
    assert!(board.rank_mates(sq("a4")).is_empty());
    assert_eq!(board.rank_mates(sq("b1")).len(), 1);
}

#[test]
fn test_linear_starting_position_counts() {
    let mut board = Board::with_mode(ShareMode::Linear);
    let moves = board.generate_legal_moves();
    assert_eq!(moves.len(), 104);
    assert_eq!(moves.iter().filter(|m| m.is_teleported()).count(), 104 - 20);
    assert_eq!(board.generate_legal_moves_for_piece(sq("e2")).len(), 9);
    assert_eq!(board.generate_legal_moves_for_piece(sq("b1")).len(), 4);
    assert_eq!(board.generate_legal_moves_for_piece(sq("d1")).len(), 4);
}

#[test]
fn test_quantum_starting_position_counts() {
    let mut board = Board::with_mode(ShareMode::Quantum);
    assert_eq!(board.generate_legal_moves().len(), 148);
    assert_eq!(board.generate_legal_moves_for_piece(sq("e2")).len(), 10);
    assert_eq!(board.generate_legal_moves_for_piece(sq("g1")).len(), 10);
    assert_eq!(board.generate_legal_moves_for_piece(sq("a1")).len(), 8);
}

#[test]
fn test_quantum_is_superset_of_linear_destinations() {
    for from in ["a1", "e1", "b1", "c2"] {
        let mut linear = Board::with_mode(ShareMode::Linear);
        let mut quantum = Board::with_mode(ShareMode::Quantum);
        let quantum_targets: Vec<Square> = quantum
            .generate_legal_moves_for_piece(sq(from))
            .iter()
            .map(|m| m.to)
            .collect();
        for mv in linear.generate_legal_moves_for_piece(sq(from)) {
            assert!(quantum_targets.contains(&mv.to), "{from}: {mv} missing");
        }
    }
}

#[test]
fn test_linear_rook_borrows_knight_and_king() {
    let mut board = scenario_a();
    let moves = board.generate_legal_moves_for_piece(sq("a1"));

    let native: Vec<_> = moves.iter().filter(|m| !m.is_teleported()).collect();
    assert_eq!(native.len(), 7);
    assert!(native.iter().all(|m| m.to.file() == 0));

    let mut via_knight: Vec<Square> = moves
        .iter()
        .filter(|m| m.borrowed_from.is_some_and(|l| l.piece.kind == PieceKind::Knight))
        .map(|m| m.to)
        .collect();
    via_knight.sort();
    let mut expected = ["a3", "c3", "d2"].map(sq).to_vec();
    expected.sort();
    assert_eq!(via_knight, expected);

    // The king on e1 is a rank-mate too; d2 already went to the knight.
    let mut via_king: Vec<Square> = moves
        .iter()
        .filter(|m| m.borrowed_from.is_some_and(|l| l.piece.kind == PieceKind::King))
        .map(|m| m.to)
        .collect();
    via_king.sort();
    let mut expected = ["d1", "f1", "e2", "f2"].map(sq).to_vec();
    expected.sort();
    assert_eq!(via_king, expected);

    assert_eq!(moves.len(), 14);
}

#[test]
fn test_linear_mover_blocks_mate_ray() {
    // The rook's ray toward h3 runs into the knight itself.
    let mut board = BoardBuilder::new()
        .piece(sq("a3"), Color::White, PieceKind::Rook)
        .piece(sq("c3"), Color::White, PieceKind::Knight)
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();
    assert_eq!(moves_to(&mut board, "c3", "b3").len(), 1);
    assert!(moves_to(&mut board, "c3", "d3").is_empty());
    assert!(moves_to(&mut board, "c3", "h3").is_empty());
}

#[test]
fn test_quantum_mover_square_is_transparent() {
    let mut board = BoardBuilder::new()
        .piece(sq("a3"), Color::White, PieceKind::Rook)
        .piece(sq("c3"), Color::White, PieceKind::Knight)
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .mode(ShareMode::Quantum)
        .build();
    let to_h3 = moves_to(&mut board, "c3", "h3");
    assert_eq!(to_h3.len(), 1);
    let lender = to_h3[0].borrowed_from.unwrap();
    assert_eq!(lender.piece.kind, PieceKind::Rook);
    assert_eq!(lender.square, sq("a3"));
}

#[test]
fn test_transporter_captures_only_enemies() {
    let mut board = BoardBuilder::new()
        .piece(sq("a2"), Color::White, PieceKind::Rook)
        .piece(sq("h2"), Color::White, PieceKind::Knight)
        .piece(sq("g4"), Color::Black, PieceKind::Pawn)
        .piece(sq("f3"), Color::White, PieceKind::Pawn)
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();
    let capture = moves_to(&mut board, "a2", "g4");
    assert_eq!(capture.len(), 1);
    assert!(capture[0].is_capture());
    assert!(capture[0].is_teleported());
    assert!(moves_to(&mut board, "a2", "f3").is_empty());
}

#[test]
fn test_linear_without_rank_mates_has_no_transporter_moves() {
    let mut board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Knight)
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .build();
    let moves = board.generate_legal_moves_for_piece(sq("d4"));
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|m| !m.is_teleported()));
}

#[test]
fn test_quantum_lone_piece_projects_its_own_vectors() {
    let mut board = BoardBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Knight)
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::King)
        .mode(ShareMode::Quantum)
        .build();
    let moves = board.generate_legal_moves_for_piece(sq("d4"));
    let teleported: Vec<_> = moves.iter().filter(|m| m.is_teleported()).collect();
    assert_eq!(teleported.len(), 8);
    assert!(teleported
        .iter()
        .all(|m| m.borrowed_from.is_some_and(|l| l.square == sq("d4"))));
}

#[test]
fn test_quantum_lone_pawn_takes_straight_ahead() {
    let build = |with_mate: bool| {
        let mut builder = BoardBuilder::new()
            .piece(sq("d4"), Color::White, PieceKind::Pawn)
            .piece(sq("d5"), Color::Black, PieceKind::Knight)
            .piece(sq("a1"), Color::White, PieceKind::King)
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .mode(ShareMode::Quantum);
        if with_mate {
            builder = builder.piece(sq("h4"), Color::White, PieceKind::Pawn);
        }
        builder.build()
    };
    for with_mate in [false, true] {
        let mut board = build(with_mate);
        let forward = moves_to(&mut board, "d4", "d5");
        assert_eq!(forward.len(), 1, "rank-mate present: {with_mate}");
        assert!(forward[0].is_capture());
        assert!(forward[0].is_teleported());
    }
}

#[test]
fn test_apex_pawn_borrows_knight_jump() {
    let mut board = BoardBuilder::new()
        .piece(sq("b6"), Color::White, PieceKind::Pawn)
        .piece(sq("a6"), Color::White, PieceKind::Knight)
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    let apex = moves_to(&mut board, "b6", "b8");
    assert_eq!(apex.len(), 1);
    assert_eq!(apex[0].promotion, Some(PieceKind::Queen));
    assert!(apex[0].is_apex());
    assert!(board.gives_check(&apex[0]));

    let others: Vec<_> = board
        .generate_legal_moves_for_piece(sq("b6"))
        .into_iter()
        .filter(|m| m.to != sq("b8"))
        .collect();
    assert!(others.iter().all(|m| !m.is_promotion()));
}

#[test]
fn test_auto_promotion_without_knight_is_not_apex() {
    let mut board = BoardBuilder::new()
        .piece(sq("b7"), Color::White, PieceKind::Pawn)
        .piece(sq("h7"), Color::White, PieceKind::Rook)
        .piece(sq("a1"), Color::White, PieceKind::King)
        .piece(sq("e5"), Color::Black, PieceKind::King)
        .build();
    let to_h8 = moves_to(&mut board, "b7", "h8");
    assert_eq!(to_h8.len(), 1);
    assert_eq!(to_h8[0].promotion, Some(PieceKind::Queen));
    assert!(!to_h8[0].is_apex());
}

#[test]
fn test_rook_to_d5_via_knight_gives_no_check() {
    let mut board = BoardBuilder::new()
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("a4"), Color::White, PieceKind::Rook)
        .piece(sq("b4"), Color::White, PieceKind::Knight)
        .piece(sq("e6"), Color::Black, PieceKind::King)
        .build();
    let to_d5 = moves_to(&mut board, "a4", "d5");
    assert_eq!(to_d5.len(), 1);
    assert!(!board.gives_check(&to_d5[0]));

    let native_a6 = moves_to(&mut board, "a4", "a6")
        .into_iter()
        .find(|m| !m.is_teleported())
        .unwrap();
    assert!(board.gives_check(&native_a6));
}
