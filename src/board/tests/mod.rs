//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `entanglement.rs` - Rank-mates and transporter generation in both modes
//! - `rules.rs` - Castling, en passant, promotion, stealth capture, mate and stalemate
//! - `make_unmake.rs` - Trial revert symmetry and commit bookkeeping
//! - `proptest.rs` - Property-based tests over random playouts

mod entanglement;
mod make_unmake;

use crate::board::{Board, Move, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Legal moves of the piece on `from`, by destination.
pub(super) fn moves_to(board: &mut Board, from: &str, to: &str) -> Vec<Move> {
    let to = sq(to);
    board
        .generate_legal_moves_for_piece(sq(from))
        .into_iter()
        .filter(|mv| mv.to == to)
        .collect()
}
