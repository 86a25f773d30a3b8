//! Move generation: native moves per piece kind, transporter moves, and the
//! king-safety filter that turns pseudo-legal candidates into legal moves.

mod kings;
mod pawns;
mod pieces;

use log::trace;

use super::{Board, Move, PieceKind, Square};

impl Board {
    /// Native and transporter candidates for the piece on `from`, before any
    /// king-safety check. Native moves come first.
    #[must_use]
    pub fn pseudo_legal_moves_for_piece(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, &mut moves),
            PieceKind::King => self.generate_king_moves(from, piece, &mut moves),
            _ => self.generate_stepping_moves(from, piece, &mut moves),
        }
        self.transporter_moves(from, piece, &mut moves);
        moves
    }

    /// Legal moves for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on move.
    pub fn generate_legal_moves_for_piece(&mut self, from: Square) -> Vec<Move> {
        match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => return Vec::new(),
        }
        let mut moves = self.pseudo_legal_moves_for_piece(from);
        moves.retain(|mv| self.is_legal(mv));
        moves
    }

    /// Every legal move for the side to move, a1 upward by origin.
    pub fn generate_legal_moves(&mut self) -> Vec<Move> {
        let origins: Vec<Square> = self
            .pieces(self.side_to_move)
            .map(|(sq, _)| sq)
            .collect();
        let moves: Vec<Move> = origins
            .into_iter()
            .flat_map(|from| self.generate_legal_moves_for_piece(from))
            .collect();
        trace!("{} legal moves for {}", moves.len(), self.side_to_move);
        moves
    }

    /// Like `generate_legal_moves().is_empty()` but stops at the first hit.
    pub fn has_legal_moves(&mut self) -> bool {
        let origins: Vec<Square> = self
            .pieces(self.side_to_move)
            .map(|(sq, _)| sq)
            .collect();
        origins.into_iter().any(|from| {
            self.pseudo_legal_moves_for_piece(from)
                .iter()
                .any(|mv| self.is_legal(mv))
        })
    }

    /// Simulate `mv` and test the mover's king.
    ///
    /// A king must land on a square no enemy piece reaches, natively or
    /// through a rank-mate. Any other move only has to avoid leaving the
    /// king in native check. Capturing a king is never legal.
    fn is_legal(&mut self, mv: &Move) -> bool {
        if mv.captured.is_some_and(|victim| victim.kind == PieceKind::King) {
            return false;
        }
        let color = mv.piece.color;
        let enemy = color.opponent();
        let trial = self.trial(mv);
        let danger = if mv.piece.kind == PieceKind::King {
            trial.any_attack(mv.to, enemy)
        } else {
            trial
                .find_king(color)
                .is_some_and(|king| trial.native_attack(king, enemy))
        };
        !danger
    }
}
