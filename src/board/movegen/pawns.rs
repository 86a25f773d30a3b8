use super::super::{Board, Move, Piece, PieceKind, Square, PROMOTION_KINDS};

impl Board {
    /// Pushes, double pushes, diagonal captures, en passant and promotions.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut Vec<Move>) {
        let color = pawn.color;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                push_pawn_move(moves, Move::native(from, forward, pawn, None));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(0, 2 * dir) {
                        if self.is_empty(double) {
                            moves.push(Move::native(from, double, pawn, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            if let Some(victim) = self.piece_at(target) {
                if victim.color != color {
                    push_pawn_move(moves, Move::native(from, target, pawn, Some(victim)));
                }
            } else if self.en_passant_target == Some(target) {
                let victim_sq = Square(from.rank(), target.file());
                if let Some(victim) = self.piece_at(victim_sq) {
                    if victim.color != color && victim.kind == PieceKind::Pawn {
                        moves.push(Move::en_passant(from, target, pawn, victim));
                    }
                }
            }
        }
    }
}

/// Expand a move onto the promotion rank into one move per promotion choice.
fn push_pawn_move(moves: &mut Vec<Move>, mv: Move) {
    if mv.to.is_promotion_rank(mv.piece.color) {
        moves.extend(PROMOTION_KINDS.iter().map(|&kind| mv.with_promotion(kind)));
    } else {
        moves.push(mv);
    }
}
