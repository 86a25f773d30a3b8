use super::super::entanglement::ray;
use super::super::{Board, Move, Piece, Square};

impl Board {
    /// Native moves along every vector of `piece`: sliding rays stop at the
    /// first occupant (capturing it if it is an enemy), jumps land on any
    /// square not held by a friend.
    pub(crate) fn generate_stepping_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        for &step in piece.native_vectors() {
            if step.sliding {
                for target in ray(from, step) {
                    match self.piece_at(target) {
                        Some(occupant) => {
                            if occupant.color != piece.color {
                                moves.push(Move::native(from, target, piece, Some(occupant)));
                            }
                            break;
                        }
                        None => moves.push(Move::native(from, target, piece, None)),
                    }
                }
            } else if let Some(target) = from.offset(step.dx, step.dy) {
                match self.piece_at(target) {
                    Some(occupant) if occupant.color == piece.color => {}
                    occupant => moves.push(Move::native(from, target, piece, occupant)),
                }
            }
        }
    }
}
