//! Attack queries.
//!
//! These work straight off the vector tables and grid occupancy. They must
//! never call the legality-filtered generator, which itself runs them inside
//! a trial.

use super::entanglement::ray;
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// True if `piece` standing on `origin` reaches `target` with its own
    /// movement, honoring blockers along sliding paths.
    #[must_use]
    pub fn can_natively_reach(&self, piece: Piece, origin: Square, target: Square) -> bool {
        if piece.kind == PieceKind::Pawn {
            return piece.can_natively_attack(origin, target);
        }

        let dx = target.file() as i32 - origin.file() as i32;
        let dy = target.rank() as i32 - origin.rank() as i32;
        piece.native_vectors().iter().any(|&step| {
            if !step.sliding {
                return step.dx == dx && step.dy == dy;
            }
            if !step.ray_contains(dx, dy) {
                return false;
            }
            ray(origin, step)
                .take_while(|&sq| sq != target)
                .all(|sq| self.is_empty(sq))
        })
    }

    /// Native lethality: some piece of `by` reaches `target` with its own
    /// movement. This alone defines check.
    #[must_use]
    pub fn native_attack(&self, target: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(sq, piece)| self.can_natively_reach(piece, sq, target))
    }

    /// `native_attack`, or some piece of `by` could land on `target` through a
    /// transporter move. Only king safety consults this.
    #[must_use]
    pub fn any_attack(&self, target: Square, by: Color) -> bool {
        if self.native_attack(target, by) {
            return true;
        }

        for rank in 0..8 {
            let allies: Vec<(Square, Piece)> = (0..8)
                .map(|file| Square(rank, file))
                .filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
                .filter(|(_, piece)| piece.color == by)
                .collect();
            if allies.len() < 2 {
                continue;
            }
            for &(mover_sq, _) in &allies {
                for &(mate_sq, mate) in &allies {
                    if mate_sq != mover_sq && self.transporter_reaches(mate, mate_sq, target, mover_sq) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Whether `mate`'s vectors, launched from `mate_sq`, land on `target`.
    /// The mover's square counts as vacated.
    fn transporter_reaches(&self, mate: Piece, mate_sq: Square, target: Square, mover_sq: Square) -> bool {
        mate.native_vectors().iter().any(|&step| {
            if !step.sliding {
                return mate_sq.offset(step.dx, step.dy) == Some(target);
            }
            for sq in ray(mate_sq, step) {
                if sq == target {
                    return true;
                }
                if sq != mover_sq && !self.is_empty(sq) {
                    return false;
                }
            }
            false
        })
    }

    /// True if the side to move is in native check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        let color = self.side_to_move;
        self.find_king(color)
            .is_some_and(|king| self.native_attack(king, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardBuilder, Color, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_sliding_reach_is_blocked() {
        let board = BoardBuilder::new()
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .piece(sq("a4"), Color::Black, PieceKind::Pawn)
            .build();
        let rook = board.piece_at(sq("a1")).unwrap();
        assert!(board.can_natively_reach(rook, sq("a1"), sq("a4")));
        assert!(!board.can_natively_reach(rook, sq("a1"), sq("a5")));
        assert!(board.native_attack(sq("a4"), Color::White));
        assert!(!board.native_attack(sq("a5"), Color::White));
    }

    #[test]
    fn test_pawn_push_square_is_not_a_native_attack() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Pawn)
            .build();
        assert!(!board.native_attack(sq("e5"), Color::White));
        assert!(board.native_attack(sq("d5"), Color::White));
        assert!(board.native_attack(sq("f5"), Color::White));
    }

    #[test]
    fn test_any_attack_sees_rank_mate_push() {
        // The knight can borrow the pawn's forward step, so e5 is reachable.
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Pawn)
            .piece(sq("a4"), Color::White, PieceKind::Knight)
            .build();
        assert!(!board.native_attack(sq("e5"), Color::White));
        assert!(board.any_attack(sq("e5"), Color::White));
    }

    #[test]
    fn test_any_attack_treats_mover_square_as_vacated() {
        // The rook's own ray stops at the knight, but the knight borrowing
        // that ray would have left c3.
        let board = BoardBuilder::new()
            .piece(sq("c3"), Color::White, PieceKind::Knight)
            .piece(sq("a3"), Color::White, PieceKind::Rook)
            .build();
        assert!(!board.native_attack(sq("e3"), Color::White));
        assert!(board.any_attack(sq("e3"), Color::White));
    }

    #[test]
    fn test_lone_pieces_have_no_transporter_threats() {
        let board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, PieceKind::Pawn)
            .piece(sq("a5"), Color::White, PieceKind::Knight)
            .build();
        assert!(!board.any_attack(sq("e5"), Color::White));
    }
}
