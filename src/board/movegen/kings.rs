use super::super::{Board, Move, Piece, PieceKind, Square};

impl Board {
    /// Single steps plus castling.
    ///
    /// Castling is offered only while the king and rook are unmoved on their
    /// home squares, the squares between them are empty, and none of the
    /// squares the king starts on, crosses or lands on is reachable by any
    /// enemy move, borrowed or native.
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece, moves: &mut Vec<Move>) {
        self.generate_stepping_moves(from, king, moves);

        let color = king.color;
        let back_rank = color.back_rank();
        if king.has_moved || from != Square(back_rank, 4) {
            return;
        }
        let enemy = color.opponent();

        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let (rook_file, mut between, path) = if kingside {
                (7, 5..7, [4, 5, 6])
            } else {
                (0, 1..4, [4, 3, 2])
            };
            let rook_ready = self.piece_at(Square(back_rank, rook_file)).is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
            });
            if !rook_ready {
                continue;
            }
            if !between.all(|file| self.is_empty(Square(back_rank, file))) {
                continue;
            }
            if path
                .iter()
                .any(|&file| self.any_attack(Square(back_rank, file), enemy))
            {
                continue;
            }
            moves.push(Move::castle(from, Square(back_rank, path[2]), king));
        }
    }
}
