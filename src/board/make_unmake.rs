//! Applying moves: the reversible trial used by the legality filter, and the
//! permanent commit.

use std::ops::Deref;

use log::debug;

use super::{Board, Color, Move, Piece, PieceKind, Square};

/// A move applied to the grid for inspection only.
///
/// Holds the board exclusively for its whole lifetime and puts every touched
/// cell back when dropped, whatever path the caller leaves by. Side to move,
/// castling rights, en passant and history are never touched.
pub struct Trial<'a> {
    board: &'a mut Board,
    undo: Vec<(Square, Option<Piece>)>,
}

impl Trial<'_> {
    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        let prev = self.board.replace(sq, piece);
        self.undo.push((sq, prev));
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        while let Some((sq, prev)) = self.undo.pop() {
            self.board.replace(sq, prev);
        }
    }
}

/// Rook origin and destination for a castling king move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let rank = mv.from.rank();
    if mv.is_castle_kingside() {
        (Square(rank, 7), Square(rank, 5))
    } else {
        (Square(rank, 0), Square(rank, 3))
    }
}

/// The castling right tied to a rook's home corner.
fn corner_right(sq: Square) -> Option<(Color, bool)> {
    match (sq.rank(), sq.file()) {
        (0, 0) => Some((Color::White, false)),
        (0, 7) => Some((Color::White, true)),
        (7, 0) => Some((Color::Black, false)),
        (7, 7) => Some((Color::Black, true)),
        _ => None,
    }
}

/// The piece standing on `mv.to` after the move, promoted if need be.
fn landed_piece(mv: &Move) -> Piece {
    Piece {
        kind: mv.landing_kind(),
        has_moved: true,
        ..mv.piece
    }
}

impl Board {
    /// Apply `mv` to the grid until the returned guard is dropped.
    pub fn trial(&mut self, mv: &Move) -> Trial<'_> {
        let mut trial = Trial {
            board: self,
            undo: Vec::with_capacity(4),
        };
        if mv.is_en_passant {
            trial.set(Square(mv.from.rank(), mv.to.file()), None);
        }
        if mv.is_castling {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = trial.board.piece_at(rook_from);
            trial.set(rook_from, None);
            trial.set(rook_to, rook.map(|rook| Piece { has_moved: true, ..rook }));
        }
        trial.set(mv.from, None);
        trial.set(mv.to, Some(landed_piece(mv)));
        trial
    }

    /// Commit `mv`. The move must come from this position's legal move list.
    pub fn make_move(&mut self, mv: &Move) {
        let color = mv.piece.color;
        self.en_passant_target = None;

        if mv.is_en_passant {
            self.replace(Square(mv.from.rank(), mv.to.file()), None);
        }
        if mv.is_castling {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            if let Some(rook) = self.replace(rook_from, None) {
                self.replace(rook_to, Some(Piece { has_moved: true, ..rook }));
            }
        }
        self.replace(mv.from, None);
        self.replace(mv.to, Some(landed_piece(mv)));

        let double_step = mv.piece.kind == PieceKind::Pawn
            && !mv.is_teleported()
            && mv.from.file() == mv.to.file()
            && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        if double_step {
            self.en_passant_target = Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()));
        }

        if mv.piece.kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        for sq in [mv.from, mv.to] {
            if let Some((owner, kingside)) = corner_right(sq) {
                self.castling_rights.remove(owner, kingside);
            }
        }

        self.history.push(*mv);
        self.side_to_move = color.opponent();
        debug!("committed {mv:?}, {} to move", self.side_to_move);
    }

    /// Whether `mv` leaves the piece it lands with natively reaching the
    /// enemy king, judged on the position after the move. Other pieces that
    /// the move uncovers are not considered.
    pub fn gives_check(&mut self, mv: &Move) -> bool {
        let enemy = mv.piece.color.opponent();
        let trial = self.trial(mv);
        let check = trial
            .find_king(enemy)
            .is_some_and(|king| trial.can_natively_reach(landed_piece(mv), mv.to, king));
        check
    }

    /// Side to move is in native check and has no legal move.
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    /// Side to move is not in check and has no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }
}
