//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// The friendly piece whose native vector a transporter move borrowed,
/// together with the square it stood on when the move was generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lender {
    pub piece: Piece,
    pub square: Square,
}

/// One ply, described as a value.
///
/// A `Move` never touches the board; committing it is `Board::make_move`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub borrowed_from: Option<Lender>,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    /// A native, non-special move
    #[must_use]
    pub const fn native(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            borrowed_from: None,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }

    #[must_use]
    pub const fn castle(from: Square, to: Square, king: Piece) -> Self {
        let mut mv = Move::native(from, to, king, None);
        mv.is_castling = true;
        mv
    }

    #[must_use]
    pub const fn en_passant(from: Square, to: Square, pawn: Piece, captured: Piece) -> Self {
        let mut mv = Move::native(from, to, pawn, Some(captured));
        mv.is_en_passant = true;
        mv
    }

    /// A move borrowed from a rank-mate's movement.
    #[must_use]
    pub const fn transporter(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        lender: Lender,
    ) -> Self {
        let mut mv = Move::native(from, to, piece, captured);
        mv.borrowed_from = Some(lender);
        mv
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// True for transporter moves
    #[inline]
    #[must_use]
    pub const fn is_teleported(&self) -> bool {
        self.borrowed_from.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_castle_kingside(&self) -> bool {
        self.is_castling && self.to.file() > self.from.file()
    }

    /// Pawn-Knight Apex: a pawn promoted by a transporter move whose vector
    /// came from a knight.
    #[must_use]
    pub fn is_apex(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.is_promotion()
            && self
                .borrowed_from
                .is_some_and(|lender| lender.piece.kind == PieceKind::Knight)
    }

    /// Kind standing on `to` once the move is committed
    #[inline]
    #[must_use]
    pub fn landing_kind(&self) -> PieceKind {
        self.promotion.unwrap_or(self.piece.kind)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}{}", self.piece.symbol(), self.from, self.to)?;
        if let Some(lender) = self.borrowed_from {
            write!(f, " ~{}@{}", lender.piece.kind.letter(), lender.square)?;
        }
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.letter())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate form: `e2e4`, `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_apex_requires_knight_lender() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let rook = Piece::new(PieceKind::Rook, Color::White);

        let via_knight = Move::transporter(
            sq("b6"),
            sq("b8"),
            pawn,
            None,
            Lender {
                piece: knight,
                square: sq("a6"),
            },
        )
        .with_promotion(PieceKind::Queen);
        assert!(via_knight.is_teleported());
        assert!(via_knight.is_apex());

        let via_rook = Move::transporter(
            sq("b6"),
            sq("b8"),
            pawn,
            None,
            Lender {
                piece: rook,
                square: sq("a6"),
            },
        )
        .with_promotion(PieceKind::Queen);
        assert!(via_rook.is_promotion());
        assert!(!via_rook.is_apex());

        let native = Move::native(sq("b7"), sq("b8"), pawn, None).with_promotion(PieceKind::Queen);
        assert!(!native.is_apex());
    }

    #[test]
    fn test_display_coordinate_form() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let mv = Move::native(sq("e7"), sq("e8"), pawn, None).with_promotion(PieceKind::Knight);
        assert_eq!(mv.to_string(), "e7e8n");
        assert_eq!(mv.landing_kind(), PieceKind::Knight);
    }

    #[test]
    fn test_castle_side() {
        let king = Piece::new(PieceKind::King, Color::Black);
        assert!(Move::castle(sq("e8"), sq("g8"), king).is_castle_kingside());
        assert!(!Move::castle(sq("e8"), sq("c8"), king).is_castle_kingside());
    }
}
