//! Piece kinds, colors and native movement tables.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single native movement vector.
///
/// `dx` is the file delta, `dy` the rank delta. Sliding vectors repeat until
/// blocked; non-sliding vectors produce exactly one candidate square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
    pub sliding: bool,
}

impl Step {
    const fn new(dx: i32, dy: i32, sliding: bool) -> Self {
        Step { dx, dy, sliding }
    }

    /// True if the offset `(dx, dy)` lies on the ray this vector describes.
    pub(crate) fn ray_contains(self, dx: i32, dy: i32) -> bool {
        if dx == 0 && dy == 0 {
            return false;
        }
        if (self.dx == 0 && dx != 0) || (self.dy == 0 && dy != 0) {
            return false;
        }
        if self.dx != 0 && self.dy != 0 && dx.abs() != dy.abs() {
            return false;
        }
        dx.signum() == self.dx.signum() && dy.signum() == self.dy.signum()
    }
}

const KING_STEPS: [Step; 8] = [
    Step::new(-1, -1, false),
    Step::new(-1, 0, false),
    Step::new(-1, 1, false),
    Step::new(0, -1, false),
    Step::new(0, 1, false),
    Step::new(1, -1, false),
    Step::new(1, 0, false),
    Step::new(1, 1, false),
];

const QUEEN_STEPS: [Step; 8] = [
    Step::new(-1, -1, true),
    Step::new(-1, 0, true),
    Step::new(-1, 1, true),
    Step::new(0, -1, true),
    Step::new(0, 1, true),
    Step::new(1, -1, true),
    Step::new(1, 0, true),
    Step::new(1, 1, true),
];

const ROOK_STEPS: [Step; 4] = [
    Step::new(1, 0, true),
    Step::new(-1, 0, true),
    Step::new(0, 1, true),
    Step::new(0, -1, true),
];

const BISHOP_STEPS: [Step; 4] = [
    Step::new(1, 1, true),
    Step::new(1, -1, true),
    Step::new(-1, 1, true),
    Step::new(-1, -1, true),
];

const KNIGHT_STEPS: [Step; 8] = [
    Step::new(2, 1, false),
    Step::new(2, -1, false),
    Step::new(-2, 1, false),
    Step::new(-2, -1, false),
    Step::new(1, 2, false),
    Step::new(1, -2, false),
    Step::new(-1, 2, false),
    Step::new(-1, -2, false),
];

const WHITE_PAWN_STEPS: [Step; 1] = [Step::new(0, 1, false)];
const BLACK_PAWN_STEPS: [Step; 1] = [Step::new(0, -1, false)];

/// Piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Parse a piece kind from its letter, case-insensitive (k, q, r, b, n, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Uppercase notation letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "KING",
            PieceKind::Queen => "QUEEN",
            PieceKind::Rook => "ROOK",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Pawn => "PAWN",
        }
    }

    #[must_use]
    pub const fn glyph(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::King, Color::Black) => '♚',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Pawn, Color::Black) => '♟',
        }
    }

    /// Native movement vectors for this kind.
    ///
    /// Pawns get their single forward vector only; diagonal captures are
    /// handled by the pawn generator and the attack predicates.
    #[must_use]
    pub const fn native_vectors(self, color: Color) -> &'static [Step] {
        match self {
            PieceKind::King => &KING_STEPS,
            PieceKind::Queen => &QUEEN_STEPS,
            PieceKind::Rook => &ROOK_STEPS,
            PieceKind::Bishop => &BISHOP_STEPS,
            PieceKind::Knight => &KNIGHT_STEPS,
            PieceKind::Pawn => match color {
                Color::White => &WHITE_PAWN_STEPS,
                Color::Black => &BLACK_PAWN_STEPS,
            },
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Promotion choices for native pawn promotion, queen first
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn push (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece occupying a grid cell.
///
/// Pieces carry no position; the board's grid is the only record of where a
/// piece stands.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn native_vectors(self) -> &'static [Step] {
        self.kind.native_vectors(self.color)
    }

    /// True if `target` matches one of this piece's native patterns from
    /// `origin`. Only geometry is tested; path blocking is up to the caller.
    #[must_use]
    pub fn can_natively_attack(self, origin: Square, target: Square) -> bool {
        let dx = target.file() as i32 - origin.file() as i32;
        let dy = target.rank() as i32 - origin.rank() as i32;

        if self.kind == PieceKind::Pawn {
            return dx.abs() == 1 && dy == self.color.pawn_direction();
        }

        self.native_vectors().iter().any(|step| {
            if step.sliding {
                step.ray_contains(dx, dy)
            } else {
                step.dx == dx && step.dy == dy
            }
        })
    }

    /// Letter with case by color (uppercase for White)
    #[must_use]
    pub fn symbol(self) -> char {
        let c = self.kind.letter();
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        self.kind.glyph(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
