//! Bitboard square set.

use super::square::Square;

/// A 64-bit set of squares, bit `rank * 8 + file`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.as_index()) != 0
    }

    /// Add a square, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, sq: Square) -> bool {
        let fresh = !self.contains(sq);
        self.0 |= 1 << sq.as_index();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_fresh_squares() {
        let mut seen = Bitboard::EMPTY;
        assert!(seen.insert(Square(2, 0)));
        assert!(!seen.insert(Square(2, 0)));
        assert!(seen.insert(Square(2, 2)));
        assert!(seen.contains(Square(2, 2)));
        assert!(!seen.contains(Square(2, 1)));
    }
}
