use std::fmt;

use super::{CastlingRights, Color, Move, Piece, PieceKind, ShareMode, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid plus side-to-move, en passant, castling and history.
///
/// The grid is the single source of truth for where every piece stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) history: Vec<Move>,
    pub(crate) mode: ShareMode,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position, LINEAR mode.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ShareMode::Linear)
    }

    /// Standard starting position with the given sharing mode.
    #[must_use]
    pub fn with_mode(mode: ShareMode) -> Self {
        let mut board = Board::empty();
        board.mode = mode;
        board.reset();
        board
    }

    /// An empty grid, White to move, no rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            history: Vec::new(),
            mode: ShareMode::Linear,
        }
    }

    /// Re-seed the starting position, keeping the sharing mode.
    pub fn reset(&mut self) {
        self.grid = [[None; 8]; 8];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            self.grid[0][file] = Some(Piece::new(kind, Color::White));
            self.grid[7][file] = Some(Piece::new(kind, Color::Black));
            self.grid[1][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            self.grid[6][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        }
        self.side_to_move = Color::White;
        self.en_passant_target = None;
        self.castling_rights = CastlingRights::all();
        self.history.clear();
    }

    /// Occupant of `sq`; `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid
            .get(sq.rank())
            .and_then(|rank| rank.get(sq.file()))
            .copied()
            .flatten()
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Overwrite a cell, returning the previous occupant.
    #[inline]
    pub(crate) fn replace(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[sq.rank()][sq.file()], piece)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Committed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn mode(&self) -> ShareMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ShareMode) {
        self.mode = mode;
    }

    /// All occupied squares of one color, a1 upward.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.piece_at(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", rank + 1)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
