//! Board representation and the rank-entanglement rules.
//!
//! The grid is a plain 8x8 array of optional pieces. Friendly pieces on the
//! same rank lend each other their movement ("transporter" moves), but only a
//! piece's own movement can give check. Kings additionally refuse any square
//! an enemy could reach by borrowing.
//!
//! # Example
//! ```
//! use tether_chess::board::{Board, ShareMode};
//!
//! let mut board = Board::with_mode(ShareMode::Linear);
//! let moves = board.generate_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod entanglement;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, SquareError};
pub use make_unmake::Trial;
pub use state::Board;
pub use types::{
    Bitboard, CastlingRights, Color, Lender, Move, Piece, PieceKind, ShareMode, Square, Step,
    PROMOTION_KINDS,
};
