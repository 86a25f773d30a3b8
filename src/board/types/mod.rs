//! Core value types.
//!
//! - `PieceKind`, `Color`, `Piece` and the native movement tables (`Step`)
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `Lender` - one ply and its borrowing provenance
//! - `CastlingRights` - castling state
//! - `ShareMode` - LINEAR / QUANTUM transporter generation
//! - `Bitboard` - square sets

mod bitboard;
mod castling;
mod mode;
mod moves;
mod piece;
mod square;

pub use bitboard::Bitboard;
pub use castling::CastlingRights;
pub use mode::ShareMode;
pub use moves::{Lender, Move};
pub use piece::{Color, Piece, PieceKind, Step, PROMOTION_KINDS};
pub use square::Square;
