//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use tether_chess::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, Move, MoveError, MoveParseError, Piece, PieceKind, ShareMode,
    Square, SquareError,
};
