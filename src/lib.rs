pub mod board;
pub mod cli;
pub mod engine;

pub use board::{Board, Color, Move, Piece, PieceKind, ShareMode, Square};
pub use engine::{Engine, GameState};
