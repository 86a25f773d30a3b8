//! Error types for board and engine operations.

use std::fmt;

use super::types::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Nothing to parse
    Empty,
    /// Too few characters for two squares
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Unexpected characters after the move
    TrailingInput { rest: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Empty move notation"),
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move needs two squares, found {len} characters")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::TrailingInput { rest } => {
                write!(f, "Unexpected trailing input '{rest}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a move request was rejected. The board is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already reached a terminal state
    GameOver { state: &'static str },
    /// A coordinate lies outside 0-7
    OffBoard { rank: usize, file: usize },
    /// Origin square is empty
    NoPiece { square: Square },
    /// Origin piece belongs to the side not on move
    NotYourTurn { square: Square },
    /// Destination (or promotion choice) is not among the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// Notation could not be parsed
    Parse(MoveParseError),
    /// Notation parsed but names no legal move
    NoMatchingMove { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver { state } => write!(f, "Game is over: {state}"),
            MoveError::OffBoard { rank, file } => {
                write!(f, "Square (rank {rank}, file {file}) is off the board")
            }
            MoveError::NoPiece { square } => write!(f, "No piece at {square}"),
            MoveError::NotYourTurn { square } => {
                write!(f, "Not your turn: piece at {square} belongs to the other side")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move: {from} to {to}"),
            MoveError::Parse(e) => write!(f, "Invalid move notation: {e}"),
            MoveError::NoMatchingMove { notation } => {
                write!(f, "Illegal move: no legal move matches '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveParseError> for MoveError {
    fn from(e: MoveParseError) -> Self {
        MoveError::Parse(e)
    }
}
