//! Values handed back to callers: game state, position snapshots and move
//! outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, ShareMode};

/// Outcome of the game so far.
///
/// The two draw states exist for completeness; nothing ever enters them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameState {
    #[default]
    Ongoing,
    WhiteWinsByCheckmate,
    BlackWinsByCheckmate,
    Stalemate,
    DrawByRepetition,
    DrawByFiftyMoves,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }

    /// Snake-case tag, e.g. `white_wins_by_checkmate`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::Ongoing => "ongoing",
            GameState::WhiteWinsByCheckmate => "white_wins_by_checkmate",
            GameState::BlackWinsByCheckmate => "black_wins_by_checkmate",
            GameState::Stalemate => "stalemate",
            GameState::DrawByRepetition => "draw_by_repetition",
            GameState::DrawByFiftyMoves => "draw_by_fifty_moves",
        }
    }

    /// The checkmate state won by `winner`.
    #[must_use]
    pub const fn checkmate_by(winner: Color) -> Self {
        match winner {
            Color::White => GameState::WhiteWinsByCheckmate,
            Color::Black => GameState::BlackWinsByCheckmate,
        }
    }

    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(
            self,
            GameState::WhiteWinsByCheckmate | GameState::BlackWinsByCheckmate
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the current position, as shown by an `info` request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameInfo {
    pub state: GameState,
    pub side_to_move: Color,
    pub in_check: bool,
    pub legal_move_count: usize,
    pub transporter_move_count: usize,
    pub apex_available: bool,
    pub tal_opening_available: bool,
    pub ply_count: usize,
    pub mode: ShareMode,
}

impl fmt::Display for GameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "state: {}", self.state)?;
        writeln!(f, "mode: {}", self.mode)?;
        writeln!(f, "to move: {}", self.side_to_move)?;
        writeln!(f, "in check: {}", self.in_check)?;
        writeln!(f, "legal moves: {}", self.legal_move_count)?;
        writeln!(f, "transporter moves: {}", self.transporter_move_count)?;
        writeln!(f, "apex available: {}", self.apex_available)?;
        writeln!(f, "tal opening available: {}", self.tal_opening_available)?;
        write!(f, "ply: {}", self.ply_count)
    }
}

/// A committed move and what it did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Annotation followed by any commentary
    pub message: String,
    pub mv: Move,
    pub gives_check: bool,
    pub is_checkmate: bool,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
