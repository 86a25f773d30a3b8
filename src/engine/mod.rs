//! Game orchestration on top of the board rules.
//!
//! [`Engine`] owns one [`Board`](crate::board::Board), resolves move text to
//! legal moves, tracks the outcome, and keeps a log of annotated moves.
//!
//! # Example
//! ```
//! use tether_chess::engine::{Engine, GameState};
//!
//! let mut engine = Engine::new();
//! let report = engine.make_move_from_notation("e2e4").unwrap();
//! assert_eq!(report.message, "e2-e4");
//! assert_eq!(engine.state(), GameState::Ongoing);
//! ```

mod controller;
pub mod notation;
mod report;

pub use controller::Engine;
pub use notation::{annotate, parse_move, MoveRequest};
pub use report::{GameInfo, GameState, MoveReport};
