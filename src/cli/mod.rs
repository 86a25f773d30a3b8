//! Line-oriented front end.
//!
//! Reads one command per line, answers on the output stream, and keeps going
//! after bad input. Everything not recognised as a command is tried as move
//! notation, so a session can be as short as:
//!
//! ```text
//! e2e4
//! e7e5
//! transporter
//! info
//! ```

pub mod command;

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::board::{Move, ShareMode, Square};
use crate::engine::Engine;

use command::{parse_cli_command, CliCommand};

const HELP: &str = "\
commands:
  new                    start over (keeps the mode)
  mode linear|quantum    choose how rank-mates share movement (before the first move)
  board                  show the board
  moves [square]         legal moves, optionally for one piece
  transporter            legal moves borrowed from rank-mates
  apex                   pawn-knight apex promotions
  checks                 moves that give check
  tal                    Tal opening moves (first move only)
  mates <square>         rank-mates of the piece on a square
  info                   game summary
  log                    moves played so far
  move <notation>        play a move (e2e4, e2-e4, e7e8=N, O-O); the word is optional
  quit                   leave";

/// What to do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Continue(String),
    Quit,
}

/// One interactive game.
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
}

impl Session {
    #[must_use]
    pub fn new(mode: ShareMode) -> Self {
        Session {
            engine: Engine::with_mode(mode),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run one command and produce its output text.
    pub fn handle(&mut self, cmd: CliCommand) -> CommandResult {
        let output = match cmd {
            CliCommand::Quit => return CommandResult::Quit,
            CliCommand::New => {
                self.engine.new_game();
                format!("New game ({} mode)\n{}", self.engine.mode(), self.engine.board_display())
            }
            CliCommand::Mode(mode) => {
                if self.engine.set_mode(mode) {
                    format!("Mode set to {mode}")
                } else {
                    "Error: mode can only change before the first move".to_string()
                }
            }
            CliCommand::Board => self.engine.board_display(),
            CliCommand::Moves(None) => {
                let moves = self.engine.legal_moves();
                format_moves("legal moves", &moves)
            }
            CliCommand::Moves(Some(sq)) => {
                let moves = self.engine.legal_moves_for_piece(sq);
                format_moves(&format!("legal moves from {sq}"), &moves)
            }
            CliCommand::Transporter => {
                let moves = self.engine.transporter_moves();
                format_moves("transporter moves", &moves)
            }
            CliCommand::Apex => {
                let moves = self.engine.apex_moves();
                format_moves("apex moves", &moves)
            }
            CliCommand::Checks => {
                let moves = self.engine.checking_moves();
                format_moves("checking moves", &moves)
            }
            CliCommand::Tal => {
                let moves = self.engine.tal_opening_moves();
                format_moves("tal opening moves", &moves)
            }
            CliCommand::Mates(sq) => format_mates(sq, &self.engine.rank_mate_squares(sq)),
            CliCommand::Info => self.engine.game_info().to_string(),
            CliCommand::Log => {
                let log = self.engine.game_log();
                if log.is_empty() {
                    "No moves yet".to_string()
                } else {
                    log.iter()
                        .enumerate()
                        .map(|(i, entry)| format!("{}. {entry}", i + 1))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            CliCommand::Help => HELP.to_string(),
            CliCommand::Move(text) => match self.engine.make_move_from_notation(&text) {
                Ok(report) => format!("{}\n{}", report.message, self.engine.board_display()),
                Err(e) => format!("Error: {e}"),
            },
            CliCommand::Invalid(reason) => format!("Error: {reason}"),
        };
        CommandResult::Continue(output)
    }

    /// Read commands from `input` until it ends or `quit`, answering on `output`.
    ///
    /// # Errors
    /// Propagates I/O errors from either stream.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.engine.board_display())?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_cli_command(&line) else {
                continue;
            };
            match self.handle(cmd) {
                CommandResult::Quit => break,
                CommandResult::Continue(text) => {
                    writeln!(output, "{text}")?;
                    output.flush()?;
                }
            }
        }
        Ok(())
    }
}

fn format_moves(title: &str, moves: &[Move]) -> String {
    let mut text = format!("{} {title}", moves.len());
    for mv in moves {
        let _ = write!(text, "\n  {mv}");
        if let Some(lender) = mv.borrowed_from {
            let _ = write!(text, " ~{} from {}", lender.piece.kind.letter(), lender.square);
        }
        if mv.is_apex() {
            let _ = write!(text, " apex");
        }
    }
    text
}

fn format_mates(sq: Square, mates: &[Square]) -> String {
    if mates.is_empty() {
        return format!("No rank-mates for {sq}");
    }
    let list: Vec<String> = mates.iter().map(Square::to_string).collect();
    format!("Rank-mates of {sq}: {}", list.join(" "))
}

/// Run a session on stdin/stdout.
///
/// # Errors
/// Propagates I/O errors from the terminal.
pub fn run_stdio(mode: ShareMode) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(mode).run(stdin.lock(), stdout.lock())
}
