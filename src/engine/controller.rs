//! Turn-based game controller.

use log::{debug, info};

use crate::board::{Board, Move, MoveError, PieceKind, ShareMode, Square};

use super::notation::{annotate, parse_move, MoveRequest};
use super::report::{GameInfo, GameState, MoveReport};

/// One game: a board, its outcome so far, and the annotated move log.
///
/// Every query returns an empty list once the game is over, except
/// `rank_mate_squares`, which stays informational.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    state: GameState,
    log: Vec<String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Standard starting position, LINEAR sharing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(ShareMode::Linear)
    }

    #[must_use]
    pub fn with_mode(mode: ShareMode) -> Self {
        info!("new game ({mode} mode)");
        Engine {
            board: Board::with_mode(mode),
            state: GameState::Ongoing,
            log: Vec::new(),
        }
    }

    /// Adopt an arbitrary position; the game state is worked out from it.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut engine = Engine {
            board,
            state: GameState::Ongoing,
            log: Vec::new(),
        };
        engine.refresh_state();
        info!(
            "loaded position ({} mode, {})",
            engine.board.mode(),
            engine.state
        );
        engine
    }

    /// Back to the starting position, keeping the sharing mode.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.state = GameState::Ongoing;
        self.log.clear();
        info!("new game ({} mode)", self.board.mode());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> ShareMode {
        self.board.mode()
    }

    /// Switch sharing mode. Refused (returns false) once a move was played.
    pub fn set_mode(&mut self, mode: ShareMode) -> bool {
        if self.board.ply_count() > 0 {
            return false;
        }
        self.board.set_mode(mode);
        self.refresh_state();
        true
    }

    #[must_use]
    pub fn is_white_to_move(&self) -> bool {
        self.board.white_to_move()
    }

    #[must_use]
    pub fn board_display(&self) -> String {
        self.board.to_string()
    }

    /// Annotations of every committed move, oldest first.
    #[must_use]
    pub fn game_log(&self) -> &[String] {
        &self.log
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        if self.state.is_over() {
            return Vec::new();
        }
        self.board.generate_legal_moves()
    }

    pub fn legal_moves_for_piece(&mut self, from: Square) -> Vec<Move> {
        if self.state.is_over() {
            return Vec::new();
        }
        self.board.generate_legal_moves_for_piece(from)
    }

    /// Legal moves that borrow a rank-mate's movement.
    pub fn transporter_moves(&mut self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(Move::is_teleported)
            .collect()
    }

    /// Legal pawn-knight apex promotions.
    pub fn apex_moves(&mut self) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(Move::is_apex)
            .collect()
    }

    /// Legal moves after which the moved piece natively reaches the enemy king.
    ///
    /// Only the moved piece is tested. A discovered check, or the rook's check
    /// after castling, is not listed here even though the committed move's
    /// `MoveReport::gives_check` reports it.
    pub fn checking_moves(&mut self) -> Vec<Move> {
        let moves = self.legal_moves();
        moves
            .into_iter()
            .filter(|mv| self.board.gives_check(mv))
            .collect()
    }

    /// Before the first move only: a back-rank queen or rook borrowing the
    /// jump of a knight that also stands on the back rank.
    pub fn tal_opening_moves(&mut self) -> Vec<Move> {
        if self.board.ply_count() > 0 {
            return Vec::new();
        }
        let back_rank = self.board.side_to_move().back_rank();
        self.transporter_moves()
            .into_iter()
            .filter(|mv| {
                matches!(mv.piece.kind, PieceKind::Queen | PieceKind::Rook)
                    && mv.from.rank() == back_rank
                    && mv.borrowed_from.is_some_and(|lender| {
                        lender.piece.kind == PieceKind::Knight && lender.square.rank() == back_rank
                    })
            })
            .collect()
    }

    /// Squares of the friendly pieces sharing a rank with the piece on `sq`.
    #[must_use]
    pub fn rank_mate_squares(&self, sq: Square) -> Vec<Square> {
        self.board
            .rank_mates(sq)
            .into_iter()
            .map(|mate| mate.square)
            .collect()
    }

    /// Play the piece on `from` to `to`.
    ///
    /// When several legal moves share that destination (promotions, or a
    /// native and a borrowed route), `promotion` picks among them; without it
    /// a queen promotion or a non-promoting move is taken, native first.
    /// `promotion` is ignored when no candidate promotes.
    ///
    /// # Errors
    /// Fails without touching the game if it is already over, either square
    /// is off the board, `from` is empty or holds the opponent's piece, or no
    /// legal move matches.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveReport, MoveError> {
        self.ensure_ongoing()?;
        for sq in [from, to] {
            if !sq.is_on_board() {
                return Err(MoveError::OffBoard {
                    rank: sq.rank(),
                    file: sq.file(),
                });
            }
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != self.board.side_to_move() {
            return Err(MoveError::NotYourTurn { square: from });
        }

        let candidates: Vec<Move> = self
            .board
            .generate_legal_moves_for_piece(from)
            .into_iter()
            .filter(|mv| mv.to == to)
            .collect();
        let promotion = promotion.filter(|_| candidates.iter().any(Move::is_promotion));
        let chosen = match promotion {
            Some(kind) => candidates.iter().find(|mv| mv.promotion == Some(kind)),
            None => candidates
                .iter()
                .find(|mv| matches!(mv.promotion, None | Some(PieceKind::Queen))),
        };
        let mv = *chosen.ok_or(MoveError::IllegalMove { from, to })?;
        Ok(self.commit(mv))
    }

    /// Parse `text` and play it.
    ///
    /// # Errors
    /// `MoveError::Parse` for malformed text, `MoveError::NoMatchingMove`
    /// for a castle that is not available, otherwise as `make_move`.
    pub fn make_move_from_notation(&mut self, text: &str) -> Result<MoveReport, MoveError> {
        let request = parse_move(text)?;
        match request {
            MoveRequest::Coordinates {
                from,
                to,
                promotion,
            } => self.make_move(from, to, promotion),
            MoveRequest::Castle { kingside } => {
                self.ensure_ongoing()?;
                let color = self.board.side_to_move();
                let castle = self.board.find_king(color).and_then(|king| {
                    self.board
                        .generate_legal_moves_for_piece(king)
                        .into_iter()
                        .find(|mv| mv.is_castling && mv.is_castle_kingside() == kingside)
                });
                match castle {
                    Some(mv) => Ok(self.commit(mv)),
                    None => Err(MoveError::NoMatchingMove {
                        notation: text.trim().to_string(),
                    }),
                }
            }
        }
    }

    /// Snapshot for display.
    pub fn game_info(&mut self) -> GameInfo {
        let legal = self.legal_moves();
        GameInfo {
            state: self.state,
            side_to_move: self.board.side_to_move(),
            in_check: self.board.is_in_check(),
            legal_move_count: legal.len(),
            transporter_move_count: legal.iter().filter(|mv| mv.is_teleported()).count(),
            apex_available: legal.iter().any(Move::is_apex),
            tal_opening_available: !self.tal_opening_moves().is_empty(),
            ply_count: self.board.ply_count(),
            mode: self.board.mode(),
        }
    }

    fn ensure_ongoing(&self) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver {
                state: self.state.as_str(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> MoveReport {
        self.board.make_move(&mv);
        self.refresh_state();

        let gives_check = self.board.is_in_check();
        let is_checkmate = self.state.is_checkmate();
        let annotation = annotate(&mv, gives_check, is_checkmate);
        debug!("ply {}: {annotation}", self.board.ply_count());
        if self.state.is_over() {
            info!("game over: {}", self.state);
        }

        let mut message = annotation.clone();
        if let Some(lender) = mv.borrowed_from {
            message.push_str(&format!(
                " (Transporter: borrowed {} movement)",
                lender.piece.kind.name()
            ));
        }
        if mv.is_apex() {
            message.push_str(" [PAWN-KNIGHT APEX! Instant promotion!]");
        }
        if is_checkmate {
            message.push_str(" CHECKMATE!");
        } else if self.state == GameState::Stalemate {
            message.push_str(" STALEMATE!");
        } else if gives_check {
            message.push_str(" Check!");
        }
        self.log.push(annotation);

        MoveReport {
            message,
            mv,
            gives_check,
            is_checkmate,
        }
    }

    /// Checkmate or stalemate when the side to move has nothing legal.
    fn refresh_state(&mut self) {
        self.state = if self.board.has_legal_moves() {
            GameState::Ongoing
        } else if self.board.is_in_check() {
            GameState::checkmate_by(self.board.side_to_move().opponent())
        } else {
            GameState::Stalemate
        };
    }
}
