//! Rank entanglement: rank-mate discovery and transporter generation.
//!
//! Alliances are never stored. Every query rescans the mover's current rank,
//! so a piece that changes rank loses its old rank-mates and picks up the new
//! ones on the very next lookup.

use log::trace;

use super::{Bitboard, Board, Lender, Move, Piece, PieceKind, ShareMode, Square, Step};

impl Board {
    /// Friendly pieces sharing the rank of the piece on `sq`, in file order.
    ///
    /// Empty when `sq` is unoccupied.
    #[must_use]
    pub fn rank_mates(&self, sq: Square) -> Vec<Lender> {
        let Some(piece) = self.piece_at(sq) else {
            return Vec::new();
        };
        (0..8)
            .filter(|&file| file != sq.file())
            .filter_map(|file| {
                let mate_sq = Square(sq.rank(), file);
                self.piece_at(mate_sq)
                    .filter(|mate| mate.color == piece.color)
                    .map(|mate| Lender {
                        piece: mate,
                        square: mate_sq,
                    })
            })
            .collect()
    }

    /// Transporter moves for the piece on `from`, before king-safety filtering.
    ///
    /// LINEAR needs at least one rank-mate. QUANTUM always projects, since the
    /// mover is part of its own rank's union.
    pub(crate) fn transporter_moves(&self, from: Square, piece: Piece, out: &mut Vec<Move>) {
        let mates = self.rank_mates(from);
        let before = out.len();
        match self.mode {
            ShareMode::Linear if mates.is_empty() => return,
            ShareMode::Linear => self.linear_transporter(from, piece, &mates, out),
            ShareMode::Quantum => self.quantum_transporter(from, piece, &mates, out),
        }
        trace!(
            "{} transporter moves for {} on {from} ({} rank-mates, {})",
            out.len() - before,
            piece.symbol(),
            mates.len(),
            self.mode
        );
    }

    /// LINEAR: go wherever a rank-mate could go from its own square.
    ///
    /// The mover still stands on `from`, so a mate's ray that meets it stops.
    fn linear_transporter(&self, from: Square, piece: Piece, mates: &[Lender], out: &mut Vec<Move>) {
        let mut seen = Bitboard::EMPTY;
        for &mate in mates {
            for &step in mate.piece.native_vectors() {
                if step.sliding {
                    for target in ray(mate.square, step) {
                        if target == from {
                            break;
                        }
                        match self.piece_at(target) {
                            Some(occupant) => {
                                if occupant.color != piece.color && seen.insert(target) {
                                    out.push(transporter_move(from, piece, target, Some(occupant), mate));
                                }
                                break;
                            }
                            None => {
                                if seen.insert(target) {
                                    out.push(transporter_move(from, piece, target, None, mate));
                                }
                            }
                        }
                    }
                } else {
                    let Some(target) = mate.square.offset(step.dx, step.dy) else {
                        continue;
                    };
                    self.push_jump(from, piece, target, mate, &mut seen, out);
                }
            }
        }
    }

    /// QUANTUM: the union of every vector on the rank, launched from every
    /// occupied square of the rank.
    ///
    /// A vector is credited to the first piece that contributes it, mates
    /// before the mover, so a piece alone on its rank lends to itself. The
    /// mover's own square is transparent to rays.
    fn quantum_transporter(
        &self,
        from: Square,
        piece: Piece,
        mates: &[Lender],
        out: &mut Vec<Move>,
    ) {
        let this = Lender {
            piece,
            square: from,
        };
        let mut union: Vec<(Step, Lender)> = Vec::new();
        for &contributor in mates.iter().chain(std::iter::once(&this)) {
            for &step in contributor.piece.native_vectors() {
                if !union.iter().any(|&(known, _)| known == step) {
                    union.push((step, contributor));
                }
            }
        }

        let mut seen = Bitboard::EMPTY;
        let launches = std::iter::once(from).chain(mates.iter().map(|mate| mate.square));
        for launch in launches {
            for &(step, lender) in &union {
                if step.sliding {
                    for target in ray(launch, step) {
                        if target == from {
                            continue;
                        }
                        match self.piece_at(target) {
                            Some(occupant) => {
                                if occupant.color != piece.color && seen.insert(target) {
                                    out.push(transporter_move(from, piece, target, Some(occupant), lender));
                                }
                                break;
                            }
                            None => {
                                if seen.insert(target) {
                                    out.push(transporter_move(from, piece, target, None, lender));
                                }
                            }
                        }
                    }
                } else {
                    let Some(target) = launch.offset(step.dx, step.dy) else {
                        continue;
                    };
                    self.push_jump(from, piece, target, lender, &mut seen, out);
                }
            }
        }
    }

    fn push_jump(
        &self,
        from: Square,
        piece: Piece,
        target: Square,
        lender: Lender,
        seen: &mut Bitboard,
        out: &mut Vec<Move>,
    ) {
        if target == from {
            return;
        }
        let occupant = self.piece_at(target);
        if occupant.is_some_and(|o| o.color == piece.color) {
            return;
        }
        if seen.insert(target) {
            out.push(transporter_move(from, piece, target, occupant, lender));
        }
    }
}

/// Squares along a sliding vector from `origin`, nearest first, to the edge.
pub(crate) fn ray(origin: Square, step: Step) -> impl Iterator<Item = Square> {
    (1..8).map_while(move |dist| origin.offset(step.dx * dist, step.dy * dist))
}

/// Builds a transporter move. Any pawn arriving on its promotion rank this
/// way becomes a queen, whatever the lender's kind.
fn transporter_move(
    from: Square,
    piece: Piece,
    to: Square,
    captured: Option<Piece>,
    lender: Lender,
) -> Move {
    let mv = Move::transporter(from, to, piece, captured, lender);
    if piece.kind == PieceKind::Pawn && to.is_promotion_rank(piece.color) {
        mv.with_promotion(PieceKind::Queen)
    } else {
        mv
    }
}
