//! Move text in and out.
//!
//! Input is coordinate notation (`e2e4`, `e2-e4`, `e2xe4`, optionally with a
//! promotion suffix `e7e8q` / `e7e8=N`) or castling (`O-O`, `0-0-0`, ...).
//! Output is the annotated form recorded in the game log, e.g. `~Nb6-b8=Q!+`
//! for a pawn that borrowed a knight's jump to promote with check.

use crate::board::{Move, MoveParseError, PieceKind, Square, PROMOTION_KINDS};

/// What a line of move text asks for, before it is matched against the
/// legal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRequest {
    Castle {
        kingside: bool,
    },
    Coordinates {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

/// Parse move text.
///
/// # Errors
/// Returns `MoveParseError` for empty text, fewer than two squares, squares
/// off the board, a promotion letter that is not Q, R, B or N, or anything
/// trailing after that.
pub fn parse_move(text: &str) -> Result<MoveRequest, MoveParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MoveParseError::Empty);
    }
    match text.to_ascii_uppercase().as_str() {
        "O-O" | "0-0" => return Ok(MoveRequest::Castle { kingside: true }),
        "O-O-O" | "0-0-0" => return Ok(MoveRequest::Castle { kingside: false }),
        _ => {}
    }

    let chars: Vec<char> = text
        .chars()
        .filter(|c| !matches!(c, '-' | 'x' | 'X'))
        .collect();
    if chars.len() < 4 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }
    let square = |pair: &[char]| -> Result<Square, MoveParseError> {
        pair.iter()
            .collect::<String>()
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(&chars[0..2])?;
    let to = square(&chars[2..4])?;

    let promotion = match &chars[4..] {
        [] => None,
        [c] | ['=', c] => Some(promotion_kind(*c)?),
        rest => {
            return Err(MoveParseError::TrailingInput {
                rest: rest.iter().collect(),
            })
        }
    };
    Ok(MoveRequest::Coordinates {
        from,
        to,
        promotion,
    })
}

fn promotion_kind(c: char) -> Result<PieceKind, MoveParseError> {
    PieceKind::from_char(c)
        .filter(|kind| PROMOTION_KINDS.contains(kind))
        .ok_or(MoveParseError::InvalidPromotion { char: c })
}

/// Annotated form of a committed move:
/// `[piece letter]["~" lender letter]from("x"|"-")to["=" promotion]["!"]["+"|"#"]`.
///
/// Pawns carry no piece letter, castling is written `O-O` / `O-O-O`, and `!`
/// marks a pawn-knight apex promotion.
#[must_use]
pub fn annotate(mv: &Move, gives_check: bool, is_checkmate: bool) -> String {
    let mut text = String::new();
    if mv.is_castling {
        text.push_str(if mv.is_castle_kingside() { "O-O" } else { "O-O-O" });
    } else {
        if mv.piece.kind != PieceKind::Pawn {
            text.push(mv.piece.kind.letter());
        }
        if let Some(lender) = mv.borrowed_from {
            text.push('~');
            text.push(lender.piece.kind.letter());
        }
        text.push_str(&mv.from.to_string());
        text.push(if mv.is_capture() { 'x' } else { '-' });
        text.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            text.push('=');
            text.push(promo.letter());
        }
        if mv.is_apex() {
            text.push('!');
        }
    }
    if is_checkmate {
        text.push('#');
    } else if gives_check {
        text.push('+');
    }
    text
}
