//! UCI long-algebraic move strings.
//!
//! External engines reply with moves like `e2e4` or `e7e8q`. These helpers
//! decode such strings into board coordinates and encode committed moves
//! back into the same shape. Legality is not checked here.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

/// Decode `<fromFile><fromRank><toFile><toRank>[promotion]`.
pub fn parse_uci_move(long_algebraic: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let malformed = || ChessError::MalformedProtocolMove(long_algebraic.to_owned());

    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(malformed());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| malformed())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| malformed())?;
    if from == to {
        return Err(malformed());
    }

    let promotion = match text.as_bytes().get(4) {
        Some(&ch) => Some(char_to_promotion(ch as char).ok_or_else(malformed)?),
        None => None,
    };

    Ok((from, to, promotion))
}

/// Encode a move as a UCI string; promotions use a lowercase letter.
pub fn format_uci_move(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&from.to_string());
    out.push_str(&to.to_string());
    if let Some(kind) = promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
