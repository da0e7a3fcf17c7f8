//! Standard algebraic notation for move records.
//!
//! The body is computed against the position *before* the move is applied.
//! The check/mate suffix depends on the position after the move, so the game
//! layer appends it via [`check_suffix`] once the new phase is known.

use crate::game_state::chess_rules::castle_for_king_move;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GamePhase;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::legal_moves;
use crate::move_generation::pseudo_moves_pawn::is_en_passant_capture;

pub fn move_to_san(
    position: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> String {
    let Some(piece) = position.piece_at(from) else {
        return format!("{from}{to}");
    };

    if piece.kind == PieceKind::King {
        if let Some(castle) = castle_for_king_move(piece.side, from, to) {
            return match castle {
                CastleSide::Kingside => "O-O".to_owned(),
                CastleSide::Queenside => "O-O-O".to_owned(),
            };
        }
    }

    let is_capture = position.piece_at(to).is_some()
        || (piece.kind == PieceKind::Pawn && is_en_passant_capture(position, from, to, piece.side));

    let mut san = String::with_capacity(8);

    if piece.kind == PieceKind::Pawn {
        if is_capture {
            san.push(from.file_char());
        }
    } else {
        san.push(piece.kind.letter());
        san.push_str(&disambiguation(position, piece, from, to));
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&to.to_string());

    if let Some(kind) = promotion {
        san.push('=');
        san.push(kind.letter());
    }

    san
}

/// `+` for check, `#` for mate, nothing otherwise.
pub fn check_suffix(phase: GamePhase) -> Option<char> {
    match phase {
        GamePhase::Check(_) => Some('+'),
        GamePhase::Checkmate { .. } => Some('#'),
        _ => None,
    }
}

/// File first, then rank, then the full square when neither alone is unique.
fn disambiguation(position: &Position, piece: Piece, from: Square, to: Square) -> String {
    let rivals: Vec<Square> = position
        .board
        .pieces()
        .filter(|&(square, other)| square != from && other == piece)
        .map(|(square, _)| square)
        .filter(|&square| legal_moves(position, square).contains(&to))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|square| square.col == from.col);
    let shares_rank = rivals.iter().any(|square| square.row == from.row);

    match (shares_file, shares_rank) {
        (false, _) => from.file_char().to_string(),
        (true, false) => from.rank_char().to_string(),
        (true, true) => from.to_string(),
    }
}
