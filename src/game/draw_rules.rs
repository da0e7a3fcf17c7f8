//! Draw-by-rule evaluators.
//!
//! These run only when enabled in `RulesConfig`, and only after checkmate
//! and stalemate have been ruled out.

use crate::game::game_config::RulesConfig;
use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::DrawReason;
use crate::game_state::position::Position;

/// First enabled draw rule that applies, checked in a fixed order.
///
/// `position_keys` is the key history of the game, current position last.
pub fn detect_draw(
    config: &RulesConfig,
    position: &Position,
    position_keys: &[u64],
) -> Option<DrawReason> {
    if config.fifty_move_rule && position.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return Some(DrawReason::FiftyMoveRule);
    }
    if config.threefold_repetition && is_threefold_repetition(position_keys) {
        return Some(DrawReason::ThreefoldRepetition);
    }
    if config.insufficient_material && has_insufficient_material(position) {
        return Some(DrawReason::InsufficientMaterial);
    }
    None
}

/// True when the latest key has now occurred at least three times.
pub fn is_threefold_repetition(position_keys: &[u64]) -> bool {
    let Some(&current) = position_keys.last() else {
        return false;
    };
    position_keys.iter().filter(|&&key| key == current).count() >= 3
}

/// True for K v K, a lone minor piece, or bishops that all share one square color.
pub fn has_insufficient_material(position: &Position) -> bool {
    let mut knights = 0usize;
    let mut bishop_square_colors = Vec::new();

    for (square, piece) in position.board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight => knights += 1,
            PieceKind::Bishop => bishop_square_colors.push(square.is_light()),
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match (knights, bishop_square_colors.as_slice()) {
        (0, []) | (1, []) | (0, [_]) => true,
        (0, [first, rest @ ..]) => rest.iter().all(|color| color == first),
        _ => false,
    }
}
