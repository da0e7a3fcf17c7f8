//! Attack detection.
//!
//! Pure predicates over a `Position`: nothing here mutates the position or
//! produces any side effect beyond its return value.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::ray_trace::first_blocker;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn is_king_in_check(position: &Position, side: Side) -> bool {
    is_square_attacked(position, position.king_square(side), side.opposite())
}

/// Whether any piece of `attacker` attacks `square`.
///
/// A king counts as attacking its neighbours, which is what keeps the two
/// kings from ever standing next to each other.
pub fn is_square_attacked(position: &Position, square: Square, attacker: Side) -> bool {
    if !square.is_on_board() {
        return false;
    }
    let board = &position.board;
    let holds = |at: Square, kind: PieceKind| board.get(at) == Some(Piece::new(attacker, kind));

    if pawn_attack_origins(attacker, square).any(|from| holds(from, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|from| holds(from, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|from| holds(from, PieceKind::King)) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|direction| {
            first_blocker(board, square, *direction)
                .is_some_and(|from| holds(from, kind) || holds(from, PieceKind::Queen))
        })
    };

    slider_hits(&ROOK_DIRECTIONS[..], PieceKind::Rook)
        || slider_hits(&BISHOP_DIRECTIONS[..], PieceKind::Bishop)
}
