//! Occupancy-aware ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Board;

/// Walk from `origin` in `(d_row, d_col)` steps.
///
/// Every empty square is collected. The first occupied square ends the ray
/// and is returned separately so callers can decide whether it counts
/// (an enemy capture, or an attacking slider).
pub fn trace_ray(board: &Board, origin: Square, (d_row, d_col): (i8, i8)) -> (Vec<Square>, Option<Square>) {
    let mut empty = Vec::with_capacity(7);
    let mut current = origin;

    while let Some(next) = current.offset(d_row, d_col) {
        if !board.is_empty(next) {
            return (empty, Some(next));
        }
        empty.push(next);
        current = next;
    }

    (empty, None)
}

/// First occupied square along a ray, if any.
pub fn first_blocker(board: &Board, origin: Square, (d_row, d_col): (i8, i8)) -> Option<Square> {
    let mut current = origin;
    while let Some(next) = current.offset(d_row, d_col) {
        if !board.is_empty(next) {
            return Some(next);
        }
        current = next;
    }
    None
}
