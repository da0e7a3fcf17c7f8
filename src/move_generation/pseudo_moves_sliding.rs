//! Pseudo-legal bishop, rook, and queen move generation.
//!
//! Each ray collects empty squares until the board edge or the first
//! occupied square, which is included only when it holds an enemy piece.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::ray_trace::trace_ray;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_sliding_moves(
    position: &Position,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for direction in directions {
        let (empty, blocker) = trace_ray(&position.board, from, *direction);
        out.extend(empty);
        if let Some(to) = blocker.filter(|to| position.board.side_at(*to) != Some(side)) {
            out.push(to);
        }
    }
}

#[inline]
pub fn generate_bishop_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    generate_sliding_moves(position, from, side, &BISHOP_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    generate_sliding_moves(position, from, side, &ROOK_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    generate_sliding_moves(position, from, side, &QUEEN_DIRECTIONS, out);
}
