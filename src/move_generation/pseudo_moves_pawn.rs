//! Pseudo-legal pawn move generation.
//!
//! Emits destination squares for a single pawn: single and double pushes,
//! diagonal captures, and the en-passant capture onto the empty target
//! square. Promotion choice is resolved later by the move executor.

use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::pawn_moves::pawn_attack_targets;

pub fn generate_pawn_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    let board = &position.board;
    let d_row = pawn_direction(side);

    if let Some(one_step) = from.offset(d_row, 0).filter(|to| board.is_empty(*to)) {
        out.push(one_step);

        if from.row == pawn_start_row(side) {
            if let Some(two_step) = one_step.offset(d_row, 0).filter(|to| board.is_empty(*to)) {
                out.push(two_step);
            }
        }
    }

    for to in pawn_attack_targets(side, from) {
        match board.side_at(to) {
            Some(owner) if owner != side => out.push(to),
            Some(_) => {}
            None if is_en_passant_capture(position, from, to, side) => out.push(to),
            None => {}
        }
    }
}

/// Square of the pawn removed by an en-passant capture from `from` onto `to`:
/// the mover's row, the target's column.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square {
        row: from.row,
        col: to.col,
    }
}

/// True when `to` is the en-passant target and an enemy pawn sits beside the mover.
pub fn is_en_passant_capture(position: &Position, from: Square, to: Square, side: Side) -> bool {
    position.en_passant_target == Some(to)
        && from.col != to.col
        && position.board.get(en_passant_victim_square(from, to))
            == Some(Piece::new(side.opposite(), PieceKind::Pawn))
}
