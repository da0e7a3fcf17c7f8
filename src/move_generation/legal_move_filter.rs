//! Legality filtering by simulate-and-restore.
//!
//! Each pseudo-legal candidate is played on a scratch copy of the position
//! by moving only the piece, the captured piece, and the cached king square.
//! The king is tested for attack and then every touched field is restored,
//! whether or not the candidate survives.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::pseudo_moves_pawn::{en_passant_victim_square, is_en_passant_capture};

/// Play `from -> to` on the board only. Returns `None` if `from` is empty.
pub fn simulate_move(position: &mut Position, from: Square, to: Square) -> Option<UndoState> {
    let moved_piece = position.board.get(from)?;
    let side = moved_piece.side;

    let captured_square = if moved_piece.kind == PieceKind::Pawn
        && is_en_passant_capture(position, from, to, side)
    {
        en_passant_victim_square(from, to)
    } else {
        to
    };

    let captured = position
        .board
        .take(captured_square)
        .map(|piece| (captured_square, piece));
    position.board.set(from, None);
    position.board.set(to, Some(moved_piece));

    let prev_king_square = position.king_square(side);
    if moved_piece.kind == PieceKind::King {
        position.set_king_square(side, to);
    }

    Some(UndoState {
        from,
        to,
        moved_piece,
        captured,
        prev_king_square,
    })
}

/// Undo a [`simulate_move`], restoring every field it touched.
pub fn restore_move(position: &mut Position, undo: UndoState) {
    position.board.set(undo.to, None);
    position.board.set(undo.from, Some(undo.moved_piece));
    if let Some((square, piece)) = undo.captured {
        position.board.set(square, Some(piece));
    }
    position.set_king_square(undo.moved_piece.side, undo.prev_king_square);
}

/// Whether the mover's king is safe after `from -> to`. `scratch` is left as it was found.
pub fn leaves_king_safe(scratch: &mut Position, from: Square, to: Square) -> bool {
    let Some(undo) = simulate_move(scratch, from, to) else {
        return false;
    };

    let side = undo.moved_piece.side;
    let safe = !is_square_attacked(scratch, scratch.king_square(side), side.opposite());

    restore_move(scratch, undo);
    safe
}

/// Keep the candidates from `from` that do not leave the mover's king attacked.
pub fn filter_legal(position: &Position, from: Square, candidates: Vec<Square>) -> Vec<Square> {
    if candidates.is_empty() {
        return candidates;
    }

    let mut scratch = position.clone();
    candidates
        .into_iter()
        .filter(|to| leaves_king_safe(&mut scratch, from, *to))
        .collect()
}
