use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    out.extend(knight_targets(from).filter(|to| position.board.side_at(*to) != Some(side)));
}
