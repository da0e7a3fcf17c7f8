//! Pseudo-legal king move generation, including castling candidates.

use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    out.extend(king_targets(from).filter(|to| position.board.side_at(*to) != Some(side)));
    generate_castling_moves(position, from, side, out);
}

/// Adds the king's two-square destination for each available castle.
///
/// A castle is offered only when the right is still held, the rook is on
/// its home square, every square between king and rook is empty, and none
/// of the king's current, transit, and landing squares is attacked.
fn generate_castling_moves(position: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    if from != king_home(side) {
        return;
    }

    let enemy = side.opposite();
    let board = &position.board;
    let row = back_row(side);

    // Cannot castle out of check.
    if is_square_attacked(position, from, enemy) {
        return;
    }

    for castle in CastleSide::BOTH {
        if !position.castling_rights.has(side, castle) {
            continue;
        }
        if board.get(rook_home(side, castle)) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }
        if castle_path_cols(castle)
            .iter()
            .any(|&col| !board.is_empty(Square { row, col }))
        {
            continue;
        }

        let transit = Square { row, col: rook_castle_col(castle) };
        let landing = Square { row, col: king_castle_col(castle) };
        if is_square_attacked(position, transit, enemy) || is_square_attacked(position, landing, enemy) {
            continue;
        }

        out.push(landing);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::Side;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn king_moves(fen: &str, from: &str, side: Side) -> Vec<String> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(
            &position,
            algebraic_to_square(from).expect("square should parse"),
            side,
            &mut out,
        );
        let mut names: Vec<String> = out.into_iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn both_castles_offered_on_clear_back_rank() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", Side::White);
        assert!(moves.contains(&"g1".to_owned()));
        assert!(moves.contains(&"c1".to_owned()));

        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8", Side::Black);
        assert!(moves.contains(&"g8".to_owned()));
        assert!(moves.contains(&"c8".to_owned()));
    }

    #[test]
    fn castling_needs_the_right() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "e1", Side::White);
        assert!(!moves.contains(&"g1".to_owned()));
        assert!(moves.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_blocked_by_pieces_between() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", "e1", Side::White);
        assert!(!moves.contains(&"g1".to_owned()));
        assert!(!moves.contains(&"c1".to_owned()));
    }

    #[test]
    fn castling_never_through_or_into_or_out_of_check() {
        // f1 attacked by the rook on f8.
        let through = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1", Side::White);
        assert!(!through.contains(&"g1".to_owned()));
        assert!(through.contains(&"c1".to_owned()));

        // g1 attacked by the rook on g8.
        let into = king_moves("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1", Side::White);
        assert!(!into.contains(&"g1".to_owned()));

        // King on e1 in check from e8 rook.
        let out_of = king_moves("k3r3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1", Side::White);
        assert!(!out_of.contains(&"g1".to_owned()));
        assert!(!out_of.contains(&"c1".to_owned()));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // b1 is attacked by the rook on b8 but the king never crosses it.
        let moves = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", "e1", Side::White);
        assert!(moves.contains(&"c1".to_owned()));
    }
}
