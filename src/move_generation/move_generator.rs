//! Move generation entry points.
//!
//! `pseudo_legal_moves` dispatches to the per-piece generators;
//! `legal_moves` runs those results through the legality filter. Both
//! return an empty list, never an error, when the square is off the board,
//! empty, or holds a piece of the side not to move.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_filter::filter_legal;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Destinations consistent with the piece's movement pattern, ignoring king safety.
pub fn pseudo_legal_moves(position: &Position, square: Square) -> Vec<Square> {
    if !square.is_on_board() {
        return Vec::new();
    }
    let Some(piece) = position.piece_at(square) else {
        return Vec::new();
    };
    if piece.side != position.side_to_move {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, square, piece.side, &mut out),
        PieceKind::Knight => generate_knight_moves(position, square, piece.side, &mut out),
        PieceKind::Bishop => generate_bishop_moves(position, square, piece.side, &mut out),
        PieceKind::Rook => generate_rook_moves(position, square, piece.side, &mut out),
        PieceKind::Queen => generate_queen_moves(position, square, piece.side, &mut out),
        PieceKind::King => generate_king_moves(position, square, piece.side, &mut out),
    }
    out
}

/// Destinations that also leave the mover's king unattacked.
pub fn legal_moves(position: &Position, square: Square) -> Vec<Square> {
    filter_legal(position, square, pseudo_legal_moves(position, square))
}

/// Whether the side to move has at least one legal move anywhere.
pub fn has_any_legal_move(position: &Position) -> bool {
    position
        .board
        .squares_of(position.side_to_move)
        .any(|square| !legal_moves(position, square).is_empty())
}

/// Every legal `(from, to)` pair for the side to move, in board order.
pub fn all_legal_moves(position: &Position) -> Vec<(Square, Square)> {
    position
        .board
        .squares_of(position.side_to_move)
        .flat_map(|from| {
            legal_moves(position, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    #[test]
    fn starting_position_mobility_per_piece() {
        let position = Position::new_game();
        for (square, piece) in position.board.pieces() {
            let moves = legal_moves(&position, square);
            let expected = match (piece.side, piece.kind) {
                (Side::White, PieceKind::Pawn) | (Side::White, PieceKind::Knight) => 2,
                _ => 0,
            };
            assert_eq!(moves.len(), expected, "unexpected mobility for {piece:?} on {square}");
        }
        assert_eq!(all_legal_moves(&position).len(), 20);
    }

    #[test]
    fn black_pieces_have_moves_when_black_is_to_move() {
        let position = Position::from_fen(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(legal_moves(&position, sq("b8")).len(), 2);
        assert_eq!(legal_moves(&position, sq("e7")).len(), 2);
        assert!(legal_moves(&position, sq("e4")).is_empty());
        assert_eq!(all_legal_moves(&position).len(), 20);
    }

    #[test]
    fn empty_square_and_enemy_piece_yield_nothing() {
        let position = Position::new_game();
        assert!(pseudo_legal_moves(&position, sq("e4")).is_empty());
        assert!(pseudo_legal_moves(&position, sq("e7")).is_empty());
        assert!(legal_moves(&position, sq("e7")).is_empty());
        assert!(legal_moves(&position, Square { row: 8, col: 3 }).is_empty());
        assert!(legal_moves(&position, Square { row: 0, col: 12 }).is_empty());
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        // Rook on e8 checks the king; only king steps off the file or a block help.
        let position =
            Position::from_fen("k3r3/8/8/8/8/8/3B4/4K3 w - - 0 1").expect("FEN should parse");
        let king: Vec<String> = legal_moves(&position, sq("e1")).iter().map(|s| s.to_string()).collect();
        assert!(!king.contains(&"e2".to_owned()));
        assert!(king.contains(&"d1".to_owned()));
        assert!(king.contains(&"f2".to_owned()));
        assert_eq!(legal_moves(&position, sq("d2")), vec![sq("e3")]);
    }

    #[test]
    fn kings_never_step_next_to_each_other() {
        let position = Position::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1").expect("FEN should parse");
        let moves = legal_moves(&position, sq("d3"));
        for forbidden in ["c4", "d4", "e4"] {
            assert!(!moves.contains(&sq(forbidden)), "{forbidden} is adjacent to the black king");
        }
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn no_legal_moves_is_not_an_error() {
        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!has_any_legal_move(&position));
        assert!(all_legal_moves(&position).is_empty());
    }
}
