//! Move execution.
//!
//! `apply_move` commits a move to the authoritative position and returns its
//! record. Legality is the caller's job; this module only checks the
//! mechanical preconditions, all before the first mutation, so a rejected
//! call leaves the position exactly as it was.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position::Position;
use crate::move_generation::pseudo_moves_pawn::{en_passant_victim_square, is_en_passant_capture};
use crate::utils::san_notation::move_to_san;

pub fn apply_move(
    position: &mut Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveRecord> {
    from.ensure_on_board()?;
    to.ensure_on_board()?;
    let piece = position
        .piece_at(from)
        .filter(|piece| piece.side == position.side_to_move)
        .ok_or(ChessError::NoPieceSelected { square: from })?;
    let side = piece.side;

    if let Some(kind) = promotion.filter(|kind| !kind.is_promotion_target()) {
        return Err(ChessError::InvalidPromotion(kind));
    }

    let is_en_passant =
        piece.kind == PieceKind::Pawn && is_en_passant_capture(position, from, to, side);
    let captured_square = if is_en_passant {
        en_passant_victim_square(from, to)
    } else {
        to
    };

    // Never capture a friendly piece or a king.
    match position.piece_at(captured_square) {
        Some(target) if target.side == side || target.kind == PieceKind::King => {
            return Err(ChessError::IllegalMove { from, to });
        }
        _ => {}
    }

    let castle = if piece.kind == PieceKind::King {
        castle_for_king_move(side, from, to)
    } else {
        None
    };

    let promotion = if piece.kind == PieceKind::Pawn && to.row == promotion_row(side) {
        Some(promotion.unwrap_or(PieceKind::Queen))
    } else {
        None
    };

    let notation = move_to_san(position, from, to, promotion);

    // --- Mutation starts here; nothing below can fail. ---

    let captured = position.board.take(captured_square);
    position.board.set(from, None);
    position
        .board
        .set(to, Some(Piece::new(side, promotion.unwrap_or(piece.kind))));

    if let Some(castle) = castle {
        let row = back_row(side);
        let rook = position.board.take(rook_home(side, castle));
        position.board.set(
            Square {
                row,
                col: rook_castle_col(castle),
            },
            rook,
        );
    }

    if piece.kind == PieceKind::King {
        position.set_king_square(side, to);
    }

    update_castling_rights(position, side, piece.kind, from, to);

    position.en_passant_target = None;
    if piece.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2 {
        position.en_passant_target = Some(Square {
            row: (from.row + to.row) / 2,
            col: from.col,
        });
    }

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }
    if side == Side::Black {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }

    position.side_to_move = side.opposite();

    Ok(MoveRecord {
        from,
        to,
        piece,
        captured,
        castle,
        is_en_passant,
        promotion,
        notation,
    })
}

fn update_castling_rights(
    position: &mut Position,
    side: Side,
    moved_kind: PieceKind,
    from: Square,
    to: Square,
) {
    if moved_kind == PieceKind::King {
        position.castling_rights.clear_side(side);
    }

    // A rook leaving its home square, or anything landing on a rook home
    // square (a capture), ends that castle for good.
    for owner in Side::BOTH {
        for castle in CastleSide::BOTH {
            let home = rook_home(owner, castle);
            if from == home || to == home {
                position.castling_rights.clear(owner, castle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    #[test]
    fn double_step_sets_en_passant_target_and_single_step_clears_it() {
        let mut position = Position::new_game();
        apply_move(&mut position, sq("e2"), sq("e4"), None).expect("e4 should apply");
        assert_eq!(position.en_passant_target, Some(sq("e3")));
        assert_eq!(position.side_to_move, Side::Black);

        apply_move(&mut position, sq("g8"), sq("f6"), None).expect("Nf6 should apply");
        assert_eq!(position.en_passant_target, None);
        assert_eq!(position.fullmove_number, 2);
        assert_eq!(position.halfmove_clock, 1);
    }

    #[test]
    fn en_passant_removes_the_skipped_pawn() {
        let mut position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let record = apply_move(&mut position, sq("e5"), sq("d6"), None).expect("exd6 should apply");

        assert!(record.is_en_passant);
        assert_eq!(record.captured, Some(Piece::new(Side::Black, PieceKind::Pawn)));
        assert!(position.board.is_empty(sq("d5")));
        assert!(position.board.is_empty(sq("e5")));
        assert_eq!(
            position.piece_at(sq("d6")),
            Some(Piece::new(Side::White, PieceKind::Pawn))
        );
        assert_eq!(record.notation, "exd6");
    }

    #[test]
    fn kingside_castle_moves_rook_and_clears_rights() {
        let mut position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let record = apply_move(&mut position, sq("e1"), sq("g1"), None).expect("O-O should apply");

        assert_eq!(record.castle, Some(CastleSide::Kingside));
        assert_eq!(record.notation, "O-O");
        assert_eq!(position.king_square(Side::White), sq("g1"));
        assert_eq!(
            position.piece_at(sq("f1")),
            Some(Piece::new(Side::White, PieceKind::Rook))
        );
        assert!(position.board.is_empty(sq("h1")));
        assert!(!position.castling_rights.white_kingside);
        assert!(!position.castling_rights.white_queenside);
        assert!(position.castling_rights.black_kingside);
        assert!(position.king_cache_is_consistent());
    }

    #[test]
    fn queenside_castle_for_black() {
        let mut position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let record = apply_move(&mut position, sq("e8"), sq("c8"), None).expect("O-O-O should apply");

        assert_eq!(record.castle, Some(CastleSide::Queenside));
        assert_eq!(record.notation, "O-O-O");
        assert_eq!(
            position.piece_at(sq("d8")),
            Some(Piece::new(Side::Black, PieceKind::Rook))
        );
        assert_eq!(position.king_square(Side::Black), sq("c8"));
        assert_eq!(position.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
    }

    #[test]
    fn rook_moves_and_rook_captures_clear_matching_rights() {
        let mut position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        apply_move(&mut position, sq("a1"), sq("a8"), None).expect("Rxa8 should apply");

        assert!(!position.castling_rights.white_queenside);
        assert!(!position.castling_rights.black_queenside);
        assert!(position.castling_rights.white_kingside);
        assert!(position.castling_rights.black_kingside);
    }

    #[test]
    fn promotion_defaults_to_queen_and_honors_choice() {
        let mut position = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut knight = position.clone();

        let record = apply_move(&mut position, sq("a7"), sq("a8"), None).expect("a8=Q should apply");
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(
            position.piece_at(sq("a8")),
            Some(Piece::new(Side::White, PieceKind::Queen))
        );
        assert_eq!(record.notation, "a8=Q");

        let record = apply_move(&mut knight, sq("a7"), sq("a8"), Some(PieceKind::Knight))
            .expect("a8=N should apply");
        assert_eq!(
            knight.piece_at(sq("a8")),
            Some(Piece::new(Side::White, PieceKind::Knight))
        );
        assert_eq!(record.notation, "a8=N");
    }

    #[test]
    fn black_promotion_produces_black_piece() {
        let mut position = Position::from_fen("7k/8/8/8/8/8/p7/7K b - - 0 1").expect("FEN should parse");
        apply_move(&mut position, sq("a2"), sq("a1"), Some(PieceKind::Rook)).expect("a1=R should apply");
        assert_eq!(
            position.piece_at(sq("a1")),
            Some(Piece::new(Side::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn rejected_calls_leave_position_untouched() {
        let position = Position::new_game();

        let mut attempt = position.clone();
        assert_eq!(
            apply_move(&mut attempt, sq("e4"), sq("e5"), None),
            Err(ChessError::NoPieceSelected { square: sq("e4") })
        );
        assert_eq!(
            apply_move(&mut attempt, sq("e7"), sq("e5"), None),
            Err(ChessError::NoPieceSelected { square: sq("e7") })
        );
        assert_eq!(
            apply_move(&mut attempt, sq("a1"), sq("a2"), None),
            Err(ChessError::IllegalMove { from: sq("a1"), to: sq("a2") })
        );
        assert_eq!(
            apply_move(&mut attempt, sq("e2"), sq("e4"), Some(PieceKind::King)),
            Err(ChessError::InvalidPromotion(PieceKind::King))
        );
        assert!(matches!(
            apply_move(&mut attempt, sq("e2"), Square { row: 0, col: 9 }, None),
            Err(ChessError::InvalidSquare(_))
        ));
        assert_eq!(attempt, position);
    }
}
