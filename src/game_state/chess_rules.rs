//! Canonical chess-rule constants.
//!
//! Every rank or direction that differs between the two sides is exposed as
//! a `const fn` of [`Side`], so move generation and execution share one code
//! path for both colors.

use crate::game_state::chess_types::{CastleSide, Side, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove count at which the fifty-move rule applies.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Row holding `side`'s king and rooks at the start.
#[inline]
pub const fn back_row(side: Side) -> u8 {
    match side {
        Side::White => 7,
        Side::Black => 0,
    }
}

/// Row `side`'s pawns start on.
#[inline]
pub const fn pawn_start_row(side: Side) -> u8 {
    match side {
        Side::White => 6,
        Side::Black => 1,
    }
}

/// Row on which `side`'s pawns promote.
#[inline]
pub const fn promotion_row(side: Side) -> u8 {
    back_row(side.opposite())
}

/// Row delta of a single forward pawn step.
#[inline]
pub const fn pawn_direction(side: Side) -> i8 {
    match side {
        Side::White => -1,
        Side::Black => 1,
    }
}

pub const KING_HOME_COL: u8 = 4;

/// Column the rook starts on for the given castle.
#[inline]
pub const fn rook_home_col(castle: CastleSide) -> u8 {
    match castle {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    }
}

/// Column the king lands on after castling.
#[inline]
pub const fn king_castle_col(castle: CastleSide) -> u8 {
    match castle {
        CastleSide::Kingside => 6,
        CastleSide::Queenside => 2,
    }
}

/// Column the rook lands on after castling (the square the king passes through).
#[inline]
pub const fn rook_castle_col(castle: CastleSide) -> u8 {
    match castle {
        CastleSide::Kingside => 5,
        CastleSide::Queenside => 3,
    }
}

#[inline]
pub const fn king_home(side: Side) -> Square {
    Square {
        row: back_row(side),
        col: KING_HOME_COL,
    }
}

#[inline]
pub const fn rook_home(side: Side, castle: CastleSide) -> Square {
    Square {
        row: back_row(side),
        col: rook_home_col(castle),
    }
}

/// Columns strictly between king and rook, all of which must be empty.
#[inline]
pub const fn castle_path_cols(castle: CastleSide) -> &'static [u8] {
    match castle {
        CastleSide::Kingside => &[5, 6],
        CastleSide::Queenside => &[1, 2, 3],
    }
}

/// Identify which castle a king move is, if any.
pub fn castle_for_king_move(side: Side, from: Square, to: Square) -> Option<CastleSide> {
    if from != king_home(side) || to.row != from.row {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|castle| to.col == king_castle_col(*castle))
}
