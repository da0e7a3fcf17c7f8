//! Zobrist hashing for position identity and repetition tracking.
//!
//! Keys are drawn from a fixed-seed `StdRng`, so hashes are deterministic
//! across runs. Only the fields that make two positions "the same" for the
//! repetition rule take part: board, side to move, castling rights, and the
//! en-passant file. Move counters are deliberately left out.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for side in &mut piece_square {
        for kind in side {
            for key in kind {
                *key = rng.random();
            }
        }
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.side.index()][piece.kind.index()][square.index()]
}

/// Compute the full position key from scratch.
pub fn compute_position_key(position: &Position) -> u64 {
    let tables = tables();
    let mut key = position
        .board
        .pieces()
        .fold(0u64, |acc, (square, piece)| acc ^ piece_square_key(piece, square));

    if position.side_to_move == Side::Black {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[position.castling_rights.bits() as usize];

    if let Some(target) = position.en_passant_target {
        key ^= tables.en_passant_file[target.col as usize];
    }

    key
}
