//! FEN-to-Position parser.
//!
//! Builds a fully-populated `Position` from a Forsyth-Edwards Notation
//! string, including castling rights, the en-passant target, move clocks,
//! and the cached king squares.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::{Board, Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let king_squares = locate_kings(&board)?;
    let side_to_move = parse_side_to_move(side_part)?;

    let position = Position {
        board,
        side_to_move,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_target: parse_en_passant_target(en_passant_part, &board, side_to_move)?,
        king_squares,
        halfmove_clock: halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?,
        fullmove_number: fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?,
    };

    Ok(position)
}

fn invalid(detail: &str) -> ChessError {
    ChessError::InvalidFen(detail.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::default();

    // The first FEN rank is rank 8, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", 8 - row)))?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(board)
}

fn locate_kings(board: &Board) -> ChessResult<[Square; 2]> {
    let mut kings: [Option<Square>; 2] = [None, None];

    for (square, piece) in board.pieces() {
        if piece.kind != PieceKind::King {
            continue;
        }
        let slot = &mut kings[piece.side.index()];
        if slot.is_some() {
            return Err(invalid(&format!("more than one {} king", piece.side)));
        }
        *slot = Some(square);
    }

    match kings {
        [Some(white), Some(black)] => Ok([white, black]),
        [None, _] => Err(invalid("missing white king")),
        [_, None] => Err(invalid("missing black king")),
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Side> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped, with that pawn standing one rank beyond it.
fn parse_en_passant_target(
    en_passant_part: &str,
    board: &Board,
    side_to_move: Side,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))?;

    let (target_row, pawn_row) = match side_to_move {
        Side::White => (2, 3),
        Side::Black => (5, 4),
    };
    let mover = Piece::new(side_to_move.opposite(), PieceKind::Pawn);
    let pawn_square = Square {
        row: pawn_row,
        col: square.col,
    };

    if square.row != target_row
        || !board.is_empty(square)
        || board.get(pawn_square) != Some(mover)
    {
        return Err(invalid(&format!("en-passant square '{en_passant_part}'")));
    }

    Ok(Some(square))
}
