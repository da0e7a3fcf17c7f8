//! Board and position representation.
//!
//! `Position` is the single value every engine function receives. It owns
//! the 64 board cells, the side to move, castling rights, the en-passant
//! target, move counters, and a cached king square per side. The board does
//! not police the one-king-per-side invariant; the move executor and the
//! FEN parser do.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::{back_row, king_home, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// 8x8 mailbox indexed by `Square::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: [None; 64] }
    }
}

impl Board {
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.index()] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    #[inline]
    pub fn side_at(&self, square: Square) -> Option<Side> {
        self.get(square).map(|piece| piece.side)
    }

    /// Occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((Square::from_index(index)?, (*cell)?)))
    }

    /// Occupied squares belonging to `side`.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.side == side)
            .map(|(square, _)| square)
    }
}

/// Complete rules state of a game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Side,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    /// `[white, black]`; kept in sync by every king move and castle.
    pub king_squares: [Square; 2],
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Position {
    /// Standard starting position, equivalent to `STARTING_POSITION_FEN`.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::default();
        for side in Side::BOTH {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.set(
                    Square { row: back_row(side), col: col as u8 },
                    Some(Piece::new(side, kind)),
                );
                board.set(
                    Square { row: pawn_start_row(side), col: col as u8 },
                    Some(Piece::new(side, PieceKind::Pawn)),
                );
            }
        }

        Self {
            board,
            side_to_move: Side::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            king_squares: [king_home(Side::White), king_home(Side::Black)],
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn king_square(&self, side: Side) -> Square {
        self.king_squares[side.index()]
    }

    #[inline]
    pub fn set_king_square(&mut self, side: Side, square: Square) {
        self.king_squares[side.index()] = square;
    }

    /// True when `square` holds a piece of the side to move.
    #[inline]
    pub fn is_own_piece(&self, square: Square) -> bool {
        self.board.side_at(square) == Some(self.side_to_move)
    }

    /// Check the king-cache invariant: each cached square holds that side's king.
    pub fn king_cache_is_consistent(&self) -> bool {
        Side::BOTH.into_iter().all(|side| {
            self.board.get(self.king_square(side)) == Some(Piece::new(side, PieceKind::King))
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}
