//! Compact move tuple exchanged with the multiplayer relay.
//!
//! On the wire a move is `[pieceSymbol, fromRow, fromCol, toRow, toCol]`,
//! with a sixth element carrying the promotion letter when the move
//! promotes. Rows and columns use the board's own orientation (row 0 is
//! rank 8). The piece symbol is the FEN letter of the moving piece.

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RelayTuple", try_from = "RelayTuple")]
pub struct RelayMove {
    pub piece_symbol: char,
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    pub promotion: Option<PieceKind>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RelayTuple {
    Promotion(char, u8, u8, u8, u8, char),
    Plain(char, u8, u8, u8, u8),
}

impl From<RelayMove> for RelayTuple {
    fn from(mv: RelayMove) -> Self {
        match mv.promotion {
            Some(kind) => RelayTuple::Promotion(
                mv.piece_symbol,
                mv.from_row,
                mv.from_col,
                mv.to_row,
                mv.to_col,
                kind.letter(),
            ),
            None => RelayTuple::Plain(
                mv.piece_symbol,
                mv.from_row,
                mv.from_col,
                mv.to_row,
                mv.to_col,
            ),
        }
    }
}

impl TryFrom<RelayTuple> for RelayMove {
    type Error = ChessError;

    fn try_from(tuple: RelayTuple) -> ChessResult<Self> {
        let (piece_symbol, from_row, from_col, to_row, to_col, promotion) = match tuple {
            RelayTuple::Promotion(symbol, fr, fc, tr, tc, letter) => {
                let kind = PieceKind::from_letter(letter)
                    .filter(|kind| kind.is_promotion_target())
                    .ok_or_else(|| {
                        ChessError::MalformedProtocolMove(format!("promotion letter '{letter}'"))
                    })?;
                (symbol, fr, fc, tr, tc, Some(kind))
            }
            RelayTuple::Plain(symbol, fr, fc, tr, tc) => (symbol, fr, fc, tr, tc, None),
        };

        Ok(RelayMove {
            piece_symbol,
            from_row,
            from_col,
            to_row,
            to_col,
            promotion,
        })
    }
}

impl RelayMove {
    pub fn from_record(record: &MoveRecord) -> Self {
        RelayMove {
            piece_symbol: record.piece.fen_char(),
            from_row: record.from.row,
            from_col: record.from.col,
            to_row: record.to.row,
            to_col: record.to.col,
            promotion: record.promotion,
        }
    }

    /// Validate against the receiving position and return `(from, to, promotion)`.
    ///
    /// Coordinates must be on the board and the symbol must name the piece
    /// actually standing on the origin square. Legality is left to the game.
    pub fn decode(&self, position: &Position) -> ChessResult<(Square, Square, Option<PieceKind>)> {
        let from = Square::new(self.from_row, self.from_col).ok_or_else(|| {
            ChessError::MalformedProtocolMove(format!(
                "origin ({}, {}) is off the board",
                self.from_row, self.from_col
            ))
        })?;
        let to = Square::new(self.to_row, self.to_col).ok_or_else(|| {
            ChessError::MalformedProtocolMove(format!(
                "destination ({}, {}) is off the board",
                self.to_row, self.to_col
            ))
        })?;

        let symbol_piece = Piece::from_fen_char(self.piece_symbol).ok_or_else(|| {
            ChessError::MalformedProtocolMove(format!("piece symbol '{}'", self.piece_symbol))
        })?;
        if position.piece_at(from) != Some(symbol_piece) {
            return Err(ChessError::MalformedProtocolMove(format!(
                "piece symbol '{}' does not match the piece on {from}",
                self.piece_symbol
            )));
        }

        if let Some(kind) = self.promotion.filter(|kind| !kind.is_promotion_target()) {
            return Err(ChessError::InvalidPromotion(kind));
        }

        Ok((from, to, self.promotion))
    }
}
