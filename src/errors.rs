//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type across the crate. Every variant is
//! local and synchronous: it is returned to the immediate caller and the
//! engine never retries on its own. Running out of legal moves is not an
//! error; it is reported through the game status.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_status::GamePhase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The destination is not among the legal moves of the origin piece.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The origin square is empty or holds a piece of the side not to move.
    #[error("no piece of the side to move on {square}")]
    NoPieceSelected { square: Square },

    /// A mutating call was made after the game reached a terminal phase.
    #[error("game is over: {phase}")]
    GameOver { phase: GamePhase },

    /// A move supplied by an engine or a relay peer could not be decoded.
    #[error("malformed protocol move: {0}")]
    MalformedProtocolMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid promotion piece: {0:?}")]
    InvalidPromotion(PieceKind),
}

pub type ChessResult<T> = Result<T, ChessError>;
