//! Committed-move records.
//!
//! One `MoveRecord` is produced per committed move and appended to the game's
//! move log. History renderers and captured-piece displays read the log; the
//! only thing that ever removes records is a full game reset.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::format_uci_move;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub is_en_passant: bool,
    pub promotion: Option<PieceKind>,
    /// Standard algebraic notation, including any check or mate suffix.
    pub notation: String,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The move as a UCI string, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> String {
        format_uci_move(self.from, self.to, self.promotion)
    }
}
