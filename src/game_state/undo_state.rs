use crate::game_state::chess_types::*;

/// Everything a simulated move touched, so it can be put back exactly.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `to` for en passant).
    pub captured: Option<(Square, Piece)>,
    pub prev_king_square: Square,
}
