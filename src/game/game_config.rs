//! Rules configuration for a `ChessGame`.
//!
//! Every flag defaults to `false`: with the default config a game ends only
//! by checkmate or stalemate.

use serde::{Deserialize, Serialize};

/// Opt-in draw rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Draw once 100 halfmoves pass without a pawn move or capture.
    pub fifty_move_rule: bool,
    /// Draw on the third occurrence of the same position.
    pub threefold_repetition: bool,
    /// Draw when neither side can possibly deliver mate.
    pub insufficient_material: bool,
}

impl RulesConfig {
    /// All draw rules enabled.
    pub const fn all_draw_rules() -> Self {
        Self {
            fifty_move_rule: true,
            threefold_repetition: true,
            insufficient_material: true,
        }
    }

    #[inline]
    pub const fn any_draw_rule(self) -> bool {
        self.fifty_move_rule || self.threefold_repetition || self.insufficient_material
    }
}
