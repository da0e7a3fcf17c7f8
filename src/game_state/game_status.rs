//! Game status flags and the game phase state machine's states.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Side;

/// Why a game ended in a draw by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// State of the game after the most recent committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress(Side),
    Check(Side),
    Checkmate { winner: Side },
    Stalemate,
    Draw(DrawReason),
}

impl GamePhase {
    /// Classify a position from the two facts the state machine computes.
    pub const fn classify(side_to_move: Side, in_check: bool, any_legal_move: bool) -> Self {
        match (in_check, any_legal_move) {
            (true, true) => GamePhase::Check(side_to_move),
            (true, false) => GamePhase::Checkmate {
                winner: side_to_move.opposite(),
            },
            (false, true) => GamePhase::InProgress(side_to_move),
            (false, false) => GamePhase::Stalemate,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GamePhase::Checkmate { .. } | GamePhase::Stalemate | GamePhase::Draw(_)
        )
    }

    pub const fn status(self) -> GameStatus {
        GameStatus {
            check: matches!(self, GamePhase::Check(_) | GamePhase::Checkmate { .. }),
            checkmate: matches!(self, GamePhase::Checkmate { .. }),
            stalemate: matches!(self, GamePhase::Stalemate),
            draw: match self {
                GamePhase::Draw(reason) => Some(reason),
                _ => None,
            },
            game_over: self.is_terminal(),
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::InProgress(side) => write!(f, "{side} to move"),
            GamePhase::Check(side) => write!(f, "{side} to move, in check"),
            GamePhase::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GamePhase::Stalemate => write!(f, "stalemate"),
            GamePhase::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Flat status flags consumed by status text and the AI-turn trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw: Option<DrawReason>,
    pub game_over: bool,
}
