//! Crate root module declarations for the rankfile chess rules engine.
//!
//! This file exposes the rules subsystems (position model, move generation,
//! move execution, the game state machine, protocol helpers, and utility
//! helpers) so hosts, tests, and benches can import stable module paths.
//! The most common entry points are re-exported at the root.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_status;
    pub mod move_record;
    pub mod position;
    pub mod position_hash;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_trace;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
}

pub mod game {
    pub mod chess_game;
    pub mod draw_rules;
    pub mod game_config;
}

pub mod uci {
    pub mod engine_protocol;
}

pub mod relay {
    pub mod relay_move;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod san_notation;
}

pub mod errors;

pub use errors::{ChessError, ChessResult};
pub use game::chess_game::{classify_position, status, ChessGame};
pub use game::game_config::RulesConfig;
pub use game_state::chess_types::{CastleSide, CastlingRights, Piece, PieceKind, Side, Square};
pub use game_state::game_status::{DrawReason, GamePhase, GameStatus};
pub use game_state::move_record::MoveRecord;
pub use game_state::position::{Board, Position};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
pub use move_generation::move_generator::{all_legal_moves, legal_moves, pseudo_legal_moves};
pub use relay::relay_move::RelayMove;
pub use uci::engine_protocol::{EngineCommand, EngineReply};
pub use utils::long_algebraic::{format_uci_move, parse_uci_move};
