//! Game state machine.
//!
//! `ChessGame` owns the authoritative `Position`, the append-only move log,
//! and the current `GamePhase`. Every committed move goes through
//! [`ChessGame::apply_move`], which validates it, hands it to the move
//! executor, and re-classifies the position. The engine has no internal
//! locking; a host with several move sources must serialize its calls.

use tracing::{debug, info, trace, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game::draw_rules::detect_draw;
use crate::game::game_config::RulesConfig;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{GamePhase, GameStatus};
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position::Position;
use crate::game_state::position_hash::compute_position_key;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{self, has_any_legal_move};
use crate::relay::relay_move::RelayMove;
use crate::uci::engine_protocol::EngineReply;
use crate::utils::long_algebraic::parse_uci_move;
use crate::utils::render_game_state::render_game_state;
use crate::utils::san_notation::check_suffix;

/// Check, checkmate, or stalemate for the side to move. Draw rules need the
/// game history and are applied by `ChessGame` on top of this.
pub fn classify_position(position: &Position) -> GamePhase {
    let side = position.side_to_move;
    GamePhase::classify(
        side,
        is_king_in_check(position, side),
        has_any_legal_move(position),
    )
}

pub fn status(position: &Position) -> GameStatus {
    classify_position(position).status()
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    config: RulesConfig,
    initial_position: Position,
    position: Position,
    phase: GamePhase,
    move_log: Vec<MoveRecord>,
    position_keys: Vec<u64>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_position(Position::new_game(), config)
    }

    pub fn from_fen(fen: &str, config: RulesConfig) -> ChessResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?, config))
    }

    fn from_position(position: Position, config: RulesConfig) -> Self {
        let mut game = Self {
            config,
            initial_position: position.clone(),
            position,
            phase: GamePhase::InProgress(Side::White),
            move_log: Vec::new(),
            position_keys: Vec::new(),
        };
        game.position_keys.push(compute_position_key(&game.position));
        game.phase = game.evaluate_phase();
        game
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.phase.status()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Committed moves in order. Only [`ChessGame::reset`] ever shortens it.
    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Legal destinations from `square`; empty once the game is over.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        move_generator::legal_moves(&self.position, square)
    }

    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        if self.is_game_over() {
            return Vec::new();
        }
        move_generator::all_legal_moves(&self.position)
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Pieces belonging to `side` that have been captured so far.
    pub fn captured_pieces(&self, side: Side) -> Vec<Piece> {
        self.move_log
            .iter()
            .filter_map(|record| record.captured)
            .filter(|piece| piece.side == side)
            .collect()
    }

    /// Back to the position the game started from, with an empty log.
    pub fn reset(&mut self) {
        *self = Self::from_position(self.initial_position.clone(), self.config);
        debug!("game reset");
    }

    /// Validate and commit one move.
    ///
    /// Either the whole move is committed (board, rights, counters, log,
    /// turn) or nothing changes and the error is returned.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveRecord> {
        self.commit_move(from, to, promotion).inspect_err(|err| {
            warn!(%from, %to, error = %err, "move rejected");
        })
    }

    /// Apply a move given as a UCI string such as `e2e4` or `e7e8q`.
    pub fn apply_uci_move(&mut self, long_algebraic: &str) -> ChessResult<MoveRecord> {
        let (from, to, promotion) = parse_uci_move(long_algebraic).inspect_err(|err| {
            warn!(input = long_algebraic, error = %err, "unparseable engine move");
        })?;
        self.apply_move(from, to, promotion)
    }

    /// Apply an engine's `bestmove`. `NoMove` commits nothing and yields `None`.
    pub fn apply_engine_reply(&mut self, reply: &EngineReply) -> ChessResult<Option<MoveRecord>> {
        match reply {
            EngineReply::BestMove {
                from,
                to,
                promotion,
            } => self.apply_move(*from, *to, *promotion).map(Some),
            EngineReply::NoMove => Ok(None),
            other => {
                warn!(reply = %other, "engine reply carries no move");
                Err(ChessError::MalformedProtocolMove(other.to_string()))
            }
        }
    }

    /// Apply an opponent's move received through the relay.
    pub fn apply_relay_move(&mut self, relay: &RelayMove) -> ChessResult<MoveRecord> {
        if self.is_game_over() {
            return self.reject_game_over();
        }
        let (from, to, promotion) = relay.decode(&self.position).inspect_err(|err| {
            warn!(?relay, error = %err, "relay move rejected");
        })?;
        self.apply_move(from, to, promotion)
    }

    fn commit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveRecord> {
        if self.is_game_over() {
            return self.reject_game_over();
        }
        from.ensure_on_board()?;
        to.ensure_on_board()?;
        if !self.position.is_own_piece(from) {
            return Err(ChessError::NoPieceSelected { square: from });
        }
        if !move_generator::legal_moves(&self.position, from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let mut record = legal_move_apply::apply_move(&mut self.position, from, to, promotion)?;

        self.position_keys.push(compute_position_key(&self.position));
        self.phase = self.evaluate_phase();

        if let Some(suffix) = check_suffix(self.phase) {
            record.notation.push(suffix);
        }

        debug!(
            %from,
            %to,
            notation = %record.notation,
            fen = %self.position.to_fen(),
            "move committed"
        );
        trace!("\n{}", render_game_state(&self.position));
        if self.phase.is_terminal() {
            info!(phase = %self.phase, moves = self.move_log.len() + 1, "game over");
        }

        self.move_log.push(record.clone());
        Ok(record)
    }

    fn reject_game_over<T>(&self) -> ChessResult<T> {
        Err(ChessError::GameOver { phase: self.phase })
    }

    /// Checkmate and stalemate first, then any enabled draw rule.
    fn evaluate_phase(&self) -> GamePhase {
        let phase = classify_position(&self.position);
        if phase.is_terminal() {
            return phase;
        }
        match detect_draw(&self.config, &self.position, &self.position_keys) {
            Some(reason) => GamePhase::Draw(reason),
            None => phase,
        }
    }
}
