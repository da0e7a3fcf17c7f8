//! Perft node counting for move generator validation.
//!
//! Each legal (from, to) pair is expanded into one node per promotion choice,
//! so counts line up with the published reference tables.

use std::thread;

use crate::errors::ChessResult;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, record: &MoveRecord, after: &Position) {
        self.nodes += 1;

        if record.is_capture() {
            self.captures += 1;
        }
        if record.is_en_passant {
            self.en_passant += 1;
        }
        if record.castle.is_some() {
            self.castles += 1;
        }
        if record.promotion.is_some() {
            self.promotions += 1;
        }

        if is_king_in_check(after, after.side_to_move) {
            self.checks += 1;
            if !has_any_legal_move(after) {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to, promotion) in expanded_moves(position) {
        perft_recurse(position, from, to, promotion, depth, &mut total)?;
    }
    Ok(total)
}

/// Same counts as [`perft`], with one scoped worker per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return perft(position, depth);
    }

    let root_moves = expanded_moves(position);

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|(from, to, promotion)| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(position, from, to, promotion, depth, &mut local).map(|_| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse(
    position: &Position,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let mut child = position.clone();
    let record = apply_move(&mut child, from, to, promotion)?;

    if remaining_depth == 1 {
        counts.record_leaf(&record, &child);
        return Ok(());
    }

    for (from, to, promotion) in expanded_moves(&child) {
        perft_recurse(&child, from, to, promotion, remaining_depth - 1, counts)?;
    }
    Ok(())
}

fn expanded_moves(position: &Position) -> Vec<(Square, Square, Option<PieceKind>)> {
    let mut moves = Vec::new();

    for (from, to) in all_legal_moves(position) {
        let promotes = position
            .piece_at(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.row == promotion_row(piece.side));

        if promotes {
            moves.extend(PieceKind::PROMOTIONS.iter().map(|&kind| (from, to, Some(kind))));
        } else {
            moves.push((from, to, None));
        }
    }

    moves
}
