//! Fixed-depth negamax with alpha-beta pruning and a capture-only quiescence
//! tail.
//!
//! The search works on a scratch copy of the position: every node snapshots,
//! applies one move, recurses, and restores. Scores follow the negamax
//! convention, always from the perspective of the side to move at the node.
//! Terminal detection runs before the depth cutoff so a mate delivered exactly
//! at the horizon is still seen as mate rather than evaluated statically.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{piece_value, BoardScorer, INFINITY_SCORE, MATE_SCORE};

/// Score every root move of `moves` to `depth` plies. Returns one entry per
/// input move, in input order. When `stop` flips mid-search the remaining
/// moves still get entries, scored by whatever window the truncated subtree
/// produced; callers treat a stop as "discard the result" anyway.
pub fn root_scores(
    work: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    scorer: &dyn BoardScorer,
    stop: Option<&Arc<AtomicBool>>,
) -> Vec<(ChessMove, i32)> {
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let snapshot = work.snapshot();
        work.apply_move(mv);
        let score = -negamax(work, depth.saturating_sub(1), -INFINITY_SCORE, INFINITY_SCORE, scorer, stop);
        work.restore(&snapshot);
        scored.push((*mv, score));
        if should_stop(stop) {
            break;
        }
    }
    scored
}

fn should_stop(stop: Option<&Arc<AtomicBool>>) -> bool {
    stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

fn negamax(
    work: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    scorer: &dyn BoardScorer,
    stop: Option<&Arc<AtomicBool>>,
) -> i32 {
    let mover = work.side_to_move;
    let mut moves = all_legal_moves(work, mover);

    // Terminal before horizon: mate and stalemate outrank the depth cutoff.
    if moves.is_empty() {
        return if is_king_in_check(work, mover) { -MATE_SCORE } else { 0 };
    }

    if depth == 0 {
        return quiescence(work, alpha, beta, scorer, stop);
    }

    order_moves(work, &mut moves);

    let mut best = -INFINITY_SCORE;
    for mv in &moves {
        let snapshot = work.snapshot();
        work.apply_move(mv);
        let score = -negamax(work, depth - 1, -beta, -alpha, scorer, stop);
        work.restore(&snapshot);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta || should_stop(stop) {
            break;
        }
    }
    best
}

/// Capture-and-promotion extension past the horizon. Stand-pat establishes a
/// floor so quiet positions are not forced to trade.
fn quiescence(
    work: &mut GameState,
    mut alpha: i32,
    beta: i32,
    scorer: &dyn BoardScorer,
    stop: Option<&Arc<AtomicBool>>,
) -> i32 {
    let stand_pat = scorer.score(work);
    if stand_pat >= beta {
        return stand_pat;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut moves: Vec<ChessMove> = all_legal_moves(work, work.side_to_move)
        .into_iter()
        .filter(|mv| is_capture_or_promotion(work, mv))
        .collect();
    order_moves(work, &mut moves);

    let mut best = stand_pat;
    for mv in &moves {
        let snapshot = work.snapshot();
        work.apply_move(mv);
        let score = -quiescence(work, -beta, -alpha, scorer, stop);
        work.restore(&snapshot);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta || should_stop(stop) {
            break;
        }
    }
    best
}

/// Captures include the en-passant taking move, whose destination square is
/// empty on the pre-move board.
pub fn is_capture_or_promotion(game: &GameState, mv: &ChessMove) -> bool {
    if mv.promotion.is_some() {
        return true;
    }
    if game.piece_at(mv.to).is_some() {
        return true;
    }
    matches!(game.piece_at(mv.from), Some(piece) if piece.kind == PieceKind::Pawn)
        && game.en_passant_target == Some(mv.to)
}

/// Most-valuable-victim / least-valuable-attacker ordering with promotion and
/// centralization sweeteners. The sort is stable so equally scored moves keep
/// their generation order and the search stays deterministic.
pub fn order_moves(game: &GameState, moves: &mut [ChessMove]) {
    let mut keyed: Vec<(i32, ChessMove)> = moves
        .iter()
        .map(|mv| (move_order_key(game, mv), *mv))
        .collect();
    keyed.sort_by_key(|(key, _)| -*key);
    for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}

fn move_order_key(game: &GameState, mv: &ChessMove) -> i32 {
    let mut key = 0i32;

    if let Some(victim) = game.piece_at(mv.to) {
        let attacker = game
            .piece_at(mv.from)
            .map(|piece| piece_value(piece.kind))
            .unwrap_or(0);
        key += piece_value(victim.kind) * 10 - attacker;
    }

    if let Some(kind) = mv.promotion {
        key += piece_value(kind);
    }

    // Favor central destinations as a cheap quiet-move tiebreak.
    let centralization = (4 - (3 - mv.to.0).abs()) + (4 - (3 - mv.to.1).abs());
    key += centralization as i32 * 2;

    key
}
