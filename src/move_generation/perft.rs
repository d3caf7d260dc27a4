//! Perft node counting for move-generator validation.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Count leaf nodes of the legal move tree to `depth`.
pub fn perft(game: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(game, game.side_to_move);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = game.clone();
        next.apply_move(&mv);
        nodes += perft(&next, depth - 1);
    }
    nodes
}
