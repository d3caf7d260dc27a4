//! Queen pseudo-move generation: both ray families combined.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::move_generation::legal_moves_bishop::DIAGONAL_DIRECTIONS;
use crate::move_generation::legal_moves_rook::ORTHOGONAL_DIRECTIONS;

pub fn generate_queen_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    push_ray_moves(game, from, piece.color, &DIAGONAL_DIRECTIONS, out);
    push_ray_moves(game, from, piece.color, &ORTHOGONAL_DIRECTIONS, out);
}
