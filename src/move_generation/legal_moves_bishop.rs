//! Bishop pseudo-move generation.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_ray_moves;

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    push_ray_moves(game, from, piece.color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn lone_central_bishop_sweeps_both_diagonals() {
        let game = GameState::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_bishop_moves(&game, (4, 3), &mut out);
        assert_eq!(out.len(), 13);
    }
}
