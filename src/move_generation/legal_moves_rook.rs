//! Rook pseudo-move generation.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_ray_moves;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    push_ray_moves(game, from, piece.color, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::ChessMove;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_captures_the_first_enemy_on_its_ray() {
        let game = GameState::from_fen("4k3/4r3/8/8/4R3/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, (4, 4), &mut out);
        assert!(out.contains(&ChessMove::new((4, 4), (1, 4))), "capture on e7");
        assert!(
            !out.contains(&ChessMove::new((4, 4), (0, 4))),
            "the ray must stop on the captured rook"
        );
        // 3 north (incl. capture), 2 south (own king blocks e1), 7 sideways.
        assert_eq!(out.len(), 12);
    }
}
