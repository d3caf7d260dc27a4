//! Knight pseudo-move generation.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    push_step_moves(game, from, piece.color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn corner_knight_has_two_targets() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, (7, 0), &mut out);
        let mut targets: Vec<_> = out.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![(5, 1), (6, 2)]);
    }

    #[test]
    fn knight_jumps_over_pieces_but_not_onto_friends() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, (7, 1), &mut out);
        let mut targets: Vec<_> = out.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![(5, 0), (5, 2)], "d2 is blocked by a friendly pawn");
    }
}
