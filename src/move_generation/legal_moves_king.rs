//! King pseudo-move generation: single steps plus castling candidates.
//!
//! Castling is emitted here as a pseudo-move whenever the rights, the empty
//! corridor, and the home rook are all present; the attacked-square conditions
//! are enforced later by the legality filter.

use crate::game_state::chess_rules::{KING_START_FILE, ROOK_KINGSIDE_FILE, ROOK_QUEENSIDE_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    push_step_moves(game, from, piece.color, &KING_OFFSETS, out);
    generate_castling_candidates(game, from, piece.color, out);
}

fn generate_castling_candidates(
    game: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let home = color.home_rank();
    if from != (home, KING_START_FILE) {
        return;
    }

    let home_rook = Some(Piece::new(PieceKind::Rook, color));

    if game.castling_rights & kingside_right(color) != 0
        && game.piece_at((home, 5)).is_none()
        && game.piece_at((home, 6)).is_none()
        && game.piece_at((home, ROOK_KINGSIDE_FILE)) == home_rook
    {
        out.push(ChessMove::new(from, (home, 6)));
    }

    if game.castling_rights & queenside_right(color) != 0
        && game.piece_at((home, 1)).is_none()
        && game.piece_at((home, 2)).is_none()
        && game.piece_at((home, 3)).is_none()
        && game.piece_at((home, ROOK_QUEENSIDE_FILE)) == home_rook
    {
        out.push(ChessMove::new(from, (home, 2)));
    }
}
