//! Attack oracle: square-attack tests, check and checkmate detection.
//!
//! These tests are color-agnostic piece-threat queries evaluated directly on
//! the grid. A pawn only attacks its two diagonal-forward squares, never the
//! square it pushes to; sliders walk their ray and stop at the first
//! obstruction, attacking exactly that square if it is the target.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Does the piece on `from` threaten `to`, ignoring check considerations?
pub fn attacks_square(game: &GameState, from: Square, to: Square) -> bool {
    let Some(piece) = game.piece_at(from) else {
        return false;
    };
    let d_rank = to.0 - from.0;
    let d_file = to.1 - from.1;

    match piece.kind {
        PieceKind::Pawn => d_rank == piece.color.pawn_direction() && d_file.abs() == 1,
        PieceKind::Knight => {
            let (ar, af) = (d_rank.abs(), d_file.abs());
            (ar == 2 && af == 1) || (ar == 1 && af == 2)
        }
        PieceKind::Bishop => slider_attacks(game, from, to, false, true),
        PieceKind::Rook => slider_attacks(game, from, to, true, false),
        PieceKind::Queen => slider_attacks(game, from, to, true, true),
        PieceKind::King => d_rank.abs() <= 1 && d_file.abs() <= 1 && (from != to),
    }
}

fn slider_attacks(
    game: &GameState,
    from: Square,
    to: Square,
    orthogonal: bool,
    diagonal: bool,
) -> bool {
    let d_rank = to.0 - from.0;
    let d_file = to.1 - from.1;

    let on_diagonal = d_rank != 0 && d_rank.abs() == d_file.abs();
    let on_line = (d_rank == 0) != (d_file == 0);
    if !((diagonal && on_diagonal) || (orthogonal && on_line)) {
        return false;
    }

    let step = (d_rank.signum(), d_file.signum());
    let mut cursor = (from.0 + step.0, from.1 + step.1);
    while cursor != to {
        if game.piece_at(cursor).is_some() {
            return false;
        }
        cursor = (cursor.0 + step.0, cursor.1 + step.1);
    }
    true
}

/// Is `square` attacked by any piece of `by` on this board?
pub fn is_square_attacked(game: &GameState, square: Square, by: Color) -> bool {
    for rank in 0..8 {
        for file in 0..8 {
            let from = (rank, file);
            match game.piece_at(from) {
                Some(piece) if piece.color == by => {
                    if attacks_square(game, from, square) {
                        return true;
                    }
                }
                _ => {}
            }
        }
    }
    false
}

/// Locate the king of `color`, if present.
pub fn king_square(game: &GameState, color: Color) -> Option<Square> {
    for rank in 0..8 {
        for file in 0..8 {
            if game.piece_at((rank, file)) == Some(Piece::new(PieceKind::King, color)) {
                return Some((rank, file));
            }
        }
    }
    None
}

/// True when `color`'s king is attacked. A board without that king reads as
/// not in check.
pub fn is_king_in_check(game: &GameState, color: Color) -> bool {
    let Some(king) = king_square(game, color) else {
        return false;
    };
    is_square_attacked(game, king, color.opposite())
}

/// Checkmate: in check with no legal reply. Stalemate is the caller-derived
/// condition of no legal reply while not in check.
pub fn is_checkmate(game: &GameState, color: Color) -> bool {
    is_king_in_check(game, color) && all_legal_moves(game, color).is_empty()
}
