//! Shared stepping helpers used by the per-piece pseudo-move generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Offset a square, returning `None` when the result leaves the board.
#[inline]
pub fn offset_square(from: Square, d_rank: i8, d_file: i8) -> Option<Square> {
    let to = (from.0 + d_rank, from.1 + d_file);
    if square_in_bounds(to) {
        Some(to)
    } else {
        None
    }
}

/// Push one move per reachable offset: empty squares and enemy-occupied
/// squares are reachable, own pieces block.
pub fn push_step_moves(
    game: &GameState,
    from: Square,
    mover: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_rank, d_file) in offsets {
        let Some(to) = offset_square(from, d_rank, d_file) else {
            continue;
        };
        match game.piece_at(to) {
            None => out.push(ChessMove::new(from, to)),
            Some(occupant) if occupant.color != mover => out.push(ChessMove::new(from, to)),
            Some(_) => {}
        }
    }
}

/// Walk each ray until blocked, including the blocking square itself when it
/// holds an enemy piece.
pub fn push_ray_moves(
    game: &GameState,
    from: Square,
    mover: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from;
        while let Some(to) = offset_square(cursor, d_rank, d_file) {
            match game.piece_at(to) {
                None => {
                    out.push(ChessMove::new(from, to));
                    cursor = to;
                }
                Some(occupant) => {
                    if occupant.color != mover {
                        out.push(ChessMove::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}
