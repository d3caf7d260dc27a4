//! Pawn pseudo-move generation: pushes, captures, en passant, promotions.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::offset_square;

/// Promotion choices, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
];

pub fn generate_pawn_moves(game: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = game.piece_at(from) else {
        return;
    };
    let color = piece.color;
    let dir = color.pawn_direction();

    // Single push, expanding into promotion variants on the last rank; the
    // double push is only reachable through an empty single-push square.
    if let Some(one) = offset_square(from, dir, 0) {
        if game.piece_at(one).is_none() {
            push_pawn_move(color, from, one, out);
            if from.0 == color.pawn_start_rank() {
                if let Some(two) = offset_square(from, dir * 2, 0) {
                    if game.piece_at(two).is_none() {
                        out.push(ChessMove::new(from, two));
                    }
                }
            }
        }
    }

    // Diagonal captures, including onto the current en-passant target.
    for d_file in [-1, 1] {
        let Some(to) = offset_square(from, dir, d_file) else {
            continue;
        };
        match game.piece_at(to) {
            Some(occupant) if occupant.color != color => push_pawn_move(color, from, to, out),
            Some(_) => {}
            None => {
                if game.en_passant_target == Some(to) {
                    push_pawn_move(color, from, to, out);
                }
            }
        }
    }
}

/// Push one move, or its four promotion variants when it reaches the last rank.
fn push_pawn_move(color: Color, from: Square, to: Square, out: &mut Vec<ChessMove>) {
    if to.0 == color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promoting(from, to, kind));
        }
    } else {
        out.push(ChessMove::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game, (6, 4), &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&ChessMove::new((6, 4), (5, 4))));
        assert!(out.contains(&ChessMove::new((6, 4), (4, 4))));
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let game = GameState::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, (5, 4), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn double_push_needs_the_intermediate_square_free() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, (6, 4), &mut out);
        assert!(out.is_empty(), "blocked single push also blocks the double");
    }

    #[test]
    fn promotion_expands_into_four_variants() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, (1, 0), &mut out);
        assert_eq!(out.len(), 4);
        for kind in PROMOTION_KINDS {
            assert!(out.contains(&ChessMove::promoting((1, 0), (0, 0), kind)));
        }
    }

    #[test]
    fn en_passant_target_is_a_capture_square() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, (3, 4), &mut out);
        assert!(out.contains(&ChessMove::new((3, 4), (2, 3))));
        assert!(out.contains(&ChessMove::new((3, 4), (2, 4))));
    }

    #[test]
    fn capture_promotion_also_expands() {
        let game = GameState::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, (1, 0), &mut out);
        // Four straight promotions plus four capture promotions onto b8.
        assert_eq!(out.len(), 8);
        assert!(out.contains(&ChessMove::promoting((1, 0), (0, 1), PieceKind::Queen)));
    }
}
