//! Legality pipeline: pseudo-move generation, simulate-and-reject filtering.
//!
//! Legality is established by applying each pseudo-move to a disposable copy
//! of the position and rejecting it if the mover's own king is attacked
//! afterwards. This is deliberately not incremental pin detection: the
//! simulate-then-check approach is correct by construction for pins,
//! discovered checks, and the en-passant capture that would expose the king
//! along the vacated rank.
//!
//! Castling carries one extra condition: the king's start square and the
//! square it passes through are tested on the *pre-move* board, while the
//! destination is covered by the post-move king check (the king stands on it
//! by then). The asymmetry is intentional; the vacated squares cannot be
//! re-tested meaningfully after the king has left them.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// All moves physically reachable by the piece on `square`, ignoring
/// self-check. Empty squares yield an empty result.
pub fn pseudo_moves_for(game: &GameState, square: Square) -> Vec<ChessMove> {
    let mut out = Vec::new();
    let Some(piece) = game.piece_at(square) else {
        return out;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game, square, &mut out),
        PieceKind::Knight => generate_knight_moves(game, square, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game, square, &mut out),
        PieceKind::Rook => generate_rook_moves(game, square, &mut out),
        PieceKind::Queen => generate_queen_moves(game, square, &mut out),
        PieceKind::King => generate_king_moves(game, square, &mut out),
    }
    out
}

/// Legal moves for the piece on `square`. Empty squares and pieces that do
/// not belong to the side to move yield an empty result, never an error.
pub fn legal_moves_for(game: &GameState, square: Square) -> Vec<ChessMove> {
    let Some(piece) = game.piece_at(square) else {
        return Vec::new();
    };
    if piece.color != game.side_to_move {
        return Vec::new();
    }

    pseudo_moves_for(game, square)
        .into_iter()
        .filter(|mv| move_is_legal(game, piece, mv))
        .collect()
}

/// Every legal move for every piece of `color`.
pub fn all_legal_moves(game: &GameState, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::new();
    for rank in 0..8 {
        for file in 0..8 {
            let square = (rank, file);
            let Some(piece) = game.piece_at(square) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for mv in pseudo_moves_for(game, square) {
                if move_is_legal(game, piece, &mv) {
                    out.push(mv);
                }
            }
        }
    }
    out
}

fn move_is_legal(game: &GameState, piece: Piece, mv: &ChessMove) -> bool {
    let mut probe = game.clone();
    probe.apply_move(mv);
    if is_king_in_check(&probe, piece.color) {
        return false;
    }

    if piece.kind == PieceKind::King && mv.is_castling_shape() {
        let opponent = piece.color.opposite();
        let passed = (mv.from.0, (mv.from.1 + mv.to.1) / 2);
        // Pre-move board for the squares the king leaves and crosses.
        if is_square_attacked(game, mv.from, opponent) {
            return false;
        }
        if is_square_attacked(game, passed, opponent) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_king_in_check;

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game, Color::Light).len(), 20);
    }

    #[test]
    fn empty_square_and_wrong_turn_queries_yield_nothing() {
        let game = GameState::new_game();
        assert!(legal_moves_for(&game, (4, 4)).is_empty());
        assert!(legal_moves_for(&game, (1, 4)).is_empty(), "dark pawn on light's turn");
        assert!(!legal_moves_for(&game, (6, 4)).is_empty());
    }

    #[test]
    fn no_legal_move_ever_leaves_the_mover_in_check() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("fen should parse");
        for mv in all_legal_moves(&game, Color::Light) {
            let mut probe = game.clone();
            probe.apply_move(&mv);
            assert!(
                !is_king_in_check(&probe, Color::Light),
                "move {mv:?} leaves own king attacked"
            );
        }
    }

    #[test]
    fn pinned_piece_may_not_expose_the_king() {
        // Bishop d2 is pinned against the king on e1 by the queen on a5.
        let game = GameState::from_fen("4k3/8/8/q7/8/8/3B4/4K3 w - - 0 1")
            .expect("fen should parse");
        let moves = legal_moves_for(&game, (6, 3));
        // The bishop may only slide along the pin line toward the queen.
        for mv in &moves {
            assert!(
                mv.to == (5, 2) || mv.to == (4, 1) || mv.to == (3, 0),
                "off-pin move {mv:?} should be illegal"
            );
        }
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn en_passant_capture_exposing_the_king_is_rejected() {
        // After ...d5, exd6 e.p. would clear both pawns off the fifth rank
        // and leave the h5 queen staring at the king on a5.
        let game = GameState::from_fen("4k3/8/8/K2pP2q/8/8/8/8 w - d6 0 2")
            .expect("fen should parse");
        let moves = legal_moves_for(&game, (3, 4));
        assert!(
            !moves.contains(&ChessMove::new((3, 4), (2, 3))),
            "en passant here exposes the king along the rank"
        );
        assert!(moves.contains(&ChessMove::new((3, 4), (2, 4))), "plain push stays legal");
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected() {
        // Rook f3 covers f1, so kingside castling crosses an attacked square;
        // queenside stays available.
        let game = GameState::from_fen("4k3/8/8/8/8/5r2/8/R3K2R w KQ - 0 1")
            .expect("fen should parse");
        let moves = legal_moves_for(&game, (7, 4));
        assert!(!moves.contains(&ChessMove::new((7, 4), (7, 6))));
        assert!(moves.contains(&ChessMove::new((7, 4), (7, 2))));
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let game = GameState::from_fen("4k3/8/8/8/8/4r3/8/R3K2R w KQ - 0 1")
            .expect("fen should parse");
        let moves = legal_moves_for(&game, (7, 4));
        assert!(!moves.contains(&ChessMove::new((7, 4), (7, 6))));
        assert!(!moves.contains(&ChessMove::new((7, 4), (7, 2))));
    }

    #[test]
    fn castling_into_an_attacked_destination_is_rejected() {
        // Rook g3 covers g1; the destination check comes from the post-move
        // king test rather than the pre-move corridor test.
        let game = GameState::from_fen("4k3/8/8/8/8/6r1/8/R3K2R w KQ - 0 1")
            .expect("fen should parse");
        let moves = legal_moves_for(&game, (7, 4));
        assert!(!moves.contains(&ChessMove::new((7, 4), (7, 6))));
        assert!(moves.contains(&ChessMove::new((7, 4), (7, 2))));
    }
}
