//! Static position evaluation.
//!
//! Material plus piece-square tables, a small pawn-advancement bonus, and a
//! tempo bonus for the side to move. The grid sum is always computed from
//! Light's perspective and re-signed for the mover at the scorer boundary, so
//! search can rely on the negamax symmetry.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Mate score magnitude returned by search at mated leaves.
pub const MATE_SCORE: i32 = 1_000_000;
/// Window bound strictly larger than any reachable score.
pub const INFINITY_SCORE: i32 = 2_000_000;

/// Scores a position from the perspective of the side to move.
pub trait BoardScorer: Send + Sync {
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material value in centipawns. The king carries no material value; mate
/// handling lives in search.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[rustfmt::skip]
const PST_PAWN: [i32; 64] = [
     0,  5,  5, -10, -10,  5,  5,  0,
     0, 10, -5,   0,   0, -5, 10,  0,
     0, 10, 10,  10,  10, 10, 10,  0,
     5, 15, 20,  25,  25, 20, 15,  5,
    10, 20, 30,  35,  35, 30, 20, 10,
    15, 25, 35,  40,  40, 35, 25, 15,
    60, 60, 60,  60,  60, 60, 60, 60,
     0,  0,  0,   0,   0,  0,  0,  0,
];

#[rustfmt::skip]
const PST_KNIGHT: [i32; 64] = [
    -50,-30,-20,-20,-20,-20,-30,-50,
    -30,-10,  0,  0,  0,  0,-10,-30,
    -20,  0, 10, 15, 15, 10,  0,-20,
    -20,  5, 15, 20, 20, 15,  5,-20,
    -20,  0, 15, 20, 20, 15,  0,-20,
    -20,  5, 10, 15, 15, 10,  5,-20,
    -30,-10,  0,  5,  5,  0,-10,-30,
    -50,-30,-20,-20,-20,-20,-30,-50,
];

#[rustfmt::skip]
const PST_BISHOP: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5, 10, 10, 10, 10,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const PST_ROOK: [i32; 64] = [
     0,  0,  5, 10, 10,  5,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  5,  5,  0,  0, -5,
    -5,  0,  0,  5,  5,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PST_QUEEN: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  5,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const PST_KING: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

/// Table lookup keyed by kind, square, and color-relative perspective: Dark
/// reads the table rank-mirrored.
#[inline]
pub fn pst_value(piece: Piece, square: Square) -> i32 {
    let index = match piece.color {
        Color::Light => (square.0 * 8 + square.1) as usize,
        Color::Dark => ((7 - square.0) * 8 + square.1) as usize,
    };
    match piece.kind {
        PieceKind::Pawn => PST_PAWN[index],
        PieceKind::Knight => PST_KNIGHT[index],
        PieceKind::Bishop => PST_BISHOP[index],
        PieceKind::Rook => PST_ROOK[index],
        PieceKind::Queen => PST_QUEEN[index],
        PieceKind::King => PST_KING[index],
    }
}

/// Light-perspective evaluation of the whole grid.
pub fn evaluate_light_perspective(game: &GameState) -> i32 {
    let mut score = 0i32;

    for rank in 0..8 {
        for file in 0..8 {
            let square = (rank, file);
            let Some(piece) = game.piece_at(square) else {
                continue;
            };
            let mut value = piece_value(piece.kind) + pst_value(piece, square);

            // Nudge pawns toward promotion.
            if piece.kind == PieceKind::Pawn {
                value += match piece.color {
                    Color::Light => (6 - rank) as i32 * 2,
                    Color::Dark => rank as i32 * 2,
                };
            }

            score += match piece.color {
                Color::Light => value,
                Color::Dark => -value,
            };
        }
    }

    // Tempo bonus for the side to move.
    score += match game.side_to_move {
        Color::Light => 10,
        Color::Dark => -10,
    };

    score
}

/// Material + piece-square scorer used by every difficulty tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PstScorer;

impl BoardScorer for PstScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let light_perspective = evaluate_light_perspective(game_state);
        match game_state.side_to_move {
            Color::Light => light_perspective,
            Color::Dark => -light_perspective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn piece_values_are_centipawn_standard() {
        assert_eq!(piece_value(PieceKind::Pawn), 100);
        assert_eq!(piece_value(PieceKind::Queen), 900);
        assert_eq!(piece_value(PieceKind::King), 0);
    }

    #[test]
    fn pst_lookup_mirrors_ranks_for_dark() {
        let light_knight = Piece::new(PieceKind::Knight, Color::Light);
        let dark_knight = Piece::new(PieceKind::Knight, Color::Dark);
        assert_eq!(pst_value(light_knight, (3, 3)), pst_value(dark_knight, (4, 3)));
    }

    #[test]
    fn winning_material_shows_in_the_evaluation() {
        let balanced = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let up_a_queen = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")
            .expect("fen should parse");
        assert!(
            evaluate_light_perspective(&up_a_queen)
                > evaluate_light_perspective(&balanced) + 800
        );
    }

    #[test]
    fn scorer_re_signs_for_the_side_to_move() {
        let light_to_move = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1")
            .expect("fen should parse");
        let dark_to_move = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1")
            .expect("fen should parse");
        let scorer = PstScorer;
        assert!(scorer.score(&light_to_move) > 0, "mover owns the extra queen");
        assert!(scorer.score(&dark_to_move) < 0, "mover faces the extra queen");
    }
}
