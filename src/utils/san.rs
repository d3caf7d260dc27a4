//! Move rendering in short algebraic style.
//!
//! Renders against the position the move is about to be played in: capture
//! glyphs come from the pre-move board, check and mate suffixes from a
//! simulated post-move board. Disambiguation by origin file or rank is not
//! emitted; move lists stay readable without it for casual play and logs.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check};
use crate::utils::algebraic::{file_letter, square_to_algebraic};

/// Render `mv` as played from `game`. A move from an empty square falls back
/// to a bare coordinate pair.
pub fn move_to_string(game: &GameState, mv: &ChessMove) -> Result<String, String> {
    let Some(piece) = game.piece_at(mv.from) else {
        return Ok(format!(
            "{}{}",
            square_to_algebraic(mv.from)?,
            square_to_algebraic(mv.to)?
        ));
    };

    let is_capture = game.piece_at(mv.to).is_some()
        || (piece.kind == PieceKind::Pawn && game.en_passant_target == Some(mv.to));

    let mut text = if piece.kind == PieceKind::King && mv.is_castling_shape() {
        if mv.to.1 == 6 {
            "0-0".to_string()
        } else {
            "0-0-0".to_string()
        }
    } else if piece.kind == PieceKind::Pawn {
        let mut pawn = String::new();
        if is_capture {
            pawn.push(file_letter(mv.from.1));
            pawn.push('x');
        }
        pawn.push_str(&square_to_algebraic(mv.to)?);
        if let Some(letter) = mv.promotion.and_then(|kind| kind.san_letter()) {
            pawn.push('=');
            pawn.push(letter);
        }
        pawn
    } else {
        let mut body = String::new();
        if let Some(letter) = piece.kind.san_letter() {
            body.push(letter);
        }
        if is_capture {
            body.push('x');
        }
        body.push_str(&square_to_algebraic(mv.to)?);
        body
    };

    let mut probe = game.clone();
    probe.apply_move(mv);
    let opponent = piece.color.opposite();
    if is_checkmate(&probe, opponent) {
        text.push('#');
    } else if is_king_in_check(&probe, opponent) {
        text.push('+');
    }

    Ok(text)
}
