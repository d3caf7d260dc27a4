//! FEN string generation from a [`GameState`].

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game: &GameState) -> String {
    let mut out = String::new();

    for rank in 0..8 {
        let mut empty_run = 0u8;
        for file in 0..8 {
            match game.board[rank][file] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out.push(' ');
    if game.castling_rights == 0 {
        out.push('-');
    } else {
        if game.castling_rights & CASTLE_LIGHT_KINGSIDE != 0 {
            out.push('K');
        }
        if game.castling_rights & CASTLE_LIGHT_QUEENSIDE != 0 {
            out.push('Q');
        }
        if game.castling_rights & CASTLE_DARK_KINGSIDE != 0 {
            out.push('k');
        }
        if game.castling_rights & CASTLE_DARK_QUEENSIDE != 0 {
            out.push('q');
        }
    }

    out.push(' ');
    match game.en_passant_target {
        // The target always comes from a double push, so conversion holds.
        Some(square) => match square_to_algebraic(square) {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push('-'),
        },
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        game.halfmove_clock, game.fullmove_number
    ));

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => lower.to_ascii_uppercase(),
        Color::Dark => lower,
    }
}
