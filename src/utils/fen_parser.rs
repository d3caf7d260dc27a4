//! FEN string parsing into a [`GameState`].
//!
//! Accepts the standard six-field form; the two clock fields may be omitted
//! for hand-written test positions.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 || fields.len() > 6 {
        return Err(format!(
            "FEN must have 4 to 6 fields, got {}: {fen}",
            fields.len()
        ));
    }

    let mut game = GameState::new_empty();

    parse_board_field(fields[0], &mut game)?;
    game.side_to_move = parse_side_field(fields[1])?;
    game.castling_rights = parse_castling_field(fields[2])?;
    game.en_passant_target = parse_en_passant_field(fields[3])?;

    game.halfmove_clock = match fields.get(4) {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {text}"))?,
        None => 0,
    };
    game.fullmove_number = match fields.get(5) {
        Some(text) => text
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {text}"))?,
        None => 1,
    };

    Ok(game)
}

fn parse_board_field(field: &str, game: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("FEN board must have 8 ranks, got {}", ranks.len()));
    }

    // FEN lists ranks top-down, which matches internal rank order directly.
    for (rank, rank_text) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for symbol in rank_text.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                file += skip as usize;
                continue;
            }
            if file >= 8 {
                return Err(format!("FEN rank overflows 8 files: {rank_text}"));
            }
            let piece = piece_from_fen_char(symbol)
                .ok_or_else(|| format!("Invalid FEN piece character: {symbol}"))?;
            game.board[rank][file] = Some(piece);
            file += 1;
        }
        if file != 8 {
            return Err(format!("FEN rank does not cover 8 files: {rank_text}"));
        }
    }

    Ok(())
}

fn parse_side_field(field: &str) -> Result<Color, String> {
    match field {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        other => Err(format!("Invalid side-to-move field: {other}")),
    }
}

fn parse_castling_field(field: &str) -> Result<CastlingRights, String> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights: CastlingRights = 0;
    for symbol in field.chars() {
        rights |= match symbol {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            other => return Err(format!("Invalid castling character: {other}")),
        };
    }
    Ok(rights)
}

fn parse_en_passant_field(field: &str) -> Result<Option<Square>, String> {
    if field == "-" {
        return Ok(None);
    }
    algebraic_to_square(field).map(Some)
}

pub fn piece_from_fen_char(symbol: char) -> Option<Piece> {
    let color = if symbol.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match symbol.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}
