//! Conversions between internal `(rank, file)` squares and algebraic text.
//!
//! Internal rank 0 is Dark's back rank, so algebraic rank `8` maps to internal
//! rank 0 and algebraic rank `1` to internal rank 7. These helpers are reused
//! by the FEN, SAN, and PGN components.

use crate::game_state::chess_types::{square_in_bounds, Square};

/// Convert algebraic coordinates (for example "e4") to an internal square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = (file - b'a') as i8;
    let rank_index = 8 - (rank - b'0') as i8;
    Ok((rank_index, file_index))
}

/// Convert an internal square to algebraic coordinates (for example "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !square_in_bounds(square) {
        return Err(format!(
            "Square out of bounds: rank {} file {}",
            square.0, square.1
        ));
    }

    let file_char = char::from(b'a' + square.1 as u8);
    let rank_char = char::from(b'0' + (8 - square.0) as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// File letter alone, used by SAN pawn-capture prefixes.
#[inline]
pub fn file_letter(file: i8) -> char {
    char::from(b'a' + file as u8)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, file_letter, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), (7, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), (0, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), (4, 4));
        assert_eq!(square_to_algebraic((7, 0)).expect("a1 should convert"), "a1");
        assert_eq!(square_to_algebraic((0, 7)).expect("h8 should convert"), "h8");
        assert_eq!(square_to_algebraic((2, 3)).expect("d6 should convert"), "d6");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(square_to_algebraic((8, 0)).is_err());
        assert!(square_to_algebraic((0, -1)).is_err());
    }

    #[test]
    fn file_letters_span_the_board() {
        assert_eq!(file_letter(0), 'a');
        assert_eq!(file_letter(7), 'h');
    }
}
