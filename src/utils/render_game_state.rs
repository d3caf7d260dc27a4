//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments. Rendered with rank 8 at the top, the way the Light
//! player sees the board.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8i8 {
        let rank_label = char::from(b'8' - rank as u8);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8i8 {
            match game_state.piece_at((rank, file)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_renders_with_rank_eight_on_top() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert!(lines[1].starts_with("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(lines[8].starts_with("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖"));
    }

    #[test]
    fn empty_squares_render_as_dots() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("fen should parse");
        let rendered = render_game_state(&game);
        assert!(rendered.contains('·'));
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♚'));
    }
}
