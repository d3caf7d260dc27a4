//! Authoritative mutable board state.
//!
//! `GameState` is the single source of truth for a running game: piece
//! placement, side to move, castling rights, and the en-passant target. It is
//! mutated in place by every accepted move and cloned wholesale whenever the
//! search needs a disposable working copy.

use crate::game_state::chess_rules::{
    KING_START_FILE, ROOK_KINGSIDE_FILE, ROOK_QUEENSIDE_FILE, STARTING_POSITION_FEN,
};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Full copy of the game state, used by search for backtracking.
pub type Snapshot = GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 8x8 mailbox grid indexed `[rank][file]`.
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn may capture onto en passant, set only immediately after
    /// a two-square pawn advance.
    pub en_passant_target: Option<Square>,

    // Clocks are carried for FEN round-tripping; no draw rule consumes them.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board with no rights; useful for constructing test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Return the state to the standard initial position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Read-only observation of one square. Out-of-bounds squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square_in_bounds(square) {
            return None;
        }
        self.board[square.0 as usize][square.1 as usize]
    }

    #[inline]
    fn set_square(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.0 as usize][square.1 as usize] = piece;
    }

    /// Full state capture for search backtracking.
    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        self.clone()
    }

    /// Roll the state back to a previously captured snapshot.
    #[inline]
    pub fn restore(&mut self, snapshot: &Snapshot) {
        *self = snapshot.clone();
    }

    /// Apply an already-validated move, honoring en-passant capture and
    /// castling rook relocation as side effects.
    ///
    /// Legality is the caller's responsibility (see the move generator); a
    /// move from an empty square is a silent no-op. Moving onto the current
    /// en-passant target with a pawn removes the passed pawn, and a
    /// two-square king shift relocates the matching rook.
    pub fn apply_move(&mut self, mv: &ChessMove) {
        let Some(piece) = self.piece_at(mv.from) else {
            return;
        };

        let mut was_capture = self.piece_at(mv.to).is_some();

        // En-passant capture: the passed pawn sits beside the mover, on the
        // destination file.
        if piece.kind == PieceKind::Pawn {
            if let Some(ep) = self.en_passant_target {
                if mv.to == ep && self.piece_at(mv.to).is_none() {
                    self.set_square((mv.from.0, mv.to.1), None);
                    was_capture = true;
                }
            }
        }

        // Castling: the king shifts two files and drags the matching rook.
        if piece.kind == PieceKind::King && mv.is_castling_shape() {
            let rank = mv.from.0;
            if mv.to.1 == 6 {
                let rook = self.piece_at((rank, ROOK_KINGSIDE_FILE));
                self.set_square((rank, 5), rook);
                self.set_square((rank, ROOK_KINGSIDE_FILE), None);
            } else if mv.to.1 == 2 {
                let rook = self.piece_at((rank, ROOK_QUEENSIDE_FILE));
                self.set_square((rank, 3), rook);
                self.set_square((rank, ROOK_QUEENSIDE_FILE), None);
            }
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, piece.color),
            None => piece,
        };
        self.set_square(mv.to, Some(placed));
        self.set_square(mv.from, None);

        self.update_castling_rights(piece, mv);

        // A fresh en-passant target exists only right after a double push.
        self.en_passant_target = None;
        if piece.kind == PieceKind::Pawn && (mv.to.0 - mv.from.0).abs() == 2 {
            self.en_passant_target = Some(((mv.from.0 + mv.to.0) / 2, mv.from.1));
        }

        if piece.kind == PieceKind::Pawn || was_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opposite();
    }

    /// Rights die permanently once the king or the relevant rook leaves its
    /// home square, or once anything lands on a rook home square (which can
    /// only happen after the rook is gone or captured by that very move).
    fn update_castling_rights(&mut self, moved: Piece, mv: &ChessMove) {
        if moved.kind == PieceKind::King && mv.from == (moved.color.home_rank(), KING_START_FILE) {
            self.castling_rights &=
                !(kingside_right(moved.color) | queenside_right(moved.color));
        }

        if moved.kind == PieceKind::Rook {
            if mv.from == (moved.color.home_rank(), ROOK_QUEENSIDE_FILE) {
                self.castling_rights &= !queenside_right(moved.color);
            }
            if mv.from == (moved.color.home_rank(), ROOK_KINGSIDE_FILE) {
                self.castling_rights &= !kingside_right(moved.color);
            }
        }

        for color in [Color::Light, Color::Dark] {
            if mv.to == (color.home_rank(), ROOK_QUEENSIDE_FILE) {
                self.castling_rights &= !queenside_right(color);
            }
            if mv.to == (color.home_rank(), ROOK_KINGSIDE_FILE) {
                self.castling_rights &= !kingside_right(color);
            }
        }
    }
}
