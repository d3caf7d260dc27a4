//! Fixed rule constants for the standard game.

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// King start file (the e-file) shared by both colors.
pub const KING_START_FILE: i8 = 4;

/// Rook home files: queenside a-file and kingside h-file.
pub const ROOK_QUEENSIDE_FILE: i8 = 0;
pub const ROOK_KINGSIDE_FILE: i8 = 7;
