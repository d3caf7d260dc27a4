//! Engine abstraction layer.
//!
//! Defines a common output payload and a single trait interface so different
//! move-selection strategies can be swapped behind the background player.

use std::sync::{atomic::AtomicBool, Arc};

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Install (or clear) a cooperative stop flag. Engines poll it during
    /// long work and return early with whatever they have.
    fn set_stop_signal(&mut self, _stop_signal: Option<Arc<AtomicBool>>) {}

    /// Pick a move for the side to move. `best_move` is `None` only when the
    /// position has no legal moves.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String>;
}
