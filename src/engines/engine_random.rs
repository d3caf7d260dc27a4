//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and as a floor opponent in self-play.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PocketChess Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let legal_moves = all_legal_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn picks_some_legal_move_from_the_start_position() {
        let game = GameState::new_game();
        let legal = all_legal_moves(&game, game.side_to_move);
        let mut engine = RandomEngine::new();
        for _ in 0..20 {
            let out = engine.choose_move(&game).expect("engine should not fail");
            let picked = out.best_move.expect("start position has moves");
            assert!(legal.contains(&picked));
        }
    }

    #[test]
    fn returns_none_when_no_moves_exist() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("fen should parse");
        let mut engine = RandomEngine::new();
        let out = engine.choose_move(&game).expect("engine should not fail");
        assert!(out.best_move.is_none());
    }
}
