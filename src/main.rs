//! Terminal self-play demo: two humanized engines play each other and the
//! game is printed as a board plus a PGN transcript.
//!
//! Usage: `pocket_chess [light_tier] [dark_tier]` where a tier is one of
//! easy, normal, hard, pro. Defaults to normal vs normal.

use std::env;

use pocket_chess::engines::difficulty::Difficulty;
use pocket_chess::engines::engine_humanized::HumanizedEngine;
use pocket_chess::engines::engine_trait::Engine;
use pocket_chess::game_state::chess_types::Color;
use pocket_chess::game_state::game_state::GameState;
use pocket_chess::move_generation::legal_move_checks::is_king_in_check;
use pocket_chess::move_generation::legal_move_generator::all_legal_moves;
use pocket_chess::utils::pgn::write_pgn;
use pocket_chess::utils::render_game_state::render_game_state;
use pocket_chess::utils::san::move_to_string;

const MAX_PLIES: usize = 200;

fn parse_tier(arg: &str) -> Result<Difficulty, String> {
    match arg.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "normal" => Ok(Difficulty::Normal),
        "hard" => Ok(Difficulty::Hard),
        "pro" => Ok(Difficulty::Pro),
        other => Err(format!("unknown difficulty '{other}'")),
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    let light_tier = args.get(1).map(|a| parse_tier(a)).transpose()?.unwrap_or(Difficulty::Normal);
    let dark_tier = args.get(2).map(|a| parse_tier(a)).transpose()?.unwrap_or(Difficulty::Normal);

    let mut light = HumanizedEngine::new(light_tier);
    let mut dark = HumanizedEngine::new(dark_tier);
    println!("{} ({}) vs {} ({})", light.name(), light_tier, dark.name(), dark_tier);

    let initial = GameState::new_game();
    let mut game = initial.clone();
    let mut history = Vec::new();
    let result;

    loop {
        if history.len() >= MAX_PLIES {
            result = "*";
            break;
        }
        if all_legal_moves(&game, game.side_to_move).is_empty() {
            result = if is_king_in_check(&game, game.side_to_move) {
                match game.side_to_move {
                    Color::Light => "0-1",
                    Color::Dark => "1-0",
                }
            } else {
                "1/2-1/2"
            };
            break;
        }

        let engine = match game.side_to_move {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };
        let out = engine.choose_move(&game)?;
        let Some(mv) = out.best_move else {
            result = "*";
            break;
        };

        let san = move_to_string(&game, &mv)?;
        println!("{:>3}. {}", history.len() + 1, san);
        game.apply_move(&mv);
        history.push(mv);
    }

    println!("{}", render_game_state(&game));
    println!("result: {result}");
    println!();
    println!("{}", write_pgn(&initial, &history, result)?);
    Ok(())
}
