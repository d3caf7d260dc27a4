//! Human-feel engine: real search underneath, imperfection on top.
//!
//! The pipeline is: score every root move with the fixed-depth search, then
//! degrade the choice the way a person at the tier's strength would. Scores
//! are shuffled (so ties break randomly), perturbed with uniform noise,
//! sorted, and then run through three gates in order: a blunder roll that
//! picks from the worst tail of the list, a mistake roll that picks uniformly
//! inside the candidate pool, and finally a temperature softmax over the top
//! candidates. Every knob comes from the tier's [`DifficultyProfile`].

use std::sync::{atomic::AtomicBool, Arc};

use rand::seq::SliceRandom;
use rand::Rng;
use rand::RngExt;

use crate::engines::difficulty::{Difficulty, DifficultyProfile};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::alpha_beta::root_scores;
use crate::search::board_scoring::PstScorer;

pub struct HumanizedEngine {
    difficulty: Difficulty,
    profile: DifficultyProfile,
    scorer: PstScorer,
    stop_signal: Option<Arc<AtomicBool>>,
}

impl HumanizedEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            profile: difficulty.profile(),
            scorer: PstScorer,
            stop_signal: None,
        }
    }

    /// Override the tier's stock profile. Used by tests to pin rates at 0 or
    /// 100 percent.
    pub fn with_profile(difficulty: Difficulty, profile: DifficultyProfile) -> Self {
        Self {
            difficulty,
            profile,
            scorer: PstScorer,
            stop_signal: None,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }
}

impl Engine for HumanizedEngine {
    fn name(&self) -> &str {
        "PocketChess Humanized"
    }

    fn set_stop_signal(&mut self, stop_signal: Option<Arc<AtomicBool>>) {
        self.stop_signal = stop_signal;
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let moves = all_legal_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string humanized tier {} depth {} legal_moves {}",
            self.difficulty.label(),
            self.profile.search_depth,
            moves.len()
        ));

        if moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut work = game_state.clone();
        let scored = root_scores(
            &mut work,
            &moves,
            self.profile.search_depth,
            &self.scorer,
            self.stop_signal.as_ref(),
        );

        let mut rng = rand::rng();
        let picked = select_from_scored(scored, &self.profile, &mut rng)
            .ok_or("no scored moves to select from")?;

        out.info_lines
            .push(format!("info string humanized picked score {}", picked.1));
        out.best_move = Some(picked.0);
        Ok(out)
    }
}

/// The imperfection pipeline, separated from the search so it can be driven
/// with synthetic scores and a seeded generator.
pub fn select_from_scored(
    mut scored: Vec<(ChessMove, i32)>,
    profile: &DifficultyProfile,
    rng: &mut impl Rng,
) -> Option<(ChessMove, i32)> {
    if scored.is_empty() {
        return None;
    }

    // Random tie-breaks: shuffle before the stable sort.
    scored.shuffle(rng);

    if profile.eval_noise_cp > 0 {
        for entry in scored.iter_mut() {
            entry.1 += rng.random_range(-profile.eval_noise_cp..=profile.eval_noise_cp);
        }
    }

    scored.sort_by_key(|(_, score)| -score);

    if scored.len() > 1 && roll_percent(rng, profile.blunder_rate_percent) {
        let tail_start = ((scored.len() as f64) * (1.0 - profile.blunder_quantile)) as usize;
        let tail_start = tail_start.max(1);
        let index = rng.random_range(tail_start..scored.len());
        return Some(scored[index]);
    }

    let pool_size = profile.top_k.min(scored.len()).max(1);
    let candidates = &scored[..pool_size];

    if pool_size > 1 && roll_percent(rng, profile.mistake_rate_percent) {
        return Some(candidates[rng.random_range(0..pool_size)]);
    }

    let weights = softmax_weights(candidates, profile.softmax_temperature);
    Some(candidates[weighted_index(&weights, rng)])
}

/// Temperature softmax over candidate scores, in pawns rather than
/// centipawns so the temperature knob works on a human scale.
fn softmax_weights(candidates: &[(ChessMove, i32)], temperature: f64) -> Vec<f64> {
    let temperature = temperature.max(1e-3);
    let scaled: Vec<f64> = candidates
        .iter()
        .map(|(_, score)| (*score as f64 / 100.0) / temperature)
        .collect();
    let peak = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|v| (v - peak).exp()).collect();
    let sum: f64 = exps.iter().sum::<f64>().max(1e-9);
    exps.into_iter().map(|w| w / sum).collect()
}

fn weighted_index(weights: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = weights.iter().sum();
    let mut remaining = rng.random_range(0.0..total.max(1e-9));
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return index;
        }
    }
    weights.len() - 1
}

#[inline]
fn roll_percent(rng: &mut impl Rng, percent: u8) -> bool {
    percent > 0 && rng.random_range(0..100u32) < percent as u32
}

/// Simulated thinking time. A uniform draw is bent through a log curve so
/// short pauses dominate but long thinks still happen, then mapped onto the
/// tier's delay window.
pub fn human_delay_ms(profile: &DifficultyProfile, rng: &mut impl Rng) -> u64 {
    let u: f64 = rng.random_range(0.0..1.0);
    let bent = ((1.0 + 4.0 * u).ln() / 2.5).exp() - 1.0;
    let full_range = (5.0f64.ln() / 2.5).exp() - 1.0;
    let fraction = (bent / full_range).clamp(0.0, 1.0);
    let window = (profile.max_delay_ms - profile.min_delay_ms) as f64;
    profile.min_delay_ms + (fraction * window) as u64
}
