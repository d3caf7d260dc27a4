//! Background AI opponent.
//!
//! Wraps the humanized engine in a worker thread so the caller's thread never
//! blocks on search or on the simulated thinking delay. One request runs at a
//! time: a second `request_move` while the worker is busy is ignored rather
//! than queued. Cancellation is cooperative through a stop flag the worker
//! and the search both poll; a cancelled request never delivers its move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::engines::difficulty::{Difficulty, DifficultyProfile};
use crate::engines::engine_humanized::{human_delay_ms, HumanizedEngine};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

/// Granularity of the cancellable delay sleep.
const SLEEP_SLICE: Duration = Duration::from_millis(25);

pub struct AiPlayer {
    difficulty: Difficulty,
    profile: DifficultyProfile,
    running: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_profile(difficulty, difficulty.profile())
    }

    /// Build with a custom profile. Tests use this to shrink the delay
    /// window to near zero.
    pub fn with_profile(difficulty: Difficulty, profile: DifficultyProfile) -> Self {
        Self {
            difficulty,
            profile,
            running: Arc::new(AtomicBool::new(false)),
            stop: Arc::new(AtomicBool::new(false)),
            worker: None,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True while a move request is in flight.
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start thinking about `game` on a background thread. `deliver` is
    /// called exactly once with the chosen move (`None` when the side to move
    /// has no legal moves) unless the request is cancelled first. Ignored if
    /// a request is already in flight.
    pub fn request_move<F>(&mut self, game: &GameState, deliver: F)
    where
        F: FnOnce(Option<ChessMove>) + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        // Reap the previous worker so handles do not pile up.
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }

        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Arc::clone(&stop);

        let running = Arc::clone(&self.running);
        let difficulty = self.difficulty;
        let profile = self.profile;
        let position = game.clone();

        self.worker = Some(thread::spawn(move || {
            // Deliberation comes first: the full humanized delay elapses
            // before any search work starts, so a cancel during the pause
            // costs nothing.
            let mut remaining =
                Duration::from_millis(human_delay_ms(&profile, &mut rand::rng()));
            while !remaining.is_zero() && !stop.load(Ordering::SeqCst) {
                let slice = remaining.min(SLEEP_SLICE);
                thread::sleep(slice);
                remaining = remaining.saturating_sub(slice);
            }

            if stop.load(Ordering::SeqCst) {
                running.store(false, Ordering::SeqCst);
                return;
            }

            let mut engine = HumanizedEngine::with_profile(difficulty, profile);
            engine.set_stop_signal(Some(Arc::clone(&stop)));
            let chosen = engine
                .choose_move(&position)
                .map(|out| out.best_move)
                .unwrap_or(None);

            if !stop.load(Ordering::SeqCst) {
                deliver(chosen);
            }
            running.store(false, Ordering::SeqCst);
        }));
    }

    /// Cancel the in-flight request, if any, and wait for the worker to wind
    /// down. The pending move is discarded.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for AiPlayer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use std::sync::mpsc;
    use std::time::Instant;

    fn instant_profile() -> DifficultyProfile {
        DifficultyProfile {
            min_delay_ms: 0,
            max_delay_ms: 1,
            ..Difficulty::Easy.profile()
        }
    }

    #[test]
    fn delivers_a_legal_move_for_the_start_position() {
        let game = GameState::new_game();
        let legal = all_legal_moves(&game, game.side_to_move);
        let (tx, rx) = mpsc::channel();

        let mut player = AiPlayer::with_profile(Difficulty::Easy, instant_profile());
        player.request_move(&game, move |mv| {
            let _ = tx.send(mv);
        });

        let delivered = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker should deliver")
            .expect("start position has moves");
        assert!(legal.contains(&delivered));
    }

    #[test]
    fn thinking_delay_elapses_before_the_move_arrives() {
        let game = GameState::new_game();
        let (tx, rx) = mpsc::channel();

        let profile = DifficultyProfile {
            min_delay_ms: 300,
            max_delay_ms: 400,
            ..Difficulty::Easy.profile()
        };
        let mut player = AiPlayer::with_profile(Difficulty::Easy, profile);
        let started = Instant::now();
        player.request_move(&game, move |mv| {
            let _ = tx.send(mv);
        });

        let delivered = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker should deliver");
        assert!(delivered.is_some());
        assert!(
            started.elapsed() >= Duration::from_millis(300),
            "the deliberation pause precedes the search"
        );
    }

    #[test]
    fn cancelled_request_never_delivers() {
        let game = GameState::new_game();
        let (tx, rx) = mpsc::channel();

        let slow = DifficultyProfile {
            min_delay_ms: 5_000,
            max_delay_ms: 6_000,
            ..Difficulty::Easy.profile()
        };
        let mut player = AiPlayer::with_profile(Difficulty::Easy, slow);
        player.request_move(&game, move |mv| {
            let _ = tx.send(mv);
        });
        thread::sleep(Duration::from_millis(50));
        player.cancel();

        assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
        assert!(!player.is_thinking());
    }

    #[test]
    fn second_request_while_thinking_is_ignored() {
        let game = GameState::new_game();
        let (tx, rx) = mpsc::channel();

        let slow = DifficultyProfile {
            min_delay_ms: 300,
            max_delay_ms: 400,
            ..Difficulty::Easy.profile()
        };
        let mut player = AiPlayer::with_profile(Difficulty::Easy, slow);

        let tx_first = tx.clone();
        player.request_move(&game, move |mv| {
            let _ = tx_first.send(mv);
        });
        assert!(player.is_thinking());
        player.request_move(&game, move |mv| {
            let _ = tx.send(mv);
        });

        assert!(rx.recv_timeout(Duration::from_secs(10)).is_ok());
        assert!(
            rx.recv_timeout(Duration::from_millis(700)).is_err(),
            "only the first request should deliver"
        );
    }

    #[test]
    fn mated_position_delivers_none() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("fen should parse");
        let (tx, rx) = mpsc::channel();

        let mut player = AiPlayer::with_profile(Difficulty::Normal, instant_profile());
        player.request_move(&game, move |mv| {
            let _ = tx.send(mv);
        });
        let delivered = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker should deliver");
        assert!(delivered.is_none());
    }
}
