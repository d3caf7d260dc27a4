//! Difficulty tiers and their tuning profiles.
//!
//! Each tier bundles every knob the humanized engine reads: search depth,
//! evaluation noise, candidate-pool size, softmax temperature, the deliberate
//! mistake and blunder rates, and the simulated thinking-delay window. The
//! numbers are tuned so the tiers land in distinct, roughly club-ladder Elo
//! bands rather than scaling a single parameter.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Pro,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] =
        [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard, Difficulty::Pro];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Pro => "Pro",
        }
    }

    /// Approximate playing-strength band, inclusive on both ends.
    #[inline]
    pub fn elo_band(self) -> (u16, u16) {
        match self {
            Difficulty::Easy => (0, 450),
            Difficulty::Normal => (550, 800),
            Difficulty::Hard => (950, 1350),
            Difficulty::Pro => (1500, 2000),
        }
    }

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                min_delay_ms: 600,
                max_delay_ms: 2500,
                search_depth: 1,
                eval_noise_cp: 180,
                top_k: 5,
                softmax_temperature: 1.2,
                mistake_rate_percent: 35,
                blunder_rate_percent: 18,
                blunder_quantile: 0.30,
            },
            Difficulty::Normal => DifficultyProfile {
                min_delay_ms: 1000,
                max_delay_ms: 3000,
                search_depth: 2,
                eval_noise_cp: 110,
                top_k: 4,
                softmax_temperature: 0.9,
                mistake_rate_percent: 22,
                blunder_rate_percent: 8,
                blunder_quantile: 0.25,
            },
            Difficulty::Hard => DifficultyProfile {
                min_delay_ms: 1500,
                max_delay_ms: 4000,
                search_depth: 2,
                eval_noise_cp: 60,
                top_k: 3,
                softmax_temperature: 0.7,
                mistake_rate_percent: 10,
                blunder_rate_percent: 3,
                blunder_quantile: 0.20,
            },
            Difficulty::Pro => DifficultyProfile {
                min_delay_ms: 2000,
                max_delay_ms: 5000,
                search_depth: 3,
                eval_noise_cp: 25,
                top_k: 2,
                softmax_temperature: 0.5,
                mistake_rate_percent: 5,
                blunder_rate_percent: 1,
                blunder_quantile: 0.15,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tuning knobs for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Simulated thinking delay window, in milliseconds.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Fixed search depth in plies.
    pub search_depth: u8,
    /// Half-width of the uniform noise added to each root score, centipawns.
    pub eval_noise_cp: i32,
    /// Size of the candidate pool the final pick is drawn from.
    pub top_k: usize,
    /// Softmax temperature over candidate scores; lower is sharper.
    pub softmax_temperature: f64,
    /// Chance of picking uniformly from the candidate pool instead of by
    /// softmax weight.
    pub mistake_rate_percent: u8,
    /// Chance of picking from the worst quantile of all scored moves.
    pub blunder_rate_percent: u8,
    /// Fraction of the (descending) score list counted as the blunder tail.
    pub blunder_quantile: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_escalate_monotonically() {
        let profiles: Vec<DifficultyProfile> =
            Difficulty::ALL.iter().map(|d| d.profile()).collect();
        for pair in profiles.windows(2) {
            assert!(pair[0].search_depth <= pair[1].search_depth);
            assert!(pair[0].eval_noise_cp > pair[1].eval_noise_cp);
            assert!(pair[0].top_k > pair[1].top_k);
            assert!(pair[0].softmax_temperature > pair[1].softmax_temperature);
            assert!(pair[0].mistake_rate_percent > pair[1].mistake_rate_percent);
            assert!(pair[0].blunder_rate_percent > pair[1].blunder_rate_percent);
            assert!(pair[0].blunder_quantile > pair[1].blunder_quantile);
        }
    }

    #[test]
    fn elo_bands_do_not_overlap() {
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].elo_band().1 < pair[1].elo_band().0);
        }
    }

    #[test]
    fn delay_windows_are_well_formed() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            assert!(profile.min_delay_ms < profile.max_delay_ms);
        }
    }

    #[test]
    fn labels_round_trip_through_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Pro.to_string(), "Pro");
    }
}
