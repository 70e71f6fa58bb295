//! Named difficulty presets.

use std::fmt;
use std::num::NonZeroU32;

use clap::ValueEnum;
use rand::Rng;
use serde::Deserialize;

use crate::core::game::{Game, GameError, GameOptions};

/// Difficulty preset selecting bounds and attempt ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 1..=10, 5 attempts.
    Easy,
    /// 1..=100, 10 attempts.
    #[default]
    Medium,
    /// 1..=1000, 15 attempts.
    Hard,
}

impl Difficulty {
    /// `(low, high, max_attempts)` for this preset.
    pub fn bounds(self) -> (i64, i64, u32) {
        match self {
            Difficulty::Easy => (1, 10, 5),
            Difficulty::Medium => (1, 100, 10),
            Difficulty::Hard => (1, 1000, 15),
        }
    }

    /// Start a game with this preset and a secret drawn from `rng`.
    pub fn new_game<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Game, GameError> {
        let (low, high, max_attempts) = self.bounds();
        let options = GameOptions {
            max_attempts: NonZeroU32::new(max_attempts),
            secret: None,
        };
        Game::new(low, high, options, rng)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}
