//! Optional game configuration stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::difficulty::Difficulty;

/// Player configuration (TOML).
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Difficulty used when `--difficulty` is not given.
    pub difficulty: Difficulty,

    /// Seed for the secret when `--seed` is not given.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, difficulty: Option<Difficulty>, seed: Option<u64>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GameConfig::default()`.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}
