//! Test-only helpers for driving sessions and writing config fixtures.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::difficulty::Difficulty;
use crate::core::game::Game;
use crate::play::{SessionOutcome, play_session};

/// Play `game` against a scripted stdin and return the outcome plus everything
/// written to stdout. The banner reports `medium` difficulty.
pub fn run_scripted(game: &mut Game, script: &str) -> Result<(SessionOutcome, String)> {
    let mut output = Vec::new();
    let outcome = play_session(
        game,
        Difficulty::Medium,
        Cursor::new(script.as_bytes()),
        &mut output,
    )?;
    let transcript = String::from_utf8(output).context("transcript is not utf-8")?;
    Ok((outcome, transcript))
}

/// Write `contents` to `guess.toml` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn config_fixture(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let path = dir.path().join("guess.toml");
    std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((dir, path))
}
