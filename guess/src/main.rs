//! Guess-the-number in the terminal.
//!
//! Picks a secret from a difficulty preset and reads guesses from stdin until
//! the player wins, runs out of attempts, or quits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use guess::core::difficulty::Difficulty;
use guess::exit_codes;
use guess::io::config::{GameConfig, load_config};
use guess::logging;
use guess::play::play_session;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "guess",
    version,
    about = "Play a small guess-the-number game in your terminal"
)]
struct Cli {
    /// Difficulty preset (default: config file value, else medium).
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed the random source so the secret is reproducible.
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file providing default `difficulty` and `seed`.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    debug!(difficulty = %cfg.difficulty, seeded = cfg.seed.is_some(), "config resolved");

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = cfg.difficulty.new_game(&mut rng).context("create game")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play_session(&mut game, cfg.difficulty, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Merge the optional config file with command-line flags (flags win).
fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => GameConfig::default(),
    };
    Ok(base.with_overrides(cli.difficulty, cli.seed))
}
