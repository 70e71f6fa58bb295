//! Diagnostics for a game session, written to stderr.
//!
//! Events emitted by the crate:
//!
//! - `info`: session start (bounds, attempt ceiling, difficulty), secret
//!   found, attempts exhausted.
//! - `debug`: resolved config (whether seeded), each accepted guess with its
//!   outcome and remaining attempts, each rejected input, closed stdin.
//!
//! stdout carries only prompts and feedback, so running with `RUST_LOG=guess=debug`
//! does not garble the transcript. The secret is only ever
//! printed to the player on a loss, never logged.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Filter comes from `RUST_LOG`, else `warn`.
///
/// # Example
/// ```bash
/// RUST_LOG=guess=debug cargo run -- --difficulty easy
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
