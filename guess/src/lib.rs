//! Terminal guess-the-number game.
//!
//! The crate keeps a strict separation between game rules and the terminal:
//!
//! - **[`core`]**: Pure, deterministic logic (the [`core::game::Game`] state
//!   machine, difficulty presets, input classification). No I/O; randomness is
//!   passed in by the caller.
//! - **[`io`]**: Side-effecting helpers (configuration file).
//!
//! [`play`] drives a game over any line-based reader/writer pair and is what
//! the `guess` binary wires to stdin/stdout.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod play;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
