//! Deterministic, pure game logic.
//!
//! Core modules must be free of I/O side effects. Randomness is injected by the
//! caller, so every function here is reproducible under a seeded RNG.

pub mod difficulty;
pub mod game;
pub mod input;
