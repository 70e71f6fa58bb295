//! I/O helpers for the `guess` binary.

pub mod config;
