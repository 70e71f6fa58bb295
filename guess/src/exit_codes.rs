//! Stable exit codes for the `guess` binary.

/// Session ended normally: won, lost or quit.
pub const OK: i32 = 0;
/// Startup failed (invalid config, unreadable terminal, etc.).
pub const INVALID: i32 = 1;
