//! Stable exit codes for the `tasklist` binary.

/// Session ended normally (quit command or end of input).
pub const OK: i32 = 0;
/// Startup or I/O failure: unreadable/invalid config, broken output stream.
pub const INVALID: i32 = 1;
