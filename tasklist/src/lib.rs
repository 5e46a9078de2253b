//! Single-screen task list.
//!
//! Users add, complete and remove short text items, switch between a light
//! and a dark theme, and see a placeholder when nothing is left. The crate
//! keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (task store, projection, theme,
//!   delete confirmation gate). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting adapters (config file, terminal prompts,
//!   renderers, command parsing).
//!
//! [`session`] dispatches user intents against the core; [`host`] wires a
//! session to a terminal.

pub mod core;
pub mod exit_codes;
pub mod host;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
