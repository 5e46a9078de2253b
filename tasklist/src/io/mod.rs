//! Side-effecting adapters for the terminal host.

pub mod command;
pub mod config;
pub mod prompt;
pub mod render;
