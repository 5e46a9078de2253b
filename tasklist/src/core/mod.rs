//! Deterministic, pure logic for the task list.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! snapshots and return deterministic outputs suitable for tests.

pub mod confirm;
pub mod id_gen;
pub mod invariants;
pub mod projector;
pub mod sample;
pub mod store;
pub mod task;
pub mod theme;
