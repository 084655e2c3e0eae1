//! Deterministic, pure list logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! lists and return deterministic outputs suitable for tests.

pub mod action;
pub mod dispatch;
pub mod invariants;
pub mod types;
