//! Single-user shopping list backed by one JSON file.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (action parsing, list mutation,
//!   invariants). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (list file, config, scaffolding).
//!
//! [`io::dispatch::dispatch`] ties the two together into the load, mutate,
//! save cycle every submitted form goes through.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod list;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
