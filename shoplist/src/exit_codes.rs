//! Stable exit codes for shoplist CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: unreadable or invalid config/list, or storage errors.
pub const INVALID: i32 = 1;
