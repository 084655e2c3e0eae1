//! I/O helpers: list persistence, configuration, scaffolding.

pub mod config;
pub mod dispatch;
pub mod init;
pub mod list_store;
