//! Dashboard configuration persistence.
//!
//! Each dashboard keys a small configuration blob (selected report, hidden
//! columns, page size, period override). Reads fall back to a shared
//! `"default"` key so a fresh dashboard starts with the operator's last
//! saved defaults; writes happen whenever the hidden-column set changes.

pub mod config;
pub mod store;

pub use config::DashboardConfig;
pub use store::{ConfigStore, DEFAULT_KEY, JsonFileStore, MemoryStore, load_config};
