//! Shared components for the event report table CLI.

pub mod ingest;
pub mod logging;
