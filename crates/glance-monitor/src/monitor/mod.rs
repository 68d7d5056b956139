//! Snapshot differ and polling event monitor.

pub mod diff;
pub mod engine;
pub mod types;
