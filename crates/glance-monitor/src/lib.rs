//! glance-monitor: polling window lifecycle monitor
//!
//! The enumeration tool offers no "window changed" notification, so change
//! detection is polling-based: each tick re-enumerates, diffs against the
//! previous snapshot, and broadcasts typed lifecycle events (created,
//! closed, moved, resized, focused) to subscribers.
//!
//! # Main Entry Points
//!
//! - [`monitor::engine::WindowMonitor`] - start/stop lifecycle, subscription
//! - [`monitor::diff::DiffEngine`] - timer-free per-tick diffing, for tests
//!   and embedders that drive their own schedule

pub mod monitor;

pub use monitor::diff::DiffEngine;
pub use monitor::engine::WindowMonitor;
pub use monitor::types::{MonitorConfig, Snapshot, WindowEvent, WindowEventKind};
