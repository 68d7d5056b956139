use chrono::{DateTime, Utc};
use glance_core::WindowRecord;
use serde::{Deserialize, Serialize};

/// All windows observed at one polling tick, in enumeration order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub windows: Vec<WindowRecord>,
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(windows: Vec<WindowRecord>) -> Self {
        Self {
            windows,
            captured_at: Utc::now(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| window.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Kind of lifecycle change observed for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowEventKind {
    Created,
    Closed,
    Focused,
    Moved,
    Resized,
}

/// One-shot lifecycle notification produced by the differ.
#[derive(Debug, Clone, Serialize)]
pub struct WindowEvent {
    #[serde(rename = "type")]
    pub kind: WindowEventKind,
    pub window: WindowRecord,
    pub timestamp: DateTime<Utc>,
}

impl WindowEvent {
    pub fn new(kind: WindowEventKind, window: WindowRecord) -> Self {
        Self {
            kind,
            window,
            timestamp: Utc::now(),
        }
    }
}

/// Monitor tuning knobs, deserializable from embedding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Milliseconds between polling ticks.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Capacity of the event broadcast channel. A subscriber lagging past
    /// this many events loses the oldest ones instead of blocking the loop.
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    1000
}

pub(crate) fn default_broadcast_capacity() -> usize {
    64
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}
