//! Per-tick snapshot diffing.
//!
//! `DiffEngine` owns the retained previous snapshot and performs one
//! obtain-parse-diff step per call, with no timer of its own. The polling
//! loop in [`crate::monitor::engine`] drives it on a schedule; tests drive
//! it directly with a fake provider.

use tracing::{debug, info, warn};

use glance_core::errors::GlanceError;
use glance_core::parser::parse_window_list;
use glance_core::windows::provider::WindowProvider;

use crate::monitor::types::{Snapshot, WindowEvent, WindowEventKind};

/// Compares successive snapshots and produces lifecycle events.
///
/// Continuity between ticks rests solely on "same id across two consecutive
/// snapshots"; the id synthesis seam in glance-core is the only place that
/// knows how ids are made.
pub struct DiffEngine {
    previous: Option<Snapshot>,
}

impl DiffEngine {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Whether a baseline snapshot has been captured yet.
    pub fn has_baseline(&self) -> bool {
        self.previous.is_some()
    }

    /// Capture the baseline snapshot without emitting events.
    ///
    /// On enumeration failure the baseline stays unset and the first
    /// successful tick becomes the baseline instead.
    pub fn capture_baseline(&mut self, provider: &dyn WindowProvider) {
        match provider.enumerate_windows() {
            Ok(raw) => {
                let snapshot = Snapshot::new(parse_window_list(&raw));
                info!(event = "monitor.baseline_captured", count = snapshot.len());
                self.previous = Some(snapshot);
            }
            Err(e) => {
                warn!(
                    event = "monitor.baseline_capture_failed",
                    error = %e,
                    error_code = e.error_code(),
                );
            }
        }
    }

    /// Run one polling tick against the provider.
    ///
    /// An enumeration failure skips the tick entirely: no events, previous
    /// snapshot retained, so a single failed tick never fabricates spurious
    /// "all closed" events. A focused-window failure alone only suppresses
    /// the focused event for this tick.
    pub fn tick(&mut self, provider: &dyn WindowProvider) -> Vec<WindowEvent> {
        let raw = match provider.enumerate_windows() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    event = "monitor.tick_skipped",
                    error = %e,
                    error_code = e.error_code(),
                );
                return Vec::new();
            }
        };
        let next = Snapshot::new(parse_window_list(&raw));

        let mut events = Vec::new();
        match &self.previous {
            Some(previous) => {
                diff_snapshots(previous, &next, &mut events);

                // Focus is sampled, not pushed: a found focused window fires
                // every tick, even while it stays the same window.
                match provider.focused_window() {
                    Ok(Some(window)) => {
                        events.push(WindowEvent::new(WindowEventKind::Focused, window));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        debug!(
                            event = "monitor.focus_query_failed",
                            error = %e,
                            error_code = e.error_code(),
                        );
                    }
                }
            }
            None => {
                info!(event = "monitor.baseline_captured", count = next.len());
            }
        }

        self.previous = Some(next);
        events
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Append lifecycle events for the transition from `previous` to `next`.
///
/// A window may emit both `Moved` and `Resized` in the same tick; `Closed`
/// events carry the last-known record for the vanished id.
pub fn diff_snapshots(previous: &Snapshot, next: &Snapshot, events: &mut Vec<WindowEvent>) {
    for window in &next.windows {
        match previous.get(&window.id) {
            Some(prior) => {
                if prior.bounds.x != window.bounds.x || prior.bounds.y != window.bounds.y {
                    events.push(WindowEvent::new(WindowEventKind::Moved, window.clone()));
                }
                if prior.bounds.width != window.bounds.width
                    || prior.bounds.height != window.bounds.height
                {
                    events.push(WindowEvent::new(WindowEventKind::Resized, window.clone()));
                }
            }
            None => {
                events.push(WindowEvent::new(WindowEventKind::Created, window.clone()));
            }
        }
    }

    for window in &previous.windows {
        if !next.contains(&window.id) {
            events.push(WindowEvent::new(WindowEventKind::Closed, window.clone()));
        }
    }
}
