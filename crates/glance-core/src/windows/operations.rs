//! Consumer-facing enumeration operations.
//!
//! Every operation here absorbs provider failures at the boundary:
//! enumeration is best-effort and a busy or momentarily unauthorized tool
//! must present as "no data this round", never as a consumer-visible error.

use tracing::{debug, warn};

use crate::errors::GlanceError;
use crate::parser::parse_window_list;
use crate::windows::matcher;
use crate::windows::provider::WindowProvider;
use crate::windows::types::{WindowIdentifier, WindowRecord};

/// List all currently known windows.
pub fn list_windows(provider: &dyn WindowProvider) -> Vec<WindowRecord> {
    match provider.enumerate_windows() {
        Ok(raw) => {
            let records = parse_window_list(&raw);
            debug!(event = "core.windows.list_completed", count = records.len());
            records
        }
        Err(e) => {
            warn!(
                event = "core.windows.enumerate_failed",
                error = %e,
                error_code = e.error_code(),
            );
            Vec::new()
        }
    }
}

/// The currently focused window, if any.
pub fn active_window(provider: &dyn WindowProvider) -> Option<WindowRecord> {
    match provider.focused_window() {
        Ok(window) => window,
        Err(e) => {
            warn!(
                event = "core.windows.focused_query_failed",
                error = %e,
                error_code = e.error_code(),
            );
            None
        }
    }
}

/// Windows whose application name contains `name` (case-insensitive).
pub fn windows_by_app(provider: &dyn WindowProvider, name: &str) -> Vec<WindowRecord> {
    let needle = name.to_lowercase();
    list_windows(provider)
        .into_iter()
        .filter(|window| window.app_name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a window by its synthesized id in a fresh enumeration.
pub fn window_by_id(provider: &dyn WindowProvider, id: &str) -> Option<WindowRecord> {
    list_windows(provider)
        .into_iter()
        .find(|window| window.id == id)
}

/// Resolve a partial identifier to the best-matching current window.
pub fn find_matching_window(
    provider: &dyn WindowProvider,
    identifier: &WindowIdentifier,
) -> Option<WindowRecord> {
    let windows = list_windows(provider);
    matcher::find_best_match(identifier, &windows).cloned()
}
