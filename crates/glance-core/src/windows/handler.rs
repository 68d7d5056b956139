//! Re-export facade for window operations.
//!
//! All enumeration operations are implemented in focused modules. This file
//! re-exports them to preserve the `window_ops::*` public API used by
//! lib.rs and downstream transports.

// Operations
pub use super::operations::{
    active_window, find_matching_window, list_windows, window_by_id, windows_by_app,
};

// Matching primitives for callers that already hold a candidate set
pub use super::matcher::{find_best_match, score_candidate};
