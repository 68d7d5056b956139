//! glance-core: Core library for window enumeration and tracking
//!
//! This library provides the business logic for observing on-screen windows
//! through an external enumeration collaborator that reports window metadata
//! as loosely-structured text. It is used by both the monitor and any
//! transport layers built on top.
//!
//! # Main Entry Points
//!
//! - [`parser`] - Parse raw window-list text into window records
//! - [`windows`] - Window record model, matcher, and enumeration operations
//! - [`errors`] - Error taxonomy shared across the workspace

pub mod errors;
pub mod logging;
pub mod parser;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use errors::{GlanceError, GlanceResult};
pub use parser::parse_window_list;
pub use windows::errors::ProviderError;
pub use windows::provider::WindowProvider;
pub use windows::types::{WindowBounds, WindowIdentifier, WindowRecord};

// Re-export handler module as the primary API
pub use windows::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
