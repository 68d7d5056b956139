//! Window record model, matching, and consumer-facing enumeration operations.
//!
//! The raw text produced by the external enumeration tool is turned into
//! [`types::WindowRecord`] values by the [`crate::parser`] module; everything
//! here works with those parsed records.

pub mod errors;
pub mod handler;
pub mod matcher;
pub mod operations;
pub mod provider;
pub mod types;
