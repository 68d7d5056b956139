//! Window-list parsing.
//!
//! The enumeration tool emits window lists in one of two grammars, without
//! announcing which: blank-line separated `key: value` blocks, or a single
//! bracketed list of nested objects. Each grammar owns its tokenizer; this
//! module dispatches on structural signature (a doubled opening brace marks
//! the nested list) and falls back to the line-oriented grammar otherwise.
//!
//! Parsing is total: malformed input degrades to an empty or partial result,
//! never an error.

pub mod line_block;
pub mod nested;
pub(crate) mod tokens;

use std::collections::HashMap;

use tracing::debug;

use crate::windows::types::WindowRecord;

/// Parse raw enumeration-tool output into window records.
///
/// Auto-detects the grammar. Degenerate input (empty text, the bare `{}`
/// token, or text without any recognizable attribute marker) yields an
/// empty vec.
pub fn parse_window_list(raw: &str) -> Vec<WindowRecord> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Vec::new();
    }

    let records = if has_doubled_brace(trimmed) {
        nested::parse(trimmed)
    } else {
        line_block::parse(raw)
    };

    debug!(event = "core.parser.parse_completed", count = records.len());
    records
}

fn has_doubled_brace(trimmed: &str) -> bool {
    let mut chars = trimmed.chars().filter(|c| !c.is_whitespace());
    chars.next() == Some('{') && chars.next() == Some('{')
}

/// Synthesize a window id from the owning pid and a per-pid ordinal.
///
/// The raw text carries no native window handle, so this is the only
/// identity the core has. The per-pid ordinal keeps ids stable across
/// parses as long as a process keeps its windows in the same relative
/// order; ids are only ever promised unique within one parse call.
pub(crate) fn synthesize_id(pid: u32, ordinals: &mut HashMap<u32, u32>) -> String {
    let ordinal = ordinals.entry(pid).or_insert(0);
    let id = format!("{pid}-{ordinal}");
    *ordinal += 1;
    id
}
