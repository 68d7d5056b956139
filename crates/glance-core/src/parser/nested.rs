//! Nested-object-list grammar: one bracketed list of `{...}` objects.
//!
//! The whole output is `{{attr:"v", ...}, {...}, ...}`. Field order is not
//! guaranteed, so attributes are extracted by labeled pattern rather than
//! positionally. This grammar is lenient by design: an object missing some
//! attributes is still a distinguishable window and falls back to defaults,
//! unlike a partial line-block group which is dropped.

use std::collections::HashMap;

use tracing::debug;

use crate::parser::{synthesize_id, tokens};
use crate::windows::types::{WindowBounds, WindowRecord};

const DEFAULT_APP_NAME: &str = "Unknown";
const DEFAULT_TITLE: &str = "Untitled";

pub fn parse(raw: &str) -> Vec<WindowRecord> {
    let trimmed = raw.trim();
    // Strip one outer brace layer; the group scanner tolerates a missing
    // closer on truncated input.
    let body = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let body = body.strip_suffix('}').unwrap_or(body);

    let mut records = Vec::new();
    let mut ordinals = HashMap::new();
    for object in tokens::brace_groups(body) {
        if let Some(record) = parse_object(object, &mut ordinals) {
            records.push(record);
        }
    }
    records
}

fn parse_object(object: &str, ordinals: &mut HashMap<u32, u32>) -> Option<WindowRecord> {
    let app_name = quoted_attr(object, &["procName", "appName"]);
    let title = quoted_attr(object, &["name", "title"]);
    let pid = int_attr(object, &["procID", "pid"]);
    let position = pair_attr(object, &["position"]);
    let size = pair_attr(object, &["size"]);

    if app_name.is_none() && title.is_none() && pid.is_none() && position.is_none() && size.is_none()
    {
        debug!(event = "core.parser.object_skipped_no_markers");
        return None;
    }

    let pid = pid.unwrap_or(0);
    let (x, y) = position.unwrap_or((0, 0));
    let (width, height) = size.unwrap_or((0, 0));
    Some(WindowRecord {
        id: synthesize_id(pid, ordinals),
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        app_name: app_name.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        pid,
        bounds: WindowBounds::new(x, y, width, height),
    })
}

fn quoted_attr(object: &str, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        tokens::find_key(object, key).and_then(|at| tokens::read_quoted(&object[at..]))
    })
}

fn int_attr(object: &str, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .find_map(|key| tokens::find_key(object, key).and_then(|at| tokens::read_int(&object[at..])))
        .and_then(|n| u32::try_from(n).ok())
}

fn pair_attr(object: &str, keys: &[&str]) -> Option<(i32, i32)> {
    keys.iter().find_map(|key| {
        tokens::find_key(object, key).and_then(|at| tokens::read_pair(&object[at..]))
    })
}
