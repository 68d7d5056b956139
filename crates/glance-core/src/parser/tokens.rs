//! Shared tokenizing helpers for the window-list grammars.
//!
//! Everything here is quote-aware: a brace or comma inside a quoted string
//! (honoring `\"` escapes) is literal text, never structure. Window titles
//! routinely contain embedded script source, so this is load-bearing.

/// Extract top-level brace-delimited groups from `body`.
///
/// Braces inside quoted strings or nested groups do not open or close a
/// top-level group. A trailing group left open at end of input (unbalanced
/// brace or unterminated quote) is malformed and discarded; earlier
/// well-formed groups are still returned.
pub(crate) fn brace_groups(body: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut escaped = false;
    let mut start = None;

    for (i, c) in body.char_indices() {
        if in_quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quote = false;
            }
            continue;
        }
        match c {
            '"' => in_quote = true,
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0
                        && let Some(s) = start.take()
                    {
                        groups.push(&body[s..=i]);
                    }
                }
            }
            _ => {}
        }
    }

    groups
}

/// Locate `key` outside any quoted string, followed by a colon.
///
/// Returns the byte index of the value start (after the colon and any
/// whitespace). Requires a word boundary before the key so `name` never
/// matches inside another attribute name.
pub(crate) fn find_key(input: &str, key: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut in_quote = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_quote = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_quote = true;
            i += 1;
            continue;
        }

        let boundary_ok = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
        if boundary_ok && input.get(i..).is_some_and(|rest| rest.starts_with(key)) {
            let mut j = i + key.len();
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b':' {
                j += 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                return Some(j);
            }
        }
        i += 1;
    }

    None
}

/// Read a double-quoted string literal from the start of `input`,
/// unescaping `\"` and `\\`. Returns `None` when there is no opening
/// quote or the literal is unterminated.
pub(crate) fn read_quoted(input: &str) -> Option<String> {
    let rest = input.strip_prefix('"')?;
    let mut out = String::new();
    let mut escaped = false;
    for c in rest.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Some(out);
        } else {
            out.push(c);
        }
    }
    None
}

/// Read a leading (optionally negative) integer from `input`.
pub(crate) fn read_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (c == '-' && i == 0) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// Read a `{a, b}` integer pair from the start of `input`.
pub(crate) fn read_pair(input: &str) -> Option<(i32, i32)> {
    let body = input.trim_start().strip_prefix('{')?;
    let close = body.find('}')?;
    let (first, second) = body[..close].split_once(',')?;
    let a = first.trim().parse().ok()?;
    let b = second.trim().parse().ok()?;
    Some((a, b))
}
