//! Weighted fuzzy matching of a partial identifier against candidate windows.
//!
//! Each candidate gets an integer score summed from independent signals,
//! strongest first: exact id, exact pid, app-name substring, title
//! substring, position proximity, size proximity. Absent identifier fields
//! contribute zero and are never penalized.

use crate::windows::types::{WindowIdentifier, WindowRecord};

const ID_SCORE: i32 = 100;
const PID_SCORE: i32 = 50;
const APP_NAME_SCORE: i32 = 25;
const TITLE_SCORE: i32 = 20;
const POSITION_SCORE: i32 = 10;
const SIZE_SCORE: i32 = 10;

/// Absolute per-axis tolerance for position and size proximity.
const PROXIMITY_TOLERANCE: i64 = 10;

/// Score one candidate against the identifier.
pub fn score_candidate(identifier: &WindowIdentifier, candidate: &WindowRecord) -> i32 {
    let mut score = 0;

    if identifier.id.as_deref() == Some(candidate.id.as_str()) {
        score += ID_SCORE;
    }
    if identifier.pid == Some(candidate.pid) {
        score += PID_SCORE;
    }
    if let Some(app_name) = &identifier.app_name
        && contains_ignore_case(&candidate.app_name, app_name)
    {
        score += APP_NAME_SCORE;
    }
    if let Some(title) = &identifier.title
        && contains_ignore_case(&candidate.title, title)
    {
        score += TITLE_SCORE;
    }
    if let Some((x, y)) = identifier.position
        && within_tolerance(x, candidate.bounds.x)
        && within_tolerance(y, candidate.bounds.y)
    {
        score += POSITION_SCORE;
    }
    if let Some((width, height)) = identifier.size
        && within_tolerance(width, candidate.bounds.width)
        && within_tolerance(height, candidate.bounds.height)
    {
        score += SIZE_SCORE;
    }

    score
}

/// Return the highest-scoring candidate with a strictly positive score.
///
/// Ties keep the first candidate encountered, so selection is stable over
/// the candidate order as supplied.
pub fn find_best_match<'a>(
    identifier: &WindowIdentifier,
    candidates: &'a [WindowRecord],
) -> Option<&'a WindowRecord> {
    let mut best: Option<(&'a WindowRecord, i32)> = None;
    for candidate in candidates {
        let score = score_candidate(identifier, candidate);
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(window, _)| window)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn within_tolerance(a: i32, b: i32) -> bool {
    (i64::from(a) - i64::from(b)).abs() <= PROXIMITY_TOLERANCE
}
