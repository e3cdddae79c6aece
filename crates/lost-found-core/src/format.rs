//! Text Formatting
//!
//! Truncation and relative-time labels for cards.

use chrono::{DateTime, Utc};

const ELLIPSIS: &str = "...";

/// Cut `s` to at most `max` characters, appending an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], ELLIPSIS),
    }
}

/// Relative label for how long ago `then` was, as seen from `now`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    // Future timestamps come from clock skew
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}
