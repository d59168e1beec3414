//! Display labels for a list entry

use super::instant::parse_instant;
use crate::config::INVALID_DATETIME_TEXT;
use chrono::{DateTime, Local, Utc};

/// "Tue • 2026-01-13 • 09:30" in host local time
pub fn schedule_label(datetime: &str) -> String {
    schedule_label_for(parse_instant(datetime))
}

pub(crate) fn schedule_label_for(instant: Option<DateTime<Utc>>) -> String {
    match instant {
        Some(instant) => instant
            .with_timezone(&Local)
            .format("%a • %Y-%m-%d • %H:%M")
            .to_string(),
        None => INVALID_DATETIME_TEXT.to_string(),
    }
}

/// Building and room joined by " • ", skipping empty parts
pub fn location_label(building: &str, room: &str) -> Option<String> {
    let parts: Vec<&str> = [building, room]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

/// Countdown as shown in the list
pub fn prefixed_countdown(countdown: &str) -> String {
    format!("⏳ {}", countdown)
}
