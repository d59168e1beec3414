//! Countdown text and urgency classification
//!
//! Both are recomputed from the absolute target and the current instant on
//! every call; nothing is decremented between ticks.

use super::instant::parse_instant;
use crate::config::{
    CRITICAL_THRESHOLD_MS, INVALID_DATETIME_TEXT, PASSED_TEXT, WARNING_THRESHOLD_MS,
};
use crate::models::Urgency;
use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1000;

/// One duration split into days, hours, minutes and seconds (24h days)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    /// Decompose milliseconds with floor division. Negative input counts as zero.
    pub fn from_millis(ms: i64) -> Self {
        let total_seconds = ms.max(0) / MS_PER_SECOND;
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / 60;

        Self {
            days: total_hours / 24,
            hours: total_hours % 24,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
        }
    }

    /// At most three units, starting from the most significant non-zero one
    pub fn format(&self) -> String {
        if self.days > 0 {
            format!("{}d {}h {}m", self.days, self.hours, self.minutes)
        } else if self.hours > 0 {
            format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
        } else {
            format!("{}m {}s", self.minutes, self.seconds)
        }
    }
}

/// Whole milliseconds from `now` until `target`; negative once passed
pub fn remaining_millis(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (target - now).num_milliseconds()
}

/// Countdown text for a stored datetime string
pub fn countdown_text(datetime: &str, now: DateTime<Utc>) -> String {
    countdown_for(parse_instant(datetime), now)
}

/// Countdown text for an already parsed target
pub fn countdown_for(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(target) = target else {
        return INVALID_DATETIME_TEXT.to_string();
    };

    let delta = remaining_millis(target, now);
    if delta <= 0 {
        return PASSED_TEXT.to_string();
    }

    DurationParts::from_millis(delta).format()
}

/// Urgency for a stored datetime string
pub fn urgency(datetime: &str, now: DateTime<Utc>) -> Urgency {
    urgency_for(parse_instant(datetime), now)
}

/// Urgency for an already parsed target. Unparseable targets count as passed.
pub fn urgency_for(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Urgency {
    let Some(target) = target else {
        return Urgency::Normal;
    };

    match remaining_millis(target, now) {
        delta if delta <= 0 => Urgency::Normal,
        delta if delta <= CRITICAL_THRESHOLD_MS => Urgency::Critical,
        delta if delta <= WARNING_THRESHOLD_MS => Urgency::Warning,
        _ => Urgency::Normal,
    }
}
