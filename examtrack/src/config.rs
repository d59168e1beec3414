//! Application configuration
//!
//! Central location for storage keys, sentinels, urgency thresholds and the
//! runtime settings read from the environment.

use std::path::PathBuf;
use std::time::Duration;

// ===== Storage Keys =====

/// Key holding the JSON-encoded exam collection
pub const EXAMS_KEY: &str = "uni_exams_v1";

/// Key holding the theme preference ("dark" or "light")
pub const THEME_KEY: &str = "uni_theme_v1";

// ===== Filtering =====

/// Type filter value that disables type filtering
pub const FILTER_ALL: &str = "all";

/// Exam categories offered by the entry form. Other strings are still accepted.
pub const KNOWN_EXAM_TYPES: &[&str] = &["Final", "Midterm", "Quiz", "Other"];

/// Type assigned to an edit draft when the stored record has none
pub const DEFAULT_EXAM_TYPE: &str = "Final";

// ===== Countdown =====

/// Countdown text for a record whose datetime does not parse
pub const INVALID_DATETIME_TEXT: &str = "Invalid date/time";

/// Countdown text once the exam start has been reached
pub const PASSED_TEXT: &str = "✅ Started / Passed";

/// Remaining time at or below which an exam is critical (2 hours)
pub const CRITICAL_THRESHOLD_MS: i64 = 2 * 60 * 60 * 1000;

/// Remaining time at or below which an exam is a warning (24 hours)
pub const WARNING_THRESHOLD_MS: i64 = 24 * 60 * 60 * 1000;

// ===== Ticker =====

/// Default countdown refresh interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Minimum refresh interval. Faster ticks only burn CPU.
pub const MIN_TICK_MS: u64 = 100;

/// Maximum refresh interval (1 minute). Slower makes seconds meaningless.
pub const MAX_TICK_MS: u64 = 60_000;

// ===== Runtime =====

/// Default directory for the on-device database
pub const DEFAULT_DATA_DIR: &str = "./examtrack-data";

/// Database file name inside the data directory
pub const DATABASE_FILE: &str = "examtrack.db";

/// Settings resolved at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub tick_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl AppConfig {
    /// Read `EXAMTRACK_DATA_DIR` and `EXAMTRACK_TICK_MS`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("EXAMTRACK_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("EXAMTRACK_TICK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => {
                    config.tick_interval =
                        Duration::from_millis(ms.clamp(MIN_TICK_MS, MAX_TICK_MS));
                }
                Err(_) => {
                    tracing::warn!("Ignoring invalid EXAMTRACK_TICK_MS value: {}", raw);
                }
            }
        }

        config
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
