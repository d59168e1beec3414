//! Filter, search and chronological sort of the stored collection

use super::instant::parse_instant;
use crate::models::{ExamRecord, TypeFilter};
use chrono::{DateTime, Utc};

/// Lower-cased, trimmed search text; empty means no search
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `course` or `notes` contains an already normalized query
pub fn matches_search(record: &ExamRecord, query: &str) -> bool {
    query.is_empty()
        || record.course.to_lowercase().contains(query)
        || record.notes.to_lowercase().contains(query)
}

/// Sort key for a record. Unparseable datetimes sort first, as already passed.
pub fn sort_instant(record: &ExamRecord) -> DateTime<Utc> {
    parse_instant(&record.datetime).unwrap_or_else(|| {
        tracing::debug!(
            "Exam {} has unparseable datetime {:?}, sorting as earliest",
            record.id,
            record.datetime
        );
        DateTime::<Utc>::MIN_UTC
    })
}

/// Project the stored collection into the visible list.
///
/// Records are sorted ascending by instant (stable for equal instants), then
/// narrowed by type and by search text over course and notes.
pub fn project(records: Vec<ExamRecord>, filter: &TypeFilter, search: &str) -> Vec<ExamRecord> {
    let query = normalize_search(search);

    let mut keyed: Vec<(DateTime<Utc>, ExamRecord)> = records
        .into_iter()
        .map(|record| (sort_instant(&record), record))
        .collect();
    keyed.sort_by_key(|(instant, _)| *instant);

    keyed
        .into_iter()
        .map(|(_, record)| record)
        .filter(|record| filter.matches(record))
        .filter(|record| matches_search(record, &query))
        .collect()
}
