//! Display-ready board: the projection plus per-entry countdown and urgency
//!
//! A board is built once per user action (add, edit, delete, filter or
//! search change, clear). Between actions only `refresh` runs, which
//! recomputes countdown text and urgency but never filters or reorders.

use super::countdown::{countdown_for, urgency_for};
use super::display::{location_label, schedule_label_for};
use super::instant::parse_instant;
use super::projection::project;
use crate::models::{ExamRecord, TypeFilter, Urgency};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filter selection and search text as entered in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
    pub type_filter: TypeFilter,
    pub search: String,
}

impl BoardQuery {
    pub fn new(type_filter: &str, search: &str) -> Self {
        Self {
            type_filter: TypeFilter::parse(type_filter),
            search: search.to_string(),
        }
    }
}

/// One row of the board
#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub record: ExamRecord,
    pub countdown: String,
    pub urgency: Urgency,
    /// Weekday, date and time of the exam
    pub schedule: String,
    pub location: Option<String>,
    #[serde(skip)]
    instant: Option<DateTime<Utc>>,
}

impl BoardEntry {
    fn new(record: ExamRecord, now: DateTime<Utc>) -> Self {
        let instant = parse_instant(&record.datetime);
        let location = location_label(&record.building, &record.room);

        Self {
            countdown: countdown_for(instant, now),
            urgency: urgency_for(instant, now),
            schedule: schedule_label_for(instant),
            location,
            instant,
            record,
        }
    }

    fn refresh(&mut self, now: DateTime<Utc>) {
        self.countdown = countdown_for(self.instant, now);
        self.urgency = urgency_for(self.instant, now);
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    entries: Vec<BoardEntry>,
}

impl Board {
    /// Run the projection and compute countdowns as of `now`
    pub fn build(records: Vec<ExamRecord>, query: &BoardQuery, now: DateTime<Utc>) -> Self {
        let entries: Vec<BoardEntry> = project(records, &query.type_filter, &query.search)
            .into_iter()
            .map(|record| BoardEntry::new(record, now))
            .collect();

        tracing::debug!("Built board with {} entries", entries.len());

        Self { entries }
    }

    /// Recompute countdown and urgency of every entry as of `now`
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        for entry in &mut self.entries {
            entry.refresh(now);
        }
    }

    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&BoardEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empty-state flag for the presentation layer
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
