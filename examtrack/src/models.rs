//! Domain models
//!
//! The persisted exam record, the boundary request used to create one, and
//! the small value types derived from them for display.

use crate::config::{DEFAULT_EXAM_TYPE, FILTER_ALL, KNOWN_EXAM_TYPES};
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An exam entry as stored under the exams key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: String,
    pub course: String,
    /// Category such as "Final" or "Quiz"; matched verbatim by the type filter
    #[serde(rename = "type", default)]
    pub exam_type: String,
    /// Start instant as entered, e.g. "2026-01-15T09:30" or RFC 3339
    pub datetime: String,
    #[serde(default)]
    pub seat: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub notes: String,
    /// RFC 3339 creation instant, display only
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl ExamRecord {
    /// Build a record from a validated request, assigning a fresh id
    pub fn from_request(req: CreateExamRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            course: req.course,
            exam_type: req.exam_type,
            datetime: req.datetime,
            seat: req.seat,
            building: req.building,
            room: req.room,
            notes: req.notes,
            created_at: created_at.to_rfc3339(),
        }
    }

    /// Whether the type is one of the categories the entry form offers
    pub fn has_known_type(&self) -> bool {
        KNOWN_EXAM_TYPES.contains(&self.exam_type.as_str())
    }
}

/// Create exam request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateExamRequest {
    pub course: String,
    #[serde(rename = "type", default)]
    pub exam_type: String,
    pub datetime: String,
    #[serde(default)]
    pub seat: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub notes: String,
}

impl CreateExamRequest {
    /// Trim free-text fields and reject requests without course or datetime.
    /// `type` and `datetime` come from constrained inputs and are kept as given.
    pub fn normalized(self) -> Result<Self> {
        let req = Self {
            course: self.course.trim().to_string(),
            exam_type: self.exam_type,
            datetime: self.datetime,
            seat: self.seat.trim().to_string(),
            building: self.building.trim().to_string(),
            room: self.room.trim().to_string(),
            notes: self.notes.trim().to_string(),
        };

        if req.course.is_empty() {
            return Err(AppError::InvalidExam("course is required".to_string()));
        }
        if req.datetime.trim().is_empty() {
            return Err(AppError::InvalidExam("date/time is required".to_string()));
        }

        Ok(req)
    }
}

/// Form values recovered from a record taken out for editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamDraft {
    pub course: String,
    #[serde(rename = "type")]
    pub exam_type: String,
    pub datetime: String,
    pub seat: String,
    pub building: String,
    pub room: String,
    pub notes: String,
}

impl From<ExamRecord> for ExamDraft {
    fn from(record: ExamRecord) -> Self {
        let exam_type = if record.exam_type.is_empty() {
            DEFAULT_EXAM_TYPE.to_string()
        } else {
            record.exam_type
        };

        Self {
            course: record.course,
            exam_type,
            datetime: record.datetime,
            seat: record.seat,
            building: record.building,
            room: record.room,
            notes: record.notes,
        }
    }
}

impl From<ExamDraft> for CreateExamRequest {
    fn from(draft: ExamDraft) -> Self {
        Self {
            course: draft.course,
            exam_type: draft.exam_type,
            datetime: draft.datetime,
            seat: draft.seat,
            building: draft.building,
            room: draft.room,
            notes: draft.notes,
        }
    }
}

/// Visual emphasis derived from time remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

impl Urgency {
    /// Style class the list item carries
    pub fn css_class(self) -> &'static str {
        match self {
            Urgency::Normal => "",
            Urgency::Warning => "warn",
            Urgency::Critical => "dangerSoon",
        }
    }
}

/// Type filter selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Parse the raw select value; "all" and empty mean no filtering
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == FILTER_ALL {
            TypeFilter::All
        } else {
            TypeFilter::Only(raw.to_string())
        }
    }

    pub fn matches(&self, record: &ExamRecord) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(exam_type) => record.exam_type == *exam_type,
        }
    }
}

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than "light" is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Text for the theme toggle button
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "🌙 Dark",
            Theme::Light => "☀️ Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
