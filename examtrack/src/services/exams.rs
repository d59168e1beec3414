//! Exams service
//!
//! Mutation and read boundary used by the presentation layer. Every change
//! loads the full collection, applies the change, and saves it back whole.

use crate::engine::{Board, BoardQuery};
use crate::error::Result;
use crate::models::{CreateExamRequest, ExamDraft, ExamRecord};
use crate::services::{Clock, ExamStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Service for managing exams
#[derive(Clone)]
pub struct ExamsService {
    store: ExamStore,
    clock: Arc<dyn Clock>,
}

impl ExamsService {
    pub fn new(store: ExamStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Create and persist an exam. Rejected requests leave the store untouched.
    pub async fn create(&self, req: CreateExamRequest) -> Result<ExamRecord> {
        let req = req.normalized()?;

        let record = ExamRecord::from_request(req, self.clock.now());
        tracing::info!("Creating exam {} ({})", record.id, record.course);
        if !record.has_known_type() {
            tracing::debug!("Exam {} uses custom type {:?}", record.id, record.exam_type);
        }

        let mut records = self.store.load_for_update().await?;
        records.push(record.clone());
        self.store.save(&records).await?;

        Ok(record)
    }

    /// Delete one exam. Returns false, without writing, if the id is unknown.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.remove(id).await?.is_some())
    }

    /// Remove an exam and hand back its values for the entry form.
    ///
    /// The record is gone once this returns; resubmitting the draft creates
    /// a new record with a new id.
    pub async fn take_for_edit(&self, id: &str) -> Result<Option<ExamDraft>> {
        Ok(self.remove(id).await?.map(ExamDraft::from))
    }

    /// Replace an exam by deleting it and creating a new one from `req`.
    ///
    /// The two writes are not transactional: a crash between them loses the
    /// original record.
    pub async fn edit(&self, id: &str, req: CreateExamRequest) -> Result<Option<ExamRecord>> {
        let req = req.normalized()?;

        if self.remove(id).await?.is_none() {
            return Ok(None);
        }

        self.create(req).await.map(Some)
    }

    /// Remove every exam if the user confirmed. Returns whether anything ran.
    pub async fn clear_all(&self, confirmed: bool) -> Result<bool> {
        if !confirmed {
            tracing::debug!("Clear all declined");
            return Ok(false);
        }

        self.store.clear().await?;
        Ok(true)
    }

    /// The stored collection in storage order
    pub async fn list(&self) -> Vec<ExamRecord> {
        self.store.load().await
    }

    /// Build the visible board for a filter selection as of `now`
    pub async fn board(&self, query: &BoardQuery, now: DateTime<Utc>) -> Board {
        Board::build(self.store.load().await, query, now)
    }

    /// Build the visible board as of the service clock
    pub async fn current_board(&self, query: &BoardQuery) -> Board {
        self.board(query, self.clock.now()).await
    }

    async fn remove(&self, id: &str) -> Result<Option<ExamRecord>> {
        let mut records = self.store.load_for_update().await?;

        let Some(idx) = records.iter().position(|r| r.id == id) else {
            tracing::debug!("Exam not found: {}", id);
            return Ok(None);
        };

        let removed = records.remove(idx);
        self.store.save(&records).await?;

        tracing::info!("Deleted exam {} ({})", removed.id, removed.course);
        Ok(Some(removed))
    }
}
