//! Exam collection persistence
//!
//! Reads and writes the whole collection as one JSON array under the exams
//! key. Loading never fails: missing or corrupt data reads as empty, and
//! malformed elements are skipped while the rest of the array is kept.

use crate::config::EXAMS_KEY;
use crate::error::Result;
use crate::models::ExamRecord;
use crate::storage::KeyValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExamStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ExamStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the persisted collection, or an empty one if unavailable
    pub async fn load(&self) -> Vec<ExamRecord> {
        match self.kv.get(EXAMS_KEY).await {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read exams, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Load the collection ahead of a rewrite.
    ///
    /// Unlike `load`, a backend read failure is returned so the caller does
    /// not save an empty-based collection over records it could not see.
    pub async fn load_for_update(&self) -> Result<Vec<ExamRecord>> {
        let raw = self.kv.get(EXAMS_KEY).await?;
        Ok(decode(raw.as_deref()))
    }

    /// Persist the whole collection, replacing the previous value
    pub async fn save(&self, records: &[ExamRecord]) -> Result<()> {
        let content = serde_json::to_string(records)?;
        self.kv.set(EXAMS_KEY, &content).await?;

        tracing::debug!("Saved {} exams", records.len());
        Ok(())
    }

    /// Remove every persisted exam
    pub async fn clear(&self) -> Result<()> {
        self.kv.remove(EXAMS_KEY).await?;
        tracing::info!("Cleared all saved exams");
        Ok(())
    }
}

/// Decode the stored array, dropping elements that are not valid records
fn decode(raw: Option<&str>) -> Vec<ExamRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let values = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw) {
        Ok(values) => values.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Stored exams are corrupt, treating as empty: {}", e);
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<ExamRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed exam at index {}: {}", idx, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::THEME_KEY;
    use crate::error::AppError;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;

    /// Backend whose reads always fail
    struct UnreadableStore;

    #[async_trait]
    impl KeyValueStore for UnreadableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Io(std::io::Error::other("disk unavailable")))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            panic!("write after failed read");
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn exam(id: &str, course: &str) -> ExamRecord {
        ExamRecord {
            id: id.to_string(),
            course: course.to_string(),
            exam_type: "Final".to_string(),
            datetime: "2026-06-01T09:00".to_string(),
            seat: "A1".to_string(),
            building: "North".to_string(),
            room: "204".to_string(),
            notes: "open book".to_string(),
            created_at: "2026-05-01T10:00:00+00:00".to_string(),
        }
    }

    fn create_test_store() -> (ExamStore, MemoryStore) {
        let kv = MemoryStore::new();
        (ExamStore::new(Arc::new(kv.clone())), kv)
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (store, _kv) = create_test_store();
        let records = vec![exam("1", "Algebra"), exam("2", "Biology")];

        store.save(&records).await.unwrap();

        assert_eq!(store.load().await, records);
    }

    #[tokio::test]
    async fn test_empty_collection_round_trip() {
        let (store, _kv) = create_test_store();

        store.save(&[]).await.unwrap();

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_loads_empty() {
        let (store, _kv) = create_test_store();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_data_loads_empty() {
        let (store, kv) = create_test_store();

        for raw in ["{not json", "{\"id\":\"1\"}", "[{\"course\":42}]", "\"text\"", "null"] {
            kv.set(EXAMS_KEY, raw).await.unwrap();
            assert!(store.load().await.is_empty(), "expected empty for {}", raw);
        }
    }

    #[tokio::test]
    async fn test_malformed_element_skipped_others_kept() {
        let (store, kv) = create_test_store();
        let good = exam("good", "Algebra");
        let raw = format!(
            "[{}, {{\"id\":\"bad\",\"type\":\"Quiz\",\"datetime\":\"2026-06-02T09:00\"}}, 7]",
            serde_json::to_string(&good).unwrap()
        );
        kv.set(EXAMS_KEY, &raw).await.unwrap();

        assert_eq!(store.load().await, vec![good.clone()]);
        assert_eq!(store.load_for_update().await.unwrap(), vec![good]);
    }

    #[tokio::test]
    async fn test_read_failure_is_soft_for_load_but_surfaced_for_update() {
        let store = ExamStore::new(Arc::new(UnreadableStore));

        assert!(store.load().await.is_empty());
        assert!(store.load_for_update().await.is_err());
    }

    #[tokio::test]
    async fn test_clear_only_removes_exams_key() {
        let (store, kv) = create_test_store();
        kv.set(THEME_KEY, "light").await.unwrap();
        store.save(&[exam("1", "Algebra")]).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.is_empty());
        assert_eq!(kv.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));
    }
}
