//! Application state and initialization
//!
//! This module wires the key-value backend and every service together.
//! A presentation layer holds one AppState for the life of the process.

use crate::config::AppConfig;
use crate::database::create_pool;
use crate::error::Result;
use crate::services::{
    Clock, CountdownTicker, ExamStore, ExamsService, SystemClock, ThemeService,
};
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub exams_service: ExamsService,
    pub theme_service: ThemeService,
    pub ticker: CountdownTicker,
}

impl AppState {
    /// Assemble services over an existing store and clock
    pub fn new(config: AppConfig, kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let exam_store = ExamStore::new(Arc::clone(&kv));

        Self {
            exams_service: ExamsService::new(exam_store, Arc::clone(&clock)),
            theme_service: ThemeService::new(kv),
            ticker: CountdownTicker::new(clock, config.tick_interval),
            config,
        }
    }

    /// Open the on-device SQLite store in the configured data directory
    pub async fn open(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing application");
        tracing::info!("App data directory: {:?}", config.data_dir);

        std::fs::create_dir_all(&config.data_dir)?;
        let pool = create_pool(&config.database_path()).await?;

        let state = Self::new(config, Arc::new(SqliteStore::new(pool)), Arc::new(SystemClock));

        tracing::info!("Application initialized successfully");
        Ok(state)
    }

    /// Ephemeral state backed by memory, nothing is written to disk
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }
}
