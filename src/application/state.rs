//! Application state shared by the command handlers

use std::sync::Arc;

use tracing::info;

use crate::application::ingestion_service::IngestionService;
use crate::application::puzzle_store::PuzzleStore;
use crate::infrastructure::config::AppConfig;

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Parsed puzzles and progress keyed by grid id
    pub store: PuzzleStore,

    pub ingestion: Arc<IngestionService>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        info!(
            "Application state created (store capacity {})",
            config.store.max_puzzles
        );
        Self {
            store: PuzzleStore::new(&config.store),
            ingestion: Arc::new(IngestionService::new(&config.parsing)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
