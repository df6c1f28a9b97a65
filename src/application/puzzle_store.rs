//! Bounded in-memory store of parsed puzzles and solving progress
//!
//! Puzzles are keyed by a generated UUID v4. Past capacity the oldest puzzle
//! is evicted together with its progress.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ParsedPuzzle;
use crate::infrastructure::config::StoreConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown grid: {grid_id}")]
    UnknownGrid { grid_id: String },
}

/// Last saved progress for one grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreInner {
    puzzles: HashMap<String, Arc<ParsedPuzzle>>,
    progress: HashMap<String, ProgressEntry>,
    order: VecDeque<String>,
}

/// Shared handle; clones see the same puzzles
#[derive(Debug, Clone)]
pub struct PuzzleStore {
    inner: Arc<RwLock<StoreInner>>,
    max_puzzles: usize,
}

impl PuzzleStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            max_puzzles: config.max_puzzles.max(1),
        }
    }

    /// Store a puzzle under a fresh identifier and return the identifier
    pub async fn insert(&self, puzzle: ParsedPuzzle) -> String {
        let grid_id = Uuid::new_v4().to_string();
        let mut inner = self.inner.write().await;

        while inner.order.len() >= self.max_puzzles {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.puzzles.remove(&oldest);
            inner.progress.remove(&oldest);
            info!("Evicted puzzle {} (capacity {})", oldest, self.max_puzzles);
        }

        inner.puzzles.insert(grid_id.clone(), Arc::new(puzzle));
        inner.order.push_back(grid_id.clone());
        debug!("Stored puzzle {} ({} held)", grid_id, inner.order.len());
        grid_id
    }

    pub async fn get(&self, grid_id: &str) -> Option<Arc<ParsedPuzzle>> {
        self.inner.read().await.puzzles.get(grid_id).cloned()
    }

    pub async fn contains(&self, grid_id: &str) -> bool {
        self.inner.read().await.puzzles.contains_key(grid_id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Replace the progress of a known grid; last write wins
    pub async fn save_progress(&self, grid_id: &str, data: serde_json::Value) -> Result<ProgressEntry, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.puzzles.contains_key(grid_id) {
            return Err(StoreError::UnknownGrid {
                grid_id: grid_id.to_string(),
            });
        }

        let entry = ProgressEntry {
            data,
            timestamp: Utc::now(),
        };
        inner.progress.insert(grid_id.to_string(), entry.clone());
        Ok(entry)
    }

    /// Saved progress data, or an empty object when nothing was saved
    pub async fn load_progress(&self, grid_id: &str) -> serde_json::Value {
        self.inner
            .read()
            .await
            .progress
            .get(grid_id)
            .map_or_else(|| serde_json::json!({}), |entry| entry.data.clone())
    }

    pub async fn progress_entry(&self, grid_id: &str) -> Option<ProgressEntry> {
        self.inner.read().await.progress.get(grid_id).cloned()
    }
}

impl Default for PuzzleStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}
