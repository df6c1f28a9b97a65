//! Application layer
//!
//! Services and DTOs that connect the parsing pipeline to callers: format
//! routing, the bounded puzzle store, and progress persistence.

pub mod dto;
pub mod ingestion_service;
pub mod puzzle_store;
pub mod state;

// Re-export commonly used items
pub use dto::{ApiResponse, DebugInfo, ProgressResponse, UploadResponse};
pub use ingestion_service::IngestionService;
pub use puzzle_store::{ProgressEntry, PuzzleStore, StoreError};
pub use state::AppState;
