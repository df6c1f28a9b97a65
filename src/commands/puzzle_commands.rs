//! Puzzle commands: upload, view, progress, debug
//!
//! Handlers log failures and hand back messages fit for the uploader.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::{ApiResponse, AppState, DebugInfo, ProgressResponse, UploadResponse};
use crate::domain::ParsedPuzzle;
use crate::infrastructure::ParsingError;

/// Parse an uploaded file and store the result under a new grid id
pub async fn upload_puzzle(
    state: &AppState,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<ApiResponse<UploadResponse>, String> {
    if file_name.trim().is_empty() {
        warn!("Upload rejected: no file name");
        return Err("No file selected".to_string());
    }

    let puzzle = state.ingestion.ingest_bytes(file_name, bytes).map_err(|e| {
        match &e {
            ParsingError::MalformedSpreadsheet { reason } => {
                error!("Spreadsheet '{}' could not be read: {}", file_name, reason);
            }
            _ => error!("Upload of '{}' failed: {}", file_name, e),
        }
        e.user_message()
    })?;

    let mut metadata = HashMap::new();
    metadata.insert("file_name".to_string(), file_name.to_string());
    metadata.insert("grid_size".to_string(), puzzle.grid_size());
    metadata.insert("clue_count".to_string(), puzzle.clues.total().to_string());

    let grid_id = state.store.insert(puzzle).await;
    info!("Stored '{}' as grid {}", file_name, grid_id);

    Ok(ApiResponse::success_with_metadata(
        UploadResponse::for_grid(grid_id),
        metadata,
    ))
}

/// Fetch a stored puzzle; unknown ids redirect to the upload page
pub async fn get_puzzle(state: &AppState, grid_id: &str) -> Result<ApiResponse<Arc<ParsedPuzzle>>, String> {
    match state.store.get(grid_id).await {
        Some(puzzle) => Ok(ApiResponse::success(puzzle)),
        None => {
            warn!("Grid {} not found, redirecting", grid_id);
            Ok(ApiResponse::redirect(format!("Grid not found: {grid_id}"), "/"))
        }
    }
}

/// Replace the saved progress of a grid
pub async fn save_progress(
    state: &AppState,
    grid_id: &str,
    data: serde_json::Value,
) -> Result<ApiResponse<ProgressResponse>, String> {
    let entry = state.store.save_progress(grid_id, data).await.map_err(|e| {
        error!("Failed to save progress: {}", e);
        e.to_string()
    })?;

    let mut metadata = HashMap::new();
    metadata.insert("timestamp".to_string(), entry.timestamp.to_rfc3339());

    Ok(ApiResponse::success_with_metadata(
        ProgressResponse {
            grid_id: grid_id.to_string(),
            data: entry.data,
        },
        metadata,
    ))
}

/// Saved progress of a grid, an empty object when none was saved
pub async fn load_progress(state: &AppState, grid_id: &str) -> Result<ApiResponse<ProgressResponse>, String> {
    let data = state.store.load_progress(grid_id).await;
    Ok(ApiResponse::success(ProgressResponse {
        grid_id: grid_id.to_string(),
        data,
    }))
}

/// Counts and diagnostics of a stored puzzle
pub async fn debug_info(state: &AppState, grid_id: &str) -> Result<ApiResponse<DebugInfo>, String> {
    let puzzle = state.store.get(grid_id).await.ok_or_else(|| {
        error!("Debug info requested for unknown grid {}", grid_id);
        "Grid not found".to_string()
    })?;

    Ok(ApiResponse::success(DebugInfo::from(puzzle.as_ref())))
}
