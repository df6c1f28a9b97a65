//! Data Transfer Objects for the command surface

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Clue, MarkerClue, ParsedPuzzle, PuzzleGrid, RawDiagnostics};

// ============================================================================
// Response envelope
// ============================================================================

/// API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: HashMap::new(),
        }
    }

    pub fn success_with_metadata(data: T, metadata: HashMap<String, String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            metadata: HashMap::new(),
        }
    }

    /// Error that tells the caller where to navigate instead
    pub fn redirect(message: String, location: &str) -> Self {
        let mut response = Self::error(message);
        response.metadata.insert("redirect".to_string(), location.to_string());
        response
    }
}

// ============================================================================
// Upload DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub grid_id: String,
    /// Where the caller should navigate to solve the puzzle
    pub redirect: String,
}

impl UploadResponse {
    pub fn for_grid(grid_id: String) -> Self {
        Self {
            success: true,
            redirect: format!("/crossword/{grid_id}"),
            grid_id,
        }
    }
}

// ============================================================================
// Progress DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub grid_id: String,
    pub data: serde_json::Value,
}

// ============================================================================
// Debug DTOs
// ============================================================================

/// Summary of a stored puzzle for troubleshooting heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub grid_size: String,
    pub total_clues: usize,
    pub horizontal_clues: Vec<Clue>,
    pub vertical_clues: Vec<Clue>,
    pub marker_clues: Vec<MarkerClue>,
    pub raw_data: Option<RawDiagnostics>,
    pub sample_grid: PuzzleGrid,
}

impl DebugInfo {
    pub const SAMPLE_ROWS: usize = 3;
}

impl From<&ParsedPuzzle> for DebugInfo {
    fn from(puzzle: &ParsedPuzzle) -> Self {
        Self {
            grid_size: puzzle.grid_size(),
            total_clues: puzzle.clues.total(),
            horizontal_clues: puzzle.clues.horizontal().to_vec(),
            vertical_clues: puzzle.clues.vertical().to_vec(),
            marker_clues: puzzle.clues.marker_entries().to_vec(),
            raw_data: puzzle.raw_data.clone(),
            sample_grid: puzzle.grid.head(Self::SAMPLE_ROWS),
        }
    }
}
