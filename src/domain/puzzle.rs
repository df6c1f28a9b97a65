//! Output contract of an ingestion run

use serde::{Deserialize, Serialize};

use super::cell::ClassifiedCell;
use super::clue::ClueCollection;
use super::grid::{Grid, Solution};

/// Which front-end produced a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStrategy {
    StyledHtml,
    SpreadsheetMarker,
}

/// Cell of the spreadsheet marker grid, serialized as `""` or `"#"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCell {
    Blank,
    Blocked,
}

impl MarkerCell {
    pub const BLANK: &'static str = "";
    pub const BLOCKED: &'static str = "#";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => Self::BLANK,
            Self::Blocked => Self::BLOCKED,
        }
    }
}

impl Serialize for MarkerCell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MarkerCell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            Self::BLANK => Ok(Self::Blank),
            Self::BLOCKED => Ok(Self::Blocked),
            other => Err(serde::de::Error::custom(format!("unknown marker cell '{other}'"))),
        }
    }
}

/// Rows of the spreadsheet path; rows may be shorter than the sheet width
pub type MarkerGrid = Vec<Vec<MarkerCell>>;

/// Grid payload, shaped by the ingestion strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleGrid {
    Cells(Grid),
    Markers(MarkerGrid),
}

impl PuzzleGrid {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Cells(grid) => grid.row_count(),
            Self::Markers(rows) => rows.len(),
        }
    }

    /// Width of the first row, matching the debug endpoint's "RxC" label
    pub fn first_row_len(&self) -> usize {
        match self {
            Self::Cells(grid) => grid.col_count(),
            Self::Markers(rows) => rows.first().map_or(0, Vec::len),
        }
    }

    pub fn head(&self, count: usize) -> Self {
        match self {
            Self::Cells(grid) => Self::Cells(grid.head(count)),
            Self::Markers(rows) => Self::Markers(rows.iter().take(count).cloned().collect()),
        }
    }

    pub fn as_cells(&self) -> Option<&Grid> {
        match self {
            Self::Cells(grid) => Some(grid),
            Self::Markers(_) => None,
        }
    }

    pub fn as_markers(&self) -> Option<&MarkerGrid> {
        match self {
            Self::Markers(rows) => Some(rows),
            Self::Cells(_) => None,
        }
    }
}

/// Operator-facing metadata recorded by the grid assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiagnostics {
    pub dimensions: String,
    pub total_cells: usize,
    /// Leading classified rows, as seen before normalization
    pub grid_data: Vec<Vec<ClassifiedCell>>,
}

/// Result of one ingestion run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPuzzle {
    pub source: SourceStrategy,
    pub grid: PuzzleGrid,
    pub clues: ClueCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawDiagnostics>,
}

impl ParsedPuzzle {
    pub fn grid_size(&self) -> String {
        format!("{}x{}", self.grid.row_count(), self.grid.first_row_len())
    }
}
