//! Spreadsheet marker ingestion
//!
//! Raw sheets carry no styling; the layout is spelled out with a skip marker:
//! - empty or missing value: blank playable cell
//! - skip marker, exactly and in any case: no cell for this column in this row
//! - anything else: blocked cell plus a definition at that position
//!
//! The first row that emits no cell ends the sheet.

use tracing::{debug, info};

use super::config::ParsingConfig;
use super::document::SheetMatrix;
use super::{ParseContext, ParsingResult, PuzzleIngestor};
use crate::domain::{ClueCollection, MarkerCell, MarkerClue, ParsedPuzzle, PuzzleGrid, SourceStrategy};

#[derive(Debug, Clone)]
pub struct MarkerIngestor {
    skip_marker: String,
}

impl MarkerIngestor {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            skip_marker: config.skip_marker.to_lowercase(),
        }
    }

    fn is_skip_marker(&self, value: &str) -> bool {
        value.to_lowercase() == self.skip_marker
    }
}

impl Default for MarkerIngestor {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

impl PuzzleIngestor for MarkerIngestor {
    type Input = SheetMatrix;

    fn ingest(&self, sheet: &SheetMatrix, context: &ParseContext) -> ParsingResult<ParsedPuzzle> {
        let mut grid = Vec::new();
        let mut entries = Vec::new();

        for (row, values) in sheet.iter().enumerate() {
            let mut grid_row = Vec::new();
            for (col, value) in values.iter().enumerate() {
                let raw = value.as_deref().unwrap_or_default();
                if raw.is_empty() {
                    grid_row.push(MarkerCell::Blank);
                } else if self.is_skip_marker(raw) {
                    continue;
                } else {
                    grid_row.push(MarkerCell::Blocked);
                    entries.push(MarkerClue {
                        row,
                        col,
                        text: raw.trim().to_string(),
                    });
                }
            }

            if grid_row.is_empty() {
                debug!("Row {} emitted no cell, ending sheet", row);
                break;
            }
            grid.push(grid_row);
        }

        info!(
            "Parsed '{}': {} rows, {} definitions",
            context.source_name,
            grid.len(),
            entries.len()
        );

        Ok(ParsedPuzzle {
            source: SourceStrategy::SpreadsheetMarker,
            grid: PuzzleGrid::Markers(grid),
            clues: ClueCollection::SpreadsheetMarker { entries },
            solution: None,
            raw_data: None,
        })
    }
}
