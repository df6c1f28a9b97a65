//! Puzzle parsing infrastructure
//!
//! Two ingestion strategies share one output shape:
//! - `StyledHtmlParser` scores the tables of an HTML export, classifies cells
//!   through an ordered rule list and assembles a rectangular grid
//! - `MarkerIngestor` reads a raw sheet laid out with a skip marker

pub mod cell_classifier;
pub mod clue_extractor;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod grid_assembler;
pub mod html_puzzle_parser;
pub mod marker_ingestor;
pub mod signals;
pub mod table_locator;

// Re-export public types
pub use cell_classifier::{CellClassifier, ClassificationRule};
pub use clue_extractor::ClueExtractor;
pub use config::{ClassificationThresholds, ParsingConfig, ScoringWeights};
pub use context::ParseContext;
pub use document::{HtmlDocument, SheetMatrix, SourceCell, SourceTable};
pub use error::{ParsingError, ParsingResult};
pub use grid_assembler::{AssembledGrid, GridAssembler};
pub use html_puzzle_parser::StyledHtmlParser;
pub use marker_ingestor::MarkerIngestor;
pub use signals::CellSignals;
pub use table_locator::{TableLocator, TableScore, TableSelection};

use crate::domain::ParsedPuzzle;

/// Turns one kind of source into a parsed puzzle
pub trait PuzzleIngestor {
    type Input: ?Sized;

    /// Parse the input with contextual information
    fn ingest(&self, input: &Self::Input, context: &ParseContext) -> ParsingResult<ParsedPuzzle>;
}
