//! Styled HTML ingestion: locate, classify, assemble, extract

use tracing::{debug, info};

use super::cell_classifier::CellClassifier;
use super::clue_extractor::ClueExtractor;
use super::config::ParsingConfig;
use super::document::{HtmlDocument, SourceTable};
use super::grid_assembler::GridAssembler;
use super::table_locator::TableLocator;
use super::{ParseContext, ParsingResult, PuzzleIngestor};
use crate::domain::{ParsedPuzzle, PuzzleGrid, SourceStrategy};

/// Full pipeline for HTML exports of spreadsheet layouts
#[derive(Debug, Clone)]
pub struct StyledHtmlParser {
    locator: TableLocator,
    classifier: CellClassifier,
    assembler: GridAssembler,
    extractor: ClueExtractor,
}

impl StyledHtmlParser {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            locator: TableLocator::new(config),
            classifier: CellClassifier::new(config),
            assembler: GridAssembler::new(config),
            extractor: ClueExtractor::new(config),
        }
    }

    /// Parser with a custom classifier, e.g. a reordered rule list
    pub fn with_classifier(config: &ParsingConfig, classifier: CellClassifier) -> Self {
        Self {
            classifier,
            ..Self::new(config)
        }
    }

    pub fn locator(&self) -> &TableLocator {
        &self.locator
    }

    /// Run the pipeline over already-extracted tables
    pub fn parse_tables(&self, tables: &[SourceTable], context: &ParseContext) -> ParsingResult<ParsedPuzzle> {
        let selection = self.locator.locate(tables)?;
        let table = &tables[selection.index];
        debug!(
            "Using table {} of {} for '{}'",
            selection.index,
            tables.len(),
            context.source_name
        );

        let classified = self.classifier.classify_table(table);
        let assembled = self.assembler.assemble(&classified);
        let clues = self.extractor.extract(&classified);
        let solution = assembled.grid.empty_solution();

        info!(
            "Parsed '{}': {} grid, {} clues",
            context.source_name,
            assembled.diagnostics.dimensions,
            clues.total()
        );

        Ok(ParsedPuzzle {
            source: SourceStrategy::StyledHtml,
            grid: PuzzleGrid::Cells(assembled.grid),
            clues,
            solution: Some(solution),
            raw_data: Some(assembled.diagnostics),
        })
    }
}

impl Default for StyledHtmlParser {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

impl PuzzleIngestor for StyledHtmlParser {
    type Input = str;

    fn ingest(&self, html: &str, context: &ParseContext) -> ParsingResult<ParsedPuzzle> {
        let document = HtmlDocument::parse(html)?;
        let tables = document.tables();
        self.parse_tables(&tables, context)
    }
}
