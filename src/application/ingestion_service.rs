//! Ingestion service: routes an uploaded file to the matching strategy

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::ParsedPuzzle;
use crate::infrastructure::parsing::{
    HtmlDocument, MarkerIngestor, ParseContext, ParsingConfig, ParsingResult, PuzzleIngestor, StyledHtmlParser,
    TableScore,
};
use crate::infrastructure::{SourceFormat, SpreadsheetReader};

/// Format detection plus both ingestion strategies, built from one config
#[derive(Debug, Clone)]
pub struct IngestionService {
    html: StyledHtmlParser,
    marker: MarkerIngestor,
    reader: SpreadsheetReader,
}

impl IngestionService {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            html: StyledHtmlParser::new(config),
            marker: MarkerIngestor::new(config),
            reader: SpreadsheetReader::new(),
        }
    }

    /// Parse an in-memory upload. The extension is checked before any parsing.
    pub fn ingest_bytes(&self, file_name: &str, bytes: Vec<u8>) -> ParsingResult<ParsedPuzzle> {
        let format = SourceFormat::from_file_name(file_name).inspect_err(|_| {
            warn!("Rejected upload '{}': unsupported format", file_name);
        })?;
        let context = ParseContext::new(file_name).with_metadata("format", format!("{format:?}"));
        info!("Ingesting '{}' ({} bytes) as {:?}", file_name, bytes.len(), format);

        if format.is_spreadsheet() {
            let sheet = self.reader.read(format, bytes)?;
            self.marker.ingest(&sheet, &context)
        } else {
            let html = String::from_utf8_lossy(&bytes);
            self.html.ingest(&html, &context)
        }
    }

    /// Read a file from disk and parse it
    pub async fn ingest_path(&self, path: &Path) -> Result<ParsedPuzzle> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = display_name(path);
        let puzzle = self
            .ingest_bytes(&file_name, bytes)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(puzzle)
    }

    /// Score every table of an HTML file without building the puzzle
    pub async fn inspect_path(&self, path: &Path) -> Result<Vec<TableScore>> {
        let file_name = display_name(path);
        let format = SourceFormat::from_file_name(&file_name)?;
        anyhow::ensure!(!format.is_spreadsheet(), "Table scores are only available for HTML files");

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let tables = HtmlDocument::parse(&String::from_utf8_lossy(&bytes))?.tables();
        Ok(self.html.locator().score_all(&tables))
    }
}

impl Default for IngestionService {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
