//! Front-end neutral view of tabular source documents
//!
//! `HtmlDocument` turns markup into `SourceTable`s; spreadsheets arrive as a
//! `SheetMatrix` of raw values.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

use super::{ParsingError, ParsingResult};

/// Raw cell as read from the source: text, lower-cased inline style, classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceCell {
    pub text: String,
    pub style: String,
    pub classes: Vec<String>,
}

impl SourceCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_lowercase();
        self
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.classes = classes.iter().map(|c| (*c).to_string()).collect();
        self
    }
}

/// One table: rows of cells, rows possibly empty or ragged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceTable {
    pub rows: Vec<Vec<SourceCell>>,
}

impl SourceTable {
    pub fn new(rows: Vec<Vec<SourceCell>>) -> Self {
        Self { rows }
    }

    /// Number of rows including rows without cells
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows that hold at least one cell, in source order
    pub fn non_empty_rows(&self) -> impl Iterator<Item = &Vec<SourceCell>> {
        self.rows.iter().filter(|row| !row.is_empty())
    }

    pub fn cells(&self) -> impl Iterator<Item = &SourceCell> {
        self.rows.iter().flatten()
    }
}

/// Raw spreadsheet values, row-major, anchored at A1; `None` is a missing value
pub type SheetMatrix = Vec<Vec<Option<String>>>;

/// Parsed HTML document exposing its tables
pub struct HtmlDocument {
    html: Html,
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
}

impl HtmlDocument {
    /// Parse markup; html5ever recovers from malformed input, so only
    /// selector compilation can fail here.
    pub fn parse(content: &str) -> ParsingResult<Self> {
        Ok(Self {
            html: Html::parse_document(content),
            table_selector: compile_selector("table")?,
            row_selector: compile_selector("tr")?,
            cell_selector: compile_selector("td, th")?,
        })
    }

    /// Every `<table>` in document order. Rows and cells are matched as
    /// descendants, so nested tables also contribute to their parent.
    pub fn tables(&self) -> Vec<SourceTable> {
        let tables: Vec<SourceTable> = self
            .html
            .select(&self.table_selector)
            .map(|table| self.read_table(table))
            .collect();
        debug!("Found {} tables in document", tables.len());
        tables
    }

    fn read_table(&self, table: ElementRef<'_>) -> SourceTable {
        let rows = table
            .select(&self.row_selector)
            .map(|row| row.select(&self.cell_selector).map(read_cell).collect())
            .collect();
        SourceTable::new(rows)
    }
}

fn read_cell(cell: ElementRef<'_>) -> SourceCell {
    let text = cell
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<String>();

    SourceCell {
        text,
        style: cell.value().attr("style").unwrap_or_default().to_lowercase(),
        classes: cell
            .value()
            .attr("class")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    }
}

fn compile_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}
