//! Clue records and the clue collection shared by both ingestion paths

use serde::{Deserialize, Serialize};

/// Definition extracted from a styled HTML grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Sequential number, row-major, shared across both directions
    pub number: u32,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    /// Placeholder answer length; not traced from white-cell runs
    pub length: usize,
}

/// Definition recorded by the spreadsheet marker path: raw text and origin only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerClue {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// Clues of one puzzle, tagged by the ingestion strategy that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ClueCollection {
    StyledHtml {
        horizontal: Vec<Clue>,
        vertical: Vec<Clue>,
    },
    SpreadsheetMarker {
        entries: Vec<MarkerClue>,
    },
}

impl ClueCollection {
    pub fn total(&self) -> usize {
        match self {
            Self::StyledHtml { horizontal, vertical } => horizontal.len() + vertical.len(),
            Self::SpreadsheetMarker { entries } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn horizontal(&self) -> &[Clue] {
        match self {
            Self::StyledHtml { horizontal, .. } => horizontal,
            Self::SpreadsheetMarker { .. } => &[],
        }
    }

    pub fn vertical(&self) -> &[Clue] {
        match self {
            Self::StyledHtml { vertical, .. } => vertical,
            Self::SpreadsheetMarker { .. } => &[],
        }
    }

    pub fn marker_entries(&self) -> &[MarkerClue] {
        match self {
            Self::SpreadsheetMarker { entries } => entries,
            Self::StyledHtml { .. } => &[],
        }
    }
}
