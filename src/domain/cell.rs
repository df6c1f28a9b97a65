//! Grid cell entities
//!
//! A `ClassifiedCell` is what the classifier produces for one raw source cell;
//! a `Cell` is the normalized record that ends up in the rectangular `Grid`.

use serde::{Deserialize, Serialize};

/// Semantic role of a grid position once it has been normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellRole {
    /// Playable square, accepts a letter
    White,
    /// Blocked square, may still carry a definition
    Black,
    /// Square holding definition text
    Clue,
}

impl CellRole {
    pub fn is_editable(self) -> bool {
        matches!(self, Self::White)
    }

    /// Roles that may carry definition text and therefore a direction
    pub fn carries_clue(self) -> bool {
        matches!(self, Self::Black | Self::Clue)
    }
}

/// Reading direction of a definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Outcome of the first-match-wins classification of one raw cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Blocked,
    Clue,
    NumberedWhite,
    PlainWhite,
}

impl CellKind {
    pub fn role(self) -> CellRole {
        match self {
            Self::Blocked => CellRole::Black,
            Self::Clue => CellRole::Clue,
            Self::NumberedWhite | Self::PlainWhite => CellRole::White,
        }
    }
}

/// One source cell after classification, before grid normalization.
///
/// Keeps the raw text and styling so the clue extractor and the
/// diagnostics sample can see exactly what the classifier saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCell {
    pub row: usize,
    pub col: usize,
    #[serde(rename = "text")]
    pub raw_text: String,
    pub style: String,
    #[serde(rename = "class")]
    pub classes: Vec<String>,
    #[serde(rename = "type")]
    pub kind: CellKind,
    pub number: Option<u32>,
    pub clue_direction: Option<ClueDirection>,
}

impl ClassifiedCell {
    pub fn role(&self) -> CellRole {
        self.kind.role()
    }
}

/// One normalized grid position.
///
/// Constructed only through the role-specific constructors so that a cell is
/// never numbered and clue-bearing at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub role: CellRole,
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue_direction: Option<ClueDirection>,
}

impl Cell {
    /// Playable cell; `text` is empty unless residual text is preserved
    pub fn white(row: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            role: CellRole::White,
            editable: CellRole::White.is_editable(),
            number: None,
            clue_direction: None,
        }
    }

    pub fn numbered(row: usize, col: usize, number: u32) -> Self {
        Self {
            number: Some(number),
            ..Self::white(row, col, String::new())
        }
    }

    pub fn blocked(row: usize, col: usize, direction: ClueDirection) -> Self {
        Self {
            row,
            col,
            text: String::new(),
            role: CellRole::Black,
            editable: CellRole::Black.is_editable(),
            number: None,
            clue_direction: Some(direction),
        }
    }

    pub fn clue(row: usize, col: usize, text: impl Into<String>, direction: ClueDirection) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            role: CellRole::Clue,
            editable: CellRole::Clue.is_editable(),
            number: None,
            clue_direction: Some(direction),
        }
    }

    pub fn is_white(&self) -> bool {
        self.role == CellRole::White
    }
}
