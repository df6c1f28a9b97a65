//! Rectangular grid and solution matrices

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Rectangular matrix of normalized cells.
///
/// Every row has the same length; the assembler is the only producer and pads
/// short rows before construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from rows that already share one length.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// "RxC" label used by diagnostics
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.row_count(), self.col_count())
    }

    /// Copy of the first `count` rows
    pub fn head(&self, count: usize) -> Self {
        Self {
            rows: self.rows.iter().take(count).cloned().collect(),
        }
    }

    /// Empty solution: `""` for white cells, `null` for everything else
    pub fn empty_solution(&self) -> Solution {
        Solution(
            self.rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.is_white().then(String::new))
                        .collect()
                })
                .collect(),
        )
    }
}

/// Grid-shaped answer matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution(Vec<Vec<Option<String>>>);

impl Solution {
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.0
    }
}
