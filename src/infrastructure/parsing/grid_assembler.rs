//! Normalizes classified rows into a rectangular grid

use tracing::debug;

use super::config::ParsingConfig;
use super::signals::CellSignals;
use crate::domain::{Cell, CellKind, ClassifiedCell, Grid, RawDiagnostics};

/// Grid plus the diagnostics recorded while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledGrid {
    pub grid: Grid,
    pub diagnostics: RawDiagnostics,
}

#[derive(Debug, Clone)]
pub struct GridAssembler {
    signals: CellSignals,
    sample_rows: usize,
    preserve_residual_text: bool,
}

impl GridAssembler {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            signals: CellSignals::new(config),
            sample_rows: config.diagnostic_sample_rows,
            preserve_residual_text: config.preserve_residual_text,
        }
    }

    /// Pad every row on the right with white cells up to the widest row.
    pub fn assemble(&self, rows: &[Vec<ClassifiedCell>]) -> AssembledGrid {
        let row_count = rows.len();
        let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);

        let normalized: Vec<Vec<Cell>> = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let mut normalized: Vec<Cell> = cells.iter().map(|cell| self.normalize(cell)).collect();
                normalized.extend((cells.len()..col_count).map(|col| Cell::white(row, col, "")));
                normalized
            })
            .collect();

        let grid = Grid::from_rows(normalized).unwrap_or_default();
        debug!("Assembled {}x{} grid", row_count, col_count);

        AssembledGrid {
            grid,
            diagnostics: RawDiagnostics {
                dimensions: format!("{row_count}x{col_count}"),
                total_cells: row_count * col_count,
                grid_data: rows.iter().take(self.sample_rows).cloned().collect(),
            },
        }
    }

    fn normalize(&self, cell: &ClassifiedCell) -> Cell {
        let direction = cell.clue_direction.unwrap_or_default();
        match (cell.kind, cell.number) {
            (CellKind::Blocked, _) => Cell::blocked(cell.row, cell.col, direction),
            (CellKind::Clue, _) => Cell::clue(
                cell.row,
                cell.col,
                self.signals.clean_clue_text(&cell.raw_text),
                direction,
            ),
            (CellKind::NumberedWhite, Some(number)) => Cell::numbered(cell.row, cell.col, number),
            (CellKind::NumberedWhite | CellKind::PlainWhite, _) => {
                let text = if self.preserve_residual_text {
                    cell.raw_text.clone()
                } else {
                    String::new()
                };
                Cell::white(cell.row, cell.col, text)
            }
        }
    }
}

impl Default for GridAssembler {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}
