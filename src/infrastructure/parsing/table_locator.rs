//! Candidate table scoring
//!
//! Additive, explainable scoring of every table in a document; the highest
//! score wins and ties keep the first table seen.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use super::config::{ParsingConfig, ScoringWeights};
use super::document::SourceTable;
use super::signals::CellSignals;
use super::{ParsingError, ParsingResult};

/// Score breakdown of one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableScore {
    pub index: usize,
    pub total: u32,
    pub rows: usize,
    pub distinct_row_lengths: usize,
    pub average_cells: f64,
    pub arrow_cells: usize,
    pub blocked_cells: usize,
    pub total_cells: usize,
}

impl TableScore {
    fn disqualified(index: usize, rows: usize) -> Self {
        Self {
            index,
            total: 0,
            rows,
            distinct_row_lengths: 0,
            average_cells: 0.0,
            arrow_cells: 0,
            blocked_cells: 0,
            total_cells: 0,
        }
    }

    pub fn blocked_ratio(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.blocked_cells as f64 / self.total_cells as f64
        }
    }
}

/// Winning table and the scores of all tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSelection {
    pub index: usize,
    pub scores: Vec<TableScore>,
}

impl TableSelection {
    pub fn winning_score(&self) -> Option<&TableScore> {
        self.scores.get(self.index)
    }
}

/// Scores tables as crossword-grid candidates
#[derive(Debug, Clone)]
pub struct TableLocator {
    signals: CellSignals,
    weights: ScoringWeights,
}

impl TableLocator {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            signals: CellSignals::new(config),
            weights: config.scoring.clone(),
        }
    }

    /// Pure function of the table contents
    pub fn score(&self, index: usize, table: &SourceTable) -> TableScore {
        let weights = &self.weights;
        let rows = table.row_count();
        if rows < weights.min_rows {
            return TableScore::disqualified(index, rows);
        }

        let cell_counts: Vec<usize> = table.non_empty_rows().map(Vec::len).collect();
        if cell_counts.is_empty() {
            return TableScore::disqualified(index, rows);
        }

        let mut total = 0;

        let distinct_row_lengths = cell_counts.iter().collect::<HashSet<_>>().len();
        if distinct_row_lengths <= weights.max_distinct_row_lengths {
            total += weights.regularity_bonus;
        }

        let total_cells: usize = cell_counts.iter().sum();
        let average_cells = total_cells as f64 / cell_counts.len() as f64;
        if (weights.min_average_cells..=weights.max_average_cells).contains(&average_cells) {
            total += weights.size_bonus;
        }

        let mut arrow_cells = 0;
        let mut blocked_cells = 0;
        for cell in table.cells() {
            if !cell.text.is_empty() && self.signals.has_arrow(&cell.text) {
                arrow_cells += 1;
                total += weights.arrow_bonus_per_cell;
            }
            if self.signals.is_dark_styled(cell) {
                blocked_cells += 1;
                total += weights.blocked_bonus_per_cell;
            }
        }

        let mut score = TableScore {
            index,
            total,
            rows,
            distinct_row_lengths,
            average_cells,
            arrow_cells,
            blocked_cells,
            total_cells,
        };
        if (weights.min_blocked_ratio..=weights.max_blocked_ratio).contains(&score.blocked_ratio()) {
            score.total += weights.density_bonus;
        }
        score
    }

    pub fn score_all(&self, tables: &[SourceTable]) -> Vec<TableScore> {
        tables
            .iter()
            .enumerate()
            .map(|(index, table)| self.score(index, table))
            .collect()
    }

    /// Pick the best table; a table must score above zero to qualify.
    pub fn locate(&self, tables: &[SourceTable]) -> ParsingResult<TableSelection> {
        if tables.is_empty() {
            return Err(ParsingError::NoTableFound);
        }

        let scores = self.score_all(tables);
        let mut best: Option<(usize, u32)> = None;
        for score in &scores {
            debug!(
                "Table {}: score {} ({} rows, avg {:.1} cells, {} arrows, {} blocked)",
                score.index, score.total, score.rows, score.average_cells, score.arrow_cells, score.blocked_cells
            );
            if score.total > best.map_or(0, |(_, total)| total) {
                best = Some((score.index, score.total));
            }
        }

        match best {
            Some((index, total)) => {
                debug!("Selected table {} with score {}", index, total);
                Ok(TableSelection { index, scores })
            }
            None => {
                warn!("No table scored above zero out of {}", tables.len());
                Err(ParsingError::NoCandidateTable {
                    tables_scored: tables.len(),
                })
            }
        }
    }
}

impl Default for TableLocator {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::document::SourceCell;

    fn table(rows: usize, cols: usize) -> SourceTable {
        SourceTable::new(vec![vec![SourceCell::new(""); cols]; rows])
    }

    #[test]
    fn test_short_table_scores_zero() {
        let locator = TableLocator::default();
        assert_eq!(locator.score(0, &table(2, 10)).total, 0);
    }

    #[test]
    fn test_regular_mid_sized_table() {
        let locator = TableLocator::default();
        let score = locator.score(0, &table(6, 8));

        // regularity + size, no arrows, no blocked cells
        assert_eq!(score.total, 80);
        assert_eq!(score.distinct_row_lengths, 1);
        assert!((score.average_cells - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_arrow_and_blocked_bonuses() {
        let mut source = table(4, 5);
        source.rows[0][0] = SourceCell::new("→ capitale").with_classes(&["xl96"]);
        source.rows[1][1] = SourceCell::new("").with_style("background:#000000");
        source.rows[2][2] = SourceCell::new("↓ fleuve");

        let score = TableLocator::default().score(0, &source);
        assert_eq!(score.arrow_cells, 2);
        assert_eq!(score.blocked_cells, 2);
        // 50 + 30 + 2*10 + 2*5, ratio 0.1 earns the density bonus
        assert_eq!(score.total, 130);
    }

    #[test]
    fn test_class_and_style_count_a_cell_once() {
        let mut source = table(3, 1);
        source.rows[0][0] = SourceCell::new("").with_classes(&["xl95"]).with_style("background:black");

        let score = TableLocator::default().score(0, &source);
        assert_eq!(score.blocked_cells, 1);
    }

    #[test]
    fn test_ragged_table_loses_regularity() {
        let source = SourceTable::new(vec![
            vec![SourceCell::new(""); 5],
            vec![SourceCell::new(""); 6],
            vec![SourceCell::new(""); 7],
        ]);
        let score = TableLocator::default().score(0, &source);
        assert_eq!(score.distinct_row_lengths, 3);
        assert_eq!(score.total, 30);
    }

    #[test]
    fn test_locate_prefers_highest_then_first() {
        let locator = TableLocator::default();
        let tables = vec![table(2, 5), table(5, 6), table(5, 6), table(3, 1)];

        let selection = locator.locate(&tables).unwrap();
        assert_eq!(selection.index, 1);
        assert_eq!(selection.scores.len(), 4);
        assert_eq!(selection.winning_score().map(|s| s.total), Some(80));
    }

    #[test]
    fn test_locate_errors() {
        let locator = TableLocator::default();
        assert_eq!(locator.locate(&[]), Err(ParsingError::NoTableFound));
        assert_eq!(
            locator.locate(&[table(1, 4), table(2, 4)]),
            Err(ParsingError::NoCandidateTable { tables_scored: 2 })
        );
    }
}
