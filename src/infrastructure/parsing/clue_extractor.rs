//! Definition extraction from classified cells

use tracing::debug;

use super::config::ParsingConfig;
use super::signals::CellSignals;
use crate::domain::{ClassifiedCell, Clue, ClueCollection, ClueDirection};

/// Collects definitions in row-major order with one counter for both directions
#[derive(Debug, Clone)]
pub struct ClueExtractor {
    signals: CellSignals,
    placeholder_length: usize,
}

impl ClueExtractor {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            signals: CellSignals::new(config),
            placeholder_length: config.placeholder_answer_length,
        }
    }

    pub fn extract(&self, rows: &[Vec<ClassifiedCell>]) -> ClueCollection {
        let mut horizontal = Vec::new();
        let mut vertical = Vec::new();
        let mut next_number = 1;

        for cell in rows.iter().flatten() {
            if !cell.role().carries_clue() || cell.raw_text.is_empty() {
                continue;
            }
            let text = self.signals.clean_clue_text(&cell.raw_text);
            if text.is_empty() {
                continue;
            }

            let clue = Clue {
                number: next_number,
                clue: text,
                row: cell.row,
                col: cell.col,
                length: self.placeholder_length,
            };
            next_number += 1;

            match cell.clue_direction.unwrap_or_default() {
                ClueDirection::Horizontal => horizontal.push(clue),
                ClueDirection::Vertical => vertical.push(clue),
            }
        }

        debug!(
            "Extracted {} horizontal and {} vertical clues",
            horizontal.len(),
            vertical.len()
        );
        ClueCollection::StyledHtml { horizontal, vertical }
    }
}

impl Default for ClueExtractor {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parsing::cell_classifier::CellClassifier;
    use crate::infrastructure::parsing::document::{SourceCell, SourceTable};

    fn extract(rows: Vec<Vec<SourceCell>>) -> ClueCollection {
        let classified = CellClassifier::default().classify_table(&SourceTable::new(rows));
        ClueExtractor::default().extract(&classified)
    }

    #[test]
    fn test_shared_counter_across_directions() {
        let clues = extract(vec![
            vec![SourceCell::new("→ ville rose"), SourceCell::new("↓ fleuve côtier")],
            vec![SourceCell::new(""), SourceCell::new("-> île grecque")],
        ]);

        let horizontal: Vec<_> = clues.horizontal().iter().map(|c| (c.number, c.clue.as_str())).collect();
        let vertical: Vec<_> = clues.vertical().iter().map(|c| (c.number, c.clue.as_str())).collect();

        assert_eq!(horizontal, vec![(1, "ville rose"), (3, "île grecque")]);
        assert_eq!(vertical, vec![(2, "fleuve côtier")]);
    }

    #[test]
    fn test_blocked_cells_without_text_are_skipped() {
        let clues = extract(vec![vec![
            SourceCell::new("").with_classes(&["xl99"]),
            SourceCell::new("→↓").with_classes(&["xl99"]),
            SourceCell::new("AB").with_classes(&["xl99"]),
        ]]);

        assert_eq!(clues.total(), 1);
        let clue = &clues.horizontal()[0];
        assert_eq!((clue.number, clue.clue.as_str(), clue.col), (1, "AB", 2));
    }

    #[test]
    fn test_placeholder_length() {
        let config = ParsingConfig {
            placeholder_answer_length: 8,
            ..ParsingConfig::default()
        };
        let classified =
            CellClassifier::new(&config).classify_table(&SourceTable::new(vec![vec![SourceCell::new("capitale de pays")]]));
        let clues = ClueExtractor::new(&config).extract(&classified);
        assert_eq!(clues.horizontal()[0].length, 8);
    }

    #[test]
    fn test_white_cells_never_yield_clues() {
        let clues = extract(vec![vec![SourceCell::new("12"), SourceCell::new("A"), SourceCell::new("")]]);
        assert!(clues.is_empty());
    }
}
