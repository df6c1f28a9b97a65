//! Property tests of the heuristic pipeline
use crossword_extractor_lib::domain::{CellKind, ClueCollection};
use crossword_extractor_lib::infrastructure::parsing::{
    CellClassifier, CellSignals, ClueExtractor, GridAssembler, ParsingConfig, SourceCell, SourceTable, TableLocator,
};
use proptest::prelude::*;

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("→ ville rose".to_string()),
        Just("↓ fleuve".to_string()),
        Just("<- île".to_string()),
        Just("capitale de pays".to_string()),
        "[0-9]{1,3}",
        "[A-Za-z]{0,2}",
        "[a-zé →↓<-]{0,24}",
    ]
}

fn source_cell() -> impl Strategy<Value = SourceCell> {
    (cell_text(), prop::bool::weighted(0.2)).prop_map(|(text, dark)| {
        let cell = SourceCell::new(text);
        if dark { cell.with_classes(&["xl97"]) } else { cell }
    })
}

fn ragged_rows() -> impl Strategy<Value = Vec<Vec<SourceCell>>> {
    prop::collection::vec(prop::collection::vec(source_cell(), 1..9), 0..8)
}

proptest! {
    #[test]
    fn clean_is_idempotent(text in "[ a-zA-Zé→↓←↑<>\\-↗↖↙↘\t\n]{0,40}") {
        let signals = CellSignals::default();
        let once = signals.clean_clue_text(&text);
        prop_assert_eq!(signals.clean_clue_text(&once), once);
    }

    #[test]
    fn regular_tables_score_at_least_fifty(
        rows in 3usize..12,
        width in 1usize..25,
        texts in prop::collection::vec(cell_text(), 300),
    ) {
        let table = SourceTable::new(
            (0..rows)
                .map(|r| (0..width).map(|c| SourceCell::new(texts[(r * width + c) % texts.len()].clone())).collect())
                .collect(),
        );
        let score = TableLocator::new(&ParsingConfig::default()).score(0, &table);
        prop_assert!(score.total >= 50);
    }

    #[test]
    fn short_tables_score_zero(rows in prop::collection::vec(prop::collection::vec(source_cell(), 1..10), 0..3)) {
        let score = TableLocator::new(&ParsingConfig::default()).score(0, &SourceTable::new(rows));
        prop_assert_eq!(score.total, 0);
    }

    #[test]
    fn assembled_grids_are_rectangular(rows in ragged_rows()) {
        let classified = CellClassifier::default().classify_table(&SourceTable::new(rows.clone()));
        let grid = GridAssembler::default().assemble(&classified).grid;

        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        prop_assert_eq!(grid.row_count(), rows.len());
        prop_assert!(grid.rows().iter().all(|row| row.len() == widest));
    }

    #[test]
    fn blocked_and_clue_cells_always_have_a_direction(rows in ragged_rows()) {
        let classified = CellClassifier::default().classify_table(&SourceTable::new(rows));
        for cell in classified.iter().flatten() {
            let needs_direction = matches!(cell.kind, CellKind::Blocked | CellKind::Clue);
            prop_assert_eq!(cell.clue_direction.is_some(), needs_direction);
        }
    }

    #[test]
    fn clue_numbers_follow_scan_order(rows in ragged_rows()) {
        let classified = CellClassifier::default().classify_table(&SourceTable::new(rows));
        let ClueCollection::StyledHtml { horizontal, vertical } = ClueExtractor::default().extract(&classified) else {
            unreachable!("styled extraction");
        };

        let mut all: Vec<_> = horizontal.iter().chain(&vertical).collect();
        all.sort_by_key(|clue| clue.number);
        for (expected, clue) in (1u32..).zip(&all) {
            prop_assert_eq!(clue.number, expected);
        }
        for pair in all.windows(2) {
            prop_assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }
    }
}
