//! Spreadsheet marker ingestion tests
use crossword_extractor_lib::domain::{MarkerCell, MarkerClue, SourceStrategy};
use crossword_extractor_lib::infrastructure::parsing::{
    MarkerIngestor, ParseContext, ParsingConfig, PuzzleIngestor, SheetMatrix,
};
use serde_json::json;

fn sheet(rows: &[&[&str]]) -> SheetMatrix {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|v| if v.is_empty() { None } else { Some((*v).to_string()) })
                .collect()
        })
        .collect()
}

#[test]
fn skipped_column_and_definition() {
    let puzzle = MarkerIngestor::default()
        .ingest(&sheet(&[&["", "x", "définition"]]), &ParseContext::new("grille.xlsx"))
        .unwrap();

    assert_eq!(puzzle.source, SourceStrategy::SpreadsheetMarker);
    assert_eq!(
        puzzle.grid.as_markers().unwrap(),
        &vec![vec![MarkerCell::Blank, MarkerCell::Blocked]]
    );
    assert_eq!(
        puzzle.clues.marker_entries(),
        &[MarkerClue {
            row: 0,
            col: 2,
            text: "définition".to_string()
        }]
    );
}

#[test]
fn rows_after_the_halting_row_are_absent() {
    let puzzle = MarkerIngestor::default()
        .ingest(
            &sheet(&[
                &["", "", "roi"],
                &["", "X", ""],
                &["x", "x", "x"],
                &["", "reine", ""],
            ]),
            &ParseContext::default(),
        )
        .unwrap();

    let grid = puzzle.grid.as_markers().unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[1], vec![MarkerCell::Blank, MarkerCell::Blank]);
    assert_eq!(puzzle.clues.total(), 1);
}

#[test]
fn configured_skip_marker() {
    let config = ParsingConfig {
        skip_marker: "-".to_string(),
        ..ParsingConfig::default()
    };
    let puzzle = MarkerIngestor::new(&config)
        .ingest(&sheet(&[&["-", "x", ""]]), &ParseContext::default())
        .unwrap();

    assert_eq!(
        puzzle.grid.as_markers().unwrap()[0],
        vec![MarkerCell::Blocked, MarkerCell::Blank]
    );
    assert_eq!(puzzle.clues.marker_entries()[0].text, "x");
}

#[test]
fn output_json_shape() {
    let puzzle = MarkerIngestor::default()
        .ingest(&sheet(&[&["", "x", "mot"]]), &ParseContext::default())
        .unwrap();

    let value = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(
        value,
        json!({
            "source": "spreadsheet_marker",
            "grid": [["", "#"]],
            "clues": {
                "source": "spreadsheet_marker",
                "entries": [{"row": 0, "col": 2, "text": "mot"}]
            }
        })
    );
}
