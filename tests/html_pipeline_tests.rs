//! End-to-end tests of the styled HTML ingestion path
use crossword_extractor_lib::domain::{CellKind, CellRole, ClueDirection, ParsedPuzzle, SourceStrategy};
use crossword_extractor_lib::infrastructure::parsing::{
    CellClassifier, ClassificationRule, HtmlDocument, ParseContext, ParsingConfig, ParsingError, PuzzleIngestor,
    SourceCell, StyledHtmlParser, TableLocator,
};
use rstest::rstest;

fn row(cells: &[&str]) -> String {
    let cells: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{cells}</tr>")
}

fn table(rows: &[Vec<&str>]) -> String {
    let rows: String = rows.iter().map(|r| row(r)).collect();
    format!("<table>{rows}</table>")
}

fn parse(html: &str) -> Result<ParsedPuzzle, ParsingError> {
    StyledHtmlParser::default().ingest(html, &ParseContext::new("test.html"))
}

#[test]
fn capital_definition_becomes_one_horizontal_clue() {
    let mut rows = vec![vec![""; 5]; 5];
    rows[0][0] = "→ capitale de la France";
    let html = format!("<html><body>{}</body></html>", table(&rows));

    let puzzle = parse(&html).unwrap();
    let grid = puzzle.grid.as_cells().unwrap();
    let cell = grid.get(0, 0).unwrap();
    assert_eq!(cell.role, CellRole::Black);
    assert_eq!(cell.clue_direction, Some(ClueDirection::Horizontal));
    assert!(!cell.editable);

    let horizontal = puzzle.clues.horizontal();
    assert_eq!(horizontal.len(), 1);
    assert_eq!(horizontal[0].clue, "capitale de la France");
    assert_eq!(horizontal[0].number, 1);
    assert!(puzzle.clues.vertical().is_empty());
}

#[test]
fn small_tables_are_never_selected() {
    let header = table(&[vec!["→ a", "→ b", "→ c", "→ d", "→ e"], vec!["→ f"; 5]]);
    let grid = table(&vec![vec!["", "", "", "", ""]; 4]);
    let html = format!("{header}{grid}");

    let document = HtmlDocument::parse(&html).unwrap();
    let tables = document.tables();
    let selection = TableLocator::new(&ParsingConfig::default()).locate(&tables).unwrap();

    assert_eq!(selection.scores[0].total, 0);
    assert_eq!(selection.index, 1);
}

#[test]
fn ties_keep_the_first_table() {
    let same = table(&vec![vec!["", "", "", "", ""]; 3]);
    let html = format!("{same}{same}");
    let tables = HtmlDocument::parse(&html).unwrap().tables();
    let selection = TableLocator::new(&ParsingConfig::default()).locate(&tables).unwrap();
    assert_eq!(selection.index, 0);
}

#[rstest]
#[case("<p>aucune grille</p>", ParsingError::NoTableFound)]
#[case(&table(&[vec!["a", "b"], vec!["c", "d"]]), ParsingError::NoCandidateTable { tables_scored: 1 })]
fn structural_failures(#[case] html: &str, #[case] expected: ParsingError) {
    let err = parse(html).unwrap_err();
    assert_eq!(err, expected);
    assert!(err.is_user_facing());
}

#[test]
fn styled_cells_and_ragged_rows() {
    let html = r#"
        <table>
          <tr><td style="BACKGROUND-COLOR: #000">X</td><td>1</td><td></td><td></td><td></td><td></td></tr>
          <tr><td class="xl96 other">↓ petit cours d'eau</td><td></td><td></td><td></td><td></td></tr>
          <tr><td>2</td><td>fleuve qui traverse Paris</td><td></td><td></td><td></td><td></td></tr>
          <tr></tr>
          <tr><td>100</td><td>AB</td><td></td><td></td><td></td><td></td></tr>
        </table>
    "#;

    let puzzle = parse(html).unwrap();
    assert_eq!(puzzle.source, SourceStrategy::StyledHtml);

    let grid = puzzle.grid.as_cells().unwrap();
    assert_eq!((grid.row_count(), grid.col_count()), (4, 6));
    assert!(grid.rows().iter().all(|r| r.len() == 6));

    assert_eq!(grid.get(0, 0).unwrap().role, CellRole::Black);
    assert_eq!(grid.get(0, 1).unwrap().number, Some(1));
    assert_eq!(grid.get(1, 5).unwrap().role, CellRole::White);
    assert_eq!(grid.get(2, 1).unwrap().role, CellRole::Clue);
    // out of range numbers are plain white
    assert_eq!(grid.get(3, 0).unwrap().number, None);

    let numbers: Vec<_> = puzzle
        .clues
        .horizontal()
        .iter()
        .chain(puzzle.clues.vertical())
        .map(|c| (c.number, c.row, c.col))
        .collect();
    assert_eq!(numbers, vec![(1, 0, 0), (3, 2, 1), (2, 1, 0)]);
    assert_eq!(puzzle.clues.vertical()[0].clue, "petit cours d'eau");
    assert_eq!(puzzle.clues.vertical()[0].number, 2);
}

#[test]
fn custom_rule_order_changes_the_outcome() {
    fn always_clue(_: &CellClassifier, cell: &SourceCell) -> bool {
        !cell.text.is_empty()
    }

    let config = ParsingConfig::default();
    let rule = ClassificationRule::new("anything_with_text", CellKind::Clue, always_clue);
    let classifier = CellClassifier::with_rules(&config, vec![rule]);
    let parser = StyledHtmlParser::with_classifier(&config, classifier);

    let mut rows = vec![vec![""; 5]; 3];
    rows[1][1] = "7";
    let puzzle = parser.ingest(&table(&rows), &ParseContext::default()).unwrap();
    let cell = puzzle.grid.as_cells().unwrap().get(1, 1).unwrap();
    assert_eq!(cell.role, CellRole::Clue);
    assert_eq!(puzzle.clues.horizontal()[0].clue, "7");
}

#[test]
fn output_json_shape() {
    let mut rows = vec![vec![""; 5]; 3];
    rows[0][0] = "↓ mer";
    let puzzle = parse(&table(&rows)).unwrap();

    let value = serde_json::to_value(&puzzle).unwrap();
    assert_eq!(value["source"], "styled_html");
    assert_eq!(value["clues"]["source"], "styled_html");
    assert_eq!(value["clues"]["vertical"][0]["clue"], "mer");
    assert_eq!(value["grid"][0][0]["role"], "black");
    assert_eq!(value["solution"][0][1], "");
    assert_eq!(value["raw_data"]["dimensions"], "3x5");
}

#[test]
fn line_breaks_do_not_split_words() {
    let mut rows = vec![vec![""; 5]; 3];
    rows[1][2] = "la<br>grande<br>mer";
    let puzzle = parse(&table(&rows)).unwrap();

    let cell = puzzle.grid.as_cells().unwrap().get(1, 2).unwrap();
    assert_eq!(cell.role, CellRole::White);
    assert!(cell.editable);
    assert_eq!(puzzle.clues.total(), 0);
}
