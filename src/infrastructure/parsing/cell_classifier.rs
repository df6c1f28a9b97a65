//! Cell role classification
//!
//! Roles are assigned by an ordered list of rules; the first rule whose
//! predicate matches decides the kind, and `PlainWhite` is the fallback.
//! Rule order is observable through [`CellClassifier::rules`].

use std::fmt;

use super::config::{ClassificationThresholds, ParsingConfig};
use super::document::{SourceCell, SourceTable};
use super::signals::CellSignals;
use crate::domain::{CellKind, ClassifiedCell};

pub type RulePredicate = fn(&CellClassifier, &SourceCell) -> bool;

/// Named predicate yielding one cell kind
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub kind: CellKind,
    predicate: RulePredicate,
}

impl ClassificationRule {
    pub const fn new(name: &'static str, kind: CellKind, predicate: RulePredicate) -> Self {
        Self { name, kind, predicate }
    }

    pub fn matches(&self, classifier: &CellClassifier, cell: &SourceCell) -> bool {
        (self.predicate)(classifier, cell)
    }
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Dark fill by class or style, or a long text carrying an arrow
pub const BLOCKED_RULE: ClassificationRule =
    ClassificationRule::new("dark_fill_or_arrow_definition", CellKind::Blocked, |classifier, cell| {
        classifier.signals.is_dark_styled(cell)
            || (cell.text.chars().count() >= classifier.thresholds.blocked_arrow_min_chars
                && classifier.signals.has_arrow(&cell.text))
    });

pub const CLUE_RULE: ClassificationRule =
    ClassificationRule::new("definition_text", CellKind::Clue, |classifier, cell| {
        classifier.is_clue_text(&cell.text)
    });

pub const NUMBER_RULE: ClassificationRule =
    ClassificationRule::new("grid_number", CellKind::NumberedWhite, |classifier, cell| {
        classifier.parse_cell_number(&cell.text).is_some()
    });

/// Assigns a role to each raw cell
#[derive(Debug, Clone)]
pub struct CellClassifier {
    signals: CellSignals,
    thresholds: ClassificationThresholds,
    rules: Vec<ClassificationRule>,
}

impl CellClassifier {
    pub fn new(config: &ParsingConfig) -> Self {
        Self::with_rules(config, Self::default_rules())
    }

    /// Classifier with a custom rule order
    pub fn with_rules(config: &ParsingConfig, rules: Vec<ClassificationRule>) -> Self {
        Self {
            signals: CellSignals::new(config),
            thresholds: config.classification.clone(),
            rules,
        }
    }

    pub fn default_rules() -> Vec<ClassificationRule> {
        vec![BLOCKED_RULE, CLUE_RULE, NUMBER_RULE]
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn signals(&self) -> &CellSignals {
        &self.signals
    }

    /// Definition-like text: an arrow, or a short sentence of several words
    pub fn is_clue_text(&self, text: &str) -> bool {
        let chars = text.chars().count();
        if text.is_empty() || chars < self.thresholds.clue_min_chars {
            return false;
        }
        if self.signals.has_arrow(text) {
            return true;
        }
        text.split_whitespace().count() >= self.thresholds.sentence_min_words
            && chars >= self.thresholds.sentence_min_chars
    }

    /// Base-10 cell number within the configured range
    pub fn parse_cell_number(&self, text: &str) -> Option<u32> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<u32>()
            .ok()
            .filter(|n| (self.thresholds.min_cell_number..=self.thresholds.max_cell_number).contains(n))
    }

    pub fn resolve_kind(&self, cell: &SourceCell) -> CellKind {
        self.rules
            .iter()
            .find(|rule| rule.matches(self, cell))
            .map_or(CellKind::PlainWhite, |rule| rule.kind)
    }

    pub fn classify(&self, row: usize, col: usize, cell: &SourceCell) -> ClassifiedCell {
        let mut kind = self.resolve_kind(cell);
        let mut number = None;
        let mut clue_direction = None;

        match kind {
            CellKind::Blocked | CellKind::Clue => {
                clue_direction = Some(self.signals.detect_direction(&cell.text));
            }
            CellKind::NumberedWhite => match self.parse_cell_number(&cell.text) {
                Some(n) => number = Some(n),
                // a custom rule matched text that is not a cell number
                None => kind = CellKind::PlainWhite,
            },
            CellKind::PlainWhite => {}
        }

        ClassifiedCell {
            row,
            col,
            raw_text: cell.text.clone(),
            style: cell.style.clone(),
            classes: cell.classes.clone(),
            kind,
            number,
            clue_direction,
        }
    }

    /// Classify every non-empty row; row indices are contiguous over the kept rows.
    pub fn classify_table(&self, table: &SourceTable) -> Vec<Vec<ClassifiedCell>> {
        table
            .non_empty_rows()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| self.classify(row, col, cell))
                    .collect()
            })
            .collect()
    }
}

impl Default for CellClassifier {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClueDirection;
    use rstest::rstest;

    #[rstest]
    #[case::dark_class(SourceCell::new("").with_classes(&["xl98"]), CellKind::Blocked)]
    #[case::dark_style(SourceCell::new("A").with_style("background:#333333"), CellKind::Blocked)]
    #[case::long_arrow_text(SourceCell::new("→ capitale"), CellKind::Blocked)]
    #[case::short_arrow_text(SourceCell::new("a→"), CellKind::PlainWhite)]
    #[case::three_char_arrow_text(SourceCell::new("ab↓"), CellKind::Clue)]
    #[case::sentence(SourceCell::new("capitale de pays"), CellKind::Clue)]
    #[case::short_sentence(SourceCell::new("la mer"), CellKind::PlainWhite)]
    #[case::single_long_word(SourceCell::new("anticonstitutionnel"), CellKind::PlainWhite)]
    #[case::number(SourceCell::new("12"), CellKind::NumberedWhite)]
    #[case::zero(SourceCell::new("0"), CellKind::PlainWhite)]
    #[case::too_large(SourceCell::new("100"), CellKind::PlainWhite)]
    #[case::signed(SourceCell::new("-4"), CellKind::PlainWhite)]
    #[case::empty(SourceCell::new(""), CellKind::PlainWhite)]
    #[case::letter(SourceCell::new("A"), CellKind::PlainWhite)]
    fn test_resolve_kind(#[case] cell: SourceCell, #[case] expected: CellKind) {
        assert_eq!(CellClassifier::default().resolve_kind(&cell), expected);
    }

    #[test]
    fn test_default_rule_order() {
        let classifier = CellClassifier::default();
        let names: Vec<_> = classifier.rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["dark_fill_or_arrow_definition", "definition_text", "grid_number"]);
    }

    #[test]
    fn test_blocked_wins_over_number() {
        let classifier = CellClassifier::default();
        let cell = classifier.classify(0, 0, &SourceCell::new("12").with_classes(&["xl95"]));
        assert_eq!(cell.kind, CellKind::Blocked);
        assert!(cell.number.is_none());
        assert_eq!(cell.clue_direction, Some(ClueDirection::Horizontal));
    }

    #[test]
    fn test_custom_rule_order_changes_precedence() {
        let config = ParsingConfig::default();
        let classifier = CellClassifier::with_rules(&config, vec![NUMBER_RULE, BLOCKED_RULE]);
        let cell = classifier.classify(0, 0, &SourceCell::new("12").with_classes(&["xl95"]));
        assert_eq!(cell.kind, CellKind::NumberedWhite);
        assert_eq!(cell.number, Some(12));
    }

    #[test]
    fn test_numbered_cell_extracts_number() {
        let cell = CellClassifier::default().classify(3, 4, &SourceCell::new("07"));
        assert_eq!(cell.kind, CellKind::NumberedWhite);
        assert_eq!(cell.number, Some(7));
        assert!(cell.clue_direction.is_none());
        assert_eq!((cell.row, cell.col), (3, 4));
    }

    #[test]
    fn test_direction_is_always_set_on_clue_bearing_cells() {
        let classifier = CellClassifier::default();
        let vertical = classifier.classify(0, 0, &SourceCell::new("fleuve côtier ↓"));
        let no_text = classifier.classify(0, 1, &SourceCell::new("").with_style("background:black"));

        assert_eq!(vertical.clue_direction, Some(ClueDirection::Vertical));
        assert_eq!(no_text.clue_direction, Some(ClueDirection::Horizontal));
    }

    #[test]
    fn test_classify_table_skips_empty_rows() {
        let table = SourceTable::new(vec![
            vec![SourceCell::new("1"), SourceCell::new("")],
            vec![],
            vec![SourceCell::new("capitale de pays")],
        ]);
        let rows = CellClassifier::default().classify_table(&table);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].row, 1);
        assert_eq!(rows[1][0].kind, CellKind::Clue);
    }
}
