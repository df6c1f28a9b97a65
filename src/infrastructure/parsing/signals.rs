//! Visual and textual cues shared by the table locator, the classifier and
//! the clue extractor: arrow glyphs, dark-fill markers and text cleaning.

use once_cell::sync::Lazy;
use regex::Regex;

use super::config::ParsingConfig;
use super::document::SourceCell;
use crate::domain::ClueDirection;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// Compiled view of the glyph and style lists of a `ParsingConfig`
#[derive(Debug, Clone)]
pub struct CellSignals {
    arrow_glyphs: Vec<String>,
    horizontal_arrows: Vec<String>,
    vertical_arrows: Vec<String>,
    dark_fill_classes: Vec<String>,
    dark_background_colors: Vec<String>,
}

impl CellSignals {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            arrow_glyphs: non_empty(&config.arrow_glyphs),
            horizontal_arrows: non_empty(&config.horizontal_arrows),
            vertical_arrows: non_empty(&config.vertical_arrows),
            dark_fill_classes: lowered(&config.dark_fill_classes),
            dark_background_colors: lowered(&config.dark_background_colors),
        }
    }

    pub fn has_arrow(&self, text: &str) -> bool {
        self.arrow_glyphs.iter().any(|glyph| text.contains(glyph.as_str()))
    }

    /// Class list mentions one of the known dark-fill export classes
    pub fn is_dark_fill(&self, classes: &[String]) -> bool {
        if classes.is_empty() {
            return false;
        }
        let joined = classes.join(" ").to_lowercase();
        self.dark_fill_classes.iter().any(|class| joined.contains(class.as_str()))
    }

    /// Inline style sets a black or near-black background
    pub fn has_dark_background(&self, style: &str) -> bool {
        let style = style.to_lowercase();
        style.contains("background")
            && self.dark_background_colors.iter().any(|color| style.contains(color.as_str()))
    }

    /// Styling alone marks the cell as blocked
    pub fn is_dark_styled(&self, cell: &SourceCell) -> bool {
        self.is_dark_fill(&cell.classes) || self.has_dark_background(&cell.style)
    }

    /// Horizontal glyphs are checked first; no glyph reads across.
    pub fn detect_direction(&self, text: &str) -> ClueDirection {
        if self.horizontal_arrows.iter().any(|glyph| text.contains(glyph.as_str())) {
            ClueDirection::Horizontal
        } else if self.vertical_arrows.iter().any(|glyph| text.contains(glyph.as_str())) {
            ClueDirection::Vertical
        } else {
            ClueDirection::default()
        }
    }

    /// Strip arrow glyphs and collapse whitespace.
    ///
    /// Runs to a fixpoint, so `clean(clean(t)) == clean(t)` holds even when
    /// removing one glyph joins the halves of another.
    pub fn clean_clue_text(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let mut next = current.clone();
            for glyph in &self.arrow_glyphs {
                if next.contains(glyph.as_str()) {
                    next = next.replace(glyph.as_str(), "");
                }
            }
            let next = WHITESPACE_RUN.replace_all(&next, " ").trim().to_string();
            if next == current {
                return next;
            }
            current = next;
        }
    }
}

impl Default for CellSignals {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

fn non_empty(values: &[String]) -> Vec<String> {
    values.iter().filter(|v| !v.is_empty()).cloned().collect()
}

fn lowered(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_lowercase())
        .collect()
}
