//! Parsing configuration for grid inference
//!
//! Centralized configuration for the glyphs, style markers and scoring
//! weights used by the heuristic pipeline.

use serde::{Deserialize, Serialize};

use super::ParsingError;

/// Main parsing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Every glyph that marks embedded definition text
    pub arrow_glyphs: Vec<String>,

    /// Glyphs that make a definition read across (checked first)
    pub horizontal_arrows: Vec<String>,

    /// Glyphs that make a definition read down
    pub vertical_arrows: Vec<String>,

    /// Spreadsheet export classes that mean a dark fill (substring match)
    pub dark_fill_classes: Vec<String>,

    /// Colors that mean a dark fill when the inline style sets a background
    pub dark_background_colors: Vec<String>,

    /// Candidate table scoring weights
    pub scoring: ScoringWeights,

    /// Cell classification thresholds
    pub classification: ClassificationThresholds,

    /// Answer length reported for every extracted clue
    pub placeholder_answer_length: usize,

    /// Number of classified rows kept in the diagnostics sample
    pub diagnostic_sample_rows: usize,

    /// Keep residual text on plain white cells instead of clearing it
    pub preserve_residual_text: bool,

    /// Spreadsheet token meaning "no grid column here" (case-insensitive)
    pub skip_marker: String,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            arrow_glyphs: strings(&["→", "↓", "←", "↑", "->", "<-", "↗", "↖", "↙", "↘"]),
            horizontal_arrows: strings(&["→", "->", "←", "<-"]),
            vertical_arrows: strings(&["↓", "↑"]),
            dark_fill_classes: strings(&["xl95", "xl96", "xl97", "xl98", "xl99"]),
            dark_background_colors: strings(&["black", "#000", "#333", "rgb(0,0,0)"]),
            scoring: ScoringWeights::default(),
            classification: ClassificationThresholds::default(),
            placeholder_answer_length: 5,
            diagnostic_sample_rows: 5,
            preserve_residual_text: false,
            skip_marker: "x".to_string(),
        }
    }
}

impl ParsingConfig {
    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ParsingError> {
        if self.arrow_glyphs.is_empty() {
            return Err(ParsingError::ConfigurationError {
                field: "arrow_glyphs".to_string(),
                message: "at least one arrow glyph is required".to_string(),
            });
        }

        let glyph_lists = [
            ("arrow_glyphs", &self.arrow_glyphs),
            ("horizontal_arrows", &self.horizontal_arrows),
            ("vertical_arrows", &self.vertical_arrows),
        ];
        for (field, glyphs) in glyph_lists {
            if glyphs.iter().any(String::is_empty) {
                return Err(ParsingError::ConfigurationError {
                    field: field.to_string(),
                    message: "glyphs must not be empty strings".to_string(),
                });
            }
        }

        if self.skip_marker.trim().is_empty() {
            return Err(ParsingError::ConfigurationError {
                field: "skip_marker".to_string(),
                message: "skip marker must not be blank".to_string(),
            });
        }

        self.scoring.validate()?;
        self.classification.validate()
    }
}

/// Additive scoring weights for candidate tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Tables with fewer rows score zero
    pub min_rows: usize,
    pub regularity_bonus: u32,
    /// Largest number of distinct per-row cell counts still called regular
    pub max_distinct_row_lengths: usize,
    pub size_bonus: u32,
    pub min_average_cells: f64,
    pub max_average_cells: f64,
    pub arrow_bonus_per_cell: u32,
    pub blocked_bonus_per_cell: u32,
    pub density_bonus: u32,
    pub min_blocked_ratio: f64,
    pub max_blocked_ratio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            min_rows: 3,
            regularity_bonus: 50,
            max_distinct_row_lengths: 2,
            size_bonus: 30,
            min_average_cells: 5.0,
            max_average_cells: 20.0,
            arrow_bonus_per_cell: 10,
            blocked_bonus_per_cell: 5,
            density_bonus: 20,
            min_blocked_ratio: 0.10,
            max_blocked_ratio: 0.70,
        }
    }
}

impl ScoringWeights {
    fn validate(&self) -> Result<(), ParsingError> {
        if self.min_average_cells > self.max_average_cells {
            return Err(ParsingError::ConfigurationError {
                field: "scoring.min_average_cells".to_string(),
                message: "min_average_cells cannot be greater than max_average_cells".to_string(),
            });
        }
        if self.min_blocked_ratio > self.max_blocked_ratio {
            return Err(ParsingError::ConfigurationError {
                field: "scoring.min_blocked_ratio".to_string(),
                message: "min_blocked_ratio cannot be greater than max_blocked_ratio".to_string(),
            });
        }
        Ok(())
    }
}

/// Thresholds of the cell role rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Arrow text shorter than this does not block a cell
    pub blocked_arrow_min_chars: usize,
    /// Shortest text that can be a definition
    pub clue_min_chars: usize,
    /// Word count of a sentence-like definition
    pub sentence_min_words: usize,
    /// Character count of a sentence-like definition
    pub sentence_min_chars: usize,
    pub min_cell_number: u32,
    pub max_cell_number: u32,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            blocked_arrow_min_chars: 4,
            clue_min_chars: 3,
            sentence_min_words: 2,
            sentence_min_chars: 11,
            min_cell_number: 1,
            max_cell_number: 99,
        }
    }
}

impl ClassificationThresholds {
    fn validate(&self) -> Result<(), ParsingError> {
        if self.min_cell_number > self.max_cell_number {
            return Err(ParsingError::ConfigurationError {
                field: "classification.min_cell_number".to_string(),
                message: "min_cell_number cannot be greater than max_cell_number".to_string(),
            });
        }
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}
