//! Parsing error types for puzzle ingestion
//!
//! Only document-structural failures are errors. Ambiguous cells are always
//! resolved by the classification heuristics and never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("No table found in the HTML document")]
    NoTableFound,

    #[error("Unable to locate the main grid table ({tables_scored} tables scored)")]
    NoCandidateTable { tables_scored: usize },

    #[error("Unsupported file format: '{file_name}'")]
    UnsupportedFormat { file_name: String },

    #[error("Spreadsheet could not be read: {reason}")]
    MalformedSpreadsheet { reason: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Configuration error: {field} - {message}")]
    ConfigurationError { field: String, message: String },
}

impl ParsingError {
    /// Create an unsupported format error for the given file name
    pub fn unsupported_format(file_name: &str) -> Self {
        Self::UnsupportedFormat {
            file_name: file_name.to_string(),
        }
    }

    /// Create a malformed spreadsheet error from any reader failure
    pub fn malformed_spreadsheet(reason: impl std::fmt::Display) -> Self {
        Self::MalformedSpreadsheet {
            reason: reason.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error message is meant for the uploader as-is.
    ///
    /// Spreadsheet read failures and internal errors are reported with a
    /// generic processing-failure message instead.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::NoTableFound => true,
            Self::NoCandidateTable { .. } => true,
            Self::UnsupportedFormat { .. } => true,
            Self::MalformedSpreadsheet { .. } => false,
            Self::InvalidSelector { .. } => false,
            Self::ConfigurationError { .. } => false,
        }
    }

    /// Message suitable for the caller of an upload
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedFormat { .. } => {
                "Unsupported file format. Use an .htm/.html export or a spreadsheet (.xlsx, .xlsm, .xls, .ods)"
                    .to_string()
            }
            _ if self.is_user_facing() => self.to_string(),
            _ => format!("Error while processing the file: {self}"),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
