//! Upload format detection by file extension

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};

/// Accepted source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Html,
    Xlsx,
    Xlsm,
    Xls,
    Ods,
}

impl SourceFormat {
    /// Detect the format from the file name extension, case-insensitively.
    ///
    /// Anything outside the accepted set is rejected before parsing.
    pub fn from_file_name(file_name: &str) -> ParsingResult<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "htm" | "html" => Ok(Self::Html),
            "xlsx" => Ok(Self::Xlsx),
            "xlsm" => Ok(Self::Xlsm),
            "xls" => Ok(Self::Xls),
            "ods" => Ok(Self::Ods),
            _ => Err(ParsingError::unsupported_format(file_name)),
        }
    }

    pub fn is_spreadsheet(self) -> bool {
        !matches!(self, Self::Html)
    }
}
