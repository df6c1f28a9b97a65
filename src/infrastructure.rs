//! Infrastructure layer: parsing pipeline, spreadsheet reading, configuration, logging

pub mod config;
pub mod logging;
pub mod parsing;
pub mod parsing_error;
pub mod source_format;
pub mod spreadsheet_reader;

// Re-export commonly used items
pub use config::{AppConfig, ConfigError, LoggingConfig, StoreConfig};
pub use logging::{get_log_directory, init_logging, init_logging_with_config};
pub use parsing::{MarkerIngestor, ParseContext, ParsingConfig, ParsingError, ParsingResult, PuzzleIngestor, StyledHtmlParser};
pub use source_format::SourceFormat;
pub use spreadsheet_reader::SpreadsheetReader;
