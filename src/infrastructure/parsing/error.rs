//! Error re-export for the parsing modules

pub use crate::infrastructure::parsing_error::{ParsingError, ParsingResult};
