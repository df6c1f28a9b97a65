//! Parsing context for ingestion runs
//!
//! Provides context objects carried through one ingestion for logging.

use std::collections::HashMap;

/// Context information for parsing operations
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Name of the uploaded file or path being parsed
    pub source_name: String,

    /// Additional metadata
    pub metadata: HashMap<String, String>,
}

impl ParseContext {
    /// Create new parse context
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to context
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
