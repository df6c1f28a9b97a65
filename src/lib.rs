//! Crossword extractor
//!
//! Infers a crossword grid and its numbered definitions from documents that
//! were never meant as puzzle files: HTML exports of spreadsheet layouts and
//! raw spreadsheets laid out with a skip marker.

// Module declarations
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-export commands for easier access
pub use commands::*;
