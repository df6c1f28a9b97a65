//! Command handlers
//!
//! Thin request handlers over the application services. Each returns the
//! `ApiResponse` envelope or a message for the caller.

pub mod puzzle_commands;

// Re-export all commands for easy access
pub use puzzle_commands::*;
