//! Domain module - puzzle entities and value objects
//!
//! This module contains the data model shared by both ingestion paths:
//! cells, grids, clues and the parsed puzzle document.
//!
//! Modern Rust module organization (Rust 2018+ style):
//! - Each module is its own file in the domain/ directory
//! - Public exports are defined here for convenience

pub mod cell;
pub mod clue;
pub mod grid;
pub mod puzzle;

pub use cell::{Cell, CellKind, CellRole, ClassifiedCell, ClueDirection};
pub use clue::{Clue, ClueCollection, MarkerClue};
pub use grid::{Grid, Solution};
pub use puzzle::{MarkerCell, MarkerGrid, ParsedPuzzle, PuzzleGrid, RawDiagnostics, SourceStrategy};
