//! Error types for maze parsing and searching

use crate::grid::Position;
use thiserror::Error;

/// Error type for parsing maze text input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no rows
    #[error("maze input is empty")]
    EmptyInput,
    /// A row's width differs from the first row's width
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.`, `S` or `E` appeared
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    UnexpectedCharacter { row: usize, col: usize, found: char },
    /// No `S` tile in the input
    #[error("maze has no start tile")]
    MissingStart,
    /// No `E` tile in the input
    #[error("maze has no end tile")]
    MissingEnd,
    /// More than one `S` tile in the input
    #[error("maze has more than one start tile")]
    DuplicateStart,
    /// More than one `E` tile in the input
    #[error("maze has more than one end tile")]
    DuplicateEnd,
}

/// Error type for a single search call
///
/// All failures are terminal for the call; the caller decides whether to
/// abort or report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Every reachable state was exhausted without touching the end tile
    #[error("no path found from start to end")]
    NoPathFound,
    /// A start or end position lies outside the grid
    #[error("position {position} is outside the {height}x{width} grid")]
    OutOfBounds {
        position: Position,
        height: usize,
        width: usize,
    },
    /// A start or end position sits on a wall tile
    #[error("position {position} is a wall tile")]
    Blocked { position: Position },
}
