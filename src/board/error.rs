//! Error types for board construction and coordinate parsing.

use std::fmt;

use super::Alliance;

/// Error type for board construction failures.
///
/// These are invariant violations: a board that fails to build would be
/// corrupt, so `Builder::build` treats them as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// An alliance has no king among its pieces
    MissingKing { alliance: Alliance },
    /// An alliance has more than one king
    MultipleKings { alliance: Alliance, count: usize },
    /// Board diagram does not have 64 cells
    WrongCellCount { found: usize },
    /// Board diagram cell is neither `-` nor a piece letter
    InvalidCell { index: usize, cell: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { alliance } => {
                write!(f, "{alliance} has no king on the board")
            }
            BoardError::MultipleKings { alliance, count } => {
                write!(f, "{alliance} has {count} kings, expected exactly one")
            }
            BoardError::WrongCellCount { found } => {
                write!(f, "Board diagram must have 64 cells, found {found}")
            }
            BoardError::InvalidCell { index, cell } => {
                write!(f, "Invalid cell '{cell}' at index {index} in board diagram")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
