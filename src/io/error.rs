//! Error types for puzzle construction, search bookkeeping and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
///
/// An unsolvable puzzle is not an error; see
/// [`SolveOutcome`](crate::solver::backtrack::SolveOutcome).
#[derive(Debug)]
pub enum PuzzleError {
    /// Tile count does not equal the number of grid cells
    SizeMismatch {
        /// Number of tiles supplied
        tiles: usize,
        /// Requested grid rows
        rows: usize,
        /// Requested grid columns
        cols: usize,
    },

    /// Side lookup outside 0..=3
    InvalidSideIndex {
        /// The rejected side index
        index: usize,
    },

    /// Tile was marked used while already marked
    ///
    /// Only observable if acquire/release pairing is broken.
    AlreadyUsed {
        /// Stable tile id
        id: usize,
    },

    /// Tile was unmarked while not marked
    NotUsed {
        /// Stable tile id
        id: usize,
    },

    /// Tile id exceeds the tile set
    InvalidTileId {
        /// The invalid tile id
        id: usize,
        /// Number of tiles in the set
        count: usize,
    },

    /// Grid coordinates outside the grid
    InvalidPosition {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Puzzle file could not be parsed
    Parse {
        /// One-based line number
        line: usize,
        /// Description of the syntax problem
        reason: String,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered solution image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { tiles, rows, cols } => {
                write!(
                    f,
                    "Puzzle of size {rows}x{cols} needs {} tiles, got {tiles}",
                    rows.saturating_mul(*cols)
                )
            }
            Self::InvalidSideIndex { index } => {
                write!(f, "Side index {index} is out of range (expected 0..=3)")
            }
            Self::AlreadyUsed { id } => write!(f, "Tile {id} is already in use"),
            Self::NotUsed { id } => write!(f, "Tile {id} is not in use"),
            Self::InvalidTileId { id, count } => {
                write!(f, "Tile id {id} is out of bounds (tile count: {count})")
            }
            Self::InvalidPosition {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({row},{col}) is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a one-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Parse {
        line,
        reason: reason.to_string(),
    }
}
