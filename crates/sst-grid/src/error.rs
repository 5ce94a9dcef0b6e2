//! Error types for grid loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a temperature grid.
#[derive(Error, Debug)]
pub enum GridError {
    /// The grid file could not be read.
    #[error("failed to read grid file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The byte count does not match the declared `rows * cols`.
    #[error("grid size mismatch: expected {expected} bytes ({rows}x{cols}), got {actual}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    /// A grid with zero rows or zero columns was requested.
    #[error("grid shape {rows}x{cols} has no cells")]
    EmptyShape { rows: usize, cols: usize },

    /// `rows * cols` does not fit in `usize`.
    #[error("grid shape {rows}x{cols} is too large to address")]
    ShapeOverflow { rows: usize, cols: usize },
}

impl GridError {
    /// Create an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
