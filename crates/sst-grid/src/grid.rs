//! Row-major byte grids of sea-surface-temperature samples.

use std::path::Path;

use tracing::debug;

use crate::error::{GridError, Result};
use crate::sampling::{source_index, source_indices};

/// Samples strictly above this value mark land / no data.
pub const LAND_THRESHOLD: u8 = 200;

/// Dimensions of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of rows (latitude direction)
    pub rows: usize,
    /// Number of columns (longitude direction)
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    ///
    /// Only meaningful for shapes that passed [`checked_len`](Self::checked_len);
    /// saturates at `usize::MAX` otherwise.
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Total number of cells, or `None` if `rows * cols` overflows.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Check if the shape has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Shape after downsampling by `scale`: `floor(rows * scale) x floor(cols * scale)`.
    pub fn scaled(&self, scale: f64) -> GridShape {
        GridShape {
            rows: (self.rows as f64 * scale).floor() as usize,
            cols: (self.cols as f64 * scale).floor() as usize,
        }
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Summary of the sample values in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    /// Smallest sea sample, `None` if every cell is land
    pub sea_min: Option<u8>,
    /// Largest sea sample, `None` if every cell is land
    pub sea_max: Option<u8>,
    /// Number of cells above [`LAND_THRESHOLD`]
    pub land_cells: usize,
    /// Number of cells at or below [`LAND_THRESHOLD`]
    pub sea_cells: usize,
}

/// A temperature grid held in memory.
///
/// The sample buffer is kept in file order. Mirroring only flips how logical
/// rows map onto stored rows, so a mirrored grid shares the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<u8>,
    shape: GridShape,
    mirrored: bool,
}

impl Grid {
    /// Reshape a flat row-major buffer into a grid.
    ///
    /// The buffer length must equal `rows * cols` exactly.
    pub fn from_bytes(data: Vec<u8>, shape: GridShape, mirror: bool) -> Result<Self> {
        let expected = cell_count(shape)?;
        if data.len() != expected {
            return Err(GridError::ShapeMismatch {
                rows: shape.rows,
                cols: shape.cols,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            shape,
            mirrored: mirror,
        })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Whether logical row 0 is the last row of the source data.
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Flip the grid vertically. Applying this twice gives back the original grid.
    pub fn mirrored(mut self) -> Self {
        self.mirrored = !self.mirrored;
        self
    }

    /// Raw samples in source (file) order, ignoring mirroring.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn stored_row(&self, row: usize) -> usize {
        if self.mirrored {
            self.shape.rows - 1 - row
        } else {
            row
        }
    }

    /// Logical row `row`.
    ///
    /// # Panics
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        assert!(row < self.shape.rows, "row {} out of range for {} grid", row, self.shape);
        let start = self.stored_row(row) * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    /// Iterate over logical rows, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.shape.rows).map(move |row| self.row(row))
    }

    /// Sample at logical `(row, col)`, or `None` if outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.shape.rows || col >= self.shape.cols {
            return None;
        }
        Some(self.row(row)[col])
    }

    /// Sample at logical `(row, col)`, clamped to the last row/column.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> u8 {
        let row = row.min(self.shape.rows - 1);
        let col = col.min(self.shape.cols - 1);
        self.row(row)[col]
    }

    /// Nearest-neighbour downsample of the logical grid.
    ///
    /// Output cell `(i, j)` takes the sample at `(floor(i / scale), floor(j / scale))`.
    pub fn resample_nearest(&self, scale: f64) -> (Vec<u8>, GridShape) {
        let out = self.shape.scaled(scale);
        let cols = source_indices(out.cols, scale, self.shape.cols);

        let mut samples = Vec::with_capacity(out.len());
        for i in 0..out.rows {
            let src = self.row(source_index(i, scale, self.shape.rows));
            samples.extend(cols.iter().map(|&j| src[j]));
        }

        (samples, out)
    }

    /// Count land and sea cells and find the sea value range.
    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats::default();
        let mut min = u8::MAX;
        let mut max = u8::MIN;

        for &value in &self.data {
            if value > LAND_THRESHOLD {
                stats.land_cells += 1;
            } else {
                stats.sea_cells += 1;
                min = min.min(value);
                max = max.max(value);
            }
        }

        if stats.sea_cells > 0 {
            stats.sea_min = Some(min);
            stats.sea_max = Some(max);
        }
        stats
    }
}

/// Read a raw grid file of `rows * cols` unsigned bytes.
///
/// The file size is checked against the declared shape before the
/// contents are read, so a wrong shape fails without loading the file.
pub fn read_grid_file(path: impl AsRef<Path>, shape: GridShape, mirror: bool) -> Result<Grid> {
    let path = path.as_ref();
    let expected = cell_count(shape)?;

    let metadata = std::fs::metadata(path).map_err(|e| GridError::io(path, e))?;
    if metadata.len() != expected as u64 {
        return Err(GridError::ShapeMismatch {
            rows: shape.rows,
            cols: shape.cols,
            expected,
            actual: metadata.len() as usize,
        });
    }

    debug!(path = %path.display(), shape = %shape, bytes = expected, "Reading grid file");
    let data = std::fs::read(path).map_err(|e| GridError::io(path, e))?;

    Grid::from_bytes(data, shape, mirror)
}

/// Number of cells in a loadable shape.
fn cell_count(shape: GridShape) -> Result<usize> {
    if shape.is_empty() {
        return Err(GridError::EmptyShape {
            rows: shape.rows,
            cols: shape.cols,
        });
    }
    shape.checked_len().ok_or(GridError::ShapeOverflow {
        rows: shape.rows,
        cols: shape.cols,
    })
}
