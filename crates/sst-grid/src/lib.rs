//! Sea-surface-temperature grid loading.
//!
//! A grid file is a headerless run of `rows * cols` unsigned bytes in
//! row-major order. Values at or below [`LAND_THRESHOLD`] are temperatures,
//! anything above marks land or missing data.
//!
//! # Example
//!
//! ```ignore
//! use sst_grid::{read_grid_file, GridShape};
//!
//! let grid = read_grid_file("sst.grid", GridShape::new(17999, 36000), true)?;
//! let (samples, shape) = grid.resample_nearest(0.1);
//! ```

pub mod error;
pub mod grid;
pub mod sampling;

pub use error::{GridError, Result};
pub use grid::{read_grid_file, Grid, GridShape, GridStats, LAND_THRESHOLD};
pub use sampling::{source_index, source_indices};
