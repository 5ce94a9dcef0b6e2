//! Configuration for a map render.
//!
//! Values are resolved in this order, later sources winning:
//! 1. Built-in defaults
//! 2. Optional YAML file (`--config`)
//! 3. CLI flags / environment variables

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use sst_grid::GridShape;
use thiserror::Error;

/// Everything a single render needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Raw `rows * cols` byte grid
    pub file_path: PathBuf,
    /// Background map image
    pub image_path: PathBuf,
    /// Where the PNG is written
    pub output_path: PathBuf,
    pub rows: usize,
    pub cols: usize,
    /// Flip the grid vertically before rendering
    pub mirror_grid: bool,
    /// Downsampling ratio in (0, 1]
    pub scale: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("./sst.grid"),
            image_path: PathBuf::from("./empty-map.png"),
            output_path: PathBuf::from("temperature_map_with_background.png"),
            rows: 17999,
            cols: 36000,
            mirror_grid: true,
            scale: 0.1,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("rows and cols must be > 0 (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid shape {rows}x{cols} has more cells than can be addressed")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("scale must be in (0, 1], got {0}")]
    InvalidScale(f64),

    #[error("scale {scale} reduces a {rows}x{cols} grid to an empty image")]
    EmptyOutput { rows: usize, cols: usize, scale: f64 },
}

impl MapConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("invalid map configuration")
    }

    /// Load a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.shape().checked_len().is_none() {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }

        // Also rejects NaN
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }

        if self.output_shape().is_empty() {
            return Err(ConfigError::EmptyOutput {
                rows: self.rows,
                cols: self.cols,
                scale: self.scale,
            });
        }

        Ok(())
    }

    /// Declared shape of the input grid.
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }

    /// Shape of the rendered image.
    pub fn output_shape(&self) -> GridShape {
        self.shape().scaled(self.scale)
    }
}

/// Per-field overrides from the command line or environment.
#[derive(Args, Debug, Clone, Default)]
pub struct MapOverrides {
    /// Raw SST grid file
    #[arg(long, env = "SST_GRID_FILE")]
    pub file_path: Option<PathBuf>,

    /// Background map image
    #[arg(long, env = "SST_BACKGROUND_IMAGE")]
    pub image_path: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, env = "SST_OUTPUT")]
    pub output_path: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long, env = "SST_ROWS")]
    pub rows: Option<usize>,

    /// Number of grid columns
    #[arg(long, env = "SST_COLS")]
    pub cols: Option<usize>,

    /// Flip the grid vertically (true/false)
    #[arg(long, env = "SST_MIRROR_GRID")]
    pub mirror_grid: Option<bool>,

    /// Downsampling ratio, e.g. 0.1 for 10%
    #[arg(long, env = "SST_SCALE")]
    pub scale: Option<f64>,
}

impl MapOverrides {
    /// Overwrite every field of `config` that was given explicitly.
    pub fn apply_to(&self, config: &mut MapConfig) {
        if let Some(path) = &self.file_path {
            config.file_path = path.clone();
        }
        if let Some(path) = &self.image_path {
            config.image_path = path.clone();
        }
        if let Some(path) = &self.output_path {
            config.output_path = path.clone();
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(mirror) = self.mirror_grid {
            config.mirror_grid = mirror;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
    }
}
