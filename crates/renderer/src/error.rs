//! Error types for map rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compositing or encoding a map.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The background image could not be opened or decoded.
    #[error("failed to load background image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An image or grid does not match the canvas size.
    #[error("expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// The scaled output does not fit in PNG dimensions.
    #[error("output {rows}x{cols} exceeds the maximum image size")]
    CanvasTooLarge { rows: usize, cols: usize },

    /// A pixel buffer has the wrong length for its dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    PixelBufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Writing encoded output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
