//! Drawing surface for the composited temperature map.
//!
//! A canvas moves through three stages, each its own type:
//!
//! ```text
//! Canvas (empty) ──draw_background──► BackgroundCanvas ──composite──► CompositedCanvas
//! ```
//!
//! There is no way back to an earlier stage.

use std::io::Write;
use std::time::Instant;

use image::RgbaImage;
use rayon::prelude::*;
use sst_grid::{source_index, source_indices, Grid, GridShape};
use tracing::debug;

use crate::colormap::{is_land, map_pixel};
use crate::error::{RenderError, Result};
use crate::png;

/// An empty, fully transparent surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas sized for `shape` downsampled by `scale`.
    pub fn for_grid(shape: GridShape, scale: f64) -> Result<Self> {
        let out = shape.scaled(scale);
        match (u32::try_from(out.cols), u32::try_from(out.rows)) {
            (Ok(width), Ok(height)) => Ok(Self::new(width, height)),
            _ => Err(RenderError::CanvasTooLarge {
                rows: out.rows,
                cols: out.cols,
            }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Draw the background over the whole surface.
    ///
    /// The image must already be sized to the canvas, see
    /// [`fit_background`](crate::background::fit_background).
    pub fn draw_background(self, background: &RgbaImage) -> Result<BackgroundCanvas> {
        let (actual_width, actual_height) = background.dimensions();
        if (actual_width, actual_height) != (self.width, self.height) {
            return Err(RenderError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width,
                actual_height,
            });
        }

        Ok(BackgroundCanvas {
            width: self.width,
            height: self.height,
            pixels: background.as_raw().clone(),
        })
    }
}

/// A surface holding only the background image.
#[derive(Debug, Clone)]
pub struct BackgroundCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl BackgroundCanvas {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Background RGBA value at `(x, y)`.
    pub fn background_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Paint the temperature grid over the background.
    ///
    /// Output pixel `(x, y)` samples grid cell `(floor(y / scale), floor(x / scale))`
    /// (nearest neighbour, clamped to the grid). Sea samples replace the
    /// background; land samples leave it showing.
    ///
    /// The grid must downsample to exactly the canvas size.
    pub fn composite(self, grid: &Grid, scale: f64) -> Result<CompositedCanvas> {
        let out = grid.shape().scaled(scale);
        if (out.cols, out.rows) != (self.width as usize, self.height as usize) {
            return Err(RenderError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: out.cols as u32,
                actual_height: out.rows as u32,
            });
        }

        let start = Instant::now();
        let width = self.width as usize;
        let mut pixels = self.pixels;
        let mut land_pixels = 0usize;

        if width > 0 {
            let src_cols = source_indices(width, scale, grid.cols());
            let src_rows = grid.rows();

            // Rows are independent, so each one is filled by a single task.
            land_pixels = pixels
                .par_chunks_mut(width * 4)
                .enumerate()
                .map(|(y, row)| {
                    let src = grid.row(source_index(y, scale, src_rows));
                    let mut land = 0usize;
                    for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                        let temp = src[src_cols[x]];
                        if is_land(temp) {
                            land += 1;
                        }
                        let background = [pixel[0], pixel[1], pixel[2], pixel[3]];
                        pixel.copy_from_slice(&map_pixel(temp, background));
                    }
                    land
                })
                .sum::<usize>();
        }

        debug!(
            width = self.width,
            height = self.height,
            scale,
            mirrored = grid.is_mirrored(),
            land_pixels,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Composited temperature grid"
        );

        Ok(CompositedCanvas {
            width: self.width,
            height: self.height,
            pixels,
            land_pixels,
        })
    }
}

/// The finished map, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositedCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    land_pixels: usize,
}

impl CompositedCanvas {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels that show the background because their sample is land.
    pub fn land_pixels(&self) -> usize {
        self.land_pixels
    }

    /// RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Encode as an RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        png::create_png(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Encode as an RGBA PNG into `writer`, returning the bytes written.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<usize> {
        png::write_png(writer, &self.pixels, self.width as usize, self.height as usize)
    }

    /// Convert into an `image` buffer.
    pub fn into_image(self) -> Result<RgbaImage> {
        let expected = self.width as usize * self.height as usize * 4;
        let actual = self.pixels.len();
        RgbaImage::from_raw(self.width, self.height, self.pixels).ok_or(
            RenderError::PixelBufferSize {
                width: self.width as usize,
                height: self.height as usize,
                expected,
                actual,
            },
        )
    }
}

/// Composite `grid` at `scale` over `background` in one call.
///
/// `background` must already be sized to the scaled grid.
pub fn render_sst_map(grid: &Grid, scale: f64, background: &RgbaImage) -> Result<CompositedCanvas> {
    Canvas::for_grid(grid.shape(), scale)?
        .draw_background(background)?
        .composite(grid, scale)
}
