//! Background map loading.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};
use tracing::debug;

use crate::error::{RenderError, Result};

/// Decode the background image and fit it to `width x height`.
pub fn load_background(path: impl AsRef<Path>, width: u32, height: u32) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| RenderError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let (source_width, source_height) = img.dimensions();
    debug!(
        path = %path.display(),
        source_width,
        source_height,
        width,
        height,
        "Loaded background image"
    );

    Ok(fit_background(img.to_rgba8(), width, height))
}

/// Stretch a background to exactly `width x height`.
///
/// Aspect ratio is not preserved. Images already at the target size are
/// returned unchanged.
pub fn fit_background(img: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img;
    }
    imageops::resize(&img, width, height, FilterType::Triangle)
}

/// A background of a single color.
pub fn solid_background(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}
