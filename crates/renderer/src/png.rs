//! PNG encoding for RGBA image data.
//!
//! Writes 8-bit RGBA (color type 6) images with a single IDAT chunk. Each
//! scanline uses filter type 0 and the image data is zlib-compressed with
//! `flate2`.

use std::io::Write;

use crate::error::{RenderError, Result};

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let expected = width * height * 4;
    if pixels.len() != expected {
        return Err(RenderError::PixelBufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(RenderError::CanvasTooLarge {
                rows: height,
                cols: width,
            })
        }
    };

    let idat_data = deflate_idat_rgba(pixels, width, height)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;

    let mut png = Vec::with_capacity(idat_data.len() + 64);
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&w.to_be_bytes());
    ihdr_data.extend_from_slice(&h.to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    write_chunk(&mut png, b"IDAT", &idat_data);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode RGBA pixels and write the PNG to `writer`.
///
/// Returns the number of bytes written.
pub fn write_png<W: Write>(mut writer: W, pixels: &[u8], width: usize, height: usize) -> Result<usize> {
    let png = create_png(pixels, width, height)?;
    writer.write_all(&png)?;
    writer.flush()?;
    Ok(png.len())
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers type and data, not the length
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let stride = width * 4;
    let mut encoder = flate2::write::ZlibEncoder::new(
        Vec::with_capacity(pixels.len() / 4),
        flate2::Compression::fast(),
    );

    for row in pixels.chunks_exact(stride.max(1)).take(height) {
        encoder.write_all(&[0])?; // filter type: none
        encoder.write_all(row)?;
    }

    encoder.finish()
}
