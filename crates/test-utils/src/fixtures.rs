//! On-disk fixtures for pipeline tests.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// The 4x4 reference grid, row-major.
///
/// ```text
///   0 201 255  10
///  50  60  70  80
///  90 100 110 120
/// 130 140 150 160
/// ```
pub const GRID_4X4: [u8; 16] = [
    0, 201, 255, 10, //
    50, 60, 70, 80, //
    90, 100, 110, 120, //
    130, 140, 150, 160,
];

/// Opaque black, the reference background colour.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Write raw grid bytes to `dir/name`.
pub fn write_grid_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write grid fixture");
    path
}

/// Write a single-colour PNG of the given size to `dir/name`.
pub fn write_background_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: [u8; 4],
) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("Failed to write background fixture");
    path
}

/// A temporary directory holding a grid file and a background image.
///
/// Files are removed when the fixture is dropped.
pub struct MapFixture {
    pub dir: tempfile::TempDir,
    pub grid_path: PathBuf,
    pub image_path: PathBuf,
}

impl MapFixture {
    /// Write `grid` and a `bg_width x bg_height` background of `bg_color`.
    pub fn new(grid: &[u8], bg_width: u32, bg_height: u32, bg_color: [u8; 4]) -> Self {
        let dir = crate::temp_test_dir("sst_fixture_");
        let grid_path = write_grid_file(dir.path(), "sst.grid", grid);
        let image_path =
            write_background_png(dir.path(), "empty-map.png", bg_width, bg_height, bg_color);
        Self {
            dir,
            grid_path,
            image_path,
        }
    }

    /// Path for an output file inside the fixture directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
