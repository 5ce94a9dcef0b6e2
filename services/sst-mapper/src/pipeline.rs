//! The render pipeline: read grid → load background → composite → encode → write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use renderer::{load_background, Canvas, RgbaImage};
use sst_grid::{read_grid_file, Grid};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::config::MapConfig;

/// What a finished render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
    /// Output pixels that show the background
    pub land_pixels: usize,
}

/// Render the map described by `config` and write it to `config.output_path`.
///
/// Every failure is fatal; nothing is retried and a partially written
/// output is left as is.
pub async fn run(config: &MapConfig) -> Result<RunSummary> {
    config.validate().context("invalid configuration")?;

    let start = Instant::now();
    let shape = config.shape();
    let canvas = Canvas::for_grid(shape, config.scale).context("invalid output size")?;
    let (width, height) = (canvas.width(), canvas.height());

    info!(
        grid = %config.file_path.display(),
        background = %config.image_path.display(),
        rows = shape.rows,
        cols = shape.cols,
        mirror = config.mirror_grid,
        scale = config.scale,
        width,
        height,
        "Starting SST map render"
    );

    let grid = {
        let path = config.file_path.clone();
        let mirror = config.mirror_grid;
        tokio::task::spawn_blocking(move || read_grid_file(path, shape, mirror))
            .await
            .context("grid loader task failed")?
            .with_context(|| format!("failed to load grid {}", config.file_path.display()))?
    };
    log_grid_stats(&grid);

    let background = {
        let path = config.image_path.clone();
        tokio::task::spawn_blocking(move || load_background(path, width, height))
            .await
            .context("background loader task failed")?
            .with_context(|| {
                format!("failed to load background {}", config.image_path.display())
            })?
    };
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Inputs loaded");

    let scale = config.scale;
    let (png, land_pixels) =
        tokio::task::spawn_blocking(move || render_png(canvas, &grid, scale, &background))
            .await
            .context("render task failed")??;

    write_output(&config.output_path, &png).await?;

    info!(
        path = %config.output_path.display(),
        bytes = png.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "The PNG file with background was created."
    );

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        width,
        height,
        bytes_written: png.len(),
        land_pixels,
    })
}

/// Composite and encode, returning the PNG bytes and the land pixel count.
fn render_png(
    canvas: Canvas,
    grid: &Grid,
    scale: f64,
    background: &RgbaImage,
) -> Result<(Vec<u8>, usize)> {
    let map = canvas
        .draw_background(background)
        .and_then(|canvas| canvas.composite(grid, scale))
        .context("failed to composite map")?;
    let png = map.encode_png().context("failed to encode PNG")?;
    debug!(
        land_pixels = map.land_pixels(),
        png_bytes = png.len(),
        "Encoded map"
    );
    Ok((png, map.land_pixels()))
}

fn log_grid_stats(grid: &Grid) {
    let stats = grid.stats();
    debug!(
        sea_cells = stats.sea_cells,
        land_cells = stats.land_cells,
        sea_min = ?stats.sea_min,
        sea_max = ?stats.sea_max,
        "Grid loaded"
    );
    if stats.sea_cells == 0 {
        warn!("Grid contains only land samples, output will show the background only");
    }
}

/// Write `bytes` to `path` and wait until they reach storage.
async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    file.write_all(bytes)
        .await
        .with_context(|| format!("failed to write output file {}", path.display()))?;
    file.flush().await?;
    file.sync_all()
        .await
        .with_context(|| format!("failed to sync output file {}", path.display()))?;
    Ok(())
}
