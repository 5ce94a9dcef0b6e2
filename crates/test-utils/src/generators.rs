//! Test data generators for creating synthetic SST grids.
//!
//! All generators return row-major `Vec<u8>` buffers, the same layout as an
//! `sst.grid` file.

/// Value written for land cells by the generators.
pub const LAND: u8 = 255;

/// Creates a grid where every cell holds its row index.
///
/// Makes mirroring easy to check: after a vertical flip, logical row `i`
/// must contain `rows - 1 - i`. Row indices above 200 would read as land,
/// so keep `rows <= 201` when the values must stay sea samples.
///
/// # Example
///
/// ```
/// use test_utils::create_row_index_grid;
///
/// let grid = create_row_index_grid(3, 2);
/// assert_eq!(grid, vec![0, 0, 1, 1, 2, 2]);
/// ```
pub fn create_row_index_grid(rows: usize, cols: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        data.extend(std::iter::repeat((row % 256) as u8).take(cols));
    }
    data
}

/// Creates a grid with a distinct sea value per cell (modulo 201).
///
/// Value at `(row, col)` is `(row * cols + col) % 201`, so no cell is land.
pub fn create_sequential_grid(rows: usize, cols: usize) -> Vec<u8> {
    (0..rows * cols).map(|i| (i % 201) as u8).collect()
}

/// Creates a temperature-like grid with a land block.
///
/// Sea values are warmest at the middle row and fall off towards the top
/// and bottom edges (0..=200). A rectangle covering the middle third of the
/// columns in the top quarter of the rows is land.
pub fn create_sst_grid(rows: usize, cols: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(rows * cols);
    let mid = rows as f32 / 2.0;

    for row in 0..rows {
        let dist = ((row as f32 + 0.5) - mid).abs() / mid.max(1.0);
        let temp = (200.0 * (1.0 - dist)).clamp(0.0, 200.0) as u8;
        for col in 0..cols {
            let is_land = row < rows / 4 && col >= cols / 3 && col < 2 * cols / 3;
            data.push(if is_land { LAND } else { temp });
        }
    }
    data
}
