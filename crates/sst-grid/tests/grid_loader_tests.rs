//! Tests for reading, reshaping and mirroring grid files.

use sst_grid::{read_grid_file, Grid, GridError, GridShape};
use test_utils::{
    create_row_index_grid, create_sequential_grid, create_sst_grid, require_test_file,
    temp_test_dir, write_grid_file, GRID_4X4,
};

// ============================================================================
// Reshape
// ============================================================================

#[test]
fn test_read_grid_file_reshapes_rows() {
    let dir = temp_test_dir("grid_read_");
    let path = write_grid_file(dir.path(), "sst.grid", &GRID_4X4);

    let grid = read_grid_file(&path, GridShape::new(4, 4), false).unwrap();

    assert_eq!(grid.shape(), GridShape::new(4, 4));
    assert_eq!(grid.row(0), &[0, 201, 255, 10]);
    assert_eq!(grid.row(3), &[130, 140, 150, 160]);
}

#[test]
fn test_read_grid_file_non_square() {
    let rows = 3;
    let cols = 7;
    let data = create_sequential_grid(rows, cols);
    let dir = temp_test_dir("grid_read_");
    let path = write_grid_file(dir.path(), "sst.grid", &data);

    let grid = read_grid_file(&path, GridShape::new(rows, cols), false).unwrap();

    for (i, row) in grid.rows_iter().enumerate() {
        assert_eq!(row, &data[i * cols..(i + 1) * cols]);
    }
}

// ============================================================================
// Mirroring
// ============================================================================

#[test]
fn test_mirror_puts_last_row_first() {
    let rows = 5;
    let data = create_row_index_grid(rows, 3);
    let grid = Grid::from_bytes(data, GridShape::new(rows, 3), true).unwrap();

    assert_eq!(grid.row(0), &[4, 4, 4]);
    assert_eq!(grid.row(rows - 1), &[0, 0, 0]);
}

#[test]
fn test_unmirrored_keeps_first_row_first() {
    let data = create_row_index_grid(5, 3);
    let grid = Grid::from_bytes(data, GridShape::new(5, 3), false).unwrap();
    assert_eq!(grid.row(0), &[0, 0, 0]);
}

#[test]
fn test_mirror_twice_is_identity() {
    for &(rows, cols) in &[(1, 1), (2, 3), (7, 4), (16, 16)] {
        let data = create_sst_grid(rows, cols);
        let original = Grid::from_bytes(data, GridShape::new(rows, cols), false).unwrap();

        let twice = original.clone().mirrored().mirrored();

        assert_eq!(twice, original);
        let a: Vec<&[u8]> = original.rows_iter().collect();
        let b: Vec<&[u8]> = twice.rows_iter().collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_mirror_flag_from_loader_matches_method() {
    let dir = temp_test_dir("grid_mirror_");
    let path = write_grid_file(dir.path(), "sst.grid", &GRID_4X4);

    let loaded = read_grid_file(&path, GridShape::new(4, 4), true).unwrap();
    let flipped = read_grid_file(&path, GridShape::new(4, 4), false)
        .unwrap()
        .mirrored();

    assert_eq!(loaded, flipped);
    assert_eq!(loaded.row(0), &[130, 140, 150, 160]);
}

// ============================================================================
// Resampling
// ============================================================================

#[test]
fn test_resample_half_scale_takes_even_cells() {
    let grid = Grid::from_bytes(GRID_4X4.to_vec(), GridShape::new(4, 4), false).unwrap();

    let (samples, shape) = grid.resample_nearest(0.5);

    assert_eq!(shape, GridShape::new(2, 2));
    // (0,0) (0,2) / (2,0) (2,2)
    assert_eq!(samples, vec![0, 255, 90, 110]);
}

#[test]
fn test_resample_full_scale_is_copy() {
    let grid = Grid::from_bytes(GRID_4X4.to_vec(), GridShape::new(4, 4), false).unwrap();
    let (samples, shape) = grid.resample_nearest(1.0);
    assert_eq!(shape, grid.shape());
    assert_eq!(samples, GRID_4X4.to_vec());
}

#[test]
fn test_resample_respects_mirroring() {
    let grid = Grid::from_bytes(create_row_index_grid(10, 10), GridShape::new(10, 10), true)
        .unwrap();
    let (samples, shape) = grid.resample_nearest(0.5);
    assert_eq!(shape, GridShape::new(5, 5));
    // Output row 0 samples logical row 0, i.e. source row 9
    assert_eq!(&samples[0..5], &[9; 5]);
    // Output row 1 samples logical row 2, i.e. source row 7
    assert_eq!(&samples[5..10], &[7; 5]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_undersized_file_is_rejected() {
    let dir = temp_test_dir("grid_err_");
    let path = write_grid_file(dir.path(), "sst.grid", &GRID_4X4[..12]);

    let err = read_grid_file(&path, GridShape::new(4, 4), false).unwrap_err();
    match err {
        GridError::ShapeMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 12);
        }
        other => panic!("expected ShapeMismatch, got {other}"),
    }
}

#[test]
fn test_oversized_file_is_rejected() {
    let dir = temp_test_dir("grid_err_");
    let mut data = GRID_4X4.to_vec();
    data.push(0);
    let path = write_grid_file(dir.path(), "sst.grid", &data);

    let err = read_grid_file(&path, GridShape::new(4, 4), false).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { actual: 17, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = temp_test_dir("grid_err_");
    let err = read_grid_file(dir.path().join("nope.grid"), GridShape::new(4, 4), false)
        .unwrap_err();

    assert!(matches!(err, GridError::Io { .. }));
    assert!(err.to_string().contains("nope.grid"));
}

#[test]
fn test_overflowing_shape_is_rejected_before_io() {
    let dir = temp_test_dir("grid_err_");
    let path = write_grid_file(dir.path(), "sst.grid", &GRID_4X4);

    let err = read_grid_file(&path, GridShape::new(usize::MAX / 2, 3), false).unwrap_err();
    assert!(matches!(err, GridError::ShapeOverflow { cols: 3, .. }));
}

// ============================================================================
// Full-size data (optional)
// ============================================================================

#[test]
fn test_full_size_grid_loads() {
    let path = require_test_file!("sst.grid");
    let grid = read_grid_file(&path, GridShape::new(17999, 36000), true).unwrap();
    assert_eq!(grid.shape().scaled(0.1), GridShape::new(1799, 3600));
}
