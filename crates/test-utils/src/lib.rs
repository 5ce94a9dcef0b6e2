//! Shared test utilities for the sst-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Test data path helpers
//! - Skip macros for optional test data
//! - SST grid generators
//! - On-disk fixtures (grid files, background images)
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_file, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// The full-size `sst.grid` is ~650 MB and is not checked in, so tests that
/// need it call this first.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_full_grid() {
///     let path = require_test_file!("sst.grid");
///     // Test code using path...
/// }
/// ```
///
/// If the file is not found, the test will print a skip message and return early.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Download test data or set TEST_DATA_DIR.",
                    $name
                );
                return;
            }
        }
    }};
}

/// Assert that the RGBA pixel at `index` of a flat buffer equals `expected`.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_pixel_eq;
///
/// assert_pixel_eq!(pixels, 0, [0, 0, 255, 255]);
/// ```
#[macro_export]
macro_rules! assert_pixel_eq {
    ($pixels:expr, $index:expr, $expected:expr) => {{
        let pixels: &[u8] = &$pixels;
        let start = ($index) * 4;
        let actual: [u8; 4] = [
            pixels[start],
            pixels[start + 1],
            pixels[start + 2],
            pixels[start + 3],
        ];
        let expected: [u8; 4] = $expected;
        if actual != expected {
            panic!(
                "pixel {} mismatch\n  actual: {:?}\nexpected: {:?}",
                $index, actual, expected
            );
        }
    }};
}
