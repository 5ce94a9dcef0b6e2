//! Nearest-neighbour index mapping for downsampling.
//!
//! An output cell never averages its neighbours: it copies exactly one
//! source cell, picked by truncating `out / scale`.

/// Map an output index to the source index it samples.
///
/// Computes `floor(out / scale)` in `f64` and clamps the result to
/// `len - 1`, so the last output row/column can never land one past the
/// end of the source grid.
#[inline]
pub fn source_index(out: usize, scale: f64, len: usize) -> usize {
    let idx = (out as f64 / scale).floor() as usize;
    idx.min(len.saturating_sub(1))
}

/// Precompute the source index for every output position along one axis.
pub fn source_indices(out_len: usize, scale: f64, src_len: usize) -> Vec<usize> {
    (0..out_len)
        .map(|out| source_index(out, scale, src_len))
        .collect()
}
