//! Benchmarks for the renderer crate - compositing and PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use renderer::{png, render_sst_map, solid_background};
use sst_grid::{Grid, GridShape};

/// Generate an SST-like grid: mostly sea with random land cells.
fn generate_sst_grid(rows: usize, cols: usize) -> Grid {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..rows * cols)
        .map(|_| {
            if rng.gen_bool(0.3) {
                255
            } else {
                rng.gen_range(0..=200)
            }
        })
        .collect();
    Grid::from_bytes(data, GridShape::new(rows, cols), true).expect("valid grid")
}

/// Generate random RGBA pixel data for PNG encoding benchmarks.
fn generate_rgba_data(width: usize, height: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; width * height * 4];
    for chunk in data.chunks_mut(4) {
        chunk[0] = rng.gen(); // R
        chunk[1] = rng.gen(); // G
        chunk[2] = rng.gen(); // B
        chunk[3] = 255; // A (fully opaque)
    }
    data
}

// =============================================================================
// COMPOSITING BENCHMARKS
// =============================================================================

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    let grid = generate_sst_grid(2000, 4000);

    for scale in [0.1, 0.25, 0.5] {
        let out = grid.shape().scaled(scale);
        let background = solid_background(out.cols as u32, out.rows as u32, [40, 40, 40, 255]);

        group.throughput(Throughput::Elements(out.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("2000x4000", format!("scale_{}", scale)),
            &scale,
            |b, &scale| {
                b.iter(|| render_sst_map(black_box(&grid), scale, &background));
            },
        );
    }

    group.finish();
}

// =============================================================================
// PNG ENCODING BENCHMARKS
// =============================================================================

fn bench_png_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoding");

    let sizes = [(360, 180), (1800, 900), (3600, 1799)];

    for (width, height) in sizes {
        let rgba_data = generate_rgba_data(width, height);

        group.throughput(Throughput::Bytes((width * height * 4) as u64));
        group.bench_with_input(
            BenchmarkId::new("rgba_random", format!("{}x{}", width, height)),
            &rgba_data,
            |b, data| {
                b.iter(|| png::create_png(black_box(data), width, height));
            },
        );
    }

    // Composited map: long runs of identical pixels compress well
    let grid = generate_sst_grid(1800, 3600);
    let background = solid_background(1800, 900, [40, 40, 40, 255]);
    let map = render_sst_map(&grid, 0.5, &background).expect("composite");

    group.throughput(Throughput::Bytes(map.pixels().len() as u64));
    group.bench_function("sst_map_1800x900", |b| {
        b.iter(|| black_box(&map).encode_png());
    });

    group.finish();
}

criterion_group!(benches, bench_composite, bench_png_encoding);
criterion_main!(benches);
