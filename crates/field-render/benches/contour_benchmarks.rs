//! Benchmarks for the per-frame field pipeline.
//!
//! Run with: cargo bench --package field-render --bench contour_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use field_common::{FieldConfig, NoiseConfig, VertexGrid};
use field_render::contour::extract_and_draw;
use field_render::gradient::fill_pass;
use field_render::noise::build_noise;
use field_render::pipeline::FramePipeline;
use field_render::sampler::resample;
use field_render::surface::TraceSurface;
use rand::Rng;

/// Smooth field with hills and valleys, like a calm animation frame.
fn smooth_grid(width_px: u32, height_px: u32) -> VertexGrid {
    let mut grid = VertexGrid::new(width_px, height_px, 8);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let fx = col as f32 / grid.cols() as f32;
            let fy = row as f32 / grid.rows() as f32;
            let v1 = (fx * std::f32::consts::PI * 4.0).sin() * 60.0;
            let v2 = (fy * std::f32::consts::PI * 4.0).sin() * 60.0;
            grid.set(row, col, 128.0 + v1 * 0.5 + v2 * 0.5);
        }
    }
    grid
}

/// Smooth field plus per-vertex jitter (more contour segments).
fn noisy_grid(width_px: u32, height_px: u32) -> VertexGrid {
    let mut rng = rand::thread_rng();
    let mut grid = smooth_grid(width_px, height_px);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let jitter: f32 = rng.gen_range(-20.0..20.0);
            grid.set(row, col, (grid.get(row, col) + jitter).clamp(0.0, 255.0));
        }
    }
    grid
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let field = build_noise(&NoiseConfig::default());

    for size in [(320u32, 240u32), (640, 480), (1280, 720)] {
        let mut grid = VertexGrid::new(size.0, size.1, 8);
        let vertices = grid.rows() * grid.cols();
        group.throughput(Throughput::Elements(vertices as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size.0, size.1)),
            &size,
            |b, _| {
                b.iter(|| {
                    resample(&mut grid, field.as_ref(), 0.1, 0.01, black_box(42.0));
                });
            },
        );
    }
    group.finish();
}

fn bench_extract_and_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_and_draw");
    let thresholds = FieldConfig::default().thresholds();

    for (name, grid) in [
        ("smooth_640x480", smooth_grid(640, 480)),
        ("noisy_640x480", noisy_grid(640, 480)),
    ] {
        let cells = (grid.rows() - 1) * (grid.cols() - 1);
        group.throughput(Throughput::Elements((cells * thresholds.len()) as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut trace = TraceSurface::new();
                extract_and_draw(
                    &mut trace,
                    black_box(&grid),
                    &thresholds,
                    8.0,
                    [0, 0, 0, 255],
                    1.0,
                );
                trace
            });
        });
    }
    group.finish();
}

fn bench_fill_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_pass");
    let grid = smooth_grid(640, 480);

    for subdivisions in [1u32, 2, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(subdivisions),
            &subdivisions,
            |b, &n| {
                b.iter(|| {
                    let mut trace = TraceSurface::new();
                    fill_pass(&mut trace, black_box(&grid), 8.0, n, [255, 165, 0]);
                    trace
                });
            },
        );
    }
    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    for size in [(320u32, 240u32), (640, 480)] {
        let mut pipeline = FramePipeline::new(FieldConfig::default(), size.0, size.1).unwrap();
        let mut frame = 0u64;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size.0, size.1)),
            &size,
            |b, _| {
                b.iter(|| {
                    let mut trace = TraceSurface::new();
                    pipeline.render_frame(&mut trace, frame);
                    frame += 1;
                    trace
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_resample,
    bench_extract_and_draw,
    bench_fill_pass,
    bench_full_frame
);
criterion_main!(benches);
