//! Criterion benchmarks for empirule_core grid computation
//!
//! Run with: cargo bench -p empirule_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use empirule_core::annotations::{AnnotationLayout, BAND_CLEARANCE};
use empirule_core::distribution::Normal;
use empirule_core::grid::SampleGrid;

fn bench_sample_grid(c: &mut Criterion) {
    let normal = Normal::standard();

    let mut group = c.benchmark_group("sample_grid");
    for samples in [10_000usize, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |b, &samples| b.iter(|| SampleGrid::compute(black_box(&normal), samples)),
        );
    }
    group.finish();
}

fn bench_annotation_layout(c: &mut Criterion) {
    let normal = Normal::standard();
    let grid = SampleGrid::compute(&normal, 1_000_000);

    c.bench_function("annotation_layout", |b| {
        b.iter(|| AnnotationLayout::compute(black_box(&normal), &grid, 4, BAND_CLEARANCE))
    });
}

criterion_group!(benches, bench_sample_grid, bench_annotation_layout);
criterion_main!(benches);
