#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raster::prelude::*;
use raster::render::rasterize;

fn rasterize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for length in [10, 100, 1_000, 10_000] {
        let cases = [
            ("horizontal", Point::new(length, 0)),
            ("shallow", Point::new(length, length / 3)),
            ("steep", Point::new(length / 3, length)),
        ];
        for (name, to) in cases {
            group.bench_with_input(BenchmarkId::new(name, length), &to, |b, &to| {
                b.iter(|| rasterize(black_box(Point::ORIGIN), black_box(to)));
            });
        }
    }

    group.finish();
}

fn line_draw_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_draw");

    let line = Line::new(Point::new(0, 0), Point::new(799, 599), Rgba::WHITE);

    group.bench_function("framebuffer", |b| {
        let mut fb = Framebuffer::new(800, 600).expect("framebuffer creation should succeed");
        b.iter(|| line.draw(black_box(&mut fb)));
    });

    group.bench_function("sparse", |b| {
        b.iter(|| {
            let mut img = SparseImage::default();
            line.draw(&mut img);
            img
        });
    });

    group.finish();
}

criterion_group!(benches, rasterize_benchmark, line_draw_benchmark);
criterion_main!(benches);
