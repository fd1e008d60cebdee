// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the stage transform math.
//!
//! Measures the hot paths hit once per gesture event:
//! - Fit computation
//! - Focal zoom with pan clamping
//! - Pan clamping alone

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size, Vector};
use plan_lens::ui::state::{StageGeometry, StageTransform, ZoomDirection};
use std::hint::black_box;

fn stage_geometry() -> StageGeometry {
    StageGeometry::new(Size::new(1280.0, 800.0), Some(Size::new(4096.0, 2730.0)))
}

fn bench_fit_to_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_math");
    let geo = stage_geometry();

    group.bench_function("fit_to_stage", |b| {
        b.iter(|| {
            let mut transform = StageTransform::default();
            transform.fit_to_stage(black_box(geo));
            black_box(&transform);
        });
    });

    group.finish();
}

fn bench_focal_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_math");
    let geo = stage_geometry();

    let mut fitted = StageTransform::default();
    fitted.fit_to_stage(geo);

    group.bench_function("zoom_at", |b| {
        b.iter(|| {
            let mut transform = fitted;
            transform.zoom_at(black_box(geo), 1.2, Point::new(640.0, 400.0));
            black_box(&transform);
        });
    });

    group.bench_function("wheel_burst", |b| {
        b.iter(|| {
            let mut transform = fitted;
            for i in 0..20 {
                let direction = if i % 3 == 0 {
                    ZoomDirection::Out
                } else {
                    ZoomDirection::In
                };
                transform.step(black_box(geo), direction, Some(Point::new(123.0, 456.0)));
            }
            black_box(&transform);
        });
    });

    group.finish();
}

fn bench_pan_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_math");
    let geo = stage_geometry();

    let mut magnified = StageTransform::default();
    magnified.fit_to_stage(geo);
    magnified.zoom_at(geo, 4.0, Point::new(640.0, 400.0));

    group.bench_function("pan_to_clamped", |b| {
        b.iter(|| {
            let mut transform = magnified;
            transform.pan_to(black_box(geo), Vector::new(-2500.0, 900.0));
            black_box(&transform);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit_to_stage, bench_focal_zoom, bench_pan_clamp);
criterion_main!(benches);
