// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
use seatplan_hit::{HitParams, hit_test, pick};
use seatplan_view::Viewport;
use std::time::Duration;

fn grid(side: u32) -> Geometry {
    let records: Vec<SeatRecord> = (0..side * side)
        .map(|i| {
            let (row, n) = (i / side, i % side);
            SeatRecord::place(
                &i.to_string(),
                &(row + 1).to_string(),
                &(n + 1).to_string(),
                f64::from(n) * 44.0,
                f64::from(row) * 48.0,
            )
        })
        .collect();
    Geometry::build(&records, &GeometryConfig::default())
}

fn fitted(geometry: &Geometry) -> Viewport {
    let mut view = Viewport::new();
    view.set_view_size(Size::new(1280.0, 800.0));
    let content = geometry.bounds().map_or(Rect::ZERO, |b| b.to_rect());
    view.fit_to_screen(content);
    view
}

/// Screen points spread over the view, most of them between seats.
fn probes() -> Vec<Point> {
    (0..256)
        .map(|i| Point::new(f64::from(i % 16) * 80.0 + 3.0, f64::from(i / 16) * 50.0 + 7.0))
        .collect()
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/pick");
    let probes = probes();

    for side in [10_u32, 30, 60] {
        let geometry = grid(side);
        let transform = fitted(&geometry).transform();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(geometry.len()),
            &geometry,
            |b, geometry| {
                b.iter(|| {
                    for &pt in &probes {
                        black_box(pick(pt, &transform, geometry.seats()));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_hit_with_tolerance(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit/tolerance");
    let probes = probes();
    let params = HitParams::with_tolerance(8.0);

    for side in [10_u32, 30, 60] {
        let geometry = grid(side);
        let transform = fitted(&geometry).transform();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(geometry.len()),
            &geometry,
            |b, geometry| {
                b.iter(|| {
                    for &pt in &probes {
                        black_box(hit_test(pt, &transform, geometry.seats(), &params));
                    }
                });
            },
        );
    }

    group.finish();
}

fn configure() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = configure();
    targets = bench_pick, bench_hit_with_tolerance
}
criterion_main!(benches);
