// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
use seatplan_render::{HallStyle, Palette, RenderInput, render};
use seatplan_selection::BookingStore;
use seatplan_view::Viewport;
use std::time::Duration;

fn grid(side: u32) -> Geometry {
    let records: Vec<SeatRecord> = (0..side * side)
        .map(|i| {
            let (row, n) = (i / side, i % side);
            let record = SeatRecord::place(
                &i.to_string(),
                &(row + 1).to_string(),
                &(n + 1).to_string(),
                f64::from(n) * 44.0,
                f64::from(row) * 48.0,
            );
            if i % 5 == 0 { record.taken() } else { record }
        })
        .collect();
    Geometry::build(&records, &GeometryConfig::default())
}

fn view_for(geometry: &Geometry, zoom: f64) -> Viewport {
    let mut view = Viewport::new();
    view.set_view_size(Size::new(1280.0, 800.0));
    if let Some(bounds) = geometry.bounds() {
        view.fit_to_screen(bounds.to_rect());
    }
    view.apply_zoom(Point::new(640.0, 400.0), zoom);
    view
}

fn store_with_selection(geometry: &Geometry) -> BookingStore {
    let mut store = BookingStore::new();
    for seat in geometry.seats().iter().filter(|s| s.is_free()).take(5) {
        store.add_seat(seat).unwrap();
    }
    store
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");
    let palette = Palette::default();
    let style = HallStyle::default();

    for side in [10_u32, 30, 60] {
        let geometry = grid(side);
        let store = store_with_selection(&geometry);
        group.throughput(Throughput::Elements(geometry.len() as u64));

        // "fitted" draws every seat, "zoomed" culls most of them.
        for (name, zoom) in [("fitted", 1.0), ("zoomed", 6.0)] {
            let view = view_for(&geometry, zoom);
            let input = RenderInput {
                geometry: &geometry,
                transform: view.transform(),
                view_size: view.view_size(),
                selection: &store,
                palette: &palette,
                style: &style,
            };
            group.bench_with_input(
                BenchmarkId::new(name, geometry.len()),
                &input,
                |b, input| {
                    b.iter(|| black_box(render(input)));
                },
            );
        }
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
    targets = bench_render
}
criterion_main!(benches);
