// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use seatplan_geometry::{Geometry, GeometryConfig, SeatRecord};
use std::time::Duration;

fn hall(rows: u32, per_row: u32) -> Vec<SeatRecord> {
    let mut records = Vec::new();
    for row in 0..rows {
        for n in 0..per_row {
            let id = format!("{row}-{n}");
            let mut record = SeatRecord::place(
                &id,
                &(row + 1).to_string(),
                &(n + 1).to_string(),
                f64::from(n) * 44.0,
                f64::from(row) * 48.0,
            )
            .with_price(350.0);
            if (row + n) % 7 == 0 {
                record = record.taken();
            }
            records.push(record);
        }
    }
    records
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/build");
    let config = GeometryConfig::default();

    for (rows, per_row) in [(10_u32, 20_u32), (30, 40), (60, 80)] {
        let records = hall(rows, per_row);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(records.len()),
            &records,
            |b, records| {
                b.iter(|| black_box(Geometry::build(records, &config)));
            },
        );
    }

    group.finish();
}

fn bench_from_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/from_json");
    let config = GeometryConfig::default();

    for (rows, per_row) in [(10_u32, 20_u32), (30, 40)] {
        let records = hall(rows, per_row);
        let json = serde_json::to_string(&records).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(records.len()),
            &json,
            |b, json| {
                b.iter(|| black_box(Geometry::from_json(json, &config).unwrap()));
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
    targets = bench_build, bench_from_json
}
criterion_main!(benches);
