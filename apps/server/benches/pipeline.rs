// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark of mask building, tensor decoding and rendering.
//!
//! Run with: cargo bench -p floorplan-lite-server --bench pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_lite_core::tensor::{MIN_WIDTH, PADDING_COLUMN, ROOM_INDEX_COLUMNS, ROOM_TYPE_COLUMNS};
use floorplan_lite_core::{build_masks, decode_polygons, Boundary, Connection, HouseTensor, Room};
use floorplan_lite_render::{matrix_png, polygons_png, MatrixStyle};

/// A row of `n` rooms, each connected to its right neighbour.
fn chain(n: usize) -> (Vec<Room>, Vec<Connection>) {
    let rooms = (0..n)
        .map(|i| Room::new(i as f64 * 4.0, 0.0, 3.0).expect("valid room"))
        .collect();
    let connections = (1..n)
        .map(|i| Connection::new(i as i64 - 1, i as i64))
        .collect();
    (rooms, connections)
}

/// `rooms` square rooms of 4 corners each, followed by padding slots up to 100.
fn house_tensor(rooms: usize) -> HouseTensor {
    let mut rows = Vec::new();
    for room in 0..rooms {
        let cx = -0.8 + 1.6 * room as f64 / rooms.max(1) as f64;
        for (dx, dy) in [(-0.05, -0.05), (0.05, -0.05), (0.05, 0.05), (-0.05, 0.05)] {
            let mut row = vec![0.0; MIN_WIDTH];
            row[0] = cx + dx;
            row[1] = dy;
            row[ROOM_TYPE_COLUMNS.start + 1 + room % 12] = 1.0;
            row[ROOM_INDEX_COLUMNS.start + room] = 1.0;
            rows.push(row);
        }
    }
    while rows.len() < 100 {
        let mut row = vec![0.0; MIN_WIDTH];
        row[PADDING_COLUMN] = 1.0;
        rows.push(row);
    }
    HouseTensor::from_rows(&rows).expect("valid tensor")
}

fn bench_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_masks");
    for n in [4, 16, 64] {
        let (rooms, connections) = chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| build_masks(black_box(&rooms), black_box(&connections), &Boundary::default()))
        });
    }
    group.finish();

    let (rooms, connections) = chain(16);
    let masks = build_masks(&rooms, &connections, &Boundary::default()).expect("masks");
    c.bench_function("matrix_png/16", |b| {
        b.iter(|| matrix_png(black_box(&masks.gen_mask), &MatrixStyle::default()))
    });
}

fn bench_decode(c: &mut Criterion) {
    let tensor = house_tensor(20);
    c.bench_function("decode_polygons/20", |b| b.iter(|| decode_polygons(black_box(&tensor))));

    let polygons = decode_polygons(&tensor);
    c.bench_function("polygons_png/20", |b| {
        b.iter(|| polygons_png(black_box(&polygons), 256))
    });
}

criterion_group!(benches, bench_masks, bench_decode);
criterion_main!(benches);
