// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for geometry rebuilds and visible-range resolution.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect};
use understory_virtual_list::{GeometryTable, LayoutAxis, visible_range};

/// Deterministic variable extents between 24 and 87.
fn extent(index: usize) -> f64 {
    24.0 + ((index * 37) % 64) as f64
}

fn table(axis: LayoutAxis, len: usize) -> GeometryTable {
    let mut table = GeometryTable::new(axis);
    table.set_gap(2.0);
    table.set_cross_extent(320.0);
    table.rebuild_all(len, extent);
    table
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry_rebuild");
    for &len in &[1_000_usize, 100_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("all", len), &len, |b, &len| {
            let mut table = GeometryTable::new(LayoutAxis::TopToBottom);
            b.iter(|| {
                // Alternate sizes so every rebuild actually changes something.
                table.rebuild_all(len, |i| extent(i) + 1.0);
                table.rebuild_all(len, extent);
                black_box(table.content_extent());
            });
        });
        group.bench_with_input(BenchmarkId::new("subset_head", len), &len, |b, &len| {
            let mut table = table(LayoutAxis::TopToBottom, len);
            let mut bump = 0.0;
            b.iter(|| {
                bump = 1.0 - bump;
                black_box(table.rebuild_subset([0, 1, 2], |i| extent(i) + bump));
            });
        });
    }
    group.finish();
}

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_range");
    for axis in [LayoutAxis::TopToBottom, LayoutAxis::BottomToTop] {
        let table = table(axis, 100_000);
        let content = table.content_extent();
        let offsets: Vec<f64> = (0..256).map(|i| content * f64::from(i) / 256.0).collect();
        group.throughput(Throughput::Elements(offsets.len() as u64));
        group.bench_function(BenchmarkId::new("sweep", format!("{axis:?}")), |b| {
            b.iter(|| {
                for &offset in &offsets {
                    let viewport = Rect::new(0.0, offset, 320.0, offset + 640.0);
                    black_box(visible_range(
                        &table,
                        viewport,
                        Insets::uniform_xy(0.0, -120.0),
                    ));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_visible_range);
criterion_main!(benches);
