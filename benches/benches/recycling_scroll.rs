// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for scroll-driven reconciliation in a recycling list.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_recycler::{
    DataSource, HeadlessViewport, LayoutAxis, ListDelegate, ListOptions, RecyclingList,
    ReusePool, ScrollPosition,
};

/// A view stand-in with a little state to rebind.
#[derive(Debug, Default)]
struct Row {
    index: usize,
    label: String,
}

struct Rows(usize);

impl DataSource<Row> for Rows {
    fn item_count(&self) -> usize {
        self.0
    }

    fn view_for_item(&mut self, index: usize, pool: &mut ReusePool<Row>) -> Option<Row> {
        let mut row = pool.dequeue().unwrap_or_default();
        row.index = index;
        row.label.clear();
        row.label.push_str("row");
        Some(row)
    }
}

type List = RecyclingList<Row, Rows, HeadlessViewport>;

fn list(len: usize, variable: bool) -> List {
    let host = HeadlessViewport::new(Size::new(320.0, 640.0));
    let mut list = RecyclingList::new(
        LayoutAxis::TopToBottom,
        ListOptions::default(),
        Rows(len),
        host,
    );
    if variable {
        list.set_delegate(
            ListDelegate::new().with_height_for_item(|i| 24.0 + ((i * 37) % 64) as f64),
        );
    }
    list.layout();
    list
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycling_scroll");
    for (name, variable) in [("fixed", false), ("variable", true)] {
        let mut list = list(100_000, variable);
        let max = list.content_size().height - 640.0;
        group.bench_function(format!("step_{name}"), |b| {
            let mut offset = 0.0;
            b.iter(|| {
                offset += 17.0;
                if offset > max {
                    offset = 0.0;
                }
                list.host_mut().scroll_to(Point::new(0.0, offset));
                black_box(list.layout());
            });
        });
        group.bench_function(format!("jump_{name}"), |b| {
            let mut index = 0;
            b.iter(|| {
                index = (index + 7919) % 100_000;
                black_box(list.scroll_to_index(index, ScrollPosition::Center, false));
            });
        });
    }
    group.bench_function("reload_data", |b| {
        b.iter_batched(
            || list(10_000, true),
            |mut list| black_box(list.reload_data()),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_scroll);
criterion_main!(benches);
