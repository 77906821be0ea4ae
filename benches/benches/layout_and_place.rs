// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect, Size, Vec2};
use overstory_anchor::{CompassPosition, place};
use overstory_layout::{
    HeightMode, HeightPolicy, ItemSize, Layout, MeasureContent, PopoverHeight, WidthMode,
    accumulate, resolve_item_sizes,
};

/// Cheap deterministic probe: widths cycle below the constraint, heights vary
/// by a few line increments.
struct SyntheticProbe;

impl MeasureContent for SyntheticProbe {
    fn measure(&mut self, index: usize, width_constraint: f64, _policy: HeightPolicy) -> Size {
        let width = (40.0 + (index % 17) as f64 * 9.0).min(width_constraint);
        let height = 18.0 * (1 + index % 3) as f64;
        Size::new(width, height)
    }
}

fn adaptive_layout() -> Layout {
    let mut layout = Layout::new(ItemSize::new(
        WidthMode::Flexible { max_width: 240.0 },
        HeightMode::Adaptive,
    ));
    layout.item_spacing = 4.0;
    layout.content_inset = Insets::uniform(8.0);
    layout.popover_height = PopoverHeight::Adaptive { max_height: 480.0 };
    layout
}

fn bench_resolve_accumulate(c: &mut Criterion) {
    let layout = adaptive_layout();
    let mut group = c.benchmark_group("resolve_accumulate");
    for n in [8_usize, 64, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("adaptive_{n}"), |b| {
            b.iter(|| {
                let resolved =
                    resolve_item_sizes(black_box(&layout), black_box(n), &mut SyntheticProbe);
                accumulate(black_box(&layout), &resolved)
            });
        });
    }
    let fixed = Layout::new(ItemSize::new(WidthMode::Fixed(200.0), HeightMode::Fixed(32.0)));
    for n in [8_usize, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fixed_{n}"), |b| {
            b.iter(|| {
                let resolved =
                    resolve_item_sizes(black_box(&fixed), black_box(n), &mut SyntheticProbe);
                accumulate(black_box(&fixed), &resolved)
            });
        });
    }
    group.finish();
}

fn bench_place(c: &mut Criterion) {
    let anchor = Rect::new(100.0, 200.0, 150.0, 220.0);
    let size = Size::new(180.0, 260.0);
    let offset = Vec2::new(4.0, -2.0);
    c.bench_function("place_compass_all", |b| {
        b.iter(|| {
            for compass in CompassPosition::ALL {
                black_box(place(
                    black_box(anchor),
                    compass,
                    black_box(offset),
                    black_box(size),
                ));
            }
        });
    });
}

criterion_group!(benches, bench_resolve_accumulate, bench_place);
criterion_main!(benches);
