// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `nk_layout` composition and grid geometry.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use kurbo::{Insets, Rect, Size};
use nk_layout::{AlignmentSpec, BoxComposition, CrossAlign, GridLines, LayoutBox, Side};
use nk_widgets::TitleLabel;

fn bench_compose(c: &mut Criterion) {
    let config = LayoutBox::new()
        .with_insets(Insets::uniform(4.0))
        .with_cap(Size::new(32.0, 32.0))
        .with_spacing(5.0);
    let available = Size::new(200.0, 50.0);
    let primary = Size::new(120.0, 20.0);

    let mut group = c.benchmark_group("layout/compose");

    for side in [Side::Left, Side::Right, Side::Top, Side::Bottom] {
        let alignment = AlignmentSpec::new(side, CrossAlign::Center);
        group.bench_function(BenchmarkId::new("decorated", format!("{side:?}")), |b| {
            b.iter(|| {
                black_box(BoxComposition::compute(
                    black_box(available),
                    primary,
                    black_box(Size::new(40.0, 40.0)),
                    &config,
                    alignment,
                ))
            })
        });
    }

    group.bench_function("undecorated", |b| {
        b.iter(|| {
            black_box(BoxComposition::compute(
                black_box(available),
                primary,
                black_box(Size::ZERO),
                &config,
                AlignmentSpec::LEFT_CENTER,
            ))
        })
    });

    group.bench_function("title_label/size_that_fits", |b| {
        let label = TitleLabel::new();
        let text = |_: Size| Size::new(120.0, 20.0);
        let title = |_: Size| Size::new(48.0, 16.0);
        b.iter(|| black_box(label.size_that_fits(black_box(available), &text, &title)))
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let mut group = c.benchmark_group("layout/grid");

    for n in [0_usize, 4, 32, 256] {
        let grid = GridLines::new(n, n);
        group.bench_with_input(BenchmarkId::new("segments", n), &grid, |b, grid| {
            b.iter(|| black_box(grid.segments(black_box(bounds)).count()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_grid);
criterion_main!(benches);
