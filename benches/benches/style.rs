// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `nk_style` lookups and `nk_widgets` paint passes.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use kurbo::{Rect, Vec2};
use nk_style::{DisabledDerivation, InteractionState, StateStyleStore, StyleAttribute, keys};
use nk_widgets::TextField;
use peniko::Color;

const STATES: [InteractionState; 4] = [
    InteractionState::NORMAL,
    InteractionState::FOCUSED,
    InteractionState::DISABLED,
    InteractionState::ERROR,
];

fn populated_store() -> StateStyleStore {
    let mut store = StateStyleStore::with_disabled_derivation(DisabledDerivation::FADE);
    let blue = Color::from_rgb8(0, 122, 255);
    for state in [InteractionState::NORMAL, InteractionState::FOCUSED] {
        store.set_value(keys::BACKGROUND_COLOR, state, Some(Color::WHITE));
        store.set_value(keys::BORDER_COLOR, state, Some(blue));
        store.set_value(keys::HIGHLIGHT_COLOR, state, Some(blue));
    }
    store.set_value(keys::BORDER_SIZE, InteractionState::NORMAL, Some(1.0));
    store.set_value(keys::SHADOW_OFFSET, InteractionState::NORMAL, Some(Vec2::new(0.0, 1.0)));
    store
}

fn bench_store(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: StateStyleStore={} TextField={}",
            core::mem::size_of::<StateStyleStore>(),
            core::mem::size_of::<TextField>(),
        );
    });

    let store = populated_store();
    let mut group = c.benchmark_group("style/resolve");

    group.bench_function("explicit", |b| {
        b.iter(|| black_box(store.value(keys::BORDER_COLOR, black_box(InteractionState::FOCUSED))))
    });

    group.bench_function("fallback_normal", |b| {
        b.iter(|| black_box(store.value(keys::BORDER_SIZE, black_box(InteractionState::ERROR))))
    });

    group.bench_function("derived_disabled", |b| {
        b.iter(|| {
            black_box(store.value(keys::BACKGROUND_COLOR, black_box(InteractionState::DISABLED)))
        })
    });

    group.bench_function("absent", |b| {
        b.iter(|| black_box(store.value(keys::SHADOW_COLOR, black_box(InteractionState::ERROR))))
    });

    group.bench_function("all_attributes_all_states", |b| {
        b.iter(|| {
            for state in STATES {
                for attribute in StyleAttribute::ALL {
                    black_box(store.get(attribute, state));
                }
            }
        })
    });

    group.finish();

    let mut group = c.benchmark_group("style/mutate");

    group.bench_function("set_every_slot", |b| {
        b.iter_batched(
            StateStyleStore::new,
            |mut store| {
                for state in STATES {
                    store.set_value(keys::BACKGROUND_COLOR, state, Some(Color::WHITE));
                    store.set_value(keys::HIGHLIGHT_SIZE, state, Some(2.0));
                }
                black_box(store);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_unchanged", |b| {
        let mut store = populated_store();
        b.iter(|| {
            black_box(store.set_value(
                keys::BORDER_SIZE,
                InteractionState::NORMAL,
                black_box(Some(1.0)),
            ))
        })
    });

    group.finish();
}

fn bench_text_field_paint(c: &mut Criterion) {
    let mut field = TextField::new();
    let blue = Color::from_rgb8(0, 122, 255);
    field.set_background_color(Some(Color::WHITE), InteractionState::NORMAL);
    field.set_border_color(Some(blue), InteractionState::NORMAL);
    field.set_border_size(1.0);
    field.set_shadow_color(Some(Color::BLACK), InteractionState::NORMAL);
    field.set_highlight_color(Some(blue), InteractionState::FOCUSED);
    field.set_rounded(true);
    field.begin_editing();

    let bounds = Rect::new(0.0, 0.0, 320.0, 44.0);
    c.bench_function("text_field/paint", |b| {
        b.iter(|| black_box(field.paint(black_box(bounds))))
    });
}

criterion_group!(benches, bench_store, bench_text_field_paint);
criterion_main!(benches);
