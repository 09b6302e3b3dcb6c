// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `nk_widgets` crate.
//!
//! These drive widgets the way a host does: set properties, react to the
//! returned invalidation, then run layout and paint passes.

use kurbo::{Insets, Rect, RoundedRect, Size, Vec2};
use nk_layout::{AlignmentSpec, ContentMode, CrossAlign, Side};
use nk_style::{InteractionState, keys};
use nk_widgets::{
    DrawCommand, GridLineView, IconLabel, ImageView, Invalidation, TextField, TextView,
    TitleLabel,
};
use peniko::Color;

const RED: Color = Color::from_rgb8(255, 0, 0);
const GREEN: Color = Color::from_rgb8(0, 255, 0);

/// Host-side record of pending work, as a UI framework would keep it.
#[derive(Default)]
struct Host {
    pending: Invalidation,
}

impl Host {
    fn request(&mut self, invalidation: Invalidation) {
        self.pending |= invalidation;
    }

    fn take(&mut self) -> Invalidation {
        core::mem::take(&mut self.pending)
    }
}

#[test]
fn text_field_status_precedence_drives_paint() {
    let bounds = Rect::new(0.0, 0.0, 240.0, 44.0);
    let mut host = Host::default();
    let mut field = TextField::new();

    host.request(field.set_background_color(Some(Color::WHITE), InteractionState::NORMAL));
    host.request(field.set_background_color(Some(GREEN), InteractionState::FOCUSED));
    host.request(field.set_background_color(Some(RED), InteractionState::ERROR));
    assert_eq!(host.take(), Invalidation::PAINT);

    let background = |field: &TextField| field.paint(bounds)[0].color();

    assert_eq!(background(&field), Color::WHITE);

    host.request(field.begin_editing());
    assert_eq!(host.take(), Invalidation::PAINT);
    assert_eq!(background(&field), GREEN);

    field.set_error(true);
    assert_eq!(background(&field), RED);

    // Focusing again clears the error.
    field.end_editing();
    field.begin_editing();
    assert_eq!(background(&field), GREEN);

    // A disabled, unfocused field falls back to normal without derivation.
    field.end_editing();
    field.set_enabled(false);
    assert_eq!(field.effective_state(), InteractionState::DISABLED);
    assert_eq!(background(&field), Color::WHITE);
}

#[test]
fn text_field_shadow_uses_rounded_shape() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 30.0);
    let mut field = TextField::new();
    field.set_rounded(true);
    field.set_shadow_color(Some(RED), InteractionState::NORMAL);
    field.set_shadow_offset(Vec2::new(0.0, 2.0));
    field.set_shadow_opacity(0.25);

    let commands = field.paint(bounds);
    assert_eq!(
        commands,
        [DrawCommand::Shadow {
            shape: RoundedRect::from_rect(bounds, 15.0),
            color: RED,
            radius: 0.0,
            opacity: 0.25,
            offset: Vec2::new(0.0, 2.0),
        }]
    );
}

#[test]
fn text_field_highlight_size_change_requests_layout() {
    let mut field = TextField::new();
    assert_eq!(
        field.set_highlight_size(Some(3.0), InteractionState::NORMAL),
        Invalidation::PAINT | Invalidation::LAYOUT
    );
    assert_eq!(
        field.style_value(keys::HIGHLIGHT_SIZE, InteractionState::FOCUSED),
        Some(3.0)
    );
}

#[test]
fn text_view_edit_session() {
    let bounds = Rect::new(0.0, 0.0, 320.0, 200.0);
    let measure = |_: Size| Size::new(90.0, 17.0);
    let mut view = TextView::new();
    view.set_placeholder(Some("Notes"));
    view.set_maximum_characters(4);
    view.set_highlight_color(Some(GREEN), InteractionState::NORMAL);

    let layout = view.layout(bounds, Vec2::ZERO, &measure);
    assert_eq!(layout.placeholder, Some(Rect::new(5.0, 8.0, 95.0, 25.0)));

    assert_eq!(
        view.begin_editing(),
        Invalidation::PAINT | Invalidation::LAYOUT
    );
    assert!(view.should_change_text(0..0, "abcd"));
    view.set_text("abcd");
    assert!(!view.should_change_text(4..4, "e"));
    assert!(view.should_change_text(3..4, "e"));

    let layout = view.layout(bounds, Vec2::new(0.0, 12.0), &measure);
    assert_eq!(layout.placeholder, None);
    assert_eq!(layout.highlight.origin().y, 12.0);

    // Focused has no highlight entry of its own and falls back to normal.
    let commands = view.paint(bounds);
    assert_eq!(
        commands.last(),
        Some(&DrawCommand::fill_rect(
            Rect::new(0.0, 198.0, 320.0, 200.0),
            GREEN
        ))
    );

    view.end_editing();
    view.set_editable(false);
    let faded = view.paint(bounds).last().map(DrawCommand::color);
    assert_eq!(faded.map(|c| c.components), Some([0.0, 1.0, 0.0, 0.3]));
}

#[test]
fn icon_label_all_sides() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut label = IconLabel::new();
    label.set_image_size(Some(Size::new(20.0, 10.0)));
    label.set_spacing(4.0);

    let cases = [
        (Side::Left, Rect::new(0.0, 45.0, 20.0, 55.0), Rect::new(24.0, 0.0, 100.0, 100.0)),
        (Side::Right, Rect::new(80.0, 45.0, 100.0, 55.0), Rect::new(0.0, 0.0, 76.0, 100.0)),
        (Side::Top, Rect::new(40.0, 0.0, 60.0, 10.0), Rect::new(0.0, 14.0, 100.0, 100.0)),
        (Side::Bottom, Rect::new(40.0, 90.0, 60.0, 100.0), Rect::new(0.0, 0.0, 100.0, 86.0)),
    ];
    for (side, frame, text) in cases {
        label.set_alignment(AlignmentSpec::new(side, CrossAlign::Center));
        assert_eq!(label.image_frame(bounds), frame, "{side:?}");
        assert_eq!(label.text_rect(bounds), text, "{side:?}");
    }
}

#[test]
fn title_label_with_insets_and_extend() {
    let mut label = TitleLabel::new();
    label.set_edge_insets(Insets::new(8.0, 2.0, 8.0, 2.0));
    label.set_extend_size(Size::new(0.0, 6.0));
    label.set_alignment(AlignmentSpec::RIGHT_CENTER);

    let text = |_: Size| Size::new(50.0, 20.0);
    let title = |_: Size| Size::new(30.0, 14.0);

    assert_eq!(
        label.size_that_fits(Size::new(400.0, 60.0), &text, &title),
        Size::new(8.0 + 50.0 + 5.0 + 30.0 + 8.0, 20.0 + 4.0 + 6.0)
    );
    let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
    assert_eq!(label.title_frame(bounds, &title), Rect::new(162.0, 13.0, 192.0, 27.0));
    assert_eq!(label.text_rect(bounds, &title), Rect::new(8.0, 2.0, 157.0, 38.0));
}

#[test]
fn image_view_modes() {
    let mut view = ImageView::new();
    assert_eq!(view.size_that_fits(Size::new(300.0, 300.0)), Size::ZERO);

    view.set_image_size(Some(Size::new(300.0, 600.0)));
    view.set_content_mode(ContentMode::AspectFit);
    assert_eq!(view.size_that_fits(Size::new(150.0, 200.0)), Size::new(100.0, 200.0));

    view.set_always_true_size(true);
    assert_eq!(view.size_that_fits(Size::new(150.0, 200.0)), Size::new(300.0, 600.0));
}

#[test]
fn grid_line_view_with_insets() {
    let mut view = GridLineView::new();
    view.set_vertical_lines(3);
    view.set_edge_insets(Insets::uniform(10.0));

    let xs: Vec<f64> = view
        .paint(Rect::new(0.0, 0.0, 120.0, 60.0))
        .into_iter()
        .filter_map(|command| match command {
            DrawCommand::Line { line, .. } => Some(line.p0.x),
            _ => None,
        })
        .collect();
    assert_eq!(xs, [35.0, 60.0, 85.0]);
}
