// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line text view with per-state styling and a placeholder.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Insets, Point, Rect, RoundedRect, Stroke, Vec2};
use nk_layout::inset_rect;
use nk_style::{
    DisabledDerivation, InteractionState, Invalidation, StateStyleStore, StyleKey,
    StyleValueType, keys,
};
use peniko::Color;
use tracing::{debug, trace};

use crate::paint::highlight_bar;
use crate::status::{replace, text_view_state};
use crate::{DEFAULT_HIGHLIGHT_SIZE, DrawCommand, IconLabel, Measure};

/// Default placeholder color, a mid gray.
pub const DEFAULT_TEXT_VIEW_PLACEHOLDER_COLOR: Color = Color::from_rgb8(128, 128, 128);

/// Default placeholder insets: 5 horizontally, 8 vertically.
pub const DEFAULT_PLACEHOLDER_INSETS: Insets = Insets::new(5.0, 8.0, 5.0, 8.0);

/// Frames computed by [`TextView::layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextViewLayout {
    /// Frame of the placeholder label, `None` while it is hidden.
    pub placeholder: Option<Rect>,
    /// Frame of the highlight layer, following the scroll offset.
    pub highlight: Rect,
}

/// A multi-line, optionally editable, text view.
///
/// Styling is looked up in the state given by [`text_view_state`]: focused
/// while editing, normal while editable, disabled otherwise. Disabled colors
/// are always derived from normal colors unless set explicitly.
#[derive(Clone, Debug)]
pub struct TextView {
    style: StateStyleStore,
    text: String,
    editable: bool,
    editing: bool,
    maximum_characters: usize,
    corner_radius: f64,
    placeholder: Option<String>,
    placeholder_label: IconLabel,
    placeholder_insets: Insets,
    placeholder_color: Color,
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl TextView {
    /// Creates an empty, editable view with a white background.
    #[must_use]
    pub fn new() -> Self {
        let mut style = StateStyleStore::with_disabled_derivation(DisabledDerivation::FADE);
        style.set_value(
            keys::BACKGROUND_COLOR,
            InteractionState::NORMAL,
            Some(Color::WHITE),
        );
        Self {
            style,
            text: String::new(),
            editable: true,
            editing: false,
            maximum_characters: 0,
            corner_radius: 0.0,
            placeholder: None,
            placeholder_label: IconLabel::new(),
            placeholder_insets: DEFAULT_PLACEHOLDER_INSETS,
            placeholder_color: DEFAULT_TEXT_VIEW_PLACEHOLDER_COLOR,
        }
    }

    /// The per-state style store.
    #[must_use]
    pub fn style(&self) -> &StateStyleStore {
        &self.style
    }

    /// Resolved style value for `state`.
    #[must_use]
    pub fn style_value<T: StyleValueType>(
        &self,
        key: StyleKey<T>,
        state: InteractionState,
    ) -> Option<T> {
        self.style.value(key, state)
    }

    /// Stores or clears a style value for `state`.
    pub fn set_style<T: StyleValueType>(
        &mut self,
        key: StyleKey<T>,
        state: InteractionState,
        value: Option<T>,
    ) -> Invalidation {
        let changed = self.style.set_value(key, state, value);
        if !changed.is_empty() {
            trace!(attribute = ?key.attribute(), ?state, ?changed, "text view style changed");
        }
        changed
    }

    /// Sets the background color for `state`.
    pub fn set_background_color(
        &mut self,
        color: Option<Color>,
        state: InteractionState,
    ) -> Invalidation {
        self.set_style(keys::BACKGROUND_COLOR, state, color)
    }

    /// Sets the border color for `state`.
    pub fn set_border_color(&mut self, color: Option<Color>, state: InteractionState) -> Invalidation {
        self.set_style(keys::BORDER_COLOR, state, color)
    }

    /// Sets the border width for `state`.
    pub fn set_border_size(&mut self, size: Option<f64>, state: InteractionState) -> Invalidation {
        self.set_style(keys::BORDER_SIZE, state, size)
    }

    /// Sets the highlight bar color for `state`.
    pub fn set_highlight_color(
        &mut self,
        color: Option<Color>,
        state: InteractionState,
    ) -> Invalidation {
        self.set_style(keys::HIGHLIGHT_COLOR, state, color)
    }

    /// Sets the highlight bar height for `state`.
    pub fn set_highlight_size(&mut self, size: Option<f64>, state: InteractionState) -> Invalidation {
        self.set_style(keys::HIGHLIGHT_SIZE, state, size)
    }

    /// State used for style lookups.
    #[must_use]
    pub fn effective_state(&self) -> InteractionState {
        let state = text_view_state(self.editing, self.editable);
        trace!(?state, "text view effective state");
        state
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the whole text. Hides or shows the placeholder.
    pub fn set_text(&mut self, text: &str) -> Invalidation {
        if self.text == text {
            return Invalidation::empty();
        }
        self.text.clear();
        self.text.push_str(text);
        Invalidation::PAINT | Invalidation::LAYOUT
    }

    /// Whether the text can be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Allows or forbids editing.
    pub fn set_editable(&mut self, editable: bool) -> Invalidation {
        replace(&mut self.editable, editable, Invalidation::PAINT)
    }

    /// Whether an edit session is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Starts an edit session.
    pub fn begin_editing(&mut self) -> Invalidation {
        replace(
            &mut self.editing,
            true,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Ends the edit session.
    pub fn end_editing(&mut self) -> Invalidation {
        replace(
            &mut self.editing,
            false,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Character limit, zero for none.
    #[must_use]
    pub fn maximum_characters(&self) -> usize {
        self.maximum_characters
    }

    /// Sets the character limit. Zero removes it.
    pub fn set_maximum_characters(&mut self, limit: usize) {
        self.maximum_characters = limit;
    }

    /// Whether replacing the characters in `range` with `replacement` is allowed.
    ///
    /// `range` counts characters, not bytes. With a limit set, the edit is
    /// accepted only if the resulting text stays within it.
    #[must_use]
    pub fn should_change_text(&self, range: Range<usize>, replacement: &str) -> bool {
        if self.maximum_characters == 0 {
            return true;
        }
        let current = self.text.chars().count();
        // Only characters that exist can be removed.
        let removed = range.end.min(current).saturating_sub(range.start.min(current));
        let resulting = current - removed + replacement.chars().count();
        let accepted = resulting <= self.maximum_characters;
        if !accepted {
            debug!(
                resulting,
                limit = self.maximum_characters,
                "text view edit rejected"
            );
        }
        accepted
    }

    /// Fixed corner radius of the background.
    pub fn set_corner_radius(&mut self, radius: f64) -> Invalidation {
        replace(
            &mut self.corner_radius,
            radius,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Sets or clears the placeholder text.
    pub fn set_placeholder(&mut self, text: Option<&str>) -> Invalidation {
        replace(
            &mut self.placeholder,
            text.map(String::from),
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Placeholder text, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Placeholder text color.
    #[must_use]
    pub fn placeholder_color(&self) -> Color {
        self.placeholder_color
    }

    /// Sets the placeholder text color.
    pub fn set_placeholder_color(&mut self, color: Color) -> Invalidation {
        replace(&mut self.placeholder_color, color, Invalidation::PAINT)
    }

    /// Sets the insets of the placeholder label.
    pub fn set_placeholder_insets(&mut self, insets: Insets) -> Invalidation {
        replace(&mut self.placeholder_insets, insets, Invalidation::LAYOUT)
    }

    /// The label used to lay out the placeholder.
    pub fn placeholder_label_mut(&mut self) -> &mut IconLabel {
        &mut self.placeholder_label
    }

    /// Whether the placeholder is drawn.
    #[must_use]
    pub fn is_placeholder_visible(&self) -> bool {
        self.text.is_empty() && self.placeholder.is_some()
    }

    /// Computes the placeholder and highlight layer frames.
    ///
    /// `placeholder_text` measures the placeholder string.
    #[must_use]
    pub fn layout(
        &self,
        bounds: Rect,
        content_offset: Vec2,
        placeholder_text: &impl Measure,
    ) -> TextViewLayout {
        let placeholder = self.is_placeholder_visible().then(|| {
            let available = inset_rect(bounds, self.placeholder_insets).size();
            let size = self
                .placeholder_label
                .size_that_fits(available, placeholder_text);
            Rect::from_origin_size(
                Point::new(
                    bounds.x0 + self.placeholder_insets.x0,
                    bounds.y0 + self.placeholder_insets.y0,
                ),
                size,
            )
        });
        TextViewLayout {
            placeholder,
            highlight: bounds.with_origin((bounds.x0, content_offset.y)),
        }
    }

    /// Paint commands for `bounds` in the effective state.
    ///
    /// Emits the background fill, the border and the highlight bar.
    #[must_use]
    pub fn paint(&self, bounds: Rect) -> Vec<DrawCommand> {
        let state = self.effective_state();
        let shape = RoundedRect::from_rect(bounds, self.corner_radius);
        let mut commands = Vec::new();

        if let Some(color) = self.style.value(keys::BACKGROUND_COLOR, state) {
            commands.push(DrawCommand::Fill { shape, color });
        }
        let border = self.style.value(keys::BORDER_SIZE, state).unwrap_or(0.0);
        if let Some(color) = self.style.value(keys::BORDER_COLOR, state)
            && border > 0.0
        {
            commands.push(DrawCommand::Stroke {
                shape,
                color,
                style: Stroke::new(border),
            });
        }
        if let Some(color) = self.style.value(keys::HIGHLIGHT_COLOR, state) {
            let size = self
                .style
                .value(keys::HIGHLIGHT_SIZE, state)
                .unwrap_or(DEFAULT_HIGHLIGHT_SIZE);
            commands.push(DrawCommand::fill_rect(highlight_bar(bounds, size), color));
        }
        commands
    }
}
