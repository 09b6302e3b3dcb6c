// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text field with per-state styling.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, RoundedRect, Size, Stroke, Vec2};
use nk_layout::inset_rect;
use nk_style::{
    DisabledDerivation, InteractionState, Invalidation, StateStyleStore, StyleKey,
    StyleValueType, keys,
};
use peniko::Color;
use tracing::trace;

use crate::paint::highlight_bar;
use crate::status::replace;
use crate::{ControlStatus, DEFAULT_HIGHLIGHT_SIZE, DrawCommand};

/// Default shadow opacity.
pub const DEFAULT_SHADOW_OPACITY: f64 = 0.5;

/// Default placeholder color, white at 80% brightness.
pub const DEFAULT_PLACEHOLDER_COLOR: Color = Color::from_rgb8(204, 204, 204);

/// Placeholder text and the color to draw it with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placeholder<'a> {
    /// Placeholder text.
    pub text: &'a str,
    /// Color override. `None` means the host's default placeholder style.
    pub color: Option<Color>,
}

/// Frames computed by [`TextField::layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextFieldLayout {
    /// Corner radius of the field's background.
    pub corner_radius: f64,
    /// Frame of the leading accessory, if there is one.
    pub left_accessory: Option<Rect>,
    /// Frame of the trailing accessory, if there is one.
    pub right_accessory: Option<Rect>,
    /// Rectangle used for text, placeholder and editing.
    pub content: Rect,
}

/// A single-line text field.
///
/// Background, border, shadow and highlight bar are styled per
/// [`InteractionState`]. The state used for painting comes from the field's
/// [`ControlStatus`]: an error wins over focus, which wins over the platform
/// state.
///
/// ```rust
/// use kurbo::Rect;
/// use nk_style::InteractionState;
/// use nk_widgets::{DrawCommand, TextField};
/// use peniko::Color;
///
/// let blue = Color::from_rgb8(0, 122, 255);
/// let red = Color::from_rgb8(255, 42, 35);
///
/// let mut field = TextField::new();
/// field.set_highlight_color(Some(blue), InteractionState::FOCUSED);
/// field.set_highlight_color(Some(red), InteractionState::ERROR);
///
/// field.begin_editing();
/// let commands = field.paint(Rect::new(0.0, 0.0, 200.0, 40.0));
/// assert_eq!(commands, [DrawCommand::fill_rect(Rect::new(0.0, 38.0, 200.0, 40.0), blue)]);
///
/// field.set_error(true);
/// assert_eq!(field.effective_state(), InteractionState::ERROR);
/// ```
#[derive(Clone, Debug)]
pub struct TextField {
    style: StateStyleStore,
    status: ControlStatus,
    corner_radius: f64,
    rounded: bool,
    content_insets: Insets,
    left_padding: f64,
    right_padding: f64,
    left_accessory: Option<Size>,
    right_accessory: Option<Size>,
    left_accessory_insets: Insets,
    right_accessory_insets: Insets,
    placeholder: Option<String>,
    placeholder_color: Option<Color>,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    /// Creates an enabled field with no colors set.
    #[must_use]
    pub fn new() -> Self {
        let mut style = StateStyleStore::new();
        let normal = InteractionState::NORMAL;
        style.set_value(keys::SHADOW_OPACITY, normal, Some(DEFAULT_SHADOW_OPACITY));
        style.set_value(keys::SHADOW_RADIUS, normal, Some(0.0));
        style.set_value(keys::SHADOW_OFFSET, normal, Some(Vec2::ZERO));
        style.set_value(keys::BORDER_SIZE, normal, Some(0.0));
        Self {
            style,
            status: ControlStatus::new(),
            corner_radius: 0.0,
            rounded: false,
            content_insets: Insets::ZERO,
            left_padding: 0.0,
            right_padding: 10.0,
            left_accessory: None,
            right_accessory: None,
            // Insets are (left, top, right, bottom).
            left_accessory_insets: Insets::new(10.0, 0.0, 0.0, 0.0),
            right_accessory_insets: Insets::new(0.0, 0.0, 10.0, 0.0),
            placeholder: None,
            placeholder_color: Some(DEFAULT_PLACEHOLDER_COLOR),
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
            trace!(attribute = ?key.attribute(), ?state, ?changed, "text field style changed");
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

    /// Sets the shadow color for `state`. No shadow is drawn without one.
    pub fn set_shadow_color(&mut self, color: Option<Color>, state: InteractionState) -> Invalidation {
        self.set_style(keys::SHADOW_COLOR, state, color)
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

    /// Sets the border width used in every state without its own entry.
    pub fn set_border_size(&mut self, size: f64) -> Invalidation {
        self.set_style(keys::BORDER_SIZE, InteractionState::NORMAL, Some(size))
    }

    /// Sets the shadow blur radius.
    pub fn set_shadow_radius(&mut self, radius: f64) -> Invalidation {
        self.set_style(keys::SHADOW_RADIUS, InteractionState::NORMAL, Some(radius))
    }

    /// Sets the shadow opacity.
    pub fn set_shadow_opacity(&mut self, opacity: f64) -> Invalidation {
        self.set_style(keys::SHADOW_OPACITY, InteractionState::NORMAL, Some(opacity))
    }

    /// Sets the shadow offset.
    pub fn set_shadow_offset(&mut self, offset: Vec2) -> Invalidation {
        self.set_style(keys::SHADOW_OFFSET, InteractionState::NORMAL, Some(offset))
    }

    /// Whether disabled colors are derived from normal colors.
    #[must_use]
    pub fn auto_disabled_color(&self) -> bool {
        self.style.disabled_derivation().is_enabled()
    }

    /// Derives disabled colors from normal colors when no disabled color is set.
    pub fn set_auto_disabled_color(&mut self, enabled: bool) -> Invalidation {
        let derivation = if enabled {
            DisabledDerivation::FADE
        } else {
            DisabledDerivation::Off
        };
        self.style.set_disabled_derivation(derivation)
    }

    /// Current status flags.
    #[must_use]
    pub fn status(&self) -> ControlStatus {
        self.status
    }

    /// State used for style lookups.
    #[must_use]
    pub fn effective_state(&self) -> InteractionState {
        let state = self.status.effective_state();
        trace!(?state, "text field effective state");
        state
    }

    /// Enables or disables the field.
    pub fn set_enabled(&mut self, enabled: bool) -> Invalidation {
        replace(&mut self.status.enabled, enabled, Invalidation::PAINT)
    }

    /// Marks the field as pressed.
    pub fn set_highlighted(&mut self, highlighted: bool) -> Invalidation {
        replace(&mut self.status.highlighted, highlighted, Invalidation::PAINT)
    }

    /// Marks the field as selected.
    pub fn set_selected(&mut self, selected: bool) -> Invalidation {
        replace(&mut self.status.selected, selected, Invalidation::PAINT)
    }

    /// Whether the field shows an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.error
    }

    /// Shows or hides the error state.
    pub fn set_error(&mut self, error: bool) -> Invalidation {
        replace(&mut self.status.error, error, Invalidation::PAINT)
    }

    /// Focuses the field. Clears any error.
    pub fn begin_editing(&mut self) -> Invalidation {
        let error = replace(&mut self.status.error, false, Invalidation::PAINT);
        error | replace(&mut self.status.focused, true, Invalidation::PAINT)
    }

    /// Removes focus from the field.
    pub fn end_editing(&mut self) -> Invalidation {
        replace(&mut self.status.focused, false, Invalidation::PAINT)
    }

    /// Fixed corner radius, used unless the field is rounded.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Sets the fixed corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) -> Invalidation {
        replace(
            &mut self.corner_radius,
            radius,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Whether both ends are fully rounded.
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    /// Rounds both ends of the field, overriding the corner radius.
    pub fn set_rounded(&mut self, rounded: bool) -> Invalidation {
        replace(&mut self.rounded, rounded, Invalidation::PAINT | Invalidation::LAYOUT)
    }

    /// Sets the insets applied to the content rectangle.
    pub fn set_content_insets(&mut self, insets: Insets) -> Invalidation {
        replace(&mut self.content_insets, insets, Invalidation::LAYOUT)
    }

    /// Sets the extra leading and trailing padding of the content.
    pub fn set_padding(&mut self, left: f64, right: f64) -> Invalidation {
        replace(&mut self.left_padding, left, Invalidation::LAYOUT)
            | replace(&mut self.right_padding, right, Invalidation::LAYOUT)
    }

    /// Sets or removes the leading accessory, by its measured size.
    pub fn set_left_accessory(&mut self, size: Option<Size>) -> Invalidation {
        replace(&mut self.left_accessory, size, Invalidation::LAYOUT)
    }

    /// Sets or removes the trailing accessory, by its measured size.
    pub fn set_right_accessory(&mut self, size: Option<Size>) -> Invalidation {
        replace(&mut self.right_accessory, size, Invalidation::LAYOUT)
    }

    /// Sets the insets adjusting the leading accessory frame.
    pub fn set_left_accessory_insets(&mut self, insets: Insets) -> Invalidation {
        replace(&mut self.left_accessory_insets, insets, Invalidation::LAYOUT)
    }

    /// Sets the insets adjusting the trailing accessory frame.
    pub fn set_right_accessory_insets(&mut self, insets: Insets) -> Invalidation {
        replace(&mut self.right_accessory_insets, insets, Invalidation::LAYOUT)
    }

    /// Sets or clears the placeholder text.
    pub fn set_placeholder(&mut self, text: Option<&str>) -> Invalidation {
        replace(
            &mut self.placeholder,
            text.map(String::from),
            Invalidation::PAINT,
        )
    }

    /// Sets or clears the placeholder color.
    pub fn set_placeholder_color(&mut self, color: Option<Color>) -> Invalidation {
        replace(&mut self.placeholder_color, color, Invalidation::PAINT)
    }

    /// Placeholder to draw, if any.
    ///
    /// The color is only set when both a placeholder and a placeholder color
    /// are present.
    #[must_use]
    pub fn placeholder(&self) -> Option<Placeholder<'_>> {
        self.placeholder.as_deref().map(|text| Placeholder {
            text,
            color: self.placeholder_color,
        })
    }

    /// Corner radius in effect for `bounds`.
    #[must_use]
    pub fn effective_corner_radius(&self, bounds: Rect) -> f64 {
        if self.rounded {
            bounds.height() / 2.0
        } else {
            self.corner_radius
        }
    }

    /// Frame of the leading accessory.
    ///
    /// The accessory sits at the leading edge, vertically centered, then is
    /// moved by the left and top insets and grown by the right and bottom
    /// insets.
    #[must_use]
    pub fn left_accessory_rect(&self, bounds: Rect) -> Option<Rect> {
        let size = self.left_accessory?;
        let insets = self.left_accessory_insets;
        let origin = Point::new(
            bounds.x0 + insets.x0,
            bounds.y0 + (bounds.height() - size.height) / 2.0 + insets.y0,
        );
        Some(Rect::from_origin_size(
            origin,
            Size::new(size.width + insets.x1, size.height + insets.y1),
        ))
    }

    /// Frame of the trailing accessory.
    ///
    /// The accessory sits at the trailing edge, vertically centered, then is
    /// moved back by its horizontal and vertical inset sums.
    #[must_use]
    pub fn right_accessory_rect(&self, bounds: Rect) -> Option<Rect> {
        let size = self.right_accessory?;
        let insets = self.right_accessory_insets;
        let origin = Point::new(
            bounds.x1 - size.width - (insets.x0 + insets.x1),
            bounds.y0 + (bounds.height() - size.height) / 2.0 - (insets.y0 + insets.y1),
        );
        Some(Rect::from_origin_size(origin, size))
    }

    /// Rectangle used for text, placeholder and editing.
    #[must_use]
    pub fn content_rect(&self, bounds: Rect) -> Rect {
        let half_corner = self.effective_corner_radius(bounds) / 2.0;
        let left = self
            .left_accessory_rect(bounds)
            .map_or(0.0, |rect| rect.x1 - bounds.x0);
        let right = self
            .right_accessory_rect(bounds)
            .map_or(0.0, |rect| rect.width());

        let mut insets = self.content_insets;
        insets.x0 += left + half_corner + self.left_padding;
        insets.x1 += right + half_corner + self.right_padding;
        inset_rect(bounds, insets)
    }

    /// Computes every frame for `bounds`.
    #[must_use]
    pub fn layout(&self, bounds: Rect) -> TextFieldLayout {
        TextFieldLayout {
            corner_radius: self.effective_corner_radius(bounds),
            left_accessory: self.left_accessory_rect(bounds),
            right_accessory: self.right_accessory_rect(bounds),
            content: self.content_rect(bounds),
        }
    }

    /// Paint commands for `bounds` in the effective state.
    ///
    /// Emits, back to front: the shadow, the background fill, the border
    /// and the highlight bar. Each is skipped when its color does not
    /// resolve; the border is also skipped when its width is not positive.
    #[must_use]
    pub fn paint(&self, bounds: Rect) -> Vec<DrawCommand> {
        let state = self.effective_state();
        let shape = RoundedRect::from_rect(bounds, self.effective_corner_radius(bounds));
        let mut commands = Vec::new();

        if let Some(color) = self.style.value(keys::SHADOW_COLOR, state) {
            commands.push(DrawCommand::Shadow {
                shape,
                color,
                radius: self.style.value(keys::SHADOW_RADIUS, state).unwrap_or(0.0),
                opacity: self
                    .style
                    .value(keys::SHADOW_OPACITY, state)
                    .unwrap_or(DEFAULT_SHADOW_OPACITY),
                offset: self
                    .style
                    .value(keys::SHADOW_OFFSET, state)
                    .unwrap_or(Vec2::ZERO),
            });
        }
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
