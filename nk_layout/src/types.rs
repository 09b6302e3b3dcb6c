// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration types for box composition.

use kurbo::{Insets, Rect, Size};

/// Where the decorative box sits relative to the primary content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Before the content, horizontally.
    #[default]
    Left,
    /// After the content, horizontally.
    Right,
    /// Above the content.
    Top,
    /// Below the content.
    Bottom,
}

impl Side {
    /// Returns `true` for [`Side::Left`] and [`Side::Right`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Position of the decorative box along the axis perpendicular to its [`Side`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CrossAlign {
    /// Against the cross-axis minimum edge (top or left).
    Start,
    /// Centered in the full cross-axis extent of the bounds, ignoring insets.
    #[default]
    Center,
    /// Against the cross-axis maximum edge (bottom or right).
    End,
}

/// Placement policy for a decorative box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlignmentSpec {
    /// Which side of the content the decorative box occupies.
    pub side: Side,
    /// Cross-axis alignment of the decorative box.
    pub cross: CrossAlign,
}

impl AlignmentSpec {
    /// Creates an alignment from a side and a cross-axis alignment.
    #[must_use]
    pub const fn new(side: Side, cross: CrossAlign) -> Self {
        Self { side, cross }
    }

    /// Leading decoration, vertically centered.
    pub const LEFT_CENTER: Self = Self::new(Side::Left, CrossAlign::Center);
    /// Trailing decoration, vertically centered.
    pub const RIGHT_CENTER: Self = Self::new(Side::Right, CrossAlign::Center);
}

/// Sizing rules shared by every composite widget.
///
/// A `LayoutBox` does not carry the outer bounds itself: those come from the
/// host on every pass. It describes how the bounds are subdivided.
///
/// ```rust
/// use kurbo::{Insets, Size};
/// use nk_layout::LayoutBox;
///
/// let config = LayoutBox::new()
///     .with_insets(Insets::uniform(4.0))
///     .with_cap(Size::new(32.0, 32.0))
///     .with_spacing(5.0);
/// assert_eq!(config.spacing, 5.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutBox {
    /// Base insets applied on all four sides before anything else.
    pub insets: Insets,
    /// Maximum decorative size. Zero on an axis means that axis is uncapped.
    pub cap: Size,
    /// Gap between the decorative box and the primary content.
    ///
    /// Only applied when there is decorative content.
    pub spacing: f64,
    /// Extra size added to the reported fitting size, never to frames.
    pub extend: Size,
}

impl Default for LayoutBox {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBox {
    /// Zero insets, no cap, no spacing, no extend.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            insets: Insets::ZERO,
            cap: Size::ZERO,
            spacing: 0.0,
            extend: Size::ZERO,
        }
    }

    /// Sets the base insets.
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets the decorative size cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: Size) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the fitting size extension.
    #[must_use]
    pub const fn with_extend(mut self, extend: Size) -> Self {
        self.extend = extend;
        self
    }
}

/// Returns `true` when `size` covers no area.
#[must_use]
#[inline]
pub fn is_zero_area(size: Size) -> bool {
    !(size.width > 0.0 && size.height > 0.0)
}

/// Shrinks `rect` by `insets`.
///
/// Insets larger than the rectangle collapse it to zero width or height at
/// its near edge instead of producing a negative extent.
#[must_use]
pub fn inset_rect(rect: Rect, insets: Insets) -> Rect {
    let x0 = rect.x0 + insets.x0;
    let y0 = rect.y0 + insets.y0;
    let x1 = (rect.x1 - insets.x1).max(x0);
    let y1 = (rect.y1 - insets.y1).max(y0);
    Rect::new(x0, y0, x1, y1)
}
