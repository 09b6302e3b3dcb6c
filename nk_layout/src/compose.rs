// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of a primary content box with a decorative box.

use kurbo::{Point, Rect, Size};

use crate::types::{AlignmentSpec, CrossAlign, LayoutBox, Side, inset_rect, is_zero_area};

/// Result of composing a primary content box with a decorative box.
///
/// Produced by [`BoxComposition::compute`]. The host applies [`primary`](Self::primary)
/// as the content (text) rectangle and [`decorative`](Self::decorative) as the
/// frame of the icon, image, or title.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxComposition {
    /// Rectangle available to the primary content.
    pub primary: Rect,
    /// Frame of the decorative box.
    ///
    /// Zero-sized, at its anchor point, when there is no decorative content.
    pub decorative: Rect,
    /// Decorative size after capping.
    pub decorative_size: Size,
    /// Spacing actually inserted between the two boxes.
    pub spacing: f64,
    /// Size that fits both boxes, including base insets and extend.
    pub fitting_size: Size,
}

impl BoxComposition {
    /// Composes within bounds of `available` size at the origin.
    ///
    /// - `primary` is the measured natural size of the primary content.
    /// - `decorative` is the natural size of the decorative content, zero if none.
    ///
    /// ```rust
    /// use kurbo::{Rect, Size};
    /// use nk_layout::{AlignmentSpec, BoxComposition, LayoutBox};
    ///
    /// let config = LayoutBox::new()
    ///     .with_cap(Size::new(32.0, 32.0))
    ///     .with_spacing(5.0);
    /// let composition = BoxComposition::compute(
    ///     Size::new(200.0, 50.0),
    ///     Size::new(120.0, 20.0),
    ///     Size::new(40.0, 40.0),
    ///     &config,
    ///     AlignmentSpec::LEFT_CENTER,
    /// );
    /// assert_eq!(composition.primary, Rect::new(37.0, 0.0, 200.0, 50.0));
    /// assert_eq!(composition.decorative, Rect::new(0.0, 9.0, 32.0, 41.0));
    /// assert_eq!(composition.fitting_size, Size::new(157.0, 32.0));
    /// ```
    #[must_use]
    pub fn compute(
        available: Size,
        primary: Size,
        decorative: Size,
        config: &LayoutBox,
        alignment: AlignmentSpec,
    ) -> Self {
        Self::compute_in(
            Rect::from_origin_size(Point::ZERO, available),
            primary,
            decorative,
            config,
            alignment,
        )
    }

    /// Composes within arbitrary `bounds`.
    #[must_use]
    pub fn compute_in(
        bounds: Rect,
        primary: Size,
        decorative: Size,
        config: &LayoutBox,
        alignment: AlignmentSpec,
    ) -> Self {
        let decorative_size = capped_size(decorative, config.cap);
        let spacing = spacing_used(decorative, config.spacing);

        let mut insets = config.insets;
        match alignment.side {
            Side::Left => insets.x0 += decorative_size.width + spacing,
            Side::Right => insets.x1 += decorative_size.width + spacing,
            Side::Top => insets.y0 += decorative_size.height + spacing,
            Side::Bottom => insets.y1 += decorative_size.height + spacing,
        }

        Self {
            primary: inset_rect(bounds, insets),
            decorative: decorative_frame(bounds, decorative_size, config, alignment),
            decorative_size,
            spacing,
            fitting_size: fitting_size(primary, decorative, config, alignment.side),
        }
    }
}

/// Returns the decorative size after applying `cap`.
///
/// Each axis whose cap is positive is clamped to the cap; the other axes are
/// left alone. Zero-area content yields [`Size::ZERO`].
#[must_use]
pub fn capped_size(decorative: Size, cap: Size) -> Size {
    if is_zero_area(decorative) {
        return Size::ZERO;
    }
    let width = if cap.width > 0.0 {
        decorative.width.min(cap.width)
    } else {
        decorative.width
    };
    let height = if cap.height > 0.0 {
        decorative.height.min(cap.height)
    } else {
        decorative.height
    };
    Size::new(width, height)
}

/// Returns the spacing inserted next to `decorative` content.
#[must_use]
#[inline]
pub fn spacing_used(decorative: Size, spacing: f64) -> f64 {
    if is_zero_area(decorative) { 0.0 } else { spacing }
}

/// Returns the size that fits the composition, without computing frames.
///
/// Base insets and [`LayoutBox::extend`] are added here and only here.
#[must_use]
pub fn fitting_size(primary: Size, decorative: Size, config: &LayoutBox, side: Side) -> Size {
    let decorative_size = capped_size(decorative, config.cap);
    let spacing = spacing_used(decorative, config.spacing);

    let content = if side.is_horizontal() {
        Size::new(
            primary.width + spacing + decorative_size.width,
            primary.height.max(decorative_size.height),
        )
    } else {
        Size::new(
            primary.width.max(decorative_size.width),
            primary.height + spacing + decorative_size.height,
        )
    };

    let insets = config.insets;
    Size::new(
        content.width + insets.x0 + insets.x1 + config.extend.width,
        content.height + insets.y0 + insets.y1 + config.extend.height,
    )
}

fn decorative_frame(
    bounds: Rect,
    size: Size,
    config: &LayoutBox,
    alignment: AlignmentSpec,
) -> Rect {
    let area = inset_rect(bounds, config.insets);
    // Start and end respect the base insets; center uses the full bounds.
    let vertical = || match alignment.cross {
        CrossAlign::Start => area.y0,
        CrossAlign::Center => bounds.y0 + (bounds.height() - size.height) / 2.0,
        CrossAlign::End => area.y1 - size.height,
    };
    let horizontal = || match alignment.cross {
        CrossAlign::Start => area.x0,
        CrossAlign::Center => bounds.x0 + (bounds.width() - size.width) / 2.0,
        CrossAlign::End => area.x1 - size.width,
    };

    let origin = match alignment.side {
        Side::Left => Point::new(area.x0, vertical()),
        Side::Right => Point::new(area.x1 - size.width, vertical()),
        Side::Top => Point::new(horizontal(), area.y0),
        Side::Bottom => Point::new(horizontal(), area.y1 - size.height),
    };
    Rect::from_origin_size(origin, size)
}
