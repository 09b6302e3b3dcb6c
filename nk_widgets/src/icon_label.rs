// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label with an optional icon beside its text.

use kurbo::{Insets, Rect, Size};
use nk_layout::{AlignmentSpec, BoxComposition, LayoutBox};
use nk_style::Invalidation;

use crate::Measure;
use crate::status::replace;

/// Default gap between the icon and the text.
pub const DEFAULT_ICON_SPACING: f64 = 5.0;

/// Default maximum icon size.
pub const DEFAULT_MAX_ICON_SIZE: Size = Size::new(32.0, 32.0);

/// A text label decorated with an icon.
///
/// The host measures the text; the label decides where the text and the
/// icon go and how large the whole thing wants to be.
#[derive(Clone, Debug, PartialEq)]
pub struct IconLabel {
    image_size: Option<Size>,
    alignment: AlignmentSpec,
    layout: LayoutBox,
}

impl Default for IconLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl IconLabel {
    /// Creates a label with no icon, icon on the left, vertically centered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            image_size: None,
            alignment: AlignmentSpec::LEFT_CENTER,
            layout: LayoutBox::new()
                .with_cap(DEFAULT_MAX_ICON_SIZE)
                .with_spacing(DEFAULT_ICON_SPACING),
        }
    }

    /// Natural size of the icon image, if there is one.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Sets or removes the icon, by its natural size.
    pub fn set_image_size(&mut self, size: Option<Size>) -> Invalidation {
        replace(&mut self.image_size, size, Invalidation::PAINT | Invalidation::LAYOUT)
    }

    /// Icon placement.
    #[must_use]
    pub fn alignment(&self) -> AlignmentSpec {
        self.alignment
    }

    /// Sets the icon placement.
    pub fn set_alignment(&mut self, alignment: AlignmentSpec) -> Invalidation {
        replace(
            &mut self.alignment,
            alignment,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Gap between icon and text.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.layout.spacing
    }

    /// Sets the gap between icon and text.
    pub fn set_spacing(&mut self, spacing: f64) -> Invalidation {
        replace(
            &mut self.layout.spacing,
            spacing,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Maximum icon size. Zero on an axis leaves it uncapped.
    #[must_use]
    pub fn max_image_size(&self) -> Size {
        self.layout.cap
    }

    /// Sets the maximum icon size.
    pub fn set_max_image_size(&mut self, size: Size) -> Invalidation {
        replace(&mut self.layout.cap, size, Invalidation::LAYOUT)
    }

    /// Extra size added to [`size_that_fits`](Self::size_that_fits).
    #[must_use]
    pub fn extend_size(&self) -> Size {
        self.layout.extend
    }

    /// Sets the extra fitting size.
    pub fn set_extend_size(&mut self, size: Size) -> Invalidation {
        replace(&mut self.layout.extend, size, Invalidation::LAYOUT)
    }

    /// Insets around text and icon.
    #[must_use]
    pub fn edge_insets(&self) -> Insets {
        self.layout.insets
    }

    /// Sets the insets around text and icon.
    pub fn set_edge_insets(&mut self, insets: Insets) -> Invalidation {
        replace(
            &mut self.layout.insets,
            insets,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Composition configuration shared by every pass.
    #[must_use]
    pub fn layout_box(&self) -> &LayoutBox {
        &self.layout
    }

    /// Rectangle the text is drawn into.
    #[must_use]
    pub fn text_rect(&self, bounds: Rect) -> Rect {
        self.compose(bounds, Size::ZERO).primary
    }

    /// Frame of the icon. Zero-sized when there is no icon.
    #[must_use]
    pub fn image_frame(&self, bounds: Rect) -> Rect {
        self.compose(bounds, Size::ZERO).decorative
    }

    /// Size that fits the text and the icon within `available`.
    #[must_use]
    pub fn size_that_fits(&self, available: Size, text: &impl Measure) -> Size {
        let bounds = Rect::from_origin_size((0.0, 0.0), available);
        self.compose(bounds, text.measure(available)).fitting_size
    }

    /// Runs a full composition pass.
    #[must_use]
    pub fn compose(&self, bounds: Rect, text_size: Size) -> BoxComposition {
        BoxComposition::compute_in(
            bounds,
            text_size,
            self.image_size.unwrap_or(Size::ZERO),
            &self.layout,
            self.alignment,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nk_layout::{CrossAlign, Side};

    fn text(width: f64, height: f64) -> impl Fn(Size) -> Size {
        move |_| Size::new(width, height)
    }

    #[test]
    fn defaults() {
        let label = IconLabel::new();
        assert_eq!(label.spacing(), 5.0);
        assert_eq!(label.max_image_size(), Size::new(32.0, 32.0));
        assert_eq!(label.alignment(), AlignmentSpec::LEFT_CENTER);
        assert_eq!(label.image_size(), None);
        assert_eq!(label.extend_size(), Size::ZERO);
    }

    #[test]
    fn icon_on_the_left_is_capped_and_centered() {
        let mut label = IconLabel::new();
        label.set_image_size(Some(Size::new(40.0, 40.0)));
        let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);

        assert_eq!(label.text_rect(bounds), Rect::new(37.0, 0.0, 200.0, 50.0));
        assert_eq!(label.image_frame(bounds), Rect::new(0.0, 9.0, 32.0, 41.0));
        assert_eq!(
            label.size_that_fits(Size::new(200.0, 50.0), &text(120.0, 20.0)),
            Size::new(157.0, 32.0)
        );
    }

    #[test]
    fn icon_on_the_right_respects_edge_insets() {
        let mut label = IconLabel::new();
        label.set_image_size(Some(Size::new(16.0, 16.0)));
        label.set_alignment(AlignmentSpec::RIGHT_CENTER);
        label.set_edge_insets(Insets::new(4.0, 0.0, 6.0, 0.0));
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);

        assert_eq!(label.image_frame(bounds), Rect::new(78.0, 2.0, 94.0, 18.0));
        assert_eq!(label.text_rect(bounds), Rect::new(4.0, 0.0, 73.0, 20.0));
    }

    #[test]
    fn no_icon_means_no_spacing() {
        let label = IconLabel::new();
        let fits = label.size_that_fits(Size::new(300.0, 40.0), &text(80.0, 18.0));
        assert_eq!(fits, Size::new(80.0, 18.0));
        assert_eq!(label.image_frame(Rect::new(0.0, 0.0, 100.0, 40.0)).area(), 0.0);
    }

    #[test]
    fn extend_grows_fitting_size_only() {
        let mut label = IconLabel::new();
        label.set_extend_size(Size::new(10.0, 4.0));
        let fits = label.size_that_fits(Size::new(300.0, 40.0), &text(80.0, 18.0));
        assert_eq!(fits, Size::new(90.0, 22.0));
        assert_eq!(
            label.text_rect(Rect::new(0.0, 0.0, 100.0, 40.0)),
            Rect::new(0.0, 0.0, 100.0, 40.0)
        );
    }

    #[test]
    fn setters_report_invalidation_once() {
        let mut label = IconLabel::new();
        assert_eq!(
            label.set_spacing(8.0),
            Invalidation::PAINT | Invalidation::LAYOUT
        );
        assert!(label.set_spacing(8.0).is_empty());
        assert_eq!(
            label.set_max_image_size(Size::new(24.0, 24.0)),
            Invalidation::LAYOUT
        );
        assert_eq!(
            label.set_alignment(AlignmentSpec::new(Side::Top, CrossAlign::Start)),
            Invalidation::PAINT | Invalidation::LAYOUT
        );
    }
}
