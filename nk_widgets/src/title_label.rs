// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label with a leading or trailing title.

use kurbo::{Insets, Rect, Size};
use nk_layout::{AlignmentSpec, BoxComposition, LayoutBox};
use nk_style::Invalidation;

use crate::status::replace;
use crate::{IconLabel, Measure};

/// Default gap between the title and the text.
pub const DEFAULT_TITLE_SPACING: f64 = 5.0;

/// A text label with a title beside it, such as `Name: John`.
///
/// The title is itself an [`IconLabel`] and may carry its own icon. Its size
/// is capped by [`max_title_size`](Self::max_title_size), which is uncapped
/// by default.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleLabel {
    title: IconLabel,
    alignment: AlignmentSpec,
    layout: LayoutBox,
}

impl Default for TitleLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleLabel {
    /// Creates a label with the title on the left.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: IconLabel::new(),
            alignment: AlignmentSpec::LEFT_CENTER,
            layout: LayoutBox::new().with_spacing(DEFAULT_TITLE_SPACING),
        }
    }

    /// The nested title label.
    #[must_use]
    pub fn title(&self) -> &IconLabel {
        &self.title
    }

    /// Mutable access to the nested title label.
    ///
    /// Changes to the title change this label's layout too.
    pub fn title_mut(&mut self) -> &mut IconLabel {
        &mut self.title
    }

    /// Title placement.
    #[must_use]
    pub fn alignment(&self) -> AlignmentSpec {
        self.alignment
    }

    /// Sets the title placement.
    pub fn set_alignment(&mut self, alignment: AlignmentSpec) -> Invalidation {
        replace(
            &mut self.alignment,
            alignment,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Gap between title and text.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.layout.spacing
    }

    /// Sets the gap between title and text.
    pub fn set_spacing(&mut self, spacing: f64) -> Invalidation {
        replace(
            &mut self.layout.spacing,
            spacing,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Maximum title size. Zero on an axis leaves it uncapped.
    #[must_use]
    pub fn max_title_size(&self) -> Size {
        self.layout.cap
    }

    /// Sets the maximum title size.
    pub fn set_max_title_size(&mut self, size: Size) -> Invalidation {
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

    /// Insets around title and text.
    #[must_use]
    pub fn edge_insets(&self) -> Insets {
        self.layout.insets
    }

    /// Sets the insets around title and text.
    pub fn set_edge_insets(&mut self, insets: Insets) -> Invalidation {
        replace(
            &mut self.layout.insets,
            insets,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Natural size of the title within `available`, before capping.
    #[must_use]
    pub fn title_size_that_fits(&self, available: Size, title_text: &impl Measure) -> Size {
        self.title.size_that_fits(available, title_text)
    }

    /// Frame of the title.
    #[must_use]
    pub fn title_frame(&self, bounds: Rect, title_text: &impl Measure) -> Rect {
        self.compose(bounds, Size::ZERO, title_text).decorative
    }

    /// Rectangle the text is drawn into.
    #[must_use]
    pub fn text_rect(&self, bounds: Rect, title_text: &impl Measure) -> Rect {
        self.compose(bounds, Size::ZERO, title_text).primary
    }

    /// Size that fits the text and the title within `available`.
    #[must_use]
    pub fn size_that_fits(
        &self,
        available: Size,
        text: &impl Measure,
        title_text: &impl Measure,
    ) -> Size {
        let bounds = Rect::from_origin_size((0.0, 0.0), available);
        self.compose(bounds, text.measure(available), title_text)
            .fitting_size
    }

    /// Runs a full composition pass.
    ///
    /// The title is measured against the size of `bounds`.
    #[must_use]
    pub fn compose(
        &self,
        bounds: Rect,
        text_size: Size,
        title_text: &impl Measure,
    ) -> BoxComposition {
        let title_size = self.title_size_that_fits(bounds.size(), title_text);
        BoxComposition::compute_in(bounds, text_size, title_size, &self.layout, self.alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(size: Size) -> impl Fn(Size) -> Size {
        move |_| size
    }

    #[test]
    fn defaults() {
        let label = TitleLabel::new();
        assert_eq!(label.spacing(), 5.0);
        assert_eq!(label.max_title_size(), Size::ZERO);
        assert_eq!(label.alignment(), AlignmentSpec::LEFT_CENTER);
    }

    #[test]
    fn title_on_the_left() {
        let label = TitleLabel::new();
        let title = fixed(Size::new(40.0, 16.0));
        let bounds = Rect::new(0.0, 0.0, 200.0, 30.0);

        assert_eq!(label.title_frame(bounds, &title), Rect::new(0.0, 7.0, 40.0, 23.0));
        assert_eq!(label.text_rect(bounds, &title), Rect::new(45.0, 0.0, 200.0, 30.0));
        assert_eq!(
            label.size_that_fits(Size::new(200.0, 30.0), &fixed(Size::new(60.0, 20.0)), &title),
            Size::new(105.0, 20.0)
        );
    }

    #[test]
    fn max_title_size_caps_width_only() {
        let mut label = TitleLabel::new();
        label.set_max_title_size(Size::new(30.0, 0.0));
        let title = fixed(Size::new(40.0, 16.0));
        let frame = label.title_frame(Rect::new(0.0, 0.0, 200.0, 30.0), &title);
        assert_eq!(frame.size(), Size::new(30.0, 16.0));
    }

    #[test]
    fn title_icon_contributes_to_title_size() {
        let mut label = TitleLabel::new();
        label.title_mut().set_image_size(Some(Size::new(10.0, 10.0)));
        let title = fixed(Size::new(40.0, 16.0));
        assert_eq!(
            label.title_size_that_fits(Size::new(200.0, 30.0), &title),
            Size::new(55.0, 16.0)
        );
    }

    #[test]
    fn empty_title_takes_no_space() {
        let label = TitleLabel::new();
        let title = fixed(Size::ZERO);
        let bounds = Rect::new(0.0, 0.0, 200.0, 30.0);
        assert_eq!(label.text_rect(bounds, &title), bounds);
        assert_eq!(
            label.size_that_fits(Size::new(200.0, 30.0), &fixed(Size::new(60.0, 20.0)), &title),
            Size::new(60.0, 20.0)
        );
    }
}
