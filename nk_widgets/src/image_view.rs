// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use nk_layout::{ContentMode, image_size_that_fits};
use nk_style::Invalidation;

use crate::status::replace;

/// An image view that sizes itself from its image's aspect ratio.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageView {
    image_size: Option<Size>,
    content_mode: ContentMode,
    always_true_size: bool,
}

impl ImageView {
    /// Creates an empty view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            image_size: None,
            content_mode: ContentMode::ScaleToFill,
            always_true_size: false,
        }
    }

    /// Natural size of the image, if there is one.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Sets or removes the image, by its natural size.
    pub fn set_image_size(&mut self, size: Option<Size>) -> Invalidation {
        replace(&mut self.image_size, size, Invalidation::PAINT | Invalidation::LAYOUT)
    }

    /// How the image is scaled into the view.
    #[must_use]
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Sets how the image is scaled into the view.
    pub fn set_content_mode(&mut self, mode: ContentMode) -> Invalidation {
        replace(
            &mut self.content_mode,
            mode,
            Invalidation::PAINT | Invalidation::LAYOUT,
        )
    }

    /// Whether [`size_that_fits`](Self::size_that_fits) reports the natural image size.
    #[must_use]
    pub fn always_true_size(&self) -> bool {
        self.always_true_size
    }

    /// Makes [`size_that_fits`](Self::size_that_fits) ignore the available size.
    pub fn set_always_true_size(&mut self, enabled: bool) -> Invalidation {
        replace(&mut self.always_true_size, enabled, Invalidation::LAYOUT)
    }

    /// Size the view wants within `available`.
    #[must_use]
    pub fn size_that_fits(&self, available: Size) -> Size {
        match self.image_size {
            None => Size::ZERO,
            Some(image) if self.always_true_size => image,
            Some(image) => image_size_that_fits(available, image, self.content_mode),
        }
    }
}
