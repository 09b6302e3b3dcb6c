// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size-to-fit for images.

use kurbo::Size;

use crate::types::is_zero_area;

/// How an image is scaled into its frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentMode {
    /// Stretch to the frame, ignoring aspect ratio.
    #[default]
    ScaleToFill,
    /// Scale uniformly so the whole image is visible.
    AspectFit,
    /// Scale uniformly so the frame is covered.
    AspectFill,
}

/// Returns the size an image view wants within `available`.
///
/// The width follows `available.width` and the height follows the image's
/// aspect ratio. With [`ContentMode::AspectFit`] a result taller than
/// `available` is clamped to the available height and its width recomputed.
/// Zero-area images yield [`Size::ZERO`].
///
/// ```rust
/// use kurbo::Size;
/// use nk_layout::{ContentMode, image_size_that_fits};
///
/// let image = Size::new(400.0, 200.0);
/// let fit = image_size_that_fits(Size::new(100.0, 100.0), image, ContentMode::ScaleToFill);
/// assert_eq!(fit, Size::new(100.0, 50.0));
/// ```
#[must_use]
pub fn image_size_that_fits(available: Size, image: Size, mode: ContentMode) -> Size {
    if is_zero_area(image) {
        return Size::ZERO;
    }
    let width = available.width;
    let height = width / image.width * image.height;
    if mode == ContentMode::AspectFit && height > available.height {
        let height = available.height;
        return Size::new(height / image.height * image.width, height);
    }
    Size::new(width, height)
}
