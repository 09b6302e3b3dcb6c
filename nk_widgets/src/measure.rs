// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Measures content whose natural size the host knows, such as shaped text.
///
/// Implemented for any `Fn(Size) -> Size`, so a closure over the host's text
/// layout engine is enough:
///
/// ```rust
/// use kurbo::Size;
/// use nk_widgets::Measure;
///
/// let one_line = |available: Size| Size::new(available.width.min(80.0), 16.0);
/// assert_eq!(one_line.measure(Size::new(50.0, 100.0)), Size::new(50.0, 16.0));
/// ```
pub trait Measure {
    /// Returns the natural size of the content within `available`.
    fn measure(&self, available: Size) -> Size;
}

impl<F> Measure for F
where
    F: Fn(Size) -> Size,
{
    fn measure(&self, available: Size) -> Size {
        self(available)
    }
}
