// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced interior grid lines.

use kurbo::{Insets, Line, Point, Rect};

use crate::types::inset_rect;

/// Orientation of a grid line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridAxis {
    /// A line of constant x, spanning the drawing area's height.
    Vertical,
    /// A line of constant y, spanning the drawing area's width.
    Horizontal,
}

/// One grid line segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSegment {
    /// Orientation of the segment.
    pub axis: GridAxis,
    /// 1-based position of the line on its axis.
    pub index: usize,
    /// Segment geometry.
    pub line: Line,
}

/// Interior grid lines across an inset drawing area.
///
/// Lines never touch the edges of the area: `n` lines split an extent into
/// `n + 1` equal steps.
///
/// ```rust
/// use kurbo::Rect;
/// use nk_layout::{GridAxis, GridLines};
///
/// let grid = GridLines::new(3, 0);
/// let xs: Vec<f64> = grid
///     .segments(Rect::new(0.0, 0.0, 100.0, 40.0))
///     .filter(|s| s.axis == GridAxis::Vertical)
///     .map(|s| s.line.p0.x)
///     .collect();
/// assert_eq!(xs, [25.0, 50.0, 75.0]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    /// Number of interior vertical lines.
    pub vertical: usize,
    /// Number of interior horizontal lines.
    pub horizontal: usize,
    /// Insets shrinking the bounds into the drawing area.
    pub insets: Insets,
}

impl GridLines {
    /// Creates a grid with the given line counts and no insets.
    #[must_use]
    pub const fn new(vertical: usize, horizontal: usize) -> Self {
        Self {
            vertical,
            horizontal,
            insets: Insets::ZERO,
        }
    }

    /// Sets the insets.
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Total number of segments produced per call to [`segments`](Self::segments).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vertical + self.horizontal
    }

    /// Returns `true` when no lines are drawn on either axis.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the grid segments for `bounds`, vertical lines first.
    pub fn segments(&self, bounds: Rect) -> impl Iterator<Item = GridSegment> + use<> {
        let area = inset_rect(bounds, self.insets);
        let x_step = area.width() / (self.vertical as f64 + 1.0);
        let y_step = area.height() / (self.horizontal as f64 + 1.0);

        let vertical = (1..=self.vertical).map(move |index| {
            let x = area.x0 + index as f64 * x_step;
            GridSegment {
                axis: GridAxis::Vertical,
                index,
                line: Line::new(Point::new(x, area.y0), Point::new(x, area.y1)),
            }
        });
        let horizontal = (1..=self.horizontal).map(move |index| {
            let y = area.y0 + index as f64 * y_step;
            GridSegment {
                axis: GridAxis::Horizontal,
                index,
                line: Line::new(Point::new(area.x0, y), Point::new(area.x1, y)),
            }
        });
        vertical.chain(horizontal)
    }
}
