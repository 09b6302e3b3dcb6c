// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic paint commands.

use kurbo::{Line, Rect, RoundedRect, Stroke, Vec2};
use peniko::Color;

/// A single paint command emitted by a widget.
///
/// Commands are listed back to front. A host backend replays them in order
/// in the widget's coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Drop shadow cast by `shape`.
    Shadow {
        /// Shape casting the shadow.
        shape: RoundedRect,
        /// Shadow color, before `opacity` is applied.
        color: Color,
        /// Blur radius.
        radius: f64,
        /// Shadow opacity in `0.0..=1.0`.
        opacity: f64,
        /// Offset of the shadow from the shape.
        offset: Vec2,
    },
    /// Solid fill of `shape`.
    Fill {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// Outline of `shape`.
    Stroke {
        /// Shape to outline.
        shape: RoundedRect,
        /// Stroke color.
        color: Color,
        /// Stroke width and dashes.
        style: Stroke,
    },
    /// A straight line segment.
    Line {
        /// Segment geometry.
        line: Line,
        /// Stroke color.
        color: Color,
        /// Stroke width and dashes.
        style: Stroke,
    },
}

impl DrawCommand {
    /// Fills an axis-aligned rectangle.
    #[must_use]
    pub fn fill_rect(rect: Rect, color: Color) -> Self {
        Self::Fill {
            shape: RoundedRect::from_rect(rect, 0.0),
            color,
        }
    }

    /// Returns the color this command paints with.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Shadow { color, .. }
            | Self::Fill { color, .. }
            | Self::Stroke { color, .. }
            | Self::Line { color, .. } => *color,
        }
    }
}

/// Returns the highlight bar along the bottom edge of `bounds`.
///
/// The bar is `size` tall and clamped to the bounds. A negative size
/// collapses to an empty bar on the bottom edge.
pub(crate) fn highlight_bar(bounds: Rect, size: f64) -> Rect {
    let y0 = (bounds.y1 - size.max(0.0)).max(bounds.y0);
    Rect::new(bounds.x0, y0, bounds.x1, bounds.y1)
}
