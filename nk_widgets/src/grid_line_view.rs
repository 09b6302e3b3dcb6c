// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Insets, Rect, Stroke};
use nk_layout::GridLines;
use nk_style::Invalidation;
use peniko::Color;

use crate::DrawCommand;
use crate::status::replace;

/// Default grid line color, a light gray.
pub const DEFAULT_LINE_COLOR: Color = Color::from_rgb8(170, 170, 170);

/// A non-interactive overlay of evenly spaced grid lines.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLineView {
    grid: GridLines,
    color: Color,
    stroke: Stroke,
}

impl Default for GridLineView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLineView {
    /// Creates a view with no lines, 1 unit wide and light gray.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: GridLines::new(0, 0),
            color: DEFAULT_LINE_COLOR,
            stroke: Stroke::new(1.0),
        }
    }

    /// Line geometry configuration.
    #[must_use]
    pub fn grid(&self) -> &GridLines {
        &self.grid
    }

    /// Number of interior vertical lines.
    pub fn set_vertical_lines(&mut self, count: usize) -> Invalidation {
        replace(&mut self.grid.vertical, count, Invalidation::PAINT)
    }

    /// Number of interior horizontal lines.
    pub fn set_horizontal_lines(&mut self, count: usize) -> Invalidation {
        replace(&mut self.grid.horizontal, count, Invalidation::PAINT)
    }

    /// Insets shrinking the bounds into the drawing area.
    pub fn set_edge_insets(&mut self, insets: Insets) -> Invalidation {
        replace(&mut self.grid.insets, insets, Invalidation::PAINT)
    }

    /// Line color.
    #[must_use]
    pub fn line_color(&self) -> Color {
        self.color
    }

    /// Sets the line color.
    pub fn set_line_color(&mut self, color: Color) -> Invalidation {
        replace(&mut self.color, color, Invalidation::PAINT)
    }

    /// Line stroke, including any dash pattern.
    #[must_use]
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Sets the line width.
    pub fn set_line_width(&mut self, width: f64) -> Invalidation {
        replace(&mut self.stroke.width, width, Invalidation::PAINT)
    }

    /// Sets the dash pattern. An empty pattern draws solid lines.
    pub fn set_line_dash(&mut self, phase: f64, lengths: &[f64]) -> Invalidation {
        let stroke = self.stroke.clone().with_dashes(phase, lengths);
        replace(&mut self.stroke, stroke, Invalidation::PAINT)
    }

    /// Paint commands for `bounds`: one line per grid line.
    #[must_use]
    pub fn paint(&self, bounds: Rect) -> Vec<DrawCommand> {
        self.grid
            .segments(bounds)
            .map(|segment| DrawCommand::Line {
                line: segment.line,
                color: self.color,
                style: self.stroke.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Line, Point};

    #[test]
    fn default_draws_nothing() {
        let view = GridLineView::new();
        assert!(view.paint(Rect::new(0.0, 0.0, 100.0, 100.0)).is_empty());
        assert_eq!(view.stroke().width, 1.0);
        assert_eq!(view.line_color(), DEFAULT_LINE_COLOR);
    }

    #[test]
    fn paints_one_line_per_grid_line() {
        let mut view = GridLineView::new();
        assert_eq!(view.set_vertical_lines(1), Invalidation::PAINT);
        view.set_horizontal_lines(3);
        let commands = view.paint(Rect::new(0.0, 0.0, 40.0, 80.0));
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::Line {
                line: Line::new(Point::new(20.0, 0.0), Point::new(20.0, 80.0)),
                color: DEFAULT_LINE_COLOR,
                style: Stroke::new(1.0),
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Line {
                line: Line::new(Point::new(0.0, 20.0), Point::new(40.0, 20.0)),
                color: DEFAULT_LINE_COLOR,
                style: Stroke::new(1.0),
            }
        );
    }

    #[test]
    fn dashes_are_carried_on_every_line() {
        let mut view = GridLineView::new();
        view.set_vertical_lines(2);
        assert_eq!(view.set_line_dash(1.0, &[4.0, 2.0]), Invalidation::PAINT);
        assert!(view.set_line_dash(1.0, &[4.0, 2.0]).is_empty());

        for command in view.paint(Rect::new(0.0, 0.0, 30.0, 30.0)) {
            let DrawCommand::Line { style, .. } = command else {
                panic!("grid views only paint lines");
            };
            assert_eq!(style.dash_offset, 1.0);
            assert_eq!(style.dash_pattern.as_slice(), &[4.0, 2.0]);
        }
    }
}
