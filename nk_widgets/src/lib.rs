// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! NK Widgets: composite and stateful widget models.
//!
//! Each widget here is a plain value that a host UI framework drives from
//! its own draw, layout and measure hooks. Widgets never hold a reference
//! back to the host: they take the bounds, the measured sizes and the
//! current status as arguments and return frames, sizes, or a list of
//! [`DrawCommand`]s.
//!
//! - [`TextField`] and [`TextView`] style themselves per interaction state
//!   through an [`nk_style::StateStyleStore`].
//! - [`IconLabel`], [`TitleLabel`] and [`ImageView`] size and place their
//!   parts with [`nk_layout::BoxComposition`].
//! - [`GridLineView`] paints evenly spaced grid lines.
//!
//! Setters return an [`Invalidation`] telling the host whether to repaint,
//! re-layout, or do nothing.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use nk_widgets::IconLabel;
//!
//! let mut label = IconLabel::new();
//! let changed = label.set_image_size(Some(Size::new(24.0, 24.0)));
//! assert!(!changed.is_empty());
//!
//! let text = |_: Size| Size::new(100.0, 18.0);
//! assert_eq!(label.size_that_fits(Size::new(320.0, 44.0), &text), Size::new(129.0, 24.0));
//! assert_eq!(label.text_rect(Rect::new(0.0, 0.0, 320.0, 44.0)).x0, 29.0);
//! ```
//!
//! ## Logging
//!
//! Widgets emit [`tracing`] events: `trace` for state resolution and style
//! changes, `debug` for rejected edits. No subscriber is installed.

#![no_std]

extern crate alloc;

mod grid_line_view;
mod icon_label;
mod image_view;
mod measure;
mod paint;
mod status;
mod text_field;
mod text_view;
mod title_label;

pub use nk_style::Invalidation;

pub use grid_line_view::{DEFAULT_LINE_COLOR, GridLineView};
pub use icon_label::{DEFAULT_ICON_SPACING, DEFAULT_MAX_ICON_SIZE, IconLabel};
pub use image_view::ImageView;
pub use measure::Measure;
pub use paint::DrawCommand;
pub use status::{ControlStatus, text_view_state};
pub use text_field::{
    DEFAULT_PLACEHOLDER_COLOR, DEFAULT_SHADOW_OPACITY, Placeholder, TextField, TextFieldLayout,
};
pub use text_view::{
    DEFAULT_PLACEHOLDER_INSETS, DEFAULT_TEXT_VIEW_PLACEHOLDER_COLOR, TextView, TextViewLayout,
};
pub use title_label::{DEFAULT_TITLE_SPACING, TitleLabel};

/// Default height of the highlight bar drawn along a text input's bottom edge.
pub const DEFAULT_HIGHLIGHT_SIZE: f64 = 2.0;
