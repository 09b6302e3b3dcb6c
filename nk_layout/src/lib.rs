// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! NK Layout: box composition geometry for composite widgets.
//!
//! Icon labels, title labels and image views all place a primary content box
//! (usually text) next to a decorative box (an icon, an image, a nested
//! title). This crate computes, from measured sizes and a small configuration:
//!
//! - the rectangle left for the primary content,
//! - the frame of the decorative box,
//! - the size that fits both.
//!
//! It also provides the evenly spaced line geometry of a grid overlay and the
//! aspect-ratio driven size-to-fit of an image.
//!
//! ## Core Concepts
//!
//! - [`LayoutBox`]: base insets, decorative size cap, spacing and fitting
//!   extension. Configured with `with_*` builders.
//! - [`AlignmentSpec`]: which [`Side`] the decoration occupies and how it is
//!   aligned on the cross axis ([`CrossAlign`]).
//! - [`BoxComposition`]: the result of one composition pass.
//! - [`GridLines`]: interior grid line segments for a drawing area.
//! - [`image_size_that_fits`]: size-to-fit for an image of a known size.
//!
//! ## Rules
//!
//! - Decorative content with zero area takes no space: no spacing is inserted
//!   and the primary rectangle only sees the base insets.
//! - A cap of zero on an axis leaves that axis uncapped.
//! - [`LayoutBox::extend`] only grows the fitting size, never a frame.
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use nk_layout::{AlignmentSpec, BoxComposition, CrossAlign, LayoutBox, Side};
//!
//! let config = LayoutBox::new()
//!     .with_insets(Insets::uniform(2.0))
//!     .with_spacing(4.0);
//!
//! // No decoration: the primary content only loses the base insets.
//! let bare = BoxComposition::compute(
//!     Size::new(100.0, 30.0),
//!     Size::new(60.0, 14.0),
//!     Size::ZERO,
//!     &config,
//!     AlignmentSpec::new(Side::Top, CrossAlign::Start),
//! );
//! assert_eq!(bare.primary, Rect::new(2.0, 2.0, 98.0, 28.0));
//! assert_eq!(bare.fitting_size, Size::new(64.0, 18.0));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Enable `libm` instead of the default `std`
//! feature for `no_std` builds.

#![no_std]

mod compose;
mod fit;
mod grid;
mod types;

pub use compose::{BoxComposition, capped_size, fitting_size, spacing_used};
pub use fit::{ContentMode, image_size_that_fits};
pub use grid::{GridAxis, GridLines, GridSegment};
pub use types::{AlignmentSpec, CrossAlign, LayoutBox, Side, inset_rect, is_zero_area};
