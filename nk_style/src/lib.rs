// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! NK Style: per-state style attributes for stateful widgets.
//!
//! Text fields, text views and similar controls change their background,
//! border, shadow and underline highlight depending on whether they are
//! normal, focused, disabled, in error, and so on. This crate stores those
//! values per [`InteractionState`] and resolves them with a small, fixed set of
//! fallback rules.
//!
//! ## Core Concepts
//!
//! - [`InteractionState`]: bit-flag state used as a lookup key. Lookups use the
//!   exact value; the empty set is [`InteractionState::NORMAL`].
//! - [`StyleAttribute`]: the stylable attributes. Each one holds a fixed
//!   [`ValueKind`] (color, scalar, or offset).
//! - [`StyleKey`]: typed keys (see [`keys`]) so that reads and writes are
//!   checked at compile time.
//! - [`StateStyleStore`]: the per-widget store.
//! - [`Invalidation`]: what a setter call requires the host to redo.
//!
//! ## Resolution
//!
//! **Explicit → Derived disabled color → Normal → None**
//!
//! ```rust
//! use nk_style::{
//!     DisabledDerivation, InteractionState, Invalidation, StateStyleStore, keys,
//! };
//! use peniko::Color;
//!
//! let mut store = StateStyleStore::with_disabled_derivation(DisabledDerivation::FADE);
//!
//! let blue = Color::from_rgb8(0, 122, 255);
//! let changed = store.set_value(keys::BORDER_COLOR, InteractionState::NORMAL, Some(blue));
//! assert_eq!(changed, Invalidation::PAINT);
//! store.set_value(keys::BORDER_SIZE, InteractionState::NORMAL, Some(1.0));
//! store.set_value(keys::BORDER_SIZE, InteractionState::FOCUSED, Some(2.0));
//!
//! // Explicit entry.
//! assert_eq!(store.value(keys::BORDER_SIZE, InteractionState::FOCUSED), Some(2.0));
//! // No error entry: falls back to normal.
//! assert_eq!(store.value(keys::BORDER_SIZE, InteractionState::ERROR), Some(1.0));
//! // Disabled colors are derived by fading the normal color...
//! let faded = store.value(keys::BORDER_COLOR, InteractionState::DISABLED).unwrap();
//! assert_eq!(faded.components[3], 0.3);
//! // ...but scalars never are.
//! assert_eq!(store.value(keys::BORDER_SIZE, InteractionState::DISABLED), Some(1.0));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` instead of the
//! default `std` feature for `no_std` builds.

#![no_std]

extern crate alloc;

mod attribute;
mod state;
mod store;

pub use attribute::{StyleAttribute, StyleKey, StyleValue, StyleValueType, ValueKind, keys};
pub use state::{InteractionState, Invalidation};
pub use store::{DEFAULT_DISABLED_ALPHA, DisabledDerivation, StateStyleStore, ValueKindMismatch};
