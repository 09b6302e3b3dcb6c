// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction states and invalidation flags.

use core::fmt;

bitflags::bitflags! {
    /// The interaction mode of a widget, used as a style lookup key.
    ///
    /// States are flags and may be combined, but style lookup always keys on
    /// the exact value: `DISABLED | FOCUSED` is a different key from either
    /// flag on its own. The empty set is [`InteractionState::NORMAL`].
    ///
    /// Bit positions match the control states most platform toolkits use, with
    /// [`InteractionState::ERROR`] placed in the application-reserved range.
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InteractionState: u32 {
        /// The widget is highlighted (for example, pressed).
        const HIGHLIGHTED = 1 << 0;
        /// The widget does not accept interaction.
        const DISABLED = 1 << 1;
        /// The widget is selected.
        const SELECTED = 1 << 2;
        /// The widget has keyboard focus or is being edited.
        const FOCUSED = 1 << 3;
        /// The widget content failed validation.
        const ERROR = 1 << 16;
    }
}

impl InteractionState {
    /// The resting state. Every other state falls back to this one.
    pub const NORMAL: Self = Self::empty();

    /// Returns `true` if this is exactly [`InteractionState::NORMAL`].
    #[must_use]
    #[inline]
    pub const fn is_normal(self) -> bool {
        self.is_empty()
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Debug for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_normal() {
            return f.write_str("InteractionState(NORMAL)");
        }
        f.write_str("InteractionState(")?;
        bitflags::parser::to_writer(self, &mut *f)?;
        f.write_str(")")
    }
}

bitflags::bitflags! {
    /// Work a host must schedule after a setter changed something.
    ///
    /// Setters return the invalidation their change implies. Hosts are
    /// expected to coalesce repeated requests into a single pass.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Paint output is stale.
        const PAINT = 0b0000_0001;
        /// Frames or fitting sizes are stale.
        const LAYOUT = 0b0000_0010;
    }
}
