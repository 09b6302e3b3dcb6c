// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective interaction state of a control.

use nk_style::{InteractionState, Invalidation};

/// Status flags of a control, as reported by the host.
///
/// The style store looks values up by a single exact state. This type
/// collapses the flags into that state with a fixed precedence:
/// error first, then focus, then the platform state.
///
/// ```rust
/// use nk_style::InteractionState;
/// use nk_widgets::ControlStatus;
///
/// let mut status = ControlStatus::new();
/// status.focused = true;
/// status.enabled = false;
/// assert_eq!(status.effective_state(), InteractionState::FOCUSED);
/// status.error = true;
/// assert_eq!(status.effective_state(), InteractionState::ERROR);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlStatus {
    /// Whether the control accepts interaction.
    pub enabled: bool,
    /// Whether the control is being pressed.
    pub highlighted: bool,
    /// Whether the control is selected.
    pub selected: bool,
    /// Whether the control has keyboard focus.
    pub focused: bool,
    /// Whether the control is showing an error.
    pub error: bool,
}

impl Default for ControlStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlStatus {
    /// Enabled, with every other flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: true,
            highlighted: false,
            selected: false,
            focused: false,
            error: false,
        }
    }

    /// State computed from the enabled, highlighted and selected flags only.
    #[must_use]
    pub fn platform_state(&self) -> InteractionState {
        let mut state = InteractionState::NORMAL;
        state.set(InteractionState::DISABLED, !self.enabled);
        state.set(InteractionState::HIGHLIGHTED, self.highlighted);
        state.set(InteractionState::SELECTED, self.selected);
        state
    }

    /// State used for style lookups.
    #[must_use]
    pub fn effective_state(&self) -> InteractionState {
        if self.error {
            InteractionState::ERROR
        } else if self.focused {
            InteractionState::FOCUSED
        } else {
            self.platform_state()
        }
    }
}

/// State used by text views: editing, editable, or neither.
#[must_use]
pub fn text_view_state(editing: bool, editable: bool) -> InteractionState {
    if editing {
        InteractionState::FOCUSED
    } else if editable {
        InteractionState::NORMAL
    } else {
        InteractionState::DISABLED
    }
}

/// Stores `value` in `slot`, returning `flags` if it changed.
pub(crate) fn replace<T: PartialEq>(slot: &mut T, value: T, flags: Invalidation) -> Invalidation {
    if *slot == value {
        Invalidation::empty()
    } else {
        *slot = value;
        flags
    }
}
