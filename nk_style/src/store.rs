// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget sparse storage for state-keyed style values.
//!
//! # Implementation
//!
//! Entries live in a sorted `SmallVec` keyed by `(attribute, state bits)` and
//! are found by binary search. Stateful widgets typically set a handful of
//! attributes for two or three states, so the common case never touches the
//! heap.

use core::fmt;

use smallvec::SmallVec;

use crate::attribute::{StyleAttribute, StyleKey, StyleValue, StyleValueType, ValueKind};
use crate::state::{InteractionState, Invalidation};

/// Inline capacity for style entries.
const INLINE_CAPACITY: usize = 8;

/// Default alpha factor applied to normal colors to derive disabled colors.
pub const DEFAULT_DISABLED_ALPHA: f32 = 0.3;

/// How [`StateStyleStore`] fills in missing [`InteractionState::DISABLED`] values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DisabledDerivation {
    /// Disabled lookups fall back to the normal value unchanged.
    #[default]
    Off,
    /// Disabled color lookups with no explicit entry use the normal color with
    /// its alpha multiplied by the given factor.
    ///
    /// Scalar and offset attributes are never derived; they fall back to the
    /// normal value as if derivation were off.
    FadeAlpha(f32),
}

impl DisabledDerivation {
    /// Alpha fading with [`DEFAULT_DISABLED_ALPHA`].
    pub const FADE: Self = Self::FadeAlpha(DEFAULT_DISABLED_ALPHA);

    /// Returns `true` unless this is [`DisabledDerivation::Off`].
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::FadeAlpha(_))
    }
}

/// Error returned when a value is offered for an attribute of another kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValueKindMismatch {
    /// The attribute being set.
    pub attribute: StyleAttribute,
    /// The kind the attribute holds.
    pub expected: ValueKind,
    /// The kind of the rejected value.
    pub found: ValueKind,
}

impl fmt::Display for ValueKindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} holds a {} value, got a {} value",
            self.attribute, self.expected, self.found
        )
    }
}

impl core::error::Error for ValueKindMismatch {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Slot {
    attribute: StyleAttribute,
    state: u32,
}

impl Slot {
    const fn new(attribute: StyleAttribute, state: InteractionState) -> Self {
        Self {
            attribute,
            state: state.bits(),
        }
    }
}

/// State-keyed style values with fallback resolution.
///
/// Each stateful widget owns one store. Reads go through [`StateStyleStore::get`]
/// (or its typed twin [`StateStyleStore::value`]), which resolves in this order:
///
/// 1. the explicit entry for `(attribute, state)`;
/// 2. for [`InteractionState::DISABLED`] with [`DisabledDerivation::FadeAlpha`],
///    the normal color with faded alpha (colors only);
/// 3. the [`InteractionState::NORMAL`] entry;
/// 4. nothing.
///
/// The store does not pick the effective state; callers decide which state
/// wins (for example error over focus over the platform state) and pass it in.
///
/// # Example
///
/// ```rust
/// use nk_style::{DisabledDerivation, InteractionState, StateStyleStore, keys};
/// use peniko::Color;
///
/// let mut store = StateStyleStore::new();
/// store.set_disabled_derivation(DisabledDerivation::FADE);
///
/// let red = Color::from_rgb8(255, 0, 0);
/// store.set_value(keys::BACKGROUND_COLOR, InteractionState::NORMAL, Some(red));
///
/// // Focused has no entry and falls back to normal.
/// assert_eq!(
///     store.value(keys::BACKGROUND_COLOR, InteractionState::FOCUSED),
///     Some(red)
/// );
///
/// // Disabled is derived from normal.
/// let disabled = store
///     .value(keys::BACKGROUND_COLOR, InteractionState::DISABLED)
///     .unwrap();
/// assert_eq!(disabled.components[3], 0.3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateStyleStore {
    /// Sorted by [`Slot`] for binary search lookup.
    entries: SmallVec<[(Slot, StyleValue); INLINE_CAPACITY]>,
    derivation: DisabledDerivation,
}

impl StateStyleStore {
    /// Creates an empty store with disabled derivation off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given disabled derivation.
    #[must_use]
    pub fn with_disabled_derivation(derivation: DisabledDerivation) -> Self {
        Self {
            entries: SmallVec::new(),
            derivation,
        }
    }

    /// Returns the disabled derivation policy.
    #[must_use]
    #[inline]
    pub fn disabled_derivation(&self) -> DisabledDerivation {
        self.derivation
    }

    /// Sets the disabled derivation policy.
    pub fn set_disabled_derivation(&mut self, derivation: DisabledDerivation) -> Invalidation {
        if self.derivation == derivation {
            return Invalidation::empty();
        }
        self.derivation = derivation;
        Invalidation::PAINT
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of explicit entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stores `value` for `(attribute, state)`, or clears the entry when `value` is `None`.
    ///
    /// Returns the invalidation implied by the change, which is empty when the
    /// stored value did not change.
    ///
    /// # Errors
    ///
    /// Returns [`ValueKindMismatch`] and leaves the store untouched if `value`
    /// is not of the attribute's [`ValueKind`].
    pub fn set(
        &mut self,
        attribute: StyleAttribute,
        state: InteractionState,
        value: Option<StyleValue>,
    ) -> Result<Invalidation, ValueKindMismatch> {
        if let Some(value) = value
            && value.kind() != attribute.kind()
        {
            return Err(ValueKindMismatch {
                attribute,
                expected: attribute.kind(),
                found: value.kind(),
            });
        }
        Ok(self.write(Slot::new(attribute, state), value))
    }

    /// Typed variant of [`StateStyleStore::set`].
    pub fn set_value<T: StyleValueType>(
        &mut self,
        key: StyleKey<T>,
        state: InteractionState,
        value: Option<T>,
    ) -> Invalidation {
        self.write(Slot::new(key.attribute(), state), value.map(Into::into))
    }

    /// Resolves the effective value of `attribute` in `state`.
    ///
    /// See the [type documentation](Self) for the resolution order. This never
    /// mutates the store.
    #[must_use]
    pub fn get(&self, attribute: StyleAttribute, state: InteractionState) -> Option<StyleValue> {
        if let Some(value) = self.explicit(attribute, state) {
            return Some(value);
        }
        if state.is_normal() {
            return None;
        }

        let normal = self.explicit(attribute, InteractionState::NORMAL);
        if state == InteractionState::DISABLED
            && let DisabledDerivation::FadeAlpha(alpha_factor) = self.derivation
            && let Some(derived) = normal.and_then(|value| value.derive_disabled(alpha_factor))
        {
            return Some(derived);
        }
        normal
    }

    /// Typed variant of [`StateStyleStore::get`].
    #[must_use]
    pub fn value<T: StyleValueType>(&self, key: StyleKey<T>, state: InteractionState) -> Option<T> {
        self.get(key.attribute(), state).and_then(T::from_value)
    }

    /// Returns the explicit entry for `(attribute, state)`, without any fallback.
    #[must_use]
    pub fn explicit(&self, attribute: StyleAttribute, state: InteractionState) -> Option<StyleValue> {
        let slot = Slot::new(attribute, state);
        self.entries
            .binary_search_by_key(&slot, |(s, _)| *s)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Returns `true` if an explicit entry exists for `(attribute, state)`.
    #[must_use]
    pub fn contains(&self, attribute: StyleAttribute, state: InteractionState) -> bool {
        self.entries
            .binary_search_by_key(&Slot::new(attribute, state), |(s, _)| *s)
            .is_ok()
    }

    /// Removes every entry of `attribute`, across all states.
    pub fn clear_attribute(&mut self, attribute: StyleAttribute) -> Invalidation {
        let before = self.entries.len();
        self.entries.retain(|(slot, _)| slot.attribute != attribute);
        if self.entries.len() == before {
            Invalidation::empty()
        } else {
            attribute.invalidation()
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> Invalidation {
        let invalidation = self
            .entries
            .iter()
            .fold(Invalidation::empty(), |acc, (slot, _)| {
                acc | slot.attribute.invalidation()
            });
        self.entries.clear();
        invalidation
    }

    /// Returns an iterator over the explicit entries, sorted by attribute then state.
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (StyleAttribute, InteractionState, StyleValue)> + '_ {
        self.entries.iter().map(|(slot, value)| {
            (
                slot.attribute,
                InteractionState::from_bits_retain(slot.state),
                *value,
            )
        })
    }

    fn write(&mut self, slot: Slot, value: Option<StyleValue>) -> Invalidation {
        match (self.entries.binary_search_by_key(&slot, |(s, _)| *s), value) {
            (Ok(idx), Some(value)) => {
                if self.entries[idx].1 == value {
                    return Invalidation::empty();
                }
                self.entries[idx].1 = value;
            }
            (Ok(idx), None) => {
                self.entries.remove(idx);
            }
            (Err(idx), Some(value)) => {
                self.entries.insert(idx, (slot, value));
            }
            (Err(_), None) => return Invalidation::empty(),
        }
        slot.attribute.invalidation()
    }
}
