// Copyright 2025 the NK Components Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style attributes, their value kinds, and typed attribute keys.

use core::fmt;
use core::marker::PhantomData;

use kurbo::Vec2;
use peniko::Color;

use crate::state::Invalidation;

/// A stylable attribute of a stateful widget.
///
/// Every attribute is keyed independently per [`InteractionState`](crate::InteractionState)
/// and has a fixed [`ValueKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleAttribute {
    /// Fill color of the widget background.
    BackgroundColor,
    /// Stroke color of the widget border.
    BorderColor,
    /// Stroke width of the widget border.
    BorderSize,
    /// Color of the drop shadow. No shadow is drawn when absent.
    ShadowColor,
    /// Blur radius of the drop shadow.
    ShadowRadius,
    /// Opacity of the drop shadow, in `0.0..=1.0`.
    ShadowOpacity,
    /// Offset of the drop shadow.
    ShadowOffset,
    /// Color of the underline highlight bar. No bar is drawn when absent.
    HighlightColor,
    /// Height of the underline highlight bar.
    HighlightSize,
}

impl StyleAttribute {
    /// All attributes, in key order.
    pub const ALL: [Self; 9] = [
        Self::BackgroundColor,
        Self::BorderColor,
        Self::BorderSize,
        Self::ShadowColor,
        Self::ShadowRadius,
        Self::ShadowOpacity,
        Self::ShadowOffset,
        Self::HighlightColor,
        Self::HighlightSize,
    ];

    /// Returns the kind of value this attribute holds.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::BackgroundColor | Self::BorderColor | Self::ShadowColor | Self::HighlightColor => {
                ValueKind::Color
            }
            Self::BorderSize | Self::ShadowRadius | Self::ShadowOpacity | Self::HighlightSize => {
                ValueKind::Scalar
            }
            Self::ShadowOffset => ValueKind::Offset,
        }
    }

    /// Returns the invalidation a change to this attribute implies.
    ///
    /// The highlight bar is a separately laid out layer, so its size also
    /// invalidates layout.
    #[must_use]
    pub const fn invalidation(self) -> Invalidation {
        match self {
            Self::HighlightSize => Invalidation::PAINT.union(Invalidation::LAYOUT),
            _ => Invalidation::PAINT,
        }
    }
}

/// The kind of value a [`StyleAttribute`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`Color`].
    Color,
    /// An `f64` scalar (sizes, radii, opacities).
    Scalar,
    /// A [`Vec2`] offset.
    Offset,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Color => "color",
            Self::Scalar => "scalar",
            Self::Offset => "offset",
        })
    }
}

/// A style value of any kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A color value.
    Color(Color),
    /// A scalar value.
    Scalar(f64),
    /// An offset value.
    Offset(Vec2),
}

impl StyleValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Color(_) => ValueKind::Color,
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Offset(_) => ValueKind::Offset,
        }
    }

    /// Derives a disabled-state value from a normal-state value.
    ///
    /// Colors keep their components with alpha multiplied by `alpha_factor`.
    /// Scalars and offsets are never derived and yield `None`.
    #[must_use]
    pub fn derive_disabled(self, alpha_factor: f32) -> Option<Self> {
        match self {
            Self::Color(color) => Some(Self::Color(color.multiply_alpha(alpha_factor))),
            Self::Scalar(_) | Self::Offset(_) => None,
        }
    }

    /// Returns the color, if this is a color value.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the scalar, if this is a scalar value.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the offset, if this is an offset value.
    #[must_use]
    pub const fn as_offset(&self) -> Option<Vec2> {
        match self {
            Self::Offset(offset) => Some(*offset),
            _ => None,
        }
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec2> for StyleValue {
    fn from(value: Vec2) -> Self {
        Self::Offset(value)
    }
}

/// Rust types that can be stored as a [`StyleValue`].
pub trait StyleValueType: Copy + Into<StyleValue> + 'static {
    /// The kind this type is stored as.
    const KIND: ValueKind;

    /// Extracts a value of this type, if `value` has the matching kind.
    fn from_value(value: StyleValue) -> Option<Self>;
}

impl StyleValueType for Color {
    const KIND: ValueKind = ValueKind::Color;

    fn from_value(value: StyleValue) -> Option<Self> {
        value.as_color()
    }
}

impl StyleValueType for f64 {
    const KIND: ValueKind = ValueKind::Scalar;

    fn from_value(value: StyleValue) -> Option<Self> {
        value.as_scalar()
    }
}

impl StyleValueType for Vec2 {
    const KIND: ValueKind = ValueKind::Offset;

    fn from_value(value: StyleValue) -> Option<Self> {
        value.as_offset()
    }
}

/// A type-safe attribute key.
///
/// `StyleKey<T>` pairs a [`StyleAttribute`] with the Rust type of its value, so
/// typed reads and writes cannot mix kinds. The predefined keys live in
/// [`keys`](crate::keys).
///
/// ```rust
/// use nk_style::{InteractionState, StateStyleStore, keys};
///
/// let mut store = StateStyleStore::new();
/// store.set_value(keys::BORDER_SIZE, InteractionState::NORMAL, Some(1.5));
/// // store.set_value(keys::BORDER_SIZE, InteractionState::NORMAL, Some(peniko::Color::WHITE));
/// // ^ would not compile.
/// assert_eq!(store.value(keys::BORDER_SIZE, InteractionState::FOCUSED), Some(1.5));
/// ```
pub struct StyleKey<T> {
    attribute: StyleAttribute,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StyleKey<T> {
    const fn new(attribute: StyleAttribute) -> Self {
        Self {
            attribute,
            _marker: PhantomData,
        }
    }

    /// Returns the untyped attribute of this key.
    #[must_use]
    #[inline]
    pub const fn attribute(self) -> StyleAttribute {
        self.attribute
    }
}

impl<T> Copy for StyleKey<T> {}

impl<T> Clone for StyleKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for StyleKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.attribute == other.attribute
    }
}

impl<T> Eq for StyleKey<T> {}

impl<T> fmt::Debug for StyleKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StyleKey").field(&self.attribute).finish()
    }
}

/// Typed keys for every [`StyleAttribute`].
pub mod keys {
    use super::{StyleAttribute, StyleKey};
    use kurbo::Vec2;
    use peniko::Color;

    /// Typed key for [`StyleAttribute::BackgroundColor`].
    pub const BACKGROUND_COLOR: StyleKey<Color> = StyleKey::new(StyleAttribute::BackgroundColor);
    /// Typed key for [`StyleAttribute::BorderColor`].
    pub const BORDER_COLOR: StyleKey<Color> = StyleKey::new(StyleAttribute::BorderColor);
    /// Typed key for [`StyleAttribute::BorderSize`].
    pub const BORDER_SIZE: StyleKey<f64> = StyleKey::new(StyleAttribute::BorderSize);
    /// Typed key for [`StyleAttribute::ShadowColor`].
    pub const SHADOW_COLOR: StyleKey<Color> = StyleKey::new(StyleAttribute::ShadowColor);
    /// Typed key for [`StyleAttribute::ShadowRadius`].
    pub const SHADOW_RADIUS: StyleKey<f64> = StyleKey::new(StyleAttribute::ShadowRadius);
    /// Typed key for [`StyleAttribute::ShadowOpacity`].
    pub const SHADOW_OPACITY: StyleKey<f64> = StyleKey::new(StyleAttribute::ShadowOpacity);
    /// Typed key for [`StyleAttribute::ShadowOffset`].
    pub const SHADOW_OFFSET: StyleKey<Vec2> = StyleKey::new(StyleAttribute::ShadowOffset);
    /// Typed key for [`StyleAttribute::HighlightColor`].
    pub const HIGHLIGHT_COLOR: StyleKey<Color> = StyleKey::new(StyleAttribute::HighlightColor);
    /// Typed key for [`StyleAttribute::HighlightSize`].
    pub const HIGHLIGHT_SIZE: StyleKey<f64> = StyleKey::new(StyleAttribute::HighlightSize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_kinds() {
        assert_eq!(StyleAttribute::BackgroundColor.kind(), ValueKind::Color);
        assert_eq!(StyleAttribute::BorderSize.kind(), ValueKind::Scalar);
        assert_eq!(StyleAttribute::ShadowOffset.kind(), ValueKind::Offset);
        assert_eq!(StyleAttribute::HighlightSize.kind(), ValueKind::Scalar);
    }

    #[test]
    fn typed_keys_match_attribute_kinds() {
        assert_eq!(keys::BACKGROUND_COLOR.attribute().kind(), Color::KIND);
        assert_eq!(keys::SHADOW_OPACITY.attribute().kind(), f64::KIND);
        assert_eq!(keys::SHADOW_OFFSET.attribute().kind(), Vec2::KIND);
    }

    #[test]
    fn only_colors_derive_disabled() {
        let red = StyleValue::Color(Color::from_rgb8(255, 0, 0));
        let faded = red.derive_disabled(0.3).and_then(|v| v.as_color());
        assert_eq!(faded.map(|c| c.components[3]), Some(0.3));
        assert_eq!(StyleValue::Scalar(2.0).derive_disabled(0.3), None);
        assert_eq!(
            StyleValue::Offset(Vec2::new(0.0, 1.0)).derive_disabled(0.3),
            None
        );
    }

    #[test]
    fn highlight_size_invalidates_layout() {
        assert!(
            StyleAttribute::HighlightSize
                .invalidation()
                .contains(Invalidation::LAYOUT)
        );
        assert_eq!(
            StyleAttribute::BackgroundColor.invalidation(),
            Invalidation::PAINT
        );
    }

    #[test]
    fn wrong_kind_extraction_is_none() {
        assert_eq!(f64::from_value(StyleValue::Color(Color::WHITE)), None);
        assert_eq!(Color::from_value(StyleValue::Scalar(1.0)), None);
    }
}
