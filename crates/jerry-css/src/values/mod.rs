//! CSS specified values.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The renderer understands a closed set of value shapes: keywords, absolute
//! lengths in `px`, and sRGB colors. Every value converts to pixels through
//! [`Value::to_px`], which is total: values that are not lengths are worth
//! zero pixels.

mod color;

use std::fmt;

use serde::Serialize;

pub use color::Color;

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by <length> in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
}

/// A specified value as written in a declaration.
///
/// Equality is structural: two values are equal when they are the same
/// variant with equal payloads, so `Keyword("auto")` never equals a length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
    ///
    /// An identifier such as `auto`, `block` or `none`.
    Keyword(String),
    /// A length with its unit, e.g. `12px`.
    Length(f64, Unit),
    /// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
    ColorValue(Color),
}

impl Value {
    /// Build a keyword value.
    #[must_use]
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword(keyword.into())
    }

    /// Build a pixel length.
    #[must_use]
    pub const fn px(length: f64) -> Self {
        Self::Length(length, Unit::Px)
    }

    /// Return the size of a length in px, or zero for non-lengths.
    #[must_use]
    pub const fn to_px(&self) -> f64 {
        match self {
            Self::Length(length, Unit::Px) => *length,
            Self::Keyword(_) | Self::ColorValue(_) => 0.0,
        }
    }

    /// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Whether this is the `auto` keyword.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(keyword) if keyword == "auto")
    }

    /// Whether this value is a length.
    #[must_use]
    pub const fn is_length(&self) -> bool {
        matches!(self, Self::Length(..))
    }

    /// The color payload, if this is a color value.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::ColorValue(color) => Some(*color),
            Self::Keyword(_) | Self::Length(..) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword),
            Self::Length(length, Unit::Px) => write!(f, "{length}px"),
            Self::ColorValue(color) => write!(f, "{color}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_px_is_total() {
        assert!((Value::px(12.5).to_px() - 12.5).abs() < f64::EPSILON);
        assert!(Value::keyword("auto").to_px().abs() < f64::EPSILON);
        assert!(Value::ColorValue(Color::BLACK).to_px().abs() < f64::EPSILON);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Value::keyword("auto"), Value::keyword("auto"));
        assert_ne!(Value::keyword("auto"), Value::keyword("none"));
        assert_ne!(Value::keyword("auto"), Value::px(0.0));
        assert_eq!(Value::px(3.0), Value::Length(3.0, Unit::Px));
        assert_ne!(Value::ColorValue(Color::BLACK), Value::ColorValue(Color::WHITE));
    }

    #[test]
    fn test_is_auto() {
        assert!(Value::keyword("auto").is_auto());
        assert!(!Value::keyword("block").is_auto());
        assert!(!Value::px(0.0).is_auto());
    }

    #[test]
    fn test_is_length() {
        assert!(Value::px(0.0).is_length());
        assert!(!Value::keyword("auto").is_length());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Value::keyword("block").to_string(), "block");
        assert_eq!(Value::px(10.0).to_string(), "10px");
        assert_eq!(Value::px(2.5).to_string(), "2.5px");
        assert_eq!(
            Value::ColorValue(Color::new(0xcc, 0x00, 0x11, 0xff)).to_string(),
            "#cc0011"
        );
    }
}
