//! The `display` property.
//!
//! [CSS Display Module Level 3 § 2](https://www.w3.org/TR/css-display-3/#the-display-properties)

use strum_macros::{Display as StrumDisplay, EnumString};

/// [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The subset of `display` values that affect box generation here. Parsing a
/// keyword with [`str::parse`] recognises exactly `block`, `inline` and
/// `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Display {
    /// [§ 2.1 Outer display roles](https://www.w3.org/TR/css-display-3/#outer-role)
    /// "The element generates a box that is inline-level when placed in flow layout."
    Inline,
    /// [§ 2.1](https://www.w3.org/TR/css-display-3/#outer-role)
    /// "The element generates a box that is block-level when placed in flow layout."
    Block,
    /// [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
    /// "The element and its descendants generate no boxes or text runs."
    None,
}
