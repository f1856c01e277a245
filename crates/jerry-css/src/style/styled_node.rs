//! Nodes of the style tree.

use std::collections::HashMap;

use jerry_common::warning::warn_once;
use jerry_dom::Node;

use super::Display;
use crate::values::Value;

/// Map from CSS property names to specified values.
pub type PropertyMap = HashMap<String, Value>;

/// A document node paired with the values the cascade specified for it.
///
/// [§ 6.1 Specified Values](https://www.w3.org/TR/css-cascade-4/#specified)
///
/// The tree mirrors the document tree one-to-one. Text nodes always carry an
/// empty map. Only specified values are stored: nothing is inherited and no
/// computed-value stage runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode<'a> {
    /// The document node this style belongs to.
    pub node: &'a Node,
    /// Specified values keyed by property name.
    pub specified_values: PropertyMap,
    /// Styled children, in document order.
    pub children: Vec<StyledNode<'a>>,
}

impl StyledNode<'_> {
    /// Return the specified value of a property if it exists, otherwise `None`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.specified_values.get(name)
    }

    /// Return the specified value of property `name`, or of the shorthand
    /// `fallback_name`, or `default`.
    ///
    /// Shorthands are single-valued here: `margin: 10px` stands for all four
    /// sides.
    #[must_use]
    pub fn lookup(&self, name: &str, fallback_name: &str, default: &Value) -> Value {
        self.value(name)
            .or_else(|| self.value(fallback_name))
            .unwrap_or(default)
            .clone()
    }

    /// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// The value of `display`, defaulting to `inline`.
    ///
    /// "Initial: inline"
    ///
    /// Keywords other than `block`, `inline` and `none` are reported once and
    /// treated as `inline`.
    #[must_use]
    pub fn display(&self) -> Display {
        match self.value("display") {
            Some(Value::Keyword(keyword)) => keyword.parse().unwrap_or_else(|_| {
                warn_once(
                    "CSS",
                    &format!("unsupported display value '{keyword}', treating as inline"),
                );
                Display::Inline
            }),
            _ => Display::Inline,
        }
    }
}
