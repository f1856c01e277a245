//! Parsed stylesheet representation.
//!
//! [CSS Syntax Level 3 § 5](https://www.w3.org/TR/css-syntax-3/#parsing)

use crate::selector::Selector;
use crate::values::Value;

/// [§ 5.4.4 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-a-declaration)
///
/// A CSS declaration (e.g., `margin: auto`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The specified value.
    pub value: Value,
}

impl Declaration {
    /// Create a declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A CSS style rule (selector list + declarations).
///
/// Declarations keep source order. When a property is declared twice in the
/// same rule both declarations are kept; the later one wins when the rule is
/// applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selectors of this rule. The rule applies to an element if any of
    /// them matches.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block.
    pub declarations: Vec<Declaration>,
}

/// [§ 5.3.2 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed CSS stylesheet. Rule order is source order, which breaks
/// specificity ties in the cascade.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}
