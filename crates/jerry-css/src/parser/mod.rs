//! CSS parser module.

/// Character-level parser for the supported CSS subset.
pub mod css_parser;
/// Stylesheet, rule and declaration types produced by the parser.
pub mod stylesheet;

pub use css_parser::{CSSParser, ParseError, parse};
pub use stylesheet::{Declaration, Rule, Stylesheet};
