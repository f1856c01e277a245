//! CSS values, parser, selector matching, cascade, block layout, and painting
//! for the Jerry renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Rules with comma-separated compound selectors
//!   - Declarations with keyword, `px` length and hex color values
//!
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, and universal selectors
//!   - Specificity calculation
//!
//! - **CSS Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Selector matching
//!   - Specificity-based ordering, source order for ties
//!
//! - **Layout Engine** ([CSS 2.1 § 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth))
//!   - Box tree generation with anonymous block boxes
//!   - Block width, position and height
//!
//! - **Painting** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!   - Backgrounds and solid borders as a display list
//!
//! # Not Yet Implemented
//!
//! - Inheritance and computed values
//! - Inline layout and text
//! - Floats and positioning
//! - Units other than `px`, color functions, named colors

/// CSS cascade per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Box tree and block layout per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// Display list and painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// CSS selector matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Style tree per [CSS Cascading Level 4 § 6.1](https://www.w3.org/TR/css-cascade-4/#specified).
pub mod style;
/// Specified values per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use cascade::style_tree;
pub use layout::{
    BoxType, Dimensions, EdgeSizes, LayoutBox, LayoutError, Rect, build_layout_tree, layout_tree,
};
pub use paint::{DisplayCommand, DisplayList, build_display_list};
pub use parser::{CSSParser, Declaration, Rule, Stylesheet};
pub use selector::{Selector, SimpleSelector, Specificity};
pub use style::{Display, PropertyMap, StyledNode};
pub use values::{Color, Unit, Value};
