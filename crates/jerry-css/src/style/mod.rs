//! Style tree representation.
//!
//! The style resolver attaches specified values to every document node,
//! producing a [`StyledNode`] tree of the same shape as the document. This
//! module holds that tree and the per-node accessors the layout engine and
//! painter read from it.
//!
//! - [CSS Cascading Level 4 § 6.1 Specified Values](https://www.w3.org/TR/css-cascade-4/#specified)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)

mod display;
mod styled_node;

pub use display::Display;
pub use styled_node::{PropertyMap, StyledNode};
