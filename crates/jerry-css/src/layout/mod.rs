//! CSS Layout Engine
//!
//! Turns a style tree into a tree of boxes and computes the geometry of
//! every block-level box.
//!
//! # Relevant Specifications
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual Formatting Model Details](https://www.w3.org/TR/CSS2/visudet.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`layout_box`] - Box types and box tree construction
//! - `block` - Block formatting: width, position, children, height
//!
//! Inline and anonymous boxes take part in box tree construction but receive
//! no geometry of their own: their [`Dimensions`] stay zeroed.

pub mod box_model;
pub mod layout_box;

mod block;

pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use layout_box::{BoxType, LayoutBox, LayoutError, build_layout_tree, inline_container};

use crate::style::StyledNode;

/// Build the box tree for `style_root` and lay it out inside `containing_block`.
///
/// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
///
/// The containing block's content height is reset to zero first, since block
/// children are stacked starting from it.
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root generates no box.
pub fn layout_tree(
    style_root: StyledNode<'_>,
    mut containing_block: Dimensions,
) -> Result<LayoutBox<'_>, LayoutError> {
    containing_block.content.height = 0.0;

    let mut root_box = build_layout_tree(style_root)?;
    root_box.layout(containing_block)?;
    Ok(root_box)
}
