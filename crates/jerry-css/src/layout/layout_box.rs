//! Box tree construction.
//!
//! [CSS 2.1 § 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use std::mem;

use serde::Serialize;
use strum_macros::Display as StrumDisplay;
use thiserror::Error;

use super::Dimensions;
use crate::style::{Display, StyledNode};
use crate::values::Value;

/// Structural failures of box generation and layout.
///
/// These are broken invariants rather than bad input: the run is aborted and
/// no partial tree is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The root element has `display: none`, so it generates no box at all.
    #[error("root element has display: none and generates no box")]
    RootDisplayNone,
    /// A style lookup was attempted on an anonymous box, which has no
    /// generating element.
    #[error("anonymous box has no style node")]
    AnonymousStyleLookup,
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// "The following sections describe the types of boxes that may be generated
/// in CSS 2.1. A box's type affects, in part, its behavior in the visual
/// formatting model."
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum BoxType {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    ///
    /// Generated by an element with `display: block`.
    Block,
    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    ///
    /// Generated by an element with `display: inline`, and by text.
    Inline,
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "if a block container box has a block-level box inside it, then we
    /// force it to have only block-level boxes inside it."
    ///
    /// Wraps a run of consecutive inline children of a block box.
    Anonymous,
}

/// A node in the box tree.
///
/// Block and inline boxes carry the styled node that generated them;
/// anonymous boxes carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox<'a> {
    /// The kind of box.
    pub box_type: BoxType,
    /// Geometry, filled in by layout.
    pub dimensions: Dimensions,
    /// Child boxes, in document order.
    pub children: Vec<LayoutBox<'a>>,
    // Children are moved into the box tree, so this node's own `children`
    // list is always empty.
    style: Option<StyledNode<'a>>,
}

impl<'a> LayoutBox<'a> {
    fn new(box_type: BoxType, style: Option<StyledNode<'a>>) -> Self {
        Self {
            box_type,
            dimensions: Dimensions::default(),
            children: Vec::new(),
            style,
        }
    }

    /// The styled node that generated this box, if any.
    #[must_use]
    pub const fn style(&self) -> Option<&StyledNode<'a>> {
        self.style.as_ref()
    }

    /// The styled node that generated this box.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::AnonymousStyleLookup`] for anonymous boxes.
    pub const fn style_node(&self) -> Result<&StyledNode<'a>, LayoutError> {
        match &self.style {
            Some(style) => Ok(style),
            None => Err(LayoutError::AnonymousStyleLookup),
        }
    }

    /// The specified value of property `name` on the generating element.
    ///
    /// Always `None` for anonymous boxes.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.style.as_ref().and_then(|style| style.value(name))
    }
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// Build the box tree for a style tree, consuming it.
///
/// Nodes with `display: none` are skipped together with their descendants.
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root itself has
/// `display: none`.
pub fn build_layout_tree(style_root: StyledNode<'_>) -> Result<LayoutBox<'_>, LayoutError> {
    let box_type = match style_root.display() {
        Display::Block => BoxType::Block,
        Display::Inline => BoxType::Inline,
        Display::None => return Err(LayoutError::RootDisplayNone),
    };
    Ok(build_box(box_type, style_root))
}

fn build_box(box_type: BoxType, mut style_node: StyledNode<'_>) -> LayoutBox<'_> {
    let styled_children = mem::take(&mut style_node.children);
    let mut layout_box = LayoutBox::new(box_type, Some(style_node));

    for child in styled_children {
        match child.display() {
            Display::Block => layout_box.children.push(build_box(BoxType::Block, child)),
            Display::Inline => inline_container(layout_box.box_type, &mut layout_box.children)
                .push(build_box(BoxType::Inline, child)),
            Display::None => {}
        }
    }

    layout_box
}

/// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
///
/// Return the child list that a new inline child of a box of type
/// `parent_type` with children `children` should be appended to.
///
/// Inline and anonymous parents take inline children directly. A block parent
/// routes them into its trailing anonymous box, appending an empty one first
/// if the last child is not anonymous.
pub fn inline_container<'a, 'b>(
    parent_type: BoxType,
    children: &'b mut Vec<LayoutBox<'a>>,
) -> &'b mut Vec<LayoutBox<'a>> {
    match parent_type {
        BoxType::Inline | BoxType::Anonymous => children,
        BoxType::Block => {
            if children
                .last()
                .is_none_or(|last| last.box_type != BoxType::Anonymous)
            {
                children.push(LayoutBox::new(BoxType::Anonymous, None));
            }
            let last = children.len() - 1;
            &mut children[last].children
        }
    }
}
