//! Painter - generates display list from layout tree
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)

use super::{DisplayCommand, DisplayList};
use crate::layout::{LayoutBox, Rect};
use crate::values::{Color, Value};

/// Paint a layout tree and return the display list.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Boxes are visited in tree order. Each box paints its background, then its
/// borders, before any of its descendants.
#[must_use]
pub fn build_display_list(layout_root: &LayoutBox<'_>) -> DisplayList {
    let mut display_list = DisplayList::new();
    render_layout_box(&mut display_list, layout_root);
    display_list
}

fn render_layout_box(display_list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    render_background(display_list, layout_box);
    render_borders(display_list, layout_box);

    for child in &layout_box.children {
        render_layout_box(display_list, child);
    }
}

/// [§ 3.10 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
///
/// The background covers the border box.
fn render_background(display_list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    if let Some(color) = get_color(layout_box, "background") {
        display_list.push(DisplayCommand::SolidColor {
            color,
            rect: layout_box.dimensions.border_box(),
        });
    }
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// Each side is painted as its own strip of the border box, in the order
/// left, right, top, bottom.
fn render_borders(display_list: &mut DisplayList, layout_box: &LayoutBox<'_>) {
    let Some(color) = get_color(layout_box, "border-color") else {
        return;
    };

    let dimensions = layout_box.dimensions;
    let border_box = dimensions.border_box();

    let strips = [
        // Left
        Rect::new(
            border_box.x,
            border_box.y,
            dimensions.border.left,
            border_box.height,
        ),
        // Right
        Rect::new(
            border_box.x + border_box.width - dimensions.border.right,
            border_box.y,
            dimensions.border.right,
            border_box.height,
        ),
        // Top
        Rect::new(
            border_box.x,
            border_box.y,
            border_box.width,
            dimensions.border.top,
        ),
        // Bottom
        Rect::new(
            border_box.x,
            border_box.y + border_box.height - dimensions.border.bottom,
            border_box.width,
            dimensions.border.bottom,
        ),
    ];

    for rect in strips {
        display_list.push(DisplayCommand::SolidColor { color, rect });
    }
}

/// The color value of property `name`, if the box has one.
///
/// Anonymous boxes and non-color values yield `None`.
fn get_color(layout_box: &LayoutBox<'_>, name: &str) -> Option<Color> {
    layout_box.value(name).and_then(Value::as_color)
}
