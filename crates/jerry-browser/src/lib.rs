//! High-level rendering API for the Jerry renderer.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read HTML and CSS sources from disk
//! - **Pipeline** - parse, style, lay out and paint a document
//! - **Software Rendering** - rasterize the display list into an RGBA image
//!
//! # Not Yet Implemented
//!
//! - Text rendering
//! - Alpha compositing

pub mod renderer;

pub use jerry_css as css;
pub use jerry_dom as dom;
pub use jerry_html as html;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jerry_common::warning::clear_warnings;
use jerry_css::parser::parse as parse_css;
use jerry_css::{
    Dimensions, DisplayList, EdgeSizes, LayoutBox, LayoutError, Rect, StyledNode, Stylesheet,
    build_display_list, layout_tree, style_tree,
};
use jerry_dom::Node;
use thiserror::Error;

use renderer::Renderer;

/// The area a document is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels; block boxes with `width: auto` fill it.
    pub width: f64,
    /// Height in pixels. Layout always starts stacking from the top, so this
    /// does not constrain the document height.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    /// The initial containing block for this viewport.
    ///
    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "The containing block in which the root element lives is a rectangle
    /// called the initial containing block."
    #[must_use]
    pub const fn containing_block(self) -> Dimensions {
        Dimensions {
            content: Rect::new(0.0, 0.0, self.width, self.height),
            padding: EdgeSizes::ZERO,
            border: EdgeSizes::ZERO,
            margin: EdgeSizes::ZERO,
        }
    }
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a source file.
    #[error("failed to read '{}'", path.display())]
    FileError {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// HTML and CSS source text of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSources {
    /// HTML source.
    pub html: String,
    /// CSS source.
    pub css: String,
}

/// Read the HTML and CSS sources of a document.
///
/// # Errors
///
/// Returns a [`LoadError`] if either file cannot be read.
pub fn load_sources(html_path: &Path, css_path: &Path) -> Result<DocumentSources, LoadError> {
    Ok(DocumentSources {
        html: read_file(html_path)?,
        css: read_file(css_path)?,
    })
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::FileError {
        path: path.to_path_buf(),
        source,
    })
}

/// A parsed, laid out and painted document.
pub struct RenderedDocument {
    /// Parsed document tree.
    pub dom: Node,
    /// Parsed stylesheet.
    pub stylesheet: Stylesheet,
    /// The viewport the document was laid out in.
    pub viewport: Viewport,
    /// Drawing commands produced by the painter.
    pub display_list: DisplayList,
    /// The root box's content rectangle, which sizes the canvas.
    pub canvas_bounds: Rect,
    /// The rasterized canvas.
    pub canvas: Renderer,
}

impl RenderedDocument {
    /// Build the style tree for this document.
    #[must_use]
    pub fn style_tree(&self) -> StyledNode<'_> {
        style_tree(&self.dom, &self.stylesheet)
    }

    /// Lay out this document again, returning the box tree.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the box tree cannot be built.
    pub fn layout_tree(&self) -> Result<LayoutBox<'_>, LayoutError> {
        layout_tree(self.style_tree(), self.viewport.containing_block())
    }
}

/// Parse, style, lay out and paint a document.
///
/// The canvas is sized to the root box's content rectangle.
///
/// # Errors
///
/// Returns an error if the HTML or CSS fails to parse, if the box tree
/// cannot be built (for example, when the root has `display: none`), or if
/// the root box is too large to rasterize.
pub fn render_document(html: &str, css: &str, viewport: Viewport) -> Result<RenderedDocument> {
    clear_warnings();

    let dom = jerry_html::parse(html).context("failed to parse HTML")?;
    let stylesheet = parse_css(css).context("failed to parse CSS")?;

    let (display_list, canvas_bounds) = {
        let style_root = style_tree(&dom, &stylesheet);
        let layout_root = layout_tree(style_root, viewport.containing_block())
            .context("failed to lay out document")?;
        (
            build_display_list(&layout_root),
            layout_root.dimensions.content,
        )
    };

    let mut canvas = Renderer::with_bounds(canvas_bounds).context("failed to allocate canvas")?;
    canvas.render(&display_list);

    Ok(RenderedDocument {
        dom,
        stylesheet,
        viewport,
        display_list,
        canvas_bounds,
        canvas,
    })
}
