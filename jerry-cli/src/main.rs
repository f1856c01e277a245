//! Jerry CLI
//!
//! Renders an HTML file styled by a CSS file to a PNG image.
//!
//! - jerry -H page.html -c page.css -o page.png
//! - jerry -v                    # also print the DOM, style and layout trees

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use jerry_browser::{RenderedDocument, Viewport, load_sources, render_document};
use jerry_css::{BoxType, Dimensions, LayoutBox, StyledNode, Value};
use jerry_dom::{Node, NodeType};
use jerry_html::print_tree;
use owo_colors::OwoColorize;
use serde::Serialize;

/// Jerry: a toy HTML/CSS renderer
#[derive(Parser, Debug)]
#[command(name = "jerry")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render test.html + test.css to output.png
    jerry

    # Render explicit files at a custom width
    jerry -H page.html -c page.css -o page.png --width 1024

    # Dump the layout tree as JSON
    jerry --layout-json layout.json
"#)]
struct Cli {
    /// HTML document to render
    #[arg(short = 'H', long, value_name = "FILE", default_value = "test.html")]
    html: PathBuf,

    /// Stylesheet applied to the document
    #[arg(short = 'c', long, value_name = "FILE", default_value = "test.css")]
    css: PathBuf,

    /// Output image (PNG format)
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.png")]
    output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels (informational only: layout stacks from the top
    /// and the canvas height follows the root box)
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Print the DOM, style and layout trees
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Write the layout tree as JSON to this file
    #[arg(long, value_name = "FILE")]
    layout_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sources = load_sources(&cli.html, &cli.css)?;
    let viewport = Viewport {
        width: f64::from(cli.width),
        height: f64::from(cli.height),
    };
    let document = render_document(&sources.html, &sources.css, viewport)?;

    if cli.verbose {
        print_document(&document)?;
    }

    if let Some(ref path) = cli.layout_json {
        write_layout_json(&document, path)?;
        println!("{} {}", "Layout written to:".green(), path.display());
    }

    document.canvas.save(&cli.output)?;

    let (width, height) = (document.canvas.width(), document.canvas.height());
    println!(
        "{} {} ({width}x{height}, {} pixels)",
        "Saved".green().bold(),
        cli.output.display(),
        u64::from(width) * u64::from(height)
    );

    Ok(())
}

/// Print the DOM, style and layout trees of a rendered document
fn print_document(document: &RenderedDocument) -> Result<()> {
    println!("{}", "=== DOM Tree ===".bold());
    print_tree(&document.dom, 0);

    println!("\n{}", "=== Stylesheet ===".bold());
    println!("{} rules", document.stylesheet.rules.len());

    println!("\n{}", "=== Style Tree ===".bold());
    print_styled_node(&document.style_tree(), 0);

    let viewport = document.viewport;
    println!(
        "\n{}",
        format!(
            "=== Layout Tree (viewport: {}x{}) ===",
            viewport.width, viewport.height
        )
        .bold()
    );
    print_layout_box(&document.layout_tree()?, 0);

    println!("\n{}", "=== Display List ===".bold());
    println!("{} commands", document.display_list.len());
    Ok(())
}

/// A short label for a document node: `<tag>` or a quoted text preview
fn node_label(node: &Node) -> String {
    match &node.node_type {
        NodeType::Element(element) => format!("<{}>", element.tag_name),
        NodeType::Text(text) => {
            let preview: String = text.chars().take(30).collect();
            let suffix = if text.chars().count() > 30 { "..." } else { "" };
            format!("Text(\"{}{suffix}\")", preview.replace('\n', "\\n"))
        }
    }
}

/// Recursively print a styled node with its specified values
fn print_styled_node(styled: &StyledNode<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    let values: BTreeMap<_, _> = styled.specified_values.iter().collect();

    println!("{indent}{} [{}]", node_label(styled.node), styled.display());
    for (name, value) in values {
        println!("{indent}  {}: {value}", name.cyan());
    }

    for child in &styled.children {
        print_styled_node(child, depth + 1);
    }
}

/// Recursively print a layout box with its dimensions
fn print_layout_box(layout_box: &LayoutBox<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    let dims = layout_box.dimensions;

    let name = layout_box
        .style()
        .map_or_else(|| "anonymous".to_string(), |style| node_label(style.node));

    println!("{indent}[{}] {name}", layout_box.box_type);
    if layout_box.box_type == BoxType::Block {
        println!(
            "{indent}  content: x={:.1} y={:.1} w={:.1} h={:.1}",
            dims.content.x, dims.content.y, dims.content.width, dims.content.height
        );
        let margin_box = dims.margin_box();
        println!(
            "{indent}  margin box: x={:.1} y={:.1} w={:.1} h={:.1}",
            margin_box.x, margin_box.y, margin_box.width, margin_box.height
        );
    }

    for child in &layout_box.children {
        print_layout_box(child, depth + 1);
    }
}

/// Serializable view of a layout box
#[derive(Serialize)]
struct LayoutDump<'a> {
    box_type: BoxType,
    node: Option<String>,
    specified_values: BTreeMap<&'a str, &'a Value>,
    dimensions: Dimensions,
    children: Vec<LayoutDump<'a>>,
}

impl<'a> LayoutDump<'a> {
    fn new(layout_box: &'a LayoutBox<'_>) -> Self {
        let style = layout_box.style();
        Self {
            box_type: layout_box.box_type,
            node: style.map(|style| node_label(style.node)),
            specified_values: style
                .map(|style| {
                    style
                        .specified_values
                        .iter()
                        .map(|(name, value)| (name.as_str(), value))
                        .collect()
                })
                .unwrap_or_default(),
            dimensions: layout_box.dimensions,
            children: layout_box.children.iter().map(Self::new).collect(),
        }
    }
}

/// Write the layout tree of a rendered document as pretty-printed JSON
fn write_layout_json(document: &RenderedDocument, path: &Path) -> Result<()> {
    let layout = document.layout_tree()?;
    let json = serde_json::to_string_pretty(&LayoutDump::new(&layout))
        .context("failed to serialize layout tree")?;
    fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))
}
