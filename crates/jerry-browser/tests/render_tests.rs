//! Integration tests for the rendering pipeline.

use std::fs;
use std::path::Path;

use jerry_browser::css::{Color, Rect};
use jerry_browser::renderer::paint;
use jerry_browser::{LoadError, Viewport, load_sources, render_document};

const RED: Color = Color::new(255, 0, 0, 255);
const BLUE: Color = Color::new(0, 0, 255, 255);

#[test]
fn test_default_viewport() {
    assert_eq!(
        Viewport::default(),
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    );
}

#[test]
fn test_canvas_sized_to_root_content() {
    let document = render_document(
        "<div></div>",
        "div { display: block; height: 20px; background: #ff0000; }",
        Viewport::default(),
    )
    .unwrap();

    assert_eq!(document.canvas_bounds, Rect::new(0.0, 0.0, 800.0, 20.0));
    assert_eq!(document.canvas.width(), 800);
    assert_eq!(document.canvas.height(), 20);
    assert_eq!(document.canvas.pixel(0, 0), Some(RED));
    assert_eq!(document.canvas.pixel(799, 19), Some(RED));
}

#[test]
fn test_canvas_keeps_document_coordinates() {
    let document = render_document(
        r#"<div class="outer"><div class="inner"></div></div>"#,
        ".outer, .inner { display: block; }
         .outer { background: #0000ff; padding: 10px; }
         .inner { height: 10px; background: #ff0000; }",
        Viewport {
            width: 100.0,
            height: 100.0,
        },
    )
    .unwrap();

    // The root's content box starts inside its 10px padding.
    assert_eq!(document.canvas_bounds, Rect::new(10.0, 10.0, 80.0, 10.0));
    assert_eq!(document.canvas.pixel(5, 5), Some(BLUE));
    // Canvas is 80x10 but boxes keep document coordinates.
    assert_eq!(document.canvas.pixel(15, 9), Some(BLUE));
    assert_eq!(document.canvas.pixel(15, 1), Some(BLUE));
    assert_eq!(document.display_list.len(), 2);
}

#[test]
fn test_inner_box_overwrites_pixels() {
    let document = render_document(
        r#"<div class="outer"><div class="inner"></div></div>"#,
        ".outer, .inner { display: block; }
         .outer { background: #0000ff; }
         .inner { height: 10px; margin-left: 5px; background: #ff000080; }",
        Viewport {
            width: 20.0,
            height: 100.0,
        },
    )
    .unwrap();

    assert_eq!(document.canvas.pixel(2, 2), Some(BLUE));
    assert_eq!(
        document.canvas.pixel(6, 2),
        Some(Color::new(255, 0, 0, 128))
    );
}

#[test]
fn test_borders_are_painted() {
    let document = render_document(
        "<div></div>",
        "div { display: block; height: 10px; border-width: 2px; border-color: #0000ff; }",
        Viewport {
            width: 20.0,
            height: 20.0,
        },
    )
    .unwrap();

    let layout = document.layout_tree().unwrap();
    let canvas = paint(&layout, Rect::new(0.0, 0.0, 20.0, 14.0)).unwrap();

    assert_eq!(canvas.pixel(0, 7), Some(BLUE));
    assert_eq!(canvas.pixel(19, 7), Some(BLUE));
    assert_eq!(canvas.pixel(10, 0), Some(BLUE));
    assert_eq!(canvas.pixel(10, 13), Some(BLUE));
    assert_eq!(canvas.pixel(10, 7), Some(Color::WHITE));
}

#[test]
fn test_root_display_none_fails() {
    let err = render_document("<div></div>", "div { display: none; }", Viewport::default())
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "failed to lay out document");
    assert_eq!(
        err.root_cause().to_string(),
        "root element has display: none and generates no box"
    );
}

#[test]
fn test_oversized_canvas_is_an_error() {
    let err = render_document(
        "<div></div>",
        "div { display: block; width: 4000000000px; height: 4000000000px; }",
        Viewport::default(),
    )
    .err()
    .unwrap();
    assert_eq!(err.to_string(), "failed to allocate canvas");
}

#[test]
fn test_unstyled_root_has_empty_canvas() {
    let document = render_document(
        "<div><p></p></div>",
        "p { display: block; height: 50px; }",
        Viewport::default(),
    )
    .unwrap();
    assert_eq!((document.canvas.width(), document.canvas.height()), (0, 0));

    let err = document.canvas.save(Path::new("unused.png")).err().unwrap();
    assert!(err.to_string().contains("the root box has no area"));
}

#[test]
fn test_parse_errors_are_reported() {
    let html_err = render_document("<div></span>", "", Viewport::default())
        .err()
        .unwrap();
    assert_eq!(html_err.to_string(), "failed to parse HTML");

    let css_err = render_document("<div></div>", "div { width: 3em; }", Viewport::default())
        .err()
        .unwrap();
    assert_eq!(css_err.to_string(), "failed to parse CSS");
}

#[test]
fn test_multiple_roots_are_wrapped() {
    let document = render_document(
        "<p></p><p></p>",
        "html, p { display: block; } p { height: 5px; }",
        Viewport::default(),
    )
    .unwrap();

    assert_eq!(document.dom.children.len(), 2);
    assert_eq!(document.canvas.height(), 10);
}

#[test]
fn test_style_and_layout_trees_are_rebuilt() {
    let document = render_document(
        "<div><span></span></div>",
        "div { display: block; }",
        Viewport::default(),
    )
    .unwrap();

    assert_eq!(document.style_tree().children.len(), 1);
    let layout = document.layout_tree().unwrap();
    assert_eq!(layout.dimensions.content.width, 800.0);
    assert_eq!(layout.children.len(), 1);
}

#[test]
fn test_save_and_load_sources() {
    let dir = std::env::temp_dir().join(format!("jerry-browser-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let html_path = dir.join("page.html");
    let css_path = dir.join("page.css");
    fs::write(&html_path, "<div></div>").unwrap();
    fs::write(&css_path, "div { display: block; height: 4px; background: #ff0000; }").unwrap();

    let sources = load_sources(&html_path, &css_path).unwrap();
    let document = render_document(&sources.html, &sources.css, Viewport::default()).unwrap();

    let output = dir.join("out.png");
    document.canvas.save(&output).unwrap();
    let decoded = image::open(&output).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (800, 4));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_source_file() {
    let missing = Path::new("/nonexistent/jerry/page.html");
    let err = load_sources(missing, missing).unwrap_err();
    let LoadError::FileError { path, .. } = &err;
    assert_eq!(path, missing);
    assert_eq!(err.to_string(), "failed to read '/nonexistent/jerry/page.html'");
}
