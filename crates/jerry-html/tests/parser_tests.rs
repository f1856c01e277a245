//! Integration tests for the HTML subset parser.

use jerry_common::warning::has_warned;
use jerry_dom::NodeType;
use jerry_html::{ParseError, parse};

#[test]
fn test_parse_single_root_element() {
    let root = parse("<html><body></body></html>").unwrap();
    let data = root.as_element().unwrap();
    assert_eq!(data.tag_name, "html");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].as_element().unwrap().tag_name, "body");
}

#[test]
fn test_parse_attributes_with_both_quote_styles() {
    let root = parse(r#"<div id="main" class='a b'></div>"#).unwrap();
    let data = root.as_element().unwrap();
    assert_eq!(data.id(), Some("main"));
    assert!(data.classes().contains("a"));
    assert!(data.classes().contains("b"));
}

#[test]
fn test_parse_text_children() {
    let root = parse("<p>Hello <span>world</span></p>").unwrap();
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].as_text(), Some("Hello "));
    let span = &root.children[1];
    assert_eq!(span.children[0].as_text(), Some("world"));
}

#[test]
fn test_whitespace_between_elements_is_skipped() {
    let root = parse("<div>\n  <p></p>\n  <p></p>\n</div>").unwrap();
    assert_eq!(root.children.len(), 2);
    assert!(
        root.children
            .iter()
            .all(|child| matches!(child.node_type, NodeType::Element(_)))
    );
}

#[test]
fn test_multiple_top_level_nodes_are_wrapped_in_html() {
    let root = parse("<p></p><p></p>").unwrap();
    assert_eq!(root.as_element().unwrap().tag_name, "html");
    assert_eq!(root.children.len(), 2);
    assert!(has_warned(
        "HTML",
        "document has no single root element, wrapping content in <html>"
    ));
}

#[test]
fn test_empty_document_is_an_empty_html_element() {
    let root = parse("   ").unwrap();
    assert_eq!(root.as_element().unwrap().tag_name, "html");
    assert!(root.children.is_empty());
}

#[test]
fn test_mismatched_closing_tag() {
    let err = parse("<div><p></div></p>").unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedClosingTag {
            expected: "p".to_string(),
            found: "div".to_string(),
        }
    );
}

#[test]
fn test_unclosed_element_is_eof_error() {
    let err = parse("<div>").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_unquoted_attribute_value_is_rejected() {
    let err = parse("<div id=main></div>").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedChar { found: 'm', .. }
    ));
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    let err = parse("<p></p></div>").unwrap_err();
    assert_eq!(err, ParseError::StrayClosingTag { position: 7 });
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = parse("<div></span>").unwrap_err();
    assert_eq!(err.to_string(), "closing tag </span> does not match <div>");
}
