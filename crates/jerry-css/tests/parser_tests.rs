//! Integration tests for the CSS parser.

use jerry_css::parser::{ParseError, parse};
use jerry_css::{Color, Declaration, Selector, SimpleSelector, Value};

fn simple(tag: Option<&str>, id: Option<&str>, classes: &[&str]) -> Selector {
    Selector::Simple(SimpleSelector {
        tag_name: tag.map(str::to_string),
        id: id.map(str::to_string),
        class_names: classes.iter().map(|c| (*c).to_string()).collect(),
    })
}

#[test]
fn test_parse_rule_with_selector_list() {
    let sheet = parse("h1, h2, h3 { margin: auto; color: #cc0000; }").unwrap();
    assert_eq!(sheet.rules.len(), 1);

    let rule = &sheet.rules[0];
    assert_eq!(
        rule.selectors,
        vec![
            simple(Some("h1"), None, &[]),
            simple(Some("h2"), None, &[]),
            simple(Some("h3"), None, &[]),
        ]
    );
    assert_eq!(
        rule.declarations,
        vec![
            Declaration::new("margin", Value::keyword("auto")),
            Declaration::new("color", Value::ColorValue(Color::new(0xcc, 0, 0, 255))),
        ]
    );
}

#[test]
fn test_selectors_sorted_by_descending_specificity() {
    let sheet = parse("div, #main.two.cols, .cols { display: block; }").unwrap();
    assert_eq!(
        sheet.rules[0].selectors,
        vec![
            simple(None, Some("main"), &["two", "cols"]),
            simple(None, None, &["cols"]),
            simple(Some("div"), None, &[]),
        ]
    );
}

#[test]
fn test_universal_selector() {
    let sheet = parse("* { display: block; }").unwrap();
    assert_eq!(sheet.rules[0].selectors, vec![simple(None, None, &[])]);
}

#[test]
fn test_rules_keep_source_order() {
    let sheet = parse("a { width: 1px; } b { width: 2px; } c { width: 3px; }").unwrap();
    let widths: Vec<_> = sheet
        .rules
        .iter()
        .map(|rule| rule.declarations[0].value.to_px())
        .collect();
    assert_eq!(widths, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_duplicate_declarations_are_kept() {
    let sheet = parse("p { width: 1px; width: 2px }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![
            Declaration::new("width", Value::px(1.0)),
            Declaration::new("width", Value::px(2.0)),
        ]
    );
}

#[test]
fn test_lengths() {
    let sheet = parse("p { a: 10PX; b: 0; c: -3px; d: .5px; }").unwrap();
    let values: Vec<_> = sheet.rules[0]
        .declarations
        .iter()
        .map(|declaration| declaration.value.clone())
        .collect();
    assert_eq!(
        values,
        vec![
            Value::px(10.0),
            Value::px(0.0),
            Value::px(-3.0),
            Value::px(0.5),
        ]
    );
}

#[test]
fn test_comments_are_ignored() {
    let sheet = parse("/* header */ div /* sel */ { /* inside */ width: 5px; }").unwrap();
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration::new("width", Value::px(5.0))]
    );
}

#[test]
fn test_empty_stylesheet() {
    assert!(parse("   \n\t ").unwrap().rules.is_empty());
}

#[test]
fn test_unrecognized_unit() {
    assert_eq!(
        parse("div { width: 10em; }"),
        Err(ParseError::UnrecognizedUnit {
            unit: "em".to_string(),
            position: 13,
        })
    );
}

#[test]
fn test_invalid_color() {
    assert_eq!(
        parse("div { color: #12; }"),
        Err(ParseError::InvalidColor {
            text: "#12".to_string(),
            position: 13,
        })
    );
}

#[test]
fn test_unterminated_block() {
    assert_eq!(
        parse("div { width: 10px;"),
        Err(ParseError::UnexpectedEof { position: 18 })
    );
}

#[test]
fn test_missing_colon() {
    let err = parse("div { width 10px; }").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            expected: ':',
            found: '1',
            position: 12,
        }
    );
    assert_eq!(err.to_string(), "expected ':' at byte 12, found '1'");
}
