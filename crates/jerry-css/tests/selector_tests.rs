//! Integration tests for selector matching and specificity.

use jerry_css::parser::parse;
use jerry_css::{Selector, Specificity};
use jerry_dom::{AttributesMap, ElementData};

fn element(tag: &str, id: Option<&str>, classes: &[&str]) -> ElementData {
    let mut attrs = AttributesMap::new();
    if let Some(id_val) = id {
        let _ = attrs.insert("id".to_string(), id_val.to_string());
    }
    if !classes.is_empty() {
        let _ = attrs.insert("class".to_string(), classes.join(" "));
    }
    ElementData {
        tag_name: tag.to_string(),
        attrs,
    }
}

fn selector(source: &str) -> Selector {
    let sheet = parse(&format!("{source} {{}}")).unwrap();
    sheet.rules[0].selectors[0].clone()
}

#[test]
fn test_type_selector() {
    assert!(selector("div").matches(&element("div", None, &[])));
    assert!(!selector("div").matches(&element("p", None, &[])));
}

#[test]
fn test_id_selector() {
    assert!(selector("#main").matches(&element("div", Some("main"), &[])));
    assert!(!selector("#main").matches(&element("div", Some("other"), &[])));
    assert!(!selector("#main").matches(&element("div", None, &[])));
}

#[test]
fn test_class_selector_requires_every_class() {
    let el = element("div", None, &["two", "cols", "extra"]);
    assert!(selector(".two.cols").matches(&el));
    assert!(!selector(".two.rows").matches(&el));
}

#[test]
fn test_compound_selector() {
    let el = element("div", Some("main"), &["two", "cols"]);
    assert!(selector("div#main.two.cols").matches(&el));
    assert!(!selector("p#main.two").matches(&el));
}

#[test]
fn test_universal_selector_matches_everything() {
    assert!(selector("*").matches(&element("span", None, &[])));
    assert!(selector("*").matches(&element("div", Some("x"), &["y"])));
}

#[test]
fn test_class_attribute_whitespace() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("class".to_string(), "  a\tb \n c ".to_string());
    let el = ElementData {
        tag_name: "div".to_string(),
        attrs,
    };
    assert!(selector(".a.b.c").matches(&el));
}

#[test]
fn test_specificity_ordering() {
    let id_classes = selector("#main.two.cols").specificity();
    let class = selector(".cols").specificity();
    let tag = selector("div").specificity();

    assert_eq!(id_classes, Specificity::new(1, 2, 0));
    assert_eq!(class, Specificity::new(0, 1, 0));
    assert_eq!(tag, Specificity::new(0, 0, 1));
    assert!(id_classes > class);
    assert!(class > tag);
}
