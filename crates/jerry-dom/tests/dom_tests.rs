//! Tests for element attribute accessors and tree construction helpers.

use jerry_dom::{AttributesMap, NodeType, elem, text};

fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_id_lookup() {
    let node = elem("div", attrs(&[("id", "main")]), vec![]);
    assert_eq!(node.as_element().unwrap().id(), Some("main"));

    let anonymous = elem("div", AttributesMap::new(), vec![]);
    assert_eq!(anonymous.as_element().unwrap().id(), None);
}

#[test]
fn test_classes_split_on_any_whitespace() {
    let node = elem("div", attrs(&[("class", "  two\tcols\nwide ")]), vec![]);
    let classes = node.as_element().unwrap().classes();
    assert_eq!(classes.len(), 3);
    assert!(classes.contains("two"));
    assert!(classes.contains("cols"));
    assert!(classes.contains("wide"));
    assert!(!classes.contains(""));
}

#[test]
fn test_classes_deduplicate() {
    let node = elem("p", attrs(&[("class", "a a b")]), vec![]);
    assert_eq!(node.as_element().unwrap().classes().len(), 2);
}

#[test]
fn test_missing_class_attribute_is_empty_set() {
    let node = elem("p", AttributesMap::new(), vec![]);
    assert!(node.as_element().unwrap().classes().is_empty());
}

#[test]
fn test_text_node_has_no_element_data() {
    let node = text("hello");
    assert!(node.as_element().is_none());
    assert_eq!(node.as_text(), Some("hello"));
    assert!(matches!(node.node_type, NodeType::Text(_)));
}

#[test]
fn test_subtree_len_counts_all_nodes() {
    let tree = elem(
        "html",
        AttributesMap::new(),
        vec![
            elem("p", AttributesMap::new(), vec![text("a")]),
            elem("p", AttributesMap::new(), vec![text("b"), text("c")]),
        ],
    );
    assert_eq!(tree.subtree_len(), 6);
}
