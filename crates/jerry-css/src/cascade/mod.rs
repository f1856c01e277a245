//! CSS Cascading and Style Computation
//!
//! This module builds the style tree per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/),
//! restricted to specified values: there is no inheritance and no
//! computed-value stage.

use jerry_dom::{ElementData, Node, NodeType};

use crate::parser::{Rule, Stylesheet};
use crate::selector::Specificity;
use crate::style::{PropertyMap, StyledNode};

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// A matched rule with its specificity for cascade ordering.
type MatchedRule<'a> = (Specificity, &'a Rule);

/// Build the style tree for the document rooted at `root`.
///
/// The result mirrors the document one node to one node.
#[must_use]
pub fn style_tree<'a>(root: &'a Node, stylesheet: &Stylesheet) -> StyledNode<'a> {
    StyledNode {
        node: root,
        specified_values: match &root.node_type {
            NodeType::Element(element) => specified_values(element, stylesheet),
            NodeType::Text(_) => PropertyMap::new(),
        },
        children: root
            .children
            .iter()
            .map(|child| style_tree(child, stylesheet))
            .collect(),
    }
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// "The cascade takes an unordered list of declared values for a given
/// property on a given element, sorts them by their declaration's
/// precedence..."
///
/// Apply every matching rule in ascending specificity order so that more
/// specific declarations overwrite less specific ones. Rules of equal
/// specificity keep stylesheet order.
#[must_use]
pub fn specified_values(element: &ElementData, stylesheet: &Stylesheet) -> PropertyMap {
    let mut values = PropertyMap::new();

    let mut rules = matching_rules(element, stylesheet);
    // Stable sort: source order breaks ties.
    rules.sort_by_key(|&(specificity, _)| specificity);

    for (_, rule) in rules {
        for declaration in &rule.declarations {
            let _ = values.insert(declaration.name.clone(), declaration.value.clone());
        }
    }

    values
}

fn matching_rules<'a>(element: &ElementData, stylesheet: &'a Stylesheet) -> Vec<MatchedRule<'a>> {
    stylesheet
        .rules
        .iter()
        .filter_map(|rule| match_rule(element, rule))
        .collect()
}

/// [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "If the selector is a selector list, this number is calculated for each
/// selector in the list. For a given matching process against the list, the
/// specificity in effect is that of the most specific selector in the list
/// which matches."
fn match_rule<'a>(element: &ElementData, rule: &'a Rule) -> Option<MatchedRule<'a>> {
    rule.selectors
        .iter()
        .filter(|selector| selector.matches(element))
        .map(|selector| selector.specificity())
        .max()
        .map(|specificity| (specificity, rule))
}
