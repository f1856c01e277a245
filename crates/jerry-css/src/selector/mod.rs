//! CSS Selectors
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! Only compound selectors made of an optional type selector, an optional ID
//! selector and any number of class selectors are supported. Combinators,
//! attribute selectors and pseudo-classes are not.

use jerry_dom::ElementData;

/// [§ 17 Calculating a selector's specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator", written here as `tag#id.class1.class2`.
/// Every present component is a constraint; an absent one matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    pub tag_name: Option<String>,
    /// [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
    pub id: Option<String>,
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html)
    pub class_names: Vec<String>,
}

impl SimpleSelector {
    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// The selector matches when every constraint it carries holds for
    /// `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        // [§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors)
        // "A type selector ... represents an instance of the element type in
        // the document tree."
        if self
            .tag_name
            .as_ref()
            .is_some_and(|tag| *tag != element.tag_name)
        {
            return false;
        }

        // [§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors)
        // "An ID selector represents an element instance that has an
        // identifier that matches the identifier in the ID selector."
        if self
            .id
            .as_deref()
            .is_some_and(|id| element.id() != Some(id))
        {
            return false;
        }

        // [§ 6.6](https://www.w3.org/TR/selectors-4/#class-html)
        // "the class selector ... represents an element belonging to the
        // class identified by the identifier."
        let element_classes = element.classes();
        self.class_names
            .iter()
            .all(|class| element_classes.contains(class.as_str()))
    }

    /// Calculate this selector's specificity.
    ///
    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let a = u32::from(self.id.is_some());
        let b = u32::try_from(self.class_names.len()).unwrap_or(u32::MAX);
        let c = u32::from(self.tag_name.is_some());
        Specificity(a, b, c)
    }
}

/// A selector as it appears in a rule's selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector with no combinators.
    Simple(SimpleSelector),
}

impl Selector {
    /// Whether this selector matches `element`.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Simple(simple) => simple.matches(element),
        }
    }

    /// The specificity of this selector.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Simple(simple) => simple.specificity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(tag: Option<&str>, id: Option<&str>, classes: &[&str]) -> SimpleSelector {
        SimpleSelector {
            tag_name: tag.map(str::to_string),
            id: id.map(str::to_string),
            class_names: classes.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[test]
    fn test_specificity_components() {
        assert_eq!(
            selector(None, Some("main"), &["two", "cols"]).specificity(),
            Specificity::new(1, 2, 0)
        );
        assert_eq!(
            selector(None, None, &["cols"]).specificity(),
            Specificity::new(0, 1, 0)
        );
        assert_eq!(
            selector(Some("div"), None, &[]).specificity(),
            Specificity::new(0, 0, 1)
        );
        assert_eq!(selector(None, None, &[]).specificity(), Specificity::default());
    }

    #[test]
    fn test_specificity_is_lexicographic() {
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 9, 9));
        assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 9));
        assert!(Specificity::new(0, 1, 1) > Specificity::new(0, 1, 0));
    }
}
