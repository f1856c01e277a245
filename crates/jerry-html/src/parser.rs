//! Parser for a small, well-formed HTML subset.
//!
//! The grammar is deliberately strict: every element must be closed by a
//! matching tag and attribute values must be quoted. Anything else is reported
//! as a [`ParseError`] with the byte offset where parsing stopped.

use jerry_common::warning::warn_once;
use jerry_dom::{AttributesMap, Node, NodeType, elem, text};
use thiserror::Error;

/// Reasons the HTML subset parser can reject its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific character was required but a different one was found.
    #[error("expected '{expected}' at byte {position}, found '{found}'")]
    UnexpectedChar {
        /// The character the grammar required.
        expected: char,
        /// The character actually present.
        found: char,
        /// Byte offset of `found`.
        position: usize,
    },

    /// The input ended inside a tag, attribute, or element body.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEof {
        /// Byte offset of the end of input.
        position: usize,
    },

    /// An element was closed by a tag with a different name.
    #[error("closing tag </{found}> does not match <{expected}>")]
    MismatchedClosingTag {
        /// Name of the element being closed.
        expected: String,
        /// Name given in the closing tag.
        found: String,
    },

    /// A tag or attribute name was empty.
    #[error("expected a name at byte {position}")]
    EmptyName {
        /// Byte offset where the name should start.
        position: usize,
    },

    /// A closing tag appeared with no element open.
    #[error("unmatched closing tag at byte {position}")]
    StrayClosingTag {
        /// Byte offset of the `</`.
        position: usize,
    },
}

/// Parse a whole HTML document and return its root node.
///
/// If the document contains exactly one top-level node it is returned as the
/// root. Otherwise the top-level nodes are wrapped in a synthetic `html`
/// element.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not well-formed within the
/// supported subset.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    HTMLParser::new(source).run()
}

/// Recursive-descent HTML parser over a string slice.
pub struct HTMLParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> HTMLParser<'a> {
    /// Create a new parser positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Parse the whole input into a single root node.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is malformed or if a closing tag
    /// appears at the top level.
    pub fn run(mut self) -> Result<Node, ParseError> {
        let mut nodes = self.parse_nodes()?;
        if !self.eof() {
            return Err(ParseError::StrayClosingTag {
                position: self.position,
            });
        }

        if nodes.len() == 1
            && let Some(root) = nodes.pop()
        {
            return Ok(root);
        }

        warn_once(
            "HTML",
            "document has no single root element, wrapping content in <html>",
        );
        Ok(elem("html", AttributesMap::new(), nodes))
    }

    /// Parse a sequence of sibling nodes, stopping at end of input or at the
    /// parent's closing tag.
    fn parse_nodes(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.consume_whitespace();
            if self.eof() || self.starts_with("</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        if self.next_char() == Some('<') {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    /// Parse a single element: open tag, contents, and closing tag.
    fn parse_element(&mut self) -> Result<Node, ParseError> {
        // STEP 1: Opening tag.
        self.expect_char('<')?;
        let tag_name = self.parse_name()?;
        let attrs = self.parse_attributes()?;
        self.expect_char('>')?;

        // STEP 2: Contents.
        let children = self.parse_nodes()?;

        // STEP 3: Closing tag, which must name the element we opened.
        self.expect_char('<')?;
        self.expect_char('/')?;
        let closing = self.parse_name()?;
        if closing != tag_name {
            return Err(ParseError::MismatchedClosingTag {
                expected: tag_name,
                found: closing,
            });
        }
        self.expect_char('>')?;

        Ok(elem(tag_name, attrs, children))
    }

    /// Parse a tag or attribute name.
    fn parse_name(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        let name = self.consume_while(|c| c.is_ascii_alphanumeric());
        if name.is_empty() {
            return Err(ParseError::EmptyName { position: start });
        }
        Ok(name.to_string())
    }

    /// Parse a whitespace-separated list of `name="value"` pairs.
    fn parse_attributes(&mut self) -> Result<AttributesMap, ParseError> {
        let mut attributes = AttributesMap::new();
        loop {
            self.consume_whitespace();
            match self.next_char() {
                Some('>') => break,
                None => {
                    return Err(ParseError::UnexpectedEof {
                        position: self.position,
                    });
                }
                Some(_) => {
                    let (name, value) = self.parse_attr()?;
                    let _ = attributes.insert(name, value);
                }
            }
        }
        Ok(attributes)
    }

    fn parse_attr(&mut self) -> Result<(String, String), ParseError> {
        let name = self.parse_name()?;
        self.expect_char('=')?;
        let value = self.parse_attr_value()?;
        Ok((name, value))
    }

    /// Parse a value quoted with either `"` or `'`.
    fn parse_attr_value(&mut self) -> Result<String, ParseError> {
        let position = self.position;
        let open_quote = self.consume_char()?;
        if open_quote != '"' && open_quote != '\'' {
            return Err(ParseError::UnexpectedChar {
                expected: '"',
                found: open_quote,
                position,
            });
        }
        let value = self.consume_while(|c| c != open_quote).to_string();
        self.expect_char(open_quote)?;
        Ok(value)
    }

    fn parse_text(&mut self) -> Node {
        text(self.consume_while(|c| c != '<'))
    }

    fn consume_whitespace(&mut self) {
        let _ = self.consume_while(char::is_whitespace);
    }

    /// Consume characters while `test` holds and return them as a slice of
    /// the input.
    fn consume_while(&mut self, test: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while let Some(c) = self.next_char() {
            if !test(c) {
                break;
            }
            self.position += c.len_utf8();
        }
        &input[start..self.position]
    }

    fn consume_char(&mut self) -> Result<char, ParseError> {
        let c = self.next_char().ok_or(ParseError::UnexpectedEof {
            position: self.position,
        })?;
        self.position += c.len_utf8();
        Ok(c)
    }

    fn expect_char(&mut self, expected: char) -> Result<(), ParseError> {
        let position = self.position;
        let found = self.consume_char()?;
        if found == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedChar {
                expected,
                found,
                position,
            })
        }
    }

    fn next_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.position..].starts_with(prefix)
    }

    const fn eof(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// Print a node tree to stdout, one node per line, indented by depth.
pub fn print_tree(node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match &node.node_type {
        NodeType::Element(data) => {
            if data.attrs.is_empty() {
                println!("{prefix}<{}>", data.tag_name);
            } else {
                let mut attrs: Vec<String> = data
                    .attrs
                    .iter()
                    .map(|(k, v)| format!("{k}=\"{v}\""))
                    .collect();
                attrs.sort();
                println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            println!("{prefix}\"{display}\"");
        }
    }
    for child in &node.children {
        print_tree(child, indent + 1);
    }
}
