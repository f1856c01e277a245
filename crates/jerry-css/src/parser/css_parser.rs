//! CSS parser for the subset of CSS the renderer understands.
//!
//! [CSS Syntax Level 3](https://www.w3.org/TR/css-syntax-3/) describes a
//! tokenizer feeding a generic rule parser. The subset handled here is small
//! enough to parse straight from characters:
//!
//! ```text
//! stylesheet  := rule*
//! rule        := selector ("," selector)* "{" declaration* "}"
//! selector    := ("*" | tag | "#" id | "." class)*
//! declaration := name ":" value (";" | before "}")
//! value       := length | "#" hex-digits | keyword
//! length      := "-"? number "px"      (a unitless 0 is accepted)
//! ```
//!
//! Whitespace and `/* ... */` comments may appear between any two tokens.

use thiserror::Error;

use super::stylesheet::{Declaration, Rule, Stylesheet};
use crate::selector::{Selector, SimpleSelector};
use crate::values::{Color, Unit, Value};

/// Reasons the CSS parser can reject its input.
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

    /// The input ended inside a rule.
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEof {
        /// Byte offset of the end of input.
        position: usize,
    },

    /// An identifier (property name, keyword, class or id) was empty.
    #[error("expected an identifier at byte {position}")]
    EmptyIdentifier {
        /// Byte offset where the identifier should start.
        position: usize,
    },

    /// A numeric literal could not be read as a number.
    #[error("invalid number '{text}' at byte {position}")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// Byte offset of the literal.
        position: usize,
    },

    /// A length used a unit other than `px`.
    #[error("unrecognized unit '{unit}' in length at byte {position}")]
    UnrecognizedUnit {
        /// The unit as written (lowercased).
        unit: String,
        /// Byte offset of the length.
        position: usize,
    },

    /// A `#` color did not have 3, 4, 6 or 8 hex digits.
    #[error("invalid color '{text}' at byte {position}")]
    InvalidColor {
        /// The color as written, including `#`.
        text: String,
        /// Byte offset of the `#`.
        position: usize,
    },
}

/// Parse a whole CSS stylesheet.
///
/// # Errors
///
/// Returns a [`ParseError`] if the source is outside the supported subset.
pub fn parse(source: &str) -> Result<Stylesheet, ParseError> {
    CSSParser::new(source).parse_stylesheet()
}

/// Character-level CSS parser.
pub struct CSSParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> CSSParser<'a> {
    /// Create a new parser positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// Parse the remaining input as a list of rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, ParseError> {
        let mut rules = Vec::new();
        loop {
            self.consume_whitespace();
            if self.eof() {
                break;
            }
            rules.push(self.parse_rule()?);
        }
        Ok(Stylesheet { rules })
    }

    /// Parse a rule set: `<selectors> { <declarations> }`.
    fn parse_rule(&mut self) -> Result<Rule, ParseError> {
        Ok(Rule {
            selectors: self.parse_selectors()?,
            declarations: self.parse_declarations()?,
        })
    }

    /// Parse a comma-separated list of selectors, stopping before `{`.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>, ParseError> {
        let mut selectors = Vec::new();
        loop {
            selectors.push(Selector::Simple(self.parse_simple_selector()?));
            self.consume_whitespace();
            match self.next_char() {
                Some(',') => {
                    self.expect_char(',')?;
                    self.consume_whitespace();
                }
                Some('{') => break,
                Some(found) => {
                    return Err(ParseError::UnexpectedChar {
                        expected: '{',
                        found,
                        position: self.position,
                    });
                }
                None => {
                    return Err(ParseError::UnexpectedEof {
                        position: self.position,
                    });
                }
            }
        }

        // Highest specificity first, so the first selector in the list that
        // matches an element is also the most specific one that does.
        selectors.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        Ok(selectors)
    }

    /// Parse one compound selector, e.g. `type#id.class1.class2`.
    fn parse_simple_selector(&mut self) -> Result<SimpleSelector, ParseError> {
        let mut selector = SimpleSelector::default();
        while let Some(c) = self.next_char() {
            match c {
                '#' => {
                    self.expect_char('#')?;
                    selector.id = Some(self.parse_identifier()?);
                }
                '.' => {
                    self.expect_char('.')?;
                    selector.class_names.push(self.parse_identifier()?);
                }
                // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#the-universal-selector)
                '*' => self.expect_char('*')?,
                c if is_identifier_char(c) => {
                    selector.tag_name = Some(self.parse_identifier()?);
                }
                _ => break,
            }
        }
        Ok(selector)
    }

    /// Parse a list of declarations enclosed in `{ ... }`.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        self.expect_char('{')?;
        let mut declarations = Vec::new();
        loop {
            self.consume_whitespace();
            match self.next_char() {
                Some('}') => {
                    self.expect_char('}')?;
                    break;
                }
                Some(_) => declarations.push(self.parse_declaration()?),
                None => {
                    return Err(ParseError::UnexpectedEof {
                        position: self.position,
                    });
                }
            }
        }
        Ok(declarations)
    }

    /// Parse one `<property>: <value>;` declaration. The `;` may be omitted
    /// on the last declaration of a block.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let name = self.parse_identifier()?;
        self.consume_whitespace();
        self.expect_char(':')?;
        self.consume_whitespace();
        let value = self.parse_value()?;
        self.consume_whitespace();
        match self.next_char() {
            Some(';') => self.expect_char(';')?,
            Some('}') => {}
            Some(found) => {
                return Err(ParseError::UnexpectedChar {
                    expected: ';',
                    found,
                    position: self.position,
                });
            }
            None => {
                return Err(ParseError::UnexpectedEof {
                    position: self.position,
                });
            }
        }
        Ok(Declaration { name, value })
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.next_char() {
            Some(c) if starts_number(c) => self.parse_length(),
            Some('-') if self.second_char().is_some_and(starts_number) => self.parse_length(),
            Some('#') => self.parse_color(),
            Some(_) => Ok(Value::Keyword(self.parse_identifier()?)),
            None => Err(ParseError::UnexpectedEof {
                position: self.position,
            }),
        }
    }

    fn parse_length(&mut self) -> Result<Value, ParseError> {
        let position = self.position;
        let length = self.parse_float()?;
        let unit = self.consume_while(is_identifier_char).to_ascii_lowercase();
        match unit.as_str() {
            "px" => Ok(Value::Length(length, Unit::Px)),
            // [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
            // "for zero lengths the unit identifier is optional"
            "" if length.abs() < f64::EPSILON => Ok(Value::Length(0.0, Unit::Px)),
            _ => Err(ParseError::UnrecognizedUnit { unit, position }),
        }
    }

    fn parse_float(&mut self) -> Result<f64, ParseError> {
        let input = self.input;
        let start = self.position;
        if self.next_char() == Some('-') {
            self.expect_char('-')?;
        }
        let _ = self.consume_while(starts_number);
        let text = &input[start..self.position];
        text.parse().map_err(|_| ParseError::InvalidNumber {
            text: text.to_string(),
            position: start,
        })
    }

    fn parse_color(&mut self) -> Result<Value, ParseError> {
        let position = self.position;
        self.expect_char('#')?;
        let hex = self.consume_while(|c| c.is_ascii_alphanumeric());
        Color::from_hex(hex)
            .map(Value::ColorValue)
            .ok_or_else(|| ParseError::InvalidColor {
                text: format!("#{hex}"),
                position,
            })
    }

    /// Parse a property name, keyword, class name or id.
    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let position = self.position;
        let identifier = self.consume_while(is_identifier_char);
        if identifier.is_empty() {
            return Err(ParseError::EmptyIdentifier { position });
        }
        Ok(identifier.to_string())
    }

    /// Skip whitespace and comments.
    fn consume_whitespace(&mut self) {
        loop {
            let _ = self.consume_while(char::is_whitespace);
            if !self.input[self.position..].starts_with("/*") {
                break;
            }
            // An unterminated comment runs to the end of the input.
            self.position = self.input[self.position + 2..]
                .find("*/")
                .map_or(self.input.len(), |end| self.position + 2 + end + 2);
        }
    }

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

    fn expect_char(&mut self, expected: char) -> Result<(), ParseError> {
        let position = self.position;
        match self.next_char() {
            Some(found) if found == expected => {
                self.position += found.len_utf8();
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                expected,
                found,
                position,
            }),
            None => Err(ParseError::UnexpectedEof { position }),
        }
    }

    fn next_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn second_char(&self) -> Option<char> {
        self.input[self.position..].chars().nth(1)
    }

    const fn eof(&self) -> bool {
        self.position >= self.input.len()
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

const fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
