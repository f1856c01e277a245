//! HTML parser for the Jerry renderer.
//!
//! # Scope
//!
//! This crate implements a recursive-descent parser for a tiny subset of HTML:
//! - Balanced open and close tags
//! - Quoted attributes (`name="value"` or `name='value'`)
//! - Text nodes
//!
//! # Not Yet Implemented
//!
//! - Comments, doctypes and processing instructions
//! - Self-closing and void tags
//! - Character references
//! - Error recovery for non-well-formed markup

/// Recursive-descent parser producing a [`jerry_dom::Node`] tree.
pub mod parser;

pub use parser::{HTMLParser, ParseError, parse, print_tree};
