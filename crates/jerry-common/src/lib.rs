//! Common utilities for the Jerry renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - deduplicated, colored terminal output for input the
//!   renderer accepts but does not fully support

pub mod warning;
