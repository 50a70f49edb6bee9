//! Parser module for SmartScript documents
//!
//! This module turns a document string into a [`DocumentNode`]. See
//! [`parser`](self::parser) for the stack discipline that gives `FOR`/`END`
//! their nesting.
//!
//! ## Testing
//!
//! Parser tests should use the verified documents under `docs/samples` (see
//! [`samples`](crate::script::testing::samples)) and check trees with
//! [`assert_ast`](crate::script::testing::assert_ast).

#[allow(clippy::module_inception)]
pub mod parser;

pub use crate::script::ast::DocumentNode;
pub use crate::script::error::{ParseError, ParseErrorKind};
pub use parser::{parse, SmartScriptParser};

/// Main parser function that takes source text and returns a parsed document
/// This is the primary entry point for parsing SmartScript documents
pub fn parse_document(source: &str) -> Result<DocumentNode, ParseError> {
    parse(source)
}

/// Parses a document that may be absent. Absent input is an error, not an
/// empty document.
pub fn parse_optional(source: Option<&str>) -> Result<DocumentNode, ParseError> {
    match source {
        Some(source) => parse(source),
        None => Err(ParseError::missing_input()),
    }
}
