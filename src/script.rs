//! Main module for SmartScript library functionality

pub mod ast;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::{DocumentNode, Element, Node};
pub use error::{ElementError, ParseError, ParseErrorKind};
pub use parser::{parse_document, parse_optional};
