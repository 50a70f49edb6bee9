//! Error types surfaced by the parser and the AST constructors
//!
//! Callers only ever see [`ParseError`]. Lexer failures are folded into it
//! through `From<LexError>`, keeping the originating [`LexErrorKind`] so that
//! tooling can still tell an escape problem from a structural one.

use super::lexer::{LexError, LexErrorKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No document was supplied at all
    MissingInput,
    /// Tokenization failed
    Lexical(LexErrorKind),
    /// A tag whose keyword is not `FOR`, `END` or `=`
    UnsupportedTag,
    /// Wrong number or type of tag arguments
    InvalidArguments,
    /// `END` with no open `FOR`
    UnmatchedEnd,
    /// End of input while a `FOR` is still open
    UnclosedFor,
    /// A token that cannot appear where it was found
    UnexpectedToken,
}

/// The single failure type of a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_input() -> Self {
        Self::new(ParseErrorKind::MissingInput, "no document to parse")
    }

    pub fn unsupported_tag(name: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedTag,
            format!("unsupported tag '{}'", name),
        )
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidArguments, message)
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lexical(_))
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self::new(ParseErrorKind::Lexical(err.kind), err.to_string())
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: {}", self.message)
    }
}

/// Rejected payload for an element or node constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementError {
    InvalidIdentifier(String),
    InvalidOperator(char),
    InvalidLoopVariable(String),
    InvalidLoopBound(String),
}

impl std::error::Error for ElementError {}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementError::InvalidIdentifier(name) => write!(f, "invalid identifier '{}'", name),
            ElementError::InvalidOperator(symbol) => write!(f, "invalid operator '{}'", symbol),
            ElementError::InvalidLoopVariable(found) => {
                write!(f, "loop variable must be a variable name, found {}", found)
            }
            ElementError::InvalidLoopBound(found) => write!(
                f,
                "loop bounds must be integers, doubles or variables, found {}",
                found
            ),
        }
    }
}

impl From<ElementError> for ParseError {
    fn from(err: ElementError) -> Self {
        ParseError::invalid_arguments(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_conversion_keeps_kind() {
        let err: ParseError = LexError::new(LexErrorKind::UnterminatedString, 4).into();
        assert_eq!(
            err.kind,
            ParseErrorKind::Lexical(LexErrorKind::UnterminatedString)
        );
        assert!(err.is_lexical());
        assert_eq!(err.to_string(), "parse error: unterminated string at byte 4");
    }

    #[test]
    fn test_element_error_becomes_invalid_arguments() {
        let err: ParseError = ElementError::InvalidOperator('%').into();
        assert_eq!(err.kind, ParseErrorKind::InvalidArguments);
        assert_eq!(err.message, "invalid operator '%'");
    }
}
