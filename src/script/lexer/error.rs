//! Lexer error types

use std::fmt;

/// What went wrong while tokenizing.
///
/// The `Default` variant is what logos reports when no token pattern matches
/// at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A `\` followed by a character that is not a recognised escape
    InvalidEscape,
    /// A numeric lexeme that is neither `-?\d+` (fitting in 32 bits) nor `-?\d+\.\d+`
    MalformedNumber,
    /// End of input inside a quoted string
    UnterminatedString,
    /// End of input before the closing `$}` of a tag
    UnterminatedTag,
    /// A raw line break inside a quoted string
    NewlineInString,
    /// An unescaped `{` inside a quoted string
    BraceInString,
    #[default]
    UnexpectedCharacter,
}

impl LexErrorKind {
    pub fn description(&self) -> &'static str {
        match self {
            LexErrorKind::InvalidEscape => "invalid escape sequence",
            LexErrorKind::MalformedNumber => "malformed number literal",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::UnterminatedTag => "unterminated tag",
            LexErrorKind::NewlineInString => "line break inside string",
            LexErrorKind::BraceInString => "unescaped '{' inside string",
            LexErrorKind::UnexpectedCharacter => "unexpected character in tag",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A tokenization failure at a byte offset of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl std::error::Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_offset() {
        let err = LexError::new(LexErrorKind::InvalidEscape, 7);
        assert_eq!(err.to_string(), "invalid escape sequence at byte 7");
    }

    #[test]
    fn test_default_kind_is_unexpected_character() {
        assert_eq!(LexErrorKind::default(), LexErrorKind::UnexpectedCharacter);
    }
}
