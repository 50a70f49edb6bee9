//! Lexer module for SmartScript documents
//!
//! This module contains the tokenization logic: the per-mode logos token
//! definitions, the pull-based lexer that switches between them, and its
//! error type.
//!
//! Modes
//!
//!     Text mode reads everything verbatim up to an unescaped `{$`. The only
//!     escapes are `\\` and `\{`; any other backslash is an error.
//!
//!     Tag mode starts after `{$` and ends with `$}`. Whitespace separates
//!     tokens and is otherwise dropped. Tag mode knows names, `@functions`,
//!     integers, doubles, quoted strings, the operators `+ - * / ^` and the
//!     echo marker `=`.
//!
//! The lexer does not know about tag keywords; `FOR` and `END` come out as
//! plain names and the parser gives them meaning.

pub mod error;
pub mod lexer_impl;
pub mod tokens;

pub use error::{LexError, LexErrorKind};
pub use lexer_impl::{tokenize, tokenize_with_spans, Lexer, LexerMode};
pub use tokens::Token;
