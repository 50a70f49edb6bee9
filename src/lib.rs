//! # smartscript
//!
//! A front end for the SmartScript template language: a two-mode lexer, a
//! stack-based parser for `FOR`, `END` and `=` tags, and serializers that turn
//! the parsed tree back into source text or into inspection formats.
//!
//! ```rust,ignore
//! use smartscript::script::parse_document;
//!
//! let doc = parse_document("Text {$FOR i 1 10 1$}{$= i $}{$END$}")?;
//! assert_eq!(doc.to_source(), "Text {$FOR i 1 10 1 $}{$= i $}{$END$}");
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](script::testing).
//! Parser tests use the verified samples in `docs/samples` and AST assertions.

pub mod script;
