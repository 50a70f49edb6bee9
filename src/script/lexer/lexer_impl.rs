//! Pull-based two-mode lexer
//!
//! The lexer starts in text mode and hands out one [`Token`] per call to
//! [`Lexer::next_token`]. Consuming `{$` morphs the underlying logos lexer into
//! tag mode, consuming `$}` morphs it back. The first error exhausts the lexer.

use super::error::{LexError, LexErrorKind};
use super::tokens::{TagToken, TextToken, Token};
use logos::Logos;
use std::ops::Range;

/// Which vocabulary the lexer is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerMode {
    Text,
    Tag,
}

enum State<'source> {
    Text(logos::Lexer<'source, TextToken>),
    Tag(logos::Lexer<'source, TagToken>),
    Exhausted,
}

pub struct Lexer<'source> {
    state: State<'source>,
    // A text run is only complete once the following `{$` has been seen, so the
    // tag opener has to be held back for one call.
    pending: Option<(Token, Range<usize>)>,
    current: Option<Token>,
    span: Range<usize>,
    source_len: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            state: State::Text(TextToken::lexer(source)),
            pending: None,
            current: None,
            span: 0..0,
            source_len: source.len(),
        }
    }

    /// The most recently produced token, if any.
    pub fn token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Byte range of the most recently produced token.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn mode(&self) -> LexerMode {
        match self.state {
            State::Tag(_) => LexerMode::Tag,
            State::Text(_) | State::Exhausted => LexerMode::Text,
        }
    }

    /// Advances to the next token. Once the input is consumed this keeps
    /// returning [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let (token, span) = match self.pending.take() {
            Some(pending) => pending,
            None => self.advance()?,
        };
        tracing::trace!(token = %token, ?span, "lexed token");
        self.span = span;
        self.current = Some(token.clone());
        Ok(token)
    }

    fn advance(&mut self) -> Result<(Token, Range<usize>), LexError> {
        match std::mem::replace(&mut self.state, State::Exhausted) {
            State::Text(lexer) => self.lex_text(lexer),
            State::Tag(lexer) => self.lex_tag(lexer),
            State::Exhausted => Ok((Token::Eof, self.source_len..self.source_len)),
        }
    }

    fn lex_text(
        &mut self,
        mut lexer: logos::Lexer<'source, TextToken>,
    ) -> Result<(Token, Range<usize>), LexError> {
        let mut text = String::new();
        let mut start = None;

        loop {
            let Some(result) = lexer.next() else {
                let end = self.source_len;
                return Ok(match start {
                    Some(start) => (Token::Text(text), start..end),
                    None => (Token::Eof, end..end),
                });
            };
            let span = lexer.span();

            let piece = match result {
                Ok(TextToken::TagOpen) => {
                    self.state = State::Tag(lexer.morph());
                    return Ok(match start {
                        Some(start) => {
                            self.pending = Some((Token::TagOpen, span.clone()));
                            (Token::Text(text), start..span.start)
                        }
                        None => (Token::TagOpen, span),
                    });
                }
                Ok(TextToken::EscapedBackslash) => "\\",
                Ok(TextToken::EscapedBrace) | Ok(TextToken::Brace) => "{",
                Ok(TextToken::Literal) => lexer.slice(),
                Err(()) => return Err(LexError::new(LexErrorKind::InvalidEscape, span.start)),
            };

            start.get_or_insert(span.start);
            text.push_str(piece);
        }
    }

    fn lex_tag(
        &mut self,
        mut lexer: logos::Lexer<'source, TagToken>,
    ) -> Result<(Token, Range<usize>), LexError> {
        match lexer.next() {
            None => Err(LexError::new(LexErrorKind::UnterminatedTag, self.source_len)),
            Some(Ok(TagToken::Close)) => {
                let span = lexer.span();
                self.state = State::Text(lexer.morph());
                Ok((Token::TagClose, span))
            }
            Some(Ok(token)) => {
                let span = lexer.span();
                self.state = State::Tag(lexer);
                Ok((token.into(), span))
            }
            Some(Err(kind)) => Err(LexError::new(kind, lexer.span().start)),
        }
    }
}

/// Convenience function to tokenize a whole document. The trailing
/// [`Token::Eof`] is not included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Convenience function to tokenize a whole document, keeping byte spans
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push((token, lexer.span()));
    }
}
