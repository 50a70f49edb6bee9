//! Stack-driven SmartScript parser
//!
//! The parser pulls tokens from the [`Lexer`] and keeps an explicit stack of
//! open containers instead of recursing. The document is the permanent bottom
//! of that stack; every `FOR` pushes a loop and every `END` pops one and
//! appends it to the container below. Text and echo nodes are appended to
//! whatever is on top. Nesting depth is therefore limited only by memory.

use crate::script::ast::{DocumentNode, EchoNode, Element, ForLoopNode, Node, TextNode};
use crate::script::error::{ParseError, ParseErrorKind};
use crate::script::lexer::{Lexer, Token};
use tracing::debug;

pub struct SmartScriptParser<'source> {
    lexer: Lexer<'source>,
    document: DocumentNode,
    open_loops: Vec<ForLoopNode>,
}

impl<'source> SmartScriptParser<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source),
            document: DocumentNode::new(),
            open_loops: Vec::new(),
        }
    }

    /// Runs the parser to completion. The first error aborts the parse.
    pub fn parse(mut self) -> Result<DocumentNode, ParseError> {
        loop {
            match self.lexer.next_token()? {
                Token::Text(text) => self.append(Node::Text(TextNode::new(text))),
                Token::TagOpen => self.parse_tag()?,
                Token::Eof => return self.finish(),
                other => return Err(unexpected(&other, "outside of a tag")),
            }
        }
    }

    fn depth(&self) -> usize {
        self.open_loops.len()
    }

    fn append(&mut self, node: Node) {
        match self.open_loops.last_mut() {
            Some(open) => open.push_child(node),
            None => self.document.push_child(node),
        }
    }

    fn parse_tag(&mut self) -> Result<(), ParseError> {
        match self.lexer.next_token()? {
            Token::Echo => {
                let echo = self.parse_echo()?;
                debug!(depth = self.depth(), elements = echo.elements().len(), "echo tag");
                self.append(Node::Echo(echo));
                Ok(())
            }
            Token::Name(name) if name.eq_ignore_ascii_case("FOR") => {
                let for_loop = self.parse_for_loop()?;
                debug!(depth = self.depth(), header = %for_loop.header_text(), "opening FOR");
                self.open_loops.push(for_loop);
                Ok(())
            }
            Token::Name(name) if name.eq_ignore_ascii_case("END") => self.parse_end(),
            Token::Name(name) => Err(ParseError::unsupported_tag(&name)),
            Token::TagClose => Err(ParseError::new(
                ParseErrorKind::UnsupportedTag,
                "empty tag",
            )),
            other => Err(ParseError::unsupported_tag(&other.to_string())),
        }
    }

    fn parse_echo(&mut self) -> Result<EchoNode, ParseError> {
        let elements = self.parse_arguments("=")?;
        if elements.is_empty() {
            return Err(ParseError::invalid_arguments(
                "echo tag needs at least one element",
            ));
        }
        Ok(EchoNode::new(elements))
    }

    fn parse_for_loop(&mut self) -> Result<ForLoopNode, ParseError> {
        let arguments = self.parse_arguments("FOR")?;
        let count = arguments.len();
        let mut arguments = arguments.into_iter();
        match (
            arguments.next(),
            arguments.next(),
            arguments.next(),
            arguments.next(),
            arguments.next(),
        ) {
            (Some(variable), Some(start), Some(end), step, None) => {
                Ok(ForLoopNode::new(variable, start, end, step)?)
            }
            _ => Err(ParseError::invalid_arguments(format!(
                "FOR takes 3 or 4 arguments, found {}",
                count
            ))),
        }
    }

    fn parse_end(&mut self) -> Result<(), ParseError> {
        let extra = self.parse_arguments("END")?;
        if !extra.is_empty() {
            return Err(ParseError::invalid_arguments(format!(
                "END takes no arguments, found {}",
                extra.len()
            )));
        }
        let closed = self.open_loops.pop().ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnmatchedEnd, "END without a matching FOR")
        })?;
        debug!(depth = self.depth(), "closing FOR");
        self.append(Node::ForLoop(closed));
        Ok(())
    }

    /// Collects elements up to and including the closing `$}`.
    fn parse_arguments(&mut self, tag: &str) -> Result<Vec<Element>, ParseError> {
        let mut elements = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            let element = match token {
                Token::TagClose => return Ok(elements),
                Token::Name(name) => Element::Variable(name),
                Token::Function(name) => Element::Function(name),
                Token::Integer(value) => Element::ConstantInteger(value),
                Token::Double(value) => Element::ConstantDouble(value),
                Token::Str(value) => Element::String(value),
                Token::Operator(symbol) => Element::Operator(symbol),
                other => return Err(unexpected(&other, &format!("in {} tag", tag))),
            };
            elements.push(element);
        }
    }

    fn finish(self) -> Result<DocumentNode, ParseError> {
        if !self.open_loops.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedFor,
                format!(
                    "{} FOR tag(s) not closed before end of input",
                    self.open_loops.len()
                ),
            ));
        }
        debug!(nodes = self.document.node_count(), "parsed document");
        Ok(self.document)
    }
}

fn unexpected(token: &Token, context: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken,
        format!("unexpected {} {}", token, context),
    )
}

/// Parses a complete document.
pub fn parse(source: &str) -> Result<DocumentNode, ParseError> {
    SmartScriptParser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ast::Container;
    use crate::script::lexer::LexErrorKind;

    fn var(name: &str) -> Element {
        Element::variable(name).unwrap()
    }

    #[test]
    fn test_reference_document() {
        let doc = parse("Text {$FOR i 1 10 1$}{$= i $}{$END$}").unwrap();

        let for_loop = ForLoopNode::new(
            var("i"),
            Element::integer(1),
            Element::integer(10),
            Some(Element::integer(1)),
        )
        .unwrap()
        .with_children(vec![Node::Echo(EchoNode::new(vec![var("i")]))]);
        let expected = DocumentNode::with_children(vec![
            Node::Text(TextNode::new("Text ")),
            Node::ForLoop(for_loop),
        ]);

        assert_eq!(doc, expected);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse("").unwrap(), DocumentNode::new());
    }

    #[test]
    fn test_for_immediately_closed() {
        let doc = parse("{$FOR i 1 2$}{$END$}").unwrap();
        let for_loop = doc.child(0).and_then(Node::as_for_loop).unwrap();
        assert_eq!(for_loop.child_count(), 0);
        assert!(for_loop.step().is_none());
    }

    #[test]
    fn test_nested_loops() {
        let doc = parse("{$FOR i 1 2$}a{$FOR j i 3$}b{$END$}c{$END$}").unwrap();
        let outer = doc.child(0).and_then(Node::as_for_loop).unwrap();
        assert_eq!(outer.child_count(), 3);
        let inner = outer.child(1).and_then(Node::as_for_loop).unwrap();
        assert_eq!(inner.start(), &var("i"));
        assert_eq!(inner.child_count(), 1);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let doc = parse("{$for i 1 2$}{$End$}").unwrap();
        assert!(doc.child(0).unwrap().is_for_loop());
    }

    #[test]
    fn test_unsupported_tag() {
        let err = parse("{$ CD $}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnsupportedTag);
        assert_eq!(err.message, "unsupported tag 'CD'");
    }

    #[test]
    fn test_unmatched_end() {
        let err = parse("a{$END$}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedEnd);
    }

    #[test]
    fn test_unclosed_for() {
        let err = parse("{$FOR i 1 2$}body").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnclosedFor);
    }

    #[test]
    fn test_for_argument_count() {
        assert_eq!(
            parse("{$FOR i 1$}{$END$}").unwrap_err().kind,
            ParseErrorKind::InvalidArguments
        );
        assert_eq!(
            parse("{$FOR i 1 2 3 4$}{$END$}").unwrap_err().kind,
            ParseErrorKind::InvalidArguments
        );
        assert_eq!(
            parse("{$FOR$}{$END$}").unwrap_err().kind,
            ParseErrorKind::InvalidArguments
        );
    }

    #[test]
    fn test_for_argument_types() {
        let err = parse("{$FOR 3 1 2$}{$END$}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArguments);
        let err = parse("{$FOR i \"1\" 2$}{$END$}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArguments);
        let err = parse("{$FOR i 1 @f$}{$END$}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArguments);
    }

    #[test]
    fn test_empty_echo() {
        assert_eq!(
            parse("{$=$}").unwrap_err().kind,
            ParseErrorKind::InvalidArguments
        );
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(
            parse("{$ $}").unwrap_err().kind,
            ParseErrorKind::UnsupportedTag
        );
    }

    #[test]
    fn test_end_with_arguments() {
        let err = parse("{$FOR i 1 2$}{$END i$}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArguments);
    }

    #[test]
    fn test_second_echo_marker_is_unexpected() {
        let err = parse("{$= a = b $}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_lexer_errors_are_wrapped() {
        let err = parse(r"bad \q escape").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Lexical(LexErrorKind::InvalidEscape)
        );
        let err = parse("{$= \"open").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Lexical(LexErrorKind::UnterminatedString)
        );
        let err = parse("{$= 1.").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::Lexical(LexErrorKind::MalformedNumber)
        );
    }
}
