//! Token definitions for SmartScript documents
//!
//! A document alternates between literal text and `{$ ... $}` tags, and the two
//! regions share almost no vocabulary. Each mode therefore gets its own logos
//! enum ([`TextToken`], [`TagToken`]); the [`Lexer`](super::Lexer) morphs between
//! them. What the parser consumes is the unified [`Token`].
use super::error::LexErrorKind;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Raw tokens of text mode.
///
/// Anything that matches none of these is a backslash followed by a character
/// other than `\` or `{`, which is an invalid escape.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum TextToken {
    #[token("{$")]
    TagOpen,

    #[token("\\\\")]
    EscapedBackslash,

    #[token("\\{")]
    EscapedBrace,

    // A brace that does not open a tag is plain text
    #[token("{")]
    Brace,

    #[regex(r"[^\\{]+")]
    Literal,
}

/// Numeric literal as classified by the tag lexer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    Integer(i32),
    Double(f64),
}

/// Raw tokens of tag mode.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TagToken {
    #[token("$}")]
    Close,

    #[token("=")]
    Echo,

    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Name(String),

    #[regex(r"@[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_owned())]
    Function(String),

    // Deliberately loose so that `5.`, `.5` and `1.2.3` reach the callback and
    // are reported as malformed numbers instead of stray characters.
    #[regex(r"-?[0-9][0-9.]*", number)]
    #[regex(r"-?\.[0-9.]*", number)]
    Number(Number),

    #[token("\"", string)]
    Str(String),

    #[regex(r"[+\-*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn number(lex: &mut logos::Lexer<TagToken>) -> Result<Number, LexErrorKind> {
    let slice = lex.slice();
    let unsigned = slice.strip_prefix('-').unwrap_or(slice);
    match unsigned.split_once('.') {
        None => slice
            .parse::<i32>()
            .map(Number::Integer)
            .map_err(|_| LexErrorKind::MalformedNumber),
        // Lexemes past f64::MAX parse to infinity, which has no source form
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => slice
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Number::Double)
            .ok_or(LexErrorKind::MalformedNumber),
        Some(_) => Err(LexErrorKind::MalformedNumber),
    }
}

/// Scans a quoted string body after the opening `"`, unescaping as it goes.
fn string(lex: &mut logos::Lexer<TagToken>) -> Result<String, LexErrorKind> {
    let remainder = lex.remainder();
    let mut value = String::new();
    let mut chars = remainder.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(index + 1);
                return Ok(value);
            }
            '\\' => {
                let unescaped = match chars.next() {
                    Some((_, '\\')) => '\\',
                    Some((_, '"')) => '"',
                    Some((_, '{')) => '{',
                    Some((_, 'n')) => '\n',
                    Some((_, 't')) => '\t',
                    Some((_, 'r')) => '\r',
                    Some(_) => {
                        lex.bump(index);
                        return Err(LexErrorKind::InvalidEscape);
                    }
                    None => break,
                };
                value.push(unescaped);
            }
            '\n' => {
                lex.bump(index);
                return Err(LexErrorKind::NewlineInString);
            }
            '{' => {
                lex.bump(index);
                return Err(LexErrorKind::BraceInString);
            }
            other => value.push(other),
        }
    }

    lex.bump(remainder.len());
    Err(LexErrorKind::UnterminatedString)
}

/// A token as seen by the parser.
///
/// `Name` covers both tag keywords (`FOR`, `END`) and variable references; which
/// one it is depends on its position inside the tag.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Token {
    /// A run of literal text with escapes already resolved
    Text(String),
    TagOpen,
    TagClose,
    Echo,
    Name(String),
    Function(String),
    Integer(i32),
    Double(f64),
    Str(String),
    Operator(char),
    Eof,
}

impl Token {
    /// Check if this token can only appear inside a tag
    pub fn is_tag_content(&self) -> bool {
        !matches!(self, Token::Text(_) | Token::TagOpen | Token::Eof)
    }

    /// Check if this token is a literal that can become an element
    pub fn is_element(&self) -> bool {
        matches!(
            self,
            Token::Name(_)
                | Token::Function(_)
                | Token::Integer(_)
                | Token::Double(_)
                | Token::Str(_)
                | Token::Operator(_)
        )
    }
}

impl From<TagToken> for Token {
    fn from(token: TagToken) -> Self {
        match token {
            TagToken::Close => Token::TagClose,
            TagToken::Echo => Token::Echo,
            TagToken::Name(name) => Token::Name(name),
            TagToken::Function(name) => Token::Function(name),
            TagToken::Number(Number::Integer(value)) => Token::Integer(value),
            TagToken::Number(Number::Double(value)) => Token::Double(value),
            TagToken::Str(value) => Token::Str(value),
            TagToken::Operator(symbol) => Token::Operator(symbol),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => write!(f, "<text:{}>", text),
            Token::TagOpen => write!(f, "<tag-open>"),
            Token::TagClose => write!(f, "<tag-close>"),
            Token::Echo => write!(f, "<echo>"),
            Token::Name(name) => write!(f, "<name:{}>", name),
            Token::Function(name) => write!(f, "<function:{}>", name),
            Token::Integer(value) => write!(f, "<integer:{}>", value),
            Token::Double(value) => write!(f, "<double:{}>", value),
            Token::Str(value) => write!(f, "<string:{}>", value),
            Token::Operator(symbol) => write!(f, "<operator:{}>", symbol),
            Token::Eof => write!(f, "<eof>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_tokens(source: &str) -> Vec<Result<TagToken, LexErrorKind>> {
        TagToken::lexer(source).collect()
    }

    #[test]
    fn test_text_mode_tokens() {
        let mut lexer = TextToken::lexer(r"a\\b\{c{d{$");
        assert_eq!(lexer.next(), Some(Ok(TextToken::Literal)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::EscapedBackslash)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::Literal)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::EscapedBrace)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::Literal)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::Brace)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::Literal)));
        assert_eq!(lexer.next(), Some(Ok(TextToken::TagOpen)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_text_mode_invalid_escape() {
        let mut lexer = TextToken::lexer(r"x\n");
        assert_eq!(lexer.next(), Some(Ok(TextToken::Literal)));
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn test_for_tag_tokens() {
        assert_eq!(
            tag_tokens("FOR i -1 10.5 step $}"),
            vec![
                Ok(TagToken::Name("FOR".to_string())),
                Ok(TagToken::Name("i".to_string())),
                Ok(TagToken::Number(Number::Integer(-1))),
                Ok(TagToken::Number(Number::Double(10.5))),
                Ok(TagToken::Name("step".to_string())),
                Ok(TagToken::Close),
            ]
        );
    }

    #[test]
    fn test_echo_tag_tokens() {
        assert_eq!(
            tag_tokens("= @sin x - * \"s\""),
            vec![
                Ok(TagToken::Echo),
                Ok(TagToken::Function("sin".to_string())),
                Ok(TagToken::Name("x".to_string())),
                Ok(TagToken::Operator('-')),
                Ok(TagToken::Operator('*')),
                Ok(TagToken::Str("s".to_string())),
            ]
        );
    }

    #[test]
    fn test_malformed_numbers() {
        for source in ["5.", ".5", "1.2.3", "-.5", "99999999999"] {
            assert_eq!(
                tag_tokens(source),
                vec![Err(LexErrorKind::MalformedNumber)],
                "source: {}",
                source
            );
        }
    }

    #[test]
    fn test_double_past_f64_range_is_malformed() {
        let huge = format!("1{}.0", "0".repeat(400));
        assert_eq!(
            tag_tokens(&huge),
            vec![Err(LexErrorKind::MalformedNumber)]
        );

        let largest = format!("{}.0", f64::MAX);
        assert_eq!(
            tag_tokens(&largest),
            vec![Ok(TagToken::Number(Number::Double(f64::MAX)))]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            tag_tokens(r#""a\\b\"c\nd\te\rf\{g""#),
            vec![Ok(TagToken::Str("a\\b\"c\nd\te\rf{g".to_string()))]
        );
    }

    #[test]
    fn test_string_errors() {
        assert_eq!(
            tag_tokens(r#""a\qb""#)[0],
            Err(LexErrorKind::InvalidEscape)
        );
        assert_eq!(tag_tokens("\"a\nb\"")[0], Err(LexErrorKind::NewlineInString));
        assert_eq!(tag_tokens("\"a{b\"")[0], Err(LexErrorKind::BraceInString));
        assert_eq!(tag_tokens("\"abc")[0], Err(LexErrorKind::UnterminatedString));
    }

    #[test]
    fn test_stray_characters() {
        assert_eq!(tag_tokens("#")[0], Err(LexErrorKind::UnexpectedCharacter));
        assert_eq!(tag_tokens("@")[0], Err(LexErrorKind::UnexpectedCharacter));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Text("hi".to_string()).to_string(), "<text:hi>");
        assert_eq!(Token::TagOpen.to_string(), "<tag-open>");
        assert_eq!(Token::Integer(3).to_string(), "<integer:3>");
        assert_eq!(Token::Operator('^').to_string(), "<operator:^>");
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Name("i".to_string()).is_element());
        assert!(!Token::Echo.is_element());
        assert!(Token::TagClose.is_tag_content());
        assert!(!Token::Text("x".to_string()).is_tag_content());
    }
}
