//! Element: the typed values that appear inside tags

use crate::script::error::ElementError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Two doubles closer than this are considered equal. Absorbs the drift of
/// rendering a double to text and reading it back.
pub const DOUBLE_TOLERANCE: f64 = 1e-6;

/// Symbols accepted as operators
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '^'];

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// A constant, reference or symbol inside a tag.
///
/// Equality is structural, except that doubles compare within
/// [`DOUBLE_TOLERANCE`]. An integer never equals a double.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Element {
    ConstantInteger(i32),
    ConstantDouble(f64),
    String(String),
    Variable(String),
    Function(String),
    Operator(char),
}

impl Element {
    pub fn integer(value: i32) -> Self {
        Element::ConstantInteger(value)
    }

    /// Only finite values have a source form. The lexer never produces
    /// anything else; an infinite or NaN payload built here renders as
    /// `inf`/`NaN`, which does not read back as a double.
    pub fn double(value: f64) -> Self {
        Element::ConstantDouble(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Element::String(value.into())
    }

    pub fn variable(name: impl Into<String>) -> Result<Self, ElementError> {
        validate_identifier(name.into()).map(Element::Variable)
    }

    /// Builds a function reference from its bare name (without the `@`).
    pub fn function(name: impl Into<String>) -> Result<Self, ElementError> {
        validate_identifier(name.into()).map(Element::Function)
    }

    pub fn operator(symbol: char) -> Result<Self, ElementError> {
        if OPERATORS.contains(&symbol) {
            Ok(Element::Operator(symbol))
        } else {
            Err(ElementError::InvalidOperator(symbol))
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Element::ConstantInteger(_) => "integer",
            Element::ConstantDouble(_) => "double",
            Element::String(_) => "string",
            Element::Variable(_) => "variable",
            Element::Function(_) => "function",
            Element::Operator(_) => "operator",
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Element::Variable(_))
    }

    /// Integers, doubles and variables may bound a loop.
    pub fn is_loop_bound(&self) -> bool {
        matches!(
            self,
            Element::ConstantInteger(_) | Element::ConstantDouble(_) | Element::Variable(_)
        )
    }

    /// Renders the element the way it has to be written inside a tag.
    pub fn as_text(&self) -> String {
        match self {
            Element::ConstantInteger(value) => value.to_string(),
            Element::ConstantDouble(value) => format_double(*value),
            Element::String(value) => quote(value),
            Element::Variable(name) => name.clone(),
            Element::Function(name) => format!("@{}", name),
            Element::Operator(symbol) => symbol.to_string(),
        }
    }
}

fn validate_identifier(name: String) -> Result<String, ElementError> {
    if IDENTIFIER.is_match(&name) {
        Ok(name)
    } else {
        Err(ElementError::InvalidIdentifier(name))
    }
}

// f64's Display never uses exponent notation but drops a zero fraction, and
// the grammar wants digits on both sides of the point. Non-finite values are
// left as Display prints them; see `Element::double`.
fn format_double(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '{' => out.push_str("\\{"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::ConstantInteger(a), Element::ConstantInteger(b)) => a == b,
            (Element::ConstantDouble(a), Element::ConstantDouble(b)) => {
                a == b || (a - b).abs() < DOUBLE_TOLERANCE
            }
            (Element::String(a), Element::String(b))
            | (Element::Variable(a), Element::Variable(b))
            | (Element::Function(a), Element::Function(b)) => a == b,
            (Element::Operator(a), Element::Operator(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}
