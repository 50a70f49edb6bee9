//! Text node definition

use super::super::traits::{AstNode, Visitor};
use serde::Serialize;
use std::fmt;

/// A run of literal text between tags, with escapes already resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-escapes the text so that text mode reads it back unchanged.
    pub fn to_source(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for c in self.text.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '{' => out.push_str("\\{"),
                other => out.push(other),
            }
        }
        out
    }
}

impl AstNode for TextNode {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        self.text.replace('\n', "\\n")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({} chars)", self.text.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_source_escapes() {
        let node = TextNode::new(r"a\b{$c}");
        assert_eq!(node.to_source(), r"a\\b\{$c}");
    }

    #[test]
    fn test_display_label_flattens_newlines() {
        let node = TextNode::new("one\ntwo");
        assert_eq!(node.display_label(), "one\\ntwo");
    }
}
