//! Echo node definition

use super::super::traits::{AstNode, Visitor};
use super::element::Element;
use serde::Serialize;
use std::fmt;

/// An `{$= ... $}` tag: a sequence of elements to emit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoNode {
    elements: Vec<Element>,
}

impl EchoNode {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn to_source(&self) -> String {
        format!("{{$= {} $}}", self.elements_text())
    }

    fn elements_text(&self) -> String {
        self.elements
            .iter()
            .map(Element::as_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AstNode for EchoNode {
    fn node_type(&self) -> &'static str {
        "Echo"
    }

    fn display_label(&self) -> String {
        self.elements_text()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_echo(self);
    }
}

impl fmt::Display for EchoNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Echo({} elements)", self.elements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_integer_to_source() {
        let node = EchoNode::new(vec![Element::integer(5)]);
        assert_eq!(node.to_source(), "{$= 5 $}");
    }

    #[test]
    fn test_mixed_elements_to_source() {
        let node = EchoNode::new(vec![
            Element::variable("x").unwrap(),
            Element::string("hi"),
            Element::operator('*').unwrap(),
            Element::function("sin").unwrap(),
            Element::double(0.5),
        ]);
        assert_eq!(node.to_source(), r#"{$= x "hi" * @sin 0.5 $}"#);
    }
}
