//! For-loop node definition

use super::super::traits::{visit_children, AstNode, Container, Visitor};
use super::element::Element;
use super::node::Node;
use crate::script::error::ElementError;
use serde::Serialize;
use std::fmt;

/// A `{$FOR var start end [step]$} ... {$END$}` block.
///
/// The variable is always an [`Element::Variable`]; start, end and step are
/// integers, doubles or variables. Only the step is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForLoopNode {
    variable: Element,
    start: Element,
    end: Element,
    step: Option<Element>,
    children: Vec<Node>,
}

impl ForLoopNode {
    pub fn new(
        variable: Element,
        start: Element,
        end: Element,
        step: Option<Element>,
    ) -> Result<Self, ElementError> {
        if !variable.is_variable() {
            return Err(ElementError::InvalidLoopVariable(describe(&variable)));
        }
        for bound in [Some(&start), Some(&end), step.as_ref()].into_iter().flatten() {
            if !bound.is_loop_bound() {
                return Err(ElementError::InvalidLoopBound(describe(bound)));
            }
        }
        Ok(Self {
            variable,
            start,
            end,
            step,
            children: Vec::new(),
        })
    }

    /// Replaces the loop body. Used to build trees outside the parser.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn variable(&self) -> &Element {
        &self.variable
    }

    pub fn start(&self) -> &Element {
        &self.start
    }

    pub fn end(&self) -> &Element {
        &self.end
    }

    pub fn step(&self) -> Option<&Element> {
        self.step.as_ref()
    }

    /// The loop header arguments as written: `var start end [step]`
    pub fn header_text(&self) -> String {
        let mut parts = vec![
            self.variable.as_text(),
            self.start.as_text(),
            self.end.as_text(),
        ];
        if let Some(step) = &self.step {
            parts.push(step.as_text());
        }
        parts.join(" ")
    }
}

fn describe(element: &Element) -> String {
    format!("{} '{}'", element.element_type(), element.as_text())
}

impl AstNode for ForLoopNode {
    fn node_type(&self) -> &'static str {
        "ForLoop"
    }

    fn display_label(&self) -> String {
        self.header_text()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_for_loop(self);
        visit_children(visitor, &self.children);
    }
}

impl Container for ForLoopNode {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl fmt::Display for ForLoopNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForLoop('{}', {} children)",
            self.header_text(),
            self.children.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Element {
        Element::variable(name).unwrap()
    }

    #[test]
    fn test_header_text() {
        let node = ForLoopNode::new(
            var("i"),
            Element::integer(1),
            Element::double(2.5),
            Some(var("step")),
        )
        .unwrap();
        assert_eq!(node.header_text(), "i 1 2.5 step");
        assert_eq!(node.step(), Some(&var("step")));
    }

    #[test]
    fn test_step_is_optional() {
        let node = ForLoopNode::new(var("i"), Element::integer(0), var("n"), None).unwrap();
        assert!(node.step().is_none());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_rejects_non_variable() {
        let err =
            ForLoopNode::new(Element::integer(1), Element::integer(1), Element::integer(2), None)
                .unwrap_err();
        assert_eq!(
            err,
            ElementError::InvalidLoopVariable("integer '1'".to_string())
        );
    }

    #[test]
    fn test_rejects_string_bound() {
        let err = ForLoopNode::new(
            var("i"),
            Element::integer(1),
            Element::integer(2),
            Some(Element::string("3")),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ElementError::InvalidLoopBound("string '\"3\"'".to_string())
        );
    }

    #[test]
    fn test_equality_includes_children() {
        let empty = ForLoopNode::new(var("i"), Element::integer(1), Element::integer(2), None)
            .unwrap();
        let filled = empty
            .clone()
            .with_children(vec![Node::Text(super::super::text::TextNode::new("x"))]);
        assert_ne!(empty, filled);
    }

    #[test]
    fn test_with_children_replaces_body() {
        let text = |s: &str| Node::Text(super::super::text::TextNode::new(s));
        let for_loop = ForLoopNode::new(var("i"), Element::integer(1), Element::integer(2), None)
            .unwrap()
            .with_children(vec![text("a"), text("b")])
            .with_children(vec![text("c")]);
        assert_eq!(for_loop.child_count(), 1);
        assert_eq!(for_loop.child(0), Some(&text("c")));
    }
}
