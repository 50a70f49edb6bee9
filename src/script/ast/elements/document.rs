//! Document element definition

use super::super::traits::{visit_children, AstNode, Container, Visitor};
use super::echo::EchoNode;
use super::for_loop::ForLoopNode;
use super::node::Node;
use super::text::TextNode;
use serde::Serialize;
use std::fmt;

/// A document represents the root of a SmartScript AST
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DocumentNode {
    children: Vec<Node>,
}

impl DocumentNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Regenerates source text that parses back to an equal tree.
    pub fn to_source(&self) -> String {
        crate::script::formats::source::to_source(self)
    }

    pub fn iter_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    pub fn iter_texts(&self) -> impl Iterator<Item = &TextNode> {
        self.children.iter().filter_map(|node| node.as_text())
    }

    pub fn iter_for_loops(&self) -> impl Iterator<Item = &ForLoopNode> {
        self.children.iter().filter_map(|node| node.as_for_loop())
    }

    pub fn iter_echoes(&self) -> impl Iterator<Item = &EchoNode> {
        self.children.iter().filter_map(|node| node.as_echo())
    }

    /// Number of nodes in the whole tree, root excluded
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(&self.children)
    }
}

impl AstNode for DocumentNode {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} items", self.children.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        visit_children(visitor, &self.children);
    }
}

impl Container for DocumentNode {
    fn children(&self) -> &[Node] {
        &self.children
    }
}

impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} items)", self.children.len())
    }
}
