//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{DocumentNode, EchoNode, ForLoopNode, Node, TextNode};

/// Visitor trait for traversing the AST
///
/// Each visit method corresponds to a node type. Default implementations are
/// empty, so you only need to override the methods you care about. Nodes are
/// visited in document order, a container before its children.
///
/// # Example
///
/// ```ignore
/// struct EchoCounter(usize);
///
/// impl Visitor for EchoCounter {
///     fn visit_echo(&mut self, _echo: &EchoNode) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = EchoCounter(0);
/// document.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &DocumentNode) {}
    fn visit_text(&mut self, _text: &TextNode) {}
    fn visit_for_loop(&mut self, _for_loop: &ForLoopNode) {}
    fn visit_echo(&mut self, _echo: &EchoNode) {}
}

/// Helper function to visit all children in a Node slice
pub fn visit_children(visitor: &mut dyn Visitor, children: &[Node]) {
    for child in children {
        child.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Trait for nodes that own an ordered list of children.
///
/// Children are fixed once a node is built; only the parser appends to an
/// open container.
pub trait Container: AstNode {
    fn children(&self) -> &[Node];

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }
}
