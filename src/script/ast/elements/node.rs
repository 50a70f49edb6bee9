//! Node enum definition

use super::super::traits::{AstNode, Visitor};
use super::echo::EchoNode;
use super::for_loop::ForLoopNode;
use super::text::TextNode;
use serde::Serialize;
use std::fmt;

/// Any node that can be the child of a container.
///
/// The document root is not a `Node`: it can never be nested, so it lives in
/// its own type, [`DocumentNode`](super::DocumentNode).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Text(TextNode),
    ForLoop(ForLoopNode),
    Echo(EchoNode),
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Text(t) => t.node_type(),
            Node::ForLoop(l) => l.node_type(),
            Node::Echo(e) => e.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Text(t) => t.display_label(),
            Node::ForLoop(l) => l.display_label(),
            Node::Echo(e) => e.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Text(t) => t.accept(visitor),
            Node::ForLoop(l) => l.accept(visitor),
            Node::Echo(e) => e.accept(visitor),
        }
    }
}

impl Node {
    pub fn children(&self) -> Option<&[Node]> {
        use super::super::traits::Container;
        match self {
            Node::ForLoop(l) => Some(l.children()),
            _ => None,
        }
    }

    pub fn to_source(&self) -> String {
        crate::script::formats::source::node_to_source(self)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
    pub fn is_for_loop(&self) -> bool {
        matches!(self, Node::ForLoop(_))
    }
    pub fn is_echo(&self) -> bool {
        matches!(self, Node::Echo(_))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        if let Node::Text(t) = self {
            Some(t)
        } else {
            None
        }
    }
    pub fn as_for_loop(&self) -> Option<&ForLoopNode> {
        if let Node::ForLoop(l) = self {
            Some(l)
        } else {
            None
        }
    }
    pub fn as_echo(&self) -> Option<&EchoNode> {
        if let Node::Echo(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

impl From<ForLoopNode> for Node {
    fn from(node: ForLoopNode) -> Self {
        Node::ForLoop(node)
    }
}

impl From<EchoNode> for Node {
    fn from(node: EchoNode) -> Self {
        Node::Echo(node)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => fmt::Display::fmt(t, f),
            Node::ForLoop(l) => fmt::Display::fmt(l, f),
            Node::Echo(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::element::Element;
    use super::*;

    #[test]
    fn test_accessors() {
        let node: Node = TextNode::new("x").into();
        assert!(node.is_text());
        assert!(!node.is_echo());
        assert_eq!(node.as_text().map(TextNode::text), Some("x"));
        assert!(node.as_for_loop().is_none());
        assert!(node.children().is_none());
    }

    #[test]
    fn test_node_type_dispatch() {
        let echo: Node = EchoNode::new(vec![Element::integer(1)]).into();
        assert_eq!(echo.node_type(), "Echo");
        assert_eq!(echo.display_label(), "1");
        assert_eq!(echo.to_string(), "Echo(1 elements)");
    }

    #[test]
    fn test_json_is_tagged_by_type() {
        let node: Node = TextNode::new("hi").into();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"type":"text","text":"hi"}"#);
    }
}
