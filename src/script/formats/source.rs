//! Source serialization
//!
//! Renders a tree back to SmartScript text. The output is not byte-identical
//! to what was parsed (tag whitespace is normalized) but parsing it again
//! yields an equal tree.
//!
//! ```text
//! Text {$FOR i 1 10 1 $}{$= i $}{$END$}
//! ```

use crate::script::ast::{Container, DocumentNode, Node};

/// Serialize a document to SmartScript source
pub fn to_source(doc: &DocumentNode) -> String {
    let mut result = String::new();
    write_children(doc.children(), &mut result);
    result
}

/// Serialize a single node (and its subtree) to SmartScript source
pub fn node_to_source(node: &Node) -> String {
    let mut result = String::new();
    write_node(node, &mut result);
    result
}

fn write_children(children: &[Node], output: &mut String) {
    for child in children {
        write_node(child, output);
    }
}

fn write_node(node: &Node, output: &mut String) {
    match node {
        Node::Text(text) => output.push_str(&text.to_source()),
        Node::Echo(echo) => output.push_str(&echo.to_source()),
        Node::ForLoop(for_loop) => {
            output.push_str("{$FOR ");
            output.push_str(&for_loop.header_text());
            output.push_str(" $}");
            write_children(for_loop.children(), output);
            output.push_str("{$END$}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ast::{EchoNode, Element, ForLoopNode, TextNode};

    #[test]
    fn test_reference_document() {
        let for_loop = ForLoopNode::new(
            Element::variable("i").unwrap(),
            Element::integer(1),
            Element::integer(10),
            Some(Element::integer(1)),
        )
        .unwrap()
        .with_children(vec![Node::Echo(EchoNode::new(vec![
            Element::variable("i").unwrap()
        ]))]);
        let doc = DocumentNode::with_children(vec![
            Node::Text(TextNode::new("Text ")),
            Node::ForLoop(for_loop),
        ]);

        assert_eq!(
            to_source(&doc),
            "Text {$FOR i 1 10 1 $}{$= i $}{$END$}"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = DocumentNode::with_children(vec![Node::Text(TextNode::new(r"\{$"))]);
        assert_eq!(to_source(&doc), r"\\\{$");
    }

    #[test]
    fn test_empty_loop_without_step() {
        let node = Node::ForLoop(
            ForLoopNode::new(
                Element::variable("k").unwrap(),
                Element::double(0.5),
                Element::variable("n").unwrap(),
                None,
            )
            .unwrap(),
        );
        assert_eq!(node_to_source(&node), "{$FOR k 0.5 n $}{$END$}");
    }
}
