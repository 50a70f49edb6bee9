//! XML-like AST tag serialization
//!
//! Serializes AST nodes to an XML-like format that directly reflects the AST structure.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Text and echo payloads → text content
//! - Loop header → attributes
//! - Children → nested tags, one per line
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <text>Text </text>
//!   <for var="i" start="1" end="10" step="1">
//!     <echo>i</echo>
//!   </for>
//! </document>
//! ```

use crate::script::ast::{Container, DocumentNode, Node};

/// Serialize a document to AST tag format
pub fn serialize_ast_tag(doc: &DocumentNode) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for child in doc.children() {
        serialize_node(child, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

/// Serialize a node (recursive)
fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match node {
        Node::Text(text) => {
            output.push_str(&format!(
                "{}<text>{}</text>\n",
                indent,
                escape_xml(text.text())
            ));
        }
        Node::Echo(echo) => {
            let elements = echo
                .elements()
                .iter()
                .map(|element| escape_xml(&element.as_text()))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!("{}<echo>{}</echo>\n", indent, elements));
        }
        Node::ForLoop(for_loop) => {
            output.push_str(&format!(
                "{}<for var=\"{}\" start=\"{}\" end=\"{}\"",
                indent,
                escape_xml(&for_loop.variable().as_text()),
                escape_xml(&for_loop.start().as_text()),
                escape_xml(&for_loop.end().as_text()),
            ));
            if let Some(step) = for_loop.step() {
                output.push_str(&format!(" step=\"{}\"", escape_xml(&step.as_text())));
            }

            if for_loop.children().is_empty() {
                output.push_str("></for>\n");
            } else {
                output.push_str(">\n");
                for child in for_loop.children() {
                    serialize_node(child, indent_level + 1, output);
                }
                output.push_str(&format!("{}</for>\n", indent));
            }
        }
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ast::{EchoNode, Element, ForLoopNode, TextNode};

    #[test]
    fn test_serialize_text() {
        let doc = DocumentNode::with_children(vec![Node::Text(TextNode::new("Hello"))]);
        assert_eq!(
            serialize_ast_tag(&doc),
            "<document>\n  <text>Hello</text>\n</document>"
        );
    }

    #[test]
    fn test_serialize_nested_loop() {
        let for_loop = ForLoopNode::new(
            Element::variable("i").unwrap(),
            Element::integer(1),
            Element::integer(3),
            None,
        )
        .unwrap()
        .with_children(vec![Node::Echo(EchoNode::new(vec![
            Element::variable("i").unwrap(),
            Element::string("x"),
        ]))]);
        let doc = DocumentNode::with_children(vec![Node::ForLoop(for_loop)]);

        let result = serialize_ast_tag(&doc);
        assert!(result.contains("<for var=\"i\" start=\"1\" end=\"3\">"));
        assert!(result.contains("    <echo>i &quot;x&quot;</echo>"));
        assert!(result.contains("  </for>"));
    }

    #[test]
    fn test_empty_loop() {
        let for_loop = ForLoopNode::new(
            Element::variable("i").unwrap(),
            Element::integer(1),
            Element::integer(3),
            Some(Element::integer(1)),
        )
        .unwrap();
        let doc = DocumentNode::with_children(vec![Node::ForLoop(for_loop)]);
        assert!(serialize_ast_tag(&doc)
            .contains("<for var=\"i\" start=\"1\" end=\"3\" step=\"1\"></for>"));
    }

    #[test]
    fn test_xml_escaping() {
        let doc =
            DocumentNode::with_children(vec![Node::Text(TextNode::new("a < b & \"c\""))]);
        let result = serialize_ast_tag(&doc);
        assert!(result.contains("a &lt; b &amp; &quot;c&quot;"));
    }
}
