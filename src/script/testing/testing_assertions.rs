//! Fluent assertion API for AST nodes

use crate::script::ast::{
    AstNode, Container, DocumentNode, EchoNode, Element, ForLoopNode, Node, TextNode,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &DocumentNode) -> ChildrenAssertion<'_> {
    ChildrenAssertion {
        children: doc.children(),
        context: "document".to_string(),
    }
}

// ============================================================================
// Children Assertions (document or loop body)
// ============================================================================

pub struct ChildrenAssertion<'a> {
    children: &'a [Node],
    context: String,
}

impl<'a> ChildrenAssertion<'a> {
    /// Assert the number of direct children
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.children.len()
        );
        assertion(NodeAssertion {
            node: &self.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} '{}'",
            self.context,
            expected,
            self.node.node_type(),
            self.node.display_label()
        )
    }

    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.node {
            Node::Text(text) => TextAssertion {
                text,
                context: self.context,
            },
            _ => self.wrong_type("Text"),
        }
    }

    pub fn assert_echo(self) -> EchoAssertion<'a> {
        match self.node {
            Node::Echo(echo) => EchoAssertion {
                echo,
                context: self.context,
            },
            _ => self.wrong_type("Echo"),
        }
    }

    pub fn assert_for_loop(self) -> ForLoopAssertion<'a> {
        match self.node {
            Node::ForLoop(for_loop) => ForLoopAssertion {
                for_loop,
                context: self.context,
            },
            _ => self.wrong_type("ForLoop"),
        }
    }
}

// ============================================================================
// Text Assertions
// ============================================================================

pub struct TextAssertion<'a> {
    text: &'a TextNode,
    context: String,
}

impl TextAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.text.text(),
            expected,
            "{}: text mismatch",
            self.context
        );
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        assert!(
            self.text.text().contains(needle),
            "{}: Expected text to contain '{}', found '{}'",
            self.context,
            needle,
            self.text.text()
        );
        self
    }
}

// ============================================================================
// Echo Assertions
// ============================================================================

pub struct EchoAssertion<'a> {
    echo: &'a EchoNode,
    context: String,
}

impl EchoAssertion<'_> {
    pub fn elements(self, expected: &[Element]) -> Self {
        assert_eq!(
            self.echo.elements(),
            expected,
            "{}: elements mismatch",
            self.context
        );
        self
    }

    pub fn element_count(self, expected: usize) -> Self {
        assert_eq!(
            self.echo.elements().len(),
            expected,
            "{}: element count mismatch",
            self.context
        );
        self
    }

    /// Compare against the elements' source rendering, e.g. `i "x" @sin`
    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(
            self.echo.display_label(),
            expected,
            "{}: rendered elements mismatch",
            self.context
        );
        self
    }
}

// ============================================================================
// ForLoop Assertions
// ============================================================================

pub struct ForLoopAssertion<'a> {
    for_loop: &'a ForLoopNode,
    context: String,
}

impl<'a> ForLoopAssertion<'a> {
    pub fn variable(self, expected: &str) -> Self {
        assert_eq!(
            self.for_loop.variable().as_text(),
            expected,
            "{}: loop variable mismatch",
            self.context
        );
        self
    }

    /// Compare the whole header, e.g. `i 1 10 1`
    pub fn header(self, expected: &str) -> Self {
        assert_eq!(
            self.for_loop.header_text(),
            expected,
            "{}: loop header mismatch",
            self.context
        );
        self
    }

    pub fn bounds(self, start: Element, end: Element, step: Option<Element>) -> Self {
        assert_eq!(self.for_loop.start(), &start, "{}: start mismatch", self.context);
        assert_eq!(self.for_loop.end(), &end, "{}: end mismatch", self.context);
        assert_eq!(
            self.for_loop.step(),
            step.as_ref(),
            "{}: step mismatch",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        self.body().child_count(expected);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        self.body().child(index, assertion);
        self
    }

    fn body(&self) -> ChildrenAssertion<'a> {
        ChildrenAssertion {
            children: self.for_loop.children(),
            context: self.context.clone(),
        }
    }
}
