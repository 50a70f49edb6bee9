//! AST definitions for SmartScript documents
//!
//! ## Modules
//!
//! - `elements` - Tag values ([`Element`]) and the tree nodes
//! - `traits` - Uniform node access and the [`Visitor`] hook
//!
//! A parsed document is a [`DocumentNode`] owning an ordered list of [`Node`]s.
//! Only [`ForLoopNode`] nests further. Nodes carry no source positions, so two
//! trees compare equal exactly when their payloads and children do.

pub mod elements;
pub mod traits;

pub use elements::{
    DocumentNode, EchoNode, Element, ForLoopNode, Node, TextNode, DOUBLE_TOLERANCE, OPERATORS,
};
pub use traits::{visit_children, AstNode, Container, Visitor};
