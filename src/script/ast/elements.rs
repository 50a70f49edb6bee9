//! AST element definitions
//!
//! `element` holds the value model used inside tags; the remaining modules
//! are the document tree nodes.

pub mod document;
pub mod echo;
pub mod element;
pub mod for_loop;
pub mod node;
pub mod text;

pub use document::DocumentNode;
pub use echo::EchoNode;
pub use element::{Element, DOUBLE_TOLERANCE, OPERATORS};
pub use for_loop::ForLoopNode;
pub use node::Node;
pub use text::TextNode;
