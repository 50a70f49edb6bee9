//! Output formats for parsed documents
//!
//! - `source` - SmartScript text that re-parses to an equal tree
//! - `tag` - XML-like dump of the tree
//! - `treeviz` - box-drawing tree for terminals
//!
//! JSON and YAML come straight from the serde derives on the AST and are wired
//! up in the [processor](crate::script::processor).

pub mod source;
pub mod tag;
pub mod treeviz;

pub use source::{node_to_source, to_source};
pub use tag::serialize_ast_tag;
pub use treeviz::to_treeviz_str;
