//! Testing utilities for AST assertions
//!
//! Parser tests use two tools together:
//!
//! 1. [`Samples`] for verified SmartScript content from `docs/samples/`
//! 2. [`assert_ast`] for checking the shape and content of the parsed tree
//!
//! ```rust,ignore
//! use smartscript::script::testing::{assert_ast, Samples};
//!
//! let doc = Samples::get_document("020-for-loop-simple.smscr")?;
//! assert_ast(&doc).child(1, |child| {
//!     child
//!         .assert_for_loop()
//!         .header("i 1 10 1")
//!         .child(0, |body| {
//!             body.assert_echo().renders("i");
//!         });
//! });
//! ```
//!
//! The fluent calls mirror the tree, so a failing assertion names the exact
//! path (`document.children[1].children[0]`) that diverged.

pub mod samples;
pub mod testing_assertions;

pub use samples::{SampleFormat, Samples, AVAILABLE_SAMPLES};
pub use testing_assertions::{
    assert_ast, ChildrenAssertion, EchoAssertion, ForLoopAssertion, NodeAssertion, TextAssertion,
};
