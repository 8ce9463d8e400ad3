//! Examples document parser.
//!
//! Splits a component's examples markdown into an ordered sequence of
//! playground code blocks and prose blocks, after substituting the
//! per-component template placeholders.

pub mod codeblock;
pub mod parser;

pub use codeblock::{BlockMode, Language};
pub use parser::{parse_examples, ExampleBlock, ExampleParams};
