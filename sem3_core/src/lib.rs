//! `sem3_core` extracts semantic annotation snippets from text and source
//! files. A snippet is a fenced code block whose first content line carries a
//! sentinel marker; blocks may live inside a file's own comments or
//! docstrings, indented or comment-prefixed. Extracted records can be
//! converted into an RDF graph and serialized in several wire formats.

pub use error::*;
pub use extractor::*;
pub use markup::*;
pub use rdf::*;
pub use scanner::*;
pub use serialize::*;

mod error;
mod extractor;
mod markup;
mod rdf;
mod scanner;
mod serialize;
