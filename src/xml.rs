//! In-crate XML reading: byte cursor, reader and arena tree

pub mod cursor;
pub mod parser;
pub mod tree;

pub use parser::Parser;
pub use tree::{local_name, Descendants, Document, Node, NodeId};
