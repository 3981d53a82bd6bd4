//! Markup tree: model, tolerant parser and serializer

pub mod cursor;
pub mod elements;
pub mod model;
pub mod parser;
pub mod serializer;

pub use cursor::Cursor;
pub use model::{Attribute, Element, Fragment, Node, Quote};
pub use parser::{Parser, ParserConfig, MAX_DEPTH};
