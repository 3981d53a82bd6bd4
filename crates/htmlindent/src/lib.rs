//! htmlindent - re-indent HTML and XML-like markup
//!
//! This crate provides functionality to:
//! - Parse markup tolerantly into a transient node tree
//! - Re-indent it with two spaces per nesting level
//! - Toggle a host editor between its rendered view and a raw markup view
//!
//! # Quick Start
//!
//! ```
//! use htmlindent::indent_html;
//! # fn main() -> Result<(), htmlindent::Error> {
//! let pretty = indent_html("<ul><li>one</li><li>two</li></ul>")?;
//! assert_eq!(pretty, "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{debug, error, info, instrument};

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result};

pub mod markup;
pub use markup::{Attribute, Element, Fragment, Node, Parser, ParserConfig, Quote, MAX_DEPTH};

pub mod indent;
pub use indent::{format, indent_fragment, IndentOptions, WhitespacePolicy, INDENT_UNIT};

pub mod editor;
pub use editor::{
    Highlighter, IconRegistry, Mode, RichTextSurface, SourceSurface, SourceToggle, ToggleConfig,
};

/// Re-indent markup with default options
pub fn indent_html(markup: &str) -> Result<String> {
    format(markup, &IndentOptions::default())
}

/// Parse markup into a fragment with default limits
pub fn parse_fragment(markup: &str) -> Result<Fragment> {
    Parser::new(markup).parse()
}

/// Read and re-indent a file
#[instrument(skip(options))]
pub fn format_file(path: &Path, options: &IndentOptions) -> Result<String> {
    debug!("Reading markup file");

    let content = std::fs::read_to_string(path).map_err(|e| {
        error!("Failed to read file: {}", e);
        Error::with_message(
            ErrorKind::Io(e.to_string()),
            format!("failed to read {}: {e}", path.display()),
        )
    })?;

    info!(bytes = content.len(), "File read successfully, formatting");
    format(&content, options)
}
