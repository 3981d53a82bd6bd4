//! Tolerant markup parser
//!
//! Builds a [`Fragment`] the way a browser would for `innerHTML`: nothing is
//! rejected. Unknown constructs fall back to text, stray end tags are
//! dropped, and unclosed elements are closed at end of input.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{Error, ErrorKind, Result};
use crate::markup::cursor::{is_whitespace, Cursor};
use crate::markup::elements;
use crate::markup::model::{Attribute, Element, Fragment, Node, Quote};

/// Deepest element nesting the tree builder ever creates
///
/// Keeps every recursive walk over a parsed tree within a small, fixed
/// stack budget.
pub const MAX_DEPTH: usize = 512;

/// Configuration for parser limits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Elements nested deeper than this are attached at this depth instead
    /// (0 or anything above [`MAX_DEPTH`] means [`MAX_DEPTH`])
    pub max_depth: usize,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_size: 0,
        }
    }
}

impl ParserConfig {
    /// Create a new config with specific limits
    pub const fn new(max_depth: usize, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }

    /// Nesting depth actually enforced
    pub const fn depth_limit(&self) -> usize {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            MAX_DEPTH
        } else {
            self.max_depth
        }
    }
}

/// Start tag as read from the input
struct StartTag {
    name: String,
    attributes: IndexMap<String, Attribute>,
    self_closing: bool,
}

/// Markup parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    /// Currently open elements, innermost last
    open: Vec<Element>,
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default limits
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Create a new parser with custom limits
    pub const fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            open: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Parse the whole input into a fragment
    pub fn parse(mut self) -> Result<Fragment> {
        let size = self.cursor.remaining().len();
        if self.config.max_size > 0 && size > self.config.max_size {
            // report where the input crosses the limit
            self.cursor.advance_by(self.config.max_size);
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.cursor.position(),
            ));
        }

        while let Some(b) = self.cursor.current() {
            if b != b'<' {
                self.parse_text();
                continue;
            }
            match self.cursor.peek(1) {
                Some(b'!') => self.parse_markup_declaration(),
                Some(b'?') => self.parse_processing_instruction(),
                Some(b'/') if self.cursor.peek(2).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    self.parse_end_tag();
                }
                Some(c) if c.is_ascii_alphabetic() => self.parse_start_tag(),
                _ => {
                    // a lone '<' is character data
                    self.cursor.advance();
                    self.push_text("<");
                }
            }
        }

        while self.close_current() {}
        Ok(Fragment::new(self.nodes))
    }

    fn parse_text(&mut self) {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        self.push_text(text);
    }

    fn parse_start_tag(&mut self) {
        let checkpoint = self.cursor.clone();
        let start = self.cursor.pos();

        let Some(tag) = self.read_start_tag() else {
            // unterminated tag, keep the rest of the input as text
            self.cursor = checkpoint;
            self.cursor.advance_to_end();
            let text = self.cursor.slice_from(start);
            self.push_text(text);
            return;
        };

        while self
            .open
            .last()
            .is_some_and(|el| elements::implicitly_closes(&el.name, &tag.name))
        {
            trace!(name = %tag.name, "implied end tag");
            self.close_current();
        }

        let limit = self.config.depth_limit();
        if self.open.len() >= limit {
            // past the limit new elements become siblings of the innermost
            // open element
            trace!(name = %tag.name, limit, "nesting limit reached");
            self.close_current();
        }

        let mut element = Element::new(tag.name);
        element.attributes = tag.attributes;
        element.self_closing = tag.self_closing;

        if tag.self_closing || elements::is_void(&element.name) {
            self.push_node(Node::Element(element));
            return;
        }

        if elements::is_raw_text(&element.name) {
            let text = self.read_raw_text(&element.name);
            if !text.is_empty() {
                element.children.push(Node::text(text));
            }
            self.push_node(Node::Element(element));
            return;
        }

        self.open.push(element);
    }

    /// Read `<name attr=value ...>` or return `None` if the input ends first
    fn read_start_tag(&mut self) -> Option<StartTag> {
        self.cursor.advance(); // '<'
        let name = self.read_name().to_string();
        let mut attributes = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current()? {
                b'>' => {
                    self.cursor.advance();
                    return Some(StartTag {
                        name,
                        attributes,
                        self_closing: false,
                    });
                }
                b'/' if self.cursor.peek(1) == Some(b'>') => {
                    self.cursor.advance_by(2);
                    return Some(StartTag {
                        name,
                        attributes,
                        self_closing: true,
                    });
                }
                b'/' => self.cursor.advance(),
                _ => {
                    let (attr_name, attribute) = self.read_attribute()?;
                    let duplicate = attributes
                        .keys()
                        .any(|key: &String| key.eq_ignore_ascii_case(&attr_name));
                    if duplicate {
                        debug!(name = %attr_name, "dropping duplicate attribute");
                    } else {
                        attributes.insert(attr_name, attribute);
                    }
                }
            }
        }
    }

    fn read_attribute(&mut self) -> Option<(String, Attribute)> {
        let start = self.cursor.pos();
        // the first byte always belongs to the name, even if it is '='
        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_whitespace(b) || matches!(b, b'=' | b'>' | b'/') {
                break;
            }
            self.cursor.advance();
        }
        let name = self.cursor.slice_from(start).to_string();

        let checkpoint = self.cursor.clone();
        self.cursor.skip_whitespace();
        if !self.cursor.consume(b'=') {
            self.cursor = checkpoint;
            return Some((name, Attribute::bare()));
        }
        self.cursor.skip_whitespace();

        let attribute = match self.cursor.current()? {
            quote @ (b'"' | b'\'') => {
                self.cursor.advance();
                let end = self.cursor.find(&[quote])?;
                let value = self.cursor.slice(self.cursor.pos(), end).to_string();
                self.cursor.advance_to(end + 1);
                let quote = if quote == b'"' {
                    Quote::Double
                } else {
                    Quote::Single
                };
                Attribute::new(value, quote)
            }
            b'>' => Attribute::new(String::new(), Quote::Unquoted),
            _ => {
                let start = self.cursor.pos();
                while let Some(b) = self.cursor.current() {
                    if is_whitespace(b) || b == b'>' {
                        break;
                    }
                    self.cursor.advance();
                }
                Attribute::new(self.cursor.slice_from(start), Quote::Unquoted)
            }
        };
        Some((name, attribute))
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if is_whitespace(b) || matches!(b, b'/' | b'>') {
                break;
            }
            self.cursor.advance();
        }
        self.cursor.slice_from(start)
    }

    /// Content of a raw-text element, consuming its end tag if present
    fn read_raw_text(&mut self, name: &str) -> &'a str {
        let start = self.cursor.pos();
        let mut pattern = Vec::with_capacity(name.len() + 2);
        pattern.extend_from_slice(b"</");
        pattern.extend_from_slice(name.as_bytes());

        loop {
            let Some(end) = self.cursor.find_ignore_ascii_case(&pattern) else {
                self.cursor.advance_to_end();
                return self.cursor.slice_from(start);
            };
            let after = self.cursor.byte_at(end + pattern.len());
            let terminated = after.map_or(true, |b| is_whitespace(b) || matches!(b, b'/' | b'>'));
            if !terminated {
                // e.g. `</scripts` inside a script body
                self.cursor.advance_to(end + 1);
                continue;
            }

            let text = self.cursor.slice(start, end);
            self.cursor.advance_to(end);
            match self.cursor.find(b">") {
                Some(close) => self.cursor.advance_to(close + 1),
                None => self.cursor.advance_to_end(),
            }
            return text;
        }
    }

    fn parse_end_tag(&mut self) {
        let checkpoint = self.cursor.clone();
        let start = self.cursor.pos();
        self.cursor.advance_by(2); // "</"
        let name = self.read_name();

        let Some(close) = self.cursor.find(b">") else {
            self.cursor = checkpoint;
            self.cursor.advance_to_end();
            let text = self.cursor.slice_from(start);
            self.push_text(text);
            return;
        };
        self.cursor.advance_to(close + 1);

        match self.open.iter().rposition(|el| el.is(name)) {
            Some(idx) => {
                while self.open.len() > idx {
                    self.close_current();
                }
            }
            None => debug!(name = %name, "dropping stray end tag"),
        }
    }

    fn parse_markup_declaration(&mut self) {
        let start = self.cursor.pos();

        if self.cursor.starts_with(b"<!--") {
            self.cursor.advance_by(4);
            let body_start = self.cursor.pos();
            let body = match self.cursor.find(b"-->") {
                Some(end) => {
                    let body = self.cursor.slice(body_start, end);
                    self.cursor.advance_to(end + 3);
                    body
                }
                None => {
                    self.cursor.advance_to_end();
                    self.cursor.slice_from(body_start)
                }
            };
            self.push_node(Node::Comment(body.to_string()));
            return;
        }

        let terminator: &[u8] = if self.cursor.starts_with(b"<![CDATA[") {
            b"]]>"
        } else {
            b">"
        };
        self.skip_past(terminator);
        let raw = self.cursor.slice_from(start);
        self.push_node(Node::Declaration(raw.to_string()));
    }

    fn parse_processing_instruction(&mut self) {
        let start = self.cursor.pos();
        self.skip_past(b">");
        let raw = self.cursor.slice_from(start);
        self.push_node(Node::Declaration(raw.to_string()));
    }

    fn skip_past(&mut self, pattern: &[u8]) {
        match self.cursor.find(pattern) {
            Some(end) => self.cursor.advance_to(end + pattern.len()),
            None => self.cursor.advance_to_end(),
        }
    }

    /// Close the innermost open element, returning false if none is open
    fn close_current(&mut self) -> bool {
        match self.open.pop() {
            Some(el) => {
                self.push_node(Node::Element(el));
                true
            }
            None => false,
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(el) => &mut el.children,
            None => &mut self.nodes,
        }
    }

    fn push_node(&mut self, node: Node) {
        self.children_mut().push(node);
    }

    /// Append text, merging with a preceding text node
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let children = self.children_mut();
        if let Some(Node::Text(existing)) = children.last_mut() {
            existing.push_str(text);
        } else {
            children.push(Node::text(text));
        }
    }
}
