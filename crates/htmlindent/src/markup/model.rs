//! Markup tree model

use indexmap::IndexMap;

use crate::markup::cursor::is_whitespace;

/// Ordered sequence of top-level nodes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

/// Markup element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name as written in the source
    pub name: String,
    pub attributes: IndexMap<String, Attribute>,
    pub children: Vec<Node>,
    /// Written as `<name/>` in the source
    pub self_closing: bool,
}

/// Attribute value, kept exactly as written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub value: String,
    pub quote: Quote,
}

/// How an attribute value was delimited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    Unquoted,
    /// Attribute without a value, e.g. `disabled`
    Bare,
}

/// Markup content node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Character data, entities left undecoded
    Text(String),
    /// Body of a `<!-- ... -->` comment
    Comment(String),
    /// `<!DOCTYPE ...>`, `<![CDATA[...]]>` or `<?...?>`, verbatim
    Declaration(String),
}

impl Fragment {
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Direct child elements in document order
    pub fn element_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn has_element_children(&self) -> bool {
        self.children.iter().any(Node::is_element)
    }

    /// Look up an attribute by name, ignoring ASCII case
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, attr)| attr)
    }

    /// Whether this element has the given tag name, ignoring ASCII case
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl Attribute {
    pub fn new(value: impl Into<String>, quote: Quote) -> Self {
        Self {
            value: value.into(),
            quote,
        }
    }

    pub fn bare() -> Self {
        Self {
            value: String::new(),
            quote: Quote::Bare,
        }
    }

    pub fn double(value: impl Into<String>) -> Self {
        Self::new(value, Quote::Double)
    }
}

impl Node {
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Text node made only of HTML whitespace (or empty)
    pub fn is_whitespace(&self) -> bool {
        match self {
            Self::Text(text) => text.bytes().all(is_whitespace),
            _ => false,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
