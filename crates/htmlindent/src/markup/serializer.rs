//! Markup serializer
//!
//! Text and attribute values are stored undecoded, so they are written back
//! verbatim; only the tag structure is regenerated.

use std::fmt::{self, Display, Write};

use crate::markup::elements;
use crate::markup::model::{Attribute, Element, Fragment, Node, Quote};

/// Serialize a fragment to a string
pub fn to_string(fragment: &Fragment) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_nodes(&mut out, &fragment.nodes);
    out
}

/// Write a sequence of sibling nodes
pub fn write_nodes<W: Write>(out: &mut W, nodes: &[Node]) -> fmt::Result {
    for node in nodes {
        write_node(out, node)?;
    }
    Ok(())
}

/// Write a single node and its subtree
pub fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(text) => out.write_str(text),
        Node::Comment(body) => write!(out, "<!--{body}-->"),
        Node::Declaration(raw) => out.write_str(raw),
    }
}

/// Write an element with its attributes, children and end tag
pub fn write_element<W: Write>(out: &mut W, el: &Element) -> fmt::Result {
    write!(out, "<{}", el.name)?;
    for (name, attr) in &el.attributes {
        write_attribute(out, name, attr)?;
    }

    if el.self_closing {
        return out.write_str(" />");
    }
    out.write_char('>')?;
    if elements::is_void(&el.name) {
        return Ok(());
    }

    write_nodes(out, &el.children)?;
    write!(out, "</{}>", el.name)
}

fn write_attribute<W: Write>(out: &mut W, name: &str, attr: &Attribute) -> fmt::Result {
    match attr.quote {
        Quote::Double => write!(out, " {name}=\"{}\"", attr.value),
        Quote::Single => write!(out, " {name}='{}'", attr.value),
        Quote::Unquoted => write!(out, " {name}={}", attr.value),
        Quote::Bare => write!(out, " {name}"),
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Parser;

    fn round_trip(input: &str) -> String {
        match Parser::new(input).parse() {
            Ok(fragment) => to_string(&fragment),
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_serialize_built_tree() {
        let el = Element::new("a")
            .with_attribute("href", Attribute::double("/x"))
            .with_attribute("data-x", Attribute::new("1", Quote::Single))
            .with_attribute("hidden", Attribute::bare())
            .with_children(vec![Node::text("go")]);
        assert_eq!(el.to_string(), "<a href=\"/x\" data-x='1' hidden>go</a>");
    }

    #[test]
    fn test_void_and_self_closing() {
        assert_eq!(round_trip("<p>a<br>b</p>"), "<p>a<br>b</p>");
        assert_eq!(round_trip("<img src=x.png/>"), "<img src=x.png/>");
        assert_eq!(round_trip("<item value=\"42\" />"), "<item value=\"42\" />");
    }

    #[test]
    fn test_verbatim_round_trip() {
        let input = "<!DOCTYPE html><!-- c --><p class=\"a\">x &amp; y &nbsp;</p><script>a<b</script>";
        assert_eq!(round_trip(input), input);
    }

    #[test]
    fn test_unclosed_elements_gain_end_tags() {
        assert_eq!(round_trip("<ul><li>a<li>b</ul>"), "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(round_trip("<div><span>x"), "<div><span>x</span></div>");
    }
}
