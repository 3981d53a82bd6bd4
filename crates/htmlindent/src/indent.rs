//! Two-space markup indenter
//!
//! Every element with element children gets a newline plus `2 * level`
//! spaces before each child element, and a newline plus `2 * (level - 1)`
//! spaces before its end tag. Top-level nodes sit at level 0.

pub mod options;

pub use options::{IndentOptions, WhitespacePolicy};

use tracing::{debug, instrument};

use crate::error::Result;
use crate::markup::{elements, Element, Fragment, Node, Parser};

/// One nesting level
pub const INDENT_UNIT: &str = "  ";

/// Re-indent `markup`
///
/// The input is trimmed first. With `options.enabled == false` the trimmed
/// input is returned as-is without being parsed.
#[instrument(skip_all, fields(len = markup.len()))]
pub fn format(markup: &str, options: &IndentOptions) -> Result<String> {
    let markup = markup.trim();
    if !options.enabled {
        debug!("indentation disabled, returning trimmed input");
        return Ok(markup.to_string());
    }
    if markup.is_empty() {
        return Ok(String::new());
    }

    let fragment = Parser::with_config(markup, options.parser).parse()?;
    debug!(nodes = fragment.nodes.len(), "parsed fragment");
    let fragment = indent_fragment(fragment, options.whitespace);
    Ok(fragment.to_string().trim().to_string())
}

/// Insert indentation text nodes throughout `fragment`
pub fn indent_fragment(fragment: Fragment, policy: WhitespacePolicy) -> Fragment {
    Fragment::new(indent_children(fragment.nodes, 0, policy, true))
}

fn indent_element(mut el: Element, level: usize, policy: WhitespacePolicy) -> Element {
    let trim = !elements::is_whitespace_sensitive(&el.name);
    el.children = indent_children(std::mem::take(&mut el.children), level, policy, trim);
    el
}

/// Rebuild a child list as `[indent, element, ..., closing indent]`
fn indent_children(
    children: Vec<Node>,
    level: usize,
    policy: WhitespacePolicy,
    trim: bool,
) -> Vec<Node> {
    if !children.iter().any(Node::is_element) {
        return children;
    }

    let children = match policy {
        _ if !trim => children,
        WhitespacePolicy::Normalize => children
            .into_iter()
            .filter(|node| !node.is_whitespace())
            .collect(),
        WhitespacePolicy::Trim => trim_replaced_whitespace(children),
        WhitespacePolicy::Preserve => children,
    };

    let before = format!("\n{}", INDENT_UNIT.repeat(level));
    let after = format!("\n{}", INDENT_UNIT.repeat(level.saturating_sub(1)));

    let mut out = Vec::with_capacity(children.len() * 2 + 1);
    for node in children {
        match node {
            Node::Element(el) => {
                out.push(Node::Text(before.clone()));
                out.push(Node::Element(indent_element(el, level + 1, policy)));
            }
            other => out.push(other),
        }
    }
    out.push(Node::Text(after));
    out
}

/// Strip trailing whitespace that inserted indentation is about to replace
///
/// Only text directly before an element or at the end of the list is
/// touched. Text following an element keeps its leading whitespace.
fn trim_replaced_whitespace(children: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(children.len());
    let mut iter = children.into_iter().peekable();
    while let Some(node) = iter.next() {
        match node {
            Node::Text(text) => {
                let replaced = iter.peek().map_or(true, Node::is_element);
                let text = if replaced {
                    text.trim_end_matches(is_html_whitespace).to_string()
                } else {
                    text
                };
                if !text.is_empty() {
                    out.push(Node::Text(text));
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(input: &str) -> String {
        match format(input, &IndentOptions::default()) {
            Ok(out) => out,
            Err(err) => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_nested_depths() {
        assert_eq!(
            indent("<a><b><c>x</c></b></a>"),
            "<a>\n  <b>\n    <c>x</c>\n  </b>\n</a>"
        );
    }

    #[test]
    fn test_leaf_untouched() {
        assert_eq!(indent("<p>hello</p>"), "<p>hello</p>");
        assert_eq!(indent("<p></p>"), "<p></p>");
    }

    #[test]
    fn test_siblings_at_top_level() {
        assert_eq!(
            indent("<p>a</p><ul><li>1</li><li>2</li></ul>"),
            "<p>a</p>\n<ul>\n  <li>1</li>\n  <li>2</li>\n</ul>"
        );
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            indent("<p>hello <b>big</b> world</p>"),
            "<p>hello \n  <b>big</b> world\n</p>"
        );
    }

    #[test]
    fn test_normalize_keeps_text_with_content() {
        assert_eq!(
            indent("<div>a <b>x</b> <i>y</i> </div>"),
            "<div>a \n  <b>x</b>\n  <i>y</i>\n</div>"
        );
    }

    #[test]
    fn test_trim_policy_strips_trailing_whitespace() {
        let options = IndentOptions::default().with_whitespace(WhitespacePolicy::Trim);
        let once = format("<p>hello <b>big</b> world</p>", &options);
        assert_eq!(once, Ok("<p>hello\n  <b>big</b> world\n</p>".to_string()));
        let twice = once.and_then(|out| format(&out, &options));
        assert_eq!(twice, Ok("<p>hello\n  <b>big</b> world\n</p>".to_string()));
    }

    #[test]
    fn test_normalize_drops_existing_indentation() {
        let formatted = "<div>\n  <p>a</p>\n  <p>b</p>\n</div>";
        assert_eq!(indent("<div>  <p>a</p>\n\n<p>b</p> </div>"), formatted);
        assert_eq!(indent(formatted), formatted);
    }

    #[test]
    fn test_preserve_accumulates_whitespace() {
        let options = IndentOptions::default().with_whitespace(WhitespacePolicy::Preserve);
        let out = format("<div>\n  <p>a</p>\n</div>", &options);
        assert_eq!(out, Ok("<div>\n  \n  <p>a</p>\n\n</div>".to_string()));
    }

    #[test]
    fn test_pre_keeps_its_whitespace() {
        assert_eq!(
            indent("<pre> <b>x</b> </pre>"),
            "<pre> \n  <b>x</b> \n</pre>"
        );
    }

    #[test]
    fn test_comments_do_not_trigger_indentation() {
        assert_eq!(indent("<div><!-- c --></div>"), "<div><!-- c --></div>");
        assert_eq!(
            indent("<div><!-- c --><br></div>"),
            "<div><!-- c -->\n  <br>\n</div>"
        );
    }

    #[test]
    fn test_disabled_is_trim() {
        let out = format("  <a><b></b></a>\n", &IndentOptions::disabled());
        assert_eq!(out, Ok("<a><b></b></a>".to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(indent(""), "");
        assert_eq!(indent(" \n\t "), "");
    }

    #[test]
    fn test_indent_fragment_directly() {
        let fragment = Fragment::new(vec![Element::new("ul")
            .with_children(vec![Element::new("li").into()])
            .into()]);
        let indented = indent_fragment(fragment, WhitespacePolicy::Normalize);
        assert_eq!(indented.to_string(), "\n<ul>\n  <li></li>\n</ul>\n");
    }
}
