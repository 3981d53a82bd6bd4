//! Element categories that steer tree construction and indentation

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT: &[&str] = &["script", "style", "textarea", "title", "xmp"];

const WHITESPACE_SENSITIVE: &[&str] = &["pre", "textarea", "script", "style", "xmp"];

/// Start tags that close an open `<p>`
const CLOSES_PARAGRAPH: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "dialog", "div", "dl", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hgroup", "hr", "main", "menu", "nav", "ol", "p", "pre", "search", "section", "table", "ul",
];

fn matches_ignore_ascii_case(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| name.eq_ignore_ascii_case(s))
}

/// Elements that never have content or an end tag
pub fn is_void(name: &str) -> bool {
    matches_ignore_ascii_case(name, VOID)
}

/// Elements whose content is taken verbatim up to the matching end tag
pub fn is_raw_text(name: &str) -> bool {
    matches_ignore_ascii_case(name, RAW_TEXT)
}

/// Elements whose text content must not be trimmed
pub fn is_whitespace_sensitive(name: &str) -> bool {
    matches_ignore_ascii_case(name, WHITESPACE_SENSITIVE)
}

/// Whether opening `incoming` implies the end of an open `open` element
pub fn implicitly_closes(open: &str, incoming: &str) -> bool {
    let open = open.to_ascii_lowercase();
    let incoming = incoming.to_ascii_lowercase();
    match open.as_str() {
        "p" => matches_ignore_ascii_case(&incoming, CLOSES_PARAGRAPH),
        "li" => incoming == "li",
        "dt" | "dd" => matches!(incoming.as_str(), "dt" | "dd"),
        "option" => matches!(incoming.as_str(), "option" | "optgroup"),
        "tr" => incoming == "tr",
        "td" | "th" => matches!(incoming.as_str(), "td" | "th" | "tr"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_is_case_insensitive() {
        assert!(is_void("br"));
        assert!(is_void("IMG"));
        assert!(!is_void("div"));
    }

    #[test]
    fn test_raw_text() {
        assert!(is_raw_text("script"));
        assert!(is_raw_text("Style"));
        assert!(!is_raw_text("pre"));
        assert!(is_whitespace_sensitive("pre"));
    }

    #[test]
    fn test_implied_end_tags() {
        assert!(implicitly_closes("p", "div"));
        assert!(implicitly_closes("P", "UL"));
        assert!(!implicitly_closes("p", "span"));
        assert!(implicitly_closes("li", "li"));
        assert!(implicitly_closes("dd", "dt"));
        assert!(implicitly_closes("td", "tr"));
        assert!(!implicitly_closes("div", "div"));
    }
}
