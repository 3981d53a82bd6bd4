//! Collaborator surfaces a host integration provides

use std::collections::HashMap;

/// The rendered rich-text view
pub trait RichTextSurface {
    /// Current document as markup
    fn content(&self) -> String;
    /// Replace the document from markup
    fn set_content(&mut self, markup: &str);
    fn set_enabled(&mut self, enabled: bool);
    fn set_visible(&mut self, visible: bool);
}

/// The raw markup editing view
pub trait SourceSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_visible(&mut self, visible: bool);
}

/// Presentation hook run after the raw text changes
///
/// Implementations must not modify the text they are given.
pub trait Highlighter {
    fn highlight(&self, text: &str);
}

impl<F> Highlighter for F
where
    F: Fn(&str),
{
    fn highlight(&self, text: &str) {
        self(text)
    }
}

/// Host registry that toolbar icons are added to
pub trait IconRegistry {
    fn register(&mut self, name: &str, svg: &str);
}

impl IconRegistry for HashMap<String, String> {
    fn register(&mut self, name: &str, svg: &str) {
        self.insert(name.to_string(), svg.to_string());
    }
}
