//! Rendered/source view toggle

use std::fmt;

use tracing::{debug, instrument};

use crate::editor::surface::{Highlighter, IconRegistry, RichTextSurface, SourceSurface};
use crate::error::Result;
use crate::indent::{format, IndentOptions};
use crate::markup::ParserConfig;

/// Name the toolbar icon is registered under
pub const SOURCE_EDITOR_ICON_NAME: &str = "source-editor";

/// Toolbar icon for the source toggle button
pub const SOURCE_EDITOR_ICON: &str = "<svg xmlns='http://www.w3.org/2000/svg' version='1.1' viewBox='0 -12 200 215' xmlns:xlink='http://www.w3.org/1999/xlink'><g><path d='M81 21c2,-1 4,-2 6,-2l63 0c13,0 24,10 24,22l0 36c0,4 -3,7 -8,7 -4,0 -8,-3 -8,-7l0 -36c0,-4 -3,-7 -8,-7l-55 0 0 36c0,4 -4,7 -8,7l-40 0 0 80c0,4 3,7 8,7l24 0c4,0 8,3 8,7 0,4 -4,7 -8,7l-24 0c-13,0 -24,-9 -24,-21l0 -87c0,-2 1,-4 2,-5l48 -44zm-23 42l21 0 0 -19 -21 19zm98 38l32 29c3,3 3,7 0,10l-32 29c-3,3 -8,3 -11,0 -3,-3 -3,-7 0,-10l26 -24 -26 -24c-3,-3 -3,-7 0,-10 3,-3 8,-3 11,0zm-32 10c3,-3 3,-7 0,-10 -3,-3 -8,-3 -11,0l-32 29c-3,3 -3,7 0,10l32 29c3,3 8,3 11,0 3,-3 3,-7 0,-10l-26 -24 26 -24z'/></g></svg>";

/// Which view is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Rendered,
    Source,
}

/// Toggle configuration
pub struct ToggleConfig {
    /// Indent markup when revealing the source view
    pub indent: bool,
    /// Limits applied when parsing the host's markup
    pub parser: ParserConfig,
    pub highlighter: Option<Box<dyn Highlighter>>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            indent: true,
            parser: ParserConfig::default(),
            highlighter: None,
        }
    }
}

impl fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("indent", &self.indent)
            .field("parser", &self.parser)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

impl ToggleConfig {
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self
    }
}

/// Switches a host between its rendered view and a raw markup view
#[derive(Debug)]
pub struct SourceToggle<H, S> {
    host: H,
    source: S,
    config: ToggleConfig,
    mode: Mode,
}

impl<H, S> SourceToggle<H, S>
where
    H: RichTextSurface,
    S: SourceSurface,
{
    /// Wire up a toggle, registering its icon with the host
    ///
    /// The source view starts hidden.
    pub fn new<R>(host: H, mut source: S, icons: &mut R, config: ToggleConfig) -> Self
    where
        R: IconRegistry + ?Sized,
    {
        icons.register(SOURCE_EDITOR_ICON_NAME, SOURCE_EDITOR_ICON);
        source.set_visible(false);
        Self {
            host,
            source,
            config,
            mode: Mode::Rendered,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_parts(self) -> (H, S) {
        (self.host, self.source)
    }

    /// Switch to the other view, returning the new mode
    pub fn toggle(&mut self) -> Result<Mode> {
        match self.mode {
            Mode::Rendered => self.show_source()?,
            Mode::Source => self.show_rendered(),
        }
        Ok(self.mode)
    }

    /// Reveal the host's markup in the source view
    ///
    /// If indentation fails nothing is changed.
    #[instrument(skip_all)]
    pub fn show_source(&mut self) -> Result<()> {
        let options = IndentOptions::default()
            .with_enabled(self.config.indent)
            .with_parser(self.config.parser);
        let markup = format(&self.host.content(), &options)?;
        debug!(len = markup.len(), "showing source view");

        self.mode = Mode::Source;
        self.host.set_enabled(false);
        self.host.set_visible(false);
        self.source.set_visible(true);
        self.source.set_text(&markup);
        self.highlight(&markup);
        Ok(())
    }

    /// Feed the source view's text back into the host
    #[instrument(skip_all)]
    pub fn show_rendered(&mut self) {
        debug!("showing rendered view");
        self.mode = Mode::Rendered;
        self.host.set_enabled(true);
        self.host.set_visible(true);
        self.source.set_visible(false);
        let markup = self.source.text();
        self.host.set_content(&markup);
    }

    /// Re-run highlighting after the user edits the raw text
    pub fn on_source_edited(&self) {
        self.highlight(&self.source.text());
    }

    fn highlight(&self, text: &str) {
        if let Some(highlighter) = &self.config.highlighter {
            highlighter.highlight(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct Host {
        content: String,
        enabled: bool,
    }

    impl RichTextSurface for Host {
        fn content(&self) -> String {
            self.content.clone()
        }
        fn set_content(&mut self, markup: &str) {
            self.content = markup.to_string();
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
        fn set_visible(&mut self, _visible: bool) {}
    }

    #[derive(Debug, Default)]
    struct Raw(String);

    impl SourceSurface for Raw {
        fn text(&self) -> String {
            self.0.clone()
        }
        fn set_text(&mut self, text: &str) {
            self.0 = text.to_string();
        }
        fn set_visible(&mut self, _visible: bool) {}
    }

    #[test]
    fn test_registers_icon() {
        let mut icons: HashMap<String, String> = HashMap::new();
        let toggle = SourceToggle::new(
            Host::default(),
            Raw::default(),
            &mut icons,
            ToggleConfig::default(),
        );
        assert_eq!(toggle.mode(), Mode::Rendered);
        assert_eq!(
            icons.get(SOURCE_EDITOR_ICON_NAME).map(String::as_str),
            Some(SOURCE_EDITOR_ICON)
        );
    }

    #[test]
    fn test_toggle_round_trip() -> Result<()> {
        let host = Host {
            content: "<ul><li>a</li></ul>".to_string(),
            enabled: true,
        };
        let mut icons: HashMap<String, String> = HashMap::new();
        let mut toggle = SourceToggle::new(host, Raw::default(), &mut icons, ToggleConfig::default());

        assert_eq!(toggle.toggle()?, Mode::Source);
        assert_eq!(toggle.source().0, "<ul>\n  <li>a</li>\n</ul>");
        assert!(!toggle.host().enabled);

        assert_eq!(toggle.toggle()?, Mode::Rendered);
        assert!(toggle.host().enabled);
        assert_eq!(toggle.host().content, "<ul>\n  <li>a</li>\n</ul>");
        Ok(())
    }

    #[test]
    fn test_icon_matches_toolbar_markup() {
        assert!(SOURCE_EDITOR_ICON.starts_with("<svg xmlns='http://www.w3.org/2000/svg'"));
        assert!(SOURCE_EDITOR_ICON.contains("xmlns:xlink='http://www.w3.org/1999/xlink'"));
        assert!(SOURCE_EDITOR_ICON.ends_with("</g></svg>"));
    }

    #[test]
    fn test_config_debug_hides_hook() {
        let config = ToggleConfig::default().with_highlighter(|_: &str| {});
        assert_eq!(
            format!("{config:?}"),
            "ToggleConfig { indent: true, parser: ParserConfig { max_depth: 512, max_size: 0 }, highlighter: true }"
        );
    }
}
