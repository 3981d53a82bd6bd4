//! Indentation options

use crate::markup::ParserConfig;

/// What to do with text already sitting between elements
///
/// Elements whose content is whitespace-sensitive (`pre`, `textarea`, ...)
/// are always left as they are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Drop whitespace-only text between elements; text with content is
    /// kept exactly
    #[default]
    Normalize,
    /// Like `Normalize`, and also strip the trailing whitespace of text
    /// directly before an element or an end tag, so reformatting any
    /// output gives the same output
    Trim,
    /// Keep existing text untouched; repeated runs accumulate blank lines
    Preserve,
}

/// Options for [`crate::format`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentOptions {
    /// When false, formatting only trims the input
    pub enabled: bool,
    pub whitespace: WhitespacePolicy,
    pub parser: ParserConfig,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            whitespace: WhitespacePolicy::default(),
            parser: ParserConfig::default(),
        }
    }
}

impl IndentOptions {
    /// Options that leave markup as-is apart from trimming
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn with_whitespace(mut self, whitespace: WhitespacePolicy) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub const fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}
