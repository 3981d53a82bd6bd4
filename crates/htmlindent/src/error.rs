//! Error types for htmlindent

use std::fmt;
use thiserror::Error;

/// Position in source markup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Error kind
///
/// Malformed markup is never an error. Only an opt-in size limit and file
/// access can fail.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
    #[error("io error: {0}")]
    Io(String),
}

/// Main error type for htmlindent
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Pos>,
    message: String,
}

impl Error {
    /// Create error at specific position
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            pos: Some(pos),
            message,
        }
    }

    /// Create an error with no source position
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            pos: None,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "error at {pos}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = ErrorKind::Io(err.to_string());
        let message = kind.to_string();
        Self::with_message(kind, message)
    }
}

/// Result type alias for htmlindent
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_display() {
        let err = Error::at(ErrorKind::MaxSizeExceeded { max: 16 }, Pos::new(16, 2, 4));
        assert_eq!(err.kind(), &ErrorKind::MaxSizeExceeded { max: 16 });
        assert_eq!(err.pos().map(|p| p.offset), Some(16));
        assert_eq!(err.to_string(), "error at 16:2:4: max size exceeded: 16");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.html");
        let err = Error::from(io);
        assert!(matches!(err.kind(), ErrorKind::Io(_)));
        assert_eq!(err.pos(), None);
        assert_eq!(err.to_string(), "io error: missing.html");
    }
}
