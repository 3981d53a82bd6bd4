//! Byte cursor for navigating markup with position tracking

use crate::error::Pos;

/// Cursor over UTF-8 markup
///
/// Navigation is byte-wise, but slices are only ever taken at ASCII
/// delimiters so they always fall on character boundaries.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor from markup text
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at byte ahead without consuming
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.input
            .as_bytes()
            .get(self.pos.saturating_add(ahead))
            .copied()
    }

    /// Advance cursor by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if b & 0xC0 != 0x80 {
                // continuation bytes share the column of their lead byte
                self.col += 1;
            }
        }
    }

    /// Advance cursor by `count` bytes
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Advance cursor until it reaches absolute offset `target`
    pub fn advance_to(&mut self, target: usize) {
        while self.pos < target && !self.is_eof() {
            self.advance();
        }
    }

    /// Advance to the end of input
    pub fn advance_to_end(&mut self) {
        self.advance_to(self.input.len());
    }

    /// Skip ASCII whitespace
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.current() {
            if is_whitespace(b) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consume byte if it matches
    pub fn consume(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check whether the remaining input starts with `pattern`
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    /// Find the absolute offset of the next occurrence of `pattern`
    pub fn find(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(self.pos);
        }
        self.remaining()
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|idx| self.pos + idx)
    }

    /// Like [`Cursor::find`], comparing ASCII letters case-insensitively
    pub fn find_ignore_ascii_case(&self, pattern: &[u8]) -> Option<usize> {
        if pattern.is_empty() {
            return Some(self.pos);
        }
        self.remaining()
            .windows(pattern.len())
            .position(|window| window.eq_ignore_ascii_case(pattern))
            .map(|idx| self.pos + idx)
    }

    /// Byte at an absolute offset
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(offset).copied()
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> &'a [u8] {
        self.input.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get text from start to current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }

    /// Get text between two absolute offsets
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or_default()
    }
}

/// HTML whitespace: space, tab, LF, FF and CR
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(cursor.current(), Some(b'h'));
        assert_eq!(cursor.peek(1), Some(b'e'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'e'));
    }

    #[test]
    fn test_cursor_whitespace() {
        let mut cursor = Cursor::new("  \t\nhello");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some(b'h'));
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().col, 1);
    }

    #[test]
    fn test_cursor_consume() {
        let mut cursor = Cursor::new("abc");
        assert!(cursor.consume(b'a'));
        assert!(!cursor.consume(b'z'));
        assert_eq!(cursor.current(), Some(b'b'));
    }

    #[test]
    fn test_cursor_eof() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.find(b"x"), None);
    }

    #[test]
    fn test_cursor_find() {
        let mut cursor = Cursor::new("ab</SCRIPT>");
        assert_eq!(cursor.find(b"</"), Some(2));
        assert_eq!(cursor.find_ignore_ascii_case(b"</script"), Some(2));
        cursor.advance_to(3);
        assert_eq!(cursor.find(b"</"), None);
    }

    #[test]
    fn test_cursor_multibyte_columns() {
        let mut cursor = Cursor::new("é<");
        cursor.advance_by(2);
        assert_eq!(cursor.current(), Some(b'<'));
        assert_eq!(cursor.position().col, 2);
        assert_eq!(cursor.slice_from(0), "é");
    }
}
