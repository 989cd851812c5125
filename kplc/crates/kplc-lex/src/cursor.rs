//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use kplc_util::Position;

/// A cursor for traversing source code character by character.
///
/// End of input is signalled by [`Cursor::current`] returning `None`; it
/// is never confused with a character of the source.
///
/// # Example
///
/// ```
/// use kplc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\nc");
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('c'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character after the current one without consuming anything.
    ///
    /// ```
    /// use kplc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(":=");
    /// assert_eq!(cursor.peek(), Some('='));
    /// assert_eq!(Cursor::new(":").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.remaining().chars();
        chars.next();
        chars.next()
    }

    /// Moves past the current character, updating line and column.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// moves one column right. Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes the current character if it equals `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Line of the current character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Line and column of the current character.
    #[inline]
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed rest of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.location(), Position::new(1, 1));
    }

    #[test]
    fn test_advance_tracks_columns() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.column(), 2);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.location(), Position::new(2, 1));
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("éa");
        assert_eq!(cursor.current(), Some('é'));
        assert_eq!(cursor.peek(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), Some('a'));
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new(":=");
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char(':'));
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
    }

    #[test]
    fn test_remaining() {
        let mut cursor = Cursor::new("begin end");
        for _ in 0..5 {
            cursor.advance();
        }
        assert_eq!(cursor.offset(), 5);
        assert_eq!(cursor.remaining(), " end");
    }
}
