//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a [`Position`] (1-based line and column) and a [`Span`] (byte range plus
//! the position of its first character).
//!
//! # Examples
//!
//! ```
//! use kplc_util::span::{Position, Span};
//!
//! let span = Span::new(10, 12, 2, 5);
//! assert_eq!(span.position(), Position::new(2, 5));
//! assert_eq!(span.position().to_string(), "2-5");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// A 1-based line/column location in source text
///
/// Columns count characters, not bytes. The `Display` form is
/// `line-column`, which is the form used by token dumps and diagnostics.
///
/// # Examples
///
/// ```
/// use kplc_util::span::Position;
///
/// let pos = Position::new(3, 14);
/// assert_eq!(format!("{}", pos), "3-14");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column of the first character (for human-readable output)
///
/// # Examples
///
/// ```
/// use kplc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.len(), 10);
///
/// let point = Span::point(1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span covering `start..end` that begins at `position`
    #[inline]
    pub fn at(start: usize, end: usize, position: Position) -> Self {
        Self::new(start, end, position.line, position.column)
    }

    /// Create a span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use kplc_util::span::Span;
    ///
    /// let point = Span::point(1, 5);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self::new(0, 0, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the position of the first character of the span
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
