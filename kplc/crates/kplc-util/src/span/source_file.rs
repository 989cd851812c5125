//! Source file with precomputed line starts.
//!
//! A [`SourceFile`] holds the text of one input file and answers line
//! queries for diagnostic rendering.

use std::fmt;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use kplc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.kpl", "program p;\nbegin end.");
/// assert_eq!(file.name(), "main.kpl");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("begin end."));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// An empty file has one (empty) line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// Returns `None` for line 0 and for lines past the end of the file.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        self.line(line).ok()
    }

    /// Get a specific source line (1-indexed), reporting why it is missing
    ///
    /// # Examples
    ///
    /// ```
    /// use kplc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.kpl", "x := 1");
    /// assert_eq!(file.line(1).unwrap(), "x := 1");
    /// assert!(file.line(2).is_err());
    /// ```
    pub fn line(&self, line: usize) -> SourceResult<&str> {
        let invalid = || SourceError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };

        if line == 0 {
            return Err(invalid());
        }
        let start = *self.line_starts.get(line - 1).ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    pub fn extract(&self, start: usize, end: usize) -> SourceResult<&str> {
        let invalid = || SourceError::InvalidRange {
            start,
            end,
            file_len: self.content.len(),
        };

        if start > end || end > self.content.len() {
            return Err(invalid());
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(invalid());
        }

        Ok(&self.content[start..end])
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(SourceFile::new("a", "").line_count(), 1);
        assert_eq!(SourceFile::new("a", "one").line_count(), 1);
        assert_eq!(SourceFile::new("a", "one\ntwo\n").line_count(), 3);
    }

    #[test]
    fn test_line_at() {
        let file = SourceFile::new("a", "line1\nline2\r\nline3");
        assert_eq!(file.line_at(1), Some("line1"));
        assert_eq!(file.line_at(2), Some("line2"));
        assert_eq!(file.line_at(3), Some("line3"));
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn test_line_error() {
        let file = SourceFile::new("a", "only");
        assert_eq!(
            file.line(5),
            Err(SourceError::InvalidLineNumber {
                line: 5,
                max_lines: 1
            })
        );
    }

    #[test]
    fn test_extract() {
        let file = SourceFile::new("a", "x := 42");
        assert_eq!(file.extract(0, 1).unwrap(), "x");
        assert_eq!(file.extract(5, 7).unwrap(), "42");
        assert!(file.extract(5, 3).is_err());
        assert!(file.extract(0, 100).is_err());
    }

    #[test]
    fn test_extract_rejects_split_characters() {
        let file = SourceFile::new("a", "é");
        assert!(file.extract(0, 1).is_err());
        assert_eq!(file.extract(0, 2).unwrap(), "é");
    }

    #[test]
    fn test_debug_omits_content() {
        let file = SourceFile::new("main.kpl", "secret");
        let debug = format!("{:?}", file);
        assert!(debug.contains("main.kpl"));
        assert!(!debug.contains("secret"));
    }
}
