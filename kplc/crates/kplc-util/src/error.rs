//! Core error types for kplc-util crate

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Line number outside the file
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },

    /// Byte range outside the file or not on character boundaries
    #[error("Invalid range: {start}..{end} (file has {file_len} bytes)")]
    InvalidRange {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
        /// File length in bytes
        file_len: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
