//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! scanner diagnostics. Every lexical diagnostic is an error that never
//! stops the scan.
//!
//! # Examples
//!
//! ```
//! use kplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use kplc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("end of comment expected")
//!     .code(DiagnosticCode::E0001)
//!     .span(Span::point(4, 1))
//!     .emit(&handler);
//!
//! let diag = &handler.diagnostics()[0];
//! assert_eq!(diag.to_string(), "4-1: error[E0001]: end of comment expected");
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// An error in the source text, with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic without a code
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Render the diagnostic for a terminal
    ///
    /// The first line is the `Display` form. When `source` is given and
    /// contains the diagnostic's line, the line is shown with a caret under
    /// the reported column.
    ///
    /// # Examples
    ///
    /// ```
    /// use kplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use kplc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.kpl", "x ? y");
    /// let diag = DiagnosticBuilder::error("invalid symbol")
    ///     .code(DiagnosticCode::E0004)
    ///     .span(Span::new(2, 3, 1, 3))
    ///     .build();
    /// assert_eq!(
    ///     diag.render(Some(&file)),
    ///     "1-3: error[E0004]: invalid symbol\n  1 | x ? y\n    |   ^"
    /// );
    /// ```
    pub fn render(&self, source: Option<&SourceFile>) -> String {
        let mut out = self.to_string();

        if let Some(snippet) = source.and_then(|file| SourceSnippet::from_span(file, self.span)) {
            out.push('\n');
            out.push_str(&snippet.format());
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: error", self.span.position())?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Handler for collecting diagnostics
///
/// Emission takes `&self`, so a handler can be shared by reference between
/// the code that reports and the code that drains it.
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::{Diagnostic, Handler};
/// use kplc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("invalid symbol", Span::point(1, 1)));
///
/// assert_eq!(handler.error_count(), 1);
/// let drained = handler.take_diagnostics();
/// assert_eq!(drained.len(), 1);
/// assert!(handler.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors are pending
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Get the number of pending errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if no diagnostics are pending
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get a copy of all pending diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all pending diagnostics, in emission order
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
