//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::span::{SourceFile, Span};

/// A source line with a caret marking a column range
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x := 3 # 4", 1, 8, 9);
/// assert_eq!(snippet.format(), "  1 | x := 3 # 4\n    |        ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based, exclusive)
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Build a snippet for `span` from the line it starts on
    ///
    /// Returns `None` when the span's line is not in `file`.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let line = file.line_at(line_number)?;
        let start = span.column as usize;
        let width = file
            .extract(span.start, span.end)
            .map(|text| text.chars().count())
            .unwrap_or(0);
        Some(Self::new(line, line_number, start, start + width))
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a second line with
    /// carets (`^`) under the marked columns. At least one caret is drawn.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use kplc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("identifier too long")
///     .code(DiagnosticCode::E0002)
///     .span(Span::point(1, 1))
///     .build();
/// assert_eq!(diag.code, Some(DiagnosticCode::E0002));
/// assert_eq!(diag.to_string(), "1-1: error[E0002]: identifier too long");
/// ```
#[derive(Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder with no span or code yet
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
