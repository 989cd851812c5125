//! kplc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the KPL scanner workspace:
//!
//! - [`span`] - source positions, spans, and source files with line lookup
//! - [`diagnostic`] - diagnostic codes, builders, and the collecting [`Handler`]
//! - [`error`] - error types for the utilities above
//!
//! # Example
//!
//! ```
//! use kplc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("invalid symbol")
//!     .code(DiagnosticCode::E0004)
//!     .span(Span::point(3, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{Position, SourceFile, Span};
