//! kplc-drv - Scanner Driver
//!
//! Reads one KPL source file, runs the lexer over it and writes a token
//! dump to one stream and rendered diagnostics to another.
//!
//! # Example
//!
//! ```
//! use kplc_drv::{Options, Session};
//!
//! let session = Session::from_source("demo.kpl", "x := 1 # 2", Options::default());
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//! let summary = session.scan(&mut out, &mut err).unwrap();
//!
//! assert_eq!(summary.tokens, 5);
//! assert_eq!(summary.diagnostics, 1);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "1-1:TK_IDENT(x)\n1-3:SB_ASSIGN\n1-6:TK_NUMBER(1)\n1-8:TK_NONE\n1-10:TK_NUMBER(2)\n"
//! );
//! assert_eq!(
//!     String::from_utf8(err).unwrap(),
//!     "1-8: error[E0004]: invalid symbol\n"
//! );
//! ```

pub mod config;
pub mod dump;
pub mod error;
pub mod stats;

use std::io::Write;
use std::path::Path;

use kplc_lex::Lexer;
use kplc_util::{Handler, SourceFile};
use tracing::{debug, info, trace};

pub use config::{Config, DiagnosticsConfig, OutputConfig, CONFIG_FILE_NAME};
pub use dump::{format_text, write_token, EmitFormat, TokenRecord};
pub use error::{DriverError, Result};
pub use stats::TokenStats;

/// Settings for one scan, resolved from configuration and command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Token dump format
    pub format: EmitFormat,
    /// Render a source snippet under each diagnostic
    pub snippets: bool,
    /// Print the token histogram after the dump
    pub stats: bool,
}

impl Options {
    /// Options taken from a configuration file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.output.format,
            snippets: config.diagnostics.snippets,
            stats: config.output.stats,
        }
    }
}

/// Counts from a finished scan.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Tokens dumped, excluding end of input
    pub tokens: usize,
    /// Diagnostics rendered
    pub diagnostics: usize,
    /// Per-kind token counts
    pub stats: TokenStats,
}

/// One source file and the options to scan it with.
#[derive(Debug)]
pub struct Session {
    options: Options,
    source: SourceFile,
}

impl Session {
    /// Read `path` into a new session.
    ///
    /// Fails with [`DriverError::Io`] when the file is missing, is a
    /// directory, or cannot be read. Byte sequences that are not UTF-8
    /// become `U+FFFD`, which scans as an invalid symbol.
    pub fn open(path: &Path, options: Options) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read source file");

        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!(
                    path = %path.display(),
                    offset = e.utf8_error().valid_up_to(),
                    "source is not valid UTF-8, replacing invalid bytes"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            },
        };
        Ok(Self::from_source(path.display().to_string(), content, options))
    }

    /// Create a session over in-memory source text.
    pub fn from_source(name: impl Into<String>, content: impl Into<String>, options: Options) -> Self {
        Self {
            options,
            source: SourceFile::new(name.into(), content.into()),
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    /// The options in effect.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Scan the whole source.
    ///
    /// Each token before end of input is dumped to `out`. Diagnostics are
    /// rendered to `err` as soon as the token that raised them is produced.
    /// Lexical errors never make this fail; only write failures do.
    pub fn scan<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<ScanSummary> {
        info!(file = self.source.name(), "scan started");

        let handler = Handler::new();
        let mut lexer = Lexer::new(self.source.content(), &handler);
        let snippet_source = self.options.snippets.then_some(&self.source);
        let mut summary = ScanSummary::default();

        loop {
            let token = lexer.next_token();

            for diagnostic in handler.take_diagnostics() {
                writeln!(err, "{}", diagnostic.render(snippet_source))?;
                summary.diagnostics += 1;
            }

            if token.is_eof() {
                break;
            }

            trace!(position = %token.position(), kind = %token.kind(), "token");
            summary.stats.record(token.kind());
            write_token(out, &token, self.options.format)?;
        }

        summary.tokens = summary.stats.total();
        if self.options.stats {
            summary.stats.write_to(out, summary.diagnostics)?;
        }

        info!(
            tokens = summary.tokens,
            diagnostics = summary.diagnostics,
            "scan finished"
        );
        Ok(summary)
    }
}
