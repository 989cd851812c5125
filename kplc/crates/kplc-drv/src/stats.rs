//! Per-kind token counts.

use std::io::Write;

use indexmap::IndexMap;
use kplc_lex::TokenKind;

use crate::error::Result;

/// Token histogram in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct TokenStats {
    counts: IndexMap<TokenKind, usize>,
    total: usize,
}

impl TokenStats {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one token of `kind`.
    pub fn record(&mut self, kind: TokenKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of tokens of `kind`.
    pub fn get(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of recorded tokens.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Kinds and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    /// Writes `KIND count` lines followed by a totals line.
    pub fn write_to<W: Write>(&self, out: &mut W, diagnostics: usize) -> Result<()> {
        for (kind, count) in self.iter() {
            writeln!(out, "{} {}", kind, count)?;
        }
        writeln!(out, "total {} tokens, {} diagnostics", self.total, diagnostics)?;
        Ok(())
    }
}
