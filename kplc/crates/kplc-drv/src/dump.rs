//! Token dump formatting.
//!
//! Text lines look like `3-7:TK_IDENT(count)`. JSON Lines output carries the
//! same information as one object per token.

use std::io::Write;

use kplc_lex::{Token, TokenValue};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format of the token dump.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    /// `line-column:KIND(payload)` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Serializable view of one token.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Line of the first character
    pub line: u32,
    /// Column of the first character
    pub column: u32,
    /// Dump name of the kind, e.g. `SB_ASSIGN`
    pub kind: &'static str,
    /// Identifier or literal text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<&'a str>,
    /// Integer value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let (spelling, value) = match token.value() {
            TokenValue::Spelling(s) => (Some(s.as_str()), None),
            TokenValue::Number(n) => (None, Some(*n)),
            TokenValue::Empty => (None, None),
        };
        Self {
            line: token.line(),
            column: token.column(),
            kind: token.kind().name(),
            spelling,
            value,
        }
    }
}

/// Formats a token as a text dump line, without the newline.
pub fn format_text(token: &Token) -> String {
    format!("{}:{}", token.position(), token)
}

/// Writes one dump line for `token`.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: EmitFormat) -> Result<()> {
    match format {
        EmitFormat::Text => writeln!(out, "{}", format_text(token))?,
        EmitFormat::Json => {
            serde_json::to_writer(&mut *out, &TokenRecord::from(token))?;
            writeln!(out)?;
        },
    }
    Ok(())
}
