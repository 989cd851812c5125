//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! error reporting helpers shared by the sub-scanners.

use std::iter::FusedIterator;

use kplc_util::{DiagnosticBuilder, Handler, Position, Span};

use crate::charcode::CharCode;
use crate::cursor::Cursor;
use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind, TokenValue};

/// Lexer for the KPL language.
///
/// The lexer transforms source text into a stream of tokens. Lexical errors
/// are reported to the [`Handler`] and scanning continues; the offending
/// token comes back with kind [`TokenKind::Invalid`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collector for lexical errors.
    handler: &'a Handler,

    /// Byte offset where the current token starts.
    token_start: usize,

    /// Line and column where the current token starts.
    token_position: Position,

    /// Set once the iterator has yielded end of input.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_position: Position::START,
            exhausted: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Whitespace and comments are skipped in a loop until a token starts.
    /// Once the source is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.token_start = self.cursor.offset();
            self.token_position = self.cursor.location();

            let Some(c) = self.cursor.current() else {
                return self.make(TokenKind::Eof);
            };

            let token = match CharCode::of(c) {
                CharCode::Space => {
                    self.skip_blank();
                    continue;
                },
                CharCode::Letter => self.lex_identifier(),
                CharCode::Digit => self.lex_number(),
                CharCode::Plus => self.single(TokenKind::Plus),
                CharCode::Minus => self.single(TokenKind::Minus),
                CharCode::Eq => self.single(TokenKind::Eq),
                CharCode::Comma => self.single(TokenKind::Comma),
                CharCode::Period => self.single(TokenKind::Period),
                CharCode::Semicolon => self.single(TokenKind::Semicolon),
                CharCode::RPar => self.single(TokenKind::RPar),
                CharCode::Percent => self.single(TokenKind::Mod),
                CharCode::Times => self.lex_star(),
                CharCode::Lt => self.lex_less(),
                CharCode::Gt => self.lex_greater(),
                CharCode::Exclamation => self.lex_bang(),
                CharCode::Colon => self.lex_colon(),
                CharCode::SingleQuote => self.lex_char(),
                CharCode::DoubleQuote => self.lex_text(),
                CharCode::Slash => match self.lex_slash() {
                    Some(token) => token,
                    None => continue,
                },
                CharCode::LPar => match self.lex_lpar() {
                    Some(token) => token,
                    None => continue,
                },
                CharCode::Unknown => {
                    self.cursor.advance();
                    self.report(LexErrorKind::InvalidSymbol, self.token_span());
                    self.make(TokenKind::Invalid)
                },
            };
            return token;
        }
    }

    /// Reports a lexical error covering `span`.
    pub fn report(&self, kind: LexErrorKind, span: Span) {
        DiagnosticBuilder::error(kind.to_string())
            .code(kind.code())
            .span(span)
            .emit(self.handler);
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::at(self.token_start, self.cursor.offset(), self.token_position)
    }

    /// Empty span at the cursor.
    pub(crate) fn here_span(&self) -> Span {
        let offset = self.cursor.offset();
        Span::at(offset, offset, self.cursor.location())
    }

    /// Builds a payload-free token at the current token start.
    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_position)
    }

    /// Builds a token carrying `value` at the current token start.
    pub(crate) fn make_with(&self, kind: TokenKind, value: TokenValue) -> Token {
        Token::with_value(kind, self.token_position, value)
    }

    /// Consumes one character and builds a `kind` token.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make(kind)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte offset in the source.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }
}

/// Yields every token before `Eof`, then `None` forever.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
