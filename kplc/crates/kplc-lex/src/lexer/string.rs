//! Character constant and text literal lexing.
//!
//! Both `'c'` and `"text"` produce [`TokenKind::Char`] tokens; the text
//! form has no escape sequences.

use crate::error::LexErrorKind;
use crate::token::{Spelling, Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single-quoted character constant.
    ///
    /// Any character, including `'`, may appear between the quotes. A
    /// missing character or closing quote reports
    /// [`LexErrorKind::InvalidCharConstant`] at the opening quote; the
    /// character after the constant's body is left unconsumed.
    pub fn lex_char(&mut self) -> Token {
        self.cursor.advance();

        let Some(c) = self.cursor.current() else {
            return self.invalid_constant();
        };
        self.cursor.advance();

        if !self.cursor.match_char('\'') {
            return self.invalid_constant();
        }

        self.make_with(TokenKind::Char, TokenValue::Spelling(c.to_string()))
    }

    /// Lexes a double-quoted text literal.
    ///
    /// Text longer than the spelling limit is truncated without a report.
    /// End of input before the closing quote reports
    /// [`LexErrorKind::InvalidCharConstant`] at the opening quote.
    pub fn lex_text(&mut self) -> Token {
        self.cursor.advance();

        let mut spelling = Spelling::new();
        loop {
            match self.cursor.current() {
                None => return self.invalid_constant(),
                Some('"') => {
                    self.cursor.advance();
                    break;
                },
                Some(c) => {
                    spelling.push(c);
                    self.cursor.advance();
                },
            }
        }

        self.make_with(TokenKind::Char, TokenValue::Spelling(spelling.into_string()))
    }

    fn invalid_constant(&self) -> Token {
        self.report(LexErrorKind::InvalidCharConstant, self.token_span());
        self.make(TokenKind::Invalid)
    }
}
