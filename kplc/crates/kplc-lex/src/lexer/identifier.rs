//! Identifier and keyword lexing.

use crate::charcode::CharCode;
use crate::error::LexErrorKind;
use crate::token::{keyword_from_ident, Spelling, Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of letters and digits. The spelling keeps
    /// the first [`Spelling::CAPACITY`] characters; if more were consumed,
    /// [`LexErrorKind::IdentTooLong`] is reported at the token start. A
    /// spelling found in the keyword table yields that keyword instead.
    pub fn lex_identifier(&mut self) -> Token {
        let mut spelling = Spelling::new();
        while let Some(c) = self.cursor.current() {
            if !CharCode::of(c).is_alphanumeric() {
                break;
            }
            spelling.push(c);
            self.cursor.advance();
        }

        if spelling.is_truncated() {
            self.report(LexErrorKind::IdentTooLong, self.token_span());
        }

        match keyword_from_ident(spelling.as_str()) {
            Some(keyword) => self.make(keyword),
            None => self.make_with(
                TokenKind::Ident,
                TokenValue::Spelling(spelling.into_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, KEYWORDS};
    use crate::Lexer;
    use kplc_util::{DiagnosticCode, Handler, Position};

    fn lex_ident(source: &str) -> (Token, Handler) {
        let handler = Handler::new();
        let token = Lexer::new(source, &handler).lex_identifier();
        (token, handler)
    }

    #[test]
    fn test_simple_identifier() {
        let (token, handler) = lex_ident("counter");
        assert_eq!(token.kind(), TokenKind::Ident);
        assert_eq!(token.spelling(), Some("counter"));
        assert!(handler.is_empty());
    }

    #[test]
    fn test_identifier_with_digits() {
        let (token, _) = lex_ident("x1y2 rest");
        assert_eq!(token.spelling(), Some("x1y2"));
    }

    #[test]
    fn test_identifier_stops_at_symbol() {
        let (token, _) = lex_ident("abc:=1");
        assert_eq!(token.spelling(), Some("abc"));
    }

    #[test]
    fn test_every_keyword() {
        for (spelling, kind) in KEYWORDS {
            let (token, _) = lex_ident(spelling);
            assert_eq!(token.kind(), kind, "{}", spelling);
            assert_eq!(token.spelling(), None);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let (token, _) = lex_ident("beginning");
        assert_eq!(token.kind(), TokenKind::Ident);
        let (token, _) = lex_ident("End");
        assert_eq!(token.kind(), TokenKind::Ident);
    }

    #[test]
    fn test_fourteen_characters_fit() {
        let (token, handler) = lex_ident("abcdefghijklmn");
        assert_eq!(token.spelling(), Some("abcdefghijklmn"));
        assert!(handler.is_empty());
    }

    #[test]
    fn test_too_long_identifier_is_truncated() {
        let (token, handler) = lex_ident("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(token.kind(), TokenKind::Ident);
        assert_eq!(token.spelling(), Some("abcdefghijklmn"));

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E0002));
        assert_eq!(diags[0].span.position(), Position::new(1, 1));
        assert_eq!(diags[0].span.len(), 26);
    }
}
