//! Integer literal lexing.

use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an unsigned decimal integer.
    ///
    /// Consumes the maximal run of digits. Values past `i32::MAX` wrap
    /// around in two's complement; no error is reported.
    pub fn lex_number(&mut self) -> Token {
        let mut value: i32 = 0;
        while let Some(digit) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(digit as i32);
            self.cursor.advance();
        }

        self.make_with(TokenKind::Number, TokenValue::Number(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use kplc_util::Handler;

    fn lex_num(source: &str) -> i32 {
        let handler = Handler::new();
        let token = Lexer::new(source, &handler).lex_number();
        assert_eq!(token.kind(), TokenKind::Number);
        assert!(handler.is_empty());
        token.number().unwrap()
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(lex_num("0"), 0);
        assert_eq!(lex_num("7"), 7);
    }

    #[test]
    fn test_multi_digit() {
        assert_eq!(lex_num("12345"), 12345);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(lex_num("042"), 42);
        assert_eq!(lex_num("0000"), 0);
    }

    #[test]
    fn test_stops_at_letter() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("12ab", &handler);
        assert_eq!(lexer.next_token().number(), Some(12));
        assert_eq!(lexer.next_token().spelling(), Some("ab"));
    }

    #[test]
    fn test_max_value() {
        assert_eq!(lex_num("2147483647"), i32::MAX);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(lex_num("2147483648"), i32::MIN);
        assert_eq!(lex_num("4294967296"), 0);
    }
}
