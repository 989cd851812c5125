//! Operator and punctuation lexing.
//!
//! Each recognizer consumes its first character, then looks at one more to
//! pick the longest operator. `/` and `(` may instead open a comment, in
//! which case they return `None` and the dispatch loop starts over.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `*`, `**`
    pub fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            self.make(TokenKind::Pow)
        } else {
            self.make(TokenKind::Times)
        }
    }

    /// Handles: `/`, `//` line comments
    pub fn lex_slash(&mut self) -> Option<Token> {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else {
            Some(self.make(TokenKind::Slash))
        }
    }

    /// Handles: `(`, `(*` block comments
    pub fn lex_lpar(&mut self) -> Option<Token> {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            self.skip_block_comment();
            None
        } else {
            Some(self.make(TokenKind::LPar))
        }
    }

    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::Le)
        } else {
            self.make(TokenKind::Lt)
        }
    }

    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::Ge)
        } else {
            self.make(TokenKind::Gt)
        }
    }

    /// Handles: `!=`
    ///
    /// A `!` not followed by `=` is consumed and reported as
    /// [`LexErrorKind::InvalidSymbol`].
    pub fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::Neq)
        } else {
            self.report(LexErrorKind::InvalidSymbol, self.token_span());
            self.make(TokenKind::Invalid)
        }
    }

    /// Handles: `:`, `:=`
    pub fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::Assign)
        } else {
            self.make(TokenKind::Colon)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;
    use kplc_util::{DiagnosticCode, Handler, Position};

    fn lex_all(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).collect();
        (tokens, handler)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).0.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(kinds(":="), vec![TokenKind::Assign]);
        assert_eq!(kinds("<="), vec![TokenKind::Le]);
        assert_eq!(kinds(">="), vec![TokenKind::Ge]);
        assert_eq!(kinds("!="), vec![TokenKind::Neq]);
        assert_eq!(kinds("**"), vec![TokenKind::Pow]);
    }

    #[test]
    fn test_one_character_fallbacks() {
        assert_eq!(kinds(": x"), vec![TokenKind::Colon, TokenKind::Ident]);
        assert_eq!(kinds("<>"), vec![TokenKind::Lt, TokenKind::Gt]);
        assert_eq!(kinds("* /"), vec![TokenKind::Times, TokenKind::Slash]);
        assert_eq!(kinds("(x)"), vec![TokenKind::LPar, TokenKind::Ident, TokenKind::RPar]);
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(kinds("***"), vec![TokenKind::Pow, TokenKind::Times]);
        assert_eq!(kinds("::="), vec![TokenKind::Colon, TokenKind::Assign]);
        assert_eq!(kinds("<=="), vec![TokenKind::Le, TokenKind::Eq]);
    }

    #[test]
    fn test_assign_position_is_first_character() {
        let (tokens, _) = lex_all("x  := 1");
        assert_eq!(tokens[1].kind(), TokenKind::Assign);
        assert_eq!(tokens[1].position(), Position::new(1, 4));
    }

    #[test]
    fn test_colon_position() {
        let (tokens, _) = lex_all("a : b");
        assert_eq!(tokens[1].position(), Position::new(1, 3));
        assert_eq!(tokens[2].position(), Position::new(1, 5));
    }

    #[test]
    fn test_lone_bang_is_invalid() {
        let (tokens, handler) = lex_all("a ! b");
        assert_eq!(
            tokens.iter().map(Token::kind).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Invalid, TokenKind::Ident]
        );
        assert_eq!(tokens[1].position(), Position::new(1, 3));

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E0004));
    }

    #[test]
    fn test_bang_before_other_symbol_keeps_symbol() {
        assert_eq!(kinds("!<"), vec![TokenKind::Invalid, TokenKind::Lt]);
    }

    #[test]
    fn test_slash_comment_then_token() {
        let (tokens, handler) = lex_all("a / b // c\nd");
        assert_eq!(
            tokens.iter().map(Token::kind).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Slash, TokenKind::Ident, TokenKind::Ident]
        );
        assert_eq!(tokens[3].spelling(), Some("d"));
        assert!(handler.is_empty());
    }
}
