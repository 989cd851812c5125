//! Whitespace and comment skipping.

use crate::charcode::CharCode;
use crate::error::LexErrorKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a run of whitespace.
    pub(crate) fn skip_blank(&mut self) {
        while let Some(c) = self.cursor.current() {
            if CharCode::of(c) != CharCode::Space {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Skips the body of a `(* ... *)` comment; the opener is already consumed.
    ///
    /// The comment ends at the first `*` immediately followed by `)`. Reaching
    /// end of input first reports [`LexErrorKind::EndOfComment`] there.
    pub(crate) fn skip_block_comment(&mut self) {
        loop {
            match self.cursor.current() {
                None => {
                    self.report(LexErrorKind::EndOfComment, self.here_span());
                    return;
                },
                Some('*') if self.cursor.peek() == Some(')') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return;
                },
                Some(_) => self.cursor.advance(),
            }
        }
    }

    /// Skips a line comment body up to, not including, the newline.
    pub(crate) fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.current() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }
}
