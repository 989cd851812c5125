//! Character classification.
//!
//! Every input character maps to one [`CharCode`]. The dispatch loop in the
//! lexer switches on the class, never on raw characters, so the accepted
//! alphabet is defined in exactly one table.

/// Class of an input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharCode {
    /// Space, tab, newline or carriage return
    Space,
    /// ASCII letter
    Letter,
    /// ASCII decimal digit
    Digit,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!`
    Exclamation,
    /// `=`
    Eq,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `(`
    LPar,
    /// `)`
    RPar,
    /// `%`
    Percent,
    /// Any character that starts no token
    Unknown,
}

const ASCII_CODES: [CharCode; 128] = build_table();

const fn build_table() -> [CharCode; 128] {
    let mut table = [CharCode::Unknown; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = match i as u8 {
            b' ' | b'\t' | b'\n' | b'\r' => CharCode::Space,
            b'a'..=b'z' | b'A'..=b'Z' => CharCode::Letter,
            b'0'..=b'9' => CharCode::Digit,
            b'+' => CharCode::Plus,
            b'-' => CharCode::Minus,
            b'*' => CharCode::Times,
            b'/' => CharCode::Slash,
            b'<' => CharCode::Lt,
            b'>' => CharCode::Gt,
            b'!' => CharCode::Exclamation,
            b'=' => CharCode::Eq,
            b',' => CharCode::Comma,
            b'.' => CharCode::Period,
            b':' => CharCode::Colon,
            b';' => CharCode::Semicolon,
            b'\'' => CharCode::SingleQuote,
            b'"' => CharCode::DoubleQuote,
            b'(' => CharCode::LPar,
            b')' => CharCode::RPar,
            b'%' => CharCode::Percent,
            _ => CharCode::Unknown,
        };
        i += 1;
    }
    table
}

impl CharCode {
    /// Classify a character. Non-ASCII characters are [`CharCode::Unknown`].
    ///
    /// ```
    /// use kplc_lex::CharCode;
    ///
    /// assert_eq!(CharCode::of('x'), CharCode::Letter);
    /// assert_eq!(CharCode::of('7'), CharCode::Digit);
    /// assert_eq!(CharCode::of('#'), CharCode::Unknown);
    /// ```
    #[inline]
    pub fn of(c: char) -> CharCode {
        if c.is_ascii() {
            ASCII_CODES[c as usize]
        } else {
            CharCode::Unknown
        }
    }

    /// Returns true for characters that may continue an identifier.
    #[inline]
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, CharCode::Letter | CharCode::Digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r'] {
            assert_eq!(CharCode::of(c), CharCode::Space, "{:?}", c);
        }
        assert_eq!(CharCode::of('\u{0b}'), CharCode::Unknown);
    }

    #[test]
    fn test_letters_and_digits() {
        assert!(('a'..='z').chain('A'..='Z').all(|c| CharCode::of(c) == CharCode::Letter));
        assert!(('0'..='9').all(|c| CharCode::of(c) == CharCode::Digit));
        assert_eq!(CharCode::of('_'), CharCode::Unknown);
    }

    #[test]
    fn test_symbols() {
        let expected = [
            ('+', CharCode::Plus),
            ('-', CharCode::Minus),
            ('*', CharCode::Times),
            ('/', CharCode::Slash),
            ('<', CharCode::Lt),
            ('>', CharCode::Gt),
            ('!', CharCode::Exclamation),
            ('=', CharCode::Eq),
            (',', CharCode::Comma),
            ('.', CharCode::Period),
            (':', CharCode::Colon),
            (';', CharCode::Semicolon),
            ('\'', CharCode::SingleQuote),
            ('"', CharCode::DoubleQuote),
            ('(', CharCode::LPar),
            (')', CharCode::RPar),
            ('%', CharCode::Percent),
        ];
        for (c, code) in expected {
            assert_eq!(CharCode::of(c), code, "{:?}", c);
        }
    }

    #[test]
    fn test_unknown() {
        for c in ['#', '$', '[', ']', '{', '}', '@', '~', '\0', 'é', '字'] {
            assert_eq!(CharCode::of(c), CharCode::Unknown, "{:?}", c);
        }
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(CharCode::Letter.is_alphanumeric());
        assert!(CharCode::Digit.is_alphanumeric());
        assert!(!CharCode::Space.is_alphanumeric());
        assert!(!CharCode::Unknown.is_alphanumeric());
    }
}
