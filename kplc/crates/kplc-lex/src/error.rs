//! Lexical error kinds.

use kplc_util::DiagnosticCode;
use thiserror::Error;

/// Kinds of lexical error. None of them stops the scan.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Block comment still open at end of input
    #[error("end of comment expected")]
    EndOfComment,

    /// Identifier longer than the spelling limit
    #[error("identifier too long")]
    IdentTooLong,

    /// Malformed `'c'` constant or unterminated `"..."` literal
    #[error("invalid character constant")]
    InvalidCharConstant,

    /// Character that starts no token, or a lone `!`
    #[error("invalid symbol")]
    InvalidSymbol,
}

impl LexErrorKind {
    /// Diagnostic code reported for this kind.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::EndOfComment => DiagnosticCode::E0001,
            LexErrorKind::IdentTooLong => DiagnosticCode::E0002,
            LexErrorKind::InvalidCharConstant => DiagnosticCode::E0003,
            LexErrorKind::InvalidSymbol => DiagnosticCode::E0004,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LexErrorKind::EndOfComment.to_string(), "end of comment expected");
        assert_eq!(LexErrorKind::IdentTooLong.to_string(), "identifier too long");
        assert_eq!(
            LexErrorKind::InvalidCharConstant.to_string(),
            "invalid character constant"
        );
        assert_eq!(LexErrorKind::InvalidSymbol.to_string(), "invalid symbol");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexErrorKind::EndOfComment.code().as_str(), "E0001");
        assert_eq!(LexErrorKind::IdentTooLong.code().as_str(), "E0002");
        assert_eq!(LexErrorKind::InvalidCharConstant.code().as_str(), "E0003");
        assert_eq!(LexErrorKind::InvalidSymbol.code().as_str(), "E0004");
    }
}
