//! Diagnostic codes for categorizing scanner errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tools and tests can match on a stable code instead
//! of on message text.
//!
//! # Examples
//!
//! ```
//! use kplc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0004;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 4);
//! assert_eq!(code.as_str(), "E0004");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1);
/// assert_eq!(code, DiagnosticCode::E0001);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERROR CODES
    // =========================================================================

    /// E0001: Block comment not closed before end of input
    pub const E0001: Self = Self::new("E", 1);
    /// E0002: Identifier longer than the spelling limit
    pub const E0002: Self = Self::new("E", 2);
    /// E0003: Malformed character or text constant
    pub const E0003: Self = Self::new("E", 3);
    /// E0004: Character that starts no token
    pub const E0004: Self = Self::new("E", 4);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("E", 12).as_str(), "E0012");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiagnosticCode::E0003), "E0003");
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::E0002),
            "DiagnosticCode(E0002)"
        );
    }

    #[test]
    fn test_lexical_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E0001,
            DiagnosticCode::E0002,
            DiagnosticCode::E0003,
            DiagnosticCode::E0004,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_eq!(a.prefix(), "E");
            assert_eq!(a.number(), i as u32 + 1);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_const_codes() {
        const CODE: DiagnosticCode = DiagnosticCode::E0001;
        assert_eq!(CODE.number(), 1);
    }
}
