//! kplc-lex - Lexical Scanner for the KPL Teaching Language
//!
//! This crate turns KPL source text into a stream of classified tokens:
//! identifiers, keywords, integer literals, character and text literals,
//! operators and delimiters, and an end-of-input marker. Lexical errors are
//! reported as diagnostics and never stop the scan.
//!
//! # Example Usage
//!
//! ```
//! use kplc_util::Handler;
//! use kplc_lex::{Lexer, TokenKind};
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("x := 42;", &handler);
//!
//! assert_eq!(lexer.next_token().spelling(), Some("x"));
//! assert_eq!(lexer.next_token().kind(), TokenKind::Assign);
//! assert_eq!(lexer.next_token().number(), Some(42));
//! assert_eq!(lexer.next_token().kind(), TokenKind::Semicolon);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Eof);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Character cursor with line/column tracking
//! - [`charcode`] - Character classification table
//! - [`token`] - Token kinds, tokens, spellings and the keyword table
//! - [`error`] - Lexical error kinds
//! - [`lexer`] - The scanner itself
//!
//! # Tokens
//!
//! **Keywords** (24, case-sensitive): `program const type var integer char
//! array of function procedure begin end call if then else while do for to
//! repeat string byte until`
//!
//! **Identifiers**: a letter followed by letters and digits. Only the first
//! 14 characters are kept.
//!
//! **Literals**: unsigned decimal integers, `'c'` character constants and
//! `"text"` literals.
//!
//! **Symbols**: `; : . , := = != < <= > >= + - * / ( ) % **`
//!
//! **Comments**: `(* ... *)` and `// ...` to end of line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charcode;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use charcode::CharCode;
pub use cursor::Cursor;
pub use error::LexErrorKind;
pub use lexer::Lexer;
pub use token::{
    keyword_from_ident, Spelling, Token, TokenKind, TokenValue, KEYWORDS, MAX_IDENT_LEN,
};
