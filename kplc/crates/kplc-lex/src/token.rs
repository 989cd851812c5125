//! Token definitions and the keyword table.
//!
//! A [`Token`] pairs a [`TokenKind`] with the position of its first
//! character and an optional payload ([`TokenValue`]). Identifier and
//! literal text is collected in a bounded [`Spelling`].

use std::fmt;
use std::sync::OnceLock;

use kplc_util::Position;
use rustc_hash::FxHashMap;

/// Identifier length limit. A spelling keeps at most `MAX_IDENT_LEN - 1`
/// characters.
pub const MAX_IDENT_LEN: usize = 15;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Malformed input; a diagnostic was reported for it
    Invalid,
    /// Identifier
    Ident,
    /// Unsigned integer literal
    Number,
    /// Character constant `'c'` or text literal `"..."`
    Char,
    /// End of input
    Eof,

    /// `program`
    KwProgram,
    /// `const`
    KwConst,
    /// `type`
    KwType,
    /// `var`
    KwVar,
    /// `integer`
    KwInteger,
    /// `char`
    KwChar,
    /// `array`
    KwArray,
    /// `of`
    KwOf,
    /// `function`
    KwFunction,
    /// `procedure`
    KwProcedure,
    /// `begin`
    KwBegin,
    /// `end`
    KwEnd,
    /// `call`
    KwCall,
    /// `if`
    KwIf,
    /// `then`
    KwThen,
    /// `else`
    KwElse,
    /// `while`
    KwWhile,
    /// `do`
    KwDo,
    /// `for`
    KwFor,
    /// `to`
    KwTo,
    /// `repeat`
    KwRepeat,
    /// `string`
    KwString,
    /// `byte`
    KwByte,
    /// `until`
    KwUntil,

    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Period,
    /// `,`
    Comma,
    /// `:=`
    Assign,
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Slash,
    /// `(`
    LPar,
    /// `)`
    RPar,
    /// `%`
    Mod,
    /// `**`
    Pow,
}

impl TokenKind {
    /// Stable name used in token dumps, e.g. `TK_IDENT`, `KW_BEGIN`, `SB_ASSIGN`.
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Invalid => "TK_NONE",
            Ident => "TK_IDENT",
            Number => "TK_NUMBER",
            Char => "TK_CHAR",
            Eof => "TK_EOF",

            KwProgram => "KW_PROGRAM",
            KwConst => "KW_CONST",
            KwType => "KW_TYPE",
            KwVar => "KW_VAR",
            KwInteger => "KW_INTEGER",
            KwChar => "KW_CHAR",
            KwArray => "KW_ARRAY",
            KwOf => "KW_OF",
            KwFunction => "KW_FUNCTION",
            KwProcedure => "KW_PROCEDURE",
            KwBegin => "KW_BEGIN",
            KwEnd => "KW_END",
            KwCall => "KW_CALL",
            KwIf => "KW_IF",
            KwThen => "KW_THEN",
            KwElse => "KW_ELSE",
            KwWhile => "KW_WHILE",
            KwDo => "KW_DO",
            KwFor => "KW_FOR",
            KwTo => "KW_TO",
            KwRepeat => "KW_REPEAT",
            KwString => "KW_STRING",
            KwByte => "KW_BYTE",
            KwUntil => "KW_UNTIL",

            Semicolon => "SB_SEMICOLON",
            Colon => "SB_COLON",
            Period => "SB_PERIOD",
            Comma => "SB_COMMA",
            Assign => "SB_ASSIGN",
            Eq => "SB_EQ",
            Neq => "SB_NEQ",
            Lt => "SB_LT",
            Le => "SB_LE",
            Gt => "SB_GT",
            Ge => "SB_GE",
            Plus => "SB_PLUS",
            Minus => "SB_MINUS",
            Times => "SB_TIMES",
            Slash => "SB_SLASH",
            LPar => "SB_LPAR",
            RPar => "SB_RPAR",
            Mod => "SB_MOD",
            Pow => "SB_POW",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words and their kinds. Matching is case-sensitive.
pub const KEYWORDS: [(&str, TokenKind); 24] = [
    ("program", TokenKind::KwProgram),
    ("const", TokenKind::KwConst),
    ("type", TokenKind::KwType),
    ("var", TokenKind::KwVar),
    ("integer", TokenKind::KwInteger),
    ("char", TokenKind::KwChar),
    ("array", TokenKind::KwArray),
    ("of", TokenKind::KwOf),
    ("function", TokenKind::KwFunction),
    ("procedure", TokenKind::KwProcedure),
    ("begin", TokenKind::KwBegin),
    ("end", TokenKind::KwEnd),
    ("call", TokenKind::KwCall),
    ("if", TokenKind::KwIf),
    ("then", TokenKind::KwThen),
    ("else", TokenKind::KwElse),
    ("while", TokenKind::KwWhile),
    ("do", TokenKind::KwDo),
    ("for", TokenKind::KwFor),
    ("to", TokenKind::KwTo),
    ("repeat", TokenKind::KwRepeat),
    ("string", TokenKind::KwString),
    ("byte", TokenKind::KwByte),
    ("until", TokenKind::KwUntil),
];

/// Look up a finished identifier spelling in the keyword table.
///
/// ```
/// use kplc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("begin"), Some(TokenKind::KwBegin));
/// assert_eq!(keyword_from_ident("Begin"), None);
/// assert_eq!(keyword_from_ident("counter"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE
        .get_or_init(|| KEYWORDS.iter().copied().collect())
        .get(ident)
        .copied()
}

/// Bounded text buffer for identifier and literal spellings.
///
/// Stores at most [`Spelling::CAPACITY`] characters. Characters pushed
/// beyond that are counted, not stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spelling {
    text: String,
    stored: usize,
    dropped: usize,
}

impl Spelling {
    /// Maximum number of characters kept.
    pub const CAPACITY: usize = MAX_IDENT_LEN - 1;

    /// Create an empty spelling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character, or count it as dropped when full.
    pub fn push(&mut self, c: char) {
        if self.stored < Self::CAPACITY {
            self.text.push(c);
            self.stored += 1;
        } else {
            self.dropped += 1;
        }
    }

    /// The stored characters.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if any character did not fit.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// Consume the buffer, returning the stored text.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Payload of a token. Which variant is meaningful follows from the kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TokenValue {
    /// No payload
    #[default]
    Empty,
    /// Identifier or character/text spelling
    Spelling(String),
    /// Integer value
    Number(i32),
}

/// A lexical token.
///
/// The position is that of the token's first character and is fixed at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    position: Position,
    value: TokenValue,
}

impl Token {
    /// Create a token without a payload.
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            position,
            value: TokenValue::Empty,
        }
    }

    /// Create a token carrying `value`.
    pub fn with_value(kind: TokenKind, position: Position, value: TokenValue) -> Self {
        Self {
            kind,
            position,
            value,
        }
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Position of the first character.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Line of the first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// Column of the first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// The raw payload.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Spelling of an identifier or character/text token.
    pub fn spelling(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Spelling(s) => Some(s),
            _ => None,
        }
    }

    /// Value of a number token.
    pub fn number(&self) -> Option<i32> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Formats the kind with its payload: `TK_IDENT(x)`, `TK_NUMBER(42)`,
/// `TK_CHAR('a')`, `SB_ASSIGN`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.value) {
            (TokenKind::Ident, TokenValue::Spelling(s)) => write!(f, "{}({})", self.kind, s),
            (TokenKind::Char, TokenValue::Spelling(s)) => write!(f, "{}('{}')", self.kind, s),
            (TokenKind::Number, TokenValue::Number(n)) => write!(f, "{}({})", self.kind, n),
            (kind, _) => write!(f, "{}", kind),
        }
    }
}
