//! Lexical tokens produced by the tokenizer.

/// The kind of a lexical token. Number tokens carry their converted value;
/// classification (integer vs float) happens in the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    True,
    False,
    Null,
    String(String),
    Integer(i64),
    Float(f64),
}

impl TokenKind {
    /// Short description used in parser error messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::String(_) => "string",
            TokenKind::Integer(_) | TokenKind::Float(_) => "number",
        }
    }
}

/// A token plus the 1-based line/column of its first character.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}
