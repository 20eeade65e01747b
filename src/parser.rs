//! Recursive-descent parser building a [`JsonValue`] tree from tokens.
//!
//! The parser pulls tokens from the tokenizer one at a time and recurses into
//! objects and arrays. It is fail-fast: the first syntax error aborts the
//! whole parse and any partially built tree is discarded. Parsing stops once
//! the top-level value is closed; trailing content is left for the caller to
//! police.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::Parser;
//!
//! let doc = Parser::new(r#"{"items": [1, 2.5, null]}"#).parse().unwrap();
//! let items = doc.try_object().unwrap().get_array("items").unwrap();
//! assert_eq!(items.len(), 3);
//! ```

use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;
use crate::{DuplicateKeys, Error, JsonArray, JsonMap, JsonValue, Number, ParseOptions, Result};

/// A single-use recursive-descent JSON parser.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options (duplicate keys rejected).
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a parser with explicit options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            tokens: Tokenizer::new(input),
            options,
        }
    }

    /// Parses one top-level value: an object, an array, or a single literal
    /// standing alone as the whole document.
    pub fn parse(mut self) -> Result<JsonValue> {
        let token = self.require_token()?;
        self.parse_value(token)
    }

    fn require_token(&mut self) -> Result<Token> {
        self.tokens.next_token()?.ok_or_else(|| {
            Error::syntax(
                self.tokens.line(),
                self.tokens.column(),
                "unexpected end of input",
            )
        })
    }

    fn parse_value(&mut self, token: Token) -> Result<JsonValue> {
        match token.kind {
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::String(s) => Ok(JsonValue::String(s)),
            TokenKind::Integer(i) => Ok(JsonValue::Number(Number::Integer(i))),
            TokenKind::Float(f) => Ok(JsonValue::Number(Number::Float(f))),
            TokenKind::True => Ok(JsonValue::Bool(true)),
            TokenKind::False => Ok(JsonValue::Bool(false)),
            TokenKind::Null => Ok(JsonValue::Null),
            other => Err(Error::syntax(
                token.line,
                token.column,
                format!("unexpected token {}", other.describe()),
            )),
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        let map = JsonMap::new();

        let mut token = self.require_token()?;
        if token.kind == TokenKind::RightBrace {
            return Ok(JsonValue::Object(map));
        }

        loop {
            let (key, key_line, key_column) = match token.kind {
                TokenKind::String(s) => (s, token.line, token.column),
                other => {
                    return Err(Error::syntax(
                        token.line,
                        token.column,
                        format!("expected string key instead of {}", other.describe()),
                    ))
                }
            };

            let colon = self.require_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(Error::syntax(
                    colon.line,
                    colon.column,
                    format!("expected ':' instead of {}", colon.kind.describe()),
                ));
            }

            let value_token = self.require_token()?;
            let value = self.parse_value(value_token)?;

            if self.options.duplicate_keys == DuplicateKeys::Reject && map.contains_key(&key) {
                return Err(Error::syntax(
                    key_line,
                    key_column,
                    format!("duplicate key \"{}\"", key),
                ));
            }
            // Overwrite policy: last value wins, key stays at its first
            // insertion position.
            map.insert(key, value);

            let separator = self.require_token()?;
            match separator.kind {
                TokenKind::RightBrace => return Ok(JsonValue::Object(map)),
                TokenKind::Comma => token = self.require_token()?,
                other => {
                    return Err(Error::syntax(
                        separator.line,
                        separator.column,
                        format!("expected ',' or '}}' instead of {}", other.describe()),
                    ))
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        let array = JsonArray::new();

        let mut token = self.require_token()?;
        if token.kind == TokenKind::RightBracket {
            return Ok(JsonValue::Array(array));
        }

        loop {
            let value = self.parse_value(token)?;
            array.push(value);

            let separator = self.require_token()?;
            match separator.kind {
                TokenKind::RightBracket => return Ok(JsonValue::Array(array)),
                TokenKind::Comma => token = self.require_token()?,
                other => {
                    return Err(Error::syntax(
                        separator.line,
                        separator.column,
                        format!("expected ',' or ']' instead of {}", other.describe()),
                    ))
                }
            }
        }
    }
}
