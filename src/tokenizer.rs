//! The character-level tokenizer (lexer).
//!
//! Converts the input character stream into [`Token`]s one at a time, tracking
//! 1-based line/column for diagnostics. Operates strictly left to right with
//! one character of lookahead. Not part of the public API.

use crate::token::{Token, TokenKind};
use crate::{Error, Result};

/// Characters a number token may greedily consume after its first character.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    /// Byte offset of the next character.
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Line of the next unread character.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Column of the next unread character.
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn eof(&self) -> Error {
        Error::syntax(self.line, self.column, "unexpected end of input")
    }

    /// Produces the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);
        let ch = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };

        let kind = match ch {
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            '{' => self.single(TokenKind::LeftBrace),
            '[' => self.single(TokenKind::LeftBracket),
            '}' => self.single(TokenKind::RightBrace),
            ']' => self.single(TokenKind::RightBracket),
            't' => self.lex_keyword("true", TokenKind::True, line, column)?,
            'f' => self.lex_keyword("false", TokenKind::False, line, column)?,
            'n' => self.lex_keyword("null", TokenKind::Null, line, column)?,
            '"' => self.lex_string()?,
            c if c.is_ascii_digit() || c == '-' => self.lex_number(line, column)?,
            c => {
                return Err(Error::syntax(
                    line,
                    column,
                    format!("unexpected character '{}'", c),
                ))
            }
        };

        Ok(Some(Token { kind, line, column }))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.next_char();
        kind
    }

    fn lex_keyword(
        &mut self,
        keyword: &'static str,
        kind: TokenKind,
        line: usize,
        column: usize,
    ) -> Result<TokenKind> {
        for expected in keyword.chars() {
            match self.next_char() {
                Some(c) if c == expected => {}
                Some(_) => {
                    return Err(Error::syntax(
                        line,
                        column,
                        format!("expected keyword '{}'", keyword),
                    ))
                }
                None => return Err(self.eof()),
            }
        }
        Ok(kind)
    }

    fn lex_string(&mut self) -> Result<TokenKind> {
        self.next_char(); // opening quote
        let mut text = String::new();

        loop {
            let (line, column) = (self.line, self.column);
            match self.next_char() {
                None => return Err(self.eof()),
                Some('"') => return Ok(TokenKind::String(text)),
                Some('\\') => text.push(self.lex_escape()?),
                Some(c) if (c as u32) < 0x20 => {
                    return Err(Error::syntax(
                        line,
                        column,
                        "unescaped control character in string",
                    ))
                }
                Some(c) => text.push(c),
            }
        }
    }

    fn lex_escape(&mut self) -> Result<char> {
        let (line, column) = (self.line, self.column);
        match self.next_char() {
            None => Err(self.eof()),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.lex_unicode_escape(),
            Some(c) => Err(Error::syntax(
                line,
                column,
                format!("invalid escape sequence '\\{}'", c),
            )),
        }
    }

    /// Decodes `\uXXXX`: exactly four hex digits naming one BMP code unit.
    /// Surrogate pairs are not combined; a code unit in the surrogate range
    /// cannot live in a Rust string and becomes U+FFFD.
    fn lex_unicode_escape(&mut self) -> Result<char> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let (line, column) = (self.line, self.column);
            let digit = match self.next_char() {
                None => return Err(self.eof()),
                Some(c) => c.to_digit(16).ok_or_else(|| {
                    Error::syntax(line, column, "expected four hex digits in unicode escape")
                })?,
            };
            code = (code << 4) | digit;
        }
        Ok(char::from_u32(code).unwrap_or('\u{FFFD}'))
    }

    /// Greedily captures a maximal run of number characters, then classifies
    /// the text against the integer and float grammars. Integer text that
    /// overflows i64 converts to a float instead of failing.
    fn lex_number(&mut self, line: usize, column: usize) -> Result<TokenKind> {
        let start = self.position;
        self.next_char(); // leading digit or '-'
        while let Some(c) = self.peek_char() {
            if is_number_char(c) {
                self.next_char();
            } else {
                break;
            }
        }
        let text = &self.input[start..self.position];

        let invalid = || Error::syntax(line, column, format!("invalid number '{}'", text));

        if is_integer_literal(text) {
            match text.parse::<i64>() {
                Ok(i) => Ok(TokenKind::Integer(i)),
                // i64 overflow; degrade to the float representation.
                Err(_) => {
                    let f: f64 = text.parse().map_err(|_| invalid())?;
                    if f.is_finite() {
                        Ok(TokenKind::Float(f))
                    } else {
                        Err(Error::syntax(line, column, "number out of range"))
                    }
                }
            }
        } else if is_float_literal(text) {
            let f: f64 = text.parse().map_err(|_| invalid())?;
            if f.is_finite() {
                Ok(TokenKind::Float(f))
            } else {
                Err(Error::syntax(line, column, "number out of range"))
            }
        } else {
            Err(invalid())
        }
    }
}

/// Integer grammar: optional `-`, then `0` or a nonzero digit followed by
/// digits. No leading zeros, no fraction, no exponent.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        ds => ds.iter().all(u8::is_ascii_digit),
    }
}

/// Float grammar: integer part as above, optionally `.` and one-or-more
/// digits, optionally `e`/`E`, optional sign, and exponent digits under the
/// same leading-zero rule as the integer part.
fn is_float_literal(text: &str) -> bool {
    let bytes = text.strip_prefix('-').unwrap_or(text).as_bytes();
    let mut i = 0;

    match bytes.first() {
        Some(b'0') => i = 1,
        Some(b) if b.is_ascii_digit() => {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        _ => return false,
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == fraction_start {
            return false;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        match bytes.get(i) {
            Some(b'0') => i += 1,
            Some(b) if b.is_ascii_digit() => {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            _ => return false,
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_kinds(input: &str) -> Result<Vec<TokenKind>> {
        let mut tokenizer = Tokenizer::new(input);
        let mut kinds = Vec::new();
        while let Some(token) = tokenizer.next_token()? {
            kinds.push(token.kind);
        }
        Ok(kinds)
    }

    fn first_error(input: &str) -> Error {
        collect_kinds(input).unwrap_err()
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            collect_kinds("{}[],:").unwrap(),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Comma,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(
            collect_kinds(" true\tfalse\r\nnull ").unwrap(),
            vec![TokenKind::True, TokenKind::False, TokenKind::Null]
        );
    }

    #[test]
    fn keyword_errors() {
        assert_eq!(
            first_error("tru "),
            Error::syntax(1, 1, "expected keyword 'true'")
        );
        assert_eq!(
            first_error("nulL"),
            Error::syntax(1, 1, "expected keyword 'null'")
        );
        // EOF mid-keyword is reported as end of input, not a bad keyword.
        assert_eq!(first_error("fal"), Error::syntax(1, 4, "unexpected end of input"));
    }

    #[test]
    fn strings_and_escapes() {
        assert_eq!(
            collect_kinds(r#""hello""#).unwrap(),
            vec![TokenKind::String("hello".to_string())]
        );
        assert_eq!(
            collect_kinds(r#""\" \\ \/ \b \f \n \r \t""#).unwrap(),
            vec![TokenKind::String(
                "\" \\ / \u{0008} \u{000C} \n \r \t".to_string()
            )]
        );
        assert_eq!(
            collect_kinds(r#""Aé☃""#).unwrap(),
            vec![TokenKind::String("Aé☃".to_string())]
        );
    }

    #[test]
    fn surrogate_escapes_are_not_combined() {
        // Each \uXXXX yields one unit; lone surrogates become U+FFFD.
        assert_eq!(
            collect_kinds(r#""\uD83D\uDE00""#).unwrap(),
            vec![TokenKind::String("\u{FFFD}\u{FFFD}".to_string())]
        );
    }

    #[test]
    fn string_errors() {
        assert_eq!(
            first_error("\"abc"),
            Error::syntax(1, 5, "unexpected end of input")
        );
        assert_eq!(
            first_error("\"a\nb\""),
            Error::syntax(1, 3, "unescaped control character in string")
        );
        assert_eq!(
            first_error(r#""\z""#),
            Error::syntax(1, 3, "invalid escape sequence '\\z'")
        );
        assert_eq!(
            first_error(r#""\u12g4""#),
            Error::syntax(1, 6, "expected four hex digits in unicode escape")
        );
        assert_eq!(
            first_error(r#""\u123"#),
            Error::syntax(1, 7, "unexpected end of input")
        );
    }

    #[test]
    fn integers() {
        assert_eq!(collect_kinds("0").unwrap(), vec![TokenKind::Integer(0)]);
        assert_eq!(collect_kinds("-0").unwrap(), vec![TokenKind::Integer(0)]);
        assert_eq!(
            collect_kinds("123 -456").unwrap(),
            vec![TokenKind::Integer(123), TokenKind::Integer(-456)]
        );
        assert_eq!(
            collect_kinds("9223372036854775807").unwrap(),
            vec![TokenKind::Integer(i64::MAX)]
        );
        assert_eq!(
            collect_kinds("-9223372036854775808").unwrap(),
            vec![TokenKind::Integer(i64::MIN)]
        );
    }

    #[test]
    fn integer_overflow_degrades_to_float() {
        assert_eq!(
            collect_kinds("9223372036854775808").unwrap(),
            vec![TokenKind::Float(9.223372036854776e18)]
        );
    }

    #[test]
    fn floats() {
        assert_eq!(collect_kinds("0.5").unwrap(), vec![TokenKind::Float(0.5)]);
        assert_eq!(
            collect_kinds("-3.25 1e10 2E-3 1.5e+2").unwrap(),
            vec![
                TokenKind::Float(-3.25),
                TokenKind::Float(1e10),
                TokenKind::Float(2e-3),
                TokenKind::Float(150.0),
            ]
        );
    }

    #[test]
    fn invalid_numbers() {
        for text in [
            "01", "-01", "1.", ".5", "1.e3", "1e", "1e+", "--1", "1.2.3", "1e0.5", "1e007", "-",
        ] {
            let err = first_error(text);
            assert!(
                matches!(err, Error::Syntax { .. }),
                "{:?} accepted for {:?}",
                err,
                text
            );
        }
        assert_eq!(first_error("01"), Error::syntax(1, 1, "invalid number '01'"));
    }

    #[test]
    fn number_beyond_f64_range_is_rejected() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(first_error(&huge), Error::syntax(1, 1, "number out of range"));
        assert_eq!(first_error("1e400"), Error::syntax(1, 1, "number out of range"));
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            first_error("&"),
            Error::syntax(1, 1, "unexpected character '&'")
        );
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let mut tokenizer = Tokenizer::new("{\n  \"a\": 12,\n  \"b\": true}");
        let mut positions = Vec::new();
        while let Some(token) = tokenizer.next_token().unwrap() {
            positions.push((token.line, token.column));
        }
        assert_eq!(
            positions,
            vec![
                (1, 1), // {
                (2, 3), // "a"
                (2, 6), // :
                (2, 8), // 12
                (2, 10), // ,
                (3, 3), // "b"
                (3, 6), // :
                (3, 8), // true
                (3, 12), // }
            ]
        );
    }

    #[test]
    fn grammar_classifiers() {
        assert!(is_integer_literal("0"));
        assert!(is_integer_literal("-10"));
        assert!(!is_integer_literal("00"));
        assert!(!is_integer_literal("1.0"));
        assert!(!is_integer_literal(""));

        assert!(is_float_literal("0.5"));
        assert!(is_float_literal("1e10"));
        assert!(is_float_literal("-2.5E-3"));
        assert!(is_float_literal("10"));
        assert!(!is_float_literal("1."));
        assert!(!is_float_literal("e5"));
        assert!(!is_float_literal("1e007"));
        assert!(!is_float_literal("01.5"));
    }
}
