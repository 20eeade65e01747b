//! Error types for JSON parsing, serialization, and tree access.
//!
//! There are two failure families the crate distinguishes:
//!
//! - **Syntax errors**: malformed input rejected by the tokenizer or parser,
//!   always carrying a 1-based line and column locating the offending token or
//!   character.
//! - **Type mismatches**: a typed accessor on the value tree was asked for a
//!   kind the stored value does not have. These never occur during parsing.
//!
//! I/O failures from a reader (and invalid UTF-8 from byte input) are a third,
//! separately propagated kind so callers can tell a broken source apart from a
//! broken document.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{from_str, Error};
//!
//! let result = from_str("{\"a\": }");
//! match result {
//!     Err(Error::Syntax { line, col, .. }) => {
//!         assert_eq!(line, 1);
//!         assert_eq!(col, 7);
//!     }
//!     other => panic!("expected syntax error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// All failures the crate can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// I/O failure while reading input, or input that was not valid UTF-8.
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON, located at a 1-based line and column.
    #[error("{msg} at line {line}, column {col}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// A typed accessor found a value of the wrong kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl Error {
    /// Creates a syntax error at the given 1-based position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tree::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected character '&'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.into(),
        }
    }

    /// Creates a type-mismatch error for a failed typed access.
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    /// Creates an I/O error from any displayable source.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for [`Error::Syntax`].
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// Returns the 1-based (line, column) of a syntax error.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
