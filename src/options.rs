//! Configuration for parsing and serialization.
//!
//! - [`ParseOptions`] / [`DuplicateKeys`]: how the parser treats a repeated
//!   object key.
//! - [`Style`]: the three serialization layouts.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{from_str_with_options, to_string_styled, ParseOptions, Style};
//!
//! let options = ParseOptions::new().overwrite_duplicate_keys();
//! let doc = from_str_with_options(r#"{"a":1,"a":2}"#, options).unwrap();
//! assert_eq!(to_string_styled(&doc, Style::Spaced), r#"{"a": 2}"#);
//! ```

/// Policy for a repeated key inside one object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// A repeated key is a syntax error, located at its second occurrence.
    #[default]
    Reject,
    /// The last value wins; the key keeps its first insertion position.
    Overwrite,
}

/// Parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub duplicate_keys: DuplicateKeys,
}

impl ParseOptions {
    /// Default options: duplicate keys are rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes repeated object keys replace the earlier value.
    #[must_use]
    pub fn overwrite_duplicate_keys(mut self) -> Self {
        self.duplicate_keys = DuplicateKeys::Overwrite;
        self
    }

    /// Makes repeated object keys a syntax error (the default).
    #[must_use]
    pub fn reject_duplicate_keys(mut self) -> Self {
        self.duplicate_keys = DuplicateKeys::Reject;
        self
    }
}

/// Serialization layout.
///
/// Empty containers render as `[]` / `{}` in every style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Minimal output, no whitespace: `{"a":1,"b":[1,2]}`.
    #[default]
    Compact,
    /// Single line with one space after `,` and `:`: `{"a": 1, "b": [1, 2]}`.
    Spaced,
    /// Two-space indent per nesting level, one entry per line.
    Indented,
}
