//! # json_tree
//!
//! A strict RFC 8259-style JSON parser and styled serializer built on an
//! ordered, shared document tree.
//!
//! ## What it does
//!
//! `json_tree` turns JSON text into a [`JsonValue`] tree and renders a tree
//! back to text in three layouts: compact, spaced, and indented. It accepts
//! strict JSON only: no comments, no trailing commas, no JSON5 extensions,
//! and no partial or streaming documents.
//!
//! ## Key Features
//!
//! - **Strict grammar**: RFC 8259-style number and string rules, with every
//!   rejection located by 1-based line and column
//! - **Integer/float distinction**: `1` and `1.0` are different kinds;
//!   integer literals that overflow `i64` degrade gracefully to floats
//! - **Ordered objects**: [`JsonMap`] keeps insertion order for serialization
//!   while comparing order-independently
//! - **Configurable duplicate keys**: reject (default) or last-value-wins
//! - **Cycle-safe printing**: a container holding itself renders as
//!   `(this array)` / `(this object)` instead of recursing
//! - **Serde interop**: [`JsonValue`] implements `Serialize` and
//!   `Deserialize`
//!
//! ## Quick Start
//!
//! ```rust
//! use json_tree::{from_str, to_string, to_string_pretty};
//!
//! let doc = from_str(r#"{"name": "Alice", "scores": [9.5, 8.0]}"#).unwrap();
//!
//! let map = doc.try_object().unwrap();
//! assert_eq!(map.get_str("name").unwrap(), "Alice");
//! assert_eq!(map.get_array("scores").unwrap().len(), 2);
//!
//! assert_eq!(to_string(&doc), r#"{"name":"Alice","scores":[9.5,8.0]}"#);
//! assert_eq!(
//!     to_string_pretty(&doc),
//!     "{\n  \"name\": \"Alice\",\n  \"scores\": [\n    9.5,\n    8.0\n  ]\n}"
//! );
//! ```
//!
//! ## Building Trees
//!
//! ```rust
//! use json_tree::{json, to_string};
//!
//! let doc = json!({
//!     "id": 7,
//!     "tags": ["a", "b"],
//!     "nested": {"ok": true}
//! });
//! assert_eq!(to_string(&doc), r#"{"id":7,"tags":["a","b"],"nested":{"ok":true}}"#);
//! ```
//!
//! ## Error Reporting
//!
//! ```rust
//! use json_tree::from_str;
//!
//! let err = from_str("{\n  \"a\": }").unwrap_err();
//! assert_eq!(err.to_string(), "unexpected token '}' at line 2, column 8");
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. Containers are `Rc`-backed
//! shared handles, so a tree is not `Send`; callers wanting to share one
//! across threads must copy it or provide their own exclusion.

pub mod array;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

mod token;
mod tokenizer;

pub use array::JsonArray;
pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::{DuplicateKeys, ParseOptions, Style};
pub use parser::Parser;
pub use ser::to_string_styled;
pub use value::{JsonValue, Number};

use std::io;

/// Parses one JSON document from a string with default options.
///
/// Parsing stops once the top-level value closes; trailing content is not
/// validated. A caller wanting "whole input consumed" should check the
/// remainder itself.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed input, located at a 1-based line
/// and column.
pub fn from_str(input: &str) -> Result<JsonValue> {
    Parser::new(input).parse()
}

/// Parses one JSON document with explicit [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use json_tree::{from_str_with_options, ParseOptions};
///
/// let options = ParseOptions::new().overwrite_duplicate_keys();
/// let doc = from_str_with_options(r#"{"a":1,"a":2}"#, options).unwrap();
/// assert_eq!(doc.try_object().unwrap().get_i64("a").unwrap(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed input.
pub fn from_str_with_options(input: &str, options: ParseOptions) -> Result<JsonValue> {
    Parser::with_options(input, options).parse()
}

/// Parses one JSON document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, or
/// [`Error::Syntax`] for malformed JSON.
pub fn from_slice(input: &[u8]) -> Result<JsonValue> {
    let text = std::str::from_utf8(input).map_err(Error::io)?;
    from_str(text)
}

/// Parses one JSON document from a reader, assuming UTF-8.
///
/// The reader is drained into memory first; the core has no streaming mode.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Syntax`] for malformed
/// JSON.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<JsonValue> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    from_str(&text)
}

/// Serializes a tree in [`Style::Compact`].
#[must_use]
pub fn to_string(value: &JsonValue) -> String {
    to_string_styled(value, Style::Compact)
}

/// Serializes a tree in [`Style::Spaced`].
#[must_use]
pub fn to_string_spaced(value: &JsonValue) -> String {
    to_string_styled(value, Style::Spaced)
}

/// Serializes a tree in [`Style::Indented`].
#[must_use]
pub fn to_string_pretty(value: &JsonValue) -> String {
    to_string_styled(value, Style::Indented)
}

/// Serializes a tree to a writer in the given style.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(mut writer: W, value: &JsonValue, style: Style) -> Result<()> {
    let text = to_string_styled(value, style);
    writer.write_all(text.as_bytes()).map_err(Error::io)
}
