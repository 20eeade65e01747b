//! Styled serialization of a [`JsonValue`] tree back to text.
//!
//! Three layouts are supported, selected by [`Style`]:
//!
//! - `Compact`: minimal output, no whitespace
//! - `Spaced`: one line, one space after `,` and `:`
//! - `Indented`: two-space indent per nesting level, one entry per line
//!
//! A container element that is the *same* container currently being written
//! (a direct self-reference) renders as the placeholder `(this array)` /
//! `(this object)` instead of recursing. Longer cycles, where A contains B
//! and B contains A, are not detected; serializing such a tree recurses until
//! the stack runs out. Callers building cyclic documents are expected to keep
//! to the direct form, as the data model's own equality does.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{json, to_string_styled, Style};
//!
//! let doc = json!({"a": 1, "b": [true, null]});
//! assert_eq!(to_string_styled(&doc, Style::Compact), r#"{"a":1,"b":[true,null]}"#);
//! assert_eq!(to_string_styled(&doc, Style::Spaced), r#"{"a": 1, "b": [true, null]}"#);
//! assert_eq!(
//!     to_string_styled(&doc, Style::Indented),
//!     "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}"
//! );
//! ```

use crate::{JsonArray, JsonMap, JsonValue, Style};
use std::fmt::Write;

/// Renders `value` in the given style. Serialization is infallible.
#[must_use]
pub fn to_string_styled(value: &JsonValue, style: Style) -> String {
    let mut writer = Writer {
        out: String::with_capacity(256),
        style,
        depth: 0,
    };
    writer.write_value(value);
    writer.out
}

struct Writer {
    out: String,
    style: Style,
    depth: usize,
}

impl Writer {
    fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.out.push_str("null"),
            JsonValue::Bool(true) => self.out.push_str("true"),
            JsonValue::Bool(false) => self.out.push_str("false"),
            // Number's Display is the canonical JSON text form.
            JsonValue::Number(n) => {
                let _ = write!(self.out, "{}", n);
            }
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Array(array) => self.write_array(array),
            JsonValue::Object(map) => self.write_object(map),
        }
    }

    fn write_array(&mut self, array: &JsonArray) {
        let items = array.inner();
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }

        self.out.push('[');
        self.depth += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.separator();
            }
            self.entry_break();
            match item {
                JsonValue::Array(inner) if inner.ptr_eq(array) => {
                    self.out.push_str("(this array)");
                }
                other => self.write_value(other),
            }
        }
        self.depth -= 1;
        self.closing_break();
        self.out.push(']');
    }

    fn write_object(&mut self, map: &JsonMap) {
        let entries = map.inner();
        if entries.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push('{');
        self.depth += 1;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.separator();
            }
            self.entry_break();
            self.write_string(key);
            self.out.push(':');
            if self.style != Style::Compact {
                self.out.push(' ');
            }
            match value {
                JsonValue::Object(inner) if inner.ptr_eq(map) => {
                    self.out.push_str("(this object)");
                }
                other => self.write_value(other),
            }
        }
        self.depth -= 1;
        self.closing_break();
        self.out.push('}');
    }

    /// Comma between entries, plus the style's spacing.
    fn separator(&mut self) {
        self.out.push(',');
        if self.style == Style::Spaced {
            self.out.push(' ');
        }
    }

    /// Line break and indent before an entry (indented style only).
    fn entry_break(&mut self) {
        if self.style == Style::Indented {
            self.newline_indent(self.depth);
        }
    }

    /// Line break and indent before a closing bracket (indented style only).
    fn closing_break(&mut self) {
        if self.style == Style::Indented {
            self.newline_indent(self.depth);
        }
    }

    fn newline_indent(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }

    /// Escapes `"` and `\`, and control characters below 0x20 as their short
    /// forms where JSON defines one, else zero-padded `\uXXXX`. Everything
    /// else passes through unescaped.
    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for c in s.chars() {
            match c {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    let _ = write!(self.out, "\\u{:04x}", c as u32);
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}
