//! Dynamic value representation for JSON documents.
//!
//! This module provides the [`JsonValue`] enum which represents one node of a
//! JSON document tree, and the [`Number`] enum which keeps the integer/float
//! distinction the grammar makes.
//!
//! ## Core Types
//!
//! - [`JsonValue`]: any JSON value (null, boolean, number, string, array, object)
//! - [`Number`]: a 64-bit signed integer or a finite 64-bit float
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_tree::{json, JsonValue};
//!
//! // From primitives
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! // Using the json! macro
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use json_tree::JsonValue;
//!
//! let value = JsonValue::from(42);
//!
//! // Optional access
//! assert_eq!(value.as_i64(), Some(42));
//!
//! // Failing access, reporting a type mismatch
//! assert!(value.try_str().is_err());
//! ```
//!
//! ## Number kinds
//!
//! `Integer` and `Float` are distinct kinds even when numerically equal:
//! `JsonValue::from(1)` is not equal to `JsonValue::from(1.0)`. A literal
//! parsed without `.`, `e`, or `E` is an integer; an integer literal that
//! overflows the `i64` range degrades to a float rather than failing.
//!
//! ## Self-referential containers
//!
//! [`JsonArray`] and [`JsonMap`] are shared handles, so a container may hold
//! itself as an element or value. The styled serializer renders a direct
//! self-reference as `(this array)` / `(this object)` instead of recursing.

use crate::{Error, JsonArray, JsonMap, Style};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One node of a JSON document tree.
///
/// # Examples
///
/// ```rust
/// use json_tree::{JsonValue, Number};
///
/// let null = JsonValue::Null;
/// let num = JsonValue::Number(Number::Integer(42));
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonMap),
}

/// A JSON number, keeping the lexical integer/float distinction.
///
/// Floats are finite only: the checked constructor [`Number::from_f64`]
/// rejects NaN and the infinities, and the parser never produces them.
///
/// # Examples
///
/// ```rust
/// use json_tree::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(2.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 2.5);
/// assert!(Number::from_f64(f64::NAN).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Creates a float number, returning `None` for NaN or infinite input.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Number::Float(value))
        } else {
            None
        }
    }

    /// Returns `true` if this is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns the value if it is an integer.
    ///
    /// Floats are never returned here, even whole-valued ones; the two kinds
    /// stay distinct.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    /// Returns the value widened to `f64`, whichever kind it is.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Kind name for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Number::Integer(_) => "integer",
            Number::Float(_) => "float",
        }
    }
}

impl fmt::Display for Number {
    /// Writes the JSON text form.
    ///
    /// Floats use the shortest decimal form that parses back to the same bit
    /// pattern, with `.0` appended when the text would otherwise read as an
    /// integer literal, so the float kind survives a round trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => {
                if !x.is_finite() {
                    // Unreachable through the checked constructors; render the
                    // only literal JSON has for an absent numeric value.
                    return f.write_str("null");
                }
                let text = x.to_string();
                f.write_str(&text)?;
                if !text.contains(['.', 'e', 'E']) {
                    f.write_str(".0")?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number of either kind.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Kind name for diagnostics: `null`, `boolean`, `integer`, `float`,
    /// `string`, `array`, or `object`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(n) => n.kind(),
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer number, returns it.
    ///
    /// Floats return `None`; use [`JsonValue::as_f64`] to accept either kind.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number of either kind, returns it widened to `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a handle to it.
    ///
    /// Handles are cheap to clone and share the same underlying storage.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a.clone()),
            _ => None,
        }
    }

    /// If the value is an object, returns a handle to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<JsonMap> {
        match self {
            JsonValue::Object(m) => Some(m.clone()),
            _ => None,
        }
    }

    /// Returns the boolean, or a type mismatch error.
    pub fn try_bool(&self) -> Result<bool, Error> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch("boolean", self.kind()))
    }

    /// Returns the string, or a type mismatch error.
    pub fn try_str(&self) -> Result<&str, Error> {
        match self {
            JsonValue::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.kind())),
        }
    }

    /// Returns the integer, or a type mismatch error. Floats do not qualify.
    pub fn try_i64(&self) -> Result<i64, Error> {
        self.as_i64()
            .ok_or_else(|| Error::type_mismatch("integer", self.kind()))
    }

    /// Returns the number widened to `f64`, accepting either kind, or a type
    /// mismatch error.
    pub fn try_f64(&self) -> Result<f64, Error> {
        self.as_f64()
            .ok_or_else(|| Error::type_mismatch("number", self.kind()))
    }

    /// Returns the array handle, or a type mismatch error.
    pub fn try_array(&self) -> Result<JsonArray, Error> {
        self.as_array()
            .ok_or_else(|| Error::type_mismatch("array", self.kind()))
    }

    /// Returns the object handle, or a type mismatch error.
    pub fn try_object(&self) -> Result<JsonMap, Error> {
        self.as_object()
            .ok_or_else(|| Error::type_mismatch("object", self.kind()))
    }
}

impl fmt::Display for JsonValue {
    /// Renders the compact serialization, cycle-guarded for direct
    /// self-references.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string_styled(self, Style::Compact))
    }
}

impl Serialize for JsonValue {
    /// Bridges the tree into any serde format. Unlike the styled serializer,
    /// this path has no cycle guard; self-referential trees recurse.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Float(x)) => serializer.serialize_f64(*x),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(array) => {
                use serde::ser::SerializeSeq;
                let items = array.inner();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                use serde::ser::SerializeMap;
                let entries = map.inner();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JsonValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(JsonValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Number::from_f64(value)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonValue::Array(JsonArray::from(vec)))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let map = JsonMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(JsonValue::Object(map))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

// TryFrom implementations for extracting owned values from JsonValue.
impl TryFrom<JsonValue> for i64 {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Number(Number::Integer(i)) => Ok(i),
            other => Err(Error::type_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<JsonValue> for f64 {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Number(n) => Ok(n.as_f64()),
            other => Err(Error::type_mismatch("number", other.kind())),
        }
    }
}

impl TryFrom<JsonValue> for bool {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch("boolean", other.kind())),
        }
    }
}

impl TryFrom<JsonValue> for String {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self, Error> {
        match value {
            JsonValue::String(s) => Ok(s),
            other => Err(Error::type_mismatch("string", other.kind())),
        }
    }
}

// From implementations for building values from primitives.
impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::from(value as f64)
    }
}

impl From<f64> for JsonValue {
    /// Non-finite input becomes [`JsonValue::Null`]; floats in the tree are
    /// finite by construction.
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(JsonArray::from(value))
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}
