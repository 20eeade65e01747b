//! Ordered map type for JSON objects.
//!
//! [`JsonMap`] wraps an [`IndexMap`] so object entries keep their insertion
//! order, which is what serialization emits. Like [`crate::JsonArray`] it is a
//! shared handle: cloning shares the underlying storage, so an object may hold
//! itself as one of its own values.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: entries serialize in insertion order
//! - **Unique keys**: inserting an existing key replaces the value and keeps
//!   the key at its original position
//! - **Order-independent equality**: two maps with the same entries compare
//!   equal regardless of insertion order
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{JsonMap, JsonValue};
//!
//! let map = JsonMap::new();
//! map.insert("name".to_string(), JsonValue::from("Alice"));
//! map.insert("age".to_string(), JsonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_str("name").unwrap(), "Alice");
//! assert_eq!(map.keys(), vec!["name".to_string(), "age".to_string()]);
//! ```

use crate::{Error, JsonArray, JsonValue, Result};
use indexmap::IndexMap;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A shared, insertion-ordered map of string keys to JSON values.
#[derive(Clone, Default)]
pub struct JsonMap(Rc<RefCell<IndexMap<String, JsonValue>>>);

impl JsonMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        JsonMap(Rc::new(RefCell::new(IndexMap::new())))
    }

    /// Creates an empty map with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(Rc::new(RefCell::new(IndexMap::with_capacity(capacity))))
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// present. A replaced key keeps its original position.
    pub fn insert(&self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.0.borrow_mut().insert(key, value)
    }

    /// Returns a clone of the value for `key`.
    ///
    /// Container values clone as handles, so mutating the result mutates the
    /// stored container too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.0.borrow().get(key).cloned()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Removes `key`, returning its value. The insertion order of the
    /// remaining entries is preserved.
    pub fn remove(&self, key: &str) -> Option<JsonValue> {
        self.0.borrow_mut().shift_remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Returns a snapshot of the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, JsonValue)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns `true` if both handles share the same underlying storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &JsonMap) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn inner(&self) -> Ref<'_, IndexMap<String, JsonValue>> {
        self.0.borrow()
    }

    fn lookup(&self, key: &str, expected: &'static str) -> Result<JsonValue> {
        self.get(key)
            .ok_or_else(|| Error::type_mismatch(expected, format!("missing key \"{}\"", key)))
    }

    /// Returns the string stored under `key`, or a type mismatch error for a
    /// missing key or another kind.
    pub fn get_str(&self, key: &str) -> Result<String> {
        String::try_from(self.lookup(key, "string")?)
    }

    /// Returns the boolean stored under `key`.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        bool::try_from(self.lookup(key, "boolean")?)
    }

    /// Returns the integer stored under `key`. Floats do not qualify.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        i64::try_from(self.lookup(key, "integer")?)
    }

    /// Returns the number stored under `key`, widened to `f64`. Accepts either
    /// number kind.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        f64::try_from(self.lookup(key, "number")?)
    }

    /// Returns the array stored under `key`.
    pub fn get_array(&self, key: &str) -> Result<JsonArray> {
        self.lookup(key, "array")?.try_array()
    }

    /// Returns the object stored under `key`.
    pub fn get_object(&self, key: &str) -> Result<JsonMap> {
        self.lookup(key, "object")?.try_object()
    }
}

impl PartialEq for JsonMap {
    /// Deep comparison ignoring entry order, with handle identity as a
    /// shortcut so a map always equals itself even when self-referential.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for JsonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JsonMap({})",
            crate::to_string(&JsonValue::Object(self.clone()))
        )
    }
}

impl From<IndexMap<String, JsonValue>> for JsonMap {
    fn from(map: IndexMap<String, JsonValue>) -> Self {
        JsonMap(Rc::new(RefCell::new(map)))
    }
}

impl FromIterator<(String, JsonValue)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        JsonMap::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}
