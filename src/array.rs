//! Ordered array type for JSON documents.
//!
//! [`JsonArray`] is a shared handle over an ordered, growable sequence of
//! [`JsonValue`]. Cloning the handle shares the underlying storage instead of
//! copying it, which is what allows an array to contain itself, directly or
//! through a longer chain, exactly as a reference-semantics document tree can.
//!
//! The handle is single-threaded (`Rc` based); callers sharing a tree across
//! threads must copy it or provide their own exclusion.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{JsonArray, JsonValue};
//!
//! let array = JsonArray::new();
//! array.push(JsonValue::from(1));
//! array.push(JsonValue::from("two"));
//!
//! assert_eq!(array.len(), 2);
//! assert_eq!(array.get(0), Some(JsonValue::from(1)));
//! ```

use crate::JsonValue;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A shared, ordered, mutable sequence of JSON values.
#[derive(Clone, Default)]
pub struct JsonArray(Rc<RefCell<Vec<JsonValue>>>);

impl JsonArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        JsonArray(Rc::new(RefCell::new(Vec::new())))
    }

    /// Creates an empty array with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray(Rc::new(RefCell::new(Vec::with_capacity(capacity))))
    }

    /// Appends a value to the end of the array.
    pub fn push(&self, value: JsonValue) {
        self.0.borrow_mut().push(value);
    }

    /// Inserts a value at `index`, shifting later elements.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&self, index: usize, value: JsonValue) {
        self.0.borrow_mut().insert(index, value);
    }

    /// Removes and returns the value at `index`, or `None` if out of range.
    pub fn remove(&self, index: usize) -> Option<JsonValue> {
        let mut items = self.0.borrow_mut();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Replaces the value at `index`, returning the previous value, or `None`
    /// if out of range (the array is left unchanged).
    pub fn set(&self, index: usize, value: JsonValue) -> Option<JsonValue> {
        let mut items = self.0.borrow_mut();
        items
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Returns a clone of the value at `index`.
    ///
    /// Container values clone as handles, so mutating the result mutates the
    /// stored container too.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<JsonValue> {
        self.0.borrow().get(index).cloned()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Returns a snapshot of the elements (container elements as handles).
    #[must_use]
    pub fn to_vec(&self) -> Vec<JsonValue> {
        self.0.borrow().clone()
    }

    /// Returns `true` if both handles share the same underlying storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &JsonArray) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn inner(&self) -> Ref<'_, Vec<JsonValue>> {
        self.0.borrow()
    }
}

impl PartialEq for JsonArray {
    /// Deep, positional comparison, with handle identity as a shortcut so an
    /// array always equals itself even when self-referential. Comparing two
    /// distinct arrays that reach each other through a cycle does not
    /// terminate; the model treats that the same way the serializer treats
    /// indirect cycles (out of scope).
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JsonArray({})",
            crate::to_string(&JsonValue::Array(self.clone()))
        )
    }
}

impl From<Vec<JsonValue>> for JsonArray {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonArray(Rc::new(RefCell::new(items)))
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
        JsonArray::from(iter.into_iter().collect::<Vec<_>>())
    }
}
