//! The in-memory JSON value model.
//!
//! [`Value`] is a closed six-variant enum; pure data plus accessors,
//! equality, and printing. Trees are finite and exclusively owned: every
//! sub-value belongs to its parent container, so structural recursion
//! always terminates.
//!
//! Objects are backed by a `BTreeMap`, which keeps keys unique and makes
//! equality order-independent for free. Insertion order is *not*
//! preserved; members render in sorted key order.

use std::collections::BTreeMap;
use std::fmt;

use crate::render::{render, Mode};

/// A single JSON construct.
///
/// Numbers keep the raw decimal text captured by the tokenizer rather than
/// an eagerly converted host number; the text always satisfies the JSON
/// number grammar, and the numeric accessors parse it lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Number(String),
    Object(BTreeMap<String, Value>),
    Array(Vec<Value>),
    Boolean(bool),
    Null,
}

/// Sentinel returned by the `Index` impls on any lookup miss.
const NULL: Value = Value::Null;

impl Value {
    /// Returns whether this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns whether this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns whether this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns whether this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns whether this value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns whether this value is the `null` literal. Distinct from the
    /// absence of a value: a missing object key yields `None` from
    /// [`get`](Value::get), not `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Parse the canonical number text as an `f64`. This is the root
    /// numeric conversion; the integer accessors widen through it.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// The number as an `i64`, truncating any fraction. `None` if this is
    /// not a number or the value falls outside the `i64` range.
    pub fn as_i64(&self) -> Option<i64> {
        let d = self.as_f64()?;
        if d.is_finite() && d >= i64::MIN as f64 && d <= i64::MAX as f64 {
            Some(d as i64)
        } else {
            None
        }
    }

    /// The number as a `u64`, truncating any fraction. `None` if this is
    /// not a number or the value falls outside the `u64` range.
    pub fn as_u64(&self) -> Option<u64> {
        let d = self.as_f64()?;
        if d.is_finite() && d >= 0.0 && d <= u64::MAX as f64 {
            Some(d as u64)
        } else {
            None
        }
    }

    /// The member map, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// The element slice, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Look up an object member by key. `None` if this is not an object or
    /// the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Look up an array element by index. `None` if this is not an array
    /// or the index is out of bounds.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Member count for an object, element count for an array, `None` for
    /// every scalar variant.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Object(members) => Some(members.len()),
            Value::Array(elements) => Some(elements.len()),
            _ => None,
        }
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;

    /// Sugar over [`get`](Value::get): yields `Null` when this is not an
    /// object or the key is absent, so lookups chain without panicking.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl std::ops::Index<usize> for Value {
    type Output = Value;

    /// Sugar over [`get_index`](Value::get_index): yields `Null` when this
    /// is not an array or the index is out of bounds.
    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON spelling and map to `Null`.
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Value::Number(value.to_string())
        } else {
            Value::Null
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(members: BTreeMap<String, Value>) -> Self {
        Value::Object(members)
    }
}

impl fmt::Display for Value {
    /// Displays the pretty rendering with the default two-space indent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, Mode::Pretty))
    }
}
