//! Uniform accessors for working on an ordered [`Mapping`] with string keys.
//!
//! YAML mapping keys may be arbitrary values, but configuration documents use
//! plain string keys throughout. These helpers keep the call sites free of
//! `Value::String` wrapping and make the get-with-default idiom explicit.

use serde_yaml::{Mapping, Value};

/// Return a clone of the value under `key`, or `default` when absent.
pub fn get_or(map: &Mapping, key: &str, default: Value) -> Value {
    map.get(key).cloned().unwrap_or(default)
}

/// Insert `value` under a string `key`.
///
/// A new key is appended at the end of the mapping's insertion order; an
/// existing key keeps its position and has its value replaced.
pub fn insert(map: &mut Mapping, key: &str, value: Value) {
    map.insert(Value::String(key.to_string()), value);
}

/// Remove `key` and return its value, preserving the order of the remaining
/// keys.
pub fn take(map: &mut Mapping, key: &str) -> Option<Value> {
    map.shift_remove(key)
}
