// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar values and records.
//!
//! A [`Record`] is one row of a dataset: an ordered list of field name /
//! [`Value`] pairs. Field order is preserved (it matters for x-axis ordering
//! in bar and line charts); lookup is by name.

extern crate alloc;

use alloc::string::String;

use smallvec::SmallVec;

/// A scalar field value.
///
/// Timestamps are numeric seconds, matching the time scale; date parsing
/// lives in `statviz_data`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
    /// A point in time, as seconds since an arbitrary epoch.
    Timestamp(f64),
}

impl Value {
    /// Returns the value as an `f64` if it is numeric (number or timestamp).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Timestamp(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the value as a string slice if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of a dataset: ordered field name / value pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: SmallVec<[(String, Value); 8]>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Sets a field, replacing any existing value under the same name.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the numeric value stored under `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns the text value stored under `key`, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Iterates over the fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn set_replaces_existing_field() {
        let mut r = Record::new();
        r.set("year", 1960.0);
        r.set("year", 1965.0);
        assert_eq!(r.len(), 1);
        assert_eq!(r.number("year"), Some(1965.0));
    }

    #[test]
    fn field_order_is_preserved() {
        let r: Record = [("b", 1.0), ("a", 2.0)].into_iter().collect();
        let keys: alloc::vec::Vec<&str> = r.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
