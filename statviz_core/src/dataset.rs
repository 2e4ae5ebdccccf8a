// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered record collections.
//!
//! Datasets are read-only during rendering. Accessors return errors for
//! missing or mistyped fields instead of letting NaNs propagate into
//! geometry.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use thiserror::Error;

use crate::value::{Record, Value};

/// Errors raised by dataset field access.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// The dataset has no records.
    #[error("dataset is empty")]
    Empty,
    /// A record is missing a required field.
    #[error("record {row} is missing field `{key}`")]
    MissingField {
        /// Field name.
        key: String,
        /// Zero-based record index.
        row: usize,
    },
    /// A field exists but does not hold a number.
    #[error("field `{key}` in record {row} is not numeric")]
    NotNumeric {
        /// Field name.
        key: String,
        /// Zero-based record index.
        row: usize,
    },
    /// A field exists but does not hold text.
    #[error("field `{key}` in record {row} is not text")]
    NotText {
        /// Field name.
        key: String,
        /// Zero-based record index.
        row: usize,
    },
    /// A numeric field holds a NaN or infinite value.
    #[error("field `{key}` in record {row} is not finite")]
    NotFinite {
        /// Field name.
        key: String,
        /// Zero-based record index.
        row: usize,
    },
}

/// An ordered sequence of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a dataset from a record list, preserving order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Appends a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Collects the finite numeric values of `key` across all records.
    ///
    /// Fails on the first missing, non-numeric or non-finite field.
    pub fn numbers(&self, key: &str) -> Result<Vec<f64>, DataError> {
        let mut out = Vec::with_capacity(self.records.len());
        for (row, record) in self.records.iter().enumerate() {
            let value = record.get(key).ok_or_else(|| DataError::MissingField {
                key: String::from(key),
                row,
            })?;
            let v = value.as_f64().ok_or_else(|| DataError::NotNumeric {
                key: String::from(key),
                row,
            })?;
            if !v.is_finite() {
                return Err(DataError::NotFinite {
                    key: String::from(key),
                    row,
                });
            }
            out.push(v);
        }
        Ok(out)
    }

    /// Collects the text values of `key` across all records.
    pub fn texts(&self, key: &str) -> Result<Vec<String>, DataError> {
        let mut out = Vec::with_capacity(self.records.len());
        for (row, record) in self.records.iter().enumerate() {
            let value = record.get(key).ok_or_else(|| DataError::MissingField {
                key: String::from(key),
                row,
            })?;
            match value {
                Value::Text(s) => out.push(s.clone()),
                _ => {
                    return Err(DataError::NotText {
                        key: String::from(key),
                        row,
                    });
                }
            }
        }
        Ok(out)
    }

    /// Returns the `(min, max)` of a numeric column.
    pub fn extent(&self, key: &str) -> Result<(f64, f64), DataError> {
        let values = self.numbers(key)?;
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Ok((min, max))
    }

    /// Returns the maximum of a numeric column.
    pub fn max(&self, key: &str) -> Result<f64, DataError> {
        self.extent(key).map(|(_, max)| max)
    }

    /// Returns the minimum of a numeric column.
    pub fn min(&self, key: &str) -> Result<f64, DataError> {
        self.extent(key).map(|(min, _)| min)
    }

    /// Returns the distinct text values of `key`, preserving first-seen order.
    pub fn distinct_texts(&self, key: &str) -> Result<Vec<String>, DataError> {
        let values = self.texts(key)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for v in values {
            if seen.insert(v.clone()) {
                out.push(v);
            }
        }
        Ok(out)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn fruit_dataset() -> Dataset {
        [
            Record::new().with("year", 1960.0).with("apples", 2.0),
            Record::new().with("year", 1965.0).with("apples", 3.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn numbers_collects_in_record_order() {
        let d = fruit_dataset();
        assert_eq!(d.numbers("apples").unwrap(), [2.0, 3.0]);
    }

    #[test]
    fn missing_field_reports_key_and_row() {
        let mut d = fruit_dataset();
        d.push(Record::new().with("year", 1970.0));
        let err = d.numbers("apples").unwrap_err();
        assert_eq!(
            err,
            DataError::MissingField {
                key: String::from("apples"),
                row: 2
            }
        );
    }

    #[test]
    fn nan_is_rejected_instead_of_propagated() {
        let d: Dataset = [Record::new().with("v", f64::NAN)].into_iter().collect();
        assert!(matches!(
            d.numbers("v").unwrap_err(),
            DataError::NotFinite { .. }
        ));
    }

    #[test]
    fn distinct_texts_preserves_first_seen_order() {
        let d: Dataset = [
            Record::new().with("continent", "Asia"),
            Record::new().with("continent", "Europe"),
            Record::new().with("continent", "Asia"),
        ]
        .into_iter()
        .collect();
        assert_eq!(d.distinct_texts("continent").unwrap(), ["Asia", "Europe"]);
    }
}
