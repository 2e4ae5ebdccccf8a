// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TSV reading and per-column coercion.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use statviz_core::{Dataset, Record, Value};
use thiserror::Error;

/// How a column's cells are coerced while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Keep cells as text.
    Text,
    /// Parse cells as `f64`.
    Number,
    /// Parse cells as dates with the given `strftime`-style format, stored
    /// as timestamp seconds at midnight UTC.
    Date(String),
}

/// Errors raised while loading a TSV file.
#[derive(Debug, Error)]
pub enum TsvError {
    /// The underlying reader or TSV structure failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Reading the file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A schema column is absent from the header row.
    #[error("column `{name}` not found in header")]
    MissingColumn {
        /// Column name.
        name: String,
    },

    /// A cell could not be parsed as a number.
    #[error("column `{name}`, row {row}: `{cell}` is not a number")]
    ParseNumber {
        /// Column name.
        name: String,
        /// Zero-based data row index.
        row: usize,
        /// Offending cell content.
        cell: String,
    },

    /// A numeric cell parsed to a NaN or infinity.
    #[error("column `{name}`, row {row}: `{cell}` is not finite")]
    NotFinite {
        /// Column name.
        name: String,
        /// Zero-based data row index.
        row: usize,
        /// Offending cell content.
        cell: String,
    },

    /// A cell could not be parsed as a date.
    #[error("column `{name}`, row {row}: `{cell}` does not match date format `{format}`")]
    ParseDate {
        /// Column name.
        name: String,
        /// Zero-based data row index.
        row: usize,
        /// Offending cell content.
        cell: String,
        /// Expected format.
        format: String,
    },
}

/// Declares the coercion applied to each named column.
///
/// Columns not named in the schema load as text.
#[derive(Clone, Debug, Default)]
pub struct TsvSchema {
    fields: Vec<(String, FieldKind)>,
}

impl TsvSchema {
    /// Creates a schema that loads every column as text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerces a column to numbers.
    pub fn number(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), FieldKind::Number));
        self
    }

    /// Coerces a column to dates with the given format, e.g. `%Y-%m-%d`.
    pub fn date(mut self, name: impl Into<String>, format: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FieldKind::Date(format.into())));
        self
    }

    fn kind_of(&self, name: &str) -> &FieldKind {
        self.fields
            .iter()
            .find_map(|(n, k)| (n == name).then_some(k))
            .unwrap_or(&FieldKind::Text)
    }
}

/// Reads a TSV document from any reader.
pub fn read_tsv_reader(reader: impl Read, schema: &TsvSchema) -> Result<Dataset, TsvError> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = tsv.headers()?.iter().map(str::to_owned).collect();
    for (name, _) in &schema.fields {
        if !headers.iter().any(|h| h == name) {
            return Err(TsvError::MissingColumn { name: name.clone() });
        }
    }

    let mut dataset = Dataset::new();
    for (row, result) in tsv.records().enumerate() {
        let record = result?;
        let mut out = Record::new();
        for (name, cell) in headers.iter().zip(record.iter()) {
            let value = coerce(schema.kind_of(name), name, row, cell)?;
            out.set(name.clone(), value);
        }
        dataset.push(out);
    }
    Ok(dataset)
}

/// Reads a TSV document from a string.
pub fn read_tsv_str(contents: &str, schema: &TsvSchema) -> Result<Dataset, TsvError> {
    read_tsv_reader(contents.as_bytes(), schema)
}

/// Reads a TSV file from disk.
pub fn read_tsv_path(path: impl AsRef<Path>, schema: &TsvSchema) -> Result<Dataset, TsvError> {
    let file = std::fs::File::open(path)?;
    read_tsv_reader(file, schema)
}

fn coerce(kind: &FieldKind, name: &str, row: usize, cell: &str) -> Result<Value, TsvError> {
    match kind {
        FieldKind::Text => Ok(Value::Text(cell.to_owned())),
        FieldKind::Number => {
            let v: f64 = cell.trim().parse().map_err(|_| TsvError::ParseNumber {
                name: name.to_owned(),
                row,
                cell: cell.to_owned(),
            })?;
            if !v.is_finite() {
                return Err(TsvError::NotFinite {
                    name: name.to_owned(),
                    row,
                    cell: cell.to_owned(),
                });
            }
            Ok(Value::Number(v))
        }
        FieldKind::Date(format) => {
            let date =
                NaiveDate::parse_from_str(cell.trim(), format).map_err(|_| TsvError::ParseDate {
                    name: name.to_owned(),
                    row,
                    cell: cell.to_owned(),
                    format: format.clone(),
                })?;
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc();
            #[allow(
                clippy::cast_precision_loss,
                reason = "date timestamps are far below f64's integer limit"
            )]
            Ok(Value::Timestamp(midnight.timestamp() as f64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURS: &str = "week\tduration\n\
                         2023-01-02\t38.5\n\
                         2023-01-09\t41\n\
                         2023-01-16\t35.25\n";

    #[test]
    fn loads_rows_with_declared_coercions() {
        let schema = TsvSchema::new().number("duration").date("week", "%Y-%m-%d");
        let dataset = read_tsv_str(HOURS, &schema).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.numbers("duration").unwrap(), [38.5, 41.0, 35.25]);

        let weeks = dataset.numbers("week").unwrap();
        // Consecutive Mondays are exactly one week apart.
        assert_eq!(weeks[1] - weeks[0], 7.0 * 86_400.0);
    }

    #[test]
    fn undeclared_columns_stay_text() {
        let dataset = read_tsv_str(HOURS, &TsvSchema::new()).unwrap();
        assert_eq!(
            dataset.texts("duration").unwrap(),
            ["38.5", "41", "35.25"]
        );
    }

    #[test]
    fn bad_number_reports_column_row_and_cell() {
        let schema = TsvSchema::new().number("duration");
        let err = read_tsv_str("week\tduration\n2023-01-02\tlots\n", &schema).unwrap_err();
        match err {
            TsvError::ParseNumber { name, row, cell } => {
                assert_eq!(name, "duration");
                assert_eq!(row, 0);
                assert_eq!(cell, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_date_reports_the_expected_format() {
        let schema = TsvSchema::new().date("week", "%Y-%m-%d");
        let err = read_tsv_str("week\tduration\n01/02/2023\t38.5\n", &schema).unwrap_err();
        assert!(matches!(err, TsvError::ParseDate { .. }));
    }

    #[test]
    fn missing_schema_column_is_rejected_up_front() {
        let schema = TsvSchema::new().number("hours");
        let err = read_tsv_str(HOURS, &schema).unwrap_err();
        assert!(matches!(err, TsvError::MissingColumn { name } if name == "hours"));
    }
}
