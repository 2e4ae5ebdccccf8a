// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary statistics tables.
//!
//! A summary table is data, not geometry: each row carries the descriptive
//! statistics for one named series, plus formatted cells ready for a
//! renderer to lay out.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use statviz_core::Dataset;

use crate::error::ChartError;
use crate::format::format_grouped;
use crate::stats::{deviation, extent, mean};

/// Column headers matching [`SummaryRow::cells`].
pub const SUMMARY_HEADERS: [&str; 5] = ["series", "mean", "deviation", "min", "max"];

/// Descriptive statistics for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    /// Series name.
    pub label: String,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; zero for a single observation.
    pub deviation: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl SummaryRow {
    /// Returns the row as formatted cells: the label plus each statistic
    /// with thousands grouping and two decimals.
    pub fn cells(&self) -> [String; 5] {
        [
            self.label.clone(),
            format_grouped(self.mean, 2),
            format_grouped(self.deviation, 2),
            format_grouped(self.min, 2),
            format_grouped(self.max, 2),
        ]
    }
}

/// Computes a summary row for a named value list.
pub fn summarize(label: impl Into<String>, values: &[f64]) -> Result<SummaryRow, ChartError> {
    let (min, max) =
        extent(values).ok_or(ChartError::Data(statviz_core::DataError::Empty))?;
    let mean = mean(values).unwrap_or(0.0);
    let deviation = deviation(values).unwrap_or(0.0);
    Ok(SummaryRow {
        label: label.into(),
        mean,
        deviation,
        min,
        max,
    })
}

/// Computes one summary row per listed field of a dataset.
pub fn summarize_fields(
    dataset: &Dataset,
    keys: &[&str],
) -> Result<Vec<SummaryRow>, ChartError> {
    keys.iter()
        .map(|&key| {
            let values = dataset.numbers(key)?;
            summarize(key, &values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use statviz_core::Record;

    use super::*;

    #[test]
    fn summary_computes_the_four_statistics() {
        let row = summarize("apples", &[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(row.mean, 4.0);
        assert_eq!(row.min, 2.0);
        assert_eq!(row.max, 6.0);
        assert!((row.deviation - 2.0).abs() < 1e-12);
    }

    #[test]
    fn cells_are_formatted_with_grouping_and_two_decimals() {
        let row = summarize("sales", &[1000.0, 2000.0]).unwrap();
        let cells = row.cells();
        assert_eq!(cells[0], "sales");
        assert_eq!(cells[1], "1,500.00");
        assert_eq!(cells[3], "1,000.00");
        assert_eq!(cells[4], "2,000.00");
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(summarize("empty", &[]).is_err());
    }

    #[test]
    fn single_observation_has_zero_deviation() {
        let row = summarize("one", &[7.0]).unwrap();
        assert_eq!(row.deviation, 0.0);
    }

    #[test]
    fn summarize_fields_reads_dataset_columns() {
        let dataset: Dataset = [
            Record::new().with("apples", 2.0).with("pears", 5.0),
            Record::new().with("apples", 4.0).with("pears", 7.0),
        ]
        .into_iter()
        .collect();
        let rows = summarize_fields(&dataset, &["apples", "pears"]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "apples");
        assert_eq!(rows[1].mean, 6.0);
    }
}
