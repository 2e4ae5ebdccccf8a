// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration and build errors.

extern crate alloc;

use alloc::string::String;

use statviz_core::DataError;
use thiserror::Error;

/// Errors reported while validating a chart configuration against a dataset.
///
/// Builders check their inputs up front and fail with a named error instead
/// of letting `NaN` coordinates leak into the generated shapes.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChartError {
    /// The dataset or a field lookup was invalid.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The chart has no series configured.
    #[error("chart has no series configured")]
    NoSeries,

    /// A color list does not match the series it colors.
    #[error("{series} series configured but {colors} colors supplied")]
    SeriesColorMismatch {
        /// Number of series.
        series: usize,
        /// Number of colors.
        colors: usize,
    },

    /// A log scale was given a domain touching or crossing zero.
    #[error("log scale domain [{min}, {max}] must be strictly positive")]
    NonPositiveLogDomain {
        /// Requested domain minimum.
        min: f64,
        /// Requested domain maximum.
        max: f64,
    },

    /// A value that must be strictly positive was not.
    #[error("field `{key}` must be strictly positive for a log scale, got {value} in row {row}")]
    NonPositiveLogValue {
        /// Field name.
        key: String,
        /// Offending value.
        value: f64,
        /// Zero-based record index.
        row: usize,
    },

    /// A pie slice value was negative.
    #[error("field `{key}` has negative value {value} in row {row}; slices must be non-negative")]
    NegativeSlice {
        /// Field name.
        key: String,
        /// Offending value.
        value: f64,
        /// Zero-based record index.
        row: usize,
    },

    /// All pie slice values were zero.
    #[error("slice values sum to zero; nothing to lay out")]
    ZeroTotal,

    /// A histogram was configured with no room for bins.
    #[error("histogram produced no bins for domain [{min}, {max}]")]
    NoBins {
        /// Domain minimum.
        min: f64,
        /// Domain maximum.
        max: f64,
    },
}
