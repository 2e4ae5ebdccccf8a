// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-separated data loading for `statviz_core` datasets.
//!
//! A [`TsvSchema`] declares which columns hold numbers or dates; everything
//! else stays text. Coercion failures are reported with the column, row and
//! offending value instead of silently producing `NaN`s.

mod tsv;

pub use tsv::{FieldKind, TsvError, TsvSchema, read_tsv_path, read_tsv_reader, read_tsv_str};
