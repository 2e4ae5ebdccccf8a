// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `statviz_core`.
//!
//! This crate turns declarative, validated chart configurations into
//! `statviz_core` shapes:
//! - **Scales** map data values into screen coordinates.
//! - **Guides** (axes) are generated as shape lists.
//! - **Chart builders** (bar, pie, line, scatter, histogram, tree, summary
//!   table) compile a configuration plus a dataset into series shapes with
//!   hover actions attached.
//!
//! Configurations are checked at acceptance time: missing fields, empty
//! datasets, non-positive log domains and mismatched series/color lists are
//! rejected with a [`ChartError`] instead of propagating into broken
//! geometry.
//!
//! Text shaping and layout are out of scope; text shapes store unshaped
//! strings and sizing heuristics use [`HeuristicTextMeasurer`].

#![no_std]

extern crate alloc;

mod axis;
mod bar;
mod error;
mod float;
mod format;
mod histogram;
mod layout;
mod line;
mod measure;
mod pie;
mod scale;
mod scatter;
mod stats;
mod table;
mod time;
mod tree;
pub mod z_order;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle, GridStyle};
pub use bar::{BarChart, BarSeries};
pub use error::ChartError;
pub use format::{capitalize, format_grouped, format_tick};
pub use histogram::{Bin, Histogram, bin_values, rounded_domain};
pub use layout::{Frame, Margin};
pub use line::LineChart;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use pie::{PieChart, PieSlice, pie_layout};
pub use scale::{
    ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScaleLog, ScaleLogSpec, ScaleTime,
    ScaleTimeSpec,
};
pub use scatter::{FillPolicy, HoverPolicy, RadiusPolicy, ScatterChart};
pub use stats::{deviation, extent, mean};
pub use table::{SUMMARY_HEADERS, SummaryRow, summarize, summarize_fields};
pub use time::{format_time_seconds, nice_time_ticks_seconds};
pub use tree::{LayoutNode, TreeChart, TreeLayout, TreeNode};
