// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram generation.
//!
//! The domain is rounded outward to multiples of five, thresholds come from
//! the tick generator so bin edges line up with axis ticks, and the final bin
//! is closed on the right so the domain maximum is counted.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use statviz_core::{
    Dataset, HoverAction, Shape, ShapeId, ShapeKind, TextAnchor, TextBaseline, TextShape,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;
use crate::format::format_tick;
use crate::scale::{ScaleLinearSpec, ticks_within};
use crate::z_order;

/// One histogram bin: the half-open interval `[x0, x1)`, except the final
/// bin which also includes its right edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge.
    pub x0: f64,
    /// Upper edge.
    pub x1: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Rounds a value extent outward to multiples of five.
///
/// A degenerate extent is widened by one step so at least one bin exists.
pub fn rounded_domain(values: &[f64]) -> Result<(f64, f64), ChartError> {
    let (min, max) = crate::stats::extent(values).ok_or(ChartError::Data(
        statviz_core::DataError::Empty,
    ))?;
    let lo = (min / 5.0).floor() * 5.0;
    let mut hi = (max / 5.0).ceil() * 5.0;
    if hi == lo {
        hi = lo + 5.0;
    }
    Ok((lo, hi))
}

/// Bins `values` over `domain` using tick-aligned thresholds.
pub fn bin_values(
    values: &[f64],
    domain: (f64, f64),
    tick_count: usize,
) -> Result<Vec<Bin>, ChartError> {
    let (lo, hi) = domain;
    let mut edges = ticks_within(lo, hi, tick_count);
    if edges.first().is_none_or(|&e| e > lo) {
        edges.insert(0, lo);
    }
    if edges.last().is_none_or(|&e| e < hi) {
        edges.push(hi);
    }
    if edges.len() < 2 {
        return Err(ChartError::NoBins { min: lo, max: hi });
    }

    let mut bins: Vec<Bin> = edges
        .windows(2)
        .map(|pair| Bin {
            x0: pair[0],
            x1: pair[1],
            count: 0,
        })
        .collect();
    let last = bins.len() - 1;
    for &v in values {
        let v = v.clamp(lo, hi);
        let index = bins
            .iter()
            .position(|b| v >= b.x0 && v < b.x1)
            .unwrap_or(last);
        bins[index].count += 1;
    }
    Ok(bins)
}

/// A histogram configuration.
#[derive(Clone, Debug)]
pub struct Histogram {
    id_base: u64,
    value_key: alloc::string::String,
    color: Color,
    tick_count: usize,
    show_counts: bool,
    label_font_size: f64,
}

impl Histogram {
    /// Creates a histogram over a numeric field.
    pub fn new(id_base: u64, value_key: impl Into<alloc::string::String>) -> Self {
        Self {
            id_base,
            value_key: value_key.into(),
            color: css::STEEL_BLUE,
            tick_count: 10,
            show_counts: true,
            label_font_size: 12.0,
        }
    }

    /// Sets the bar fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the approximate threshold count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Enables or disables in-bar count labels.
    pub fn with_counts(mut self, show_counts: bool) -> Self {
        self.show_counts = show_counts;
        self
    }

    /// Returns the computed bins.
    pub fn bins(&self, dataset: &Dataset) -> Result<Vec<Bin>, ChartError> {
        let values = dataset.numbers(&self.value_key)?;
        let domain = rounded_domain(&values)?;
        bin_values(&values, domain, self.tick_count)
    }

    /// Returns the x scale spec over the rounded domain.
    pub fn x_spec(&self, dataset: &Dataset) -> Result<ScaleLinearSpec, ChartError> {
        let values = dataset.numbers(&self.value_key)?;
        Ok(ScaleLinearSpec::new(rounded_domain(&values)?))
    }

    /// Returns the y scale spec, from zero to the fullest bin.
    pub fn y_spec(&self, dataset: &Dataset) -> Result<ScaleLinearSpec, ChartError> {
        let bins = self.bins(dataset)?;
        let max = bins.iter().map(|b| b.count).max().unwrap_or(0);
        Ok(ScaleLinearSpec::new((0.0, max as f64)))
    }

    /// Generates the bar and count-label shapes for `plot`.
    pub fn shapes(&self, dataset: &Dataset, plot: Rect) -> Result<Vec<Shape>, ChartError> {
        let bins = self.bins(dataset)?;
        let x_scale = self.x_spec(dataset)?.instantiate((plot.x0, plot.x1));
        let y_scale = self.y_spec(dataset)?.instantiate((plot.y1, plot.y0));

        let mut out = Vec::with_capacity(bins.len() * 2);
        for (i, bin) in bins.iter().enumerate() {
            let x0 = x_scale.map(bin.x0);
            let x1 = x_scale.map(bin.x1);
            let y = y_scale.map(bin.count as f64);
            // A one-unit inset on each side separates adjacent bars.
            let inset = if x1 - x0 > 2.0 { 1.0 } else { 0.0 };
            let rect = Rect::new(x0 + inset, y, x1 - inset, plot.y1);
            let range = alloc::format!(
                "{}\u{2013}{}",
                format_tick(bin.x0, 1.0),
                format_tick(bin.x1, 1.0)
            );
            out.push(
                Shape::new(ShapeId(self.id_base + i as u64), ShapeKind::Rect(rect))
                    .with_fill(self.color)
                    .with_z_index(z_order::SERIES_FILL)
                    .with_hover(HoverAction::new(range, alloc::format!("{}", bin.count))),
            );

            if self.show_counts && bin.count > 0 {
                out.push(
                    Shape::new(
                        ShapeId(self.id_base + 1000 + i as u64),
                        ShapeKind::Text(TextShape {
                            pos: Point::new(0.5 * (x0 + x1), y + self.label_font_size + 2.0),
                            text: alloc::format!("{}", bin.count),
                            font_size: self.label_font_size,
                            angle: 0.0,
                            anchor: TextAnchor::Middle,
                            baseline: TextBaseline::Middle,
                        }),
                    )
                    .with_fill(css::WHITE)
                    .with_z_index(z_order::SERIES_LABELS),
                );
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use statviz_core::Record;

    use super::*;

    #[test]
    fn domain_rounds_outward_to_multiples_of_five() {
        assert_eq!(rounded_domain(&[12.0, 33.0]).unwrap(), (10.0, 35.0));
        assert_eq!(rounded_domain(&[-3.0, 4.0]).unwrap(), (-5.0, 5.0));
        // Degenerate extents still produce a non-empty domain.
        assert_eq!(rounded_domain(&[10.0, 10.0]).unwrap(), (10.0, 15.0));
    }

    #[test]
    fn every_value_lands_in_exactly_one_bin() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64) * 0.37).collect();
        let domain = rounded_domain(&values).unwrap();
        let bins = bin_values(&values, domain, 10).unwrap();
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
    }

    #[test]
    fn final_bin_includes_its_right_edge() {
        let bins = bin_values(&[0.0, 5.0, 10.0], (0.0, 10.0), 2).unwrap();
        let last = bins.last().unwrap();
        assert_eq!(last.count, 1);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn bin_edges_are_contiguous() {
        let bins = bin_values(&[1.0, 2.0, 3.0], (0.0, 35.0), 10).unwrap();
        for pair in bins.windows(2) {
            assert_eq!(pair[0].x1, pair[1].x0);
        }
        assert_eq!(bins.first().unwrap().x0, 0.0);
        assert_eq!(bins.last().unwrap().x1, 35.0);
    }

    #[test]
    fn shapes_scale_with_bin_counts() {
        let dataset: Dataset = [3.0, 3.2, 3.4, 8.0, 14.0]
            .iter()
            .map(|&v| Record::new().with("value", v))
            .collect();
        let chart = Histogram::new(0, "value");
        let plot = Rect::new(0.0, 0.0, 300.0, 100.0);
        let shapes = chart.shapes(&dataset, plot).unwrap();

        let bars: Vec<&Shape> = shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Rect(_)))
            .collect();
        assert!(!bars.is_empty());
        // The fullest bin spans the whole plot height.
        let tallest = bars
            .iter()
            .filter_map(|s| match s.kind {
                ShapeKind::Rect(r) => Some(r),
                _ => None,
            })
            .min_by(|a, b| a.y0.total_cmp(&b.y0))
            .unwrap();
        assert!(tallest.y0.abs() < 1e-9);
        assert!((tallest.y1 - 100.0).abs() < 1e-9);
    }
}
