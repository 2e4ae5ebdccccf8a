// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart generation: single series, grouped and stacked.
//!
//! One [`BarChart`] covers all three layouts. A single configured series
//! produces plain bars; multiple series produce side-by-side groups, or
//! stacked segments when [`BarChart::with_stacked`] is set.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use statviz_core::{Dataset, HoverAction, Shape, ShapeId, ShapeKind, Value};

use crate::error::ChartError;
use crate::format::capitalize;
use crate::scale::{ScaleBandSpec, ScaleLinearSpec};
use crate::z_order;

/// One value column drawn as bars, with its fill color.
#[derive(Clone, Debug)]
pub struct BarSeries {
    /// Field holding the numeric value.
    pub key: String,
    /// Bar fill.
    pub color: Color,
}

/// A bar chart configuration.
#[derive(Clone, Debug)]
pub struct BarChart {
    id_base: u64,
    category_key: String,
    series: Vec<BarSeries>,
    stacked: bool,
    band_padding: f64,
}

impl BarChart {
    /// Creates a bar chart over the given category field.
    pub fn new(id_base: u64, category_key: impl Into<String>) -> Self {
        Self {
            id_base,
            category_key: category_key.into(),
            series: Vec::new(),
            stacked: false,
            band_padding: 0.1,
        }
    }

    /// Adds a value series.
    pub fn with_series(mut self, key: impl Into<String>, color: Color) -> Self {
        self.series.push(BarSeries {
            key: key.into(),
            color,
        });
        self
    }

    /// Stacks the series instead of grouping them side by side.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Sets the band padding (inner and outer), in band units.
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding.max(0.0);
        self
    }

    /// Returns the per-record category labels, for the bottom axis.
    pub fn categories(&self, dataset: &Dataset) -> Result<Vec<String>, ChartError> {
        self.check(dataset)?;
        let mut out = Vec::with_capacity(dataset.len());
        for (row, record) in dataset.records().iter().enumerate() {
            let value = record.get(&self.category_key).ok_or_else(|| {
                ChartError::Data(statviz_core::DataError::MissingField {
                    key: self.category_key.clone(),
                    row,
                })
            })?;
            out.push(match value {
                Value::Text(s) => s.clone(),
                Value::Number(n) | Value::Timestamp(n) => alloc::format!("{n}"),
            });
        }
        Ok(out)
    }

    /// Returns the band scale spec for the category axis.
    pub fn band_spec(&self, dataset: &Dataset) -> Result<ScaleBandSpec, ChartError> {
        self.check(dataset)?;
        Ok(ScaleBandSpec::new(dataset.len())
            .with_padding(self.band_padding, self.band_padding))
    }

    /// Returns the linear value scale spec, from zero to the data maximum.
    ///
    /// Grouped bars span to the tallest bar; stacked bars span to the tallest
    /// stack.
    pub fn value_spec(&self, dataset: &Dataset) -> Result<ScaleLinearSpec, ChartError> {
        let columns = self.columns(dataset)?;
        let mut max = 0.0_f64;
        if self.stacked {
            for row in 0..dataset.len() {
                let total: f64 = columns.iter().map(|c| c[row]).sum();
                max = max.max(total);
            }
        } else {
            for column in &columns {
                for &v in column {
                    max = max.max(v);
                }
            }
        }
        Ok(ScaleLinearSpec::new((0.0, max)))
    }

    /// Generates the bar shapes for `plot`.
    pub fn shapes(&self, dataset: &Dataset, plot: Rect) -> Result<Vec<Shape>, ChartError> {
        let columns = self.columns(dataset)?;
        let band = self.band_spec(dataset)?.instantiate((plot.x0, plot.x1));
        let scale = self.value_spec(dataset)?.instantiate((plot.y1, plot.y0));
        let bw = band.band_width();
        let n = dataset.len();
        let n_series = self.series.len();

        let mut out = Vec::with_capacity(n * n_series);
        if self.stacked {
            for row in 0..n {
                let x0 = band.x(row);
                let mut cumulative = 0.0;
                let mut y_prev = scale.map(0.0);
                for (k, series) in self.series.iter().enumerate() {
                    let v = columns[k][row];
                    cumulative += v;
                    let y = scale.map(cumulative);
                    out.push(self.bar(k * n + row, series, v, Rect::new(x0, y, x0 + bw, y_prev)));
                    y_prev = y;
                }
            }
        } else {
            let slot = bw / n_series as f64;
            for (k, series) in self.series.iter().enumerate() {
                for row in 0..n {
                    let v = columns[k][row];
                    let x0 = band.x(row) + slot * k as f64;
                    let y = scale.map(v);
                    out.push(self.bar(
                        k * n + row,
                        series,
                        v,
                        Rect::new(x0, y, x0 + slot, plot.y1),
                    ));
                }
            }
        }
        Ok(out)
    }

    fn bar(&self, offset: usize, series: &BarSeries, value: f64, rect: Rect) -> Shape {
        Shape::new(ShapeId(self.id_base + offset as u64), ShapeKind::Rect(rect))
            .with_fill(series.color)
            .with_z_index(z_order::SERIES_FILL)
            .with_hover(HoverAction::new(capitalize(&series.key), value.to_string()))
    }

    fn check(&self, dataset: &Dataset) -> Result<(), ChartError> {
        if dataset.is_empty() {
            return Err(ChartError::Data(statviz_core::DataError::Empty));
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        Ok(())
    }

    fn columns(&self, dataset: &Dataset) -> Result<Vec<Vec<f64>>, ChartError> {
        self.check(dataset)?;
        self.series
            .iter()
            .map(|s| dataset.numbers(&s.key).map_err(ChartError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;
    use statviz_core::Record;

    use super::*;

    fn fruit() -> Dataset {
        [
            Record::new().with("fruit", "apples").with("count", 10.0).with("price", 2.0),
            Record::new().with("fruit", "pears").with("count", 15.0).with("price", 3.0),
            Record::new().with("fruit", "plums").with("count", 5.0).with("price", 1.0),
        ]
        .into_iter()
        .collect()
    }

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 120.0, 100.0)
    }

    fn rects(shapes: &[Shape]) -> Vec<Rect> {
        shapes
            .iter()
            .map(|s| match s.kind {
                ShapeKind::Rect(r) => r,
                _ => panic!("expected rects"),
            })
            .collect()
    }

    #[test]
    fn single_series_bars_reach_the_baseline() {
        let chart = BarChart::new(0, "fruit").with_series("count", css::STEEL_BLUE);
        let shapes = chart.shapes(&fruit(), plot()).unwrap();
        assert_eq!(shapes.len(), 3);
        for r in rects(&shapes) {
            assert!((r.y1 - 100.0).abs() < 1e-9);
        }
        // Tallest bar spans the full plot height.
        let tallest = rects(&shapes)[1];
        assert!(tallest.y0.abs() < 1e-9);
    }

    #[test]
    fn grouped_bars_split_the_band() {
        let chart = BarChart::new(0, "fruit")
            .with_series("count", css::STEEL_BLUE)
            .with_series("price", css::ORANGE);
        let dataset = fruit();
        let shapes = chart.shapes(&dataset, plot()).unwrap();
        assert_eq!(shapes.len(), 6);

        let band = chart.band_spec(&dataset).unwrap().instantiate((0.0, 120.0));
        let bw = band.band_width();
        let all = rects(&shapes);
        // First series occupies the left half of each band, second the right.
        assert!((all[0].x0 - band.x(0)).abs() < 1e-9);
        assert!((all[0].width() - bw / 2.0).abs() < 1e-9);
        assert!((all[3].x0 - (band.x(0) + bw / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn stacked_segments_tile_without_gaps() {
        let chart = BarChart::new(0, "fruit")
            .with_series("count", css::STEEL_BLUE)
            .with_series("price", css::ORANGE)
            .with_stacked(true);
        let shapes = chart.shapes(&fruit(), plot()).unwrap();
        let all = rects(&shapes);
        // Per record: bottom segment starts at the baseline, top segment
        // starts exactly where the bottom one ends.
        for row in 0..3 {
            let bottom = all[row * 2];
            let top = all[row * 2 + 1];
            assert!((bottom.y1 - 100.0).abs() < 1e-9);
            assert!((top.y1 - bottom.y0).abs() < 1e-9);
        }
    }

    #[test]
    fn stacked_domain_covers_the_tallest_stack() {
        let chart = BarChart::new(0, "fruit")
            .with_series("count", css::STEEL_BLUE)
            .with_series("price", css::ORANGE)
            .with_stacked(true);
        let spec = chart.value_spec(&fruit()).unwrap();
        assert_eq!(spec.domain, (0.0, 18.0));
    }

    #[test]
    fn hover_labels_capitalize_the_series() {
        let chart = BarChart::new(0, "fruit").with_series("count", css::STEEL_BLUE);
        let shapes = chart.shapes(&fruit(), plot()).unwrap();
        let hover = shapes[0].hover.as_ref().unwrap();
        assert_eq!(hover.label, "Count");
        assert_eq!(hover.value, "10");
    }

    #[test]
    fn missing_series_field_is_reported() {
        let chart = BarChart::new(0, "fruit").with_series("weight", css::STEEL_BLUE);
        assert!(matches!(
            chart.shapes(&fruit(), plot()),
            Err(ChartError::Data(_))
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let chart = BarChart::new(0, "fruit").with_series("count", css::STEEL_BLUE);
        assert!(chart.shapes(&Dataset::new(), plot()).is_err());
    }
}
