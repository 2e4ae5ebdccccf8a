// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie and donut chart generation.
//!
//! Slice layout preserves record order: spans are proportional to each value
//! and sum to a full turn. Angles follow the clock convention (zero at
//! 12 o'clock, increasing clockwise).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Circle, Point, Shape as _};
use peniko::Color;
use statviz_core::{
    CATEGORY10, Dataset, HoverAction, Shape, ShapeId, ShapeKind, TextAnchor, TextBaseline,
    TextShape, category10,
};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;
use crate::layout::Frame;
use crate::z_order;

/// One laid-out slice: a clockwise angular span from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl PieSlice {
    /// Returns the mid angle of the span.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }
}

/// Lays out slices for the given values, preserving their order.
///
/// Negative values and an all-zero total are rejected; zero-valued entries
/// produce empty spans so slice indexes still line up with record indexes.
pub fn pie_layout(values: &[f64]) -> Result<Vec<PieSlice>, ChartError> {
    let mut total = 0.0;
    for (row, &v) in values.iter().enumerate() {
        if v < 0.0 {
            return Err(ChartError::NegativeSlice {
                key: String::new(),
                value: v,
                row,
            });
        }
        total += v;
    }
    if total <= 0.0 {
        return Err(ChartError::ZeroTotal);
    }

    let mut out = Vec::with_capacity(values.len());
    let mut angle = 0.0;
    for &v in values {
        let sweep = v / total * TAU;
        out.push(PieSlice {
            start_angle: angle,
            end_angle: angle + sweep,
        });
        angle += sweep;
    }
    // Close the final span exactly despite accumulated rounding.
    if let Some(last) = out.last_mut() {
        last.end_angle = TAU;
    }
    Ok(out)
}

/// A pie or donut chart configuration.
#[derive(Clone, Debug)]
pub struct PieChart {
    id_base: u64,
    value_key: String,
    label_key: String,
    detail_key: Option<String>,
    palette: Vec<Color>,
    inner_radius: f64,
    pad_angle: f64,
    label_margin: f64,
    label_font_size: f64,
    tolerance: f64,
}

impl PieChart {
    /// Creates a pie over a value field, labeled by a second field.
    pub fn new(
        id_base: u64,
        value_key: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            id_base,
            value_key: value_key.into(),
            label_key: label_key.into(),
            detail_key: None,
            palette: CATEGORY10.to_vec(),
            inner_radius: 0.0,
            pad_angle: 0.0,
            label_margin: 40.0,
            label_font_size: 15.0,
            tolerance: 0.1,
        }
    }

    /// Uses a separate field for the tooltip value line.
    pub fn with_detail_key(mut self, key: impl Into<String>) -> Self {
        self.detail_key = Some(key.into());
        self
    }

    /// Sets the slice color palette (indexed by record order, wrapping).
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the inner radius; a positive value makes a donut.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius.max(0.0);
        self
    }

    /// Sets the angular gap between slices, split evenly on both sides.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle.max(0.0);
        self
    }

    /// Sets how far inward from the outer radius labels sit.
    pub fn with_label_margin(mut self, label_margin: f64) -> Self {
        self.label_margin = label_margin;
        self
    }

    /// Sets the label font size.
    pub fn with_label_font_size(mut self, label_font_size: f64) -> Self {
        self.label_font_size = label_font_size;
        self
    }

    /// Generates slice and label shapes centered in `frame`.
    ///
    /// The outer radius is half the smaller frame extent minus the top
    /// margin.
    pub fn shapes(&self, dataset: &Dataset, frame: &Frame) -> Result<Vec<Shape>, ChartError> {
        if dataset.is_empty() {
            return Err(ChartError::Data(statviz_core::DataError::Empty));
        }
        let values = dataset.numbers(&self.value_key)?;
        let slices = pie_layout(&values).map_err(|e| match e {
            ChartError::NegativeSlice { value, row, .. } => ChartError::NegativeSlice {
                key: self.value_key.clone(),
                value,
                row,
            },
            other => other,
        })?;
        let labels = dataset.texts(&self.label_key)?;
        let details: Vec<String> = match &self.detail_key {
            Some(key) => dataset.texts(key)?,
            None => values.iter().map(|v| alloc::format!("{v}")).collect(),
        };

        let center = Point::new(0.5 * frame.width, 0.5 * frame.height);
        let outer = (0.5 * frame.width.min(frame.height) - frame.margin.top).max(0.0);
        let label_radius = {
            let r = outer - self.label_margin;
            if r <= self.inner_radius || r >= outer {
                0.5 * (self.inner_radius + outer)
            } else {
                r
            }
        };

        let circle = Circle::new(center, outer);
        let mut out = Vec::with_capacity(slices.len() * 2);
        for (i, slice) in slices.iter().enumerate() {
            let sweep = (slice.end_angle - slice.start_angle - self.pad_angle).max(0.0);
            if sweep == 0.0 {
                continue;
            }
            let start = slice.start_angle + 0.5 * (slice.end_angle - slice.start_angle - sweep);
            // Rotate so angle zero points up instead of along +x.
            let segment = circle.segment(self.inner_radius, start - FRAC_PI_2, sweep);
            let path = segment.path_elements(self.tolerance).collect();

            let color = self
                .palette
                .get(i % self.palette.len().max(1))
                .copied()
                .unwrap_or_else(|| category10(i));
            out.push(
                Shape::new(ShapeId(self.id_base + i as u64), ShapeKind::Path(path))
                    .with_fill(color)
                    .with_z_index(z_order::SERIES_FILL)
                    .with_hover(HoverAction::new(labels[i].clone(), details[i].clone())),
            );

            let mid = slice.mid_angle();
            let pos = Point::new(
                center.x + label_radius * mid.sin(),
                center.y - label_radius * mid.cos(),
            );
            out.push(
                Shape::new(
                    ShapeId(self.id_base + 100 + i as u64),
                    ShapeKind::Text(TextShape {
                        pos,
                        text: labels[i].clone(),
                        font_size: self.label_font_size,
                        angle: 0.0,
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Middle,
                    }),
                )
                .with_fill(peniko::color::palette::css::BLACK)
                .with_z_index(z_order::SERIES_LABELS),
            );
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use statviz_core::Record;

    use super::*;
    use crate::layout::Margin;

    fn phones() -> Dataset {
        [
            Record::new().with("vendor", "Alpha").with("share", 40.0),
            Record::new().with("vendor", "Beta").with("share", 40.0),
            Record::new().with("vendor", "Gamma").with("share", 20.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn layout_preserves_order_and_closes_the_circle() {
        let slices = pie_layout(&[40.0, 40.0, 20.0]).unwrap();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        assert!((slices[2].end_angle - TAU).abs() < 1e-12);
        // 40% of the circle.
        assert!((slices[0].end_angle - 0.4 * TAU).abs() < 1e-12);
    }

    #[test]
    fn layout_rejects_negative_and_all_zero_values() {
        assert!(matches!(
            pie_layout(&[10.0, -1.0]),
            Err(ChartError::NegativeSlice { row: 1, .. })
        ));
        assert!(matches!(pie_layout(&[0.0, 0.0]), Err(ChartError::ZeroTotal)));
    }

    #[test]
    fn zero_valued_slices_keep_indexes_aligned() {
        let slices = pie_layout(&[10.0, 0.0, 10.0]).unwrap();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].start_angle, slices[1].end_angle);
    }

    #[test]
    fn slices_carry_hover_and_labels_sit_inside_the_radius() {
        let frame = Frame::new(400.0, 400.0).with_margin(Margin::uniform(40.0));
        let chart = PieChart::new(0, "share", "vendor");
        let shapes = chart.shapes(&phones(), &frame).unwrap();
        // Three slices and three labels.
        assert_eq!(shapes.len(), 6);

        let center = Point::new(200.0, 200.0);
        let outer = 160.0;
        for shape in &shapes {
            match &shape.kind {
                ShapeKind::Path(_) => {
                    let hover = shape.hover.as_ref().unwrap();
                    assert!(!hover.label.is_empty());
                }
                ShapeKind::Text(t) => {
                    let d = (t.pos - center).hypot();
                    assert!(d < outer);
                }
                _ => panic!("unexpected shape"),
            }
        }
    }

    #[test]
    fn donut_hole_is_not_hoverable() {
        let frame = Frame::new(400.0, 400.0).with_margin(Margin::uniform(40.0));
        let chart = PieChart::new(0, "share", "vendor").with_inner_radius(80.0);
        let shapes = chart.shapes(&phones(), &frame).unwrap();
        let center = Point::new(200.0, 200.0);
        for shape in shapes {
            if matches!(shape.kind, ShapeKind::Path(_)) {
                assert!(!shape.contains(center));
            }
        }
    }
}
