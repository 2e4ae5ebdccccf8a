// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-series line chart generation.
//!
//! Produces a single polyline over a time-scaled x axis, with optional
//! hoverable point markers at each observation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use statviz_core::{Dataset, HoverAction, Shape, ShapeId, ShapeKind, Stroke};

use crate::error::ChartError;
use crate::scale::{ScaleLinearSpec, ScaleTimeSpec};
use crate::z_order;

/// A line chart configuration.
#[derive(Clone, Debug)]
pub struct LineChart {
    id_base: u64,
    x_key: String,
    y_key: String,
    label_key: Option<String>,
    color: Color,
    stroke_width: f64,
    markers: bool,
    marker_radius: f64,
    tick_count: usize,
}

impl LineChart {
    /// Creates a line chart from a timestamp field to a numeric field.
    pub fn new(id_base: u64, x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self {
            id_base,
            x_key: x_key.into(),
            y_key: y_key.into(),
            label_key: None,
            color: css::STEEL_BLUE,
            stroke_width: 3.0,
            markers: false,
            marker_radius: 5.0,
            tick_count: 10,
        }
    }

    /// Sets the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the line stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Enables hoverable markers at each observation.
    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the marker radius.
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius.max(0.0);
        self
    }

    /// Uses a text field for marker tooltip labels instead of the raw
    /// timestamp.
    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = Some(key.into());
        self
    }

    /// Sets the tick count used when nicing the domains.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Returns the time scale spec for the x axis, niced to tick boundaries.
    pub fn x_spec(&self, dataset: &Dataset) -> Result<ScaleTimeSpec, ChartError> {
        let extent = dataset.extent(&self.x_key)?;
        Ok(ScaleTimeSpec::new(extent).with_nice(true))
    }

    /// Returns the linear y scale spec, from zero to the niced data maximum.
    pub fn y_spec(&self, dataset: &Dataset) -> Result<ScaleLinearSpec, ChartError> {
        let max = dataset.max(&self.y_key)?;
        Ok(ScaleLinearSpec::new((0.0, max)).with_nice(true))
    }

    /// Generates the polyline and optional marker shapes for `plot`.
    pub fn shapes(&self, dataset: &Dataset, plot: Rect) -> Result<Vec<Shape>, ChartError> {
        if dataset.is_empty() {
            return Err(ChartError::Data(statviz_core::DataError::Empty));
        }
        let xs = dataset.numbers(&self.x_key)?;
        let ys = dataset.numbers(&self.y_key)?;
        let labels: Option<Vec<String>> = match &self.label_key {
            Some(key) => Some(dataset.texts(key)?),
            None => None,
        };

        let x_scale = self
            .x_spec(dataset)?
            .instantiate_resolved((plot.x0, plot.x1), self.tick_count);
        let y_scale = self
            .y_spec(dataset)?
            .instantiate_resolved((plot.y1, plot.y0), self.tick_count);

        let mut path = BezPath::new();
        let mut points = Vec::with_capacity(xs.len());
        for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            let p = Point::new(x_scale.map(x), y_scale.map(y));
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
            points.push(p);
        }

        let mut out = Vec::with_capacity(1 + points.len());
        out.push(
            Shape::new(ShapeId(self.id_base), ShapeKind::Path(path))
                .with_stroke(Stroke::solid(self.color, self.stroke_width))
                .with_z_index(z_order::SERIES_STROKE),
        );

        if self.markers {
            for (i, p) in points.iter().enumerate() {
                let label = match &labels {
                    Some(l) => l[i].clone(),
                    None => alloc::format!("{}", xs[i]),
                };
                out.push(
                    Shape::new(
                        ShapeId(self.id_base + 1 + i as u64),
                        ShapeKind::Circle(Circle::new(*p, self.marker_radius)),
                    )
                    .with_fill(self.color)
                    .with_z_index(z_order::SERIES_POINTS)
                    .with_hover(HoverAction::new(label, alloc::format!("{}", ys[i]))),
                );
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use statviz_core::{Record, Value};

    use super::*;

    const DAY: f64 = 86_400.0;

    fn weekly() -> Dataset {
        (0..5)
            .map(|i| {
                Record::new()
                    .with("week", Value::Timestamp(i as f64 * 7.0 * DAY))
                    .with("hours", 30.0 + 5.0 * i as f64)
                    .with("label", alloc::format!("week {i}"))
            })
            .collect()
    }

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 500.0, 300.0)
    }

    #[test]
    fn polyline_visits_every_observation_in_order() {
        let chart = LineChart::new(0, "week", "hours");
        let shapes = chart.shapes(&weekly(), plot()).unwrap();
        assert_eq!(shapes.len(), 1);
        let ShapeKind::Path(path) = &shapes[0].kind else {
            panic!("expected a path");
        };
        assert_eq!(path.elements().len(), 5);
    }

    #[test]
    fn markers_carry_labels_and_values() {
        let chart = LineChart::new(0, "week", "hours")
            .with_markers(true)
            .with_label_key("label");
        let shapes = chart.shapes(&weekly(), plot()).unwrap();
        assert_eq!(shapes.len(), 6);
        let hover = shapes[1].hover.as_ref().unwrap();
        assert_eq!(hover.label, "week 0");
        assert_eq!(hover.value, "30");
    }

    #[test]
    fn y_domain_starts_at_zero_and_covers_the_max() {
        let chart = LineChart::new(0, "week", "hours");
        let spec = chart.y_spec(&weekly()).unwrap();
        assert_eq!(spec.domain.0, 0.0);
        assert!(spec.domain.1 >= 50.0);
    }

    #[test]
    fn markers_map_into_the_plot() {
        let chart = LineChart::new(0, "week", "hours").with_markers(true);
        let shapes = chart.shapes(&weekly(), plot()).unwrap();
        for shape in &shapes[1..] {
            let ShapeKind::Circle(c) = &shape.kind else {
                panic!("expected circles");
            };
            assert!(c.center.x >= 0.0 && c.center.x <= 500.0);
            assert!(c.center.y >= 0.0 && c.center.y <= 300.0);
        }
    }
}
