// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter plot generation over a log-scaled x axis.
//!
//! Point appearance is driven by declarative policies instead of callbacks:
//! [`FillPolicy`] picks each point's color, [`RadiusPolicy`] its size and
//! [`HoverPolicy`] its tooltip.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};
use peniko::Color;
use peniko::color::palette::css;
use statviz_core::{Dataset, HoverAction, Shape, ShapeId, ShapeKind, Value};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ChartError;
use crate::scale::{ScaleLinearSpec, ScaleLogSpec};
use crate::z_order;

/// How scatter points are colored.
#[derive(Clone, Debug)]
pub enum FillPolicy {
    /// Every point uses the same color.
    Constant(Color),
    /// Points are colored by a categorical field; categories are assigned
    /// palette entries in first-seen order, wrapping.
    ByCategory {
        /// Categorical field name.
        key: String,
        /// Color palette.
        palette: Vec<Color>,
    },
}

/// How scatter point radii are chosen.
#[derive(Clone, Debug)]
pub enum RadiusPolicy {
    /// Every point uses the same radius.
    Constant(f64),
    /// Radii follow a log scale over the field's extent, rounded to whole
    /// scene units.
    LogScaled {
        /// Numeric field name.
        key: String,
        /// Output radius range `(min, max)`.
        range: (f64, f64),
    },
}

/// What scatter point tooltips show.
#[derive(Clone, Debug)]
pub enum HoverPolicy {
    /// No hover behavior.
    None,
    /// A fixed label line plus the listed fields joined by `", "`.
    Fields {
        /// Tooltip label line.
        label: String,
        /// Fields whose display values form the tooltip value line.
        keys: Vec<String>,
    },
}

/// A scatter plot configuration.
#[derive(Clone, Debug)]
pub struct ScatterChart {
    id_base: u64,
    x_key: String,
    y_key: String,
    x_floor: f64,
    y_floor: f64,
    fill: FillPolicy,
    radius: RadiusPolicy,
    hover: HoverPolicy,
    tick_count: usize,
}

impl ScatterChart {
    /// Creates a scatter plot of `y_key` against log-scaled `x_key`.
    pub fn new(id_base: u64, x_key: impl Into<String>, y_key: impl Into<String>) -> Self {
        Self {
            id_base,
            x_key: x_key.into(),
            y_key: y_key.into(),
            x_floor: 1.0,
            y_floor: 0.0,
            fill: FillPolicy::Constant(css::STEEL_BLUE),
            radius: RadiusPolicy::Constant(5.0),
            hover: HoverPolicy::None,
            tick_count: 10,
        }
    }

    /// Sets the lower end of the log x domain (must be strictly positive).
    pub fn with_x_floor(mut self, x_floor: f64) -> Self {
        self.x_floor = x_floor;
        self
    }

    /// Sets the lower end of the linear y domain.
    pub fn with_y_floor(mut self, y_floor: f64) -> Self {
        self.y_floor = y_floor;
        self
    }

    /// Sets the fill policy.
    pub fn with_fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the radius policy.
    pub fn with_radius(mut self, radius: RadiusPolicy) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the hover policy.
    pub fn with_hover(mut self, hover: HoverPolicy) -> Self {
        self.hover = hover;
        self
    }

    /// Returns the log x scale spec: from the floor to twice the data
    /// maximum, leaving headroom for the largest point.
    pub fn x_spec(&self, dataset: &Dataset) -> Result<ScaleLogSpec, ChartError> {
        let xs = dataset.numbers(&self.x_key)?;
        for (row, &v) in xs.iter().enumerate() {
            if v <= 0.0 {
                return Err(ChartError::NonPositiveLogValue {
                    key: self.x_key.clone(),
                    value: v,
                    row,
                });
            }
        }
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        ScaleLogSpec::new((self.x_floor, 2.0 * max))
    }

    /// Returns the linear y scale spec, niced, from the floor to the data
    /// maximum.
    pub fn y_spec(&self, dataset: &Dataset) -> Result<ScaleLinearSpec, ChartError> {
        let max = dataset.max(&self.y_key)?;
        Ok(ScaleLinearSpec::new((self.y_floor, max)).with_nice(true))
    }

    /// Generates the point shapes for `plot`.
    pub fn shapes(&self, dataset: &Dataset, plot: Rect) -> Result<Vec<Shape>, ChartError> {
        if dataset.is_empty() {
            return Err(ChartError::Data(statviz_core::DataError::Empty));
        }
        let xs = dataset.numbers(&self.x_key)?;
        let ys = dataset.numbers(&self.y_key)?;
        let x_scale = self.x_spec(dataset)?.instantiate((plot.x0, plot.x1));
        let y_scale = self
            .y_spec(dataset)?
            .instantiate_resolved((plot.y1, plot.y0), self.tick_count);

        let fills = self.fills(dataset)?;
        let radii = self.radii(dataset)?;
        let hovers = self.hovers(dataset)?;

        let mut out = Vec::with_capacity(dataset.len());
        for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
            let center = Point::new(x_scale.map(x), y_scale.map(y));
            let mut shape = Shape::new(
                ShapeId(self.id_base + i as u64),
                ShapeKind::Circle(Circle::new(center, radii[i])),
            )
            .with_fill(fills[i])
            .with_z_index(z_order::SERIES_POINTS);
            if let Some(hover) = &hovers {
                shape = shape.with_hover(hover[i].clone());
            }
            out.push(shape);
        }
        Ok(out)
    }

    fn fills(&self, dataset: &Dataset) -> Result<Vec<Color>, ChartError> {
        match &self.fill {
            FillPolicy::Constant(color) => Ok(alloc::vec![*color; dataset.len()]),
            FillPolicy::ByCategory { key, palette } => {
                if palette.is_empty() {
                    return Err(ChartError::SeriesColorMismatch {
                        series: dataset.len(),
                        colors: 0,
                    });
                }
                let categories = dataset.texts(key)?;
                let distinct = dataset.distinct_texts(key)?;
                Ok(categories
                    .iter()
                    .map(|c| {
                        let index = distinct.iter().position(|d| d == c).unwrap_or(0);
                        palette[index % palette.len()]
                    })
                    .collect())
            }
        }
    }

    fn radii(&self, dataset: &Dataset) -> Result<Vec<f64>, ChartError> {
        match &self.radius {
            RadiusPolicy::Constant(r) => Ok(alloc::vec![*r; dataset.len()]),
            RadiusPolicy::LogScaled { key, range } => {
                let values = dataset.numbers(key)?;
                for (row, &v) in values.iter().enumerate() {
                    if v <= 0.0 {
                        return Err(ChartError::NonPositiveLogValue {
                            key: key.clone(),
                            value: v,
                            row,
                        });
                    }
                }
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let scale = ScaleLogSpec::new((min, max))?.instantiate(*range);
                Ok(values.iter().map(|&v| scale.map(v).round()).collect())
            }
        }
    }

    fn hovers(&self, dataset: &Dataset) -> Result<Option<Vec<HoverAction>>, ChartError> {
        match &self.hover {
            HoverPolicy::None => Ok(None),
            HoverPolicy::Fields { label, keys } => {
                let mut out = Vec::with_capacity(dataset.len());
                for (row, record) in dataset.records().iter().enumerate() {
                    let mut parts = Vec::with_capacity(keys.len());
                    for key in keys {
                        let value = record.get(key).ok_or_else(|| {
                            ChartError::Data(statviz_core::DataError::MissingField {
                                key: key.clone(),
                                row,
                            })
                        })?;
                        parts.push(match value {
                            Value::Text(s) => s.clone(),
                            Value::Number(n) | Value::Timestamp(n) => alloc::format!("{n}"),
                        });
                    }
                    out.push(HoverAction::new(label.clone(), parts.join(", ")));
                }
                Ok(Some(out))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use statviz_core::Record;

    use super::*;

    fn countries() -> Dataset {
        [
            Record::new()
                .with("gdp", 1_000.0)
                .with("life", 55.0)
                .with("population", 10_000_000.0)
                .with("country", "Avalon")
                .with("continent", "Asia"),
            Record::new()
                .with("gdp", 20_000.0)
                .with("life", 75.0)
                .with("population", 80_000_000.0)
                .with("country", "Brystal")
                .with("continent", "Europe"),
            Record::new()
                .with("gdp", 45_000.0)
                .with("life", 82.0)
                .with("population", 300_000_000.0)
                .with("country", "Cindria")
                .with("continent", "Asia"),
        ]
        .into_iter()
        .collect()
    }

    fn plot() -> Rect {
        Rect::new(0.0, 0.0, 600.0, 400.0)
    }

    #[test]
    fn x_domain_doubles_the_maximum() {
        let chart = ScatterChart::new(0, "gdp", "life").with_x_floor(200.0);
        let spec = chart.x_spec(&countries()).unwrap();
        assert_eq!(spec.domain(), (200.0, 90_000.0));
    }

    #[test]
    fn non_positive_x_values_are_rejected() {
        let mut dataset = countries();
        dataset.push(
            Record::new()
                .with("gdp", 0.0)
                .with("life", 60.0)
                .with("population", 1.0)
                .with("country", "Drift")
                .with("continent", "Asia"),
        );
        let chart = ScatterChart::new(0, "gdp", "life").with_x_floor(200.0);
        assert!(matches!(
            chart.x_spec(&dataset),
            Err(ChartError::NonPositiveLogValue { row: 3, .. })
        ));
    }

    #[test]
    fn category_fill_assigns_palette_in_first_seen_order() {
        let chart = ScatterChart::new(0, "gdp", "life").with_fill(FillPolicy::ByCategory {
            key: String::from("continent"),
            palette: alloc::vec![css::RED, css::BLUE],
        });
        let fills = chart.fills(&countries()).unwrap();
        assert_eq!(fills, [css::RED, css::BLUE, css::RED]);
    }

    #[test]
    fn log_radii_are_rounded_and_within_range() {
        let chart = ScatterChart::new(0, "gdp", "life").with_radius(RadiusPolicy::LogScaled {
            key: String::from("population"),
            range: (2.0, 12.0),
        });
        let radii = chart.radii(&countries()).unwrap();
        assert_eq!(radii[0], 2.0);
        assert_eq!(radii[2], 12.0);
        for r in radii {
            assert_eq!(r, r.round());
            assert!((2.0..=12.0).contains(&r));
        }
    }

    #[test]
    fn hover_joins_the_requested_fields() {
        let chart = ScatterChart::new(0, "gdp", "life").with_hover(HoverPolicy::Fields {
            label: String::from("Country"),
            keys: alloc::vec![String::from("country"), String::from("continent")],
        });
        let shapes = chart.shapes(&countries(), plot()).unwrap();
        let hover = shapes[0].hover.as_ref().unwrap();
        assert_eq!(hover.label, "Country");
        assert_eq!(hover.value, "Avalon, Asia");
    }

    #[test]
    fn points_land_inside_the_plot() {
        let chart = ScatterChart::new(0, "gdp", "life").with_x_floor(200.0);
        let shapes = chart.shapes(&countries(), plot()).unwrap();
        for shape in shapes {
            let ShapeKind::Circle(c) = shape.kind else {
                panic!("expected circles");
            };
            assert!(c.center.x >= 0.0 && c.center.x <= 600.0);
            assert!(c.center.y >= 0.0 && c.center.y <= 400.0);
        }
    }
}
