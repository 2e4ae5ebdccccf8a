// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis shape generation.
//!
//! A single [`AxisSpec`] with an `orient` of `bottom` or `left` generates the
//! domain line, tick marks, tick labels, optional gridlines and an optional
//! title as plain shapes. The axis instantiates its scale against the same
//! plot rectangle as the series shapes, so tick positions and data positions
//! agree by construction.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use statviz_core::{Shape, ShapeId, ShapeKind, Stroke, TextAnchor, TextBaseline, TextShape};

use crate::format::format_tick;
use crate::scale::{ScaleBandSpec, ScaleLinearSpec, ScaleLogSpec, ScaleTimeSpec};
use crate::time::format_time_seconds;
use crate::z_order;

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Stroke for the axis domain line and tick marks.
    pub rule: Stroke,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = Stroke::solid(css::BLACK, 1.0);
        Self {
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush.clone(),
            title_font_size: 11.0,
            rule,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: Stroke,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: Stroke::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0),
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// The scale an axis is generated from.
#[derive(Clone, Debug)]
pub enum AxisScale {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// Continuous log scale.
    Log(ScaleLogSpec),
    /// Continuous time scale (numeric seconds).
    Time(ScaleTimeSpec),
    /// Discrete band scale with one label per band.
    Band(ScaleBandSpec, Vec<String>),
}

impl From<ScaleLinearSpec> for AxisScale {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLogSpec> for AxisScale {
    fn from(value: ScaleLogSpec) -> Self {
        Self::Log(value)
    }
}

impl From<ScaleTimeSpec> for AxisScale {
    fn from(value: ScaleTimeSpec) -> Self {
        Self::Time(value)
    }
}

/// An axis specification (single type + `orient`).
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated shape uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: AxisScale,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks on continuous scales.
    pub tick_count: usize,
    /// Tick line length. Direction depends on [`AxisSpec::orient`].
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridline styling. If `Some`, gridlines span the plot area.
    pub grid: Option<GridStyle>,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from tick labels to the title.
    pub title_offset: f64,
    /// Optional tick label formatter: `(value, step) -> label`.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
    /// Tick label rotation angle in degrees.
    pub label_angle: f64,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("title", &self.title)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .field("label_angle", &self.label_angle)
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification with sensible defaults.
    pub fn new(id_base: u64, scale: impl Into<AxisScale>, orient: AxisOrient) -> Self {
        let tick_padding = match orient {
            AxisOrient::Bottom => 9.0,
            AxisOrient::Left => 6.0,
        };
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 6.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            title_offset: 10.0,
            tick_formatter: None,
            label_angle: 0.0,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Convenience constructor for a bottom axis over labeled bands.
    pub fn band_bottom(id_base: u64, spec: ScaleBandSpec, labels: Vec<String>) -> Self {
        Self::new(id_base, AxisScale::Band(spec, labels), AxisOrient::Bottom)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set tick label rotation angle in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title offset in scene coordinates.
    pub fn with_title_offset(mut self, title_offset: f64) -> Self {
        self.title_offset = title_offset;
        self
    }

    /// Returns `(tick values, step)` in domain units; band ticks are indices.
    fn tick_values(&self) -> (Vec<f64>, f64) {
        match &self.scale {
            AxisScale::Linear(s) => {
                let ticks = s.instantiate_resolved((0.0, 1.0), self.tick_count).ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            AxisScale::Log(s) => {
                let ticks = s.instantiate((0.0, 1.0)).ticks(self.tick_count);
                (ticks, 0.0)
            }
            AxisScale::Time(s) => {
                let ticks = s.instantiate_resolved((0.0, 1.0), self.tick_count).ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            AxisScale::Band(_, labels) => {
                let ticks: Vec<f64> = (0..labels.len()).map(|i| i as f64).collect();
                (ticks, 1.0)
            }
        }
    }

    fn format_tick(&self, i: usize, v: f64, step: f64) -> String {
        if let AxisScale::Band(_, labels) = &self.scale {
            return labels.get(i).cloned().unwrap_or_default();
        }
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => match self.scale {
                AxisScale::Time(_) => format_time_seconds(v, step),
                _ => format_tick(v, step),
            },
        }
    }

    /// Returns the range-space position of a tick value against `plot`.
    fn tick_pos(&self, v: f64, plot: Rect) -> f64 {
        let range = match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        };
        match &self.scale {
            AxisScale::Linear(s) => s.instantiate_resolved(range, self.tick_count).map(v),
            AxisScale::Log(s) => s.instantiate(range).map(v),
            AxisScale::Time(s) => s.instantiate_resolved(range, self.tick_count).map(v),
            AxisScale::Band(s, _) => {
                let band = s.instantiate(range);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "band ticks are generated as non-negative indices"
                )]
                let index = v as usize;
                band.x(index) + 0.5 * band.band_width()
            }
        }
    }

    /// Generate axis shapes for the given plot rectangle.
    pub fn shapes(&self, plot: Rect) -> Vec<Shape> {
        match self.orient {
            AxisOrient::Bottom => self.shapes_bottom(plot),
            AxisOrient::Left => self.shapes_left(plot),
        }
    }

    fn shapes_bottom(&self, plot: Rect) -> Vec<Shape> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let (ticks, step) = self.tick_values();

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            for (i, v) in ticks.iter().copied().enumerate() {
                let x = self.tick_pos(v, plot);
                if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                    continue;
                }
                let mut path = BezPath::new();
                path.move_to((x, plot.y0));
                path.line_to((x, plot.y1));
                out.push(stroked(
                    self.id_base + 2000 + i as u64,
                    path,
                    grid.stroke.clone(),
                    z_order::GRID_LINES,
                ));
            }
        }

        if self.show_domain {
            let mut domain = BezPath::new();
            domain.move_to((plot.x0, y));
            domain.line_to((plot.x1, y));
            out.push(stroked(
                self.id_base,
                domain,
                self.style.rule.clone(),
                z_order::AXIS_RULES,
            ));
        }

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = self.tick_pos(v, plot);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            if self.ticks {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x, y + tick_size));
                out.push(stroked(
                    self.id_base + 100 + i as u64,
                    tick,
                    self.style.rule.clone(),
                    z_order::AXIS_RULES,
                ));
            }

            if self.labels {
                // Clamp the first and last label inside the plot span so long
                // edge labels don't escape the frame.
                let anchor = if self.label_angle != 0.0 {
                    TextAnchor::End
                } else if i == 0 && !matches!(self.scale, AxisScale::Band(..)) {
                    TextAnchor::Start
                } else if i + 1 == ticks_len && !matches!(self.scale, AxisScale::Band(..)) {
                    TextAnchor::End
                } else {
                    TextAnchor::Middle
                };
                out.push(
                    Shape::new(
                        ShapeId(self.id_base + 1000 + i as u64),
                        ShapeKind::Text(TextShape {
                            pos: Point::new(x, y + tick_extent + self.tick_padding),
                            text: self.format_tick(i, v, step),
                            font_size: self.style.label_font_size,
                            angle: self.label_angle,
                            anchor,
                            baseline: TextBaseline::Hanging,
                        }),
                    )
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS),
                );
            }
        }

        if let Some(title) = &self.title {
            out.push(
                Shape::new(
                    ShapeId(self.id_base + 9000),
                    ShapeKind::Text(TextShape {
                        pos: Point::new(
                            plot.center().x,
                            y + tick_extent + self.tick_padding + self.title_offset,
                        ),
                        text: title.clone(),
                        font_size: self.style.title_font_size,
                        angle: 0.0,
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Hanging,
                    }),
                )
                .with_fill(self.style.title_fill.clone())
                .with_z_index(z_order::AXIS_TITLES),
            );
        }

        out
    }

    fn shapes_left(&self, plot: Rect) -> Vec<Shape> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let (ticks, step) = self.tick_values();

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            for (i, v) in ticks.iter().copied().enumerate() {
                let y = self.tick_pos(v, plot);
                if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                    continue;
                }
                let mut path = BezPath::new();
                path.move_to((plot.x0, y));
                path.line_to((plot.x1, y));
                out.push(stroked(
                    self.id_base + 2000 + i as u64,
                    path,
                    grid.stroke.clone(),
                    z_order::GRID_LINES,
                ));
            }
        }

        if self.show_domain {
            let mut domain = BezPath::new();
            domain.move_to((x, plot.y0));
            domain.line_to((x, plot.y1));
            out.push(stroked(
                self.id_base,
                domain,
                self.style.rule.clone(),
                z_order::AXIS_RULES,
            ));
        }

        for (i, v) in ticks.iter().copied().enumerate() {
            let y = self.tick_pos(v, plot);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }

            if self.ticks {
                let mut tick = BezPath::new();
                tick.move_to((x, y));
                tick.line_to((x - tick_size, y));
                out.push(stroked(
                    self.id_base + 100 + i as u64,
                    tick,
                    self.style.rule.clone(),
                    z_order::AXIS_RULES,
                ));
            }

            if self.labels {
                out.push(
                    Shape::new(
                        ShapeId(self.id_base + 1000 + i as u64),
                        ShapeKind::Text(TextShape {
                            pos: Point::new(x - tick_extent - self.tick_padding, y),
                            text: self.format_tick(i, v, step),
                            font_size: self.style.label_font_size,
                            angle: self.label_angle,
                            anchor: TextAnchor::End,
                            baseline: TextBaseline::Middle,
                        }),
                    )
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS),
                );
            }
        }

        if let Some(title) = &self.title {
            out.push(
                Shape::new(
                    ShapeId(self.id_base + 9000),
                    ShapeKind::Text(TextShape {
                        pos: Point::new(
                            x - tick_extent - self.tick_padding - self.title_offset,
                            plot.center().y,
                        ),
                        text: title.clone(),
                        font_size: self.style.title_font_size,
                        angle: -90.0,
                        anchor: TextAnchor::Middle,
                        baseline: TextBaseline::Alphabetic,
                    }),
                )
                .with_fill(self.style.title_fill.clone())
                .with_z_index(z_order::AXIS_TITLES),
            );
        }

        out
    }
}

fn stroked(id: u64, path: BezPath, stroke: Stroke, z: i32) -> Shape {
    Shape::new(ShapeId(id), ShapeKind::Path(path))
        .with_stroke(stroke)
        .with_z_index(z)
}

fn tick_step(ticks: &[f64]) -> f64 {
    if ticks.len() >= 2 {
        (ticks[1] - ticks[0]).abs()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn plot() -> Rect {
        Rect::new(40.0, 20.0, 540.0, 320.0)
    }

    fn texts(shapes: &[Shape]) -> Vec<&TextShape> {
        shapes
            .iter()
            .filter_map(|s| match &s.kind {
                ShapeKind::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_labels_sit_below_the_plot() {
        let axis =
            AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 100.0))).with_tick_count(5);
        let shapes = axis.shapes(plot());
        let labels = texts(&shapes);
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|t| t.pos.y > 320.0));
    }

    #[test]
    fn left_axis_labels_are_end_anchored() {
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 10.0)));
        let shapes = axis.shapes(plot());
        let labels = texts(&shapes);
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|t| t.anchor == TextAnchor::End));
        assert!(labels.iter().all(|t| t.pos.x < 40.0));
    }

    #[test]
    fn band_axis_uses_category_labels_at_band_centers() {
        let labels = vec!["apples".to_string(), "pears".to_string(), "plums".to_string()];
        let axis = AxisSpec::band_bottom(0, ScaleBandSpec::new(3), labels);
        let shapes = axis.shapes(plot());
        let label_shapes = texts(&shapes);
        let names: Vec<&str> = label_shapes.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(names, ["apples", "pears", "plums"]);
        // Band centers are strictly increasing across the plot.
        assert!(label_shapes[0].pos.x < label_shapes[1].pos.x);
        assert!(label_shapes[1].pos.x < label_shapes[2].pos.x);
    }

    #[test]
    fn grid_lines_span_the_plot() {
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 10.0)))
            .with_grid(GridStyle::default());
        let shapes = axis.shapes(plot());
        let grids: Vec<&Shape> = shapes
            .iter()
            .filter(|s| s.z_index == z_order::GRID_LINES)
            .collect();
        assert!(!grids.is_empty());
        for g in grids {
            let b = g.bounds().unwrap();
            assert!((b.x0 - 40.0).abs() < 1e-9 && (b.x1 - 540.0).abs() < 1e-9);
        }
    }

    #[test]
    fn custom_formatter_overrides_labels() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(2)
            .with_tick_formatter(|_v, _step| String::from("X"));
        let shapes = axis.shapes(plot());
        assert!(texts(&shapes).iter().all(|t| t.text == "X"));
    }
}
