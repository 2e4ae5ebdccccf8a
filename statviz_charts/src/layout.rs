// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin-convention chart framing.
//!
//! A [`Frame`] is an outer width/height plus a [`Margin`]; the plot rectangle
//! is what remains after the margins are subtracted. Axes render into the
//! margins, series shapes render into the plot rectangle.

use kurbo::{Point, Rect};

use crate::measure::TextMeasurer;

/// Space reserved around the plot rectangle, in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    /// Space above the plot.
    pub top: f64,
    /// Space to the right of the plot.
    pub right: f64,
    /// Space below the plot.
    pub bottom: f64,
    /// Space to the left of the plot.
    pub left: f64,
}

impl Margin {
    /// Creates a margin from the four side thicknesses.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a uniform margin.
    pub fn uniform(size: f64) -> Self {
        Self::new(size, size, size, size)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 30.0, 40.0)
    }
}

/// Outer chart bounds plus margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Margins reserved for guides.
    pub margin: Margin,
}

impl Frame {
    /// Creates a frame with the default margin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Returns the plot rectangle: the frame inset by its margins.
    ///
    /// Degenerate frames collapse to an empty rectangle rather than
    /// inverting.
    pub fn plot(&self) -> Rect {
        let x0 = self.margin.left;
        let y0 = self.margin.top;
        let x1 = (self.width - self.margin.right).max(x0);
        let y1 = (self.height - self.margin.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Returns the center of the plot rectangle.
    pub fn plot_center(&self) -> Point {
        self.plot().center()
    }

    /// Returns a left-margin thickness that fits the widest tick label.
    pub fn left_margin_for_labels(
        measurer: &impl TextMeasurer,
        labels: &[&str],
        font_size: f64,
        tick_size: f64,
        tick_padding: f64,
    ) -> f64 {
        let mut max_w = 0.0_f64;
        for s in labels {
            let (w, _h) = measurer.measure(s, font_size);
            max_w = max_w.max(w);
        }
        tick_size.abs() + tick_padding.max(0.0) + max_w
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn plot_is_frame_inset_by_margins() {
        let frame = Frame::new(600.0, 400.0).with_margin(Margin::new(20.0, 30.0, 35.0, 40.0));
        let plot = frame.plot();
        assert_eq!(plot, Rect::new(40.0, 20.0, 570.0, 365.0));
    }

    #[test]
    fn degenerate_frame_collapses_instead_of_inverting() {
        let frame = Frame::new(10.0, 10.0).with_margin(Margin::uniform(20.0));
        let plot = frame.plot();
        assert!(plot.width() == 0.0 && plot.height() == 0.0);
    }

    #[test]
    fn left_margin_fits_widest_label() {
        let m = HeuristicTextMeasurer;
        let thickness = Frame::left_margin_for_labels(&m, &["5", "10000"], 10.0, 6.0, 3.0);
        // 5 glyphs at 0.6em plus tick and padding.
        assert!((thickness - (6.0 + 3.0 + 30.0)).abs() < 1e-9);
    }
}
