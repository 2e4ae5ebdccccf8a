// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for margin sizing.
//!
//! Text shaping lives downstream of this crate, so frame/guide helpers accept
//! a measurer callback for rough bounds estimation instead of shaping text
//! themselves.

/// A minimal text measurement interface.
///
/// Used to estimate margin thicknesses before shapes are generated. Callers
/// can plug in a real text measurement backend, or use
/// [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the shapes.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for reports and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
