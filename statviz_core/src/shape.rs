// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape descriptors.
//!
//! Chart builders compile configurations into plain shapes; backends paint
//! them. Shapes are regenerated on every render and never mutated in place,
//! except for fill swaps driven by the hover state machine.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Circle, Point, Rect, Shape as _};
use peniko::Brush;

/// A stable shape identity.
///
/// Chart builders derive ids deterministically from an id base plus offsets,
/// so paint order ties break the same way on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Creates an id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// A paint + width pair for stroked shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub width: f64,
}

impl Stroke {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
        }
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    #[default]
    Start,
    /// Anchor at the middle of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor.
    #[default]
    Middle,
    /// Standard alphabetic baseline.
    Alphabetic,
    /// Hang the text below the anchor.
    Hanging,
}

/// An unshaped text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around the anchor.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

/// Shape geometry variants.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A Bézier path.
    Path(BezPath),
    /// A circle.
    Circle(Circle),
    /// A text run.
    Text(TextShape),
}

/// Tooltip payload attached to a hoverable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverAction {
    /// Tooltip label line.
    pub label: String,
    /// Tooltip value line.
    pub value: String,
    /// Fill shade percentage applied on pointer-enter (negative darkens).
    pub shade_percent: i32,
}

impl HoverAction {
    /// Creates a hover action with the standard -30% darken.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            shade_percent: -30,
        }
    }

    /// Sets the shade percentage.
    pub fn with_shade_percent(mut self, shade_percent: i32) -> Self {
        self.shade_percent = shade_percent;
        self
    }
}

/// A single renderable shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Stable shape id.
    pub id: ShapeId,
    /// Rendering order hint; backends sort by `(z_index, id)`.
    pub z_index: i32,
    /// Geometry.
    pub kind: ShapeKind,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<Stroke>,
    /// Optional hover/tooltip behavior.
    pub hover: Option<HoverAction>,
}

impl Shape {
    /// Creates a shape with a default fill, no stroke and no hover action.
    pub fn new(id: ShapeId, kind: ShapeKind) -> Self {
        Self {
            id,
            z_index: 0,
            kind,
            fill: Brush::default(),
            stroke: None,
            hover: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Attaches a hover action.
    pub fn with_hover(mut self, hover: HoverAction) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Returns `true` if the shape's geometry contains `point`.
    ///
    /// Text runs have no hit area.
    pub fn contains(&self, point: Point) -> bool {
        match &self.kind {
            ShapeKind::Rect(r) => r.contains(point),
            ShapeKind::Path(p) => p.contains(point),
            ShapeKind::Circle(c) => c.contains(point),
            ShapeKind::Text(_) => false,
        }
    }

    /// Returns the geometry's bounding box, or `None` for text.
    pub fn bounds(&self) -> Option<Rect> {
        match &self.kind {
            ShapeKind::Rect(r) => Some(*r),
            ShapeKind::Path(p) => Some(p.bounding_box()),
            ShapeKind::Circle(c) => Some(c.bounding_box()),
            ShapeKind::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rect_contains_its_center() {
        let shape = Shape::new(ShapeId(1), ShapeKind::Rect(Rect::new(0.0, 0.0, 10.0, 20.0)));
        assert!(shape.contains(Point::new(5.0, 10.0)));
        assert!(!shape.contains(Point::new(15.0, 10.0)));
    }

    #[test]
    fn text_has_no_hit_area() {
        let shape = Shape::new(
            ShapeId(2),
            ShapeKind::Text(TextShape {
                pos: Point::new(5.0, 5.0),
                text: String::from("label"),
                font_size: 10.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
            }),
        );
        assert!(!shape.contains(Point::new(5.0, 5.0)));
    }
}
