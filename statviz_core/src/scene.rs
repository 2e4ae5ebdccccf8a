// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ordered shape container with hit-testing.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::shape::{Shape, ShapeId};

/// A collection of shapes forming one rendered chart.
///
/// Paint order is deterministic: backends iterate [`Scene::ordered`], which
/// sorts by `(z_index, id)`.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a shape.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Adds many shapes.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Returns the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the shapes in paint order: ascending `(z_index, id)`.
    pub fn ordered(&self) -> Vec<&Shape> {
        let mut out: Vec<&Shape> = self.shapes.iter().collect();
        out.sort_by_key(|s| (s.z_index, s.id));
        out
    }

    /// Returns a mutable reference to the shape with the given id.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Returns a reference to the shape with the given id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Returns the topmost hoverable shape containing `point`.
    ///
    /// "Topmost" follows paint order, so among overlapping shapes the one
    /// painted last wins. Shapes without a hover action are transparent to
    /// picking.
    pub fn pick(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| s.hover.is_some() && s.contains(point))
            .max_by_key(|s| (s.z_index, s.id))
            .map(|s| s.id)
    }

    /// Returns the union of all shape bounding boxes.
    pub fn bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for shape in &self.shapes {
            let Some(b) = shape.bounds() else {
                continue;
            };
            rect = Some(match rect {
                None => b,
                Some(r) => r.union(b),
            });
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;
    use crate::shape::{HoverAction, ShapeKind};

    fn hover_rect(id: u64, z: i32, rect: Rect) -> Shape {
        Shape::new(ShapeId(id), ShapeKind::Rect(rect))
            .with_fill(css::STEEL_BLUE)
            .with_z_index(z)
            .with_hover(HoverAction::new("label", "value"))
    }

    #[test]
    fn pick_prefers_topmost_shape() {
        let mut scene = Scene::new();
        scene.push(hover_rect(1, 0, Rect::new(0.0, 0.0, 10.0, 10.0)));
        scene.push(hover_rect(2, 5, Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(scene.pick(Point::new(5.0, 5.0)), Some(ShapeId(2)));
    }

    #[test]
    fn pick_skips_shapes_without_hover() {
        let mut scene = Scene::new();
        scene.push(
            Shape::new(ShapeId(1), ShapeKind::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)))
                .with_z_index(10),
        );
        scene.push(hover_rect(2, 0, Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(scene.pick(Point::new(5.0, 5.0)), Some(ShapeId(2)));
    }

    #[test]
    fn ordered_sorts_by_z_then_id() {
        let mut scene = Scene::new();
        scene.push(hover_rect(3, 0, Rect::new(0.0, 0.0, 1.0, 1.0)));
        scene.push(hover_rect(1, -10, Rect::new(0.0, 0.0, 1.0, 1.0)));
        scene.push(hover_rect(2, 0, Rect::new(0.0, 0.0, 1.0, 1.0)));
        let ids: std::vec::Vec<ShapeId> = scene.ordered().iter().map(|s| s.id).collect();
        assert_eq!(ids, [ShapeId(1), ShapeId(2), ShapeId(3)]);
    }
}
