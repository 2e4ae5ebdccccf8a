// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover interaction and the tooltip state object.
//!
//! The tooltip is an explicit state object with a `show`/`hide` contract
//! rather than a shared mutable element. [`HoverState`] serializes
//! enter/exit transitions: each [`HoverState::pointer_moved`] call fully
//! reads the scene and fully writes the tooltip before returning, matching
//! the one-event-at-a-time dispatch model of the UI layer it abstracts.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;

use crate::color::shade;
use crate::scene::Scene;
use crate::shape::ShapeId;

/// Tooltip content and visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    label: String,
    value: String,
    position: Point,
}

impl Tooltip {
    /// Creates a hidden, empty tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the tooltip with the given content at `position`.
    pub fn show(&mut self, label: impl Into<String>, value: impl Into<String>, position: Point) {
        self.label = label.into();
        self.value = value.into();
        self.position = position;
        self.visible = true;
    }

    /// Hides the tooltip and clears its content.
    pub fn hide(&mut self) {
        self.visible = false;
        self.label.clear();
        self.value.clear();
    }

    /// Returns `true` if the tooltip is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the label line.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the value line.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the anchor position.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Tracks which shape is hovered and its pre-hover fill.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    hovered: Option<(ShapeId, Brush)>,
}

impl HoverState {
    /// Creates a state with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently hovered shape, if any.
    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered.as_ref().map(|(id, _)| *id)
    }

    /// Processes a pointer move over `scene`.
    ///
    /// Exiting a shape restores its saved fill and hides the tooltip;
    /// entering one saves its fill, darkens it by the shape's shade
    /// percentage, and shows the tooltip at the pointer. Moving within the
    /// same shape only repositions the tooltip.
    pub fn pointer_moved(
        &mut self,
        scene: &mut Scene,
        tooltip: &mut Tooltip,
        point: Point,
    ) -> Option<ShapeId> {
        let hit = scene.pick(point);

        if let Some((current, _)) = &self.hovered
            && hit == Some(*current)
        {
            let position = tooltip.position();
            if position != point && tooltip.is_visible() {
                let label = String::from(tooltip.label());
                let value = String::from(tooltip.value());
                tooltip.show(label, value, point);
            }
            return hit;
        }

        if let Some((prev, fill)) = self.hovered.take()
            && let Some(shape) = scene.shape_mut(prev)
        {
            shape.fill = fill;
        }
        tooltip.hide();

        if let Some(id) = hit
            && let Some(shape) = scene.shape_mut(id)
            && let Some(action) = shape.hover.clone()
        {
            let saved = shape.fill.clone();
            if let Brush::Solid(color) = &shape.fill {
                shape.fill = Brush::Solid(shade(*color, action.shade_percent));
            }
            self.hovered = Some((id, saved));
            tooltip.show(action.label, action.value, point);
        }

        hit
    }

    /// Processes the pointer leaving the scene entirely.
    pub fn pointer_left(&mut self, scene: &mut Scene, tooltip: &mut Tooltip) {
        if let Some((prev, fill)) = self.hovered.take()
            && let Some(shape) = scene.shape_mut(prev)
        {
            shape.fill = fill;
        }
        tooltip.hide();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::Color;

    use super::*;
    use crate::shape::{HoverAction, Shape, ShapeKind};

    fn scene_with_bar() -> Scene {
        let mut scene = Scene::new();
        scene.push(
            Shape::new(ShapeId(1), ShapeKind::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)))
                .with_fill(Color::from_rgb8(100, 200, 50))
                .with_hover(HoverAction::new("Apples", "2")),
        );
        scene
    }

    fn solid(scene: &Scene, id: ShapeId) -> Color {
        match scene.shape(id).unwrap().fill {
            Brush::Solid(c) => c,
            _ => panic!("expected a solid fill"),
        }
    }

    #[test]
    fn enter_darkens_and_shows_tooltip() {
        let mut scene = scene_with_bar();
        let mut tooltip = Tooltip::new();
        let mut hover = HoverState::new();

        let hit = hover.pointer_moved(&mut scene, &mut tooltip, Point::new(5.0, 5.0));
        assert_eq!(hit, Some(ShapeId(1)));
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.label(), "Apples");
        assert_eq!(tooltip.value(), "2");
        let rgba = solid(&scene, ShapeId(1)).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (70, 140, 35));
    }

    #[test]
    fn exit_restores_fill_and_hides_tooltip() {
        let mut scene = scene_with_bar();
        let mut tooltip = Tooltip::new();
        let mut hover = HoverState::new();

        hover.pointer_moved(&mut scene, &mut tooltip, Point::new(5.0, 5.0));
        hover.pointer_moved(&mut scene, &mut tooltip, Point::new(50.0, 50.0));

        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.label(), "");
        let rgba = solid(&scene, ShapeId(1)).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (100, 200, 50));
    }

    #[test]
    fn moving_within_a_shape_repositions_only() {
        let mut scene = scene_with_bar();
        let mut tooltip = Tooltip::new();
        let mut hover = HoverState::new();

        hover.pointer_moved(&mut scene, &mut tooltip, Point::new(2.0, 2.0));
        let darkened = solid(&scene, ShapeId(1));
        hover.pointer_moved(&mut scene, &mut tooltip, Point::new(8.0, 8.0));

        // Still darkened once, not twice.
        assert_eq!(solid(&scene, ShapeId(1)), darkened);
        assert_eq!(tooltip.position(), Point::new(8.0, 8.0));
    }

    #[test]
    fn pointer_left_clears_everything() {
        let mut scene = scene_with_bar();
        let mut tooltip = Tooltip::new();
        let mut hover = HoverState::new();

        hover.pointer_moved(&mut scene, &mut tooltip, Point::new(5.0, 5.0));
        hover.pointer_left(&mut scene, &mut tooltip);

        assert!(!tooltip.is_visible());
        assert_eq!(hover.hovered(), None);
        let rgba = solid(&scene, ShapeId(1)).to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (100, 200, 50));
    }
}
