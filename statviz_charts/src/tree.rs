// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidy tree layout and rendering.
//!
//! [`TreeLayout`] arranges a hierarchy so that depths are even, siblings are
//! ordered, and no two subtrees overlap along the breadth axis. [`TreeChart`]
//! renders the layout horizontally (depth grows to the right) with cubic
//! links, node circles and name labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point};
use peniko::color::palette::css;
use statviz_core::{
    HoverAction, Shape, ShapeId, ShapeKind, Stroke, TextAnchor, TextBaseline, TextShape,
};

use crate::layout::Frame;
use crate::z_order;

/// A node in an input hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Node name.
    pub name: String,
    /// Ordered children.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a leaf node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child, preserving order.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

/// One laid-out node.
#[derive(Clone, Debug)]
pub struct LayoutNode {
    /// Node name.
    pub name: String,
    /// Distance from the root, in levels.
    pub depth: usize,
    /// Longest distance to a leaf below, in levels; zero for leaves.
    pub height: usize,
    /// Parent index, `None` for the root.
    pub parent: Option<usize>,
    /// Child indexes in order.
    pub children: Vec<usize>,
    /// Breadth-axis coordinate, in `0..=size.0`.
    pub breadth: f64,
    /// Depth-axis coordinate, in `0..=size.1`.
    pub distance: f64,
}

impl LayoutNode {
    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A tidy layout of a hierarchy.
///
/// Node zero is always the root; children follow their parents.
#[derive(Clone, Debug)]
pub struct TreeLayout {
    nodes: Vec<LayoutNode>,
}

impl TreeLayout {
    /// Lays out `root` into a `(breadth, depth)` extent.
    ///
    /// All nodes of one depth share a `distance`; depths divide the depth
    /// extent evenly. Sibling subtrees never overlap along the breadth axis
    /// and parents are centered over their first and last children.
    pub fn new(root: &TreeNode, size: (f64, f64)) -> Self {
        let mut nodes = Vec::new();
        flatten(root, None, 0, &mut nodes);
        compute_heights(&mut nodes);

        let mut rel = alloc::vec![0.0; nodes.len()];
        contour(&nodes, 0, &mut rel);

        // Relative offsets to absolute breadth positions.
        let mut breadth = alloc::vec![0.0; nodes.len()];
        for i in 0..nodes.len() {
            breadth[i] = match nodes[i].parent {
                Some(p) => breadth[p] + rel[i],
                None => 0.0,
            };
        }

        let min = breadth.iter().copied().fold(f64::INFINITY, f64::min);
        let max = breadth.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = max - min;
        let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

        for (i, node) in nodes.iter_mut().enumerate() {
            node.breadth = if span == 0.0 {
                0.5 * size.0
            } else {
                (breadth[i] - min) / span * size.0
            };
            node.distance = if max_depth == 0 {
                0.0
            } else {
                node.depth as f64 / max_depth as f64 * size.1
            };
        }
        Self { nodes }
    }

    /// Returns the laid-out nodes; index zero is the root.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Returns the node indexes from the root down to `index`, inclusive.
    pub fn path_from_root(&self, index: usize) -> Vec<usize> {
        let mut out = alloc::vec![index];
        let mut current = index;
        while let Some(parent) = self.nodes[current].parent {
            out.push(parent);
            current = parent;
        }
        out.reverse();
        out
    }
}

fn flatten(
    node: &TreeNode,
    parent: Option<usize>,
    depth: usize,
    out: &mut Vec<LayoutNode>,
) -> usize {
    let index = out.len();
    out.push(LayoutNode {
        name: node.name.clone(),
        depth,
        height: 0,
        parent,
        children: Vec::new(),
        breadth: 0.0,
        distance: 0.0,
    });
    for child in &node.children {
        let c = flatten(child, Some(index), depth + 1, out);
        out[index].children.push(c);
    }
    index
}

fn compute_heights(nodes: &mut [LayoutNode]) {
    // Children always follow their parents, so a reverse scan is post-order.
    for i in (0..nodes.len()).rev() {
        let height = nodes[i]
            .children
            .iter()
            .map(|&c| nodes[c].height + 1)
            .max()
            .unwrap_or(0);
        nodes[i].height = height;
    }
}

/// Lays out the subtree at `index`, writing each child's breadth offset
/// relative to its parent into `rel`. Returns the subtree's contour: the
/// `(leftmost, rightmost)` extent per level, relative to this node.
fn contour(nodes: &[LayoutNode], index: usize, rel: &mut [f64]) -> Vec<(f64, f64)> {
    let children = &nodes[index].children;
    if children.is_empty() {
        return alloc::vec![(0.0, 0.0)];
    }

    let mut merged: Vec<(f64, f64)> = Vec::new();
    let mut offsets: Vec<f64> = Vec::with_capacity(children.len());
    for (k, &child) in children.iter().enumerate() {
        let child_contour = contour(nodes, child, rel);
        let shift = if k == 0 {
            0.0
        } else {
            // Push the subtree right until it clears the merged contour at
            // every shared level, keeping unit separation.
            let mut s = f64::NEG_INFINITY;
            for d in 0..merged.len().min(child_contour.len()) {
                s = s.max(merged[d].1 + 1.0 - child_contour[d].0);
            }
            if s.is_finite() { s } else { 0.0 }
        };
        offsets.push(shift);
        for (d, &(lo, hi)) in child_contour.iter().enumerate() {
            let shifted = (lo + shift, hi + shift);
            if d < merged.len() {
                merged[d].0 = merged[d].0.min(shifted.0);
                merged[d].1 = merged[d].1.max(shifted.1);
            } else {
                merged.push(shifted);
            }
        }
    }

    // Center the parent over its first and last children.
    let mid = 0.5 * (offsets[0] + offsets[offsets.len() - 1]);
    for (k, &child) in children.iter().enumerate() {
        rel[child] = offsets[k] - mid;
    }

    let mut out = Vec::with_capacity(merged.len() + 1);
    out.push((0.0, 0.0));
    for &(lo, hi) in &merged {
        out.push((lo - mid, hi - mid));
    }
    out
}

/// A tree chart configuration.
#[derive(Clone, Debug)]
pub struct TreeChart {
    id_base: u64,
    node_radius: f64,
    font_size: f64,
    branch_hover_label: String,
    leaf_hover_label: String,
}

impl TreeChart {
    /// Creates a tree chart with default styling.
    pub fn new(id_base: u64) -> Self {
        Self {
            id_base,
            node_radius: 10.0,
            font_size: 14.0,
            branch_hover_label: String::from("Choices made at this point:"),
            leaf_hover_label: String::from("Final choices:"),
        }
    }

    /// Sets the node circle radius.
    pub fn with_node_radius(mut self, node_radius: f64) -> Self {
        self.node_radius = node_radius.max(0.0);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the tooltip label used on branch nodes.
    pub fn with_branch_hover_label(mut self, label: impl Into<String>) -> Self {
        self.branch_hover_label = label.into();
        self
    }

    /// Sets the tooltip label used on leaf nodes.
    pub fn with_leaf_hover_label(mut self, label: impl Into<String>) -> Self {
        self.leaf_hover_label = label.into();
        self
    }

    /// Generates link, node and label shapes for `root`, laid out
    /// horizontally inside the frame's plot rectangle.
    pub fn shapes(&self, root: &TreeNode, frame: &Frame) -> Vec<Shape> {
        let plot = frame.plot();
        // Depth runs along x, breadth along y.
        let layout = TreeLayout::new(root, (plot.height(), plot.width()));
        let nodes = layout.nodes();

        let screen = |node: &LayoutNode| -> Point {
            Point::new(plot.x0 + node.distance, plot.y0 + node.breadth)
        };

        let mut out = Vec::with_capacity(nodes.len() * 3);
        for (i, node) in nodes.iter().enumerate() {
            let p = screen(node);

            if let Some(parent) = node.parent {
                let pp = screen(&nodes[parent]);
                let mid = 0.5 * (p.x + pp.x);
                let mut path = BezPath::new();
                path.move_to(p);
                path.curve_to((mid, p.y), (mid, pp.y), (pp.x, pp.y));
                out.push(
                    Shape::new(ShapeId(self.id_base + i as u64), ShapeKind::Path(path))
                        .with_stroke(Stroke::solid(css::GRAY.with_alpha(0.4), 1.5))
                        .with_z_index(z_order::SERIES_STROKE),
                );
            }

            let hover_label = if node.is_leaf() {
                self.leaf_hover_label.clone()
            } else {
                self.branch_hover_label.clone()
            };
            let path_names: Vec<&str> = layout
                .path_from_root(i)
                .iter()
                .take_while(|&&n| n != i)
                .map(|&n| nodes[n].name.as_str())
                .collect();
            out.push(
                Shape::new(
                    ShapeId(self.id_base + 1000 + i as u64),
                    ShapeKind::Circle(Circle::new(p, self.node_radius)),
                )
                .with_fill(css::WHITE)
                .with_stroke(Stroke::solid(css::STEEL_BLUE, 3.0))
                .with_z_index(z_order::SERIES_POINTS)
                .with_hover(HoverAction::new(
                    hover_label,
                    path_names.join(" \u{2192} "),
                )),
            );

            // Branch labels sit before the node, leaf labels after it.
            let (dx, anchor) = if node.is_leaf() {
                (self.node_radius + 3.0, TextAnchor::Start)
            } else {
                (-(self.node_radius + 3.0), TextAnchor::End)
            };
            out.push(
                Shape::new(
                    ShapeId(self.id_base + 2000 + i as u64),
                    ShapeKind::Text(TextShape {
                        pos: Point::new(p.x + dx, p.y),
                        text: node.name.clone(),
                        font_size: self.font_size,
                        angle: 0.0,
                        anchor,
                        baseline: TextBaseline::Middle,
                    }),
                )
                .with_fill(css::BLACK)
                .with_z_index(z_order::SERIES_LABELS),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;
    use crate::layout::Margin;

    fn decisions() -> TreeNode {
        TreeNode::new("budget")
            .with_child(
                TreeNode::new("low")
                    .with_child(TreeNode::new("used"))
                    .with_child(TreeNode::new("compact")),
            )
            .with_child(
                TreeNode::new("high")
                    .with_child(TreeNode::new("sport"))
                    .with_child(TreeNode::new("electric")),
            )
    }

    #[test]
    fn depths_share_a_distance_and_divide_evenly() {
        let layout = TreeLayout::new(&decisions(), (100.0, 200.0));
        let nodes = layout.nodes();
        assert_eq!(nodes[0].distance, 0.0);
        for node in nodes {
            let expected = node.depth as f64 / 2.0 * 200.0;
            assert!((node.distance - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn sibling_subtrees_do_not_overlap() {
        let layout = TreeLayout::new(&decisions(), (100.0, 200.0));
        let nodes = layout.nodes();
        let subtree_extent = |root: usize| -> (f64, f64) {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            let mut stack = alloc::vec![root];
            while let Some(i) = stack.pop() {
                lo = lo.min(nodes[i].breadth);
                hi = hi.max(nodes[i].breadth);
                stack.extend(&nodes[i].children);
            }
            (lo, hi)
        };
        let (lo_a, hi_a) = subtree_extent(nodes[0].children[0]);
        let (lo_b, hi_b) = subtree_extent(nodes[0].children[1]);
        assert!(hi_a < lo_b || hi_b < lo_a);
    }

    #[test]
    fn parents_are_centered_over_their_children() {
        let layout = TreeLayout::new(&decisions(), (100.0, 200.0));
        let nodes = layout.nodes();
        for (i, node) in nodes.iter().enumerate() {
            if node.children.is_empty() {
                continue;
            }
            let first = nodes[*node.children.first().unwrap()].breadth;
            let last = nodes[*node.children.last().unwrap()].breadth;
            assert!(
                (nodes[i].breadth - 0.5 * (first + last)).abs() < 1e-9,
                "node {i} is off-center"
            );
        }
    }

    #[test]
    fn heights_count_levels_to_the_deepest_leaf() {
        let layout = TreeLayout::new(&decisions(), (100.0, 100.0));
        let nodes = layout.nodes();
        assert_eq!(nodes[0].height, 2);
        assert!(nodes.iter().filter(|n| n.is_leaf()).all(|n| n.height == 0));
    }

    #[test]
    fn hover_reports_the_path_of_choices() {
        let frame = Frame::new(400.0, 300.0).with_margin(Margin::uniform(20.0));
        let chart = TreeChart::new(0);
        let shapes = chart.shapes(&decisions(), &frame);
        let circles: Vec<&Shape> = shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Circle(_)))
            .collect();
        assert_eq!(circles.len(), 7);

        // The root has no prior choices.
        let root_hover = circles[0].hover.as_ref().unwrap();
        assert_eq!(root_hover.label, "Choices made at this point:");
        assert_eq!(root_hover.value, "");

        // A leaf reports every ancestor from the root down.
        let leaf_hover = circles
            .iter()
            .find_map(|s| {
                let h = s.hover.as_ref()?;
                (h.value == "budget \u{2192} low").then_some(h)
            })
            .expect("missing leaf hover path");
        assert_eq!(leaf_hover.label, "Final choices:".to_string());
    }

    #[test]
    fn single_node_sits_at_the_breadth_center() {
        let layout = TreeLayout::new(&TreeNode::new("only"), (100.0, 200.0));
        assert_eq!(layout.nodes()[0].breadth, 50.0);
        assert_eq!(layout.nodes()[0].distance, 0.0);
    }
}
