// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core building blocks for StatViz charts.
//!
//! This crate holds the pieces every chart kind shares:
//! - **Datasets**: ordered records of scalar values, read-only during rendering.
//! - **Shapes**: ephemeral geometry descriptors (rects, paths, circles, text)
//!   produced by chart builders and consumed by a rendering backend.
//! - **Scenes**: an ordered shape container with deterministic paint order and
//!   point hit-testing.
//! - **Interaction**: an explicit tooltip state object and a hover state
//!   machine that darkens shape fills on pointer-enter and restores them on
//!   pointer-exit.
//!
//! Rendering (SVG, HTML, canvas) is out of scope; backends consume shapes.

#![no_std]

extern crate alloc;

mod color;
mod dataset;
mod interact;
mod scene;
mod shape;
mod value;

pub use color::{CATEGORY10, category10, shade};
pub use dataset::{DataError, Dataset};
pub use interact::{HoverState, Tooltip};
pub use scene::Scene;
pub use shape::{
    HoverAction, Shape, ShapeId, ShapeKind, Stroke, TextAnchor, TextBaseline, TextShape,
};
pub use value::{Record, Value};
