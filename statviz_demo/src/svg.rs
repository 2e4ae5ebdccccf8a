// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `statviz_demo`.

use kurbo::Rect;
use peniko::Brush;
use statviz_core::{Scene, Shape, ShapeKind, Stroke, TextAnchor, TextBaseline};

/// Serializes a scene to an SVG string.
///
/// Shapes are emitted in paint order. Hoverable shapes carry `data-label`,
/// `data-value` and `data-shade` attributes plus a `hoverable` class; the
/// report's script wires the tooltip and fill shading off those.
pub(crate) fn scene_to_svg(scene: &Scene, id: &str, view: Rect) -> String {
    let view = match scene.bounds() {
        Some(b) => view.union(b.inflate(10.0, 10.0)),
        None => view,
    };
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg id="{}" xmlns="http://www.w3.org/2000/svg" "#,
        escape_xml(id)
    ));
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    for shape in scene.ordered() {
        write_shape(&mut out, shape);
    }

    out.push_str("</svg>\n");
    out
}

fn write_shape(out: &mut String, shape: &Shape) {
    match &shape.kind {
        ShapeKind::Rect(r) => {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
            ));
            write_paint_attr(out, "fill", &shape.fill);
            write_stroke_attrs(out, shape.stroke.as_ref());
            write_hover_attrs(out, shape);
            out.push_str("/>\n");
        }
        ShapeKind::Path(p) => {
            let d = p.to_svg();
            out.push_str(&format!(r#"<path d="{d}""#));
            write_paint_attr(out, "fill", &shape.fill);
            write_stroke_attrs(out, shape.stroke.as_ref());
            write_hover_attrs(out, shape);
            out.push_str("/>\n");
        }
        ShapeKind::Circle(c) => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}""#,
                c.center.x, c.center.y, c.radius
            ));
            write_paint_attr(out, "fill", &shape.fill);
            write_stroke_attrs(out, shape.stroke.as_ref());
            write_hover_attrs(out, shape);
            out.push_str("/>\n");
        }
        ShapeKind::Text(t) => {
            let baseline = match t.baseline {
                TextBaseline::Middle => "middle",
                TextBaseline::Alphabetic => "alphabetic",
                TextBaseline::Hanging => "hanging",
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                t.pos.x, t.pos.y, t.font_size, baseline
            ));
            if t.angle != 0.0 {
                out.push_str(&format!(
                    r#" transform="rotate({} {} {})""#,
                    t.angle, t.pos.x, t.pos.y
                ));
            }
            out.push_str(match t.anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
                TextAnchor::End => r#" text-anchor="end""#,
            });
            write_paint_attr(out, "fill", &shape.fill);
            out.push('>');
            out.push_str(&escape_xml(&t.text));
            out.push_str("</text>\n");
        }
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_stroke_attrs(out: &mut String, stroke: Option<&Stroke>) {
    let Some(stroke) = stroke else {
        return;
    };
    if stroke.width > 0.0 {
        write_paint_attr(out, "stroke", &stroke.brush);
        out.push_str(&format!(r#" stroke-width="{}""#, stroke.width));
    }
}

fn write_hover_attrs(out: &mut String, shape: &Shape) {
    let Some(hover) = &shape.hover else {
        return;
    };
    out.push_str(&format!(
        r#" class="hoverable" data-label="{}" data-value="{}" data-shade="{}""#,
        escape_xml(&hover.label),
        escape_xml(&hover.value),
        hover.shade_percent
    ));
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
