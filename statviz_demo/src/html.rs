// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for `statviz_demo`.
//!
//! Each demo contributes a section whose body is either an SVG dump or an
//! HTML table. A small inline script drives the shared tooltip and fill
//! shading from the `data-*` attributes the SVG writer emits.

/// One report section.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) body: String,
}

/// Renders an HTML table from header and row cells.
pub(crate) fn table_markup(headers: &[&str], rows: &[[String; 5]]) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for header in headers {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// Assembles the full report page.
pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(section.title)));
        out.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(section.description)
        ));
        out.push_str(&section.body);
        out.push_str("</section>\n");
    }

    out.push_str(TOOLTIP);
    out.push_str("<script>\n");
    out.push_str(SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

const STYLE: &str = r#"body { font-family: system-ui, sans-serif; margin: 2em; }
section { margin-bottom: 3em; }
h2 { margin-bottom: 0.2em; }
p { color: #444; max-width: 60em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: right; }
th:first-child, td:first-child { text-align: left; }
svg text { font-family: system-ui, sans-serif; }
.hoverable { cursor: pointer; }
#tooltip { position: absolute; pointer-events: none; background: #fff;
  border: 1px solid #999; border-radius: 3px; padding: 0.3em 0.6em;
  font-size: 0.85em; box-shadow: 1px 1px 3px rgba(0,0,0,0.3); }
#tooltip.hidden { display: none; }
#tooltip-label { font-weight: bold; }
"#;

const TOOLTIP: &str = r#"<div id="tooltip" class="hidden">
<div id="tooltip-label"></div>
<div id="tooltip-value"></div>
</div>
"#;

const SCRIPT: &str = r#"const tooltip = document.getElementById('tooltip');
const tooltipLabel = document.getElementById('tooltip-label');
const tooltipValue = document.getElementById('tooltip-value');

function shade(hex, percent) {
  const n = parseInt(hex.slice(1), 16);
  const f = (100 + percent) / 100;
  const ch = (v) => Math.max(0, Math.min(255, Math.round(v * f)));
  const r = ch(n >> 16);
  const g = ch((n >> 8) & 0xff);
  const b = ch(n & 0xff);
  return '#' + ((r << 16) | (g << 8) | b).toString(16).padStart(6, '0');
}

for (const el of document.querySelectorAll('.hoverable')) {
  el.addEventListener('mouseenter', () => {
    const fill = el.getAttribute('fill');
    if (fill && fill.startsWith('#')) {
      el.dataset.savedFill = fill;
      el.setAttribute('fill', shade(fill, Number(el.dataset.shade)));
    }
    tooltipLabel.textContent = el.dataset.label;
    tooltipValue.textContent = el.dataset.value;
    tooltip.classList.remove('hidden');
  });
  el.addEventListener('mousemove', (ev) => {
    tooltip.style.left = (ev.pageX + 12) + 'px';
    tooltip.style.top = (ev.pageY + 12) + 'px';
  });
  el.addEventListener('mouseleave', () => {
    if (el.dataset.savedFill) {
      el.setAttribute('fill', el.dataset.savedFill);
      delete el.dataset.savedFill;
    }
    tooltip.classList.add('hidden');
  });
}
"#;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
