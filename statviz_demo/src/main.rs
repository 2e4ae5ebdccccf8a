// Copyright 2025 the StatViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `statviz_core`.
mod data;
mod html;
mod svg;

use kurbo::Rect;
use statviz_charts::{
    AxisSpec, BarChart, FillPolicy, Frame, GridStyle, HeuristicTextMeasurer, Histogram,
    HoverPolicy, LineChart, Margin, PieChart, RadiusPolicy, SUMMARY_HEADERS, ScatterChart,
    TreeChart, format_tick, summarize_fields,
};
use statviz_core::{CATEGORY10, Scene, category10};

fn main() {
    let sections = vec![
        bar_demo(),
        grouped_bar_demo(),
        stacked_bar_demo(),
        pie_demo(),
        donut_demo(),
        line_demo(),
        scatter_demo(),
        histogram_demo(),
        table_demo(),
        car_tree_demo(),
        dinner_tree_demo(),
    ];

    let html = html::render_report("StatViz chart demos", &sections);
    std::fs::write("statviz_demo.html", html).expect("write statviz_demo.html");
    println!("wrote statviz_demo.html");
}

fn bar_demo() -> html::HtmlSection {
    let dataset = data::fruit_deliveries();
    let frame = Frame::new(520.0, 320.0).with_margin(Margin::new(20.0, 20.0, 30.0, 50.0));
    let chart = BarChart::new(0x1_000, "fruit").with_series("2024", category10(0));

    let mut scene = Scene::new();
    let plot = frame.plot();
    let band = chart.band_spec(&dataset).expect("fruit categories");
    let labels = chart.categories(&dataset).expect("fruit categories");
    scene.extend(AxisSpec::band_bottom(0x1_100, band, labels).shapes(plot));
    scene.extend(
        AxisSpec::left(0x1_200, chart.value_spec(&dataset).expect("fruit values"))
            .with_grid(GridStyle::default())
            .with_title("crates delivered")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("bar shapes"));

    html::HtmlSection {
        title: "Bar chart",
        description: "One bar per category over a band scale. Hover a bar to darken it and show its value.",
        body: svg::scene_to_svg(&scene, "bar-chart", Rect::new(0.0, 0.0, 520.0, 320.0)),
    }
}

fn grouped_bar_demo() -> html::HtmlSection {
    let dataset = data::fruit_deliveries();
    let frame = Frame::new(520.0, 320.0).with_margin(Margin::new(20.0, 20.0, 30.0, 50.0));
    let chart = BarChart::new(0x2_000, "fruit")
        .with_series("2022", category10(0))
        .with_series("2023", category10(1))
        .with_series("2024", category10(2));

    let mut scene = Scene::new();
    let plot = frame.plot();
    let band = chart.band_spec(&dataset).expect("fruit categories");
    let labels = chart.categories(&dataset).expect("fruit categories");
    scene.extend(AxisSpec::band_bottom(0x2_100, band, labels).shapes(plot));
    scene.extend(
        AxisSpec::left(0x2_200, chart.value_spec(&dataset).expect("fruit values"))
            .with_grid(GridStyle::default())
            .with_title("crates delivered")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("bar shapes"));

    html::HtmlSection {
        title: "Grouped bar chart",
        description: "Three yearly series side by side inside each band slot.",
        body: svg::scene_to_svg(&scene, "grouped-bar-chart", Rect::new(0.0, 0.0, 520.0, 320.0)),
    }
}

fn stacked_bar_demo() -> html::HtmlSection {
    let dataset = data::fruit_deliveries();
    let chart = BarChart::new(0x3_000, "fruit")
        .with_series("2022", category10(0))
        .with_series("2023", category10(1))
        .with_series("2024", category10(2))
        .with_stacked(true);

    // Size the left margin to the widest tick label instead of guessing.
    let value_spec = chart.value_spec(&dataset).expect("fruit values");
    let (lo, hi) = value_spec.resolved_domain(10);
    let scale = value_spec.instantiate_resolved((0.0, 1.0), 10);
    let ticks = scale.ticks(10);
    let step = if ticks.len() > 1 {
        ticks[1] - ticks[0]
    } else {
        hi - lo
    };
    let tick_labels: Vec<String> = ticks.iter().map(|&v| format_tick(v, step)).collect();
    let tick_strs: Vec<&str> = tick_labels.iter().map(String::as_str).collect();
    let left =
        Frame::left_margin_for_labels(&HeuristicTextMeasurer, &tick_strs, 10.0, 6.0, 6.0);
    let frame =
        Frame::new(520.0, 320.0).with_margin(Margin::new(20.0, 20.0, 30.0, left + 14.0));

    let mut scene = Scene::new();
    let plot = frame.plot();
    let band = chart.band_spec(&dataset).expect("fruit categories");
    let labels = chart.categories(&dataset).expect("fruit categories");
    scene.extend(AxisSpec::band_bottom(0x3_100, band, labels).shapes(plot));
    scene.extend(
        AxisSpec::left(0x3_200, value_spec)
            .with_grid(GridStyle::default())
            .with_title("crates delivered")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("bar shapes"));

    html::HtmlSection {
        title: "Stacked bar chart",
        description: "The same yearly series stacked; segments tile each bar exactly, and the value scale covers the largest stack sum.",
        body: svg::scene_to_svg(&scene, "stacked-bar-chart", Rect::new(0.0, 0.0, 520.0, 320.0)),
    }
}

fn pie_demo() -> html::HtmlSection {
    let dataset = data::smartphone_share();
    let frame = Frame::new(420.0, 420.0).with_margin(Margin::uniform(20.0));
    let chart = PieChart::new(0x4_000, "share", "brand").with_detail_key("units");

    let mut scene = Scene::new();
    scene.extend(chart.shapes(&dataset, &frame).expect("pie shapes"));

    html::HtmlSection {
        title: "Pie chart",
        description: "Market share slices in record order, labeled inside the arc. Tooltips show unit counts from a second field.",
        body: svg::scene_to_svg(&scene, "pie-chart", Rect::new(0.0, 0.0, 420.0, 420.0)),
    }
}

fn donut_demo() -> html::HtmlSection {
    let dataset = data::smartphone_share();
    let frame = Frame::new(420.0, 420.0).with_margin(Margin::uniform(20.0));
    let chart = PieChart::new(0x5_000, "share", "brand")
        .with_detail_key("units")
        .with_inner_radius(95.0)
        .with_pad_angle(0.02)
        .with_label_margin(55.0);

    let mut scene = Scene::new();
    scene.extend(chart.shapes(&dataset, &frame).expect("donut shapes"));

    html::HtmlSection {
        title: "Donut chart",
        description: "The same pie with an inner radius and a small pad angle between slices. The hole is not hoverable.",
        body: svg::scene_to_svg(&scene, "donut-chart", Rect::new(0.0, 0.0, 420.0, 420.0)),
    }
}

fn line_demo() -> html::HtmlSection {
    let dataset = data::weekly_hours();
    let frame = Frame::new(560.0, 300.0).with_margin(Margin::new(20.0, 20.0, 30.0, 45.0));
    let chart = LineChart::new(0x6_000, "week", "hours")
        .with_markers(true)
        .with_label_key("label")
        .with_tick_count(6);

    let mut scene = Scene::new();
    let plot = frame.plot();
    scene.extend(
        AxisSpec::bottom(0x6_100, chart.x_spec(&dataset).expect("week extent"))
            .with_tick_count(6)
            .with_tick_formatter(|v, _step| date_label(v))
            .shapes(plot),
    );
    scene.extend(
        AxisSpec::left(0x6_200, chart.y_spec(&dataset).expect("hour extent"))
            .with_grid(GridStyle::default())
            .with_title("hours worked")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("line shapes"));

    html::HtmlSection {
        title: "Line chart",
        description: "Weekly hours loaded from a TSV document with date coercion, drawn over a time axis with hoverable markers.",
        body: svg::scene_to_svg(&scene, "line-chart", Rect::new(0.0, 0.0, 560.0, 300.0)),
    }
}

fn scatter_demo() -> html::HtmlSection {
    let dataset = data::nations();
    let frame = Frame::new(560.0, 360.0).with_margin(Margin::new(20.0, 20.0, 40.0, 45.0));
    let chart = ScatterChart::new(0x7_000, "income", "lifespan")
        .with_x_floor(1000.0)
        .with_fill(FillPolicy::ByCategory {
            key: "region".to_string(),
            palette: CATEGORY10.to_vec(),
        })
        .with_radius(RadiusPolicy::LogScaled {
            key: "population".to_string(),
            range: (4.0, 16.0),
        })
        .with_hover(HoverPolicy::Fields {
            label: "Country".to_string(),
            keys: vec!["country".to_string(), "lifespan".to_string()],
        });

    let mut scene = Scene::new();
    let plot = frame.plot();
    scene.extend(
        AxisSpec::bottom(0x7_100, chart.x_spec(&dataset).expect("positive incomes"))
            .with_title("income per person (international $)")
            .shapes(plot),
    );
    scene.extend(
        AxisSpec::left(0x7_200, chart.y_spec(&dataset).expect("lifespan extent"))
            .with_grid(GridStyle::default())
            .with_title("life expectancy (years)")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("scatter shapes"));

    html::HtmlSection {
        title: "Scatter plot",
        description: "Life expectancy against log-scaled income. Points are colored by region and sized by log-scaled population.",
        body: svg::scene_to_svg(&scene, "scatter-plot", Rect::new(0.0, 0.0, 560.0, 360.0)),
    }
}

fn histogram_demo() -> html::HtmlSection {
    let dataset = data::gaussian_sample(400, 50.0, 12.0);
    let frame = Frame::new(560.0, 320.0).with_margin(Margin::new(20.0, 20.0, 30.0, 45.0));
    let chart = Histogram::new(0x8_000, "value");

    let mut scene = Scene::new();
    let plot = frame.plot();
    scene.extend(
        AxisSpec::bottom(0x8_100, chart.x_spec(&dataset).expect("sample extent"))
            .with_title("value")
            .shapes(plot),
    );
    scene.extend(
        AxisSpec::left(0x8_200, chart.y_spec(&dataset).expect("bin counts"))
            .with_grid(GridStyle::default())
            .with_title("count")
            .shapes(plot),
    );
    scene.extend(chart.shapes(&dataset, plot).expect("histogram shapes"));

    html::HtmlSection {
        title: "Histogram",
        description: "A seeded gaussian sample binned over a domain rounded to multiples of five, with in-bar count labels.",
        body: svg::scene_to_svg(&scene, "histogram", Rect::new(0.0, 0.0, 560.0, 320.0)),
    }
}

fn table_demo() -> html::HtmlSection {
    let dataset = data::nations();
    let rows = summarize_fields(&dataset, &["income", "lifespan", "population"])
        .expect("numeric nation fields");
    let cells: Vec<[String; 5]> = rows.iter().map(statviz_charts::SummaryRow::cells).collect();

    html::HtmlSection {
        title: "Summary table",
        description: "Mean, sample deviation and extent per numeric field, formatted with thousands grouping and two decimals.",
        body: html::table_markup(&SUMMARY_HEADERS, &cells),
    }
}

fn car_tree_demo() -> html::HtmlSection {
    let root = data::car_decisions();
    let frame = Frame::new(640.0, 360.0).with_margin(Margin::uniform(40.0));
    let chart = TreeChart::new(0x9_000);

    let mut scene = Scene::new();
    scene.extend(chart.shapes(&root, &frame));

    html::HtmlSection {
        title: "Decision tree: buying a car",
        description: "A tidy tree laid out left to right. Hover a node to see the choices made to reach it.",
        body: svg::scene_to_svg(&scene, "car-tree", Rect::new(0.0, 0.0, 640.0, 360.0)),
    }
}

fn dinner_tree_demo() -> html::HtmlSection {
    let root = data::dinner_decisions();
    let frame = Frame::new(640.0, 300.0).with_margin(Margin::uniform(40.0));
    let chart = TreeChart::new(0xA_000)
        .with_branch_hover_label("Choices made at this point:")
        .with_leaf_hover_label("Final choices:");

    let mut scene = Scene::new();
    scene.extend(chart.shapes(&root, &frame));

    html::HtmlSection {
        title: "Decision tree: dinner",
        description: "An unbalanced tree; leaves at different depths still land on even depth rings.",
        body: svg::scene_to_svg(&scene, "dinner-tree", Rect::new(0.0, 0.0, 640.0, 300.0)),
    }
}

fn date_label(seconds: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "timestamps in demo data are far below i64's limit"
    )]
    let seconds = seconds as i64;
    chrono::DateTime::from_timestamp(seconds, 0)
        .map(|t| t.format("%b %-d").to_string())
        .unwrap_or_default()
}
