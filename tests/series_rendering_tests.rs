use highcharts_rs::core::{
    Axis, Chart, DataPoint, Dimension, Formatter, Marker, PieOptions, Sequential, Series,
    SeriesKind, SeriesVariant, Stackable, Stacking,
};
use highcharts_rs::error::ChartError;
use highcharts_rs::render::HighchartsRenderer;
use serde_json::{Value, json};

fn render_series(series: Series) -> Value {
    let chart = Chart::new().with_series(series);
    HighchartsRenderer::default()
        .render_options(&chart)
        .expect("options")
        .to_json_value()["series"][0]
        .clone()
}

#[test]
fn bare_line_series_omits_name_and_color() {
    let series = render_series(Series::line().with_data([DataPoint::new(5.0)]));

    assert_eq!(
        series,
        json!({
            "type": "line",
            "data": [{"y": 5}],
            "marker": {
                "enabled": true,
                "fillColor": null,
                "lineColor": null,
                "lineWidth": 0,
                "radius": 4,
                "symbol": null
            },
            "enableMouseTracking": true,
            "pointStart": 0
        })
    );
}

#[test]
fn every_kind_maps_to_its_discriminator() {
    let expected = [
        (SeriesKind::Area, "area"),
        (SeriesKind::AreaSpline, "areaspline"),
        (SeriesKind::Bar, "bar"),
        (SeriesKind::Column, "column"),
        (SeriesKind::Line, "line"),
        (SeriesKind::Pie, "pie"),
        (SeriesKind::Scatter, "scatter"),
        (SeriesKind::Spline, "spline"),
    ];
    for (kind, discriminator) in expected {
        let series = render_series(Series::of_kind(kind));
        assert_eq!(series["type"], json!(discriminator));
    }
}

#[test]
fn optional_fields_are_emitted_when_set() {
    let series = render_series(
        Series::spline()
            .with_variant(SeriesVariant::Spline(Sequential::default().with_point_start(1990.0)))
            .with_name("Temperature")
            .with_color("#ff0000")
            .with_mouse_tracking(false)
            .with_labels_formatter(Formatter::new("function () { return this.y; }")),
    );

    assert_eq!(series["name"], json!("Temperature"));
    assert_eq!(series["color"], json!("#ff0000"));
    assert_eq!(series["enableMouseTracking"], json!(false));
    assert_eq!(series["pointStart"], json!(1990));
    assert_eq!(
        series["dataLabels"],
        json!({"formatter": "function () { return this.y; }"})
    );
    assert!(series.get("data").is_none());
}

#[test]
fn stacking_modes_render_expected_values() {
    let cases = [
        (Stacking::None, None),
        (Stacking::Normal, Some("normal")),
        (Stacking::Percent, Some("percent")),
    ];
    for (stacking, expected) in cases {
        let series = render_series(
            Series::area().with_variant(SeriesVariant::Area(
                Stackable::default().with_stacking(stacking),
            )),
        );
        assert_eq!(series.get("stacking").and_then(Value::as_str), expected);
    }
}

#[test]
fn scatter_has_neither_point_start_nor_stacking() {
    let series = render_series(Series::scatter());
    let object = series.as_object().expect("series object");

    assert!(!object.contains_key("pointStart"));
    assert!(!object.contains_key("stacking"));
    assert!(!object.contains_key("dataLabels"));
}

#[test]
fn disabled_marker_renders_enabled_false_only() {
    let marker = Marker::disabled()
        .with_fill_color("#fff")
        .with_line_color("#000")
        .with_radius(8.0)
        .with_symbol("diamond");
    let series = render_series(Series::line().with_marker(marker));

    assert_eq!(series["marker"], json!({"enabled": false}));
}

#[test]
fn pie_center_respects_percentage_flags() {
    let percent = render_series(Series::pie().with_variant(SeriesVariant::Pie(
        PieOptions::default().with_center(Dimension::percent(50.0), Dimension::percent(50.0)),
    )));
    let pixels = render_series(Series::pie().with_variant(SeriesVariant::Pie(
        PieOptions::default().with_center(Dimension::pixels(50.0), Dimension::pixels(50.0)),
    )));

    assert_eq!(percent["center"], json!(["50%", "50%"]));
    assert_eq!(pixels["center"], json!([50, 50]));
}

#[test]
fn pie_size_and_distance_are_rendered() {
    let series = render_series(
        Series::pie()
            .with_variant(SeriesVariant::Pie(
                PieOptions::default()
                    .with_size(Dimension::percent(75.0))
                    .with_labels_distance(-20.0),
            ))
            .with_labels_formatter(Formatter::new("f"))
            .with_data([
                DataPoint::slice(60.0, true).with_name("Chrome"),
                DataPoint::slice(40.0, false).with_name("Other"),
            ]),
    );

    assert_eq!(series["size"], json!("75%"));
    assert_eq!(series["dataLabels"], json!({"formatter": "f", "distance": -20}));
    assert_eq!(
        series["data"],
        json!([
            {"name": "Chrome", "sliced": true, "y": 60},
            {"name": "Other", "sliced": false, "y": 40}
        ])
    );
    assert!(series.get("pointStart").is_none());
}

#[test]
fn default_pie_always_emits_label_distance() {
    let series = render_series(Series::pie());

    assert_eq!(series["dataLabels"], json!({"distance": 30}));
    assert!(series.get("center").is_none());
    assert!(series.get("size").is_none());
}

#[test]
fn axis_references_resolve_to_positions() {
    let x_first = Axis::x();
    let x_second = Axis::x();
    let y_first = Axis::y();
    let y_second = Axis::y();
    let chart = Chart::new()
        .with_axis(x_first.clone())
        .with_axis(x_second.clone())
        .with_axis(y_first.clone())
        .with_axis(y_second.clone())
        .with_series(Series::line().with_x_axis(&x_second).with_y_axis(&y_second))
        .with_series(Series::bar().with_x_axis(&x_first).with_y_axis(&y_first))
        .with_series(Series::column());
    let options = HighchartsRenderer::default()
        .render_options(&chart)
        .expect("options")
        .to_json_value();

    assert_eq!(options["series"][0]["xAxis"], json!(1));
    assert_eq!(options["series"][0]["yAxis"], json!(1));
    assert_eq!(options["series"][1]["xAxis"], json!(0));
    assert_eq!(options["series"][1]["yAxis"], json!(0));
    assert!(options["series"][2].get("xAxis").is_none());
    assert!(options["series"][2].get("yAxis").is_none());
}

#[test]
fn axis_missing_from_chart_is_unexpected_value() {
    let foreign = Axis::y();
    let chart = Chart::new()
        .with_axis(Axis::y())
        .with_series(Series::line().with_y_axis(&foreign));

    let err = HighchartsRenderer::default()
        .render_options(&chart)
        .expect_err("foreign axis must fail");

    assert!(matches!(err, ChartError::UnexpectedValue(_)));
}

#[test]
fn axis_in_wrong_slot_is_unexpected_value() {
    let y_axis = Axis::y();
    let chart = Chart::new()
        .with_axis(y_axis.clone())
        .with_series(Series::line().with_x_axis(&y_axis));

    let err = HighchartsRenderer::default()
        .render_options(&chart)
        .expect_err("y axis in x slot must fail");

    assert!(matches!(err, ChartError::UnexpectedValue(_)));
}

#[test]
fn data_points_keep_order_and_optional_fields() {
    let series = render_series(Series::scatter().with_data([
        DataPoint::new(1.5).with_x(-2.0),
        DataPoint::new(0.0).with_name("origin"),
        DataPoint::new(-7.0),
    ]));

    assert_eq!(
        series["data"],
        json!([
            {"x": -2, "y": 1.5},
            {"name": "origin", "y": 0},
            {"y": -7}
        ])
    );
}
