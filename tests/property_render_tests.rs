use highcharts_rs::core::{
    Axis, Chart, DataPoint, Dimension, PieOptions, Series, SeriesKind, SeriesVariant,
};
use highcharts_rs::render::{HighchartsRenderer, Renderer};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn series_axis_reference_resolves_to_axis_position(
        x_count in 1usize..6,
        y_count in 1usize..6,
        x_pick in 0usize..6,
        y_pick in 0usize..6
    ) {
        let x_axes: Vec<Axis> = (0..x_count).map(|_| Axis::x()).collect();
        let y_axes: Vec<Axis> = (0..y_count).map(|_| Axis::y()).collect();
        let x_index = x_pick % x_count;
        let y_index = y_pick % y_count;

        let mut chart = Chart::new().with_series(
            Series::line()
                .with_x_axis(&x_axes[x_index])
                .with_y_axis(&y_axes[y_index]),
        );
        for axis in x_axes.iter().chain(y_axes.iter()) {
            chart.push_axis(axis.clone());
        }

        let options = HighchartsRenderer::default()
            .render_options(&chart)
            .expect("options")
            .to_json_value();

        prop_assert_eq!(&options["series"][0]["xAxis"], &json!(x_index));
        prop_assert_eq!(&options["series"][0]["yAxis"], &json!(y_index));
        prop_assert_eq!(options["xAxis"].is_array(), x_count > 1);
        prop_assert_eq!(options["yAxis"].is_array(), y_count > 1);
        if x_count > 1 {
            prop_assert_eq!(options["xAxis"].as_array().map(Vec::len), Some(x_count));
        }
    }

    #[test]
    fn pie_percentage_dimensions_are_suffixed(
        x in 0u32..1_000,
        y in 0u32..1_000,
        x_percent in any::<bool>(),
        y_percent in any::<bool>()
    ) {
        let dimension = |value: u32, percent: bool| {
            if percent {
                Dimension::percent(f64::from(value))
            } else {
                Dimension::pixels(f64::from(value))
            }
        };
        let expected = |value: u32, percent: bool| {
            if percent { json!(format!("{value}%")) } else { json!(value) }
        };
        let chart = Chart::new().with_series(Series::pie().with_variant(SeriesVariant::Pie(
            PieOptions::default().with_center(dimension(x, x_percent), dimension(y, y_percent)),
        )));

        let options = HighchartsRenderer::default()
            .render_options(&chart)
            .expect("options")
            .to_json_value();

        prop_assert_eq!(
            &options["series"][0]["center"],
            &json!([expected(x, x_percent), expected(y, y_percent)])
        );
    }

    #[test]
    fn encoded_options_decode_to_assembled_structure(
        title in "\\PC{0,24}",
        names in proptest::collection::vec("\\PC{0,12}", 0..8),
        values in proptest::collection::vec(
            (-4_000_000i32..4_000_000).prop_map(|quarter| f64::from(quarter) / 4.0),
            0..8
        ),
        kind_index in 0usize..SeriesKind::ALL.len()
    ) {
        let kind = SeriesKind::ALL[kind_index];
        let data = values
            .iter()
            .zip(names.iter().cycle())
            .map(|(value, name)| DataPoint::new(*value).with_name(name.as_str()));
        let chart = Chart::with_id("roundtrip")
            .expect("chart")
            .with_title(title)
            .with_axis(Axis::x().with_categories(names.clone()))
            .with_series(Series::of_kind(kind).with_data(data));
        let renderer = HighchartsRenderer::default();

        let script = renderer.render(&chart).expect("render");
        let (options_line, _) = script.split_once(";\nroundtrip = ").expect("two statements");
        let encoded = options_line.strip_prefix("roundtrip_options = ").expect("prefix");
        let decoded: serde_json::Value = serde_json::from_str(encoded).expect("decode");
        let assembled = renderer.render_options(&chart).expect("options").to_json_value();

        prop_assert_eq!(decoded, assembled);
    }
}
