use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::core::{
    Axis, AxisId, AxisOrientation, AxisRef, Chart, DataPoint, Dimension, Marker, Series, Stacking,
};
use crate::error::{ChartError, ChartResult};

use super::{OptionMap, OptionValue};

/// Position of every chart axis within its collection, computed before any
/// series is translated.
#[derive(Debug, Default)]
struct AxisIndex {
    x: HashMap<AxisId, usize>,
    y: HashMap<AxisId, usize>,
}

impl AxisIndex {
    fn new(chart: &Chart) -> Self {
        Self {
            x: positions(chart.x_axes()),
            y: positions(chart.y_axes()),
        }
    }

    fn resolve(
        &self,
        reference: AxisRef,
        slot: AxisOrientation,
        series_index: usize,
    ) -> ChartResult<usize> {
        if reference.orientation != slot {
            return Err(ChartError::UnexpectedValue(format!(
                "series {series_index} references a {:?} axis in its `{}` slot",
                reference.orientation,
                slot.option_key()
            )));
        }
        let positions = match slot {
            AxisOrientation::X => &self.x,
            AxisOrientation::Y => &self.y,
        };
        positions.get(&reference.id).copied().ok_or_else(|| {
            warn!(
                series_index,
                axis_id = reference.id.get(),
                slot = slot.option_key(),
                "series references an axis missing from the chart"
            );
            ChartError::UnexpectedValue(format!(
                "series {series_index} references axis {} which is not part of the chart `{}` collection",
                reference.id.get(),
                slot.option_key()
            ))
        })
    }
}

fn positions(axes: &[Axis]) -> HashMap<AxisId, usize> {
    let mut positions = HashMap::with_capacity(axes.len());
    for (position, axis) in axes.iter().enumerate() {
        // The same axis pushed twice resolves to its first position.
        positions.entry(axis.id()).or_insert(position);
    }
    positions
}

fn insert(map: &mut OptionMap, key: &str, value: impl Into<OptionValue>) {
    map.insert(key.to_owned(), value.into());
}

fn object<const N: usize>(entries: [(&str, OptionValue); N]) -> OptionValue {
    OptionValue::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

/// Translates a chart into the nested configuration tree.
pub(crate) fn build_chart_options(chart: &Chart) -> ChartResult<OptionValue> {
    debug!(
        chart_id = chart.id(),
        series_count = chart.series().len(),
        x_axis_count = chart.x_axes().len(),
        y_axis_count = chart.y_axes().len(),
        "build chart options"
    );
    let axes = AxisIndex::new(chart);

    let mut options = OptionMap::new();
    insert(&mut options, "chart", object([("renderTo", chart.id().into())]));
    insert(&mut options, "title", object([("text", chart.title().into())]));
    insert(
        &mut options,
        "subtitle",
        object([("text", chart.subtitle().into())]),
    );
    insert(
        &mut options,
        "legend",
        object([("enabled", chart.has_legend().into())]),
    );
    insert(
        &mut options,
        "tooltip",
        object([("formatter", chart.tooltip().formatter.as_ref().into())]),
    );
    insert(&mut options, "credits", object([("enabled", false.into())]));

    if !chart.series().is_empty() {
        let series = chart
            .series()
            .iter()
            .enumerate()
            .map(|(index, series)| build_series_options(series, index, &axes))
            .collect::<ChartResult<Vec<_>>>()?;
        insert(&mut options, "series", series);
    }

    if let Some(x_axis) = build_axis_collection(chart.x_axes()) {
        insert(&mut options, AxisOrientation::X.option_key(), x_axis);
    }
    if let Some(y_axis) = build_axis_collection(chart.y_axes()) {
        insert(&mut options, AxisOrientation::Y.option_key(), y_axis);
    }

    Ok(OptionValue::Object(options))
}

/// A single axis is emitted as an object, several as a list, none at all
/// as nothing.
fn build_axis_collection(axes: &[Axis]) -> Option<OptionValue> {
    match axes {
        [] => None,
        [axis] => Some(build_axis_options(axis)),
        _ => Some(OptionValue::Array(
            axes.iter().map(build_axis_options).collect(),
        )),
    }
}

pub(crate) fn build_axis_options(axis: &Axis) -> OptionValue {
    trace!(axis_id = axis.id().get(), "build axis options");
    let mut options = OptionMap::new();
    insert(&mut options, "opposite", axis.opposite);
    insert(&mut options, "showFirstLabel", axis.show_first_label);
    insert(&mut options, "showLastLabel", axis.show_last_label);

    if !axis.categories.is_empty() {
        insert(
            &mut options,
            "categories",
            axis.categories
                .iter()
                .map(|category| OptionValue::from(category.as_str()))
                .collect::<Vec<_>>(),
        );
    }

    let mut title = OptionMap::new();
    insert(&mut title, "enabled", axis.title.enabled);
    if let Some(text) = &axis.title.text {
        insert(&mut title, "text", text.as_str());
    }
    if !axis.title.style.is_empty() {
        insert(&mut title, "style", &axis.title.style);
    }
    insert(&mut options, "title", title);

    let labels_source = &axis.labels;
    let mut labels = OptionMap::new();
    insert(&mut labels, "enabled", labels_source.enabled);
    if let Some(align) = labels_source.align {
        insert(&mut labels, "align", align.as_str());
    }
    if !labels_source.style.is_empty() {
        insert(&mut labels, "style", &labels_source.style);
    }
    if let Some(x) = labels_source.x_offset {
        insert(&mut labels, "x", x);
    }
    if let Some(y) = labels_source.y_offset {
        insert(&mut labels, "y", y);
    }
    if let Some(formatter) = &labels_source.formatter {
        insert(&mut labels, "formatter", formatter);
    }
    insert(&mut options, "labels", labels);

    OptionValue::Object(options)
}

fn build_series_options(
    series: &Series,
    series_index: usize,
    axes: &AxisIndex,
) -> ChartResult<OptionValue> {
    let kind = series.kind();
    trace!(
        series_index,
        kind = kind.as_str(),
        points = series.data.len(),
        "build series options"
    );

    let mut options = OptionMap::new();
    insert(&mut options, "type", kind.as_str());
    if let Some(name) = &series.name {
        insert(&mut options, "name", name.as_str());
    }
    if let Some(color) = &series.color {
        insert(&mut options, "color", color.as_str());
    }
    if let Some(reference) = series.x_axis {
        let position = axes.resolve(reference, AxisOrientation::X, series_index)?;
        insert(&mut options, AxisOrientation::X.option_key(), position);
    }
    if let Some(reference) = series.y_axis {
        let position = axes.resolve(reference, AxisOrientation::Y, series_index)?;
        insert(&mut options, AxisOrientation::Y.option_key(), position);
    }

    if !series.data.is_empty() {
        insert(
            &mut options,
            "data",
            series
                .data
                .iter()
                .map(build_data_point_options)
                .collect::<Vec<_>>(),
        );
    }

    let mut data_labels = OptionMap::new();
    if let Some(formatter) = &series.labels_formatter {
        insert(&mut data_labels, "formatter", formatter);
    }

    insert(&mut options, "marker", build_marker_options(&series.marker));
    insert(&mut options, "enableMouseTracking", series.enable_mouse_tracking);

    if let Some(point_start) = series.variant.point_start() {
        insert(&mut options, "pointStart", point_start);
    }
    match series.variant.stacking() {
        Some(Stacking::Normal) => insert(&mut options, "stacking", "normal"),
        Some(Stacking::Percent) => insert(&mut options, "stacking", "percent"),
        Some(Stacking::None) | None => {}
    }

    if let Some(pie) = series.variant.pie() {
        if let Some((x, y)) = pie.center {
            insert(
                &mut options,
                "center",
                vec![dimension_value(x), dimension_value(y)],
            );
        }
        if let Some(size) = pie.size {
            insert(&mut options, "size", dimension_value(size));
        }
        insert(&mut data_labels, "distance", pie.labels_distance);
    }

    if !data_labels.is_empty() {
        insert(&mut options, "dataLabels", data_labels);
    }

    Ok(OptionValue::Object(options))
}

fn dimension_value(dimension: Dimension) -> OptionValue {
    if dimension.percentage {
        OptionValue::String(format!("{}%", dimension.value))
    } else {
        OptionValue::number(dimension.value)
    }
}

pub(crate) fn build_marker_options(marker: &Marker) -> OptionValue {
    if !marker.enabled {
        return object([("enabled", false.into())]);
    }

    object([
        ("enabled", true.into()),
        ("fillColor", marker.fill_color.as_deref().into()),
        ("lineColor", marker.line_color.as_deref().into()),
        ("lineWidth", marker.line_width.into()),
        ("radius", marker.radius.into()),
        ("symbol", marker.symbol.as_deref().into()),
    ])
}

pub(crate) fn build_data_point_options(point: &DataPoint) -> OptionValue {
    let mut options = OptionMap::new();
    if let Some(name) = &point.name {
        insert(&mut options, "name", name.as_str());
    }
    if let Some(sliced) = point.sliced {
        insert(&mut options, "sliced", sliced);
    }
    if let Some(x) = point.x {
        insert(&mut options, "x", x);
    }
    insert(&mut options, "y", point.y);
    OptionValue::Object(options)
}
