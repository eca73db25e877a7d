use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ChartError, ChartResult};

use super::{Axis, AxisOrientation, Formatter, Series};

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tooltip {
    pub formatter: Option<Formatter>,
}

/// Complete chart description handed to a renderer.
///
/// The identifier doubles as the container element id and as the JavaScript
/// variable name in the instantiation script, so it must be a valid
/// identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    id: String,
    title: Option<String>,
    subtitle: Option<String>,
    legend: bool,
    tooltip: Tooltip,
    x_axes: Vec<Axis>,
    y_axes: Vec<Axis>,
    series: Vec<Series>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    /// Creates a chart with a generated process-unique identifier.
    #[must_use]
    pub fn new() -> Self {
        let serial = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        Self::with_valid_id(format!("chart_{serial}"))
    }

    /// Creates a chart with a caller-chosen identifier.
    pub fn with_id(id: impl Into<String>) -> ChartResult<Self> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self::with_valid_id(id))
    }

    fn with_valid_id(id: String) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            legend: true,
            tooltip: Tooltip::default(),
            x_axes: Vec::new(),
            y_axes: Vec::new(),
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn has_legend(&self) -> bool {
        self.legend
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    #[must_use]
    pub fn x_axes(&self) -> &[Axis] {
        &self.x_axes
    }

    #[must_use]
    pub fn y_axes(&self) -> &[Axis] {
        &self.y_axes
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, enabled: bool) -> Self {
        self.legend = enabled;
        self
    }

    #[must_use]
    pub fn with_tooltip_formatter(mut self, formatter: Formatter) -> Self {
        self.tooltip.formatter = Some(formatter);
        self
    }

    /// Appends an axis to the collection matching its orientation.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.push_axis(axis);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.push_series(series);
        self
    }

    pub fn push_axis(&mut self, axis: Axis) {
        match axis.orientation() {
            AxisOrientation::X => self.x_axes.push(axis),
            AxisOrientation::Y => self.y_axes.push(axis),
        }
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }
}

fn validate_identifier(id: &str) -> ChartResult<()> {
    let mut chars = id.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Err(ChartError::InvalidArgument(format!(
            "chart id `{id}` is not a valid JavaScript identifier"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Chart;
    use crate::core::{Axis, Series};
    use crate::error::ChartError;

    #[test]
    fn generated_ids_are_unique_and_usable() {
        let first = Chart::new();
        let second = Chart::new();
        assert_ne!(first.id(), second.id());
        assert!(Chart::with_id(first.id()).is_ok());
    }

    #[test]
    fn rejects_ids_that_are_not_identifiers() {
        for id in ["", "1chart", "my-chart", "a b"] {
            let err = Chart::with_id(id).expect_err("invalid id");
            assert!(matches!(err, ChartError::InvalidArgument(_)));
        }
    }

    #[test]
    fn axes_are_routed_by_orientation() {
        let chart = Chart::new()
            .with_axis(Axis::x())
            .with_axis(Axis::y())
            .with_axis(Axis::y());
        assert_eq!(chart.x_axes().len(), 1);
        assert_eq!(chart.y_axes().len(), 2);
    }

    #[test]
    fn clear_series_empties_collection() {
        let mut chart = Chart::new().with_series(Series::line()).with_series(Series::pie());
        assert_eq!(chart.series().len(), 2);
        chart.clear_series();
        assert!(chart.series().is_empty());
    }

    #[test]
    fn legend_defaults_to_enabled() {
        assert!(Chart::new().has_legend());
        assert!(!Chart::new().with_legend(false).has_legend());
    }
}
