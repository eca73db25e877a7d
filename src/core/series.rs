use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{Axis, AxisRef, DataPoint, Dimension, Formatter, Marker};

/// Series discriminator understood by the chart library.
///
/// Declaration order is the resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Area,
    AreaSpline,
    Bar,
    Column,
    Line,
    Pie,
    Scatter,
    Spline,
}

impl SeriesKind {
    pub const ALL: [Self; 8] = [
        Self::Area,
        Self::AreaSpline,
        Self::Bar,
        Self::Column,
        Self::Line,
        Self::Pie,
        Self::Scatter,
        Self::Spline,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::AreaSpline => "areaspline",
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Spline => "spline",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| ChartError::UnexpectedValue(format!("unknown series type `{input}`")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stacking {
    #[default]
    None,
    Normal,
    Percent,
}

/// Options of series whose first point sits at a configurable x value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sequential {
    pub point_start: f64,
}

impl Sequential {
    #[must_use]
    pub fn with_point_start(mut self, point_start: f64) -> Self {
        self.point_start = point_start;
        self
    }
}

/// Options of sequential series that may stack on top of each other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stackable {
    pub point_start: f64,
    pub stacking: Stacking,
}

impl Stackable {
    #[must_use]
    pub fn with_point_start(mut self, point_start: f64) -> Self {
        self.point_start = point_start;
        self
    }

    #[must_use]
    pub fn with_stacking(mut self, stacking: Stacking) -> Self {
        self.stacking = stacking;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieOptions {
    pub center: Option<(Dimension, Dimension)>,
    pub size: Option<Dimension>,
    pub labels_distance: f64,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            center: None,
            size: None,
            labels_distance: 30.0,
        }
    }
}

impl PieOptions {
    #[must_use]
    pub fn with_center(mut self, x: Dimension, y: Dimension) -> Self {
        self.center = Some((x, y));
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_labels_distance(mut self, distance: f64) -> Self {
        self.labels_distance = distance;
        self
    }
}

/// Base variant of a series together with its variant-specific options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeriesVariant {
    Area(Stackable),
    AreaSpline(Stackable),
    Bar(Stackable),
    Column(Stackable),
    Line(Sequential),
    Pie(PieOptions),
    Scatter,
    Spline(Sequential),
}

impl SeriesVariant {
    /// Variant with default options for `kind`.
    #[must_use]
    pub fn from_kind(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Area => Self::Area(Stackable::default()),
            SeriesKind::AreaSpline => Self::AreaSpline(Stackable::default()),
            SeriesKind::Bar => Self::Bar(Stackable::default()),
            SeriesKind::Column => Self::Column(Stackable::default()),
            SeriesKind::Line => Self::Line(Sequential::default()),
            SeriesKind::Pie => Self::Pie(PieOptions::default()),
            SeriesKind::Scatter => Self::Scatter,
            SeriesKind::Spline => Self::Spline(Sequential::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Area(_) => SeriesKind::Area,
            Self::AreaSpline(_) => SeriesKind::AreaSpline,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Column(_) => SeriesKind::Column,
            Self::Line(_) => SeriesKind::Line,
            Self::Pie(_) => SeriesKind::Pie,
            Self::Scatter => SeriesKind::Scatter,
            Self::Spline(_) => SeriesKind::Spline,
        }
    }

    /// Returns the first point x value for sequential variants.
    #[must_use]
    pub fn point_start(&self) -> Option<f64> {
        match self {
            Self::Area(options)
            | Self::AreaSpline(options)
            | Self::Bar(options)
            | Self::Column(options) => Some(options.point_start),
            Self::Line(options) | Self::Spline(options) => Some(options.point_start),
            Self::Pie(_) | Self::Scatter => None,
        }
    }

    /// Returns the stacking mode for stackable variants.
    #[must_use]
    pub fn stacking(&self) -> Option<Stacking> {
        match self {
            Self::Area(options)
            | Self::AreaSpline(options)
            | Self::Bar(options)
            | Self::Column(options) => Some(options.stacking),
            _ => None,
        }
    }

    #[must_use]
    pub fn pie(&self) -> Option<&PieOptions> {
        match self {
            Self::Pie(options) => Some(options),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub variant: SeriesVariant,
    pub name: Option<String>,
    pub color: Option<String>,
    pub x_axis: Option<AxisRef>,
    pub y_axis: Option<AxisRef>,
    pub data: Vec<DataPoint>,
    pub labels_formatter: Option<Formatter>,
    pub marker: Marker,
    pub enable_mouse_tracking: bool,
}

impl Series {
    #[must_use]
    pub fn new(variant: SeriesVariant) -> Self {
        Self {
            variant,
            name: None,
            color: None,
            x_axis: None,
            y_axis: None,
            data: Vec::new(),
            labels_formatter: None,
            marker: Marker::default(),
            enable_mouse_tracking: true,
        }
    }

    #[must_use]
    pub fn of_kind(kind: SeriesKind) -> Self {
        Self::new(SeriesVariant::from_kind(kind))
    }

    #[must_use]
    pub fn area() -> Self {
        Self::of_kind(SeriesKind::Area)
    }

    #[must_use]
    pub fn area_spline() -> Self {
        Self::of_kind(SeriesKind::AreaSpline)
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::of_kind(SeriesKind::Bar)
    }

    #[must_use]
    pub fn column() -> Self {
        Self::of_kind(SeriesKind::Column)
    }

    #[must_use]
    pub fn line() -> Self {
        Self::of_kind(SeriesKind::Line)
    }

    #[must_use]
    pub fn pie() -> Self {
        Self::of_kind(SeriesKind::Pie)
    }

    #[must_use]
    pub fn scatter() -> Self {
        Self::of_kind(SeriesKind::Scatter)
    }

    #[must_use]
    pub fn spline() -> Self {
        Self::of_kind(SeriesKind::Spline)
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.variant.kind()
    }

    #[must_use]
    pub fn with_variant(mut self, variant: SeriesVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: &Axis) -> Self {
        self.x_axis = Some(axis.reference());
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: &Axis) -> Self {
        self.y_axis = Some(axis.reference());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl IntoIterator<Item = DataPoint>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    pub fn push_point(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    #[must_use]
    pub fn with_labels_formatter(mut self, formatter: Formatter) -> Self {
        self.labels_formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_mouse_tracking(mut self, enabled: bool) -> Self {
        self.enable_mouse_tracking = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{SeriesKind, SeriesVariant, Stacking};
    use crate::error::ChartError;

    #[test]
    fn kind_parses_every_discriminator() {
        for kind in SeriesKind::ALL {
            assert_eq!(kind.as_str().parse::<SeriesKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_discriminator_is_unexpected_value() {
        let err = "candlestick".parse::<SeriesKind>().expect_err("must fail");
        assert!(matches!(err, ChartError::UnexpectedValue(_)));
    }

    #[test]
    fn capabilities_follow_variant() {
        let line = SeriesVariant::from_kind(SeriesKind::Line);
        assert_eq!(line.point_start(), Some(0.0));
        assert_eq!(line.stacking(), None);

        let column = SeriesVariant::from_kind(SeriesKind::Column);
        assert_eq!(column.stacking(), Some(Stacking::None));

        let scatter = SeriesVariant::from_kind(SeriesKind::Scatter);
        assert_eq!(scatter.point_start(), None);
        assert!(scatter.pie().is_none());

        let pie = SeriesVariant::from_kind(SeriesKind::Pie);
        assert_eq!(pie.pie().map(|options| options.labels_distance), Some(30.0));
    }

    #[test]
    fn kind_order_matches_resolution_priority() {
        let mut sorted = SeriesKind::ALL;
        sorted.sort();
        assert_eq!(sorted, SeriesKind::ALL);
    }
}
