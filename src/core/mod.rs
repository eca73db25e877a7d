pub mod axis;
pub mod chart;
pub mod data_point;
pub mod marker;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisId, AxisLabels, AxisOrientation, AxisRef, AxisTitle};
pub use chart::{Chart, Tooltip};
pub use data_point::DataPoint;
pub use marker::Marker;
pub use series::{
    PieOptions, Sequential, Series, SeriesKind, SeriesVariant, Stackable, Stacking,
};
pub use types::{Dimension, Formatter, LabelAlign, StyleMap};
