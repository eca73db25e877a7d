//! highcharts-rs: type-safe chart builders rendered to Highcharts options.
//!
//! Build a [`core::Chart`] from axes, series and data points, then hand it to
//! a [`render::Renderer`] to obtain the container markup and the script that
//! instantiates the chart in the browser.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::core::{Axis, Chart, DataPoint, Series};
pub use error::{ChartError, ChartResult};
pub use render::{HighchartsRenderer, Renderer, RendererConfig};
