mod container;
mod highcharts;
mod options_builder;
mod renderer_config;
mod value;

pub use container::{AttributeValue, ContainerAttributes, DEFAULT_CONTAINER_ELEMENT};
pub use highcharts::HighchartsRenderer;
pub use renderer_config::RendererConfig;
pub use value::{OptionMap, OptionValue};

use crate::core::Chart;
use crate::error::ChartResult;

/// Contract implemented by any chart library backend.
///
/// Backends turn a fully built [`Chart`] into the markup and script a page
/// needs to display it. Rendering never mutates the chart.
pub trait Renderer {
    /// Renders the empty container element, carrying the chart id.
    ///
    /// Fails with `InvalidArgument` when `attributes` tries to set `id`.
    fn render_container_with(
        &self,
        chart: &Chart,
        element: &str,
        attributes: &ContainerAttributes,
    ) -> ChartResult<String>;

    /// Renders a plain `<div>` container.
    fn render_container(&self, chart: &Chart) -> ChartResult<String> {
        self.render_container_with(
            chart,
            DEFAULT_CONTAINER_ELEMENT,
            &ContainerAttributes::new(),
        )
    }

    /// Renders the options assignment followed by the chart construction.
    fn render(&self, chart: &Chart) -> ChartResult<String>;
}
