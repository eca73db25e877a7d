use tracing::debug;

use crate::core::Chart;
use crate::error::ChartResult;

use super::container::render_container_markup;
use super::options_builder::build_chart_options;
use super::{ContainerAttributes, OptionValue, Renderer, RendererConfig};

/// Renders charts for the Highcharts JavaScript library.
///
/// The renderer is stateless between calls; the same instance may render any
/// number of charts, from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighchartsRenderer {
    config: RendererConfig,
}

impl HighchartsRenderer {
    pub fn new(config: RendererConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Returns the configuration tree before encoding.
    pub fn render_options(&self, chart: &Chart) -> ChartResult<OptionValue> {
        build_chart_options(chart)
    }
}

impl Renderer for HighchartsRenderer {
    fn render_container_with(
        &self,
        chart: &Chart,
        element: &str,
        attributes: &ContainerAttributes,
    ) -> ChartResult<String> {
        render_container_markup(chart, element, attributes)
    }

    fn render(&self, chart: &Chart) -> ChartResult<String> {
        let options = self.render_options(chart)?.encode(self.config.pretty);
        let id = chart.id();
        let suffix = &self.config.options_suffix;
        let script = format!(
            "{id}{suffix} = {options};{line_ending}{id} = new {constructor}({id}{suffix});",
            line_ending = self.config.line_ending,
            constructor = self.config.constructor,
        );
        debug!(chart_id = id, bytes = script.len(), "rendered chart script");
        Ok(script)
    }
}
