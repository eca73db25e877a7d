use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Shape of the instantiation script emitted by [`super::HighchartsRenderer`].
///
/// This type is serializable so host applications can keep renderer setup in
/// their own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default = "default_constructor")]
    pub constructor: String,
    #[serde(default = "default_options_suffix")]
    pub options_suffix: String,
    #[serde(default = "default_line_ending")]
    pub line_ending: String,
    #[serde(default)]
    pub pretty: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            constructor: default_constructor(),
            options_suffix: default_options_suffix(),
            line_ending: default_line_ending(),
            pretty: false,
        }
    }
}

impl RendererConfig {
    /// Sets the constructor expression used in `new <constructor>(...)`.
    #[must_use]
    pub fn with_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructor = constructor.into();
        self
    }

    #[must_use]
    pub fn with_options_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.options_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (&self.constructor, "constructor"),
            (&self.options_suffix, "options_suffix"),
        ] {
            if value.trim().is_empty() {
                return Err(ChartError::InvalidArgument(format!(
                    "renderer config `{name}` must not be empty"
                )));
            }
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to parse renderer config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to serialize renderer config: {e}"))
        })
    }
}

fn default_constructor() -> String {
    "Highcharts.Chart".to_owned()
}

fn default_options_suffix() -> String {
    "_options".to_owned()
}

fn default_line_ending() -> String {
    "\n".to_owned()
}
