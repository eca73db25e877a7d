use serde::{Deserialize, Serialize};

/// Point marker drawn on line-like series.
///
/// When disabled, every other field is ignored by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub enabled: bool,
    pub fill_color: Option<String>,
    pub line_color: Option<String>,
    pub line_width: Option<f64>,
    pub radius: Option<f64>,
    pub symbol: Option<String>,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            enabled: true,
            fill_color: None,
            line_color: None,
            line_width: Some(0.0),
            radius: Some(4.0),
            symbol: None,
        }
    }
}

impl Marker {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the symbol name (`circle`, `square`, `diamond`, `triangle`,
    /// `triangle-down` or a `url(...)` image).
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}
