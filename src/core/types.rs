use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// CSS-like style declarations keyed by property name, in insertion order.
pub type StyleMap = IndexMap<String, String>;

/// Caller-supplied JavaScript expression handed to the chart library verbatim.
///
/// Formatters are never quoted or escaped when the configuration is encoded,
/// so `Formatter::new("function () { return this.y; }")` reaches the browser
/// as a callable function rather than a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formatter(String);

impl Formatter {
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric size or coordinate that is either absolute pixels or a
/// percentage of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub percentage: bool,
}

impl Dimension {
    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self {
            value,
            percentage: false,
        }
    }

    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            percentage: true,
        }
    }
}

/// Horizontal alignment of axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    Left,
    Center,
    Right,
}

impl LabelAlign {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}
