use serde::{Deserialize, Serialize};

/// Single sample of a series.
///
/// `y` is mandatory; `name` and `x` are optional. Pie slices additionally
/// carry a `sliced` flag, which is only present on points built with
/// [`DataPoint::slice`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: f64,
    pub sliced: Option<bool>,
}

impl DataPoint {
    #[must_use]
    pub fn new(y: f64) -> Self {
        Self {
            name: None,
            x: None,
            y,
            sliced: None,
        }
    }

    /// Creates a pie slice value.
    #[must_use]
    pub fn slice(y: f64, sliced: bool) -> Self {
        Self {
            sliced: Some(sliced),
            ..Self::new(y)
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    #[must_use]
    pub fn is_pie_slice(&self) -> bool {
        self.sliced.is_some()
    }
}
